//! Error types for tallyweb-api

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {resource}")]
    NotFound { resource: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::warn!("{} ({})", self, self.status());
        let body = match &self {
            ApiError::NotFound { resource } => format!(
                r#"<div class='bg-red-50 border border-red-200 rounded-lg p-4'><span class='font-medium text-red-800'>找不到頁面: {}</span> <a href='/' class='text-indigo-600 hover:underline'>返回首頁</a></div>"#,
                tallyweb_utils::escape_html(resource)
            ),
        };
        (self.status(), Html(body)).into_response()
    }
}
