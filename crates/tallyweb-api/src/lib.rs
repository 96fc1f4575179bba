//! HTTP server with HTMX support
//!
//! Routes are organized into modules:
//! - routes::ledger: Transaction form, summary, session reset
//! - routes::settings: Configuration display

pub mod error;
pub mod routes;

use axum::{
    http::{header, HeaderMap},
    routing::{get, post},
    Router,
};
use std::collections::HashMap;
use std::sync::Arc;
use tallyweb_config::Config;
use tallyweb_core::SessionStore;
use tokio::net::TcpListener;
use tokio::sync::RwLock;

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<RwLock<SessionStore>>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(SessionStore::from_config(&config))),
            config,
        }
    }
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::ledger::{htmx_ledger_reset, htmx_ledger_summary, htmx_transaction_store, page_ledger};
    use routes::settings::page_settings;

    Router::new()
        // API endpoints
        .route("/api/health", get(health_check))
        // HTMX page routes
        .route("/", get(page_ledger))
        .route("/settings", get(page_settings))
        // HTMX partial routes
        .route("/ledger/summary", get(htmx_ledger_summary))
        .route("/ledger/transactions", post(htmx_transaction_store))
        .route("/ledger/reset", post(htmx_ledger_reset))
        .fallback(not_found)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

async fn not_found(uri: axum::http::Uri) -> ApiError {
    ApiError::NotFound {
        resource: uri.path().to_string(),
    }
}

// ==================== Template Functions ====================

/// Base HTML template
pub fn base_html(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="zh-Hant">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - Tallyweb</title>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <script src="https://cdn.tailwindcss.com"></script>
    <style>
        .htmx-indicator {{ opacity: 0; transition: opacity 0.3s; }}
        .htmx-request .htmx-indicator {{ opacity: 1; }}
        .htmx-request.htmx-indicator {{ opacity: 1; }}
    </style>
</head>
<body class="bg-gray-50 text-gray-900">
    {}
</body>
</html>"#,
        tallyweb_utils::escape_html(title),
        content
    )
}

/// Navigation sidebar
pub fn nav_sidebar(current_path: &str) -> String {
    let links = [("/", "記帳", "📊"), ("/settings", "設定", "⚙️")];

    let mut nav = String::from("<div class='bg-white border-r h-screen flex flex-col'><div class='p-4 border-b'><h1 class='text-xl font-bold text-indigo-600'>Tallyweb</h1></div><ul class='flex-1 py-2 space-y-1 px-2'>");

    for (path, label, icon) in &links {
        let is_active = if *path == "/" {
            current_path == "/"
        } else {
            current_path.starts_with(path)
        };
        let active_class = if is_active { "bg-indigo-50 text-indigo-600" } else { "text-gray-600 hover:bg-gray-50" };
        nav.push_str(&format!(
            r#"<li><a href='{}' class='flex items-center gap-2 px-3 py-2 rounded-lg {}'>{}<span>{}</span></a></li>"#,
            path, active_class, icon, label
        ));
    }
    nav.push_str("</ul></div>");
    nav
}

/// Check if request is from HTMX (partial page update)
pub fn is_htmx_request(headers: &HeaderMap) -> bool {
    headers.get("hx-request").is_some()
}

/// Wrap content for full page or HTMX partial
pub fn page_response(headers: &HeaderMap, title: &str, current_path: &str, inner_content: &str) -> String {
    if is_htmx_request(headers) {
        inner_content.to_string()
    } else {
        base_html(title, &format!(r#"<div class='flex flex-col h-screen'>
    <div class='flex flex-1 overflow-hidden'>
        <aside class='w-64 flex-shrink-0'>{}</aside>
        <main class='flex-1 overflow-auto bg-gray-50 p-6'>{}</main>
    </div>
</div>"#,
            nav_sidebar(current_path), inner_content))
    }
}

// ==================== Request Helpers ====================

/// Decode an `application/x-www-form-urlencoded` body
pub fn parse_form_body(body: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    for pair in body.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = urlencoding::decode(&key.replace('+', " ")).map(|k| k.into_owned());
        let value = urlencoding::decode(&value.replace('+', " ")).map(|v| v.into_owned());
        if let (Ok(key), Ok(value)) = (key, value) {
            params.insert(key, value);
        }
    }
    params
}

/// Session id carried by the request's cookie, if any
pub fn session_id_from_headers(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == cookie_name)
        .map(|(_, id)| id.to_string())
        .filter(|id| !id.is_empty())
}

/// `Set-Cookie` header binding the browser to a session.
///
/// No expiry is set, so the cookie ends with the browser session.
pub fn session_cookie(config: &Config, session_id: &str) -> [(header::HeaderName, String); 1] {
    [(
        header::SET_COOKIE,
        format!("{}={}; Path=/; HttpOnly; SameSite=Lax", config.session.cookie_name, session_id),
    )]
}

// ==================== Server ====================

/// Start the HTTP server
///
/// Creates the router, binds to the configured address and serves until
/// Ctrl-C is received.
pub async fn start_server(config: Config) -> std::io::Result<()> {
    let addr = config.bind_address();
    let state = AppState::new(config);
    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    log::info!("Starting Tallyweb server on http://{}", addr);
    log::info!("Available routes:");
    log::info!("  - / (Ledger form and summary)");
    log::info!("  - /settings (Configuration)");
    log::info!("  - /api/health (Health check)");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    log::info!("Server stopped gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
    }
}

// ==================== Tests ====================
