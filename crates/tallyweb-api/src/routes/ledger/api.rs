//! Ledger form endpoints - HTMX partials
//!
//! Endpoints:
//! - htmx_transaction_store: Record a submission, return notice + summary
//! - htmx_ledger_summary: Current summary only
//! - htmx_ledger_reset: Start the session over with an empty ledger

use axum::response::{Html, IntoResponse, Response};
use tallyweb_core::{record_submission, Ledger, Notice, NoticeLevel, TransactionForm};

use super::page::{render_page_content, render_results, render_summary};
use crate::AppState;

/// Record a transaction from the form and re-render the results
pub async fn htmx_transaction_store(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
    body: String,
) -> impl IntoResponse {
    let params = crate::parse_form_body(&body);
    let form = TransactionForm::new(
        params.get("item_number").cloned().unwrap_or_default(),
        params.get("amount").cloned().unwrap_or_default(),
    );

    let cookie_id = crate::session_id_from_headers(&headers, &state.config.session.cookie_name);
    let (session_id, notice, summary) = {
        let mut sessions = state.sessions.write().await;
        let session = sessions.session(cookie_id.as_deref());
        let notice = record_submission(&mut session.ledger, &form);
        (session.id.clone(), notice, session.ledger.summary())
    };

    let currency = &state.config.currency;
    let html = if crate::is_htmx_request(&headers) {
        render_results(currency, Some(&notice), &summary)
    } else {
        let inner_content = render_page_content(currency, Some(&notice), &summary);
        crate::page_response(&headers, "記帳", "/", &inner_content)
    };

    (crate::session_cookie(&state.config, &session_id), Html(html))
}

/// Current summary for the session
///
/// Browsers without a live session see an empty summary; no session is
/// created for them.
pub async fn htmx_ledger_summary(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> Response {
    let cookie_id = crate::session_id_from_headers(&headers, &state.config.session.cookie_name);
    let current = {
        let mut sessions = state.sessions.write().await;
        sessions
            .existing(cookie_id.as_deref())
            .map(|session| (session.id.clone(), session.ledger.summary()))
    };

    let currency = &state.config.currency;
    match current {
        Some((session_id, summary)) => (
            crate::session_cookie(&state.config, &session_id),
            Html(render_summary(currency, &summary)),
        )
            .into_response(),
        None => {
            let summary = Ledger::new(state.config.ledger.mode).summary();
            Html(render_summary(currency, &summary)).into_response()
        }
    }
}

/// Discard the session's ledger
///
/// An expired or unknown session is replaced by a fresh one.
pub async fn htmx_ledger_reset(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> impl IntoResponse {
    let cookie_id = crate::session_id_from_headers(&headers, &state.config.session.cookie_name);
    let (session_id, summary) = {
        let mut sessions = state.sessions.write().await;
        let session = sessions.reset(cookie_id.as_deref());
        (session.id.clone(), session.ledger.summary())
    };

    let notice = Notice::new(NoticeLevel::Info, "已清除本次的所有交易記錄。");
    let currency = &state.config.currency;
    let html = if crate::is_htmx_request(&headers) {
        render_results(currency, Some(&notice), &summary)
    } else {
        let inner_content = render_page_content(currency, Some(&notice), &summary);
        crate::page_response(&headers, "記帳", "/", &inner_content)
    };

    (crate::session_cookie(&state.config, &session_id), Html(html))
}
