//! Ledger page rendering
//!
//! Endpoints:
//! - page_ledger: Form, help card and summary on one page
//!
//! Helper functions:
//! - render_form: Transaction input form
//! - render_results: Notice plus summary (the HTMX swap target)
//! - render_summary: Table of touched items and grand total
//! - render_notice: One-line outcome of a submission

use axum::response::{Html, IntoResponse, Response};
use tallyweb_config::{CurrencyConfig, LedgerMode};
use tallyweb_core::{Ledger, LedgerSummary, Notice, NoticeLevel};
use tallyweb_utils::escape_html;

use crate::AppState;

pub const PAGE_TITLE: &str = "商品金額整合計算器 (Web App)";

/// Ledger page - form, help and current summary
///
/// The session is only created by the first submission, so visits without
/// one render an empty ledger and set no cookie.
pub async fn page_ledger(
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

    let summary = match &current {
        Some((_, summary)) => summary.clone(),
        None => Ledger::new(state.config.ledger.mode).summary(),
    };
    let inner_content = render_page_content(&state.config.currency, None, &summary);
    let html = Html(crate::page_response(&headers, "記帳", "/", &inner_content));

    match current {
        Some((session_id, _)) => (crate::session_cookie(&state.config, &session_id), html).into_response(),
        None => html.into_response(),
    }
}

/// Page body shared by the GET handler and non-HTMX form posts
pub fn render_page_content(currency: &CurrencyConfig, notice: Option<&Notice>, summary: &LedgerSummary) -> String {
    format!(
        r#"<div class='mb-6'>
            <h2 class='text-2xl font-bold'>{}</h2>
            <p class='text-sm text-gray-500 mt-1'>輸入商品編號 (0-99) 和交易金額，系統會自動加總。</p>
        </div>
        <div class='grid grid-cols-1 lg:grid-cols-3 gap-6'>
            <div class='lg:col-span-2 space-y-6'>
                <div class='bg-white rounded-xl shadow-sm p-6'>{}</div>
                <div id='ledger-results' class='space-y-4'>{}</div>
            </div>
            <div>{}</div>
        </div>"#,
        PAGE_TITLE,
        render_form(),
        render_results(currency, notice, summary),
        render_help(summary.mode),
    )
}

/// Transaction input form
///
/// Posts via HTMX into `#ledger-results`; falls back to a normal form post
/// without JavaScript.
pub fn render_form() -> String {
    r#"<form action='/ledger/transactions' method='post'
            hx-post='/ledger/transactions' hx-target='#ledger-results' hx-swap='innerHTML'
            hx-on::after-request='if (event.detail.successful) this.reset()'
            class='space-y-4'>
            <div>
                <label for='item_number' class='block text-sm font-medium text-gray-700 mb-1'>輸入商品編號 (0 - 99):</label>
                <input type='number' id='item_number' name='item_number' min='0' max='99' step='1' value='0' required
                    class='w-full px-3 py-2 border rounded-lg'>
            </div>
            <div>
                <label for='amount' class='block text-sm font-medium text-gray-700 mb-1'>輸入交易金額 (新增:正數, 修正/刪除:負數):</label>
                <input type='number' id='amount' name='amount' step='1' value='0' required
                    class='w-full px-3 py-2 border rounded-lg'>
            </div>
            <div class='flex items-center gap-3'>
                <button type='submit' class='px-4 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700'>確認提交 (Submit)</button>
                <button type='button' hx-post='/ledger/reset' hx-target='#ledger-results' hx-swap='innerHTML'
                    hx-confirm='確定要清除本次的所有交易記錄嗎？'
                    class='px-4 py-2 border rounded-lg text-gray-600 hover:bg-gray-50'>清除記錄 (Reset)</button>
                <span class='htmx-indicator text-sm text-gray-400'>處理中...</span>
            </div>
        </form>"#
        .to_string()
}

/// Sidebar card explaining how to use the form
fn render_help(mode: LedgerMode) -> String {
    let mode_line = match mode {
        LedgerMode::Totals => "每個商品只保留累積總額。",
        LedgerMode::Log => "每個商品保留每一筆金額，並顯示為 50 + 50 - 25 的算式。",
    };
    format!(
        r#"<div class='bg-white rounded-xl shadow-sm p-6'>
            <h3 class='text-lg font-semibold mb-4'>💡 功能說明</h3>
            <ul class='space-y-2 text-sm text-gray-600 list-disc pl-5'>
                <li><b>商品編號:</b> 0 到 99 的整數。</li>
                <li><b>新增交易:</b> 輸入<b>正數</b>金額。</li>
                <li><b>修正/刪除:</b> 輸入<b>負數</b>金額，即可從總額中扣除。</li>
                <li><b>數據儲存:</b> 數據只保存在這個瀏覽器工作階段中，關閉瀏覽器後會重置。</li>
                <li><b>記錄方式:</b> {}</li>
            </ul>
        </div>"#,
        mode_line
    )
}

/// Notice plus summary - the content of `#ledger-results`
pub fn render_results(currency: &CurrencyConfig, notice: Option<&Notice>, summary: &LedgerSummary) -> String {
    let notice_html = notice.map(render_notice).unwrap_or_default();
    format!(
        "{}<hr class='my-2'><div id='ledger-summary'>{}</div>",
        notice_html,
        render_summary(currency, summary)
    )
}

/// Summary table, sorted by item number, with the grand total underneath
pub fn render_summary(currency: &CurrencyConfig, summary: &LedgerSummary) -> String {
    if summary.is_empty() {
        return render_notice(&Notice::new(NoticeLevel::Info, "目前尚無任何交易記錄。"));
    }

    let show_log = summary.mode == LedgerMode::Log;
    let log_header = if show_log {
        "<th class='px-4 py-2 text-left text-sm font-medium text-gray-500'>交易紀錄 (Log)</th>"
    } else {
        ""
    };

    let rows: Vec<String> = summary
        .rows
        .iter()
        .map(|row| {
            let log_cell = match (show_log, &row.expression) {
                (true, Some(expression)) => format!(
                    "<td class='px-4 py-2 font-mono text-sm text-gray-600'>{}</td>",
                    escape_html(expression)
                ),
                (true, None) => "<td class='px-4 py-2'></td>".to_string(),
                (false, _) => String::new(),
            };
            let total_class = if row.total < 0.0 { "text-red-600" } else { "text-gray-900" };
            format!(
                "<tr class='border-t'><td class='px-4 py-2'>{}</td>{}<td class='px-4 py-2 text-right font-medium {}'>{}</td></tr>",
                row.item,
                log_cell,
                total_class,
                escape_html(&row.display_total(currency))
            )
        })
        .collect();

    format!(
        r#"<div class='bg-white rounded-xl shadow-sm p-6'>
            <h3 class='text-lg font-semibold mb-4'>📊 當前商品總額清單</h3>
            <table class='w-full'>
                <thead><tr>
                    <th class='px-4 py-2 text-left text-sm font-medium text-gray-500'>商品編號 (Item)</th>
                    {}
                    <th class='px-4 py-2 text-right text-sm font-medium text-gray-500'>總收入 (Total)</th>
                </tr></thead>
                <tbody>{}</tbody>
            </table>
            <p class='mt-4 text-lg'><b>💰 所有商品總收入:</b> <b>{}</b></p>
        </div>"#,
        log_header,
        rows.join(""),
        escape_html(&summary.display_grand_total(currency))
    )
}

/// One-line notice box
pub fn render_notice(notice: &Notice) -> String {
    let (color, icon) = match notice.level {
        NoticeLevel::Success => ("green", "✓"),
        NoticeLevel::Info => ("blue", "ℹ"),
        NoticeLevel::Warning => ("yellow", "⚠"),
        NoticeLevel::Error => ("red", "✗"),
    };
    format!(
        r#"<div class='bg-{c}-50 border border-{c}-200 rounded-lg p-4' data-level='{}'><div class='flex items-center gap-2'><span class='text-{c}-600'>{}</span><span class='font-medium text-{c}-800'>{}</span></div></div>"#,
        notice.level,
        icon,
        escape_html(&notice.message),
        c = color
    )
}
