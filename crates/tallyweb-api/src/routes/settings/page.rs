//! Settings page rendering - Full page endpoints

use tallyweb_config::LedgerMode;
use tallyweb_utils::escape_html;

use crate::AppState;

pub async fn page_settings(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    let config = &state.config;
    let cookie_id = crate::session_id_from_headers(&headers, &config.session.cookie_name);
    let (active_sessions, session_started) = {
        let sessions = state.sessions.read().await;
        let started = cookie_id
            .as_deref()
            .and_then(|id| sessions.get(id))
            .map(|session| session.created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string());
        (sessions.len(), started)
    };

    let mode_label = match config.ledger.mode {
        LedgerMode::Totals => "累積總額",
        LedgerMode::Log => "逐筆記錄",
    };

    let inner_content = format!(
        r#"<div class='mb-6'><h2 class='text-2xl font-bold'>設定</h2></div>
        <div class='bg-white rounded-xl shadow-sm p-6 mb-6'>
            <h3 class='text-lg font-semibold mb-4'>伺服器設定</h3>
            <div class='grid grid-cols-2 gap-4 mb-4'>
                <div><p class='text-sm text-gray-500'>主機位址</p><p class='font-medium'>{}</p></div>
                <div><p class='text-sm text-gray-500'>連接埠</p><p class='font-medium'>{}</p></div>
            </div>
        </div>
        <div class='bg-white rounded-xl shadow-sm p-6 mb-6'>
            <h3 class='text-lg font-semibold mb-4'>帳本設定</h3>
            <div class='grid grid-cols-2 gap-4 mb-4'>
                <div><p class='text-sm text-gray-500'>記錄方式</p><p class='font-medium'>{} ({})</p></div>
                <div><p class='text-sm text-gray-500'>商品編號範圍</p><p class='font-medium'>0 - 99</p></div>
            </div>
        </div>
        <div class='bg-white rounded-xl shadow-sm p-6 mb-6'>
            <h3 class='text-lg font-semibold mb-4'>工作階段</h3>
            <div class='grid grid-cols-2 gap-4 mb-4'>
                <div><p class='text-sm text-gray-500'>Cookie 名稱</p><p class='font-medium'>{}</p></div>
                <div><p class='text-sm text-gray-500'>閒置逾時</p><p class='font-medium'>{} 分鐘</p></div>
                <div><p class='text-sm text-gray-500'>工作階段上限</p><p class='font-medium'>{}</p></div>
                <div><p class='text-sm text-gray-500'>目前工作階段數</p><p class='font-medium'>{}</p></div>
                <div><p class='text-sm text-gray-500'>本次工作階段開始於</p><p class='font-medium'>{}</p></div>
            </div>
        </div>
        <div class='bg-white rounded-xl shadow-sm p-6'>
            <h3 class='text-lg font-semibold mb-4'>金額格式</h3>
            <div class='grid grid-cols-2 gap-4 mb-4'>
                <div><p class='text-sm text-gray-500'>貨幣符號</p><p class='font-medium'>{}</p></div>
                <div><p class='text-sm text-gray-500'>千分位符號</p><p class='font-medium'>{}</p></div>
            </div>
        </div>"#,
        escape_html(&config.server.host),
        config.server.port,
        mode_label,
        config.ledger.mode,
        escape_html(&config.session.cookie_name),
        config.session.idle_timeout_minutes,
        config.session.max_sessions,
        active_sessions,
        session_started.as_deref().unwrap_or("尚未開始"),
        escape_html(&config.currency.symbol),
        escape_html(&config.currency.thousands_separator),
    );

    axum::response::Html(crate::page_response(&headers, "設定", "/settings", &inner_content))
}
