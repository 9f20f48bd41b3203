//! Fallback Error Page
//!
//! 想定外の失敗時に返す最小限の HTML ページ。
//! セッション状態には一切依存しません。

use super::app_error::AppError;
use super::kind::ErrorKind;

/// Title shown for every fallback page.
pub const FALLBACK_TITLE: &str = "Oops!";

/// Heading text for a given error.
///
/// * 404 は Not Found ページ
/// * 5xx は詳細を隠して "Unknown Error"
/// * その他 4xx は理由フレーズとメッセージ
pub fn fallback_heading(err: &AppError) -> String {
    match err.kind() {
        ErrorKind::NotFound => "404 | This page could not be found.".to_string(),
        kind if kind.is_server_error() => "Unknown Error".to_string(),
        kind => format!("{} | {}", kind.status_code(), err.message()),
    }
}

/// Render the full fallback document.
pub fn render_fallback_page(err: &AppError) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\"/>\n<title>{}</title>\n</head>\n<body>\n<h1>{}</h1>\n</body>\n</html>\n",
        FALLBACK_TITLE,
        escape_text(&fallback_heading(err)),
    )
}

/// Minimal text escaping for content placed between tags.
pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
