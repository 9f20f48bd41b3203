//! Shell Page Rendering
//!
//! The server renders only the document shell; components, theming, toasts and
//! the command palette live in the client bundle.

use kernel::error::page::escape_text;
use serde::Serialize;

use crate::domain::decision::RenderContext;
use crate::domain::value_object::notice::Notice;
use crate::error::GateResult;
use crate::presentation::dto::ShellData;

pub const APP_TITLE: &str = "Reach";
pub const AUTH_TITLE: &str = "Authentication";
pub const CLIENT_BUNDLE: &str = "/build/entry.client.js";

/// Serialize a value for embedding inside an inline `<script>`.
///
/// `<`, `>` and `&` are escaped so the payload can never close the script
/// element; U+2028/U+2029 are escaped for pre-ES2019 parsers.
pub fn script_json<T: Serialize>(value: &T) -> GateResult<String> {
    let json = serde_json::to_string(value)?;
    Ok(json
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029"))
}

/// Render the HTML shell for a page the guard let through.
pub fn render_shell(ctx: &RenderContext, notice: Option<&Notice>) -> GateResult<String> {
    let title = if ctx.auth_route { AUTH_TITLE } else { APP_TITLE };
    let env = script_json(&ctx.env)?;
    let auth = script_json(&ShellData::new(&ctx.env, ctx.authenticated).auth)?;

    let mut html = String::with_capacity(1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\" class=\"dark\" id=\"html\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\"/>\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width,initial-scale=1\"/>\n");
    html.push_str(&format!("<title>{}</title>\n", escape_text(title)));
    html.push_str("</head>\n<body>\n");

    if ctx.show_chrome() {
        html.push_str("<header id=\"main-nav\" class=\"border-b sticky top-0 z-10\"></header>\n");
    }
    html.push_str("<main id=\"outlet\"></main>\n");
    html.push_str("<div id=\"toaster\"></div>\n");

    if let Some(notice) = notice {
        html.push_str(&format!(
            "<script>window.__NOTICE__ = {};</script>\n",
            script_json(notice)?
        ));
    }
    html.push_str(&format!(
        "<script>window.ENV = {env};\nwindow.__AUTH__ = {auth};</script>\n"
    ));
    html.push_str(&format!(
        "<script type=\"module\" src=\"{CLIENT_BUNDLE}\"></script>\n"
    ));
    html.push_str("</body>\n</html>\n");

    Ok(html)
}
