//! HTTP Handlers
//!
//! Both handlers run behind the navigation guard and receive the
//! [`RenderContext`] it produced.

use axum::extract::{Extension, State};
use axum::http::{HeaderMap, header};
use axum::response::{Html, IntoResponse, Json, Response};
use std::sync::Arc;

use crate::application::auth_notice::AuthNoticeUseCase;
use crate::application::config::GateConfig;
use crate::domain::decision::RenderContext;
use crate::domain::validator::SessionValidator;
use crate::error::GateResult;
use crate::infra::cookie_store::CookieSessionStore;
use crate::presentation::dto::{AuthPageData, ShellData};
use crate::presentation::page::render_shell;

/// Shared state for the guard and page handlers
#[derive(Clone)]
pub struct GateState<V>
where
    V: SessionValidator + Clone + Send + Sync + 'static,
{
    pub validator: Arc<V>,
    pub store: Arc<CookieSessionStore>,
    pub config: Arc<GateConfig>,
}

/// GET /auth and /auth/
///
/// Consumes the one-shot error and re-issues the cookie only when something
/// was consumed.
pub async fn auth_page<V>(
    State(state): State<GateState<V>>,
    Extension(ctx): Extension<RenderContext>,
    headers: HeaderMap,
) -> GateResult<Response>
where
    V: SessionValidator + Clone + Send + Sync + 'static,
{
    let output = AuthNoticeUseCase::execute(ctx.session.clone());

    let mut response = if wants_json(&headers) {
        Json(AuthPageData {
            shell: ShellData::new(&ctx.env, ctx.authenticated),
            error: output.notice.as_ref().map(|n| n.description.as_str()),
            notice: output.notice.as_ref(),
        })
        .into_response()
    } else {
        Html(render_shell(&ctx, output.notice.as_ref())?).into_response()
    };

    if let Some(record) = output.commit {
        let cookie = state.store.commit(&record)?;
        response.headers_mut().append(header::SET_COOKIE, cookie);
        tracing::debug!("Pending auth error consumed");
    }

    Ok(response)
}

/// GET / and every other page path
pub async fn page(
    Extension(ctx): Extension<RenderContext>,
    headers: HeaderMap,
) -> GateResult<Response> {
    if wants_json(&headers) {
        return Ok(Json(ShellData::new(&ctx.env, ctx.authenticated)).into_response());
    }
    Ok(Html(render_shell(&ctx, None)?).into_response())
}

/// Client-side navigations request page data as JSON
fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("application/json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_wants_json() {
        let mut headers = HeaderMap::new();
        assert!(!wants_json(&headers));

        headers.insert(header::ACCEPT, HeaderValue::from_static("text/html,*/*"));
        assert!(!wants_json(&headers));

        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("application/json, text/plain"),
        );
        assert!(wants_json(&headers));
    }
}
