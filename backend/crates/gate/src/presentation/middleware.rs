//! Navigation Guard Middleware
//!
//! Runs before every page handler. A render decision is passed downstream as a
//! request extension; a redirect decision short-circuits with `302 Found`,
//! carrying the committed session when the guard changed it.

use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::application::guard::NavigationGuardUseCase;
use crate::domain::decision::GuardDecision;
use crate::domain::entity::session_record::SessionRecord;
use crate::domain::validator::SessionValidator;
use crate::domain::value_object::route::RedirectTarget;
use crate::infra::cookie_store::CookieSessionStore;
use crate::presentation::handlers::GateState;

/// Middleware that gates every page navigation on the session
pub async fn navigation_guard<V>(
    State(state): State<GateState<V>>,
    mut req: Request,
    next: Next,
) -> Response
where
    V: SessionValidator + Clone + Send + Sync + 'static,
{
    let session = state.store.load(req.headers());
    let use_case = NavigationGuardUseCase::new(state.validator.clone(), state.config.clone());

    match use_case.decide(session, req.uri().path()).await {
        GuardDecision::Render(ctx) => {
            req.extensions_mut().insert(ctx);
            next.run(req).await
        }
        GuardDecision::Redirect { target, commit } => {
            redirect_response(&state.store, target, commit.as_ref())
        }
    }
}

/// Build the redirect, attaching `Set-Cookie` when a record must be committed
fn redirect_response(
    store: &CookieSessionStore,
    target: RedirectTarget,
    commit: Option<&SessionRecord>,
) -> Response {
    let mut response = (StatusCode::FOUND, [(header::LOCATION, target.path())]).into_response();

    if let Some(record) = commit {
        match store.commit(record) {
            Ok(cookie) => {
                response.headers_mut().append(header::SET_COOKIE, cookie);
            }
            Err(e) => return e.into_response(),
        }
    }

    response
}
