//! Gate Router

use crate::application::config::GateConfig;
use crate::domain::validator::SessionValidator;
use crate::infra::cookie_store::CookieSessionStore;
use crate::presentation::handlers::{self, GateState};
use crate::presentation::middleware::navigation_guard;
use axum::{Router, middleware, routing::get};
use std::sync::Arc;

/// Create the page router with every route behind the navigation guard
pub fn gate_router<V>(validator: V, config: GateConfig) -> Router
where
    V: SessionValidator + Clone + Send + Sync + 'static,
{
    let state = GateState {
        validator: Arc::new(validator),
        store: Arc::new(CookieSessionStore::new(&config)),
        config: Arc::new(config),
    };

    Router::new()
        .route("/auth", get(handlers::auth_page::<V>))
        .route("/auth/", get(handlers::auth_page::<V>))
        .route("/", get(handlers::page))
        .route("/{*path}", get(handlers::page))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            navigation_guard::<V>,
        ))
        .with_state(state)
}
