//! Gate - Session-gated Navigation
//!
//! Clean Architecture structure:
//! - `domain/` - Session record, route classification, guard decision, validator trait
//! - `application/` - Guard and auth-notice use cases, configuration
//! - `infra/` - Signed cookie session store, remote HTTP validator
//! - `presentation/` - Guard middleware, page handlers, DTOs, router
//!
//! ## Request Flow
//! Every page request loads the signed session cookie, the guard decides
//! between rendering and redirecting (revalidating the session remotely when a
//! credential is present), and any session mutation is committed on the same
//! response that carries the decision.
//!
//! ## Failure Policy
//! - Missing, tampered or unparsable cookies are anonymous sessions
//! - Any validator failure (transport, status, body, timeout) is an invalid session
//! - Only cookie encoding failures reach the fallback error page

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::GateConfig;
pub use domain::validator::SessionValidator;
pub use error::{GateError, GateResult};
pub use infra::cookie_store::CookieSessionStore;
pub use infra::http_validator::HttpSessionValidator;
pub use presentation::router::gate_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::AppError,
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
