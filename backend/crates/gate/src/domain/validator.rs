//! Validator Port
//!
//! Interface to the remote authority that confirms a session is still live.
//! Implementation is in the infrastructure layer.

use serde::Serialize;

use crate::error::GateResult;

/// Input to one validation call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRequest<'a> {
    pub session_token: Option<&'a str>,
    pub credential_present: bool,
}

/// Session validator trait
///
/// Implementations must not cache verdicts. Errors are allowed here; the guard
/// treats every error exactly like a negative verdict.
#[trait_variant::make(SessionValidator: Send)]
pub trait LocalSessionValidator {
    /// Ask the authority whether the session is still valid
    async fn validate(&self, request: ValidationRequest<'_>) -> GateResult<bool>;
}
