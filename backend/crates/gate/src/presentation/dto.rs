//! Page DTOs (Data Transfer Objects)
//!
//! JSON payloads injected into rendered pages, also served directly to
//! client-side navigations that ask for `application/json`.

use serde::Serialize;

use crate::domain::value_object::client_env::ClientEnv;
use crate::domain::value_object::notice::Notice;

/// Data every rendered page starts from
#[derive(Debug, Clone, Serialize)]
pub struct ShellData<'a> {
    /// `"true"` when the session was confirmed by the validator
    pub auth: &'static str,
    #[serde(rename = "ENV")]
    pub env: &'a ClientEnv,
}

impl<'a> ShellData<'a> {
    pub fn new(env: &'a ClientEnv, authenticated: bool) -> Self {
        Self {
            auth: if authenticated { "true" } else { "false" },
            env,
        }
    }
}

/// Data for the auth landing page
#[derive(Debug, Clone, Serialize)]
pub struct AuthPageData<'a> {
    #[serde(flatten)]
    pub shell: ShellData<'a>,
    /// One-shot error message, present on exactly one render
    pub error: Option<&'a str>,
    pub notice: Option<&'a Notice>,
}
