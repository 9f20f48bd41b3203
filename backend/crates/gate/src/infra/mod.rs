//! Infrastructure Layer
//!
//! Cookie-backed session persistence and the remote validator client.

pub mod cookie_store;
pub mod http_validator;
