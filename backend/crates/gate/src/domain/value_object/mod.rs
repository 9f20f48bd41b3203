//! Value Object Module

pub mod client_env;
pub mod notice;
pub mod route;
pub mod session_key;
