//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Environment-driven configuration helpers
//! - Cookie attribute building and header parsing
//! - Cryptographic utilities (HMAC-SHA256 signing, Base64url)
//! - Bounded-timeout HTTP client construction
//! - Rich-text (TipTap / ProseMirror JSON) plain-text extraction

pub mod config;
pub mod cookie;
pub mod crypto;
pub mod http_client;
pub mod rich_text;
