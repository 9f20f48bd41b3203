//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" shared by every Reach crate:
//! - The unified error type and its classification
//! - The minimal fallback error page
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
    pub mod page;
}
