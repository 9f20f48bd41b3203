//! Application Layer
//!
//! Use cases and application services.

pub mod auth_notice;
pub mod config;
pub mod guard;

// Re-exports
pub use auth_notice::{AuthNoticeOutput, AuthNoticeUseCase};
pub use config::GateConfig;
pub use guard::NavigationGuardUseCase;
