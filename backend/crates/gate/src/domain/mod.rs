//! Domain Layer
//!
//! Contains the session record, value objects, the guard decision type and the
//! validator port.

pub mod decision;
pub mod entity;
pub mod validator;
pub mod value_object;

// Re-exports
pub use decision::{GuardDecision, RenderContext};
pub use entity::session_record::SessionRecord;
pub use validator::{SessionValidator, ValidationRequest};
