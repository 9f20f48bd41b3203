//! Presentation Layer
//!
//! Guard middleware, page handlers, DTOs, shell rendering and router.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod page;
pub mod router;

pub use handlers::GateState;
pub use middleware::navigation_guard;
pub use router::gate_router;
