//! Guard Decision
//!
//! The guard never signals a redirect by unwinding; every outcome is one of
//! these values and the request handler consumes them uniformly.

use crate::domain::entity::session_record::SessionRecord;
use crate::domain::value_object::client_env::ClientEnv;
use crate::domain::value_object::route::RedirectTarget;

/// Request-scoped context handed to page handlers when the guard lets a request through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    pub env: ClientEnv,
    /// True only when the remote validator confirmed the session
    pub authenticated: bool,
    pub auth_route: bool,
    /// The record as loaded for this request (unchanged by the guard)
    pub session: SessionRecord,
}

impl RenderContext {
    /// Navigation chrome is hidden inside the authentication flow
    #[inline]
    pub fn show_chrome(&self) -> bool {
        !self.auth_route
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Render(RenderContext),
    Redirect {
        target: RedirectTarget,
        /// Record that must be committed on the redirect response
        commit: Option<SessionRecord>,
    },
}

impl GuardDecision {
    pub fn redirect(target: RedirectTarget) -> Self {
        GuardDecision::Redirect {
            target,
            commit: None,
        }
    }

    pub fn is_render(&self) -> bool {
        matches!(self, GuardDecision::Render(_))
    }

    pub fn redirect_target(&self) -> Option<RedirectTarget> {
        match self {
            GuardDecision::Redirect { target, .. } => Some(*target),
            GuardDecision::Render(_) => None,
        }
    }
}
