//! Route Classification

use std::fmt;

/// Path segment that marks the authentication flow
pub const AUTH_SEGMENT: &str = "auth";

/// Whether a request path belongs to the authentication flow.
///
/// Matches whole segments only: `/auth/useraccount` is an auth route,
/// `/authors` is not.
pub fn is_auth_route(path: &str) -> bool {
    path.split('/').any(|segment| segment == AUTH_SEGMENT)
}

/// Where the guard sends a caller it will not render for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    /// Anonymous or invalidated sessions
    SignIn,
    /// Credential present but no linked account
    LinkAccount,
}

impl RedirectTarget {
    #[inline]
    pub const fn path(&self) -> &'static str {
        match self {
            RedirectTarget::SignIn => "/auth",
            RedirectTarget::LinkAccount => "/auth/useraccount",
        }
    }
}

impl fmt::Display for RedirectTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_routes() {
        assert!(is_auth_route("/auth"));
        assert!(is_auth_route("/auth/"));
        assert!(is_auth_route("/auth/useraccount"));
        assert!(is_auth_route("/boards/auth"));
    }

    #[test]
    fn test_non_auth_routes() {
        assert!(!is_auth_route("/"));
        assert!(!is_auth_route("/dashboard"));
        assert!(!is_auth_route("/authors"));
        assert!(!is_auth_route("/oauth/callback"));
        assert!(!is_auth_route(""));
    }

    #[test]
    fn test_redirect_targets_are_auth_routes() {
        assert!(is_auth_route(RedirectTarget::SignIn.path()));
        assert!(is_auth_route(RedirectTarget::LinkAccount.path()));
    }
}
