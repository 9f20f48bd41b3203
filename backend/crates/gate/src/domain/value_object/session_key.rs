use serde::{Deserialize, Serialize};
use std::fmt;

/// Keys stored inside the session cookie.
///
/// The string forms are the keys used on the wire and must stay stable:
/// changing one silently logs every client out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SessionKey {
    /// Credential marker set by the sign-in flow
    #[serde(rename = "X-Auth")]
    Credential,
    /// Opaque token presented to the validator
    #[serde(rename = "X-Session")]
    SessionToken,
    /// Account marker set by the account-linking flow
    #[serde(rename = "X-UserAccount")]
    UserAccount,
    #[serde(rename = "X-Board")]
    Board,
    #[serde(rename = "X-Perm")]
    Permission,
    /// One-shot message for the auth landing page
    #[serde(rename = "error")]
    PendingError,
}

impl SessionKey {
    pub const ALL: [SessionKey; 6] = [
        SessionKey::Credential,
        SessionKey::SessionToken,
        SessionKey::UserAccount,
        SessionKey::Board,
        SessionKey::Permission,
        SessionKey::PendingError,
    ];

    /// Keys removed together when a session is invalidated
    pub const AUTH_STATE: [SessionKey; 5] = [
        SessionKey::Credential,
        SessionKey::SessionToken,
        SessionKey::UserAccount,
        SessionKey::Board,
        SessionKey::Permission,
    ];

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        use SessionKey::*;
        match self {
            Credential => "X-Auth",
            SessionToken => "X-Session",
            UserAccount => "X-UserAccount",
            Board => "X-Board",
            Permission => "X-Perm",
            PendingError => "error",
        }
    }

    pub fn from_wire(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }

    #[inline]
    pub const fn is_auth_state(&self) -> bool {
        !matches!(self, SessionKey::PendingError)
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_match_serde() {
        for key in SessionKey::ALL {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
            assert_eq!(SessionKey::from_wire(key.as_str()), Some(key));
        }
        assert_eq!(SessionKey::from_wire("X-Unknown"), None);
    }

    #[test]
    fn test_auth_state_excludes_pending_error() {
        assert!(SessionKey::AUTH_STATE.iter().all(SessionKey::is_auth_state));
        assert!(!SessionKey::PendingError.is_auth_state());
    }
}
