//! Session Record Entity
//!
//! The structured state carried by the signed session cookie. The record is
//! owned by exactly one request; cross-request consistency comes only from the
//! cookie round trip.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::value_object::session_key::SessionKey;

/// Session record
///
/// `set` and `unset` are pure in-memory mutations. Nothing is persisted until
/// the record is committed by the session store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, String>",
    into = "BTreeMap<String, String>"
)]
pub struct SessionRecord {
    values: BTreeMap<SessionKey, String>,
}

impl SessionRecord {
    /// Fresh record for a first visit: every field absent
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn get(&self, key: SessionKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    pub fn set(&mut self, key: SessionKey, value: impl Into<String>) {
        self.values.insert(key, value.into());
    }

    pub fn unset(&mut self, key: SessionKey) -> Option<String> {
        self.values.remove(&key)
    }

    /// Builder form of [`SessionRecord::set`]
    pub fn with(mut self, key: SessionKey, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    #[inline]
    pub fn credential_present(&self) -> bool {
        self.values.contains_key(&SessionKey::Credential)
    }

    /// An account marker without a credential never counts as linked
    #[inline]
    pub fn account_linked(&self) -> bool {
        self.credential_present() && self.values.contains_key(&SessionKey::UserAccount)
    }

    pub fn session_token(&self) -> Option<&str> {
        self.get(SessionKey::SessionToken)
    }

    pub fn pending_error(&self) -> Option<&str> {
        self.get(SessionKey::PendingError)
    }

    /// Remove and return the one-shot error message
    pub fn take_pending_error(&mut self) -> Option<String> {
        self.unset(SessionKey::PendingError)
    }

    /// A new record with every auth-state field removed at once.
    ///
    /// Credential, token, account, board and permission go together; the
    /// pending error (if any) survives so the auth page can still show it.
    pub fn invalidated(&self) -> Self {
        let values = self
            .values
            .iter()
            .filter(|(key, _)| !key.is_auth_state())
            .map(|(key, value)| (*key, value.clone()))
            .collect();
        Self { values }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = SessionKey> + '_ {
        self.values.keys().copied()
    }
}

/// Unknown keys are dropped rather than failing the whole record.
impl From<BTreeMap<String, String>> for SessionRecord {
    fn from(wire: BTreeMap<String, String>) -> Self {
        let values = wire
            .into_iter()
            .filter_map(|(key, value)| SessionKey::from_wire(&key).map(|key| (key, value)))
            .collect();
        Self { values }
    }
}

impl From<SessionRecord> for BTreeMap<String, String> {
    fn from(record: SessionRecord) -> Self {
        record
            .values
            .into_iter()
            .map(|(key, value)| (key.as_str().to_string(), value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linked() -> SessionRecord {
        SessionRecord::anonymous()
            .with(SessionKey::Credential, "cred")
            .with(SessionKey::SessionToken, "T1")
            .with(SessionKey::UserAccount, "acct")
            .with(SessionKey::Board, "board-7")
            .with(SessionKey::Permission, "rw")
    }

    #[test]
    fn test_anonymous_has_no_fields() {
        let record = SessionRecord::anonymous();
        assert!(record.is_empty());
        assert!(!record.credential_present());
        assert!(!record.account_linked());
        assert_eq!(record.session_token(), None);
    }

    #[test]
    fn test_account_requires_credential() {
        let orphan = SessionRecord::anonymous().with(SessionKey::UserAccount, "acct");
        assert!(!orphan.account_linked());
        assert!(linked().account_linked());
    }

    #[test]
    fn test_invalidated_clears_auth_state_together() {
        let record = linked().with(SessionKey::PendingError, "Session expired");
        let cleared = record.invalidated();

        for key in SessionKey::AUTH_STATE {
            assert_eq!(cleared.get(key), None, "{key} should be cleared");
        }
        assert_eq!(cleared.pending_error(), Some("Session expired"));
        // Source record untouched
        assert!(record.account_linked());
    }

    #[test]
    fn test_take_pending_error_is_one_shot() {
        let mut record = SessionRecord::anonymous().with(SessionKey::PendingError, "Bad password");
        assert_eq!(record.take_pending_error(), Some("Bad password".to_string()));
        assert_eq!(record.take_pending_error(), None);
    }

    #[test]
    fn test_serde_uses_wire_keys_and_drops_unknown() {
        let json = serde_json::to_value(linked()).unwrap();
        assert_eq!(json["X-Auth"], "cred");
        assert_eq!(json["X-Session"], "T1");
        assert!(json.get("error").is_none());

        let parsed: SessionRecord =
            serde_json::from_str(r#"{"X-Auth":"c","X-Legacy":"x","error":"oops"}"#).unwrap();
        assert!(parsed.credential_present());
        assert_eq!(parsed.pending_error(), Some("oops"));
        assert_eq!(parsed.keys().count(), 2);
    }
}
