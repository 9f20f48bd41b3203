//! Signed Cookie Session Store
//!
//! Cookie value format: `base64url(json) "." base64url(hmac_sha256(secret, base64url(json)))`.
//! The store keeps no state between requests; every mutation must be
//! committed onto the response that follows it.

use axum::http::{HeaderMap, HeaderValue};
use platform::cookie::{CookieConfig, MAX_COOKIE_BYTES, extract_cookie, set_cookie_header};
use platform::crypto::{from_base64url, hmac_sha256, to_base64url, verify_hmac_sha256};

use crate::application::config::GateConfig;
use crate::domain::entity::session_record::SessionRecord;
use crate::error::{GateError, GateResult};

/// Why a presented cookie was discarded
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeFailure {
    #[error("missing signature separator")]
    Unsigned,
    #[error("signature is not base64url")]
    SignatureEncoding,
    #[error("signature mismatch")]
    BadSignature,
    #[error("payload is not base64url")]
    PayloadEncoding,
    #[error("payload is not a session record")]
    PayloadFormat,
}

/// Cookie session store
#[derive(Debug, Clone)]
pub struct CookieSessionStore {
    cookie: CookieConfig,
    secret: [u8; 32],
}

impl CookieSessionStore {
    pub fn new(config: &GateConfig) -> Self {
        Self {
            cookie: config.cookie_config(),
            secret: config.session_secret,
        }
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie.name
    }

    /// Load the session for a request.
    ///
    /// Never fails: an absent, tampered or unparsable cookie yields a fresh
    /// anonymous record.
    pub fn load(&self, headers: &HeaderMap) -> SessionRecord {
        match extract_cookie(headers, &self.cookie.name) {
            Some(value) => self.load_value(&value),
            None => SessionRecord::anonymous(),
        }
    }

    /// Load from a raw cookie value
    pub fn load_value(&self, value: &str) -> SessionRecord {
        match self.decode(value) {
            Ok(record) => record,
            Err(reason) => {
                tracing::debug!(%reason, "Discarding session cookie");
                SessionRecord::anonymous()
            }
        }
    }

    pub fn decode(&self, value: &str) -> Result<SessionRecord, DecodeFailure> {
        let (payload, signature) = value.rsplit_once('.').ok_or(DecodeFailure::Unsigned)?;

        let tag = from_base64url(signature).map_err(|_| DecodeFailure::SignatureEncoding)?;
        if !verify_hmac_sha256(&self.secret, payload.as_bytes(), &tag) {
            return Err(DecodeFailure::BadSignature);
        }

        let json = from_base64url(payload).map_err(|_| DecodeFailure::PayloadEncoding)?;
        serde_json::from_slice(&json).map_err(|_| DecodeFailure::PayloadFormat)
    }

    /// Serialize and sign a record into a cookie value
    pub fn encode(&self, record: &SessionRecord) -> GateResult<String> {
        let json = serde_json::to_vec(record)?;
        let payload = to_base64url(&json);
        let signature = to_base64url(&hmac_sha256(&self.secret, payload.as_bytes()));
        Ok(format!("{payload}.{signature}"))
    }

    /// Produce the `Set-Cookie` header that persists `record`.
    ///
    /// Must be attached to the response; otherwise the mutation is lost.
    pub fn commit(&self, record: &SessionRecord) -> GateResult<HeaderValue> {
        let value = self.encode(record)?;
        let header = set_cookie_header(&self.cookie, &value)?;
        if header.len() > MAX_COOKIE_BYTES {
            return Err(GateError::CookieTooLarge {
                len: header.len(),
                limit: MAX_COOKIE_BYTES,
            });
        }
        Ok(header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::session_key::SessionKey;
    use axum::http::header;

    fn store() -> CookieSessionStore {
        CookieSessionStore::new(&GateConfig::with_random_secret())
    }

    fn cookie_value(set_cookie: &HeaderValue) -> String {
        let raw = set_cookie.to_str().unwrap();
        let pair = raw.split(';').next().unwrap();
        pair.split_once('=').unwrap().1.to_string()
    }

    fn request_headers(name: &str, value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("{name}={value}")).unwrap(),
        );
        headers
    }

    #[test]
    fn test_commit_then_load_round_trip() {
        let store = store();
        let record = SessionRecord::anonymous()
            .with(SessionKey::Credential, "cred")
            .with(SessionKey::SessionToken, "T1")
            .with(SessionKey::UserAccount, "acct")
            .with(SessionKey::Board, "b1")
            .with(SessionKey::Permission, "rw")
            .with(SessionKey::PendingError, "Heads up; \"quoted\"");

        let set_cookie = store.commit(&record).unwrap();
        let headers = request_headers(store.cookie_name(), &cookie_value(&set_cookie));

        assert_eq!(store.load(&headers), record);
    }

    #[test]
    fn test_set_cookie_attributes() {
        let store = store();
        let set_cookie = store.commit(&SessionRecord::anonymous()).unwrap();
        let raw = set_cookie.to_str().unwrap();
        assert!(raw.starts_with("__session="));
        assert!(raw.contains("HttpOnly"));
        assert!(raw.contains("SameSite=Lax"));
        assert!(raw.contains("Path=/"));
    }

    #[test]
    fn test_missing_or_garbage_cookie_is_anonymous_every_time() {
        let store = store();
        let empty = HeaderMap::new();
        let garbage = request_headers(store.cookie_name(), "%%%not-a-session%%%");

        for _ in 0..2 {
            assert_eq!(store.load(&empty), SessionRecord::anonymous());
            assert_eq!(store.load(&garbage), SessionRecord::anonymous());
        }
    }

    #[test]
    fn test_decode_failures() {
        let store = store();
        let valid = store
            .encode(&SessionRecord::anonymous().with(SessionKey::Credential, "c"))
            .unwrap();
        let (payload, signature) = valid.rsplit_once('.').unwrap();

        assert_eq!(store.decode("nodot"), Err(DecodeFailure::Unsigned));
        assert_eq!(
            store.decode(&format!("{payload}.!!")),
            Err(DecodeFailure::SignatureEncoding)
        );

        let forged_payload = to_base64url(br#"{"X-Auth":"c","X-UserAccount":"a"}"#);
        assert_eq!(
            store.decode(&format!("{forged_payload}.{signature}")),
            Err(DecodeFailure::BadSignature)
        );

        // Correctly signed but not a record
        let secret = GateConfig::default().session_secret;
        let zero_key_store = CookieSessionStore::new(&GateConfig::default());
        let not_json = to_base64url(b"[1,2,3]");
        let sig = to_base64url(&hmac_sha256(&secret, not_json.as_bytes()));
        assert_eq!(
            zero_key_store.decode(&format!("{not_json}.{sig}")),
            Err(DecodeFailure::PayloadFormat)
        );
    }

    #[test]
    fn test_cookie_from_other_secret_is_rejected() {
        let issued = store()
            .encode(&SessionRecord::anonymous().with(SessionKey::Credential, "c"))
            .unwrap();
        assert_eq!(store().decode(&issued), Err(DecodeFailure::BadSignature));
    }

    #[test]
    fn test_oversized_record_fails_commit() {
        let store = store();
        let record = SessionRecord::anonymous().with(SessionKey::PendingError, "x".repeat(4000));
        assert!(matches!(
            store.commit(&record),
            Err(GateError::CookieTooLarge { .. })
        ));
    }
}
