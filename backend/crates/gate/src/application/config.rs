//! Application Configuration
//!
//! Configuration for the navigation guard and the session cookie.

use std::time::Duration;

use platform::config::{
    ConfigError, env_bool, env_duration_ms, env_duration_secs, env_string,
};
use platform::cookie::CookieConfig;
use platform::http_client::HttpTimeouts;

use crate::domain::value_object::client_env::ClientEnv;
use crate::error::GateResult;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Gate application configuration
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Session secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Session cookie lifetime (7 days)
    pub session_max_age: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Upstream API location exposed to the browser as `API_DOMAIN`
    pub api_domain: String,
    /// Remote session validation endpoint
    pub validator_url: String,
    /// Upper bound on one validation call (5 seconds)
    pub validator_timeout: Duration,
    /// Upper bound on connecting to the validator (2 seconds)
    pub validator_connect_timeout: Duration,
}

impl Default for GateConfig {
    fn default() -> Self {
        let api_domain = "http://localhost:8080".to_string();
        Self {
            session_cookie_name: "__session".to_string(),
            session_secret: [0u8; 32],
            session_max_age: Duration::from_secs(7 * 24 * 3600), // 1 week
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            validator_url: default_validator_url(&api_domain),
            api_domain,
            validator_timeout: Duration::from_secs(5),
            validator_connect_timeout: Duration::from_secs(2),
        }
    }
}

impl GateConfig {
    /// Create config with a random session secret (for development)
    pub fn with_random_secret() -> Self {
        Self {
            session_secret: platform::crypto::random_secret(),
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Load configuration from the environment.
    ///
    /// `SESSION_SECRET` is required unless `allow_random_secret` is set, in
    /// which case a missing secret falls back to a random one (sessions then
    /// do not survive a restart). Development defaults apply when
    /// `allow_random_secret` is set.
    pub fn from_env(allow_random_secret: bool) -> GateResult<Self> {
        let base = if allow_random_secret {
            Self::development()
        } else {
            Self::default()
        };

        let session_secret = match env_string("SESSION_SECRET") {
            Some(encoded) => decode_secret(&encoded)?,
            None if allow_random_secret => {
                tracing::warn!("SESSION_SECRET not set, using a random secret");
                base.session_secret
            }
            None => return Err(ConfigError::Missing("SESSION_SECRET".to_string()).into()),
        };

        let api_domain = env_string("API_DOMAIN")
            .map(|domain| domain.trim_end_matches('/').to_string())
            .unwrap_or(base.api_domain);
        let validator_url =
            env_string("SESSION_VALIDATOR_URL").unwrap_or_else(|| default_validator_url(&api_domain));

        Ok(Self {
            session_cookie_name: env_string("SESSION_COOKIE_NAME")
                .unwrap_or(base.session_cookie_name),
            session_secret,
            session_max_age: env_duration_secs("SESSION_MAX_AGE_SECS")?
                .unwrap_or(base.session_max_age),
            cookie_secure: env_bool("COOKIE_SECURE")?.unwrap_or(base.cookie_secure),
            cookie_same_site: base.cookie_same_site,
            api_domain,
            validator_url,
            validator_timeout: env_duration_ms("SESSION_VALIDATOR_TIMEOUT_MS")?
                .unwrap_or(base.validator_timeout),
            validator_connect_timeout: env_duration_ms("SESSION_VALIDATOR_CONNECT_TIMEOUT_MS")?
                .unwrap_or(base.validator_connect_timeout),
        })
    }

    /// Cookie attributes for the session cookie
    pub fn cookie_config(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.session_max_age.as_secs() as i64),
        }
    }

    /// Configuration exposed to rendered pages
    pub fn client_env(&self) -> ClientEnv {
        ClientEnv::new(self.api_domain.clone())
    }

    /// Timeouts for the validator's HTTP client
    pub fn validator_http_timeouts(&self) -> HttpTimeouts {
        HttpTimeouts {
            request: self.validator_timeout,
            connect: self.validator_connect_timeout,
        }
    }
}

fn default_validator_url(api_domain: &str) -> String {
    format!("{api_domain}/auth/session/validate")
}

fn decode_secret(encoded: &str) -> Result<[u8; 32], ConfigError> {
    let bytes = platform::crypto::from_base64(encoded)
        .map_err(|e| ConfigError::invalid("SESSION_SECRET", e.to_string()))?;
    <[u8; 32]>::try_from(bytes.as_slice()).map_err(|_| {
        ConfigError::invalid(
            "SESSION_SECRET",
            format!("expected 32 bytes, got {}", bytes.len()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GateConfig::default();
        assert_eq!(config.session_cookie_name, "__session");
        assert_eq!(config.validator_timeout, Duration::from_secs(5));
        assert_eq!(
            config.validator_url,
            "http://localhost:8080/auth/session/validate"
        );
        assert!(config.cookie_secure);
    }

    #[test]
    fn test_development_is_insecure_with_random_secret() {
        let config = GateConfig::development();
        assert!(!config.cookie_secure);
        assert_ne!(config.session_secret, [0u8; 32]);
    }

    #[test]
    fn test_cookie_config() {
        let cookie = GateConfig::default().cookie_config();
        assert!(cookie.http_only);
        assert_eq!(cookie.path, "/");
        assert_eq!(cookie.max_age_secs, Some(7 * 24 * 3600));
    }

    #[test]
    fn test_decode_secret() {
        let encoded = "QUFBQUFBQUFBQUFBQUFBQUFBQUFBQUFBQUFBQUFBQUE="; // 32 x 'A'
        assert_eq!(decode_secret(encoded).unwrap(), [b'A'; 32]);
        assert!(decode_secret("aGVsbG8=").is_err());
        assert!(decode_secret("***").is_err());
    }
}
