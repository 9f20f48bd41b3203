//! Remote Session Validator
//!
//! `POST {validator_url}` with `{"sessionToken": ..., "credentialPresent": ...}`;
//! a 2xx answer with `{"valid": bool}` is the verdict, anything else is an error.
//! No verdict is ever cached.

use serde::Deserialize;
use std::time::Duration;

use platform::http_client::build_client;

use crate::application::config::GateConfig;
use crate::domain::validator::{SessionValidator, ValidationRequest};
use crate::error::{GateError, GateResult};

#[derive(Debug, Deserialize)]
struct ValidateSessionResponse {
    valid: bool,
}

/// HTTP session validator
#[derive(Debug, Clone)]
pub struct HttpSessionValidator {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl HttpSessionValidator {
    pub fn new(config: &GateConfig) -> GateResult<Self> {
        let client = build_client(config.validator_http_timeouts())
            .map_err(|e| GateError::Internal(e.to_string()))?;

        Ok(Self {
            client,
            url: config.validator_url.clone(),
            timeout: config.validator_timeout,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn transport_error(&self, err: reqwest::Error) -> GateError {
        if err.is_timeout() {
            GateError::ValidatorTimeout(self.timeout.as_millis())
        } else {
            GateError::ValidatorTransport(err.to_string())
        }
    }
}

impl SessionValidator for HttpSessionValidator {
    async fn validate(&self, request: ValidationRequest<'_>) -> GateResult<bool> {
        // Nothing to present: invalid without a round trip
        if !request.credential_present || request.session_token.is_none() {
            return Ok(false);
        }

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GateError::ValidatorStatus(status.as_u16()));
        }

        let body = response.text().await.map_err(|e| self.transport_error(e))?;
        let verdict: ValidateSessionResponse = serde_json::from_str(&body)
            .map_err(|e| GateError::ValidatorResponse(e.to_string()))?;

        tracing::debug!(valid = verdict.valid, "Session validator verdict");
        Ok(verdict.valid)
    }
}
