use serde::Serialize;

/// Non-secret configuration handed to the browser on every rendered page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientEnv {
    #[serde(rename = "API_DOMAIN")]
    pub api_domain: String,
}

impl ClientEnv {
    pub fn new(api_domain: impl Into<String>) -> Self {
        Self {
            api_domain: api_domain.into(),
        }
    }
}
