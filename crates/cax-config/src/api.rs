//! Claim-intelligence API endpoint configuration.

use serde::{Deserialize, Serialize};

/// Default API origin: a local backend during development.
fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the claim-intelligence backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Base URL with any trailing slash removed, so paths can be appended.
    #[must_use]
    pub fn origin(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn origin_strips_trailing_slash() {
        let config = ApiConfig {
            base_url: "https://api.claimaxis.example/".into(),
            ..Default::default()
        };
        assert_eq!(config.origin(), "https://api.claimaxis.example");
    }
}
