//! Application configuration loaded from external sources.

use serde::Deserialize;

/// Default mock-API address for local development. The production URL (or a
/// platform-specific loopback address) comes in through configuration.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug, Deserialize)]
/// Settings consumed by the API client and the application wiring.
pub struct AppConfig {
    /// Base URL of the customer API.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Loads configuration from an optional `care-lookup.yaml` next to the binary
/// plus `CARE_`-prefixed environment variables, e.g. `CARE_API_BASE_URL`.
pub fn load() -> Result<AppConfig, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("care-lookup").required(false))
        .add_source(config::Environment::with_prefix("CARE"))
        .build()?;
    settings.try_deserialize::<AppConfig>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_the_local_mock_api() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.request_timeout_secs, 10);
    }
}
