use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Environment variable overriding the remote service base address.
pub const API_BASE_ENV: &str = "OPSBOARD_API_BASE_URL";

/// Default base address of the remote data service.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

static CONFIG: Lazy<OpsConfig> = Lazy::new(OpsConfig::from_env);

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct OpsConfig {
    pub api_base_url: String,
}

impl Default for OpsConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl OpsConfig {
    /// Build the configuration from the process environment, falling back
    /// to defaults for anything unset or empty.
    pub fn from_env() -> Self {
        let api_base_url = std::env::var(API_BASE_ENV)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        Self { api_base_url }
    }
}

/// The process-wide configuration, read from the environment once on first
/// access.
pub fn get() -> &'static OpsConfig {
    &CONFIG
}
