//! Frontend configuration
//!
//! The defaults are embedded into the wasm bundle as TOML. The API base URL
//! can be overridden at runtime through `localStorage`, which is handy when
//! the integrations backend runs on a different host or port.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FrontendConfig {
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:8000"
"#;

const FALLBACK_BASE_URL: &str = "http://localhost:8000";

/// localStorage key overriding `api.base_url`
pub const API_BASE_OVERRIDE_KEY: &str = "integration_viewer_api_base";

pub fn parse_config(text: &str) -> Result<FrontendConfig, ConfigError> {
    Ok(toml::from_str(text)?)
}

/// Load the embedded configuration
pub fn load_config() -> FrontendConfig {
    match parse_config(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}, falling back to {}", e, FALLBACK_BASE_URL);
            FrontendConfig {
                api: ApiConfig {
                    base_url: FALLBACK_BASE_URL.to_string(),
                },
            }
        }
    }
}

/// Pick the effective base URL. Blank overrides are ignored and a trailing
/// slash is stripped so paths can be appended directly.
pub fn resolve_base_url(config: &FrontendConfig, override_url: Option<String>) -> String {
    let base = override_url
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| config.api.base_url.clone());
    base.trim_end_matches('/').to_string()
}

/// Read the runtime override from localStorage, if any
pub fn stored_base_url_override() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(API_BASE_OVERRIDE_KEY)
        .ok()?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(parse_config("[api]\nport = 8000\n").is_err());
        assert!(parse_config("not toml at all = = =").is_err());
    }

    #[test]
    fn test_resolve_base_url() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(resolve_base_url(&config, None), "http://localhost:8000");
        assert_eq!(
            resolve_base_url(&config, Some("https://api.example.com/".to_string())),
            "https://api.example.com"
        );
        assert_eq!(
            resolve_base_url(&config, Some("   ".to_string())),
            "http://localhost:8000"
        );
    }
}
