use std::env;
use std::str::FromStr;

use dotenvy::dotenv;
use thiserror::Error;
use url::Url;

#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP bind host (e.g., 0.0.0.0)
    pub app_host: String,
    /// HTTP bind port (e.g., 8080)
    pub app_port: u16,

    /// Warehouse CRUD base URL (e.g., http://localhost:8000/warehouse/data)
    pub backend_base_url: Url,

    /// OpenAI-compatible provider credential. Optional: the relay still
    /// starts without it, but every /chat call returns a configured-error
    /// reply instead of dispatching.
    pub openai_api_key: Option<String>,
    /// Provider base URL (e.g., https://api.openai.com/v1)
    pub openai_base_url: Url,
    /// Chat-completion model identifier
    pub openai_model: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid URL for {name}: {value}")]
    InvalidUrl { name: &'static str, value: String },
    #[error("Invalid number for {name}: {value}")]
    InvalidNumber { name: &'static str, value: String },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env if present
        let _ = dotenv();

        let app_host = env_or_default("APP_HOST", "0.0.0.0");
        let app_port = parse_or_default::<u16>("APP_PORT", 8080)?;

        let backend_base_url =
            parse_url_or_default("BACKEND_BASE_URL", "http://localhost:8000/warehouse/data")?;

        let openai_api_key = env::var("OPENAI_API_KEY").ok();
        let openai_base_url = parse_url_or_default("OPENAI_BASE_URL", "https://api.openai.com/v1")?;
        let openai_model = env_or_default("OPENAI_MODEL", "gpt-4o-mini");

        Ok(Self {
            app_host,
            app_port,
            backend_base_url,
            openai_api_key,
            openai_base_url,
            openai_model,
        })
    }
}

/* --------------------------- helpers --------------------------- */

fn env_or_default(key: &'static str, default: &'static str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_or_default<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(v) => v.parse::<T>().map_err(|_| ConfigError::InvalidNumber {
            name: key,
            value: v,
        }),
        Err(_) => Ok(default),
    }
}

fn parse_url_or_default(key: &'static str, default: &'static str) -> Result<Url, ConfigError> {
    let raw = env::var(key).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|_| ConfigError::InvalidUrl {
        name: key,
        value: raw,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_env_is_unset() {
        assert_eq!(env_or_default("RELAY_TEST_UNSET_HOST", "0.0.0.0"), "0.0.0.0");
        assert_eq!(
            parse_or_default::<u16>("RELAY_TEST_UNSET_PORT", 8080).unwrap(),
            8080
        );
        let url =
            parse_url_or_default("RELAY_TEST_UNSET_URL", "http://localhost:8000/warehouse/data")
                .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/warehouse/data");
    }

    #[test]
    fn invalid_values_are_reported() {
        env::set_var("RELAY_TEST_BAD_PORT", "not-a-port");
        let err = parse_or_default::<u16>("RELAY_TEST_BAD_PORT", 8080).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { .. }));

        env::set_var("RELAY_TEST_BAD_URL", "::not a url::");
        let err = parse_url_or_default("RELAY_TEST_BAD_URL", "http://localhost").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }
}
