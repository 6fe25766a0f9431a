//! Process-wide read-only configuration for the external services.
//!
//! Built once at startup from the environment and passed into the clients by
//! value, so tests can construct configs pointing at fakes without touching
//! global state.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

/// Connection settings for the bill registry.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Base URL without trailing slash, e.g. `https://v3.openstates.org`.
    pub base_url: String,
    pub api_key: String,
    /// Jurisdiction the engine analyses bills for.
    pub jurisdiction: String,
    /// Maximum bills requested per analysis.
    pub page_size: u32,
}

impl RegistryConfig {
    pub const DEFAULT_BASE_URL: &str = "https://v3.openstates.org";
    pub const DEFAULT_JURISDICTION: &str = "California";
    pub const DEFAULT_PAGE_SIZE: u32 = 20;

    /// Build from the environment. `OPENSTATES_API_KEY` is required;
    /// `OPENSTATES_BASE_URL` overrides the public endpoint.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("OPENSTATES_API_KEY")
            .map_err(|_| ConfigError::MissingVar("OPENSTATES_API_KEY"))?;
        let base_url = std::env::var("OPENSTATES_BASE_URL")
            .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string());
        Ok(Self::new(base_url, api_key))
    }

    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            jurisdiction: Self::DEFAULT_JURISDICTION.to_string(),
            page_size: Self::DEFAULT_PAGE_SIZE,
        }
    }
}

/// Connection settings for the hosted sentiment classifier.
#[derive(Debug, Clone)]
pub struct SentimentConfig {
    /// Full model endpoint URL.
    pub endpoint: String,
    /// Bearer token. The public endpoint works unauthenticated at low volume.
    pub api_token: Option<String>,
}

impl SentimentConfig {
    pub const DEFAULT_ENDPOINT: &str = "https://api-inference.huggingface.co/models/distilbert/distilbert-base-uncased-finetuned-sst-2-english";

    /// Build from the environment; both variables are optional.
    pub fn from_env() -> Self {
        Self {
            endpoint: std::env::var("SENTIMENT_ENDPOINT")
                .unwrap_or_else(|_| Self::DEFAULT_ENDPOINT.to_string()),
            api_token: std::env::var("HF_API_TOKEN").ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_config_trims_trailing_slash() {
        let cfg = RegistryConfig::new("http://localhost:9000/".into(), "key".into());
        assert_eq!(cfg.base_url, "http://localhost:9000");
    }

    #[test]
    fn registry_config_defaults() {
        let cfg = RegistryConfig::new(RegistryConfig::DEFAULT_BASE_URL.into(), "key".into());
        assert_eq!(cfg.jurisdiction, "California");
        assert_eq!(cfg.page_size, 20);
    }
}
