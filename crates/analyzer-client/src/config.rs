//! Configuration for the analysis client

use crate::error::{AnalyzerError, Result};
use std::time::Duration;
use url::Url;

/// Environment variable holding the backend base URL
pub const BASE_URL_ENV: &str = "STOCK_ANALYZER_API_URL";

/// Backend used when nothing is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Configuration for talking to the analysis backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the backend, without the `/analyze` path
    pub base_url: String,

    /// Overall request timeout. `None` waits for the transport to give up.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Load the base URL from `STOCK_ANALYZER_API_URL`, falling back to the local default
    pub fn from_env() -> Result<Self> {
        Self::builder().with_env_base_url().build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            AnalyzerError::Config(format!("invalid base URL '{}': {e}", self.base_url))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(AnalyzerError::Config(format!(
                "base URL must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.request_timeout == Some(Duration::ZERO) {
            return Err(AnalyzerError::Config(
                "request timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// URL of the analysis endpoint for an already validated ticker symbol
    pub fn analyze_url(&self, symbol: &str) -> String {
        format!("{}/analyze/{symbol}", self.base_url.trim_end_matches('/'))
    }

    /// URL of the backend health endpoint
    pub fn health_url(&self) -> String {
        format!("{}/health", self.base_url.trim_end_matches('/'))
    }
}

/// Builder for ClientConfig
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    request_timeout: Option<Duration>,
}

impl ClientConfigBuilder {
    /// Set the backend base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn request_timeout(mut self, duration: Duration) -> Self {
        self.request_timeout = Some(duration);
        self
    }

    /// Take the base URL from the environment unless one was already set
    pub fn with_env_base_url(mut self) -> Self {
        if self.base_url.is_none() {
            self.base_url = analyzer_utils::var_non_empty(BASE_URL_ENV);
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ClientConfig> {
        let defaults = ClientConfig::default();

        let config = ClientConfig {
            base_url: self.base_url.unwrap_or(defaults.base_url),
            request_timeout: self.request_timeout.or(defaults.request_timeout),
        };

        config.validate()?;
        Ok(config)
    }
}
