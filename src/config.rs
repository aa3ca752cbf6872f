//! Client configuration
//!
//! Loaded from YAML. Only `api_key` is required, and even that may be
//! supplied later (for example from the command line).
//!
//! ```yaml
//! api_key: "0123456789abcdef"
//! endpoint: "http://newsapi.org/v2/top-headlines"
//! timeout_secs: 30
//! defaults:
//!   country: us
//!   page_size: 50
//! ```

use crate::error::{Error, Result, ResultExt};
use crate::fetch::DEFAULT_ENDPOINT;
use crate::http::HttpClientConfig;
use crate::search::{SearchRequest, SearchRequestBuilder};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

// ============================================================================
// Top-Level Client Config
// ============================================================================

/// Complete client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API key sent with every request
    #[serde(default)]
    pub api_key: Option<String>,

    /// Endpoint requests are sent to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent string
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Defaults applied to every search
    #[serde(default)]
    pub defaults: SearchDefaults,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            user_agent: None,
            defaults: SearchDefaults::default(),
        }
    }
}

impl ClientConfig {
    /// Parse a config from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml_str(&content)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.endpoint)
            .map_err(|e| Error::config(format!("invalid endpoint '{}': {e}", self.endpoint)))?;

        if self.timeout_secs == 0 {
            return Err(Error::config("timeout_secs must be positive"));
        }
        if self.defaults.page_size == Some(0) {
            return Err(Error::config("defaults.page_size must be positive"));
        }
        if self.defaults.pages_count == Some(0) {
            return Err(Error::config("defaults.pages_count must be positive"));
        }
        Ok(())
    }

    /// The API key, or an error naming the missing field
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::missing_field("api_key"))
    }

    /// Transport settings derived from this config
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder =
            HttpClientConfig::builder().timeout(Duration::from_secs(self.timeout_secs));
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        builder.build()
    }
}

// ============================================================================
// Search Defaults
// ============================================================================

/// Values used when a search does not set them itself
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchDefaults {
    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub country: Option<String>,

    #[serde(default)]
    pub page_size: Option<u32>,

    #[serde(default)]
    pub pages_count: Option<u32>,
}

impl SearchDefaults {
    /// Start a search for `keywords` with these defaults applied
    pub fn builder<I, S>(&self, keywords: I) -> Result<SearchRequestBuilder>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut builder = SearchRequest::builder(keywords);
        if let Some(category) = &self.category {
            builder = builder.category(category.clone());
        }
        if let Some(country) = &self.country {
            builder = builder.country(country.clone());
        }
        if let Some(size) = self.page_size {
            builder = builder.page_size(size)?;
        }
        if let Some(count) = self.pages_count {
            builder = builder.pages_count(count)?;
        }
        Ok(builder)
    }
}
