//! Connection configuration
//!
//! Settings for reaching the upstream catalog, deserializable from YAML.
//! Everything has a default; a missing config file means "talk to the
//! public API with stock settings".

use crate::client::RestClientConfig;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

fn default_base_url() -> String {
    "https://pokeapi.co/api/v2".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_page_limit() -> u32 {
    20
}

/// Connection settings for the upstream catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConnectionConfig {
    /// Base URL of the catalog API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Page size requested on listing calls
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,

    /// Override for the User-Agent header
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            page_limit: default_page_limit(),
            user_agent: None,
        }
    }
}

impl ConnectionConfig {
    /// Load from a YAML file
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate field values
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.base_url)
            .map_err(|e| Error::config(format!("invalid base_url '{}': {e}", self.base_url)))?;
        if self.page_limit == 0 {
            return Err(Error::config("page_limit must be at least 1"));
        }
        if self.timeout_seconds == 0 {
            return Err(Error::config("timeout_seconds must be at least 1"));
        }
        Ok(())
    }

    /// Convert into REST client settings
    pub fn to_client_config(&self) -> RestClientConfig {
        let mut builder = RestClientConfig::builder()
            .base_url(self.base_url.clone())
            .timeout(Duration::from_secs(self.timeout_seconds))
            .page_limit(self.page_limit);
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        builder.build()
    }
}
