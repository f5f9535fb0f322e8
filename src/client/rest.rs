//! HTTP implementation of the catalog source
//!
//! A thin `reqwest` wrapper: builds the listing and record URLs, issues a
//! single GET per call, maps HTTP status and decode failures onto the crate
//! error type. Pagination, hydration, and error suppression all live above
//! this layer.

use super::CatalogSource;
use crate::error::{Error, Result};
use crate::types::{FullRecord, ResourcePage};
use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Configuration for the REST client
#[derive(Debug, Clone)]
pub struct RestClientConfig {
    /// Base URL of the catalog API
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Page size requested on listing calls
    pub page_limit: u32,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for RestClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://pokeapi.co/api/v2".to_string(),
            timeout: Duration::from_secs(30),
            page_limit: 20,
            default_headers: HashMap::new(),
            user_agent: format!("poketab/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl RestClientConfig {
    /// Create a new config builder
    pub fn builder() -> RestClientConfigBuilder {
        RestClientConfigBuilder::default()
    }
}

/// Builder for REST client config
#[derive(Default)]
pub struct RestClientConfigBuilder {
    config: RestClientConfig,
}

impl RestClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the listing page size
    pub fn page_limit(mut self, limit: u32) -> Self {
        self.config.page_limit = limit;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> RestClientConfig {
        self.config
    }
}

/// HTTP-backed catalog source
pub struct RestClient {
    client: Client,
    config: RestClientConfig,
}

impl RestClient {
    /// Create a client with default configuration
    pub fn new() -> Self {
        Self::with_config(RestClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: RestClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, config }
    }

    /// The active configuration
    pub fn config(&self) -> &RestClientConfig {
        &self.config
    }

    /// Build the listing URL for a resource kind
    pub(super) fn collection_url(&self, kind: &str) -> String {
        format!(
            "{}/{}/",
            self.config.base_url.trim_end_matches('/'),
            kind.trim_matches('/')
        )
    }

    /// Build the record URL for one resource
    pub(super) fn record_url(&self, kind: &str, identifier: &str) -> String {
        format!("{}{}/", self.collection_url(kind), identifier)
    }

    /// Issue one GET and return the response body on a success status
    async fn get_body(&self, url: &str, query: &[(&str, String)]) -> Result<String> {
        let mut req = self.client.get(url);

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }
        if !query.is_empty() {
            req = req.query(query);
        }

        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        debug!("GET {url} -> {}", status.as_u16());
        Ok(response.text().await?)
    }
}

impl Default for RestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CatalogSource for RestClient {
    async fn fetch_page(&self, kind: &str, offset: u32) -> Result<ResourcePage> {
        let url = self.collection_url(kind);
        let query = [
            ("offset", offset.to_string()),
            ("limit", self.config.page_limit.to_string()),
        ];
        let body = self.get_body(&url, &query).await?;
        serde_json::from_str(&body).map_err(|e| Error::decode(e.to_string()))
    }

    async fn fetch_record(&self, kind: &str, identifier: &str) -> Result<FullRecord> {
        let url = self.record_url(kind, identifier);
        let body = self.get_body(&url, &[]).await?;
        serde_json::from_str(&body).map_err(|e| Error::decode(e.to_string()))
    }
}
