//! Upstream catalog client
//!
//! The upstream collaborator is a read-only REST API consumed through the
//! [`CatalogSource`] trait: one call fetches a page of lightweight
//! references, the other fetches one full record. [`RestClient`] is the
//! HTTP-backed implementation; tests substitute in-memory sources.

mod rest;

pub use rest::{RestClient, RestClientConfig, RestClientConfigBuilder};

use crate::error::Result;
use crate::types::{FullRecord, ResourcePage};
use async_trait::async_trait;

/// Read-only access to the upstream catalog.
///
/// Implementations issue exactly one fetch per call. There are no retries at
/// this layer; a transient failure terminates the operation with the error
/// propagated to the caller.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch one page of references for a resource kind at the given offset
    async fn fetch_page(&self, kind: &str, offset: u32) -> Result<ResourcePage>;

    /// Fetch the full record for one resource by id or name
    async fn fetch_record(&self, kind: &str, identifier: &str) -> Result<FullRecord>;
}

#[cfg(test)]
mod tests;
