//! Record hydration
//!
//! Fetches the full record behind a resource, either for a reference that
//! came out of a listing walk or for a caller-supplied key. Both entry
//! points resolve to the same single-fetch step; the upstream accepts ids
//! and names interchangeably, so no key-form detection happens here.
//!
//! A failure matching the suppression policy is the expected missing-record
//! outcome and surfaces as `Ok(None)`; everything else propagates. One fetch
//! per call, no retries.

use crate::client::CatalogSource;
use crate::error::{Error, Result};
use crate::suppress::SuppressionPolicy;
use crate::types::{FullRecord, ResourceReference};
use std::sync::Arc;
use tracing::{debug, trace};

/// Fetches full records for one catalog source
#[derive(Clone)]
pub struct Hydrator {
    source: Arc<dyn CatalogSource>,
    policy: SuppressionPolicy,
}

impl Hydrator {
    /// Create a hydrator over the given source
    pub fn new(source: Arc<dyn CatalogSource>, policy: SuppressionPolicy) -> Self {
        Self { source, policy }
    }

    /// Hydrate a reference produced by listing.
    ///
    /// The reference's `name` is the lookup identifier.
    pub async fn hydrate_reference(
        &self,
        kind: &str,
        reference: &ResourceReference,
    ) -> Result<Option<FullRecord>> {
        self.fetch(kind, &reference.name).await
    }

    /// Point lookup by caller-supplied key, id or name.
    pub async fn hydrate_key(&self, kind: &str, key: &str) -> Result<Option<FullRecord>> {
        self.fetch(kind, key).await
    }

    async fn fetch(&self, kind: &str, identifier: &str) -> Result<Option<FullRecord>> {
        if identifier.is_empty() {
            return Err(Error::EmptyIdentifier);
        }

        trace!(kind, identifier, "hydrating record");
        match self.source.fetch_record(kind, identifier).await {
            Ok(record) => Ok(Some(record)),
            Err(err) if self.policy.is_suppressed(&err) => {
                debug!(kind, identifier, "record miss suppressed: {err}");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}

impl std::fmt::Debug for Hydrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hydrator")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
