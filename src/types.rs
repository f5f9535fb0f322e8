//! Common types used throughout poketab
//!
//! This module contains the shared data model for listing and hydration,
//! plus a few type aliases used across modules.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// A fully hydrated record for one catalog entry.
///
/// Shape is resource-kind-specific (nested lists and objects), so it stays
/// a raw JSON document. Hydration either returns a complete record or fails;
/// there is no partially filled state.
pub type FullRecord = JsonValue;

// ============================================================================
// Listing Types
// ============================================================================

/// Lightweight pointer to one catalog entry, produced by listing.
///
/// Names are unique within a resource kind but not across kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceReference {
    /// Resource name, usable as a lookup identifier
    pub name: String,
    /// Locator of the full record
    pub url: String,
}

impl ResourceReference {
    /// Create a new reference
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// One page of a paginated resource listing.
///
/// `next` is absent exactly on the final page. `count` and `previous` are
/// part of the upstream envelope but drive no behavior here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourcePage {
    /// Total number of resources of this kind, as reported upstream
    #[serde(default)]
    pub count: Option<u64>,
    /// Continuation URL for the next page, if any
    #[serde(default)]
    pub next: Option<String>,
    /// Continuation URL for the previous page, if any
    #[serde(default)]
    pub previous: Option<String>,
    /// References in upstream order
    #[serde(default)]
    pub results: Vec<ResourceReference>,
}

impl ResourcePage {
    /// A final page with the given references
    pub fn last(results: Vec<ResourceReference>) -> Self {
        Self {
            results,
            ..Default::default()
        }
    }

    /// A page with a continuation URL
    pub fn with_next(results: Vec<ResourceReference>, next: impl Into<String>) -> Self {
        Self {
            results,
            next: Some(next.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_deserialization() {
        let body = r#"{
            "count": 8,
            "next": "https://api.example.com/v2/stat/?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "hp", "url": "https://api.example.com/v2/stat/1/"},
                {"name": "attack", "url": "https://api.example.com/v2/stat/2/"}
            ]
        }"#;

        let page: ResourcePage = serde_json::from_str(body).unwrap();
        assert_eq!(page.count, Some(8));
        assert!(page.next.is_some());
        assert!(page.previous.is_none());
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0], ResourceReference::new("hp", "https://api.example.com/v2/stat/1/"));
    }

    #[test]
    fn test_page_missing_fields_default() {
        let page: ResourcePage = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(page.next.is_none());
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_page_constructors() {
        let refs = vec![ResourceReference::new("hp", "u1")];
        assert!(ResourcePage::last(refs.clone()).next.is_none());
        assert_eq!(
            ResourcePage::with_next(refs, "https://x/?offset=20").next.as_deref(),
            Some("https://x/?offset=20")
        );
    }
}
