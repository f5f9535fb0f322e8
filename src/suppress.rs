//! Error suppression policy
//!
//! On some endpoints the upstream serves the literal body `Not Found` with a
//! success status when a record does not exist, so the miss surfaces as a
//! JSON decode failure instead of a clean 404. The policy below is the
//! narrow allowlist that converts exactly that symptom into a "no such
//! record" outcome; every other error is propagated untouched.

use crate::error::Error;
use once_cell::sync::Lazy;

/// Message fragments that identify the known missing-record symptom.
///
/// The wording is tied to the JSON parser in use, which is why the fragments
/// live here as data rather than in the callers.
pub const NOT_FOUND_FRAGMENTS: &[&str] = &["expected value at line 1"];

static DEFAULT_POLICY: Lazy<SuppressionPolicy> =
    Lazy::new(|| SuppressionPolicy::new(NOT_FOUND_FRAGMENTS.iter().map(ToString::to_string)));

/// Decides whether an upstream error should be treated as "record not found"
/// instead of a hard failure.
#[derive(Debug, Clone)]
pub struct SuppressionPolicy {
    fragments: Vec<String>,
}

impl SuppressionPolicy {
    /// Create a policy from message fragments
    pub fn new(fragments: impl IntoIterator<Item = String>) -> Self {
        Self {
            fragments: fragments.into_iter().collect(),
        }
    }

    /// The process-wide policy covering the documented upstream defect
    pub fn default_policy() -> &'static SuppressionPolicy {
        &DEFAULT_POLICY
    }

    /// True iff the error message contains any suppressed fragment
    pub fn is_suppressed(&self, err: &Error) -> bool {
        let message = err.to_string();
        self.fragments.iter().any(|f| message.contains(f))
    }
}

impl Default for SuppressionPolicy {
    fn default() -> Self {
        DEFAULT_POLICY.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FullRecord;

    fn decode_error_for(body: &str) -> Error {
        let parse_failure = serde_json::from_str::<FullRecord>(body).unwrap_err();
        Error::decode(parse_failure.to_string())
    }

    #[test]
    fn test_not_found_body_is_suppressed() {
        // The documented defect: a miss served as a non-JSON body.
        let err = decode_error_for("Not Found");
        assert!(SuppressionPolicy::default_policy().is_suppressed(&err));
    }

    #[test]
    fn test_truncated_json_is_not_suppressed() {
        // A decode failure mid-document is a real error, not a miss.
        let err = decode_error_for(r#"{"id": 1, "name": "#);
        assert!(!SuppressionPolicy::default_policy().is_suppressed(&err));
    }

    #[test]
    fn test_transport_class_errors_are_not_suppressed() {
        let policy = SuppressionPolicy::default_policy();
        assert!(!policy.is_suppressed(&Error::http_status(500, "upstream down")));
        assert!(!policy.is_suppressed(&Error::malformed_cursor("https://x/?limit=20", "missing")));
    }

    #[test]
    fn test_custom_fragments() {
        let policy = SuppressionPolicy::new(vec!["no such record".to_string()]);
        assert!(policy.is_suppressed(&Error::decode("upstream said: no such record")));
        assert!(!policy.is_suppressed(&Error::decode("expected value at line 1 column 1")));
    }
}
