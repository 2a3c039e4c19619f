//! Error taxonomy for source lookups.
//!
//! Two failure classes exist: the network layer (timeout, connection
//! refused, non-2xx status) and the structural layer (a configured selector
//! is invalid, or an expected node is absent). Both are handled identically
//! at the aggregation boundary — collapsed to the source's empty value — but
//! keeping them distinct internally makes the failure paths testable and
//! gives the logs a usable cause.

use thiserror::Error;

/// Why a source lookup produced no data.
///
/// This error never escapes a public fetch operation; it is logged and
/// swallowed where the degraded value is produced.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Network-level failure: timeout, connection error, or non-2xx status.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A configured selector string failed to parse.
    #[error("invalid selector {0:?}")]
    Selector(String),

    /// An expected node or attribute is absent from the fetched document.
    #[error("unexpected document structure: {0}")]
    Structure(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structure_error_display() {
        let error = SourceError::Structure("prayer item has no name span");
        assert_eq!(
            error.to_string(),
            "unexpected document structure: prayer item has no name span"
        );
    }

    #[test]
    fn test_selector_error_display() {
        let error = SourceError::Selector("div..broken".to_string());
        assert!(error.to_string().contains("div..broken"));
    }
}
