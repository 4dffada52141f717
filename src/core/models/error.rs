//! Catalog error types.

/// Errors from building the model catalog.
///
/// Records missing their identifiers are skipped during normalization and never
/// show up here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// An upstream listing (or one of its pages) failed: network, auth, throttling.
    #[error("Upstream {operation} failed: {message}")]
    Upstream {
        operation: &'static str,
        message: String,
    },
}

impl CatalogError {
    pub fn upstream(operation: &'static str, err: impl std::fmt::Display) -> Self {
        CatalogError::Upstream {
            operation,
            message: err.to_string(),
        }
    }

    /// Stable machine-readable kind for HTTP error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::Upstream { .. } => "upstream_unavailable",
        }
    }
}
