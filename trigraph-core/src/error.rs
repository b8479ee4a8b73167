//! Error types for trigraph-core.

use thiserror::Error;

/// Result type alias for trigraph-core operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors that can occur while mutating or (de)serializing a graph.
///
/// Queries never fail: unknown labels simply produce empty results.
#[derive(Error, Debug)]
pub enum GraphError {
    /// The JSON document could not be parsed into the graph wire format.
    #[error("Failed to decode graph JSON: {0}")]
    Decode(#[source] serde_json::Error),

    /// The graph could not be serialized to JSON.
    #[error("Failed to encode graph JSON: {0}")]
    Encode(#[source] serde_json::Error),

    /// A node label was empty or whitespace-only.
    #[error("Invalid {field}: node labels must not be blank")]
    Validation {
        /// Which argument carried the blank label (subject, object, id).
        field: &'static str,
    },
}

impl GraphError {
    /// Returns true if this error came from parsing a JSON document.
    pub fn is_decode(&self) -> bool {
        matches!(self, GraphError::Decode(_))
    }
}

/// Reject blank node labels.
pub(crate) fn ensure_label(field: &'static str, label: &str) -> Result<()> {
    if label.trim().is_empty() {
        return Err(GraphError::Validation { field });
    }
    Ok(())
}
