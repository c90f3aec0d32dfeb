//! Error types for document encoding

use thiserror::Error;

/// Errors that can occur while writing a document as markup
#[derive(Debug, Error)]
pub enum EncodeError {
    /// A numeric attribute held NaN or an infinity, which has no SVG spelling
    #[error("attribute '{attr}' has non-finite value {value}")]
    NonFiniteNumber { attr: String, value: f64 },

    /// The output sink rejected a write
    #[error("failed to write markup: {0}")]
    Fmt(#[from] std::fmt::Error),
}

impl EncodeError {
    /// Create a non-finite number error for the named attribute
    pub fn non_finite(attr: impl Into<String>, value: f64) -> Self {
        Self::NonFiniteNumber {
            attr: attr.into(),
            value,
        }
    }
}
