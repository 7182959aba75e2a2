//! Error types for KML document processing.

use thiserror::Error;

/// Errors that can occur while parsing a KML document.
///
/// Only document-level failures live here; they are always returned, never
/// swallowed into an empty result. Per-token coordinate problems are
/// non-fatal and reported as
/// [`CoordinateWarning`](crate::geometry::CoordinateWarning)s instead.
#[derive(Debug, Error)]
pub enum KmlError {
    /// The input is not well-formed XML.
    #[error("XML syntax error at byte {position}: {message}")]
    Syntax { position: u64, message: String },

    /// The input ended while an element was still open.
    #[error("unexpected end of document: <{tag}> is never closed")]
    UnclosedElement { tag: String },

    /// The input contains no root element.
    #[error("document contains no root element")]
    EmptyDocument,

    /// Markup or text found after the root element closed.
    #[error("unexpected content after the root element at byte {position}")]
    TrailingContent { position: u64 },

    /// Element nesting exceeded the configured ceiling.
    #[error("element nesting exceeds the configured limit of {limit}")]
    DepthLimitExceeded { limit: usize },

    /// Input text exceeded the configured ceiling.
    #[error("input of {len} bytes exceeds the configured limit of {limit}")]
    InputTooLarge { len: usize, limit: usize },
}

impl KmlError {
    /// Create a syntax error at a byte position.
    pub(crate) fn syntax(position: u64, message: impl std::fmt::Display) -> Self {
        Self::Syntax {
            position,
            message: message.to_string(),
        }
    }
}
