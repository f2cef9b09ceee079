// ============================================================================
// TsCat - Catalog Errors
// ============================================================================
//
// File: src/error.rs
// Responsibility: error type returned by catalog loading and file access
// Boundaries:
//   - ✅ Parse failure variants with enough detail to locate the problem
//   - ✅ I/O and encoding failures
//   - ❌ Should not contain CLI error formatting
//   - ❌ Should not contain lookup misses (those fall back to source text)
//
// ============================================================================

use thiserror::Error;

/// Failure to load a translation catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The XML itself is malformed (bad syntax, mismatched closing tag, bad entity).
    #[error("malformed catalog XML at byte {position}: {message}")]
    Xml { position: usize, message: String },

    /// Input ended while an element was still open.
    #[error("unterminated <{element}> element at end of input")]
    Unterminated { element: String },

    /// A structurally required child element is absent.
    #[error("<{parent}> is missing its required <{element}> element")]
    MissingElement {
        parent: &'static str,
        element: &'static str,
    },

    #[error("invalid value {value:?} for attribute `{attribute}` on <{element}>")]
    InvalidAttribute {
        element: &'static str,
        attribute: &'static str,
        value: String,
    },

    /// The document has no `<TS>` root element.
    #[error("document has no <TS> root element")]
    MissingRoot,

    #[error("catalog is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Name used by callers that only care that a load failed.
pub type ParseError = CatalogError;

pub type Result<T> = std::result::Result<T, CatalogError>;
