//! Error types for OSM document ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that end a streaming pass over a source document.
///
/// All of them are fatal: the stream yields the error once and then stops.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Source file could not be opened.
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed XML syntax (or an I/O error while reading).
    #[error("malformed XML at byte {position}: {source}")]
    Xml {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    /// Malformed attribute on an element.
    #[error("malformed attribute at byte {position}: {source}")]
    Attribute {
        position: u64,
        #[source]
        source: quick_xml::events::attributes::AttrError,
    },

    /// Attribute name or value that cannot be decoded, or has a bad escape.
    #[error("invalid attribute at byte {position}: {source}")]
    AttributeValue {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    /// Document ended while an element was still open.
    #[error("document ended inside an unclosed <{element}> element")]
    UnexpectedEof { element: String },

    /// Document holds no root element at all.
    #[error("document has no root element")]
    MissingRoot,

    /// Element or text found after the root element was closed.
    #[error("content after the root element at byte {position}")]
    TrailingContent { position: u64 },
}

/// Result type alias for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
