//! Error definitions for document building and parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for XML operations.
#[derive(Debug, Error)]
pub enum XmlError {
    /// Input file does not exist.
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    /// Input is not well-formed XML or not a known document shape.
    #[error("malformed document: {0}")]
    Malformed(String),

    /// A chapter atom lacks a required element.
    #[error("chapter atom {entry} has no <{element}>")]
    MissingElement {
        /// 1-based atom position within the edition.
        entry: usize,
        /// Name of the absent element.
        element: &'static str,
    },

    /// XML writer error.
    #[error("XML write error: {0}")]
    Write(#[from] quick_xml::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for XML operation results.
pub type XmlResult<T> = Result<T, XmlError>;
