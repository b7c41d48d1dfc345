//! Error types for format operations

use std::fmt;

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during parsing
    ParseError(String),
    /// One or more tokens could not be mapped to blocks
    ConversionFailed(Vec<String>),
    /// Error during serialization
    SerializationError(String),
    /// Format does not support the requested direction
    NotSupported(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            FormatError::ConversionFailed(errors) => {
                write!(f, "Markdown conversion failed: {}", errors.join(", "))
            }
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            FormatError::NotSupported(msg) => write!(f, "Operation not supported: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Errors produced while mapping a single Markdown token to a block.
///
/// These never escape the converter directly; they are collected into
/// [`crate::ir::nodes::ConversionResult::errors`] as messages.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenError {
    /// Image source is empty or not an absolute URL
    InvalidImageUrl(String),
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::InvalidImageUrl(url) if url.is_empty() => {
                write!(f, "image has no source URL")
            }
            TokenError::InvalidImageUrl(url) => {
                write!(f, "image URL '{url}' is not an absolute URL")
            }
        }
    }
}

impl std::error::Error for TokenError {}
