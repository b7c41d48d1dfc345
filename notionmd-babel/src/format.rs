//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! The trait provides a uniform interface for parsing and serializing block sequences.

use crate::error::FormatError;
use crate::ir::nodes::Block;

/// Trait for document formats
///
/// Implementors provide bidirectional conversion between a string representation and blocks.
/// Formats can support parsing, serialization, or both.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_parsing(&self) -> bool {
///         true
///     }
///
///     fn parse(&self, source: &str) -> Result<Vec<Block>, FormatError> {
///         todo!()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "markdown", "notion-json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    ///
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → blocks)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (blocks → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into blocks
    ///
    /// Default implementation returns NotSupported error.
    fn parse(&self, _source: &str) -> Result<Vec<Block>, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize blocks into source text
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _blocks: &[Block]) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}
