//! Markdown format implementation
//!
//! This module implements bidirectional conversion between CommonMark Markdown and blocks.
//!
//! # Library Choice
//!
//! We use the `comrak` crate for Markdown parsing. Serialization is written by hand because
//! the output layout (blank-line rules, literal `1.` markers) is part of the contract and
//! does not match what a CommonMark renderer emits.
//!
//! # Element Mapping Table
//!
//! | Block              | Markdown Equivalent   | Export Notes                         | Import Notes                           |
//! |--------------------|-----------------------|--------------------------------------|----------------------------------------|
//! | paragraph          | Paragraph             | Text + blank line                    | Inline markup flattened to text        |
//! | heading_1..3       | Heading (# ## ###)    | Level → number of `#`                | Levels 4-6 become paragraphs           |
//! | bulleted_list_item | `- item`              | Grouped into list runs               | One block per item, nesting flattened  |
//! | numbered_list_item | `1. item`             | Always `1.`                          | One block per item, nesting flattened  |
//! | to_do              | `- [ ] item`          | Grouped into list runs               | Not recognized (becomes bulleted item) |
//! | code               | Fenced code block     | Language → info string               | First info word → language             |
//! | quote              | `> text`              | Single `> ` prefix                   | Child paragraphs joined by newlines    |
//! | image              | `![](url)`            | External URL only                    | Standalone image paragraph, absolute URL required |
//!
//! # Lossy Conversions
//!
//! - Bold, italic, links and other inline spans → plain text (annotations are not parsed)
//! - Nested lists → flat sequence of items
//! - Numbered list start values → always `1.`
//! - Tables, HTML blocks, thematic breaks → dropped or kept as paragraph text
//! - Exact source whitespace is not preserved

pub mod parser;
pub mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::Block;

/// Format implementation for Markdown
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "CommonMark Markdown format"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Vec<Block>, FormatError> {
        parser::parse_from_markdown(source)
            .into_result()
            .map_err(FormatError::ConversionFailed)
    }

    fn serialize(&self, blocks: &[Block]) -> Result<String, FormatError> {
        Ok(serializer::serialize_to_markdown(blocks))
    }
}
