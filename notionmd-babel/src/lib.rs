//! Markdown ↔ page-block conversion for block-based document stores
//!
//!     This crate converts between Markdown text and the block model of a
//!     block-based document store (Notion), and between that model and the
//!     store's JSON wire shapes. It is a pure lib: no network, no env vars,
//!     no printing. The service and CLI crates sit on top of it.
//!
//! Architecture
//!
//!     Every conversion goes through one format-agnostic representation, the
//!     block sequence in ./ir/nodes.rs. Markdown never talks to the wire
//!     format directly; each side only maps onto [`Block`]. That keeps the
//!     per-format code focused on one data-shape transformation each.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── identifier.rs           # Page id validation and normalization
//!     ├── formats
//!     │   ├── markdown            # parser.rs (comrak AST → blocks), serializer.rs
//!     │   └── notion              # wire shapes, inbound/outbound mapping, languages
//!     ├── ir                      # Block model
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── markdown
//!     ├── notion
//!     └── identifier.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so
//!     they are included from tests/lib.rs.
//!
//! Lossiness
//!
//!     Markdown → blocks flattens inline markup and nested lists; blocks →
//!     Markdown drops links and annotations. A round trip preserves block
//!     types, order and text for the supported subset, not exact source text.
//!     See ./formats/markdown/mod.rs for the mapping table.
//!
//! Library Choices
//!
//!     Markdown parsing is delegated to comrak. The Markdown writer is hand
//!     written because its blank-line layout is part of the output contract.
//!     Wire shapes are plain serde structs over serde_json.

pub mod error;
pub mod format;
pub mod formats;
pub mod identifier;
pub mod ir;
pub mod registry;

pub use error::{FormatError, TokenError};
pub use format::Format;
pub use formats::{MarkdownFormat, NotionJsonFormat};
pub use identifier::{
    is_valid_page_id, normalize_page_id, validate_and_normalize, IdValidation, IdentifierError,
    PageId,
};
pub use ir::nodes::{Block, ConversionResult, RichTextSpan};
pub use registry::FormatRegistry;

/// Convert Markdown to blocks, collecting every per-token failure.
pub fn markdown_to_blocks(markdown: &str) -> ConversionResult {
    formats::markdown::parser::parse_from_markdown(markdown)
}

/// Convert blocks to Markdown.
pub fn blocks_to_markdown(blocks: &[Block]) -> String {
    formats::markdown::serializer::serialize_to_markdown(blocks)
}
