//! Remote store adapter
//!
//! The only place that knows the store's JSON schema. `wire` holds the
//! serde shapes, `inbound` maps responses to blocks, `outbound` maps blocks
//! to request payloads.
//!
//! As a [`Format`], "notion-json" reads either a bare array of block objects
//! or a children listing (`{"results": [...]}`) and writes a pretty-printed
//! array of block request payloads, the same JSON sent on an append call.

pub mod inbound;
pub mod language;
pub mod outbound;
pub mod wire;

pub use inbound::{block_from_remote, blocks_from_remote, extract_title, rich_text_from_remote};
pub use language::map_language;
pub use outbound::{
    block_to_request, blocks_to_requests, chunk_requests, page_request, rich_text_to_request,
    MAX_BLOCKS_PER_REQUEST,
};

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::Block;
use serde::Deserialize;
use wire::{BlockChildrenList, RemoteBlock};

#[derive(Deserialize)]
#[serde(untagged)]
enum BlocksDocument {
    List(Vec<RemoteBlock>),
    Children(BlockChildrenList),
}

/// Format implementation for store block JSON
pub struct NotionJsonFormat;

impl Format for NotionJsonFormat {
    fn name(&self) -> &str {
        "notion-json"
    }

    fn description(&self) -> &str {
        "Notion block objects as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Vec<Block>, FormatError> {
        let document: BlocksDocument = serde_json::from_str(source)
            .map_err(|e| FormatError::ParseError(format!("Invalid block JSON: {e}")))?;
        let remote = match document {
            BlocksDocument::List(blocks) => blocks,
            BlocksDocument::Children(listing) => listing.results,
        };
        Ok(blocks_from_remote(&remote))
    }

    fn serialize(&self, blocks: &[Block]) -> Result<String, FormatError> {
        serde_json::to_string_pretty(&blocks_to_requests(blocks))
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}
