//! The seam between the document service and the remote store.
//!
//! [`crate::client::NotionClient`] is the production implementation; tests
//! plug in an in-memory store.

use crate::error::StoreResult;
use notionmd_babel::formats::notion::wire::{
    BlockChildrenList, BlockRequest, CreatePageRequest, RemotePage,
};
use notionmd_babel::PageId;

/// The four store calls the service needs.
///
/// Every call is awaited to completion before the caller continues; the
/// service never issues two calls concurrently.
#[allow(async_fn_in_trait)]
pub trait DocumentStore {
    /// Page metadata, including properties.
    async fn retrieve_page(&self, page_id: &PageId) -> StoreResult<RemotePage>;

    /// One page of a block's children, starting at `cursor`.
    async fn list_children(
        &self,
        block_id: &PageId,
        cursor: Option<&str>,
    ) -> StoreResult<BlockChildrenList>;

    /// Append at most [`notionmd_babel::formats::notion::MAX_BLOCKS_PER_REQUEST`]
    /// children to a block.
    async fn append_children(&self, block_id: &PageId, children: &[BlockRequest])
        -> StoreResult<()>;

    /// Create a page and return it.
    async fn create_page(&self, request: &CreatePageRequest) -> StoreResult<RemotePage>;
}
