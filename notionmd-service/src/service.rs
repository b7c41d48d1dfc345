//! Document service: the three page operations over a [`DocumentStore`].
//!
//! Markdown is always converted in full before the first write. A failed
//! conversion aborts the operation with every collected token error and the
//! store is never called.

use crate::error::{ServiceError, ServiceResult, StoreError, StoreResult};
use crate::store::DocumentStore;
use notionmd_babel::formats::notion::wire::{BlockRequest, PageParent, RemoteBlock};
use notionmd_babel::formats::notion::{
    blocks_from_remote, blocks_to_requests, chunk_requests, extract_title, page_request,
    MAX_BLOCKS_PER_REQUEST,
};
use notionmd_babel::{blocks_to_markdown, markdown_to_blocks, PageId};
use serde::Serialize;

/// Settings injected at construction; never looked up from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceSettings {
    /// Database used as parent when a page is created without one.
    pub default_parent_id: Option<PageId>,
}

/// A page rendered as Markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMarkdown {
    pub title: String,
    pub markdown: String,
}

/// What an append wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppendOutcome {
    pub blocks_written: usize,
    /// Number of append calls issued.
    pub requests: usize,
}

pub struct DocumentService<S> {
    store: S,
    settings: ServiceSettings,
}

impl<S: DocumentStore> DocumentService<S> {
    pub fn new(store: S, settings: ServiceSettings) -> Self {
        Self { store, settings }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn settings(&self) -> &ServiceSettings {
        &self.settings
    }

    /// Fetch a page and render its supported top-level blocks as Markdown.
    pub async fn get_page(&self, page_id: &PageId) -> ServiceResult<PageMarkdown> {
        let page = self.store.retrieve_page(page_id).await?;
        let title = extract_title(&page);

        let children = self.list_all_children(page_id).await?;
        let blocks = blocks_from_remote(&children);
        tracing::info!(%page_id, fetched = children.len(), rendered = blocks.len(), "page read");

        Ok(PageMarkdown {
            title,
            markdown: blocks_to_markdown(&blocks),
        })
    }

    /// Convert `markdown` and append the blocks to the end of a page.
    pub async fn append_page(
        &self,
        page_id: &PageId,
        markdown: &str,
    ) -> ServiceResult<AppendOutcome> {
        let requests = convert(markdown)?;
        let calls = self.append_in_chunks(page_id, &requests).await?;
        tracing::info!(%page_id, blocks = requests.len(), calls, "markdown appended");

        Ok(AppendOutcome {
            blocks_written: requests.len(),
            requests: calls,
        })
    }

    /// Create a page holding `markdown` and return its id.
    ///
    /// An explicit `parent` is a page; without one the configured default
    /// database is used.
    pub async fn create_page(
        &self,
        title: &str,
        markdown: &str,
        parent: Option<&PageId>,
    ) -> ServiceResult<PageId> {
        let parent = match (parent, &self.settings.default_parent_id) {
            (Some(page), _) => PageParent::PageId(page.to_string()),
            (None, Some(database)) => PageParent::DatabaseId(database.to_string()),
            (None, None) => {
                return Err(ServiceError::configuration(
                    "no parent page given and no default database configured",
                ))
            }
        };

        let mut requests = convert(markdown)?;
        let remainder = if requests.len() > MAX_BLOCKS_PER_REQUEST {
            requests.split_off(MAX_BLOCKS_PER_REQUEST)
        } else {
            Vec::new()
        };

        let created = self
            .store
            .create_page(&page_request(parent, title, requests))
            .await?;
        let page_id = PageId::parse(&created.id).map_err(|err| {
            StoreError::decode(format!("created page has an invalid id: {err}"))
        })?;

        let calls = self.append_in_chunks(&page_id, &remainder).await?;
        tracing::info!(%page_id, extra_calls = calls, "page created");

        Ok(page_id)
    }

    /// Every child of a block, following pagination cursors.
    async fn list_all_children(&self, block_id: &PageId) -> StoreResult<Vec<RemoteBlock>> {
        let mut children = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let listing = self
                .store
                .list_children(block_id, cursor.as_deref())
                .await?;
            children.extend(listing.results);

            match listing.next_cursor {
                Some(next) if listing.has_more => cursor = Some(next),
                _ => break,
            }
        }

        Ok(children)
    }

    /// One append call per chunk, each awaited before the next.
    async fn append_in_chunks(
        &self,
        block_id: &PageId,
        requests: &[BlockRequest],
    ) -> StoreResult<usize> {
        let mut calls = 0;
        for chunk in chunk_requests(requests) {
            self.store.append_children(block_id, chunk).await?;
            calls += 1;
            tracing::debug!(%block_id, chunk = calls, size = chunk.len(), "chunk written");
        }
        Ok(calls)
    }
}

fn convert(markdown: &str) -> ServiceResult<Vec<BlockRequest>> {
    let blocks = markdown_to_blocks(markdown).into_result().map_err(|errors| {
        tracing::warn!(errors = errors.len(), "markdown conversion failed");
        ServiceError::Conversion(errors)
    })?;
    Ok(blocks_to_requests(&blocks))
}
