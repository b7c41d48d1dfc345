//! reqwest-backed [`DocumentStore`] talking to the Notion REST API.
//!
//! Failures are logged where they are detected and returned as-is; there is
//! no retry or backoff.

use crate::error::{StoreError, StoreResult};
use crate::store::DocumentStore;
use notionmd_babel::formats::notion::wire::{
    AppendChildrenRequest, BlockChildrenList, BlockRequest, CreatePageRequest, RemoteErrorBody,
    RemotePage,
};
use notionmd_babel::formats::notion::MAX_BLOCKS_PER_REQUEST;
use notionmd_babel::PageId;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;

pub const DEFAULT_BASE_URL: &str = "https://api.notion.com/v1";
pub const DEFAULT_API_VERSION: &str = "2022-06-28";

/// Connection settings for [`NotionClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub token: String,
    pub base_url: String,
    pub api_version: String,
}

impl ClientSettings {
    /// Settings for the public API with the given integration token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }
}

pub struct NotionClient {
    http: reqwest::Client,
    base_url: String,
}

impl NotionClient {
    pub fn new(settings: &ClientSettings) -> StoreResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", settings.token)).map_err(|_| {
                StoreError::InvalidSettings("token is not a valid header value".into())
            })?,
        );
        headers.insert(
            "Notion-Version",
            HeaderValue::from_str(&settings.api_version).map_err(|_| {
                StoreError::InvalidSettings("api version is not a valid header value".into())
            })?,
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: reqwest::RequestBuilder,
    ) -> StoreResult<T> {
        let response = request.send().await.map_err(|err| {
            tracing::error!(operation, error = %err, "request to Notion failed");
            StoreError::from(err)
        })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let body: RemoteErrorBody = serde_json::from_str(&text).unwrap_or_default();
            let message = if body.message.is_empty() {
                text
            } else {
                body.message
            };
            let code = if body.code.is_empty() {
                "unknown".to_string()
            } else {
                body.code
            };
            let error = StoreError::api(status.as_u16(), code, message);
            tracing::error!(operation, %error, "Notion returned an error");
            return Err(error);
        }

        response.json::<T>().await.map_err(|err| {
            tracing::error!(operation, error = %err, "could not decode Notion response");
            StoreError::decode(err.to_string())
        })
    }
}

impl DocumentStore for NotionClient {
    async fn retrieve_page(&self, page_id: &PageId) -> StoreResult<RemotePage> {
        tracing::debug!(%page_id, "retrieving page");
        let request = self.http.get(self.url(&format!("pages/{page_id}")));
        self.send("retrieve_page", request).await
    }

    async fn list_children(
        &self,
        block_id: &PageId,
        cursor: Option<&str>,
    ) -> StoreResult<BlockChildrenList> {
        tracing::debug!(%block_id, cursor, "listing children");
        let page_size = MAX_BLOCKS_PER_REQUEST.to_string();
        let mut query = vec![("page_size", page_size.as_str())];
        if let Some(cursor) = cursor {
            query.push(("start_cursor", cursor));
        }
        let request = self
            .http
            .get(self.url(&format!("blocks/{block_id}/children")))
            .query(&query);
        self.send("list_children", request).await
    }

    async fn append_children(
        &self,
        block_id: &PageId,
        children: &[BlockRequest],
    ) -> StoreResult<()> {
        tracing::debug!(%block_id, count = children.len(), "appending children");
        let request = self
            .http
            .patch(self.url(&format!("blocks/{block_id}/children")))
            .json(&AppendChildrenRequest { children });
        self.send::<serde_json::Value>("append_children", request)
            .await
            .map(|_| ())
    }

    async fn create_page(&self, request: &CreatePageRequest) -> StoreResult<RemotePage> {
        tracing::debug!(children = request.children.len(), "creating page");
        let request = self.http.post(self.url("pages")).json(request);
        self.send("create_page", request).await
    }
}
