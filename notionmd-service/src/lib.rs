//! Page operations against a block-based document store.
//!
//! The conversion itself lives in notionmd-babel. This crate adds the
//! parts that touch the outside world: the [`DocumentStore`] seam and its
//! reqwest implementation, the [`DocumentService`] orchestrating reads and
//! chunked writes, and a small HTTP API in front of it.
//!
//! ```text
//! .
//! ├── error.rs      # ServiceError, StoreError, ServeError
//! ├── store.rs      # DocumentStore trait
//! ├── client.rs     # NotionClient (reqwest)
//! ├── service.rs    # DocumentService: get / append / create
//! ├── api.rs        # Routing, auth and JSON bodies
//! └── server.rs     # tiny_http accept loop
//! ```
//!
//! Nothing here reads environment variables; settings are passed in by
//! the caller (see notionmd-config).

pub mod api;
pub mod client;
pub mod error;
pub mod server;
pub mod service;
pub mod store;

pub use api::{Api, ApiRequest, ApiResponse, Method};
pub use client::{ClientSettings, NotionClient};
pub use error::{ServeError, ServiceError, ServiceResult, StoreError, StoreResult};
pub use service::{AppendOutcome, DocumentService, PageMarkdown, ServiceSettings};
pub use store::DocumentStore;
