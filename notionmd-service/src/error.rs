//! Error types for the document service and the store client

use thiserror::Error;

/// Failures talking to the remote document store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store answered with a non-success status
    #[error("Notion API error ({status}): {code}: {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    /// The request never produced a response
    #[error("Request to Notion failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not have the expected shape
    #[error("Unexpected response from Notion: {0}")]
    Decode(String),

    /// The client could not be built from its settings
    #[error("Invalid client settings: {0}")]
    InvalidSettings(String),
}

impl StoreError {
    pub fn api(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn decode(reason: impl Into<String>) -> Self {
        Self::Decode(reason.into())
    }
}

/// Failures of a document service operation
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Markdown could not be converted; nothing was written
    #[error("Markdown conversion failed: {}", .0.join(", "))]
    Conversion(Vec<String>),

    /// A store call failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Required configuration is missing for this operation
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ServiceError {
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration(reason.into())
    }
}

/// Failures starting the HTTP server
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },

    #[error("Failed to start runtime: {0}")]
    Runtime(std::io::Error),
}

/// Result type for store calls
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
