//! Format implementations
//!
//! Each format converts between the block model and one text representation.

pub mod markdown;
pub mod notion;

pub use markdown::MarkdownFormat;
pub use notion::NotionJsonFormat;
