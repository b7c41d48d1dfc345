//! Block model shared by every format.
//!
//! Markdown and the remote wire format never talk to each other directly;
//! both map onto [`nodes::Block`].

pub mod nodes;

pub use nodes::{
    concat_spans, split_rich_text, Annotations, Block, ConversionResult, Link, RichTextSpan,
    MAX_RICH_TEXT_LENGTH, PLAIN_TEXT_LANGUAGE,
};
