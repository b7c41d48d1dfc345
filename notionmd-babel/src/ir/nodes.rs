//! Core data structures for the block model.
//!
//! Every conversion in this crate goes through [`Block`]: Markdown is parsed
//! into blocks, blocks are written back to Markdown, and the remote wire
//! shapes are mapped onto the same enum in both directions.

/// Maximum number of characters the remote store accepts in one rich-text run.
pub const MAX_RICH_TEXT_LENGTH: usize = 2000;

/// Language tag used for code blocks without a (known) language.
pub const PLAIN_TEXT_LANGUAGE: &str = "plain text";

/// A structured unit of page content.
///
/// Each text-bearing variant owns its own `rich_text`, so a block can never
/// carry a payload for a type other than its own tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph { rich_text: Vec<RichTextSpan> },
    Heading1 { rich_text: Vec<RichTextSpan> },
    Heading2 { rich_text: Vec<RichTextSpan> },
    Heading3 { rich_text: Vec<RichTextSpan> },
    BulletedListItem { rich_text: Vec<RichTextSpan> },
    NumberedListItem { rich_text: Vec<RichTextSpan> },
    Code {
        rich_text: Vec<RichTextSpan>,
        language: String,
    },
    Quote { rich_text: Vec<RichTextSpan> },
    ToDo {
        rich_text: Vec<RichTextSpan>,
        checked: bool,
    },
    Image { url: String },
}

impl Block {
    /// Paragraph with `text` split into spans.
    pub fn paragraph(text: &str) -> Self {
        Block::Paragraph {
            rich_text: split_rich_text(text),
        }
    }

    /// Heading for `level` 1-3; deeper levels degrade to a paragraph.
    pub fn heading(level: u8, text: &str) -> Self {
        let rich_text = split_rich_text(text);
        match level {
            1 => Block::Heading1 { rich_text },
            2 => Block::Heading2 { rich_text },
            3 => Block::Heading3 { rich_text },
            _ => Block::Paragraph { rich_text },
        }
    }

    pub fn bulleted(text: &str) -> Self {
        Block::BulletedListItem {
            rich_text: split_rich_text(text),
        }
    }

    pub fn numbered(text: &str) -> Self {
        Block::NumberedListItem {
            rich_text: split_rich_text(text),
        }
    }

    pub fn code(text: &str, language: impl Into<String>) -> Self {
        Block::Code {
            rich_text: split_rich_text(text),
            language: language.into(),
        }
    }

    pub fn quote(text: &str) -> Self {
        Block::Quote {
            rich_text: split_rich_text(text),
        }
    }

    pub fn to_do(text: &str, checked: bool) -> Self {
        Block::ToDo {
            rich_text: split_rich_text(text),
            checked,
        }
    }

    pub fn image(url: impl Into<String>) -> Self {
        Block::Image { url: url.into() }
    }

    /// The wire tag of this block (e.g. `"heading_1"`).
    pub fn type_name(&self) -> &'static str {
        match self {
            Block::Paragraph { .. } => "paragraph",
            Block::Heading1 { .. } => "heading_1",
            Block::Heading2 { .. } => "heading_2",
            Block::Heading3 { .. } => "heading_3",
            Block::BulletedListItem { .. } => "bulleted_list_item",
            Block::NumberedListItem { .. } => "numbered_list_item",
            Block::Code { .. } => "code",
            Block::Quote { .. } => "quote",
            Block::ToDo { .. } => "to_do",
            Block::Image { .. } => "image",
        }
    }

    /// Rich text payload, `None` for images.
    pub fn rich_text(&self) -> Option<&[RichTextSpan]> {
        match self {
            Block::Paragraph { rich_text }
            | Block::Heading1 { rich_text }
            | Block::Heading2 { rich_text }
            | Block::Heading3 { rich_text }
            | Block::BulletedListItem { rich_text }
            | Block::NumberedListItem { rich_text }
            | Block::Code { rich_text, .. }
            | Block::Quote { rich_text }
            | Block::ToDo { rich_text, .. } => Some(rich_text),
            Block::Image { .. } => None,
        }
    }

    /// Concatenated span contents; empty for images.
    pub fn plain_text(&self) -> String {
        self.rich_text().map(concat_spans).unwrap_or_default()
    }

    /// Whether this block takes part in a contiguous list run when written
    /// back to Markdown.
    pub fn is_list_item(&self) -> bool {
        matches!(
            self,
            Block::BulletedListItem { .. } | Block::NumberedListItem { .. } | Block::ToDo { .. }
        )
    }
}

/// A run of text plus optional link and annotation metadata.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RichTextSpan {
    pub content: String,
    pub link: Option<Link>,
    pub annotations: Option<Annotations>,
}

impl RichTextSpan {
    /// Plain span with no link or annotations.
    pub fn plain(content: impl Into<String>) -> Self {
        RichTextSpan {
            content: content.into(),
            link: None,
            annotations: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub url: String,
}

/// Text styling flags carried for remote-store fidelity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
}

/// Split `text` into spans of at most [`MAX_RICH_TEXT_LENGTH`] characters.
///
/// Boundaries fall on exact character counts, never on word boundaries; the
/// result has `ceil(len / 2000)` spans and only the last may be shorter.
/// Empty input yields no spans.
pub fn split_rich_text(text: &str) -> Vec<RichTextSpan> {
    let mut spans = Vec::new();
    let mut current = String::new();
    let mut count = 0;

    for ch in text.chars() {
        current.push(ch);
        count += 1;
        if count == MAX_RICH_TEXT_LENGTH {
            spans.push(RichTextSpan::plain(std::mem::take(&mut current)));
            count = 0;
        }
    }

    if !current.is_empty() {
        spans.push(RichTextSpan::plain(current));
    }

    spans
}

/// Concatenate span contents with no separator, ignoring links and annotations.
pub fn concat_spans(spans: &[RichTextSpan]) -> String {
    spans.iter().map(|span| span.content.as_str()).collect()
}

/// Outcome of a Markdown → block conversion.
///
/// A non-empty `errors` list means the conversion failed as a whole, even
/// though `blocks` may be partially populated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConversionResult {
    pub blocks: Vec<Block>,
    pub errors: Vec<String>,
}

impl ConversionResult {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Blocks if the conversion succeeded, otherwise the collected errors.
    pub fn into_result(self) -> Result<Vec<Block>, Vec<String>> {
        if self.errors.is_empty() {
            Ok(self.blocks)
        } else {
            Err(self.errors)
        }
    }
}
