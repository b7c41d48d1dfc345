//! Wire shapes of the remote document store.
//!
//! Response types are tolerant: unknown fields are ignored and missing ones
//! default, so schema additions on the remote side do not break reads.
//! Request types serialize to exactly what the store expects on writes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// A block object as returned by the store.
///
/// The type-specific payload lives under a key named after the type tag, so
/// everything except the common fields is kept in `payloads`.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteBlock {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub has_children: bool,
    #[serde(flatten)]
    pub payloads: Map<String, Value>,
}

/// Payload of every text-bearing block type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteTextPayload {
    #[serde(default)]
    pub rich_text: Vec<RemoteRichText>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub checked: Option<bool>,
}

/// Payload of an image block: either an external URL or a store-hosted file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteImagePayload {
    #[serde(default)]
    pub external: Option<RemoteFile>,
    #[serde(default)]
    pub file: Option<RemoteFile>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteFile {
    pub url: String,
}

/// One rich-text item. Responses carry `plain_text`/`href`; request
/// payloads only carry `text`, which is accepted as a fallback.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteRichText {
    #[serde(default)]
    pub plain_text: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub annotations: Option<RemoteAnnotations>,
    #[serde(default)]
    pub text: Option<RemoteTextContent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteTextContent {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub link: Option<RemoteLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteLink {
    pub url: String,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RemoteAnnotations {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub strikethrough: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub code: bool,
}

/// A page object. Properties keep their remote order.
#[derive(Debug, Clone, Deserialize)]
pub struct RemotePage {
    pub id: String,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

/// The parts of a page property needed for title extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteProperty {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub title: Vec<RemoteRichText>,
    #[serde(default)]
    pub rich_text: Vec<RemoteRichText>,
}

/// One page of a children listing.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockChildrenList {
    #[serde(default)]
    pub results: Vec<RemoteBlock>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// Error body returned with non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteErrorBody {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// A block in an append or create request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockRequest {
    pub object: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(flatten)]
    pub body: BlockBody,
}

impl BlockRequest {
    pub fn new(body: BlockBody) -> Self {
        BlockRequest {
            object: "block",
            kind: body.type_name(),
            body,
        }
    }
}

/// Type-specific payload, serialized under a key equal to the type tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum BlockBody {
    #[serde(rename = "paragraph")]
    Paragraph(TextBody),
    #[serde(rename = "heading_1")]
    Heading1(TextBody),
    #[serde(rename = "heading_2")]
    Heading2(TextBody),
    #[serde(rename = "heading_3")]
    Heading3(TextBody),
    #[serde(rename = "bulleted_list_item")]
    BulletedListItem(TextBody),
    #[serde(rename = "numbered_list_item")]
    NumberedListItem(TextBody),
    #[serde(rename = "code")]
    Code(CodeBody),
    #[serde(rename = "quote")]
    Quote(TextBody),
    #[serde(rename = "to_do")]
    ToDo(ToDoBody),
    #[serde(rename = "image")]
    Image(ImageBody),
}

impl BlockBody {
    pub fn type_name(&self) -> &'static str {
        match self {
            BlockBody::Paragraph(_) => "paragraph",
            BlockBody::Heading1(_) => "heading_1",
            BlockBody::Heading2(_) => "heading_2",
            BlockBody::Heading3(_) => "heading_3",
            BlockBody::BulletedListItem(_) => "bulleted_list_item",
            BlockBody::NumberedListItem(_) => "numbered_list_item",
            BlockBody::Code(_) => "code",
            BlockBody::Quote(_) => "quote",
            BlockBody::ToDo(_) => "to_do",
            BlockBody::Image(_) => "image",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextBody {
    pub rich_text: Vec<RichTextRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeBody {
    pub rich_text: Vec<RichTextRequest>,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToDoBody {
    pub rich_text: Vec<RichTextRequest>,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageBody {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub external: ExternalFile,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExternalFile {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RichTextRequest {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: TextRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<AnnotationsRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRequest {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<LinkRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkRequest {
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnnotationsRequest {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
}

/// Body of a children append call.
#[derive(Debug, Serialize)]
pub struct AppendChildrenRequest<'a> {
    pub children: &'a [BlockRequest],
}

/// Where a new page is created.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageParent {
    PageId(String),
    DatabaseId(String),
}

/// Body of a page creation call.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePageRequest {
    pub parent: PageParent,
    pub properties: TitleProperties,
    pub children: Vec<BlockRequest>,
}

/// The title property; `title` is also the fixed id of a database's title column.
#[derive(Debug, Clone, Serialize)]
pub struct TitleProperties {
    pub title: TitleProperty,
}

#[derive(Debug, Clone, Serialize)]
pub struct TitleProperty {
    pub title: Vec<RichTextRequest>,
}
