//! Blocks → remote request payloads.

use super::language::map_language;
use super::wire::{
    AnnotationsRequest, BlockBody, BlockRequest, CodeBody, CreatePageRequest, ExternalFile,
    ImageBody, LinkRequest, PageParent, RichTextRequest, TextBody, TextRequest, TitleProperties,
    TitleProperty, ToDoBody,
};
use crate::ir::nodes::{split_rich_text, Block, RichTextSpan};

/// Maximum number of children the store accepts in one append or create call.
pub const MAX_BLOCKS_PER_REQUEST: usize = 100;

/// Build the request payload for one block.
///
/// Code languages are mapped to the store vocabulary here, so a block parsed
/// from a fence like ```` ```ts ```` is written as `typescript`.
pub fn block_to_request(block: &Block) -> BlockRequest {
    let body = match block {
        Block::Paragraph { rich_text } => BlockBody::Paragraph(text_body(rich_text)),
        Block::Heading1 { rich_text } => BlockBody::Heading1(text_body(rich_text)),
        Block::Heading2 { rich_text } => BlockBody::Heading2(text_body(rich_text)),
        Block::Heading3 { rich_text } => BlockBody::Heading3(text_body(rich_text)),
        Block::BulletedListItem { rich_text } => BlockBody::BulletedListItem(text_body(rich_text)),
        Block::NumberedListItem { rich_text } => BlockBody::NumberedListItem(text_body(rich_text)),
        Block::Quote { rich_text } => BlockBody::Quote(text_body(rich_text)),
        Block::Code {
            rich_text,
            language,
        } => BlockBody::Code(CodeBody {
            rich_text: rich_text_to_request(rich_text),
            language: map_language(language).to_string(),
        }),
        Block::ToDo { rich_text, checked } => BlockBody::ToDo(ToDoBody {
            rich_text: rich_text_to_request(rich_text),
            checked: *checked,
        }),
        Block::Image { url } => BlockBody::Image(ImageBody {
            kind: "external",
            external: ExternalFile { url: url.clone() },
        }),
    };
    BlockRequest::new(body)
}

pub fn blocks_to_requests(blocks: &[Block]) -> Vec<BlockRequest> {
    blocks.iter().map(block_to_request).collect()
}

/// Map spans to request rich text, one item per span.
pub fn rich_text_to_request(spans: &[RichTextSpan]) -> Vec<RichTextRequest> {
    spans
        .iter()
        .map(|span| RichTextRequest {
            kind: "text",
            text: TextRequest {
                content: span.content.clone(),
                link: span.link.as_ref().map(|link| LinkRequest {
                    url: link.url.clone(),
                }),
            },
            annotations: span.annotations.map(|a| AnnotationsRequest {
                bold: a.bold,
                italic: a.italic,
                strikethrough: a.strikethrough,
                underline: a.underline,
                code: a.code,
            }),
        })
        .collect()
}

/// Split requests into consecutive batches of at most
/// [`MAX_BLOCKS_PER_REQUEST`], preserving order.
pub fn chunk_requests(requests: &[BlockRequest]) -> impl Iterator<Item = &[BlockRequest]> {
    requests.chunks(MAX_BLOCKS_PER_REQUEST)
}

/// Page creation payload. The title is split like any other text.
pub fn page_request(
    parent: PageParent,
    title: &str,
    children: Vec<BlockRequest>,
) -> CreatePageRequest {
    CreatePageRequest {
        parent,
        properties: TitleProperties {
            title: TitleProperty {
                title: rich_text_to_request(&split_rich_text(title)),
            },
        },
        children,
    }
}

fn text_body(rich_text: &[RichTextSpan]) -> TextBody {
    TextBody {
        rich_text: rich_text_to_request(rich_text),
    }
}
