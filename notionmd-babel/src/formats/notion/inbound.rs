//! Remote wire shapes → blocks.
//!
//! Unsupported block types and malformed payloads are skipped, never fatal:
//! a page read should render whatever the model can represent.

use super::wire::{
    RemoteBlock, RemoteImagePayload, RemotePage, RemoteProperty, RemoteRichText, RemoteTextPayload,
};
use crate::ir::nodes::{Annotations, Block, Link, RichTextSpan, PLAIN_TEXT_LANGUAGE};
use serde::Deserialize;
use serde_json::Value;

/// Map one remote block, or `None` if its type is not modelled.
pub fn block_from_remote(block: &RemoteBlock) -> Option<Block> {
    let kind = block.kind.as_deref()?;
    let Some(payload) = block.payloads.get(kind) else {
        tracing::debug!(block_type = kind, "block has no payload, skipping");
        return None;
    };

    let block = match kind {
        "paragraph" => Block::Paragraph {
            rich_text: text_payload(kind, payload)?.rich_text(),
        },
        "heading_1" => Block::Heading1 {
            rich_text: text_payload(kind, payload)?.rich_text(),
        },
        "heading_2" => Block::Heading2 {
            rich_text: text_payload(kind, payload)?.rich_text(),
        },
        "heading_3" => Block::Heading3 {
            rich_text: text_payload(kind, payload)?.rich_text(),
        },
        "bulleted_list_item" => Block::BulletedListItem {
            rich_text: text_payload(kind, payload)?.rich_text(),
        },
        "numbered_list_item" => Block::NumberedListItem {
            rich_text: text_payload(kind, payload)?.rich_text(),
        },
        "quote" => Block::Quote {
            rich_text: text_payload(kind, payload)?.rich_text(),
        },
        "code" => {
            let text = text_payload(kind, payload)?;
            Block::Code {
                language: text
                    .language
                    .clone()
                    .unwrap_or_else(|| PLAIN_TEXT_LANGUAGE.to_string()),
                rich_text: text.rich_text(),
            }
        }
        "to_do" => {
            let text = text_payload(kind, payload)?;
            Block::ToDo {
                checked: text.checked.unwrap_or(false),
                rich_text: text.rich_text(),
            }
        }
        "image" => {
            let image = RemoteImagePayload::deserialize(payload).ok()?;
            let url = image.external.or(image.file)?.url;
            Block::Image { url }
        }
        other => {
            tracing::debug!(block_type = other, "unsupported block type, skipping");
            return None;
        }
    };

    Some(block)
}

/// Map a block listing, dropping unsupported entries and keeping order.
pub fn blocks_from_remote(blocks: &[RemoteBlock]) -> Vec<Block> {
    blocks.iter().filter_map(block_from_remote).collect()
}

/// Map remote rich-text items to spans, one span per item.
pub fn rich_text_from_remote(items: &[RemoteRichText]) -> Vec<RichTextSpan> {
    items.iter().map(span_from_remote).collect()
}

fn span_from_remote(item: &RemoteRichText) -> RichTextSpan {
    let content = item
        .plain_text
        .clone()
        .or_else(|| item.text.as_ref().map(|text| text.content.clone()))
        .unwrap_or_default();

    let link = item
        .href
        .clone()
        .or_else(|| {
            item.text
                .as_ref()
                .and_then(|text| text.link.as_ref())
                .map(|link| link.url.clone())
        })
        .map(|url| Link { url });

    let annotations = item.annotations.map(|a| Annotations {
        bold: a.bold,
        italic: a.italic,
        strikethrough: a.strikethrough,
        underline: a.underline,
        code: a.code,
    });

    RichTextSpan {
        content,
        link,
        annotations,
    }
}

/// Page title: the `title` property if it is title-typed, then any
/// title-typed property, then the first rich-text property, else the empty
/// string. A property only counts when its first run has text; the runs of
/// the chosen property are concatenated.
pub fn extract_title(page: &RemotePage) -> String {
    let properties: Vec<(&str, RemoteProperty)> = page
        .properties
        .iter()
        .filter_map(|(name, value)| {
            RemoteProperty::deserialize(value)
                .ok()
                .map(|property| (name.as_str(), property))
        })
        .collect();

    let has_title =
        |property: &RemoteProperty| property.kind == "title" && starts_with_text(&property.title);
    let by_key = properties
        .iter()
        .find(|(name, property)| *name == "title" && has_title(property));
    let any_title = || properties.iter().find(|(_, property)| has_title(property));

    if let Some((_, property)) = by_key.or_else(any_title) {
        return plain_text(&property.title);
    }

    properties
        .iter()
        .find(|(_, property)| property.kind == "rich_text" && starts_with_text(&property.rich_text))
        .map(|(_, property)| plain_text(&property.rich_text))
        .unwrap_or_default()
}

fn starts_with_text(items: &[RemoteRichText]) -> bool {
    items
        .first()
        .map(|first| !span_from_remote(first).content.is_empty())
        .unwrap_or(false)
}

fn plain_text(items: &[RemoteRichText]) -> String {
    rich_text_from_remote(items)
        .into_iter()
        .map(|span| span.content)
        .collect()
}

fn text_payload(kind: &str, payload: &Value) -> Option<RemoteTextPayload> {
    match RemoteTextPayload::deserialize(payload) {
        Ok(text) => Some(text),
        Err(err) => {
            tracing::warn!(block_type = kind, error = %err, "malformed block payload, skipping");
            None
        }
    }
}

impl RemoteTextPayload {
    fn rich_text(&self) -> Vec<RichTextSpan> {
        rich_text_from_remote(&self.rich_text)
    }
}
