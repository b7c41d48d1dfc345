//! Markdown parsing (Markdown → blocks)
//!
//! Pipeline: Markdown string → Comrak AST → one mapping per top-level node → blocks.
//!
//! Top-level nodes are mapped independently. A node that fails to map is
//! recorded as an error message and the walk carries on with the next node,
//! so callers see every problem at once; any error still fails the whole
//! conversion (see [`ConversionResult`]).

use crate::error::TokenError;
use crate::ir::nodes::{Block, ConversionResult, PLAIN_TEXT_LANGUAGE};
use comrak::nodes::{AstNode, ListType, NodeCodeBlock, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};
use url::Url;

/// Parse a Markdown string into blocks, collecting per-node failures.
pub fn parse_from_markdown(source: &str) -> ConversionResult {
    let arena = Arena::new();
    let options = default_comrak_options();
    let root = parse_document(&arena, source, &options);

    root.children()
        .fold(ConversionResult::default(), |mut acc, node| {
            match convert_node(node) {
                Ok(blocks) => acc.blocks.extend(blocks),
                Err(err) => acc.errors.push(format!("Failed to convert token: {err}")),
            }
            acc
        })
}

fn default_comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options
}

/// Map one block-level node to zero or more blocks.
///
/// Lists are the only node producing more than one block: each item becomes
/// its own list-item block.
fn convert_node<'a>(node: &'a AstNode<'a>) -> Result<Vec<Block>, TokenError> {
    let node_data = node.data.borrow();

    match &node_data.value {
        NodeValue::Heading(heading) => Ok(vec![Block::heading(heading.level, &inline_text(node))]),

        NodeValue::Paragraph => match standalone_image(node) {
            Some(url) => image_block(url).map(|block| vec![block]),
            None => Ok(vec![Block::paragraph(&inline_text(node))]),
        },

        NodeValue::List(_) => {
            let mut blocks = Vec::new();
            collect_list_items(node, &mut blocks)?;
            Ok(blocks)
        }

        NodeValue::CodeBlock(code_block) => Ok(vec![convert_code_block(code_block)]),

        NodeValue::BlockQuote => Ok(vec![Block::quote(&block_text(node))]),

        // Thematic breaks, HTML blocks: nothing to map
        _ => Ok(vec![]),
    }
}

/// Emit one block per list item, flattening nested lists into the items
/// that follow their parent.
fn collect_list_items<'a>(
    list: &'a AstNode<'a>,
    blocks: &mut Vec<Block>,
) -> Result<(), TokenError> {
    let ordered = matches!(
        &list.data.borrow().value,
        NodeValue::List(info) if matches!(info.list_type, ListType::Ordered)
    );

    for item in list.children() {
        let mut lines = Vec::new();
        let mut following = Vec::new();

        for child in item.children() {
            match &child.data.borrow().value {
                NodeValue::Paragraph | NodeValue::Heading(_) => lines.push(inline_text(child)),
                NodeValue::List(_) => collect_list_items(child, &mut following)?,
                _ => following.extend(convert_node(child)?),
            }
        }

        let text = lines.join("\n");
        blocks.push(if ordered {
            Block::numbered(&text)
        } else {
            Block::bulleted(&text)
        });
        blocks.extend(following);
    }

    Ok(())
}

fn convert_code_block(code_block: &NodeCodeBlock) -> Block {
    let language = code_block
        .info
        .split_whitespace()
        .next()
        .unwrap_or(PLAIN_TEXT_LANGUAGE);
    let content = code_block
        .literal
        .strip_suffix('\n')
        .unwrap_or(&code_block.literal);
    Block::code(content, language)
}

fn image_block(url: String) -> Result<Block, TokenError> {
    match Url::parse(&url) {
        Ok(_) => Ok(Block::image(url)),
        Err(_) => Err(TokenError::InvalidImageUrl(url)),
    }
}

/// The image URL if a paragraph holds nothing but a single image.
fn standalone_image<'a>(paragraph: &'a AstNode<'a>) -> Option<String> {
    let mut image = None;
    for child in paragraph.children() {
        match &child.data.borrow().value {
            NodeValue::Image(link) if image.is_none() => image = Some(link.url.clone()),
            NodeValue::Text(text) if text.trim().is_empty() => {}
            NodeValue::SoftBreak | NodeValue::LineBreak => {}
            _ => return None,
        }
    }
    image
}

/// Flattened text of a node's inline content.
fn inline_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    for child in node.children() {
        collect_text_content(child, &mut text);
    }
    text
}

fn collect_text_content<'a>(node: &'a AstNode<'a>, output: &mut String) {
    match &node.data.borrow().value {
        NodeValue::Text(text) => output.push_str(text),
        NodeValue::Code(code) => output.push_str(&code.literal),
        NodeValue::HtmlInline(html) => output.push_str(html),
        NodeValue::SoftBreak | NodeValue::LineBreak => output.push('\n'),
        _ => {
            for child in node.children() {
                collect_text_content(child, output);
            }
        }
    }
}

/// Flattened text of a container block (blockquote), one line per child block.
fn block_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut lines = Vec::new();
    for child in node.children() {
        let line = match &child.data.borrow().value {
            NodeValue::Paragraph | NodeValue::Heading(_) => inline_text(child),
            NodeValue::CodeBlock(code_block) => code_block.literal.trim_end().to_string(),
            NodeValue::BlockQuote | NodeValue::List(_) | NodeValue::Item(_) => block_text(child),
            _ => String::new(),
        };
        if !line.is_empty() {
            lines.push(line);
        }
    }
    lines.join("\n")
}
