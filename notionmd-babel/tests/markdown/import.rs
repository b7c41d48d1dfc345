//! Import tests for Markdown format (Markdown → blocks)

use insta::assert_snapshot;
use notionmd_babel::format::Format;
use notionmd_babel::formats::markdown::MarkdownFormat;
use notionmd_babel::{markdown_to_blocks, Block, FormatError};
use std::path::PathBuf;

fn read_fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

/// One line per block: type, then text (or URL for images).
fn summarize(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(|block| match block {
            Block::Image { url } => format!("image: {url}"),
            Block::Code { language, .. } => format!("code({language}): {:?}", block.plain_text()),
            _ => format!("{}: {:?}", block.type_name(), block.plain_text()),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_heading_levels_in_order() {
    let result = markdown_to_blocks("# 見出し1\n## 見出し2\n### 見出し3");

    assert!(result.errors.is_empty());
    let types: Vec<_> = result.blocks.iter().map(Block::type_name).collect();
    assert_eq!(types, vec!["heading_1", "heading_2", "heading_3"]);
}

#[test]
fn test_fenced_code_keeps_language() {
    let blocks = MarkdownFormat
        .parse("```typescript\nconst x = 1;\n```")
        .expect("Should parse markdown");

    assert_eq!(blocks, vec![Block::code("const x = 1;", "typescript")]);
}

#[test]
fn test_text_between_thematic_breaks_is_kept() {
    let result = markdown_to_blocks("---\n\nHello world\n\n---\n\nAfter\n");

    assert!(result.is_ok());
    assert_eq!(
        result.blocks,
        vec![Block::paragraph("Hello world"), Block::paragraph("After")]
    );
}

#[test]
fn test_leading_metadata_block_is_not_swallowed() {
    let blocks = MarkdownFormat
        .parse("---\ntitle: Notes\n---\n\nBody text.\n")
        .expect("Should parse markdown");

    assert_eq!(
        blocks,
        vec![Block::heading(2, "title: Notes"), Block::paragraph("Body text.")]
    );
}

#[test]
fn test_empty_document() {
    let result = markdown_to_blocks("");
    assert!(result.is_ok());
    assert!(result.blocks.is_empty());
}

#[test]
fn test_every_bad_token_is_reported() {
    let md = "![a](one.png)\n\ntext\n\n![b](two.png)\n";
    let result = markdown_to_blocks(md);

    assert_eq!(result.errors.len(), 2);
    assert!(result.errors[0].contains("one.png"));
    assert!(result.errors[1].contains("two.png"));

    match MarkdownFormat.parse(md) {
        Err(FormatError::ConversionFailed(errors)) => assert_eq!(errors, result.errors),
        other => panic!("Expected ConversionFailed, got {other:?}"),
    }
}

#[test]
fn test_image_inside_text_is_flattened() {
    let result = markdown_to_blocks("See ![chart](chart.png) below.\n");
    assert!(result.is_ok());
    assert_eq!(result.blocks, vec![Block::paragraph("See chart below.")]);
}

#[test]
fn test_kitchensink_fixture() {
    let result = markdown_to_blocks(&read_fixture("kitchensink.md"));
    assert!(result.is_ok(), "unexpected errors: {:?}", result.errors);

    assert_snapshot!(summarize(&result.blocks), @r###"
    heading_1: "Release notes"
    paragraph: "Intro paragraph with bold, italic and a link."
    heading_2: "Changes"
    bulleted_list_item: "Faster sync"
    bulleted_list_item: "Smaller payloads"
    bulleted_list_item: "nested detail"
    numbered_list_item: "Install"
    numbered_list_item: "Configure"
    heading_3: "Example"
    code(ts): "const client = new Client();"
    quote: "Quoted line one\ncontinues here"
    image: https://example.com/diagram.png
    paragraph: "Closing words."
    "###);
}
