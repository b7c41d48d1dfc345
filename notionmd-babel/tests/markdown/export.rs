//! Export tests for Markdown format (blocks → Markdown)
//!
//! Besides exact output checks, the written Markdown is parsed back with
//! comrak to verify it has the intended structure.

use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};
use insta::assert_snapshot;
use notionmd_babel::format::Format;
use notionmd_babel::formats::markdown::MarkdownFormat;
use notionmd_babel::{blocks_to_markdown, Block};

fn top_level_kinds<'a>(root: &'a AstNode<'a>) -> Vec<&'static str> {
    root.children()
        .map(|child| match &child.data.borrow().value {
            NodeValue::Heading(_) => "Heading",
            NodeValue::Paragraph => "Paragraph",
            NodeValue::List(_) => "List",
            NodeValue::CodeBlock(_) => "CodeBlock",
            NodeValue::BlockQuote => "BlockQuote",
            _ => "Other",
        })
        .collect()
}

fn composite_document() -> Vec<Block> {
    vec![
        Block::heading(1, "タイトル"),
        Block::paragraph("本文"),
        Block::bulleted("A"),
        Block::bulleted("B"),
        Block::code("c", "ts"),
        Block::quote("Q"),
    ]
}

#[test]
fn test_composite_document_layout() {
    let md = blocks_to_markdown(&composite_document());

    assert_eq!(
        md,
        "# タイトル\n\n本文\n\n- A\n- B\n\n```ts\nc\n```\n\n> Q\n\n"
    );
}

#[test]
fn test_composite_document_snapshot() {
    let md = MarkdownFormat
        .serialize(&composite_document())
        .expect("Failed to serialize markdown");

    assert_snapshot!(md, @r###"
    # タイトル

    本文

    - A
    - B

    ```ts
    c
    ```

    > Q
    "###);
}

#[test]
fn test_composite_document_structure() {
    let md = blocks_to_markdown(&composite_document());
    let arena = Arena::new();
    let root = parse_document(&arena, &md, &ComrakOptions::default());

    assert_eq!(
        top_level_kinds(root),
        vec!["Heading", "Paragraph", "List", "CodeBlock", "BlockQuote"]
    );
}

#[test]
fn test_list_run_spacing() {
    let md = blocks_to_markdown(&[
        Block::bulleted("one"),
        Block::bulleted("two"),
        Block::paragraph("after"),
    ]);

    assert_eq!(md, "- one\n- two\n\nafter\n\n");
    assert!(!md.contains("one\n\n"));
}

#[test]
fn test_separate_list_runs() {
    let md = blocks_to_markdown(&[
        Block::numbered("first"),
        Block::paragraph("between"),
        Block::numbered("second"),
    ]);

    assert_eq!(md, "1. first\n\nbetween\n\n1. second\n\n");
}

#[test]
fn test_links_and_annotations_are_not_written() {
    let blocks = MarkdownFormat
        .parse("A [link](https://example.com) and **bold**.")
        .unwrap();
    let md = blocks_to_markdown(&blocks);

    assert_eq!(md, "A link and bold.\n\n");
}
