//! Single-block round trips: blocks → Markdown → blocks keeps the block type
//! and text.

use notionmd_babel::{blocks_to_markdown, markdown_to_blocks, Block};

fn round_trip(block: Block) -> Vec<Block> {
    let md = blocks_to_markdown(std::slice::from_ref(&block));
    let result = markdown_to_blocks(&md);
    assert!(result.is_ok(), "errors for {md:?}: {:?}", result.errors);
    result.blocks
}

#[test]
fn test_text_blocks_round_trip() {
    let blocks = vec![
        Block::paragraph("本文です"),
        Block::heading(1, "One"),
        Block::heading(2, "Two"),
        Block::heading(3, "Three"),
        Block::bulleted("bullet"),
        Block::numbered("number"),
        Block::quote("quoted"),
        Block::code("let x = 1;\nlet y = 2;", "rust"),
    ];

    for block in blocks {
        assert_eq!(round_trip(block.clone()), vec![block]);
    }
}

#[test]
fn test_image_round_trip() {
    let block = Block::image("https://example.com/picture.png");
    assert_eq!(round_trip(block.clone()), vec![block]);
}

#[test]
fn test_multi_item_list_round_trip() {
    let blocks = vec![Block::bulleted("A"), Block::bulleted("B"), Block::bulleted("C")];
    let md = blocks_to_markdown(&blocks);
    assert_eq!(markdown_to_blocks(&md).blocks, blocks);
}

#[test]
fn test_to_do_reads_back_as_bullet() {
    let blocks = round_trip(Block::to_do("ship it", true));
    assert_eq!(blocks, vec![Block::bulleted("[x] ship it")]);
}
