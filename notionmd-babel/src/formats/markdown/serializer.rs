//! Markdown serialization (blocks → Markdown)
//!
//! The output layout is fixed rather than delegated to a CommonMark renderer:
//! every non-list block ends with a blank line, list items are written on
//! consecutive lines, and a single blank line closes each contiguous list run.
//! Rich text is written as plain text; links and annotations are not re-emitted.

use crate::ir::nodes::{concat_spans, Block};

/// Serialize blocks to Markdown. Never fails.
pub fn serialize_to_markdown(blocks: &[Block]) -> String {
    let mut markdown = String::new();

    for (index, block) in blocks.iter().enumerate() {
        write_block(block, &mut markdown);

        if block.is_list_item() {
            let run_continues = blocks
                .get(index + 1)
                .is_some_and(|next| next.is_list_item());
            if !run_continues {
                markdown.push('\n');
            }
        }
    }

    markdown
}

fn write_block(block: &Block, out: &mut String) {
    match block {
        Block::Paragraph { rich_text } => {
            out.push_str(&concat_spans(rich_text));
            out.push_str("\n\n");
        }
        Block::Heading1 { rich_text } => write_heading(1, &concat_spans(rich_text), out),
        Block::Heading2 { rich_text } => write_heading(2, &concat_spans(rich_text), out),
        Block::Heading3 { rich_text } => write_heading(3, &concat_spans(rich_text), out),
        Block::BulletedListItem { rich_text } => {
            out.push_str("- ");
            out.push_str(&concat_spans(rich_text));
            out.push('\n');
        }
        // Always "1." - list position is not tracked
        Block::NumberedListItem { rich_text } => {
            out.push_str("1. ");
            out.push_str(&concat_spans(rich_text));
            out.push('\n');
        }
        Block::ToDo { rich_text, checked } => {
            out.push_str(if *checked { "- [x] " } else { "- [ ] " });
            out.push_str(&concat_spans(rich_text));
            out.push('\n');
        }
        Block::Code {
            rich_text,
            language,
        } => {
            out.push_str("```");
            out.push_str(language);
            out.push('\n');
            out.push_str(&concat_spans(rich_text));
            out.push_str("\n```\n\n");
        }
        Block::Quote { rich_text } => {
            out.push_str("> ");
            out.push_str(&concat_spans(rich_text));
            out.push_str("\n\n");
        }
        Block::Image { url } => {
            out.push_str("![](");
            out.push_str(url);
            out.push_str(")\n\n");
        }
    }
}

fn write_heading(level: usize, text: &str, out: &mut String) {
    out.push_str(&"#".repeat(level));
    out.push(' ');
    out.push_str(text);
    out.push_str("\n\n");
}
