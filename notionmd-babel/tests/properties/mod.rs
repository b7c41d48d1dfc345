//! Property tests for the laws the conversion layer promises.

use notionmd_babel::formats::notion::map_language;
use notionmd_babel::ir::{concat_spans, split_rich_text, MAX_RICH_TEXT_LENGTH};
use notionmd_babel::{blocks_to_markdown, markdown_to_blocks, normalize_page_id, Block};
use proptest::prelude::*;

fn hex_id() -> impl Strategy<Value = String> {
    "[0-9a-fA-F]{32}"
}

fn hyphenate(compact: &str) -> String {
    format!(
        "{}-{}-{}-{}-{}",
        &compact[0..8],
        &compact[8..12],
        &compact[12..16],
        &compact[16..20],
        &compact[20..32]
    )
}

proptest! {
    #[test]
    fn span_splitting_law(text in any::<String>()) {
        let spans = split_rich_text(&text);
        let len = text.chars().count();

        prop_assert_eq!(spans.len(), len.div_ceil(MAX_RICH_TEXT_LENGTH));
        prop_assert_eq!(concat_spans(&spans), text);
        if let Some((last, rest)) = spans.split_last() {
            prop_assert!(rest.iter().all(|s| s.content.chars().count() == MAX_RICH_TEXT_LENGTH));
            prop_assert!(last.content.chars().count() <= MAX_RICH_TEXT_LENGTH);
        }
    }

    #[test]
    fn long_span_splitting_law(unit in "[a-zあ-ん]", repeat in 1usize..7000) {
        let text = unit.repeat(repeat);
        let spans = split_rich_text(&text);
        prop_assert_eq!(spans.len(), repeat.div_ceil(MAX_RICH_TEXT_LENGTH));
        prop_assert_eq!(concat_spans(&spans), text);
    }

    #[test]
    fn normalization_is_idempotent(compact in hex_id(), hyphens in any::<bool>(), url in any::<bool>()) {
        let shaped = if hyphens { hyphenate(&compact) } else { compact.clone() };
        let input = if url { format!("https://www.notion.so/{shaped}") } else { shaped };

        let once = normalize_page_id(&input).unwrap();
        let twice = normalize_page_id(&once).unwrap();
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once, hyphenate(&compact.to_lowercase()));
    }

    #[test]
    fn normalization_ignores_case(compact in hex_id()) {
        let upper = normalize_page_id(&compact.to_uppercase()).unwrap();
        let lower = normalize_page_id(&compact.to_lowercase()).unwrap();
        prop_assert_eq!(upper, lower);
    }

    #[test]
    fn language_mapping_is_total(tag in any::<String>()) {
        let mapped = map_language(&tag);
        prop_assert!(!mapped.is_empty());
    }

    #[test]
    fn paragraph_text_survives_round_trip(text in "[A-Za-z][A-Za-z0-9 ,.]{0,200}[A-Za-z0-9.]") {
        let md = blocks_to_markdown(&[Block::paragraph(&text)]);
        let result = markdown_to_blocks(&md);
        prop_assert!(result.is_ok());
        prop_assert_eq!(result.blocks, vec![Block::paragraph(&text)]);
    }
}
