use notionmd_babel::format::Format;
use notionmd_babel::formats::notion::wire::{BlockChildrenList, RemotePage};
use notionmd_babel::formats::notion::{blocks_from_remote, extract_title, NotionJsonFormat};
use notionmd_babel::{blocks_to_markdown, Block};
use serde_json::json;

fn listing() -> BlockChildrenList {
    serde_json::from_value(json!({
        "object": "list",
        "results": [
            {
                "object": "block",
                "id": "a1",
                "type": "heading_1",
                "has_children": false,
                "heading_1": {
                    "rich_text": [{
                        "type": "text",
                        "text": { "content": "Weekly notes", "link": null },
                        "annotations": { "bold": false, "italic": false, "strikethrough": false, "underline": false, "code": false, "color": "default" },
                        "plain_text": "Weekly notes",
                        "href": null
                    }],
                    "is_toggleable": false,
                    "color": "default"
                }
            },
            {
                "object": "block",
                "id": "a2",
                "type": "bulleted_list_item",
                "bulleted_list_item": { "rich_text": [{ "plain_text": "first" }], "color": "default" }
            },
            {
                "object": "block",
                "id": "a3",
                "type": "bulleted_list_item",
                "bulleted_list_item": { "rich_text": [{ "plain_text": "second" }], "color": "default" }
            },
            { "object": "block", "id": "a4", "type": "divider", "divider": {} },
            {
                "object": "block",
                "id": "a5",
                "type": "code",
                "code": { "rich_text": [{ "plain_text": "SELECT 1;" }], "language": "sql", "caption": [] }
            }
        ],
        "next_cursor": null,
        "has_more": false
    }))
    .unwrap()
}

#[test]
fn test_listing_maps_supported_blocks_in_order() {
    let list = listing();
    assert!(!list.has_more);
    assert_eq!(list.next_cursor, None);

    let blocks = blocks_from_remote(&list.results);
    assert_eq!(
        blocks,
        vec![
            Block::Heading1 {
                rich_text: vec![notionmd_babel::RichTextSpan {
                    content: "Weekly notes".into(),
                    link: None,
                    annotations: Some(Default::default()),
                }]
            },
            Block::bulleted("first"),
            Block::bulleted("second"),
            Block::code("SELECT 1;", "sql"),
        ]
    );
}

#[test]
fn test_listing_renders_to_markdown() {
    let blocks = blocks_from_remote(&listing().results);
    assert_eq!(
        blocks_to_markdown(&blocks),
        "# Weekly notes\n\n- first\n- second\n\n```sql\nSELECT 1;\n```\n\n"
    );
}

#[test]
fn test_notion_json_format_reads_listing() {
    let source = json!({ "results": [{ "type": "quote", "quote": { "rich_text": [{ "plain_text": "Q" }] } }] });
    let blocks = NotionJsonFormat.parse(&source.to_string()).unwrap();
    assert_eq!(blocks, vec![Block::quote("Q")]);
}

#[test]
fn test_database_row_title() {
    let page: RemotePage = serde_json::from_value(json!({
        "object": "page",
        "id": "123e4567-e89b-12d3-a456-426614174000",
        "properties": {
            "Status": { "id": "s", "type": "select", "select": { "name": "Done" } },
            "Name": { "id": "title", "type": "title", "title": [{ "plain_text": "Row title" }] }
        }
    }))
    .unwrap();

    assert_eq!(extract_title(&page), "Row title");
}

#[test]
fn test_title_with_blank_first_run_falls_back() {
    let page: RemotePage = serde_json::from_value(json!({
        "object": "page",
        "id": "123e4567-e89b-12d3-a456-426614174000",
        "properties": {
            "title": { "id": "title", "type": "title", "title": [{ "plain_text": "" }, { "plain_text": "tail" }] },
            "Summary": { "id": "x", "type": "rich_text", "rich_text": [{ "plain_text": "fallback" }] }
        }
    }))
    .unwrap();

    assert_eq!(extract_title(&page), "fallback");
}
