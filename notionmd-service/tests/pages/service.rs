//! Document service behavior against the in-memory store.

use crate::common::{
    first_text, page_id, paragraph, paragraphs_markdown, Call, MockStore, CREATED_ID, DATABASE_ID,
    PAGE_ID,
};
use notionmd_babel::PageId;
use notionmd_service::{
    AppendOutcome, DocumentService, ServiceError, ServiceSettings, StoreError,
};
use serde_json::json;

fn service(store: MockStore) -> DocumentService<MockStore> {
    DocumentService::new(store, ServiceSettings::default())
}

fn service_with_database(store: MockStore) -> DocumentService<MockStore> {
    DocumentService::new(
        store,
        ServiceSettings {
            default_parent_id: Some(PageId::parse(DATABASE_ID).unwrap()),
        },
    )
}

#[tokio::test]
async fn get_page_renders_title_and_markdown() {
    let store = MockStore::with_page(
        "Weekly notes",
        vec![
            json!({ "type": "heading_2", "heading_2": { "rich_text": [{ "plain_text": "Done" }] } }),
            json!({ "type": "to_do", "to_do": { "rich_text": [{ "plain_text": "ship" }], "checked": true } }),
            json!({ "type": "divider", "divider": {} }),
            paragraph("Closing."),
        ],
        100,
    );

    let page = service(store).get_page(&page_id()).await.unwrap();

    assert_eq!(page.title, "Weekly notes");
    assert_eq!(page.markdown, "## Done\n\n- [x] ship\n\nClosing.\n\n");
}

#[tokio::test]
async fn get_page_follows_pagination_cursors() {
    let children = (0..5).map(|i| paragraph(&format!("p{i}"))).collect();
    let service = service(MockStore::with_page("Paged", children, 2));

    let page = service.get_page(&page_id()).await.unwrap();

    assert_eq!(page.markdown, "p0\n\np1\n\np2\n\np3\n\np4\n\n");
    assert_eq!(
        service.store().calls(),
        vec![
            Call::RetrievePage(PAGE_ID.into()),
            Call::ListChildren(PAGE_ID.into(), None),
            Call::ListChildren(PAGE_ID.into(), Some("c1".into())),
            Call::ListChildren(PAGE_ID.into(), Some("c2".into())),
        ]
    );
}

#[tokio::test]
async fn get_page_propagates_store_errors() {
    let service = service(MockStore::failing(404, "object_not_found"));

    let err = service.get_page(&page_id()).await.unwrap_err();

    match err {
        ServiceError::Store(StoreError::Api { status, code, .. }) => {
            assert_eq!(status, 404);
            assert_eq!(code, "object_not_found");
        }
        other => panic!("expected a store error, got {other:?}"),
    }
    assert_eq!(service.store().calls().len(), 1);
}

#[tokio::test]
async fn append_writes_sequential_chunks_of_one_hundred() {
    let service = service(MockStore::empty());

    let outcome = service
        .append_page(&page_id(), &paragraphs_markdown(250))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        AppendOutcome {
            blocks_written: 250,
            requests: 3
        }
    );

    let appends = service.store().append_calls();
    let sizes: Vec<usize> = appends.iter().map(|(_, children)| children.len()).collect();
    assert_eq!(sizes, vec![100, 100, 50]);
    assert!(appends.iter().all(|(id, _)| id == PAGE_ID));
    assert_eq!(first_text(&appends[0].1[0]), "p0");
    assert_eq!(first_text(&appends[1].1[0]), "p100");
    assert_eq!(first_text(&appends[2].1[49]), "p249");
}

#[tokio::test]
async fn append_with_conversion_errors_writes_nothing() {
    let service = service(MockStore::empty());

    let err = service
        .append_page(&page_id(), "# Title\n\n![local](./image.png)\n")
        .await
        .unwrap_err();

    match &err {
        ServiceError::Conversion(errors) => {
            assert_eq!(errors.len(), 1);
            assert!(errors[0].starts_with("Failed to convert token:"));
        }
        other => panic!("expected a conversion error, got {other:?}"),
    }
    assert!(err.to_string().starts_with("Markdown conversion failed:"));
    assert!(service.store().calls().is_empty());
}

#[tokio::test]
async fn append_of_empty_markdown_makes_no_calls() {
    let service = service(MockStore::empty());

    let outcome = service.append_page(&page_id(), "").await.unwrap();

    assert_eq!(outcome.blocks_written, 0);
    assert_eq!(outcome.requests, 0);
    assert!(service.store().calls().is_empty());
}

#[tokio::test]
async fn append_stops_at_first_failed_chunk() {
    let service = service(MockStore::failing(502, "bad_gateway"));

    let result = service
        .append_page(&page_id(), &paragraphs_markdown(150))
        .await;

    assert!(matches!(result, Err(ServiceError::Store(_))));
    assert_eq!(service.store().append_calls().len(), 1);
}

#[tokio::test]
async fn create_under_explicit_parent_page() {
    let service = service(MockStore::empty());

    let id = service
        .create_page("Child", "# Hello\n\nWorld", Some(&page_id()))
        .await
        .unwrap();

    assert_eq!(id.as_str(), CREATED_ID);
    let calls = service.store().calls();
    assert_eq!(calls.len(), 1);
    let Call::CreatePage(request) = &calls[0] else {
        panic!("expected a create call, got {calls:?}");
    };
    assert_eq!(request["parent"], json!({ "page_id": PAGE_ID }));
    assert_eq!(
        request["properties"]["title"]["title"][0]["text"]["content"],
        "Child"
    );
    assert_eq!(request["children"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn create_falls_back_to_default_database() {
    let service = service_with_database(MockStore::empty());

    service.create_page("Row", "text", None).await.unwrap();

    let calls = service.store().calls();
    let Call::CreatePage(request) = &calls[0] else {
        panic!("expected a create call, got {calls:?}");
    };
    assert_eq!(request["parent"], json!({ "database_id": DATABASE_ID }));
}

#[tokio::test]
async fn create_without_any_parent_is_a_configuration_error() {
    let service = service(MockStore::empty());

    let err = service.create_page("Orphan", "text", None).await.unwrap_err();

    assert!(matches!(err, ServiceError::Configuration(_)));
    assert!(service.store().calls().is_empty());
}

#[tokio::test]
async fn create_appends_blocks_beyond_the_first_hundred() {
    let service = service_with_database(MockStore::empty());

    service
        .create_page("Long", &paragraphs_markdown(230), None)
        .await
        .unwrap();

    let calls = service.store().calls();
    let Call::CreatePage(request) = &calls[0] else {
        panic!("expected a create call first, got {calls:?}");
    };
    assert_eq!(request["children"].as_array().unwrap().len(), 100);

    let appends = service.store().append_calls();
    assert_eq!(appends.len(), 2);
    assert!(appends.iter().all(|(id, _)| id == CREATED_ID));
    assert_eq!(first_text(&appends[0].1[0]), "p100");
    assert_eq!(appends[1].1.len(), 30);
}
