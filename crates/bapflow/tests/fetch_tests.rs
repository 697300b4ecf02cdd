//! Fetch-envelope handling: narrowing wire payloads and honoring
//! server-side pagination blocks.

use bapflow::{
    aggregate, paginate, project, Actor, DocumentCollection, DocumentStatus, ExternalPagination,
};

fn sample_payload() -> &'static str {
    r#"{
        "data": [
            {
                "id": "d-01",
                "documentType": "bapp",
                "status": "submitted",
                "projectName": "Gudang Cikarang",
                "vendorName": "PT Maju Jaya",
                "createdAt": "2026-05-01T08:00:00Z",
                "lineItems": [
                    { "description": "Semen 50kg", "quantity": 120, "unit": "sak" }
                ]
            },
            {
                "id": "d-02",
                "documentType": "bapb",
                "status": "reviewed",
                "projectName": "Gudang Cikarang",
                "vendorName": "PT Sumber Rejeki",
                "createdAt": "2026-05-01T07:30:00Z"
            },
            {
                "id": "d-03",
                "documentType": "bapp",
                "status": "menunggu persetujuan",
                "projectName": "Gudang Cikarang",
                "vendorName": "PT Maju Jaya",
                "createdAt": "2026-05-01T07:00:00Z"
            }
        ]
    }"#
}

#[test]
fn fetched_collection_feeds_queue_and_stats() {
    let collection = DocumentCollection::from_json(sample_payload()).unwrap();
    let docs = collection.documents();

    // The free-text status row never reaches logic.
    assert_eq!(docs.len(), 2);

    let warehouse = project(&docs, &Actor::pic_gudang());
    assert_eq!(warehouse.len(), 1);
    assert_eq!(warehouse[0].id, "d-01");
    assert_eq!(warehouse[0].line_items.len(), 1);

    let board = project(&docs, &Actor::direksi());
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].id, "d-02");

    let snapshot = aggregate(&docs);
    assert_eq!(snapshot.pending, 2);
    assert_eq!(snapshot.approved + snapshot.rejected, 0);
}

#[test]
fn server_side_pagination_bypasses_the_pager() {
    let payload = r#"{
        "data": [
            {
                "id": "d-11",
                "documentType": "bapb",
                "status": "approved",
                "projectName": "Gudang Cikarang",
                "vendorName": "PT Maju Jaya",
                "createdAt": "2026-05-01T06:00:00Z"
            }
        ],
        "pagination": {
            "currentPage": 4,
            "lastPage": 4,
            "total": 31,
            "perPage": 10,
            "from": 31,
            "to": 31
        }
    }"#;

    let collection = DocumentCollection::from_json(payload).unwrap();
    let block = collection.pagination.clone().unwrap();
    let docs = collection.documents();

    assert!(block.is_consistent(docs.len()));
    let page = block.into_page(docs);

    // The external block is used verbatim.
    assert_eq!(page.page_number, 4);
    assert_eq!(page.total_pages, 4);
    assert_eq!(page.total_items, 31);
    assert_eq!((page.from, page.to), (31, 31));
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].status, DocumentStatus::Approved);
}

#[test]
fn inconsistent_pagination_block_is_detected() {
    let block = ExternalPagination {
        current_page: 1,
        total_pages: 2,
        total_items: 12,
        items_per_page: 10,
        from: 1,
        to: 10,
    };
    // Collaborator claims ten rows but delivered three.
    assert!(!block.is_consistent(3));
}

#[test]
fn locally_paginated_fetch_matches_metadata() {
    let collection = DocumentCollection::from_json(sample_payload()).unwrap();
    assert!(collection.pagination.is_none());

    let docs = collection.documents();
    let queue = project(&docs, &Actor::pic_gudang());
    let page = paginate(&queue, 1, 10);

    assert_eq!(page.total_items, queue.len());
    assert_eq!(page.items.len(), queue.len());
    assert_eq!((page.from, page.to), (1, queue.len()));
}
