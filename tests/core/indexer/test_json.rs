// JSON array fan-out and single-value JSON documents

use crate::common::{
    create_test_services, create_test_services_with, flights_json, TestRepo, FLIGHT_COUNT,
};
use ragdex::DocumentType;
use serde_json::Value;
use std::collections::BTreeSet;

#[test]
fn test_json_array_one_chunk_per_small_element() {
    let repo = TestRepo::with_files(&[("flights.json", flights_json().as_str())]);
    let services = create_test_services();

    let stats = services.registry.create_index("flights", repo.path()).unwrap();

    assert_eq!(stats.total_chunks, FLIGHT_COUNT);
    assert_eq!(stats.total_files, 1);
    assert_eq!(stats.document_types, BTreeSet::from([DocumentType::Json]));

    let index = services.registry.get("flights").unwrap();
    let array_indexes: Vec<u64> = index.chunks.iter().filter_map(|c| c.array_index()).collect();
    assert_eq!(array_indexes, vec![0, 1, 2, 3, 4]);

    for chunk in &index.chunks {
        assert_eq!(chunk.chunk_index, 0);
        assert_eq!(chunk.source_file, "flights.json");
    }
    assert_eq!(index.chunks[2].id, "flights.json_item_2_chunk_0");
}

#[test]
fn test_json_array_elements_reserialized_compact() {
    let repo = TestRepo::with_files(&[("flights.json", flights_json().as_str())]);
    let services = create_test_services();
    services.registry.create_index("flights", repo.path()).unwrap();

    let index = services.registry.get("flights").unwrap();
    let first = &index.chunks[0].content;

    assert!(!first.contains('\n'));
    assert!(!first.contains(": "));
    let value: Value = serde_json::from_str(first).unwrap();
    assert_eq!(value["from"], "New York");
    // Key order follows the source document
    assert!(first.starts_with(r#"{"id":1,"from":"New York""#));
}

#[test]
fn test_large_json_element_is_chunked_with_local_indexes() {
    let long_value = "x".repeat(60);
    let doc = format!(r#"[{{"note":"{long_value}"}},{{"note":"short"}}]"#);
    let repo = TestRepo::with_files(&[("notes.json", doc.as_str())]);
    // size 30, overlap 5 -> the first element (71 chars) needs 3 chunks
    let services = create_test_services_with(30, 5, 10);

    services.registry.create_index("notes", repo.path()).unwrap();
    let index = services.registry.get("notes").unwrap();

    let positions: Vec<(u64, usize)> = index
        .chunks
        .iter()
        .map(|c| (c.array_index().unwrap(), c.chunk_index))
        .collect();
    assert_eq!(positions, vec![(0, 0), (0, 1), (0, 2), (1, 0)]);
}

#[test]
fn test_single_json_object_chunked_as_raw_text() {
    let raw = "{\n  \"airline\": \"Oceanic\",\n  \"hub\": \"New York\"\n}";
    let repo = TestRepo::with_files(&[("config.json", raw)]);
    let services = create_test_services();

    services.registry.create_index("cfg", repo.path()).unwrap();
    let index = services.registry.get("cfg").unwrap();

    assert_eq!(index.chunks.len(), 1);
    let chunk = &index.chunks[0];
    assert_eq!(chunk.content, raw);
    assert_eq!(chunk.document_type, DocumentType::Json);
    assert_eq!(chunk.array_index(), None);
    assert_eq!(chunk.id, "config.json_chunk_0");
}

#[test]
fn test_empty_json_array_contributes_file_without_chunks() {
    let repo = TestRepo::with_files(&[("empty.json", "[]"), ("a.txt", "alpha")]);
    let services = create_test_services();

    let stats = services.registry.create_index("mixed", repo.path()).unwrap();

    assert_eq!(stats.total_files, 2);
    assert_eq!(stats.total_chunks, 1);
}

#[test]
fn test_mixed_tree_reports_both_document_types() {
    let repo = TestRepo::small();
    let services = create_test_services();

    let stats = services.registry.create_index("all", repo.path()).unwrap();

    assert_eq!(
        stats.document_types,
        BTreeSet::from([DocumentType::Json, DocumentType::Document])
    );
    // 5 flight records + config.json + notes.txt + baggage.md
    assert_eq!(stats.total_chunks, FLIGHT_COUNT + 3);
}
