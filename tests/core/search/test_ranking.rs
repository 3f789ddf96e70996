// Scoring, ordering and the result cap

use crate::common::{create_test_services, create_test_services_with, flights_json, TestRepo};

fn flights_services() -> (TestRepo, ragdex::Services) {
    let repo = TestRepo::with_files(&[("flights.json", flights_json().as_str())]);
    let services = create_test_services();
    services.registry.create_index("flights", repo.path()).unwrap();
    (repo, services)
}

#[test]
fn test_new_york_scenario() {
    let (_repo, services) = flights_services();

    let result = services.search.search("flights", "New York");

    // "new" weighs 1, "york" weighs 2
    let ranked: Vec<(u64, u32)> = result
        .results
        .iter()
        .map(|hit| (hit.chunk.array_index().unwrap(), hit.relevance_score))
        .collect();
    assert_eq!(ranked, vec![(0, 3), (2, 3), (4, 2)]);
    assert_eq!(result.total_results, 3);
    assert_eq!(result.query, "New York");
    assert_eq!(result.index_name, "flights");
}

#[test]
fn test_search_is_deterministic() {
    let (_repo, services) = flights_services();

    let ids = |query: &str| -> Vec<String> {
        services
            .search
            .search("flights", query)
            .results
            .iter()
            .map(|hit| hit.chunk.id.clone())
            .collect()
    };

    assert_eq!(ids("oceanic york"), ids("oceanic york"));
    assert_eq!(ids("OCEANIC York"), ids("oceanic york"));
}

#[test]
fn test_unknown_index_returns_empty_result() {
    let services = create_test_services();

    let result = services.search.search("nope", "anything");

    assert!(result.is_empty());
    assert_eq!(result.total_results, 0);
    assert_eq!(result.index_name, "nope");
    assert!(result.content_summary().is_empty());
}

#[test]
fn test_empty_and_whitespace_queries_match_nothing() {
    let (_repo, services) = flights_services();

    assert!(services.search.search("flights", "").is_empty());
    assert!(services.search.search("flights", "   \t ").is_empty());
}

#[test]
fn test_cap_keeps_first_ties_in_index_order() {
    let files: Vec<(String, String)> = (0..15)
        .map(|i| (format!("doc_{i:02}.txt"), format!("match number {i}")))
        .collect();
    let specs: Vec<(&str, &str)> = files.iter().map(|(f, c)| (f.as_str(), c.as_str())).collect();
    let repo = TestRepo::with_files(&specs);
    let services = create_test_services();
    services.registry.create_index("many", repo.path()).unwrap();

    let result = services.search.search("many", "match");

    assert_eq!(result.total_results, 10);
    let sources: Vec<&str> = result
        .results
        .iter()
        .map(|hit| hit.chunk.source_file.as_str())
        .collect();
    let expected: Vec<String> = (0..10).map(|i| format!("doc_{i:02}.txt")).collect();
    assert_eq!(sources, expected);
}

#[test]
fn test_configured_cap() {
    let repo = TestRepo::with_files(&[("a.txt", "term"), ("b.txt", "term"), ("c.txt", "term")]);
    let services = create_test_services_with(500, 50, 2);
    services.registry.create_index("docs", repo.path()).unwrap();

    assert_eq!(services.search.search("docs", "term").total_results, 2);
}

#[test]
fn test_higher_score_ranks_first() {
    let repo = TestRepo::with_files(&[
        ("a.txt", "london only"),
        ("b.txt", "london and paris"),
    ]);
    let services = create_test_services();
    services.registry.create_index("docs", repo.path()).unwrap();

    let result = services.search.search("docs", "paris london");

    assert_eq!(result.results[0].chunk.source_file, "b.txt");
    assert_eq!(result.results[0].relevance_score, 4);
    assert_eq!(result.results[1].relevance_score, 2);
}

#[test]
fn test_substring_and_repeated_tokens() {
    let repo = TestRepo::with_files(&[("a.txt", "a birthday party")]);
    let services = create_test_services();
    services.registry.create_index("docs", repo.path()).unwrap();

    // "art" is inside "party"; matching ignores word boundaries
    assert_eq!(services.search.search("docs", "art").results[0].relevance_score, 1);
    // Each repeated token counts again
    assert_eq!(
        services.search.search("docs", "party party").results[0].relevance_score,
        4
    );
}

#[test]
fn test_search_leaves_stored_chunks_untouched() {
    let (_repo, services) = flights_services();
    let before: Vec<ragdex::Chunk> = services
        .registry
        .get("flights")
        .unwrap()
        .chunks
        .iter()
        .map(|c| c.as_ref().clone())
        .collect();

    services.search.search("flights", "New York");

    let index = services.registry.get("flights").unwrap();
    for (stored, original) in index.chunks.iter().zip(&before) {
        assert_eq!(stored.as_ref(), original);
        assert!(!stored.metadata.contains_key("relevance_score"));
    }
}
