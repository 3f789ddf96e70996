// Multi-byte text is chunked by character, never split inside one

use crate::common::{create_test_services, create_test_services_with, TestRepo};

#[test]
fn test_index_cjk_text() {
    let repo = TestRepo::with_files(&[("chinese.txt", "你好世界，欢迎来到纽约")]);
    let services = create_test_services();

    let stats = services.registry.create_index("zh", repo.path()).unwrap();

    assert_eq!(stats.total_files, 1);
    assert_eq!(stats.total_chunks, 1);
}

#[test]
fn test_window_counts_characters_not_bytes() {
    // 17 three-byte characters
    let text = "東京大阪京都札幌福岡神戸横浜名古屋";
    let char_len = text.chars().count();
    let repo = TestRepo::with_files(&[("cities.txt", text)]);
    let services = create_test_services_with(5, 1, 10);

    services.registry.create_index("cities", repo.path()).unwrap();
    let index = services.registry.get("cities").unwrap();

    // ceil((L - 1) / 4)
    assert_eq!(index.chunks.len(), (char_len - 1).div_ceil(4));
    for chunk in &index.chunks {
        assert!(chunk.content.chars().count() <= 5);
    }
    assert!(index.chunks[0].content.starts_with("東京"));
}

#[test]
fn test_emoji_and_mixed_scripts_round_trip() {
    let text = "Hello 👋 World 🦀 Привет мир مرحبا שלום 🎉".repeat(10);
    let repo = TestRepo::with_files(&[("mixed.txt", text.as_str())]);
    let services = create_test_services_with(16, 4, 10);

    services.registry.create_index("mixed", repo.path()).unwrap();
    let index = services.registry.get("mixed").unwrap();

    let last = index.chunks.len() - 1;
    let mut rebuilt = String::new();
    for (i, chunk) in index.chunks.iter().enumerate() {
        if i == last {
            rebuilt.push_str(&chunk.content);
        } else {
            rebuilt.extend(chunk.content.chars().take(12));
        }
    }
    assert_eq!(rebuilt, text);
}

#[test]
fn test_multibyte_search() {
    let repo = TestRepo::with_files(&[("greetings.txt", "Привет мир"), ("other.txt", "hello")]);
    let services = create_test_services();
    services.registry.create_index("greet", repo.path()).unwrap();

    let result = services.search.search("greet", "ПРИВЕТ");

    assert_eq!(result.total_results, 1);
    assert_eq!(result.results[0].chunk.source_file, "greetings.txt");
    assert_eq!(result.results[0].relevance_score, 2);
}
