// Test helper functions

use ragdex::core::config::Config;
use ragdex::core::services::Services;
use ragdex::core::types::IndexStats;

/// Create services with the default configuration
#[allow(dead_code)]
pub fn create_test_services() -> Services {
    Services::new(Config::default()).expect("default config is valid")
}

/// Create services with a custom chunking and result cap
#[allow(dead_code)]
pub fn create_test_services_with(chunk_size: usize, overlap: usize, max_results: usize) -> Services {
    let mut config = Config::default();
    config.indexing.chunk_size = chunk_size;
    config.indexing.overlap = overlap;
    config.search.max_results = max_results;
    config.validate().expect("test config is valid");
    Services::new(config).expect("test config is valid")
}

/// Assert that index stats are internally consistent
#[allow(dead_code)]
pub fn assert_valid_stats(stats: &IndexStats) {
    assert!(
        stats.total_files > 0,
        "Expected total_files > 0, got {}",
        stats.total_files
    );
    assert!(
        stats.total_chunks >= stats.total_files,
        "Expected total_chunks ({}) >= total_files ({})",
        stats.total_chunks,
        stats.total_files
    );
    assert!(
        !stats.document_types.is_empty(),
        "Expected at least one document type"
    );
}
