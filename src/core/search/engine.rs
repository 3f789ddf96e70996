//! Lexical search over published indexes.
//!
//! This module provides the SearchService, which scores every chunk
//! of one index against a free-text query and returns the top hits.

use std::sync::Arc;
use std::time::Instant;

use crate::core::registry::IndexRegistry;
use crate::core::search::query::{score_content, tokenize};
use crate::core::types::{ScoredChunk, SearchResult};

/// Default cap on returned results
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Keyword relevance search service
#[derive(Debug)]
pub struct SearchService {
    registry: Arc<IndexRegistry>,
    max_results: usize,
}

impl SearchService {
    /// Create a new search service
    pub fn new(registry: Arc<IndexRegistry>, max_results: usize) -> Self {
        Self {
            registry,
            max_results,
        }
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Search `index_name` for `query`
    ///
    /// Never fails: an unknown index yields an empty result. Hits are
    /// ordered by score, highest first, with ties kept in index order.
    /// Stored chunks are not modified; each hit carries its own score.
    pub fn search(&self, index_name: &str, query: &str) -> SearchResult {
        let start = Instant::now();

        let Some(index) = self.registry.get(index_name) else {
            tracing::warn!("Index not found: {}", index_name);
            return SearchResult::empty(query, index_name, start.elapsed().as_millis() as u64);
        };

        let tokens = tokenize(query);

        let mut hits: Vec<ScoredChunk> = index
            .chunks
            .iter()
            .filter_map(|chunk| {
                let score = score_content(&chunk.content.to_lowercase(), &tokens);
                (score > 0).then(|| ScoredChunk {
                    chunk: Arc::clone(chunk),
                    relevance_score: score,
                })
            })
            .collect();

        // Vec::sort_by is stable, so equal scores keep index order
        hits.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
        hits.truncate(self.max_results);

        let elapsed_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "Search in '{}' for '{}' found {} results in {}ms",
            index_name,
            query,
            hits.len(),
            elapsed_ms
        );

        SearchResult::new(query, index_name, hits, elapsed_ms)
    }
}
