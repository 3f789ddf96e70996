//! Unified service container for ragdex
//!
//! Provides shared access to the index registry, the search service
//! and configuration.

use crate::core::config::{Config, PreloadEntry};
use crate::core::error::Result;
use crate::core::indexer::IndexingPipeline;
use crate::core::registry::IndexRegistry;
use crate::core::search::SearchService;
use crate::core::types::IndexStats;
use std::sync::Arc;

/// Unified services container
///
/// Every adapter (CLI, embedding application) uses this same struct.
#[derive(Debug, Clone)]
pub struct Services {
    /// Registry of published indexes
    pub registry: Arc<IndexRegistry>,

    /// Keyword search over the registry
    pub search: Arc<SearchService>,

    /// Application configuration
    pub config: Arc<Config>,
}

/// Outcome of building one configured preload index
#[derive(Debug)]
pub struct PreloadOutcome {
    pub entry: PreloadEntry,
    pub result: Result<IndexStats>,
}

impl Services {
    /// Create services from configuration
    ///
    /// Fails if the configured exclude patterns are invalid.
    pub fn new(config: Config) -> Result<Self> {
        let pipeline = IndexingPipeline::new(
            config.indexing.chunk_size,
            config.indexing.overlap,
            &config.indexing.exclude_patterns,
        )?;
        let registry = Arc::new(IndexRegistry::new(pipeline));

        let search = Arc::new(SearchService::new(
            Arc::clone(&registry),
            config.search.max_results,
        ));

        Ok(Self {
            registry,
            search,
            config: Arc::new(config),
        })
    }

    /// Build every `[[preload]]` index from configuration
    ///
    /// Failures are logged and reported per entry; they never stop
    /// the remaining entries.
    pub fn preload(&self) -> Vec<PreloadOutcome> {
        self.config
            .preload
            .iter()
            .map(|entry| {
                let result = self.registry.create_index(&entry.name, &entry.path);
                if let Err(e) = &result {
                    tracing::warn!("Preload of '{}' failed: {}", entry.name, e);
                }
                PreloadOutcome {
                    entry: entry.clone(),
                    result,
                }
            })
            .collect()
    }
}
