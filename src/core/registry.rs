//! Named index registry.
//!
//! Owns every published [`Index`]. Indexes are built without any
//! lock held and installed with a single write-locked map insert of
//! an `Arc`, so readers see either the previous index or the new
//! one and never a partially built chunk list. Ingesting one name
//! never blocks readers or writers of another.

use parking_lot::RwLock;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use std::sync::Arc;

use crate::core::error::{Result, RagdexError};
use crate::core::indexer::{Ingestion, IndexingPipeline};
use crate::core::types::{Chunk, Index, IndexStats};

/// Thread-safe registry of named indexes
#[derive(Debug)]
pub struct IndexRegistry {
    pipeline: IndexingPipeline,
    indexes: RwLock<HashMap<String, Arc<Index>>>,
}

impl IndexRegistry {
    /// Create an empty registry that ingests with `pipeline`
    pub fn new(pipeline: IndexingPipeline) -> Self {
        Self {
            pipeline,
            indexes: RwLock::new(HashMap::new()),
        }
    }

    /// Ingest `path` and publish the result under `name`
    ///
    /// A missing root returns [`RagdexError::PathNotFound`] and leaves
    /// the registry untouched, including any prior index of that name.
    pub fn create_index(&self, name: &str, path: impl AsRef<Path>) -> Result<IndexStats> {
        Ok(self.create_index_with_report(name, path)?.0)
    }

    /// Like [`create_index`](Self::create_index), also returning the
    /// ingestion report (skipped files, timing)
    pub fn create_index_with_report(
        &self,
        name: &str,
        path: impl AsRef<Path>,
    ) -> Result<(IndexStats, Ingestion)> {
        let path = path.as_ref();
        tracing::info!("Creating index '{}' from {:?}", name, path);

        let mut ingestion = match self.pipeline.ingest(path) {
            Ok(ingestion) => ingestion,
            Err(e) => {
                tracing::error!("Index '{}' not created: {}", name, e);
                return Err(e);
            }
        };

        let chunks = std::mem::take(&mut ingestion.chunks);
        let source_files = ingestion.source_files.clone();
        let index = self.publish(name, chunks, source_files);
        let stats = index.stats();

        tracing::info!(
            "Index '{}' created with {} chunks from {} files",
            name,
            stats.total_chunks,
            stats.total_files
        );

        Ok((stats, ingestion))
    }

    /// Install a fully built chunk set under `name`, replacing any
    /// previous index of that name
    pub fn publish(
        &self,
        name: &str,
        chunks: Vec<Chunk>,
        source_files: BTreeSet<String>,
    ) -> Arc<Index> {
        let index = Arc::new(Index::new(name, chunks, source_files));
        let previous = self
            .indexes
            .write()
            .insert(name.to_string(), Arc::clone(&index));

        if previous.is_some() {
            tracing::debug!("Replaced existing index '{}'", name);
        }
        index
    }

    /// Current index published under `name`
    pub fn get(&self, name: &str) -> Option<Arc<Index>> {
        self.indexes.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.indexes.read().contains_key(name)
    }

    /// Snapshot of all index names
    pub fn names(&self) -> BTreeSet<String> {
        self.indexes.read().keys().cloned().collect()
    }

    /// Statistics for `name`, or [`RagdexError::IndexNotFound`]
    pub fn stats(&self, name: &str) -> Result<IndexStats> {
        self.get(name)
            .map(|index| index.stats())
            .ok_or_else(|| RagdexError::IndexNotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.indexes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.indexes.read().is_empty()
    }
}
