//! Core data types for ragdex.
//!
//! This module defines the data structures shared by the indexer,
//! the registry and the query engine: chunks, published indexes,
//! scored search hits and the search result envelope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// Metadata key recording a chunk's position in its JSON source array
pub const ARRAY_INDEX_KEY: &str = "array_index";

/// Number of characters shown per line in a content summary
pub const DEFAULT_PREVIEW_CHARS: usize = 150;

/// How a chunk's source file was interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Json,
    Document,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Json => "json",
            DocumentType::Document => "document",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single text chunk from a source file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// Identifier, unique within the owning index
    pub id: String,

    /// The actual text content
    pub content: String,

    /// Source file name, relative to the ingestion root
    pub source_file: String,

    /// Position within the source file's (or JSON element's) chunk sequence
    pub chunk_index: usize,

    pub document_type: DocumentType,

    /// Provenance, e.g. `array_index` for JSON array elements
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl Chunk {
    /// Position of the originating element when the source was a JSON array
    pub fn array_index(&self) -> Option<u64> {
        self.metadata.get(ARRAY_INDEX_KEY).and_then(Value::as_u64)
    }
}

/// A named, immutable collection of chunks
///
/// Published indexes are never modified. Re-indexing a name builds a
/// fresh `Index` and swaps the registry entry.
#[derive(Debug)]
pub struct Index {
    pub name: String,
    pub chunks: Vec<Arc<Chunk>>,
    pub source_files: BTreeSet<String>,
    pub created_at: DateTime<Utc>,
}

impl Index {
    pub fn new(name: impl Into<String>, chunks: Vec<Chunk>, source_files: BTreeSet<String>) -> Self {
        Self {
            name: name.into(),
            chunks: chunks.into_iter().map(Arc::new).collect(),
            source_files,
            created_at: Utc::now(),
        }
    }

    /// Summarize chunk, file and document type counts
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            index_name: self.name.clone(),
            total_chunks: self.chunks.len(),
            total_files: self.source_files.len(),
            document_types: self.chunks.iter().map(|c| c.document_type).collect(),
        }
    }
}

/// Statistics for a published index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    pub index_name: String,
    pub total_chunks: usize,
    pub total_files: usize,
    pub document_types: BTreeSet<DocumentType>,
}

/// A chunk paired with its relevance score for one query
///
/// Serializes as the chunk's fields plus `relevance_score`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredChunk {
    #[serde(flatten)]
    pub chunk: Arc<Chunk>,
    pub relevance_score: u32,
}

/// Ranked results for one query against one index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub query: String,
    pub index_name: String,
    pub results: Vec<ScoredChunk>,
    pub total_results: usize,
    pub elapsed_ms: u64,
}

impl SearchResult {
    pub fn new(
        query: impl Into<String>,
        index_name: impl Into<String>,
        results: Vec<ScoredChunk>,
        elapsed_ms: u64,
    ) -> Self {
        let total_results = results.len();
        Self {
            query: query.into(),
            index_name: index_name.into(),
            results,
            total_results,
            elapsed_ms,
        }
    }

    /// Result for an index that does not exist
    pub fn empty(query: impl Into<String>, index_name: impl Into<String>, elapsed_ms: u64) -> Self {
        Self::new(query, index_name, Vec::new(), elapsed_ms)
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// One preview line per result, content cut at 150 characters
    pub fn content_summary(&self) -> Vec<String> {
        self.content_summary_with(DEFAULT_PREVIEW_CHARS)
    }

    /// Like [`content_summary`](Self::content_summary) with a custom cut-off
    pub fn content_summary_with(&self, preview_chars: usize) -> Vec<String> {
        self.results
            .iter()
            .map(|hit| {
                format!(
                    "{} (chunk {}): {}",
                    hit.chunk.source_file,
                    hit.chunk.chunk_index,
                    truncate_chars(&hit.chunk.content, preview_chars)
                )
            })
            .collect()
    }

    /// Result contents joined by newlines, in rank order
    pub fn context(&self) -> String {
        self.results
            .iter()
            .map(|hit| hit.chunk.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Cut `text` to `max_chars` characters, appending "..." when shortened
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_end, _)) => format!("{}...", &text[..byte_end]),
        None => text.to_string(),
    }
}
