//! Ingestion pipeline orchestration.
//!
//! Coordinates the end-to-end ingestion workflow:
//! 1. Resolve the root into source files
//! 2. Read file contents
//! 3. Classify (JSON or plain document) and chunk
//! 4. Collect chunks, source-file names and per-file failures
//!
//! Per-file failures never abort ingestion. Only a missing root does.

use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::core::error::{Result, RagdexError};
use crate::core::indexer::walker::SourceFile;
use crate::core::indexer::{Chunker, FileWalker};
use crate::core::types::{Chunk, DocumentType, ARRAY_INDEX_KEY};

/// A file that was found but contributed no chunks
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Output of one ingestion run, ready to publish
#[derive(Debug, Default)]
pub struct Ingestion {
    pub chunks: Vec<Chunk>,
    /// Names of files that contributed; skipped files are not counted
    pub source_files: BTreeSet<String>,
    pub skipped: Vec<SkippedFile>,
    pub duration_ms: u64,
}

impl Ingestion {
    pub fn files_indexed(&self) -> usize {
        self.source_files.len()
    }
}

/// A parsed `.json` file, decoded once and dispatched on shape
enum JsonDocument {
    /// Each element is chunked independently
    Array(Vec<Value>),
    /// Anything else is chunked from the raw file text
    Single,
}

impl JsonDocument {
    fn parse(contents: &str) -> serde_json::Result<Self> {
        Ok(match serde_json::from_str::<Value>(contents)? {
            Value::Array(items) => JsonDocument::Array(items),
            _ => JsonDocument::Single,
        })
    }
}

/// Orchestrates the ingestion pipeline
#[derive(Debug, Clone)]
pub struct IndexingPipeline {
    walker: FileWalker,
    chunker: Chunker,
}

impl IndexingPipeline {
    /// Create a new pipeline
    ///
    /// Fails if an exclude pattern is not a valid glob.
    pub fn new(chunk_size: usize, overlap: usize, exclude_patterns: &[String]) -> Result<Self> {
        let walker = FileWalker::new(exclude_patterns)?;
        let chunker = Chunker::new(chunk_size, overlap);

        Ok(Self { walker, chunker })
    }

    /// Ingest a file or directory tree
    ///
    /// Files that cannot be read or parsed are logged, recorded in
    /// [`Ingestion::skipped`] and left out of the source-file set.
    pub fn ingest(&self, root: &Path) -> Result<Ingestion> {
        let start = Instant::now();

        tracing::info!("Starting file collection from {:?}", root);
        let files = self.walker.collect_files(root)?;
        tracing::info!("Found {} files to ingest", files.len());

        let mut ingestion = Ingestion::default();

        for (idx, file) in files.iter().enumerate() {
            if idx % 100 == 0 && idx > 0 {
                tracing::info!("Progress: {}/{} files processed", idx, files.len());
            }

            match self.process_file(file) {
                Ok(chunks) => {
                    tracing::debug!("Ingested {:?} ({} chunks)", file.path, chunks.len());
                    ingestion.chunks.extend(chunks);
                    ingestion.source_files.insert(file.name.clone());
                }
                Err(e) => {
                    if e.is_skippable() {
                        tracing::warn!("Skipping {:?}: {}", file.path, e);
                    } else {
                        tracing::error!("Skipping {:?} after unexpected error: {}", file.path, e);
                    }
                    ingestion.skipped.push(SkippedFile {
                        path: file.path.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        ingestion.duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "Ingestion complete: {} files ingested, {} skipped, \
             {} chunks created in {}ms",
            ingestion.files_indexed(),
            ingestion.skipped.len(),
            ingestion.chunks.len(),
            ingestion.duration_ms
        );

        Ok(ingestion)
    }

    /// Read one file and chunk it according to its extension
    fn process_file(&self, file: &SourceFile) -> Result<Vec<Chunk>> {
        let contents = fs::read_to_string(&file.path).map_err(|e| RagdexError::FileRead {
            path: file.path.display().to_string(),
            message: if e.kind() == std::io::ErrorKind::InvalidData {
                "not valid UTF-8".to_string()
            } else {
                e.to_string()
            },
        })?;

        if is_json(&file.path) {
            let document = JsonDocument::parse(&contents).map_err(|e| RagdexError::JsonParse {
                path: file.path.display().to_string(),
                message: e.to_string(),
            })?;
            self.chunk_json(&file.name, &contents, document)
        } else {
            Ok(self.chunk_plain(&file.name, &contents, DocumentType::Document))
        }
    }

    fn chunk_json(&self, name: &str, raw: &str, document: JsonDocument) -> Result<Vec<Chunk>> {
        match document {
            JsonDocument::Array(items) => {
                let mut chunks = Vec::new();
                for (i, item) in items.iter().enumerate() {
                    let text = serde_json::to_string(item)?;
                    for (j, window) in self.chunker.split(&text).into_iter().enumerate() {
                        let mut metadata = Map::new();
                        metadata.insert(ARRAY_INDEX_KEY.to_string(), Value::from(i));
                        chunks.push(Chunk {
                            id: format!("{name}_item_{i}_chunk_{j}"),
                            content: window.to_string(),
                            source_file: name.to_string(),
                            chunk_index: j,
                            document_type: DocumentType::Json,
                            metadata,
                        });
                    }
                }
                Ok(chunks)
            }
            JsonDocument::Single => Ok(self.chunk_plain(name, raw, DocumentType::Json)),
        }
    }

    fn chunk_plain(&self, name: &str, text: &str, document_type: DocumentType) -> Vec<Chunk> {
        self.chunker
            .split(text)
            .into_iter()
            .enumerate()
            .map(|(j, window)| Chunk {
                id: format!("{name}_chunk_{j}"),
                content: window.to_string(),
                source_file: name.to_string(),
                chunk_index: j,
                document_type,
                metadata: Map::new(),
            })
            .collect()
    }
}

fn is_json(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.ends_with(".json"))
        .unwrap_or(false)
}
