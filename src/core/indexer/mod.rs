//! Document ingestion module.
//!
//! Turns files on disk into chunks ready to publish:
//!
//! - UTF-8 safe, character-based overlapping chunking
//! - Recursive file walking with optional exclude patterns
//! - JSON array fan-out (one chunk sequence per element)
//! - Per-file failure isolation
//!
//! # Safety
//!
//! The chunker slices on boundaries taken from `char_indices()`,
//! so files containing emojis or other multi-byte sequences never
//! cause a panic.

pub mod chunker;
pub mod pipeline;
pub mod walker;

pub use chunker::Chunker;
pub use pipeline::{Ingestion, IndexingPipeline, SkippedFile};
pub use walker::{FileWalker, SourceFile};
