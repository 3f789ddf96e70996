//! ragdex - In-memory document index with lexical retrieval
//!
//! Ingests plain-text and JSON files into named indexes of
//! overlapping text chunks and answers free-text queries by keyword
//! relevance. The ranked chunk contents are meant to be handed to a
//! retrieval-augmented prompt builder as plain-text context.
//!
//! # Architecture
//!
//! - **core**: Domain logic
//!   - indexer (file walking, chunking, JSON fan-out)
//!   - registry (named indexes, atomic replace)
//!   - search (tokenize, score, rank)
//!   - config, error, types, services
//!
//! - **cli**: Command-line adapter (depends on core)
//!
//! # Example
//!
//! ```no_run
//! use ragdex::{Config, Services};
//!
//! let services = Services::new(Config::default())?;
//! services.registry.create_index("flights", "data/jsons/flights.json")?;
//!
//! let result = services.search.search("flights", "New York");
//! for line in result.content_summary() {
//!     println!("{line}");
//! }
//! # Ok::<(), ragdex::RagdexError>(())
//! ```

// Core domain logic
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{RagdexError, Result};
pub use core::registry::IndexRegistry;
pub use core::search::SearchService;
pub use core::services::Services;
pub use core::types::*;
