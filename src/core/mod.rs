//! Core domain logic (adapter-agnostic)
//!
//! This module contains all indexing and retrieval logic that is
//! independent of any front end (CLI, HTTP, prompt builders).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Chunks, indexes and search result envelopes
//! - **xdg**: XDG config directory handling
//! - **indexer**: File walking, chunking and ingestion
//! - **registry**: Named index ownership and atomic publication
//! - **search**: Lexical scoring and ranking
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod indexer;
pub mod registry;
pub mod search;
pub mod services;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{RagdexError, Result};
pub use registry::IndexRegistry;
pub use services::Services;
