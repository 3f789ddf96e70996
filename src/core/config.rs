//! Configuration management for ragdex.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with defaults for all settings.

use crate::core::error::{Result, RagdexError};
use crate::core::indexer::chunker::{DEFAULT_CHUNK_SIZE, DEFAULT_OVERLAP};
use crate::core::search::DEFAULT_MAX_RESULTS;
use crate::core::types::DEFAULT_PREVIEW_CHARS;
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub indexing: IndexingConfig,
    #[serde(default)]
    pub search: SearchConfig,
    /// Indexes created at startup
    #[serde(default)]
    pub preload: Vec<PreloadEntry>,
}

/// Indexing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndexingConfig {
    /// Characters per chunk (not bytes!)
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Character overlap between consecutive chunks
    #[serde(default = "default_overlap")]
    pub overlap: usize,

    /// File patterns to exclude (glob syntax)
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Maximum results per query
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Characters of content shown per summary line
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
}

/// An index to build when services start
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PreloadEntry {
    pub name: String,
    pub path: PathBuf,
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

fn default_overlap() -> usize {
    DEFAULT_OVERLAP
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

fn default_preview_chars() -> usize {
    DEFAULT_PREVIEW_CHARS
}

impl Default for IndexingConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            overlap: default_overlap(),
            exclude_patterns: Vec::new(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            preview_chars: default_preview_chars(),
        }
    }
}

fn env_override<T: FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring {}={:?}: not a valid value", key, raw);
            None
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| RagdexError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        xdg.log_paths();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// File priority order:
    /// 1. RAGDEX_CONFIG env var
    /// 2. XDG config file (~/.config/ragdex/config.toml)
    /// 3. ./ragdex.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("RAGDEX_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("ragdex.toml").exists() {
                Self::from_file("ragdex.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Apply `RAGDEX_*` environment overrides
    ///
    /// Values that do not parse are ignored.
    pub fn merge_env(&mut self) {
        if let Some(size) = env_override("RAGDEX_CHUNK_SIZE") {
            self.indexing.chunk_size = size;
        }
        if let Some(overlap) = env_override("RAGDEX_OVERLAP") {
            self.indexing.overlap = overlap;
        }
        if let Some(n) = env_override("RAGDEX_MAX_RESULTS") {
            self.search.max_results = n;
        }
        if let Some(n) = env_override("RAGDEX_PREVIEW_CHARS") {
            self.search.preview_chars = n;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.indexing.chunk_size == 0 {
            return Err(RagdexError::ConfigError(
                "Chunk size must be non-zero".to_string(),
            ));
        }

        if self.indexing.overlap >= self.indexing.chunk_size {
            return Err(RagdexError::ConfigError(
                "Overlap must be less than chunk size".to_string(),
            ));
        }

        if self.search.max_results == 0 {
            return Err(RagdexError::ConfigError(
                "Max results must be non-zero".to_string(),
            ));
        }

        for entry in &self.preload {
            if entry.name.trim().is_empty() {
                return Err(RagdexError::ConfigError(format!(
                    "Preload entry for {:?} has an empty name",
                    entry.path
                )));
            }
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Chunk size: {} chars", self.indexing.chunk_size);
        tracing::info!("  Overlap: {} chars", self.indexing.overlap);
        tracing::info!(
            "  Exclude patterns: {} patterns",
            self.indexing.exclude_patterns.len()
        );
        tracing::info!("  Max results: {}", self.search.max_results);
        tracing::info!("  Preview chars: {}", self.search.preview_chars);
        tracing::info!("  Preload indexes: {}", self.preload.len());
    }
}
