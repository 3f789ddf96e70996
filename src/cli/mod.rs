//! CLI adapter for ragdex
//!
//! Provides a command-line interface over the in-memory registry and
//! search service. Indexes live only for the duration of one process,
//! so `--load NAME=PATH` (repeatable) and `[[preload]]` configuration
//! entries build indexes before the selected command runs.
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |     core/        |
//! |  (domain logic)  |
//! +--------+---------+
//!          |
//!          v
//! +------------------+
//! |      cli/        |
//! | (clap adapter)   |
//! +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// ragdex - In-memory document index with keyword retrieval
///
/// Chunk plain-text and JSON files into named indexes and rank chunks
/// against free-text queries.
#[derive(Parser, Debug)]
#[command(name = "ragdex")]
#[command(author = "RHOBIMD HEALTH")]
#[command(version)]
#[command(about = "In-memory document index with keyword retrieval", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Build an index before running the command (NAME=PATH, repeatable)
    #[arg(long = "load", global = true, value_name = "NAME=PATH")]
    pub load: Vec<LoadSpec>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// A `--load NAME=PATH` argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSpec {
    pub name: String,
    pub path: PathBuf,
}

impl FromStr for LoadSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, path) = s
            .split_once('=')
            .ok_or_else(|| format!("expected NAME=PATH, got '{s}'"))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(format!("index name is empty in '{s}'"));
        }
        if path.is_empty() {
            return Err(format!("path is empty in '{s}'"));
        }
        Ok(Self {
            name: name.to_string(),
            path: PathBuf::from(path),
        })
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ingest a file or directory into a named index
    Index(commands::IndexArgs),

    /// Rank the chunks of an index against a query
    Search(commands::SearchArgs),

    /// Show statistics for an index
    Stats(commands::StatsArgs),

    /// List indexes built in this run
    #[command(name = "list-indexes")]
    ListIndexes(commands::ListArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  ragdex completions bash > ~/.local/share/bash-completion/completions/ragdex
    ///   zsh:   ragdex completions zsh > ~/.zfunc/_ragdex
    ///   fish:  ragdex completions fish > ~/.config/fish/completions/ragdex.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let config = Config::load()?;
    config.log_config();

    let services = Arc::new(Services::new(config)?);

    for outcome in services.preload() {
        if let Err(e) = outcome.result {
            output::print_warning(&format!("Preload '{}' failed: {e}", outcome.entry.name));
        }
    }

    for spec in &cli.load {
        if let Err(e) = services.registry.create_index(&spec.name, &spec.path) {
            let hint = if e.is_not_found() {
                " (check the path after '=')"
            } else {
                ""
            };
            return Err(format!("Failed to load '{}': {e}{hint}", spec.name).into());
        }
    }

    match cli.command {
        Commands::Index(args) => commands::index::execute(args, &services, cli.format).await,
        Commands::Search(args) => commands::search::execute(args, &services, cli.format).await,
        Commands::Stats(args) => commands::stats::execute(args, &services, cli.format).await,
        Commands::ListIndexes(args) => commands::list::execute(args, &services, cli.format).await,
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
