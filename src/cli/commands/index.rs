//! Index command - ingest a file or directory into a named index

use crate::cli::output::{colors, format_duration};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the index command
#[derive(Args, Debug)]
pub struct IndexArgs {
    /// File or directory to ingest
    pub path: PathBuf,

    /// Name of the index to create or replace
    #[arg(long, short = 'n')]
    pub name: String,

    /// List skipped files even when there are many
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// A file that contributed no chunks
#[derive(Debug, Serialize)]
pub struct SkippedItem {
    pub path: String,
    pub reason: String,
}

/// Indexing result response
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub name: String,
    pub path: String,
    pub files_indexed: usize,
    pub chunks_created: usize,
    pub skipped: Vec<SkippedItem>,
    pub duration_ms: u64,
}

const SKIPPED_PREVIEW: usize = 5;

/// Execute the index command
pub async fn execute(
    args: IndexArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let name = args.name.trim();
    if name.is_empty() {
        return Err("Index name cannot be empty. Provide a name like 'flights' or 'docs'.".into());
    }

    if format == OutputFormat::Human {
        eprintln!(
            "Indexing {} as '{}'...",
            colors::file_path(&args.path.display().to_string()),
            colors::index_name(name)
        );
    }

    let (stats, ingestion) = services
        .registry
        .create_index_with_report(name, &args.path)?;

    let response = IndexResponse {
        name: stats.index_name,
        path: args.path.to_string_lossy().into_owned(),
        files_indexed: stats.total_files,
        chunks_created: stats.total_chunks,
        skipped: ingestion
            .skipped
            .into_iter()
            .map(|s| SkippedItem {
                path: s.path.to_string_lossy().into_owned(),
                reason: s.reason,
            })
            .collect(),
        duration_ms: ingestion.duration_ms,
    };

    match format {
        OutputFormat::Human => {
            println!(
                "{} {} files ({} chunks) in {}",
                colors::success("Indexed"),
                colors::number(&response.files_indexed.to_string()),
                colors::number(&response.chunks_created.to_string()),
                colors::number(&format_duration(response.duration_ms))
            );

            if !response.skipped.is_empty() {
                println!(
                    "{} {} file(s):",
                    colors::warning("Skipped"),
                    colors::number(&response.skipped.len().to_string())
                );
                let shown = if args.verbose {
                    response.skipped.len()
                } else {
                    SKIPPED_PREVIEW
                };
                for item in response.skipped.iter().take(shown) {
                    println!(
                        "  {} {}",
                        colors::file_path(&item.path),
                        colors::dim(&format!("({})", item.reason))
                    );
                }
                if response.skipped.len() > shown {
                    println!(
                        "  {}",
                        colors::dim(&format!(
                            "... and {} more (use --verbose)",
                            response.skipped.len() - shown
                        ))
                    );
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
