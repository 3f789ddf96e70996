//! List command - list the indexes built in this run

use crate::cli::output::{colors, format_relative_time};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for list-indexes
#[derive(Args, Debug)]
pub struct ListArgs {}

/// Index list item
#[derive(Debug, Serialize)]
pub struct IndexListItem {
    pub name: String,
    pub files: usize,
    pub chunks: usize,
    pub created_at: String,
}

/// Index list response
#[derive(Debug, Serialize)]
pub struct IndexListResponse {
    pub count: usize,
    pub indexes: Vec<IndexListItem>,
}

/// Execute list-indexes command
pub async fn execute(
    _args: ListArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    // names() is a snapshot; an index could be replaced between calls
    let indexes: Vec<_> = services
        .registry
        .names()
        .iter()
        .filter_map(|name| services.registry.get(name))
        .collect();

    match format {
        OutputFormat::Human => {
            if indexes.is_empty() {
                println!(
                    "No indexes loaded. Use '{}' or a [[preload]] config entry.",
                    colors::label("--load NAME=PATH")
                );
                return Ok(());
            }

            println!(
                "{} ({}):",
                colors::label("Indexes"),
                colors::number(&indexes.len().to_string())
            );
            for index in &indexes {
                println!(
                    "  {:<20} {:>6} files  {:>8} chunks  {}",
                    colors::index_name(&index.name),
                    colors::number(&index.source_files.len().to_string()),
                    colors::number(&index.chunks.len().to_string()),
                    colors::dim(&format_relative_time(&index.created_at))
                );
            }
        }
        OutputFormat::Json => {
            let response = IndexListResponse {
                count: indexes.len(),
                indexes: indexes
                    .iter()
                    .map(|index| IndexListItem {
                        name: index.name.clone(),
                        files: index.source_files.len(),
                        chunks: index.chunks.len(),
                        created_at: index.created_at.to_rfc3339(),
                    })
                    .collect(),
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
