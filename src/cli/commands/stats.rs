//! Stats command - show statistics for one index

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the stats command
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Index name
    pub name: String,
}

/// Execute the stats command
pub async fn execute(
    args: StatsArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let stats = services.registry.stats(&args.name)?;

    match format {
        OutputFormat::Human => {
            let types: Vec<&str> = stats.document_types.iter().map(|t| t.as_str()).collect();
            println!("{} {}", colors::label("Index:"), colors::index_name(&stats.index_name));
            println!("  chunks: {}", colors::number(&stats.total_chunks.to_string()));
            println!("  files:  {}", colors::number(&stats.total_files.to_string()));
            println!("  types:  {}", types.join(", "));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }

    Ok(())
}
