//! Search command - rank the chunks of an index against a query

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::truncate_chars;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Free-text query (whitespace-separated keywords)
    pub query: String,

    /// Index to search
    #[arg(long, short = 'i')]
    pub index: String,

    /// Print one preview line per result instead of full chunks
    #[arg(long)]
    pub summary: bool,
}

/// Summary-mode output
#[derive(Debug, Serialize)]
pub struct SummaryOutput<'a> {
    pub query: &'a str,
    pub index_name: &'a str,
    pub total_results: usize,
    pub summary: Vec<String>,
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if !services.registry.contains(&args.index) {
        warn_missing_index(&args.index, format);
    }

    let result = services.search.search(&args.index, &args.query);
    let preview_chars = services.config.search.preview_chars;

    match format {
        OutputFormat::Json if args.summary => {
            let output = SummaryOutput {
                query: &result.query,
                index_name: &result.index_name,
                total_results: result.total_results,
                summary: result.content_summary_with(preview_chars),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Human if result.is_empty() => {
            println!(
                "No results found for '{}' in index '{}'",
                colors::label(&args.query),
                colors::index_name(&result.index_name)
            );
        }
        OutputFormat::Human if args.summary => {
            for line in result.content_summary_with(preview_chars) {
                println!("{line}");
            }
        }
        OutputFormat::Human => {
            println!(
                "Found {} result(s) in '{}' ({}ms):\n",
                colors::number(&result.total_results.to_string()),
                colors::index_name(&result.index_name),
                result.elapsed_ms
            );

            for (rank, hit) in result.results.iter().enumerate() {
                let chunk = &hit.chunk;
                let location = match chunk.array_index() {
                    Some(i) => format!("{} [item {i}]", chunk.source_file),
                    None => chunk.source_file.clone(),
                };
                println!(
                    "[{}] {} {}",
                    colors::rank(&(rank + 1).to_string()),
                    colors::file_path(&location),
                    colors::dim(&format!(
                        "(chunk {}, score: {})",
                        chunk.chunk_index, hit.relevance_score
                    ))
                );
                for line in chunk.content.lines().take(5) {
                    println!("    {}", colors::dim(&truncate_chars(line, 100)));
                }
                println!();
            }
        }
    }

    Ok(())
}

fn warn_missing_index(index: &str, format: OutputFormat) {
    if format == OutputFormat::Human {
        crate::cli::output::print_warning(&format!(
            "Index '{index}' not found. Use --load {index}=PATH to build it first."
        ));
    }
}
