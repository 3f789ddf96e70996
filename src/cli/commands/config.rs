//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse<'a> {
    pub config_file: String,
    #[serde(flatten)]
    pub config: &'a crate::core::config::Config,
}

/// Execute the config command
pub async fn execute(
    _args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = services.config.as_ref();
    let config_file = XdgDirs::new().config_file().to_string_lossy().into_owned();

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  config_file: {config_file}");
            println!("  indexing:");
            println!("    chunk_size: {}", config.indexing.chunk_size);
            println!("    overlap: {}", config.indexing.overlap);
            println!(
                "    exclude_patterns: {:?}",
                config.indexing.exclude_patterns
            );
            println!("  search:");
            println!("    max_results: {}", config.search.max_results);
            println!("    preview_chars: {}", config.search.preview_chars);
            if !config.preload.is_empty() {
                println!("  preload:");
                for entry in &config.preload {
                    println!("    {} = {}", entry.name, entry.path.display());
                }
            }
        }
        OutputFormat::Json => {
            let response = ConfigResponse {
                config_file,
                config,
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
