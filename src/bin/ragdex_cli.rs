//! ragdex CLI - command-line interface for the ragdex index
//!
//! Indexes are held in memory for the lifetime of one invocation, so
//! commands that read an index are combined with `--load` or with
//! `[[preload]]` configuration entries.
//!
//! # Examples
//!
//! ```bash
//! # Index a directory and report what was skipped
//! ragdex index ./data/docs --name docs
//!
//! # Search a JSON array file
//! ragdex --load flights=data/jsons/flights.json search "New York" --index flights
//!
//! # Preview lines only
//! ragdex --load docs=./data/docs search "refund policy" -i docs --summary
//!
//! # Show configuration
//! ragdex show-config
//! ```

use clap::Parser;
use ragdex::cli::{run, Cli};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ragdex=info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
