//! # newsdesk
//!
//! A command-line client for the [NewsAPI](https://newsapi.org/docs/endpoints/)
//! news-aggregation service.
//!
//! ## Features
//!
//! - Top US headlines filtered by topic category
//! - Keyword search across everything the API indexes, with a language filter
//! - Publisher listings by country
//! - Plain-text or pretty-printed JSON output
//!
//! ## Usage
//!
//! ```sh
//! export NEWS_API_KEY=...
//! newsdesk category technology
//! newsdesk query "rate cuts" --language en
//! newsdesk sources us
//! ```
//!
//! ## Architecture
//!
//! Each invocation is a single-shot pipeline:
//! 1. **Parse**: clap validates the subcommand and its arguments
//! 2. **Fetch**: one GET against the selected endpoint via [`api::HttpNewsApi`]
//! 3. **Shape**: project records to their display subset, dropping
//!    incomplete articles
//! 4. **Render**: print text blocks or JSON to stdout
//!
//! Upstream failures are fail-soft: the error is logged and the run renders
//! an empty result set. The only fatal startup condition is a missing API
//! key, which exits with status 1 before any request is made.

use clap::Parser;
use serde::Serialize;
use std::error::Error;
use tracing::{debug, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod api;
mod cli;
mod endpoints;
mod models;
mod outputs;

use api::HttpNewsApi;
use cli::{Cli, Command};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.command, json = args.json, "Parsed CLI arguments");

    // The key must be resolved before anything touches the network.
    let Some(api_key) = args.api_key else {
        eprintln!("Please set the NEWS_API_KEY environment variable.");
        std::process::exit(1);
    };
    let client = HttpNewsApi::new(api_key);

    match args.command {
        Command::Category { category } => {
            let articles = endpoints::headlines::articles_by_category(category, &client).await;
            let shaped = outputs::articles::shape(&articles);
            info!(count = shaped.len(), %category, "Rendering category headlines");
            emit(args.json, &shaped, outputs::articles::render)?;
        }
        Command::Query { query, language } => {
            let articles =
                endpoints::everything::articles_by_query(&query, &language, &client).await;
            let shaped = outputs::articles::shape(&articles);
            info!(count = shaped.len(), %query, %language, "Rendering search results");
            emit(args.json, &shaped, outputs::articles::render)?;
        }
        Command::Sources { country } => {
            let sources = endpoints::sources::sources_by_country(&country, &client).await;
            let shaped = outputs::sources::shape(&sources);
            info!(count = shaped.len(), %country, "Rendering source listings");
            emit(args.json, &shaped, outputs::sources::render)?;
        }
    }

    Ok(())
}

/// Print shaped records to stdout, as text or as pretty JSON with `--json`.
fn emit<T: Serialize>(
    json: bool,
    shaped: &[T],
    render: fn(&[T]) -> String,
) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(shaped)?);
    } else {
        print!("{}", render(shaped));
    }
    Ok(())
}
