//! Command-line interface definitions for newsdesk.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! The API key can be provided via a command-line flag or the `NEWS_API_KEY`
//! environment variable.

use crate::endpoints::headlines::Category;
use clap::{Parser, Subcommand};

/// Command-line arguments for the newsdesk client.
///
/// One subcommand per API operation, plus global options shared by all
/// three. The category argument is validated by clap against the closed
/// enumeration, so an invalid category is rejected with a usage error
/// listing the valid values before any request is built.
///
/// # Examples
///
/// ```sh
/// # Top US business headlines
/// newsdesk category business
///
/// # Keyword search, defaulting to English articles
/// newsdesk query "semiconductor exports"
///
/// # The same search restricted to French articles
/// newsdesk query Macron --language fr
///
/// # News sources registered for a country, as pretty JSON
/// newsdesk sources us --json
/// ```
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// NewsAPI key; read from the environment when the flag is absent
    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Print shaped results as pretty-printed JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
}

/// The three API operations.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Top US headlines for a topic category
    Category {
        /// One of the seven topic categories
        #[arg(value_enum)]
        category: Category,
    },
    /// Search articles by keyword
    Query {
        /// Search text
        query: String,

        /// Two-letter article language code
        #[arg(long, default_value = "en")]
        language: String,
    },
    /// List news sources for a country
    Sources {
        /// Two-letter country code
        country: String,
    },
}
