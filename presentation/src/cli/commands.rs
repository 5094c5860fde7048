//! CLI command definitions

use clap::{Parser, ValueEnum};
use quotes_domain::OutputFormat;
use std::path::PathBuf;

/// Output format for rendered views
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Quote cards for humans
    Text,
    /// One JSON document per view
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Text => OutputFormat::Text,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for quote-search
#[derive(Parser, Debug)]
#[command(name = "quote-search")]
#[command(author, version, about = "Search a list of quotes by theme, text or author")]
#[command(long_about = r#"
quote-search loads a list of quotes once and filters it by a case-insensitive
substring of the quote text or the author.

Without a query the first 5 quotes are shown as a preview.

Configuration files are loaded from (in priority order):
1. --config <path>                         Explicit config file
2. ./quote-search.toml                     Project-level config
3. ~/.config/quote-search/config.toml      Global config
QUOTE_SEARCH_* environment variables override files, flags override everything.

Example:
  quote-search happiness
  quote-search --output json "success"
  quote-search --interactive
"#)]
pub struct Cli {
    /// Theme, words, or author to search for (omit to show the preview)
    #[arg(conflicts_with = "interactive")]
    pub query: Option<String>,

    /// Start interactive search mode
    #[arg(short, long)]
    pub interactive: bool,

    /// Quote listing endpoint
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Request timeout in seconds (0 disables it)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormatArg>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the loading spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write logs to this file (no colors)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
