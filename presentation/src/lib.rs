//! Presentation layer for quote-search
//!
//! This crate contains CLI definitions, view formatters, the loading
//! spinner, and the interactive search REPL.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod repl;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormatArg};
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use output::renderer::ConsoleRenderer;
pub use progress::reporter::LoadingSpinner;
pub use repl::QuoteRepl;
