//! Configuration file loading for quote-search
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `QUOTE_SEARCH_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./quote-search.toml` or `./.quote-search.toml`
//! 4. Global: `$XDG_CONFIG_HOME/quote-search/config.toml`
//! 5. Default values
//!
//! Command-line flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileOutputConfig, FileReplConfig, FileSourceConfig};
pub use loader::ConfigLoader;
