//! Interactive search module
//!
//! Provides a line-editor based REPL over a [`QuoteSearchSession`](quotes_application::QuoteSearchSession).

mod command;
mod quote_repl;

pub use command::ReplCommand;
pub use quote_repl::QuoteRepl;
