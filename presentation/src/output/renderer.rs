//! Console renderer: the view observer that prints to the terminal

use crate::config::OutputConfig;
use crate::output::console::ConsoleFormatter;
use crate::output::formatter::OutputFormatter;
use quotes_application::{QuoteView, QuoteViewObserver};
use quotes_domain::DomainError;
use std::io::{self, Write};
use std::sync::Mutex;
use tracing::warn;

type Sink = Mutex<Box<dyn Write + Send>>;

/// Prints every published view to stdout and rejections to stderr.
///
/// `Loading` views are skipped; the [`LoadingSpinner`](crate::LoadingSpinner)
/// covers that state.
pub struct ConsoleRenderer {
    formatter: Box<dyn OutputFormatter>,
    config: OutputConfig,
    out: Sink,
    err: Sink,
}

impl ConsoleRenderer {
    pub fn new(config: OutputConfig) -> Self {
        Self::with_writers(config, Box::new(io::stdout()), Box::new(io::stderr()))
    }

    /// Render into arbitrary writers instead of stdout/stderr
    pub fn with_writers(
        config: OutputConfig,
        out: Box<dyn Write + Send>,
        err: Box<dyn Write + Send>,
    ) -> Self {
        Self {
            formatter: Box::new(ConsoleFormatter),
            config,
            out: Mutex::new(out),
            err: Mutex::new(err),
        }
    }

    /// Render a view right away, outside of any notification
    pub fn render(&self, view: &QuoteView) {
        let text = self.formatter.format(view, self.config.format);
        Self::write_line(&self.out, &text);
    }

    fn write_line(sink: &Sink, text: &str) {
        let Ok(mut writer) = sink.lock() else {
            return;
        };
        if let Err(e) = writeln!(writer, "{}\n", text.trim_end()).and_then(|_| writer.flush()) {
            warn!("Failed to write output: {}", e);
        }
    }
}

impl QuoteViewObserver for ConsoleRenderer {
    fn on_view_changed(&self, view: &QuoteView) {
        if matches!(view, QuoteView::Loading) {
            return;
        }
        self.render(view);
    }

    fn on_search_rejected(&self, reason: &DomainError) {
        let text = self.formatter.rejection(reason, self.config.format);
        Self::write_line(&self.err, &text);
    }
}
