//! Loading indicator shown while the quote list is being fetched

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use quotes_application::{QuoteView, QuoteViewObserver};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner that runs while the published view is [`QuoteView::Loading`]
///
/// Draws to stderr and hides itself automatically when stderr is not a
/// terminal.
pub struct LoadingSpinner {
    label: String,
    bar: Mutex<Option<ProgressBar>>,
}

impl LoadingSpinner {
    /// `source` is shown next to the spinner, e.g. the quote URL
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            label: source.into(),
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// True while the spinner is on screen
    pub fn is_active(&self) -> bool {
        self.bar.lock().map(|bar| bar.is_some()).unwrap_or(false)
    }

    fn start(&self) {
        let Ok(mut slot) = self.bar.lock() else {
            return;
        };
        if slot.is_some() {
            return;
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix("Loading quotes");
        pb.set_message(format!("{}", self.label.dimmed()));
        pb.enable_steady_tick(Duration::from_millis(100));
        *slot = Some(pb);
    }

    fn stop(&self) {
        if let Some(pb) = self.bar.lock().ok().and_then(|mut slot| slot.take()) {
            pb.finish_and_clear();
        }
    }
}

impl QuoteViewObserver for LoadingSpinner {
    fn on_view_changed(&self, view: &QuoteView) {
        match view {
            QuoteView::Loading => self.start(),
            _ => self.stop(),
        }
    }
}
