//! CLI entrypoint for quote-search
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use quotes_application::{FetchCache, QuoteSearchSession};
use quotes_domain::{FetchStatus, OutputFormat};
use quotes_infrastructure::{ConfigLoader, FileConfig, HttpQuoteSource};
use quotes_presentation::{
    Cli, ConsoleRenderer, LoadingSpinner, OutputConfig, QuoteRepl, ReplConfig,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting quote-search");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&mut config, &cli);
    check_config(&config)?;

    let output = OutputConfig {
        format: cli
            .output
            .map(OutputFormat::from)
            .or(config.output.format)
            .unwrap_or_default(),
        color: config.output.color && !cli.no_color,
    };
    if !output.color {
        colored::control::set_override(false);
    }

    // Spinner only makes sense for humans watching a terminal
    let show_progress =
        !cli.quiet && config.repl.show_progress && output.format == OutputFormat::Text;

    // === Dependency Injection ===
    let source = Arc::new(
        HttpQuoteSource::new(config.source.url.clone())
            .with_user_agent(config.source.user_agent.clone()),
    );
    let cache = Arc::new(FetchCache::with_config(
        source,
        config.source.to_fetch_config(),
    ));
    spawn_interrupt_handler(&cache);

    let renderer = Arc::new(ConsoleRenderer::new(output));
    let mut session = QuoteSearchSession::new(cache.clone());
    if show_progress {
        // Registered first so the spinner is cleared before anything is printed
        session.subscribe(Arc::new(LoadingSpinner::new(cache.source_description())));
    }

    // Interactive mode
    if cli.interactive {
        session.subscribe(renderer);
        let repl_config = ReplConfig {
            history_file: config.repl.history_file.as_deref().map(expand_home),
        };
        QuoteRepl::new(session, repl_config).run().await?;
        return Ok(());
    }

    // One-shot mode: load, then either search or show the preview
    let status = session.load().await;
    if let FetchStatus::Error(message) = status {
        renderer.render(&session.view());
        bail!("Quotes could not be loaded from {}: {}", cache.source_description(), message);
    }

    match cli.query {
        Some(query) => {
            session.subscribe(renderer);
            match session.search(query) {
                Ok(count) => debug!(count, "Search finished"),
                // Already reported to the user by the renderer
                Err(reason) => debug!(reason = %reason, "Search rejected"),
            }
        }
        None => renderer.render(&session.view()),
    }

    Ok(())
}

/// Install the tracing subscriber: stderr always, plus a plain-text file when requested
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let file_name = path
                .file_name()
                .ok_or_else(|| anyhow!("Invalid log file path: {}", path.display()))?;
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(guard)
}

/// Command-line flags take precedence over every config source
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(url) = &cli.url {
        config.source.url = url.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.source.timeout_secs = Some(timeout);
    }
}

fn check_config(config: &FileConfig) -> Result<()> {
    let mut errors = Vec::new();
    for issue in config.validate() {
        if issue.is_error() {
            errors.push(issue.message);
        } else {
            warn!("{}", issue.message);
        }
    }
    if !errors.is_empty() {
        bail!("Invalid configuration:\n  {}", errors.join("\n  "));
    }
    Ok(())
}

/// Cancel an in-flight fetch on Ctrl-C; a pending load then resolves to an error
fn spawn_interrupt_handler(cache: &Arc<FetchCache>) {
    let token = cache.cancellation_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("Interrupt received, cancelling quote fetch");
            token.cancel();
        }
    });
}

/// Expand a leading `~/` in a configured path
fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(path)),
        None => PathBuf::from(path),
    }
}
