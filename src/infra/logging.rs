//! Logging infrastructure
//!
//! Opt-in installer for the global tracing subscriber. Embedding applications
//! call [`init_tracing`] once at startup; the library itself only emits
//! `tracing` events and works fine with no subscriber installed.

use std::path::Path;

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Keeps the non-blocking file writer flushing for the process lifetime.
static LOG_GUARD: OnceCell<WorkerGuard> = OnceCell::new();

/// Set once the subscriber is installed; later calls become no-ops.
static INIT: OnceCell<()> = OnceCell::new();

/// Initializes structured logging for the process
///
/// The filter comes from `RUST_LOG` when set and defaults to `info`. With a
/// directory, log lines go to a daily-rolling `credstore.log` inside it
/// (created if needed); without one, they go to stderr.
///
/// Safe to call more than once: only the first call installs a subscriber,
/// subsequent calls return Ok without touching the existing one.
pub fn init_tracing(log_dir: Option<&Path>) -> Result<()> {
    INIT.get_or_try_init(|| install(log_dir))?;
    Ok(())
}

fn install(log_dir: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;

            let appender = tracing_appender::rolling::daily(dir, "credstore.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = LOG_GUARD.set(guard);

            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false),
                )
                .try_init()
                .context("failed to install global tracing subscriber")?;
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .try_init()
                .context("failed to install global tracing subscriber")?;
        }
    }

    Ok(())
}
