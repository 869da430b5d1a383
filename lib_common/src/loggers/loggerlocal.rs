//! # Local Logger
//!
//! Installs the process-wide `tracing` subscriber for the command line tools.
//!
//! Console output always goes to **stderr**: stdout is reserved for the data
//! the tools print. When `LOG_DIR` is set, a JSON copy of every event is also
//! written to a daily-rotated file in that directory.

use std::env;
use std::io;
use std::path::PathBuf;

use tracing::{info, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when neither `RUST_LOG` nor an explicit level is provided.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Options for [`setup_logging`].
#[derive(Debug, Clone, Default)]
pub struct LoggerLocalOptions {
    /// Filter directives from `RUST_LOG`; take precedence over `level` when valid.
    pub directives: Option<String>,
    /// Filter directive used otherwise (defaults to `warn`).
    pub level: Option<String>,
    /// Directory for the JSON log files. No file output when unset.
    pub log_dir: Option<PathBuf>,
}

impl LoggerLocalOptions {
    /// Options read from `RUST_LOG`, `LOG_LEVEL` and `LOG_DIR`.
    pub fn from_env() -> Self {
        let non_blank = |name: &str| env::var(name).ok().filter(|v| !v.trim().is_empty());
        Self {
            directives: non_blank("RUST_LOG"),
            level: non_blank("LOG_LEVEL"),
            log_dir: non_blank("LOG_DIR").map(PathBuf::from),
        }
    }
}

/// Builds the filter: `directives` when they parse, then `level`, then `warn`.
pub fn build_filter(options: &LoggerLocalOptions) -> EnvFilter {
    options
        .directives
        .as_deref()
        .and_then(|d| EnvFilter::try_new(d).ok())
        .or_else(|| {
            options
                .level
                .as_deref()
                .and_then(|l| EnvFilter::try_new(l).ok())
        })
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Assembles the subscriber without installing it.
///
/// `console` receives the human-readable lines; [`setup_logging`] passes
/// stderr. The guard is `Some` when a file layer was added.
pub fn build_subscriber<W>(
    app_name: &str,
    options: &LoggerLocalOptions,
    console: W,
) -> io::Result<(impl Subscriber + Send + Sync + 'static, Option<WorkerGuard>)>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let console_layer = fmt::layer().with_target(true).with_writer(console);

    let (file_layer, guard) = match &options.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = rolling::daily(dir, format!("{}.log", app_name));
            let (non_blocking_appender, guard) = non_blocking(file_appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking_appender)
                .json();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let subscriber = tracing_subscriber::registry()
        .with(build_filter(options))
        .with(console_layer)
        .with(file_layer);

    Ok((subscriber, guard))
}

/// Installs the global subscriber for `app_name`, console output on stderr.
///
/// Returns the file writer guard when file logging is enabled; keep it alive
/// until the end of `main` or buffered lines are lost.
///
/// # Errors
/// Fails when the log directory cannot be created or a global subscriber is
/// already installed.
pub fn setup_logging(app_name: &str, options: LoggerLocalOptions) -> io::Result<Option<WorkerGuard>> {
    let (subscriber, guard) = build_subscriber(app_name, &options, io::stderr)?;
    subscriber
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e))?;

    info!(app_name, log_dir = ?options.log_dir, "Logging initialized");
    Ok(guard)
}
