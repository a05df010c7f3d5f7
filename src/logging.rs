//! Tracing subscriber set-up
//!
//! Stdout carries the MCP protocol, so diagnostics go to stderr, plus an
//! optional JSON log file with its own filter. The file rolls over daily
//! and only the newest files are kept.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, prelude::*, registry};

use crate::config::{LogFormat, LoggingSettings};

/// Parse an `EnvFilter` directive such as "info" or "project_explorer=debug".
pub fn build_filter(directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directive).with_context(|| format!("invalid log filter '{directive}'"))
}

/// Daily log files kept before the oldest is deleted.
pub const MAX_LOG_FILES: usize = 30;

/// Daily-rolling appender for `path`. Files are written next to it and named
/// after it with a date suffix, e.g. `explorer.log.2024-05-01`.
pub fn rolling_file(path: &Path) -> Result<RollingFileAppender> {
    let prefix = path
        .file_name()
        .with_context(|| format!("log file path {} has no file name", path.display()))?
        .to_string_lossy()
        .into_owned();
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .max_log_files(MAX_LOG_FILES)
        .build(dir)
        .with_context(|| format!("cannot open log file {}", path.display()))
}

/// Install the global subscriber. Fails if one is already installed or the
/// log file cannot be opened.
pub fn init(settings: &LoggingSettings) -> Result<()> {
    let stderr_layer: Box<dyn Layer<Registry> + Send + Sync> = match settings.format {
        LogFormat::Text => fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .boxed(),
        LogFormat::Json => fmt::layer().json().with_writer(std::io::stderr).boxed(),
    };
    let stderr_layer = stderr_layer.with_filter(build_filter(&settings.level)?);

    let file_layer = match &settings.file {
        Some(path) => Some(
            fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(rolling_file(path)?)
                .with_filter(build_filter(&settings.file_level)?),
        ),
        None => None,
    };

    registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::debug!(
        level = %settings.level,
        format = ?settings.format,
        file = ?settings.file,
        "logging initialized"
    );
    Ok(())
}
