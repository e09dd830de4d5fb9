//! File based `tracing` setup.
//!
//! The terminal belongs to the page while it runs, so log events are written
//! to a file through a non-blocking appender instead of stderr.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingOptions {
	pub enabled: bool,
	/// Filter directive used when `RUST_LOG` is not set.
	pub level: String,
	pub file: PathBuf,
}

/// Build the filter, preferring `RUST_LOG` over the configured level.
fn filter_for(level: &str) -> Result<EnvFilter> {
	if let Ok(filter) = EnvFilter::try_from_default_env() {
		return Ok(filter);
	}
	EnvFilter::try_new(level).with_context(|| format!("invalid log level `{level}`"))
}

/// Install the global subscriber.
///
/// Keep the returned guard alive for as long as events should be flushed.
/// Returns `None` when logging is disabled.
pub fn initialize(options: &LoggingOptions) -> Result<Option<WorkerGuard>> {
	if !options.enabled {
		return Ok(None);
	}

	let filter = filter_for(&options.level)?;
	let directory = options
		.file
		.parent()
		.filter(|dir| !dir.as_os_str().is_empty())
		.map(PathBuf::from)
		.unwrap_or_else(|| PathBuf::from("."));
	let file_name = options
		.file
		.file_name()
		.ok_or_else(|| anyhow!("log file path {} has no file name", options.file.display()))?;
	fs::create_dir_all(&directory)
		.with_context(|| format!("failed to create log directory {}", directory.display()))?;

	let appender = tracing_appender::rolling::never(&directory, file_name);
	let (writer, guard) = tracing_appender::non_blocking(appender);
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(writer)
		.with_ansi(false)
		.try_init()
		.map_err(|err| anyhow!("failed to install log subscriber: {err}"))?;

	tracing::info!(file = %options.file.display(), "logging initialised");
	Ok(Some(guard))
}
