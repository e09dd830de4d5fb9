use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::CliArgs;

/// `[api]`: where the dictionary service lives.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ApiSection {
	pub(super) base_url: Option<String>,
	pub(super) timeout_ms: Option<u64>,
}

/// `[search]`: input behaviour.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
	pub(super) debounce_ms: Option<u64>,
	pub(super) initial_query: Option<String>,
}

/// `[cache]`: query cache lifetimes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct CacheSection {
	pub(super) stale_ms: Option<u64>,
	pub(super) gc_ms: Option<u64>,
}

/// `[ui]`: page labels, layout and theme.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) title: Option<String>,
	pub(super) placeholder: Option<String>,
	pub(super) layout: Option<String>,
	pub(super) width: Option<u16>,
	pub(super) theme: Option<String>,
}

/// `[logging]`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) enabled: Option<bool>,
	pub(super) level: Option<String>,
	pub(super) file: Option<PathBuf>,
}

impl ApiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(url) = cli.base_url.clone() {
			self.base_url = Some(url);
		}
		if let Some(timeout) = cli.timeout_ms {
			self.timeout_ms = Some(timeout);
		}
	}
}

impl SearchSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(debounce) = cli.debounce_ms {
			self.debounce_ms = Some(debounce);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
	}
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(layout) = cli.layout.clone() {
			self.layout = Some(layout);
		}
		if let Some(width) = cli.width {
			self.width = Some(width);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
	}
}

impl LoggingSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if cli.no_log {
			self.enabled = Some(false);
		}
		if let Some(level) = cli.log_level.clone() {
			self.level = Some(level);
		}
		if let Some(file) = cli.log_file.clone() {
			self.file = Some(file);
		}
	}
}
