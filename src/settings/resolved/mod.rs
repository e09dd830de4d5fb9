use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use dictui::{ApiOptions, AppOptions, CacheOptions, LoggingOptions, Theme, UiConfig};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::{ConfigError, Problem};
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub api: ApiOptions,
	pub debounce: Duration,
	pub initial_query: String,
	pub cache: CacheOptions,
	pub ui: UiConfig,
	pub theme_name: String,
	pub theme: Theme,
	pub logging: LoggingOptions,
	/// Configuration files that existed and were merged, in order.
	pub config_files: Vec<PathBuf>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Options for opening the search page.
	pub fn app_options(&self) -> AppOptions {
		AppOptions {
			initial_query: self.initial_query.clone(),
			debounce: self.debounce,
			cache: self.cache,
			ui: self.ui.clone(),
			theme: self.theme,
		}
	}

	/// Write a human readable summary of the effective configuration.
	pub fn write_summary(&self, out: &mut impl Write) -> io::Result<()> {
		summary::write_summary(self, out)
	}
}

#[cfg(test)]
pub(crate) fn sample_config() -> ResolvedConfig {
	ResolvedConfig {
		api: ApiOptions::default(),
		debounce: Duration::from_millis(1000),
		initial_query: String::new(),
		cache: CacheOptions::default(),
		ui: UiConfig::default(),
		theme_name: "slate".into(),
		theme: Theme::default(),
		logging: LoggingOptions {
			enabled: true,
			level: "info".into(),
			file: PathBuf::from("/tmp/dictui.log"),
		},
		config_files: Vec::new(),
	}
}
