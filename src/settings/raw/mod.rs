use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Error, Result};
use dictui::api::{self, ApiOptions};
use dictui::logging::{self, LoggingOptions};
use dictui::ui::{self, PageLayout, UiConfig, theme};
use dictui::{CacheOptions, app_dirs, debounce};
use serde::Deserialize;

use super::resolved::{ConfigError, ConfigSources, Problem, ResolvedConfig, SettingSource};
use crate::cli::CliArgs;

mod sections;

use sections::{ApiSection, CacheSection, LoggingSection, SearchSection, UiSection};

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	api: ApiSection,
	search: SearchSection,
	cache: CacheSection,
	ui: UiSection,
	logging: LoggingSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.api.apply_cli_overrides(cli);
		self.search.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.logging.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			base_url: detect_source(
				cli.base_url.is_some(),
				self.api.base_url.is_some(),
				"DICTUI_API__BASE_URL",
				"--base-url",
				"api.base_url",
			),
			timeout: detect_source(
				cli.timeout_ms.is_some(),
				self.api.timeout_ms.is_some(),
				"DICTUI_API__TIMEOUT_MS",
				"--timeout-ms",
				"api.timeout_ms",
			),
			layout: detect_source(
				cli.layout.is_some(),
				self.ui.layout.is_some(),
				"DICTUI_UI__LAYOUT",
				"--layout",
				"ui.layout",
			),
			width: detect_source(
				cli.width.is_some(),
				self.ui.width.is_some(),
				"DICTUI_UI__WIDTH",
				"--width",
				"ui.width",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"DICTUI_UI__THEME",
				"--theme",
				"ui.theme",
			),
			log_level: detect_source(
				cli.log_level.is_some(),
				self.logging.level.is_some(),
				"DICTUI_LOGGING__LEVEL",
				"--log-level",
				"logging.level",
			),
		};

		let api = ApiOptions {
			base_url: self
				.api
				.base_url
				.unwrap_or_else(|| api::DEFAULT_BASE_URL.to_string()),
			timeout: self
				.api
				.timeout_ms
				.map_or(api::DEFAULT_TIMEOUT, Duration::from_millis),
		};

		let debounce = self
			.search
			.debounce_ms
			.map_or(debounce::DEFAULT_DELAY, Duration::from_millis);
		let initial_query = self.search.initial_query.unwrap_or_default();

		let defaults = CacheOptions::default();
		let cache = CacheOptions {
			stale_time: self
				.cache
				.stale_ms
				.map_or(defaults.stale_time, Duration::from_millis),
			gc_time: self
				.cache
				.gc_ms
				.map_or(defaults.gc_time, Duration::from_millis),
		};

		let layout = match self.ui.layout {
			Some(value) => value.parse::<PageLayout>().map_err(|reason| {
				ConfigError::new(Problem::UnknownLayout(reason), value.clone(), sources.source_for_layout())
			})?,
			None => PageLayout::default(),
		};
		let ui = UiConfig {
			title: self.ui.title.unwrap_or_else(|| ui::DEFAULT_TITLE.to_string()),
			placeholder: self
				.ui
				.placeholder
				.unwrap_or_else(|| ui::DEFAULT_PLACEHOLDER.to_string()),
			layout,
			width: self.ui.width.unwrap_or(ui::DEFAULT_WIDTH),
		};

		let theme_name = self.ui.theme.unwrap_or_else(|| theme::DEFAULT_NAME.to_string());
		let theme = theme::by_name(&theme_name).ok_or_else(|| {
			ConfigError::new(
				Problem::UnknownTheme {
					choices: theme::names(),
				},
				theme_name.clone(),
				sources.source_for_theme(),
			)
		})?;

		let logging = LoggingOptions {
			enabled: self.logging.enabled.unwrap_or(true),
			level: self
				.logging
				.level
				.unwrap_or_else(|| logging::DEFAULT_LEVEL.to_string()),
			file: match self.logging.file {
				Some(file) => file,
				None => app_dirs::default_log_file().unwrap_or_else(|_| PathBuf::from("dictui.log")),
			},
		};

		let config = ResolvedConfig {
			api,
			debounce,
			initial_query,
			cache,
			ui,
			theme_name,
			theme,
			logging,
			config_files: Vec::new(),
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
