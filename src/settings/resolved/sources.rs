use std::fmt;

/// Where a configured value came from, for error messages.
#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) base_url: Option<SettingSource>,
	pub(crate) timeout: Option<SettingSource>,
	pub(crate) layout: Option<SettingSource>,
	pub(crate) width: Option<SettingSource>,
	pub(crate) theme: Option<SettingSource>,
	pub(crate) log_level: Option<SettingSource>,
}

fn or_key(source: &Option<SettingSource>, key: &'static str) -> SettingSource {
	source.clone().unwrap_or(SettingSource::ConfigKey(key))
}

impl ConfigSources {
	pub(crate) fn source_for_base_url(&self) -> SettingSource {
		or_key(&self.base_url, "api.base_url")
	}

	pub(crate) fn source_for_timeout(&self) -> SettingSource {
		or_key(&self.timeout, "api.timeout_ms")
	}

	pub(crate) fn source_for_layout(&self) -> SettingSource {
		or_key(&self.layout, "ui.layout")
	}

	pub(crate) fn source_for_width(&self) -> SettingSource {
		or_key(&self.width, "ui.width")
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		or_key(&self.theme, "ui.theme")
	}

	pub(crate) fn source_for_log_level(&self) -> SettingSource {
		or_key(&self.log_level, "logging.level")
	}
}
