use dictui::ApiError;
use thiserror::Error;
use tracing_subscriber::filter::ParseError;

use super::SettingSource;

/// A configured value that cannot be used, with where it came from.
#[derive(Debug, Error)]
#[error("invalid value for {} from {origin}: {problem} (value: {value})", self.key())]
pub(crate) struct ConfigError {
	pub(crate) value: String,
	pub(crate) origin: SettingSource,
	pub(crate) problem: Problem,
}

/// Why a setting was rejected. Each variant belongs to exactly one key.
#[derive(Debug, Error)]
pub(crate) enum Problem {
	#[error("{0}")]
	Endpoint(ApiError),
	#[error("the request timeout must be greater than zero")]
	ZeroTimeout,
	#[error("the page needs at least {min} columns")]
	TooNarrow { min: u16 },
	#[error("{0}")]
	UnknownLayout(String),
	#[error("expected one of {}", .choices.join(", "))]
	UnknownTheme { choices: &'static [&'static str] },
	#[error("not a log filter: {0}")]
	LogFilter(ParseError),
}

impl Problem {
	/// Configuration key the rejected value is stored under.
	pub(crate) fn key(&self) -> &'static str {
		match self {
			Self::Endpoint(_) => "api.base_url",
			Self::ZeroTimeout => "api.timeout_ms",
			Self::TooNarrow { .. } => "ui.width",
			Self::UnknownLayout(_) => "ui.layout",
			Self::UnknownTheme { .. } => "ui.theme",
			Self::LogFilter(_) => "logging.level",
		}
	}
}

impl ConfigError {
	pub(crate) fn new(problem: Problem, value: impl Into<String>, origin: SettingSource) -> Self {
		Self {
			value: value.into(),
			origin,
			problem,
		}
	}

	pub(crate) fn key(&self) -> &'static str {
		self.problem.key()
	}
}
