use dictui::api::parse_base_url;
use dictui::ui::MIN_WIDTH;
use tracing_subscriber::EnvFilter;

use super::{ConfigError, ConfigSources, Problem, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if let Err(err) = parse_base_url(&config.api.base_url) {
		return Err(ConfigError::new(
			Problem::Endpoint(err),
			config.api.base_url.clone(),
			sources.source_for_base_url(),
		));
	}

	if config.api.timeout.is_zero() {
		return Err(ConfigError::new(
			Problem::ZeroTimeout,
			"0",
			sources.source_for_timeout(),
		));
	}

	if config.ui.width < MIN_WIDTH {
		return Err(ConfigError::new(
			Problem::TooNarrow { min: MIN_WIDTH },
			config.ui.width.to_string(),
			sources.source_for_width(),
		));
	}

	if config.logging.enabled
		&& let Err(err) = EnvFilter::try_new(&config.logging.level)
	{
		return Err(ConfigError::new(
			Problem::LogFilter(err),
			config.logging.level.clone(),
			sources.source_for_log_level(),
		));
	}

	Ok(())
}
