use std::fmt::Write;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use dictui::{api, app_dirs};

use crate::settings::{ENV_PREFIX, default_config_files};

/// Version banner naming the default service and where settings are read from.
pub(super) fn long_version() -> &'static str {
	Box::leak(version_details().into_boxed_str())
}

fn version_details() -> String {
	let log_file = match app_dirs::default_log_file() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("dictui {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "default service: {}", api::DEFAULT_BASE_URL);
	let _ = writeln!(details, "config files (lowest precedence first):");
	for path in default_config_files() {
		let _ = writeln!(details, "  {}", path.display());
	}
	let _ = writeln!(details, "environment overrides: {ENV_PREFIX}_<SECTION>__<KEY>");
	let _ = writeln!(details, "log file: {log_file}");
	details
}

/// Help colours: section headers stand out, flags read like commands.
pub(super) fn help_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Blue.on_default().effects(Effects::BOLD | Effects::UNDERLINE))
		.usage(AnsiColor::Blue.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Magenta.on_default().effects(Effects::BOLD))
		.placeholder(AnsiColor::White.on_default().effects(Effects::DIMMED))
		.error(AnsiColor::Red.on_default().effects(Effects::BOLD))
}
