use std::io::{self, Write};

use super::ResolvedConfig;

pub(super) fn write_summary(config: &ResolvedConfig, out: &mut impl Write) -> io::Result<()> {
	writeln!(out, "Effective configuration:")?;
	writeln!(out, "  Service: {}", config.api.base_url)?;
	writeln!(out, "  Request timeout: {} ms", config.api.timeout.as_millis())?;
	writeln!(out, "  Debounce: {} ms", config.debounce.as_millis())?;
	if !config.initial_query.is_empty() {
		writeln!(out, "  Initial query: {}", config.initial_query)?;
	}
	writeln!(out, "  Cache stale time: {} ms", config.cache.stale_time.as_millis())?;
	writeln!(out, "  Cache gc time: {} ms", config.cache.gc_time.as_millis())?;
	writeln!(out, "  Title: {}", config.ui.title)?;
	writeln!(out, "  Placeholder: {}", config.ui.placeholder)?;
	writeln!(out, "  Layout: {}", config.ui.layout)?;
	writeln!(out, "  Width: {}", config.ui.width)?;
	writeln!(out, "  UI theme: {}", config.theme_name)?;
	writeln!(out, "  Logging: {}", bool_to_word(config.logging.enabled))?;
	if config.logging.enabled {
		writeln!(out, "  Log level: {}", config.logging.level)?;
		writeln!(out, "  Log file: {}", config.logging.file.display())?;
	}
	if config.config_files.is_empty() {
		writeln!(out, "  Config files: none")?;
	} else {
		writeln!(out, "  Config files:")?;
		for path in &config.config_files {
			writeln!(out, "    {}", path.display())?;
		}
	}
	Ok(())
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
