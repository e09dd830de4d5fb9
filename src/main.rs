mod cli;
mod settings;

use std::io;

use anyhow::{Context, Result};
use cli::parse_cli;
use dictui::{HttpDictionary, logging, ui};
use tracing::info;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in ui::theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved
			.write_summary(&mut io::stdout().lock())
			.context("failed to print the configuration")?;
		return Ok(());
	}

	let _log_guard = logging::initialize(&resolved.logging)?;

	let api = HttpDictionary::new(&resolved.api).context("failed to set up the dictionary client")?;
	info!(base_url = %api.base_url(), "starting dictui");

	ui::run(api, resolved.app_options())
}
