use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use dictui::app_dirs;

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use crate::cli::CliArgs;

/// Prefix of environment overrides such as `DICTUI_API__BASE_URL`.
pub(crate) const ENV_PREFIX: &str = "DICTUI";

/// A configuration file consulted while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FileLayer {
	path: PathBuf,
	/// Given with `--config`; a missing file is an error.
	required: bool,
}

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let layers = file_layers(cli);
	let mut builder = Config::builder();
	for layer in &layers {
		builder = builder.add_source(File::from(layer.path.clone()).required(layer.required));
	}
	builder = builder.add_source(
		Environment::with_prefix(ENV_PREFIX)
			.prefix_separator("_")
			.separator("__")
			.try_parsing(true),
	);

	let mut raw: RawConfig = builder
		.build()
		.context("failed to read configuration")?
		.try_deserialize()
		.context("failed to deserialize configuration")?;
	raw.apply_cli_overrides(cli);

	let mut resolved = raw.resolve(cli)?;
	resolved.config_files = layers
		.into_iter()
		.filter(|layer| layer.path.is_file())
		.map(|layer| layer.path)
		.collect();
	Ok(resolved)
}

/// Files merged in order: the default locations unless `--no-config`, then
/// every `--config` file.
fn file_layers(cli: &CliArgs) -> Vec<FileLayer> {
	let defaults = if cli.no_config {
		Vec::new()
	} else {
		default_config_files()
	};
	defaults
		.into_iter()
		.map(|path| FileLayer {
			path,
			required: false,
		})
		.chain(cli.config.iter().map(|path| FileLayer {
			path: path.clone(),
			required: true,
		}))
		.collect()
}

/// Default configuration file locations, lowest precedence first.
pub(crate) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".dictui.toml"));
		files.push(current_dir.join("dictui.toml"));
	}

	files
}

#[cfg(test)]
mod tests {
	use std::fs;
	use std::time::Duration;

	use clap::Parser;
	use dictui::PageLayout;
	use tempfile::TempDir;

	use super::*;

	fn cli_with_file(contents: &str, extra: &[&str]) -> (TempDir, CliArgs) {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("dictui.toml");
		fs::write(&path, contents).expect("write config");
		let mut args = vec![
			"dictui".to_string(),
			"--no-config".to_string(),
			"--config".to_string(),
			path.display().to_string(),
		];
		args.extend(extra.iter().map(|arg| arg.to_string()));
		(dir, CliArgs::parse_from(args))
	}

	#[test]
	fn file_values_are_layered_under_cli_flags() {
		let (_dir, cli) = cli_with_file(
			r#"
			[api]
			base_url = "http://dict.local:9000/v1"
			timeout_ms = 2500

			[search]
			debounce_ms = 300

			[ui]
			layout = "wide"
			width = 80
			"#,
			&["--width", "90", "--no-log"],
		);

		let config = load(&cli).expect("loads");
		assert_eq!(config.api.base_url, "http://dict.local:9000/v1");
		assert_eq!(config.api.timeout, Duration::from_millis(2500));
		assert_eq!(config.debounce, Duration::from_millis(300));
		assert_eq!(config.ui.layout, PageLayout::Wide);
		assert_eq!(config.ui.width, 90);
		assert!(!config.logging.enabled);
	}

	#[test]
	fn zero_timeout_names_the_config_key() {
		let (_dir, cli) = cli_with_file("[api]\ntimeout_ms = 0\n", &[]);
		let err = load(&cli).unwrap_err().to_string();
		assert!(err.contains("api.timeout_ms"), "{err}");
		assert!(err.contains("configuration key"), "{err}");
	}

	#[test]
	fn bad_base_url_names_the_cli_flag() {
		let (_dir, cli) = cli_with_file("", &["--base-url", "ftp://dict.local"]);
		let err = load(&cli).unwrap_err().to_string();
		assert!(err.contains("CLI flag `--base-url`"), "{err}");
	}

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".dictui.toml")));
		assert!(files.iter().any(|path| path.ends_with("dictui.toml")));
	}

	#[test]
	fn explicit_files_are_required_and_merged_last() {
		let cli = CliArgs::parse_from(["dictui", "--config", "extra.toml"]);
		let layers = file_layers(&cli);
		let last = layers.last().expect("explicit layer");
		assert_eq!(last.path, PathBuf::from("extra.toml"));
		assert!(last.required);
		assert!(layers[..layers.len() - 1].iter().all(|layer| !layer.required));

		let cli = CliArgs::parse_from(["dictui", "--no-config"]);
		assert!(file_layers(&cli).is_empty());
	}

	#[test]
	fn loaded_files_are_recorded() {
		let (dir, cli) = cli_with_file("[search]\ndebounce_ms = 200\n", &[]);
		let config = load(&cli).expect("loads");
		assert_eq!(config.config_files, vec![dir.path().join("dictui.toml")]);
	}

	#[test]
	fn missing_explicit_config_file_is_an_error() {
		let cli = CliArgs::parse_from(["dictui", "--no-config", "--config", "/nonexistent/dictui.toml"]);
		assert!(load(&cli).is_err());
	}
}
