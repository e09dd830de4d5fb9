use clap::{CommandFactory, Parser};

use super::CliArgs;

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn defaults_leave_every_override_unset() {
	let parsed = CliArgs::try_parse_from(["dictui"]).expect("parses");
	assert!(parsed.base_url.is_none());
	assert!(parsed.debounce_ms.is_none());
	assert!(!parsed.no_log);
	assert!(!parsed.print_config);
}

#[test]
fn short_flags_map_to_overrides() {
	let parsed = CliArgs::try_parse_from([
		"dictui",
		"-u",
		"http://dict.local:9000",
		"-d",
		"250",
		"-q",
		"cat",
		"-c",
		"one.toml",
		"-c",
		"two.toml",
	])
	.expect("parses");
	assert_eq!(parsed.base_url.as_deref(), Some("http://dict.local:9000"));
	assert_eq!(parsed.debounce_ms, Some(250));
	assert_eq!(parsed.initial_query.as_deref(), Some("cat"));
	assert_eq!(parsed.config.len(), 2);
}

#[test]
fn timeout_must_be_numeric() {
	assert!(CliArgs::try_parse_from(["dictui", "--timeout-ms", "soon"]).is_err());
}
