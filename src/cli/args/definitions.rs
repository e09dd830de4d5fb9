use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::about::{help_styles, long_version};

/// Command-line arguments accepted by the `dictui` binary.
#[derive(Parser, Debug)]
#[command(
    name = "dictui",
    version,
    long_version = long_version(),
    about = "Search, add and remove words in a remote dictionary",
    color = ColorChoice::Auto,
    styles = help_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "DICTUI_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'u',
        long = "base-url",
        value_name = "URL",
        help = "Base URL of the dictionary service (default: http://127.0.0.1:8080)"
    )]
    pub(crate) base_url: Option<String>,
    #[arg(
        long = "timeout-ms",
        value_name = "MILLIS",
        help = "Per-request timeout in milliseconds (default: 10000)"
    )]
    pub(crate) timeout_ms: Option<u64>,
    #[arg(
        short = 'd',
        long = "debounce-ms",
        value_name = "MILLIS",
        help = "Quiet period before a typed query is searched (default: 1000)"
    )]
    pub(crate) debounce_ms: Option<u64>,
    #[arg(
        short = 'q',
        long = "query",
        value_name = "QUERY",
        help = "Provide an initial search query (default: empty)"
    )]
    pub(crate) initial_query: Option<String>,
    #[arg(
        long,
        value_name = "LAYOUT",
        help = "Page layout, centered or wide (default: centered)"
    )]
    pub(crate) layout: Option<String>,
    #[arg(
        long,
        value_name = "COLUMNS",
        help = "Page width for the centered layout (default: 64)"
    )]
    pub(crate) width: Option<u16>,
    #[arg(
        long,
        value_name = "THEME",
        help = "Select a theme by name (default: slate)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(
        short = 'l',
        long = "list-themes",
        help = "List supported themes and exit (default: disabled)"
    )]
    pub(crate) list_themes: bool,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration and exit (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        long = "log-level",
        value_name = "FILTER",
        help = "Log filter directive, overridden by RUST_LOG (default: info)"
    )]
    pub(crate) log_level: Option<String>,
    #[arg(
        long = "log-file",
        value_name = "FILE",
        help = "Write logs to this file (default: <data dir>/logs/dictui.log)"
    )]
    pub(crate) log_file: Option<PathBuf>,
    #[arg(
        long = "no-log",
        help = "Disable file logging (default: disabled)"
    )]
    pub(crate) no_log: bool,
}
