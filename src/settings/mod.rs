//! Configuration loading and resolution.
//!
//! `load` layers the default config files, any `--config` files, `DICTUI_*`
//! environment variables and finally CLI flags, then validates the result
//! into a [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;

pub(crate) use loader::{ENV_PREFIX, default_config_files};
pub use loader::load;
pub use resolved::ResolvedConfig;
