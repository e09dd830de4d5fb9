//! Terminal search page.
//!
//! [`App`] ties the text input to the debounced query and the
//! [`Coordinator`](crate::query::Coordinator); [`run`] drives it inside a
//! ratatui terminal until the user quits.

mod actions;
pub mod components;
mod config;
pub mod input;
mod render;
mod runtime;
mod state;
pub mod theme;

pub use config::{DEFAULT_PLACEHOLDER, DEFAULT_TITLE, DEFAULT_WIDTH, MIN_WIDTH, PageLayout, UiConfig};
pub use runtime::run;
pub use state::{App, AppOptions};
pub use theme::Theme;
