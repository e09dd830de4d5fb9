//! Terminal client for a remote word dictionary.
//!
//! Typing in the search box is debounced, the settled text is looked up
//! through a keyed query cache, and words can be added when nothing matches or
//! removed from the result table. Successful edits invalidate the active
//! search so the table always reflects the service.

pub mod api;
pub mod app_dirs;
pub mod debounce;
pub mod logging;
pub mod query;
pub mod ui;

pub use api::{ApiError, ApiOptions, DictionaryApi, HttpDictionary};
pub use debounce::Debounced;
pub use logging::LoggingOptions;
pub use query::{Banner, CacheOptions, Coordinator, QueryCache, QueryKey, SearchView};
pub use ui::{App, AppOptions, PageLayout, Theme, UiConfig, run};
