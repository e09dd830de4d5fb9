//! Widgets that make up the search page.

pub mod banners;
pub mod prompt;
pub mod results;

pub use banners::{banner_text, render_banners};
pub use prompt::{PromptContext, SEARCH_HINT, render_prompt};
pub use results::{DELETE_LABEL, render_results};
