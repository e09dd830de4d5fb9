//! Contract for the remote dictionary service and its HTTP client.

mod error;
mod http;

use std::time::Duration;

pub use error::ApiError;
pub use http::{HttpDictionary, parse_base_url};

/// Path segment the dictionary resource lives under.
pub const RESOURCE: &str = "dictionary";

/// Default service location when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Operations the page needs from a dictionary backend.
///
/// Implementations are shared by the request threads, so calls may block and
/// may overlap.
pub trait DictionaryApi: Send + Sync + 'static {
	/// Words matching `query`, in the order the service returns them.
	fn search(&self, query: &str) -> Result<Vec<String>, ApiError>;

	/// Create `word`.
	fn add(&self, word: &str) -> Result<(), ApiError>;

	/// Delete `word`.
	fn remove(&self, word: &str) -> Result<(), ApiError>;
}

/// Connection settings for [`HttpDictionary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiOptions {
	pub base_url: String,
	pub timeout: Duration,
}

impl Default for ApiOptions {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.to_string(),
			timeout: DEFAULT_TIMEOUT,
		}
	}
}
