use thiserror::Error;

/// Failures talking to the dictionary service.
///
/// The page treats every variant the same way; the split only exists to make
/// log lines and banners say what went wrong.
#[derive(Debug, Error)]
pub enum ApiError {
	/// The configured base URL cannot host the dictionary resource.
	#[error("invalid dictionary endpoint `{url}`: {reason}")]
	InvalidEndpoint { url: String, reason: String },

	/// The HTTP client could not be constructed.
	#[error("failed to build HTTP client: {source}")]
	Client {
		#[source]
		source: reqwest::Error,
	},

	/// The request never produced a response.
	#[error("{method} {url} failed: {source}")]
	Transport {
		method: &'static str,
		url: String,
		#[source]
		source: reqwest::Error,
	},

	/// The service answered with a non-success status.
	#[error("{method} {url} returned {status}")]
	Status {
		method: &'static str,
		url: String,
		status: u16,
	},

	/// The response body was not the expected JSON.
	#[error("{method} {url} returned an unreadable body: {source}")]
	Decode {
		method: &'static str,
		url: String,
		#[source]
		source: serde_json::Error,
	},
}

impl ApiError {
	pub fn invalid_endpoint(url: impl Into<String>, reason: impl Into<String>) -> Self {
		Self::InvalidEndpoint {
			url: url.into(),
			reason: reason.into(),
		}
	}

	/// HTTP status code when the service answered at all.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Status { status, .. } => Some(*status),
			_ => None,
		}
	}
}
