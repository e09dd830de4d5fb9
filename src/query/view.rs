use super::{MutationStatus, RequestState};

/// Status line shown above the results, ordered by priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
	Searching,
	Adding { word: String },
	Removing { word: String },
	SearchFailed { message: String },
	AddFailed { word: String, message: String },
	RemoveFailed { word: String, message: String },
	NotFound { word: String },
}

impl Banner {
	/// Whether the banner describes work still in progress.
	pub fn is_busy(&self) -> bool {
		matches!(
			self,
			Self::Searching | Self::Adding { .. } | Self::Removing { .. }
		)
	}

	pub fn is_error(&self) -> bool {
		matches!(
			self,
			Self::SearchFailed { .. } | Self::AddFailed { .. } | Self::RemoveFailed { .. }
		)
	}
}

/// Snapshot of everything the page renders for the active query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchView {
	/// Settled query the snapshot belongs to; `None` when it is empty.
	pub query: Option<String>,
	pub search: RequestState,
	pub data: Option<Vec<String>>,
	pub search_error: Option<String>,
	pub add: MutationStatus,
	pub remove: MutationStatus,
}

impl SearchView {
	/// Pending with nothing cached yet.
	pub fn is_loading(&self) -> bool {
		self.search.is_pending() && self.data.is_none()
	}

	/// Pending while older rows are still on screen.
	pub fn is_refreshing(&self) -> bool {
		self.search.is_pending() && self.data.is_some()
	}

	/// Rows to display. A failed search never shows rows from before.
	pub fn entries(&self) -> Option<&[String]> {
		if self.search.is_error() {
			return None;
		}
		self.data.as_deref()
	}

	pub fn is_not_found(&self) -> bool {
		self.query.is_some() && !self.is_loading() && self.entries().is_some_and(<[String]>::is_empty)
	}

	/// Banners in display priority. `raw_query` is what the add prompt offers.
	pub fn banners(&self, raw_query: &str) -> Vec<Banner> {
		let mut banners = Vec::new();
		if self.query.is_some() && self.is_loading() {
			banners.push(Banner::Searching);
		}
		if self.add.state.is_pending() {
			banners.push(Banner::Adding {
				word: self.add.word.clone().unwrap_or_default(),
			});
		}
		if self.remove.state.is_pending() {
			banners.push(Banner::Removing {
				word: self.remove.word.clone().unwrap_or_default(),
			});
		}
		if self.query.is_some() && self.search.is_error() {
			banners.push(Banner::SearchFailed {
				message: self.search_error.clone().unwrap_or_default(),
			});
		}
		if self.add.state.is_error() {
			banners.push(Banner::AddFailed {
				word: self.add.word.clone().unwrap_or_default(),
				message: self.add.error.clone().unwrap_or_default(),
			});
		}
		if self.remove.state.is_error() {
			banners.push(Banner::RemoveFailed {
				word: self.remove.word.clone().unwrap_or_default(),
				message: self.remove.error.clone().unwrap_or_default(),
			});
		}
		if self.is_not_found() {
			banners.push(Banner::NotFound {
				word: raw_query.to_string(),
			});
		}
		banners
	}

	/// Highest priority banner, if any.
	pub fn primary_banner(&self, raw_query: &str) -> Option<Banner> {
		self.banners(raw_query).into_iter().next()
	}
}
