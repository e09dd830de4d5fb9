use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

use super::RequestState;

/// Scope used for dictionary search entries.
pub const SEARCH_SCOPE: &str = "search";

/// Identifies one cached query result.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
	scope: &'static str,
	value: String,
}

impl QueryKey {
	pub fn new(scope: &'static str, value: impl Into<String>) -> Self {
		Self {
			scope,
			value: value.into(),
		}
	}

	/// Key for the search results of `query`.
	pub fn search(query: impl Into<String>) -> Self {
		Self::new(SEARCH_SCOPE, query)
	}

	pub fn scope(&self) -> &'static str {
		self.scope
	}

	pub fn value(&self) -> &str {
		&self.value
	}
}

impl fmt::Display for QueryKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{:?}", self.scope, self.value)
	}
}

/// Proof that a fetch was started for `key`.
///
/// Only the newest ticket of an entry may complete it, which keeps a slow
/// response from overwriting a newer one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
	pub key: QueryKey,
	pub id: u64,
}

#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
	pub state: RequestState,
	pub data: Option<V>,
	pub error: Option<String>,
	pub updated_at: Option<Instant>,
	pub last_used: Instant,
	invalidated: bool,
	fetch: Option<u64>,
}

impl<V> CacheEntry<V> {
	fn new(now: Instant) -> Self {
		Self {
			state: RequestState::Idle,
			data: None,
			error: None,
			updated_at: None,
			last_used: now,
			invalidated: false,
			fetch: None,
		}
	}

	pub fn is_invalidated(&self) -> bool {
		self.invalidated
	}

	pub fn is_fetching(&self) -> bool {
		self.fetch.is_some()
	}
}

/// Timing knobs for [`QueryCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheOptions {
	/// How long a successful result counts as fresh when its key is reactivated.
	pub stale_time: Duration,
	/// How long an unused entry is kept before eviction.
	pub gc_time: Duration,
}

impl Default for CacheOptions {
	fn default() -> Self {
		Self {
			stale_time: Duration::ZERO,
			gc_time: Duration::from_secs(300),
		}
	}
}

/// Query results keyed by [`QueryKey`], with explicit invalidation.
#[derive(Debug)]
pub struct QueryCache<V> {
	entries: HashMap<QueryKey, CacheEntry<V>>,
	next_fetch: u64,
	options: CacheOptions,
}

impl<V> QueryCache<V> {
	pub fn new(options: CacheOptions) -> Self {
		Self {
			entries: HashMap::new(),
			next_fetch: 0,
			options,
		}
	}

	pub fn get(&self, key: &QueryKey) -> Option<&CacheEntry<V>> {
		self.entries.get(key)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Record that `key` is being displayed.
	pub fn touch(&mut self, key: &QueryKey, now: Instant) {
		self.entries
			.entry(key.clone())
			.or_insert_with(|| CacheEntry::new(now))
			.last_used = now;
	}

	/// Whether `key` should be fetched now that it became active.
	pub fn should_fetch_on_activate(&self, key: &QueryKey, now: Instant) -> bool {
		let Some(entry) = self.entries.get(key) else {
			return true;
		};
		if entry.is_fetching() {
			return false;
		}
		if entry.invalidated || entry.state != RequestState::Success {
			return true;
		}
		match entry.updated_at {
			Some(updated_at) => now.duration_since(updated_at) >= self.options.stale_time,
			None => true,
		}
	}

	/// Whether an invalidated entry is waiting for its refetch.
	pub fn should_refetch(&self, key: &QueryKey) -> bool {
		self.entries
			.get(key)
			.is_some_and(|entry| entry.invalidated && !entry.is_fetching())
	}

	/// Mark `key` as loading and hand out the ticket that may complete it.
	///
	/// Cached data stays in place until the fetch resolves.
	pub fn begin_fetch(&mut self, key: &QueryKey, now: Instant) -> FetchTicket {
		self.next_fetch = self.next_fetch.wrapping_add(1);
		let id = self.next_fetch;
		let entry = self
			.entries
			.entry(key.clone())
			.or_insert_with(|| CacheEntry::new(now));
		entry.state = RequestState::Pending;
		entry.invalidated = false;
		entry.fetch = Some(id);
		FetchTicket {
			key: key.clone(),
			id,
		}
	}

	/// Store the outcome of a fetch. Returns `false` when the ticket was superseded.
	pub fn complete(&mut self, ticket: &FetchTicket, result: Result<V, String>, now: Instant) -> bool {
		let Some(entry) = self.entries.get_mut(&ticket.key) else {
			return false;
		};
		if entry.fetch != Some(ticket.id) {
			return false;
		}
		entry.fetch = None;
		match result {
			Ok(data) => {
				entry.state = RequestState::Success;
				entry.data = Some(data);
				entry.error = None;
				entry.updated_at = Some(now);
			}
			Err(message) => {
				entry.state = RequestState::Error;
				entry.error = Some(message);
			}
		}
		true
	}

	/// Mark `key` stale so the next read refetches it. Data is left untouched.
	pub fn invalidate(&mut self, key: &QueryKey) -> bool {
		match self.entries.get_mut(key) {
			Some(entry) => {
				entry.invalidated = true;
				true
			}
			None => false,
		}
	}

	/// Drop idle entries unused for longer than the configured gc time.
	pub fn evict_unused(&mut self, now: Instant, keep: Option<&QueryKey>) -> usize {
		let gc_time = self.options.gc_time;
		let before = self.entries.len();
		self.entries.retain(|key, entry| {
			Some(key) == keep
				|| entry.is_fetching()
				|| now.duration_since(entry.last_used) < gc_time
		});
		before - self.entries.len()
	}
}

impl<V> Default for QueryCache<V> {
	fn default() -> Self {
		Self::new(CacheOptions::default())
	}
}
