use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use super::worker::{self, ApiCommand, ApiReply};
use super::{CacheOptions, Mutation, MutationStatus, QueryCache, QueryKey, SearchView};
use crate::api::DictionaryApi;

/// Runs searches for the settled query and keeps results fresh across mutations.
///
/// All network work happens on a worker thread; the coordinator only sends
/// commands and applies replies in [`Coordinator::pump`], so it never blocks the
/// caller.
pub struct Coordinator {
	tx: Sender<ApiCommand>,
	rx: Receiver<ApiReply>,
	cache: QueryCache<Vec<String>>,
	active: Option<QueryKey>,
	add: Tracked,
	remove: Tracked,
	next_mutation: u64,
}

#[derive(Default)]
struct Tracked {
	latest: Option<u64>,
	status: MutationStatus,
}

impl Coordinator {
	pub fn new<A: DictionaryApi>(api: A, options: CacheOptions) -> Self {
		let (tx, rx) = worker::spawn(api);
		Self {
			tx,
			rx,
			cache: QueryCache::new(options),
			active: None,
			add: Tracked::default(),
			remove: Tracked::default(),
			next_mutation: 0,
		}
	}

	/// Make `settled` the active query, fetching it when the cache needs to.
	///
	/// An empty query deactivates searching altogether.
	pub fn set_query(&mut self, settled: &str, now: Instant) {
		if settled.is_empty() {
			self.active = None;
			return;
		}

		let key = QueryKey::search(settled);
		self.cache.touch(&key, now);
		if self.cache.should_fetch_on_activate(&key, now) {
			self.fetch(&key, now);
		}
		self.active = Some(key);
	}

	pub fn active_query(&self) -> Option<&str> {
		self.active.as_ref().map(QueryKey::value)
	}

	/// Ask the service to create `word`.
	pub fn add_word(&mut self, word: &str) {
		self.mutate(Mutation::Add, word);
	}

	/// Ask the service to delete `word`.
	pub fn remove_word(&mut self, word: &str) {
		self.mutate(Mutation::Remove, word);
	}

	fn mutate(&mut self, kind: Mutation, word: &str) {
		if word.is_empty() {
			debug!(operation = kind.as_str(), "ignoring empty word");
			return;
		}
		self.next_mutation = self.next_mutation.wrapping_add(1);
		let id = self.next_mutation;
		let tracked = self.tracked_mut(kind);
		tracked.latest = Some(id);
		tracked.status.start(word);
		let _ = self.tx.send(ApiCommand::Mutate {
			id,
			kind,
			word: word.to_string(),
		});
	}

	fn fetch(&mut self, key: &QueryKey, now: Instant) {
		let ticket = self.cache.begin_fetch(key, now);
		trace!(key = %key, id = ticket.id, "fetch issued");
		let _ = self.tx.send(ApiCommand::Search { ticket });
	}

	fn tracked_mut(&mut self, kind: Mutation) -> &mut Tracked {
		match kind {
			Mutation::Add => &mut self.add,
			Mutation::Remove => &mut self.remove,
		}
	}

	/// Apply every reply that has arrived. Returns whether anything changed.
	pub fn pump(&mut self, now: Instant) -> bool {
		let mut changed = false;
		loop {
			match self.rx.try_recv() {
				Ok(reply) => changed |= self.apply(reply, now),
				Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
			}
		}
		self.refetch_if_invalidated(now);
		self.cache.evict_unused(now, self.active.as_ref());
		changed
	}

	/// Block up to `timeout` for one reply, then pump the rest.
	pub fn wait(&mut self, timeout: Duration) -> bool {
		let changed = match self.rx.recv_timeout(timeout) {
			Ok(reply) => self.apply(reply, Instant::now()),
			Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
		};
		self.pump(Instant::now()) || changed
	}

	fn apply(&mut self, reply: ApiReply, now: Instant) -> bool {
		match reply {
			ApiReply::Search { ticket, result } => {
				let result = result.map_err(|err| err.to_string());
				let applied = self.cache.complete(&ticket, result, now);
				if !applied {
					trace!(key = %ticket.key, id = ticket.id, "dropping superseded result");
				}
				applied && self.active.as_ref() == Some(&ticket.key)
			}
			ApiReply::Mutate {
				id,
				kind,
				word,
				result,
			} => {
				let succeeded = result.is_ok();
				let tracked = self.tracked_mut(kind);
				let latest = tracked.latest == Some(id);
				if latest {
					match result {
						Ok(()) => tracked.status.succeed(),
						Err(err) => tracked.status.fail(err.to_string()),
					}
				}
				if succeeded && let Some(key) = self.active.clone() {
					debug!(operation = kind.as_str(), %word, key = %key, "invalidating search");
					self.cache.invalidate(&key);
					self.refetch_if_invalidated(now);
				}
				latest || succeeded
			}
		}
	}

	fn refetch_if_invalidated(&mut self, now: Instant) {
		if let Some(key) = self.active.clone()
			&& self.cache.should_refetch(&key)
		{
			self.fetch(&key, now);
		}
	}

	/// Derive what the page should show for the active query.
	pub fn view(&self) -> SearchView {
		let mut view = SearchView {
			add: self.add.status.clone(),
			remove: self.remove.status.clone(),
			..SearchView::default()
		};
		let Some(key) = &self.active else {
			return view;
		};
		view.query = Some(key.value().to_string());
		if let Some(entry) = self.cache.get(key) {
			view.search = entry.state;
			view.data = entry.data.clone();
			view.search_error = entry.error.clone();
		}
		view
	}

	pub fn cache(&self) -> &QueryCache<Vec<String>> {
		&self.cache
	}

	/// Whether any request is still outstanding.
	pub fn is_busy(&self) -> bool {
		let view = self.view();
		view.search.is_pending() || view.add.state.is_pending() || view.remove.state.is_pending()
	}

	/// Stop the worker. Requests already on the wire are abandoned.
	pub fn shutdown(&mut self) {
		let _ = self.tx.send(ApiCommand::Shutdown);
	}
}

impl Drop for Coordinator {
	fn drop(&mut self) {
		self.shutdown();
	}
}

#[cfg(test)]
mod tests {
	use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
	use std::sync::{Arc, Mutex};

	use super::*;
	use crate::api::ApiError;
	use crate::query::{Banner, RequestState};

	#[derive(Clone, Default)]
	struct FakeDictionary {
		words: Arc<Mutex<Vec<String>>>,
		failing: Arc<AtomicBool>,
		searches: Arc<AtomicUsize>,
		search_delay: Duration,
	}

	impl FakeDictionary {
		fn with_words(words: &[&str]) -> Self {
			let fake = Self::default();
			*fake.words.lock().unwrap() = words.iter().map(|w| w.to_string()).collect();
			fake
		}

		fn slow_search(mut self, delay: Duration) -> Self {
			self.search_delay = delay;
			self
		}

		fn fail(&self, failing: bool) {
			self.failing.store(failing, Ordering::SeqCst);
		}

		fn check(&self, method: &'static str) -> Result<(), ApiError> {
			if self.failing.load(Ordering::SeqCst) {
				return Err(ApiError::Status {
					method,
					url: "http://fake/dictionary".into(),
					status: 503,
				});
			}
			Ok(())
		}
	}

	impl DictionaryApi for FakeDictionary {
		fn search(&self, query: &str) -> Result<Vec<String>, ApiError> {
			self.searches.fetch_add(1, Ordering::SeqCst);
			std::thread::sleep(self.search_delay);
			self.check("GET")?;
			let words = self.words.lock().unwrap();
			Ok(words.iter().filter(|w| w.starts_with(query)).cloned().collect())
		}

		fn add(&self, word: &str) -> Result<(), ApiError> {
			self.check("POST")?;
			self.words.lock().unwrap().push(word.to_string());
			Ok(())
		}

		fn remove(&self, word: &str) -> Result<(), ApiError> {
			self.check("DELETE")?;
			self.words.lock().unwrap().retain(|w| w != word);
			Ok(())
		}
	}

	fn settle(coordinator: &mut Coordinator) {
		let deadline = Instant::now() + Duration::from_secs(2);
		while coordinator.is_busy() && Instant::now() < deadline {
			coordinator.wait(Duration::from_millis(20));
		}
		coordinator.pump(Instant::now());
	}

	fn entries(coordinator: &Coordinator) -> Option<Vec<String>> {
		coordinator.view().entries().map(<[String]>::to_vec)
	}

	#[test]
	fn empty_query_issues_no_request() {
		let fake = FakeDictionary::with_words(&["cat"]);
		let mut coordinator = Coordinator::new(fake.clone(), CacheOptions::default());
		coordinator.set_query("", Instant::now());
		settle(&mut coordinator);

		assert_eq!(fake.searches.load(Ordering::SeqCst), 0);
		let view = coordinator.view();
		assert_eq!(view.search, RequestState::Idle);
		assert!(view.banners("").is_empty());
		assert!(view.entries().is_none());
	}

	#[test]
	fn results_keep_service_order() {
		let fake = FakeDictionary::with_words(&["cat", "category", "dog"]);
		let mut coordinator = Coordinator::new(fake, CacheOptions::default());
		coordinator.set_query("cat", Instant::now());
		assert_eq!(coordinator.view().primary_banner("cat"), Some(Banner::Searching));
		settle(&mut coordinator);

		assert_eq!(
			entries(&coordinator),
			Some(vec!["cat".to_string(), "category".to_string()])
		);
	}

	#[test]
	fn adding_refetches_active_query() {
		let fake = FakeDictionary::with_words(&[]);
		let mut coordinator = Coordinator::new(fake.clone(), CacheOptions::default());
		coordinator.set_query("xyz", Instant::now());
		settle(&mut coordinator);
		assert_eq!(
			coordinator.view().banners("xyz"),
			vec![Banner::NotFound { word: "xyz".into() }]
		);

		coordinator.add_word("xyz");
		settle(&mut coordinator);

		assert_eq!(entries(&coordinator), Some(vec!["xyz".to_string()]));
		assert_eq!(fake.searches.load(Ordering::SeqCst), 2);
		assert_eq!(coordinator.view().add.state, RequestState::Success);
	}

	#[test]
	fn removing_drops_word_from_next_render() {
		let fake = FakeDictionary::with_words(&["cat", "category"]);
		let mut coordinator = Coordinator::new(fake, CacheOptions::default());
		coordinator.set_query("cat", Instant::now());
		settle(&mut coordinator);

		coordinator.remove_word("category");
		settle(&mut coordinator);

		assert_eq!(entries(&coordinator), Some(vec!["cat".to_string()]));
	}

	#[test]
	fn failed_search_shows_error_not_previous_results() {
		let fake = FakeDictionary::with_words(&["cat"]);
		let mut coordinator = Coordinator::new(fake.clone(), CacheOptions::default());
		coordinator.set_query("cat", Instant::now());
		settle(&mut coordinator);

		fake.fail(true);
		coordinator.set_query("dog", Instant::now());
		settle(&mut coordinator);

		let view = coordinator.view();
		assert!(view.entries().is_none());
		assert!(matches!(
			view.primary_banner("dog"),
			Some(Banner::SearchFailed { .. })
		));
	}

	#[test]
	fn failed_mutation_is_reported_and_leaves_results() {
		let fake = FakeDictionary::with_words(&["cat"]);
		let mut coordinator = Coordinator::new(fake.clone(), CacheOptions::default());
		coordinator.set_query("cat", Instant::now());
		settle(&mut coordinator);
		let searches = fake.searches.load(Ordering::SeqCst);

		fake.fail(true);
		coordinator.remove_word("cat");
		settle(&mut coordinator);

		let view = coordinator.view();
		assert_eq!(view.remove.state, RequestState::Error);
		assert!(matches!(
			view.primary_banner("cat"),
			Some(Banner::RemoveFailed { ref word, .. }) if word == "cat"
		));
		assert_eq!(entries(&coordinator), Some(vec!["cat".to_string()]));
		assert_eq!(fake.searches.load(Ordering::SeqCst), searches);
	}

	#[test]
	fn switching_back_shows_cached_rows_while_refreshing() {
		let fake = FakeDictionary::with_words(&["cat", "dog"]);
		let mut coordinator = Coordinator::new(fake, CacheOptions::default());
		coordinator.set_query("cat", Instant::now());
		settle(&mut coordinator);
		coordinator.set_query("dog", Instant::now());
		settle(&mut coordinator);

		coordinator.set_query("cat", Instant::now());
		let view = coordinator.view();
		assert_eq!(view.entries(), Some(&["cat".to_string()][..]));
		settle(&mut coordinator);
		assert_eq!(entries(&coordinator), Some(vec!["cat".to_string()]));
	}

	#[test]
	fn empty_words_are_not_sent() {
		let fake = FakeDictionary::with_words(&[]);
		let mut coordinator = Coordinator::new(fake.clone(), CacheOptions::default());
		coordinator.add_word("");
		assert_eq!(coordinator.view().add.state, RequestState::Idle);
		assert!(fake.words.lock().unwrap().is_empty());
	}

	#[test]
	fn slow_search_does_not_hold_up_a_remove() {
		let fake =
			FakeDictionary::with_words(&["cat", "stale"]).slow_search(Duration::from_millis(1500));
		let mut coordinator = Coordinator::new(fake.clone(), CacheOptions::default());
		let start = Instant::now();
		coordinator.set_query("stale", start);
		coordinator.remove_word("cat");

		let deadline = start + Duration::from_millis(300);
		while coordinator.view().remove.state != RequestState::Success && Instant::now() < deadline {
			coordinator.wait(Duration::from_millis(10));
		}

		assert_eq!(coordinator.view().remove.state, RequestState::Success);
		assert!(start.elapsed() < Duration::from_millis(300));
		assert_eq!(coordinator.view().search, RequestState::Pending);
		assert_eq!(*fake.words.lock().unwrap(), vec!["stale".to_string()]);
	}
}
