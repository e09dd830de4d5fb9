use std::time::{Duration, Instant};

use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;
use tracing::debug;

use super::config::UiConfig;
use super::input::SearchInput;
use super::theme::Theme;
use crate::api::DictionaryApi;
use crate::debounce::{self, Debounced};
use crate::query::{CacheOptions, Coordinator, SearchView};

/// Everything needed to open the page.
#[derive(Debug, Clone)]
pub struct AppOptions {
	pub initial_query: String,
	pub debounce: Duration,
	pub cache: CacheOptions,
	pub ui: UiConfig,
	pub theme: Theme,
}

impl Default for AppOptions {
	fn default() -> Self {
		Self {
			initial_query: String::new(),
			debounce: debounce::DEFAULT_DELAY,
			cache: CacheOptions::default(),
			ui: UiConfig::default(),
			theme: Theme::default(),
		}
	}
}

impl Drop for App {
	fn drop(&mut self) {
		self.query.cancel();
		self.coordinator.shutdown();
	}
}

pub struct App {
	pub(crate) input: SearchInput,
	pub(crate) query: Debounced<String>,
	pub(crate) coordinator: Coordinator,
	pub(crate) view: SearchView,
	pub(crate) table_state: TableState,
	pub(crate) ui: UiConfig,
	pub(crate) theme: Theme,
	pub(crate) throbber_state: ThrobberState,
}

impl App {
	pub fn new<A: DictionaryApi>(api: A, options: AppOptions) -> Self {
		let AppOptions {
			initial_query,
			debounce,
			cache,
			ui,
			theme,
		} = options;

		let mut coordinator = Coordinator::new(api, cache);
		coordinator.set_query(&initial_query, Instant::now());
		let view = coordinator.view();

		Self {
			input: SearchInput::new(initial_query.clone()),
			query: Debounced::new(initial_query, debounce),
			coordinator,
			view,
			table_state: TableState::default(),
			ui,
			theme,
			throbber_state: ThrobberState::default(),
		}
	}

	/// Advance timers and apply finished requests.
	pub(crate) fn tick(&mut self, now: Instant) {
		if let Some(settled) = self.query.poll(now) {
			debug!(query = %settled, "query settled");
			let settled = settled.clone();
			self.coordinator.set_query(&settled, now);
		}
		self.coordinator.pump(now);
		self.refresh_view();
	}

	/// Feed the current input text to the debouncer.
	pub(crate) fn query_edited(&mut self, now: Instant) {
		self.query.observe(self.input.text().to_string(), now);
	}

	/// Search for the typed text right away, also retrying the current query.
	pub(crate) fn search_now(&mut self, now: Instant) {
		self.query.observe(self.input.text().to_string(), now);
		self.query.flush();
		let settled = self.query.settled().clone();
		self.coordinator.set_query(&settled, now);
		self.refresh_view();
	}

	/// Add the raw query when the not-found prompt is showing.
	pub(crate) fn add_current_word(&mut self) -> bool {
		if !self.view.is_not_found() {
			return false;
		}
		let word = self.input.text().to_string();
		self.coordinator.add_word(&word);
		self.refresh_view();
		true
	}

	pub(crate) fn remove_selected_word(&mut self) -> bool {
		let Some(word) = self.selected_word().map(str::to_string) else {
			return false;
		};
		self.coordinator.remove_word(&word);
		self.refresh_view();
		true
	}

	pub(crate) fn selected_word(&self) -> Option<&str> {
		let index = self.table_state.selected()?;
		self.view.entries()?.get(index).map(String::as_str)
	}

	pub(crate) fn entry_count(&self) -> usize {
		self.view.entries().map_or(0, <[String]>::len)
	}

	pub(crate) fn move_selection_up(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected > 0
		{
			self.table_state.select(Some(selected - 1));
		}
	}

	pub(crate) fn move_selection_down(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected + 1 < self.entry_count()
		{
			self.table_state.select(Some(selected + 1));
		}
	}

	fn refresh_view(&mut self) {
		let previous = std::mem::replace(&mut self.view, self.coordinator.view());
		if previous.query != self.view.query {
			self.table_state.select(None);
			*self.table_state.offset_mut() = 0;
		}
		self.ensure_selection();
	}

	fn ensure_selection(&mut self) {
		let len = self.entry_count();
		if len == 0 {
			self.table_state.select(None);
		} else {
			match self.table_state.selected() {
				None => self.table_state.select(Some(0)),
				Some(selected) if selected >= len => self.table_state.select(Some(len - 1)),
				Some(_) => {}
			}
		}
	}

	pub fn raw_query(&self) -> &str {
		self.input.text()
	}

	pub fn settled_query(&self) -> &str {
		self.query.settled()
	}

	pub fn view(&self) -> &SearchView {
		&self.view
	}
}
