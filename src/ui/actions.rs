use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyOutcome {
	Continue,
	Quit,
}

impl App {
	pub(crate) fn handle_key(&mut self, key: KeyEvent, now: Instant) -> KeyOutcome {
		let control = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => return KeyOutcome::Quit,
			KeyCode::Char('c') if control => return KeyOutcome::Quit,
			KeyCode::Enter => self.search_now(now),
			KeyCode::Char('a') if control => {
				self.add_current_word();
			}
			KeyCode::Char('d') if control => {
				self.remove_selected_word();
			}
			KeyCode::Up => self.move_selection_up(),
			KeyCode::Down => self.move_selection_down(),
			_ => {
				if self.input.input(key) {
					self.query_edited(now);
				}
			}
		}
		KeyOutcome::Continue
	}
}
