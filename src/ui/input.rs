use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

/// Single-line search box backed by a [`TextArea`].
///
/// Line breaks never reach the text area, so [`SearchInput::text`] is always
/// the whole query.
#[derive(Debug, Clone)]
pub struct SearchInput {
	textarea: TextArea<'static>,
}

impl Default for SearchInput {
	fn default() -> Self {
		Self::new(String::new())
	}
}

impl SearchInput {
	pub fn new(text: impl Into<String>) -> Self {
		let text = text.into().replace(['\r', '\n'], " ");
		let mut textarea = TextArea::new(vec![text]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	pub fn text(&self) -> &str {
		self.textarea.lines().first().map_or("", String::as_str)
	}

	pub fn is_empty(&self) -> bool {
		self.text().is_empty()
	}

	/// Apply an editing key. Returns `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let control = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Enter | KeyCode::Tab => false,
			KeyCode::Char('m') if control => false,
			KeyCode::Char('u') if control => self.clear(),
			_ => self.textarea.input(key),
		}
	}

	/// Apply the page styles before drawing.
	pub(crate) fn style(&mut self, placeholder: &str, placeholder_style: Style, text_style: Style) {
		if self.textarea.placeholder_text() != placeholder {
			self.textarea.set_placeholder_text(placeholder);
		}
		self.textarea.set_placeholder_style(placeholder_style);
		self.textarea.set_style(text_style);
		self.textarea
			.set_cursor_style(text_style.add_modifier(Modifier::REVERSED));
	}

	pub(crate) fn textarea(&self) -> &TextArea<'static> {
		&self.textarea
	}

	fn clear(&mut self) -> bool {
		self.textarea.move_cursor(CursorMove::End);
		self.textarea.delete_line_by_head()
	}
}
