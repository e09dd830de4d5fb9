use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::Throbber;

use super::App;
use super::components::{PromptContext, render_banners, render_prompt, render_results};
use super::config::{MIN_WIDTH, PageLayout};

const INPUT_HEIGHT: u16 = 3;
const FOOTER: &str = "Up/Down: select  Ctrl-D: delete  Ctrl-A: add  Esc: quit";

impl App {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = self.page_area(frame.area());
		let raw_query = self.input.text().to_string();
		let banners = self.view.banners(&raw_query);
		let banner_height = u16::try_from(banners.len()).unwrap_or(u16::MAX);

		let [title_area, input_area, banner_area, results_area, footer_area] =
			Layout::vertical([
				Constraint::Length(1),
				Constraint::Length(INPUT_HEIGHT),
				Constraint::Length(banner_height),
				Constraint::Min(0),
				Constraint::Length(1),
			])
			.areas(area);

		let title = Paragraph::new(self.ui.title.as_str())
			.style(self.theme.title_style())
			.alignment(Alignment::Center);
		frame.render_widget(title, title_area);

		let refreshing = self.view.is_refreshing().then(|| self.refresh_spinner());
		render_prompt(
			frame,
			input_area,
			PromptContext {
				input: &mut self.input,
				placeholder: &self.ui.placeholder,
				refreshing,
				theme: &self.theme,
			},
		);

		render_banners(frame, banner_area, &banners, &self.theme, &self.throbber_state);

		if let Some(words) = self.view.entries() {
			render_results(frame, results_area, words, &mut self.table_state, &self.theme);
		}

		let footer = Paragraph::new(FOOTER).style(self.theme.hint_style());
		frame.render_widget(footer, footer_area);
	}

	fn refresh_spinner(&self) -> Span<'static> {
		let style = self.theme.info_style();
		Throbber::default()
			.style(style)
			.throbber_style(style)
			.to_symbol_span(&self.throbber_state)
	}

	/// Region the page occupies for the configured layout.
	fn page_area(&self, area: Rect) -> Rect {
		match self.ui.layout {
			PageLayout::Wide => area.inner(Margin {
				vertical: 0,
				horizontal: 1,
			}),
			PageLayout::Centered => {
				let width = self.ui.width.max(MIN_WIDTH).min(area.width);
				let x = area.x + (area.width - width) / 2;
				Rect { x, width, ..area }
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;
	use ratatui::buffer::Buffer;

	use super::*;
	use crate::ui::state::tests::{MemoryDictionary, app_on, app_with, wait_for_idle};

	fn render(app: &mut App, width: u16, height: u16) -> Buffer {
		let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
		terminal.draw(|frame| app.draw(frame)).unwrap();
		terminal.backend().buffer().clone()
	}

	/// Screen rows joined by newlines, trailing blanks trimmed.
	fn buffer_to_string(buf: &Buffer) -> String {
		let mut lines = Vec::new();
		for y in 0..buf.area.height {
			let mut line = String::new();
			for x in 0..buf.area.width {
				line.push_str(buf[(x, y)].symbol());
			}
			lines.push(line.trim_end().to_string());
		}
		lines.join("\n")
	}

	#[test]
	fn empty_page_shows_title_and_placeholder() {
		let mut app = app_with(&["cat"], "");
		let text = buffer_to_string(&render(&mut app, 70, 12));
		assert!(text.contains("Dictionary search and management"));
		assert!(text.contains("Enter word to search"));
		assert!(!text.contains("Word not found"));
		assert!(!text.contains("[Delete]"));
	}

	#[test]
	fn results_page() {
		let mut app = app_with(&["cat", "category", "dog"], "cat");
		wait_for_idle(&mut app);
		let snapshot = buffer_to_string(&render(&mut app, 64, 10));
		insta::assert_snapshot!("results_page", snapshot);
	}

	#[test]
	fn not_found_page() {
		let mut app = app_with(&["cat"], "xyz");
		wait_for_idle(&mut app);
		let snapshot = buffer_to_string(&render(&mut app, 64, 10));
		insta::assert_snapshot!("not_found_page", snapshot);
	}

	#[test]
	fn failed_add_keeps_not_found_prompt() {
		let dictionary = MemoryDictionary {
			mutations_fail: true,
			..MemoryDictionary::with_words(&["cat"])
		};
		let mut app = app_on(dictionary, "xyz");
		wait_for_idle(&mut app);
		assert!(app.add_current_word());
		wait_for_idle(&mut app);
		let snapshot = buffer_to_string(&render(&mut app, 64, 10));
		insta::assert_snapshot!("failed_add_keeps_not_found_prompt", snapshot);
	}

	#[test]
	fn search_error_page() {
		let dictionary = MemoryDictionary {
			searches_fail: true,
			..MemoryDictionary::with_words(&["cat"])
		};
		let mut app = app_on(dictionary, "cat");
		wait_for_idle(&mut app);
		let snapshot = buffer_to_string(&render(&mut app, 64, 10));
		insta::assert_snapshot!("search_error_page", snapshot);
	}

	#[test]
	fn wide_layout() {
		let mut app = app_with(&["cat", "category"], "cat");
		app.ui.layout = PageLayout::Wide;
		wait_for_idle(&mut app);
		let snapshot = buffer_to_string(&render(&mut app, 50, 10));
		insta::assert_snapshot!("wide_layout", snapshot);
	}

	#[test]
	fn centered_layout_leaves_side_margins() {
		let mut app = app_with(&[], "");
		let buffer = render(&mut app, 100, 8);
		// Input border starts where the centered column starts.
		assert_eq!(buffer[(18, 1)].symbol(), "┌");
		assert_eq!(buffer[(0, 1)].symbol(), " ");
	}
}
