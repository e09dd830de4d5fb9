use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::query::Banner;
use crate::ui::theme::Theme;

/// Text shown for a banner.
pub fn banner_text(banner: &Banner) -> String {
	match banner {
		Banner::Searching => "Searching...".to_string(),
		Banner::Adding { .. } => "Adding new word...".to_string(),
		Banner::Removing { .. } => "Removing word...".to_string(),
		Banner::SearchFailed { .. } => "Error while searching on dictionary.".to_string(),
		Banner::AddFailed { word, .. } => format!("Could not add {word} to dictionary."),
		Banner::RemoveFailed { word, .. } => format!("Could not remove {word} from dictionary."),
		Banner::NotFound { word } => {
			format!("Word not found, press Ctrl-A to add {word} to dictionary.")
		}
	}
}

fn banner_style(banner: &Banner, theme: &Theme) -> Style {
	if banner.is_error() {
		theme.danger_style()
	} else if banner.is_busy() {
		theme.info_style()
	} else {
		theme.warning_style()
	}
}

fn banner_line(banner: &Banner, theme: &Theme, throbber_state: &ThrobberState) -> Line<'static> {
	let style = banner_style(banner, theme);
	let mut line = Line::default();
	if banner.is_busy() {
		let spinner = Throbber::default().style(style).throbber_style(style);
		line.spans.push(spinner.to_symbol_span(throbber_state));
	}
	line.spans.push(Span::styled(banner_text(banner), style));
	line
}

/// Render one banner per row, in the order given.
pub fn render_banners(
	frame: &mut Frame,
	area: Rect,
	banners: &[Banner],
	theme: &Theme,
	throbber_state: &ThrobberState,
) {
	if area.height == 0 || banners.is_empty() {
		return;
	}
	let lines: Vec<Line<'static>> = banners
		.iter()
		.map(|banner| banner_line(banner, theme, throbber_state))
		.collect();
	frame.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn busy_banners_carry_a_spinner() {
		let theme = Theme::default();
		let state = ThrobberState::default();
		let line = banner_line(&Banner::Searching, &theme, &state);
		assert_eq!(line.spans.len(), 2);
		assert_eq!(line.spans[1].content, "Searching...");

		let line = banner_line(&Banner::NotFound { word: "xyz".into() }, &theme, &state);
		assert_eq!(line.spans.len(), 1);
		assert_eq!(line.spans[0].style, theme.warning_style());
	}

	#[test]
	fn failures_use_the_danger_style() {
		let theme = Theme::default();
		let banner = Banner::RemoveFailed {
			word: "cat".into(),
			message: "DELETE returned 500".into(),
		};
		assert_eq!(banner_style(&banner, &theme), theme.danger_style());
		assert_eq!(banner_text(&banner), "Could not remove cat from dictionary.");
	}
}
