use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};

use crate::ui::input::SearchInput;
use crate::ui::theme::Theme;

/// Hint shown in the bottom border of the input.
pub const SEARCH_HINT: &str = " Enter: search ";

/// Argument bundle for rendering the input box.
pub struct PromptContext<'a> {
	pub input: &'a mut SearchInput,
	pub placeholder: &'a str,
	/// Draw a refresh spinner inside the border while rows are being refetched.
	pub refreshing: Option<Span<'static>>,
	pub theme: &'a Theme,
}

/// Render the bordered search box with its hint and optional spinner.
pub fn render_prompt(frame: &mut Frame, area: Rect, ctx: PromptContext<'_>) {
	let PromptContext {
		input,
		placeholder,
		refreshing,
		theme,
	} = ctx;

	let mut block = Block::default()
		.borders(Borders::ALL)
		.border_style(theme.border_style())
		.title_bottom(Line::styled(SEARCH_HINT, theme.hint_style()).right_aligned());
	if let Some(spinner) = refreshing {
		block = block.title_top(Line::from(spinner).right_aligned());
	}

	let inner = block.inner(area);
	frame.render_widget(block, area);

	input.style(placeholder, theme.placeholder_style(), theme.input_style());
	frame.render_widget(input.textarea(), inner);
}
