use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Cell, HighlightSpacing, Row, Table, TableState};

use crate::ui::theme::Theme;

const HIGHLIGHT_SYMBOL: &str = "▶ ";
const TABLE_COLUMN_SPACING: u16 = 1;
/// Label of the per-row delete control.
pub const DELETE_LABEL: &str = "[Delete]";
const DELETE_COLUMN_WIDTH: u16 = 8;

/// Render the word table, one delete control per row.
pub fn render_results(
	frame: &mut Frame,
	area: Rect,
	words: &[String],
	table_state: &mut TableState,
	theme: &Theme,
) {
	if area.height == 0 || words.is_empty() {
		return;
	}

	let rows = words.iter().map(|word| {
		Row::new([
			Cell::from(word.as_str()),
			Cell::from(DELETE_LABEL).style(theme.action_style()),
		])
		.style(theme.row_style())
	});

	let widths = [Constraint::Fill(1), Constraint::Length(DELETE_COLUMN_WIDTH)];
	let table = Table::new(rows, widths)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::Always)
		.row_highlight_style(theme.selected_row_style())
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, area, table_state);
}
