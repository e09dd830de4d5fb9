use ratatui::style::{Color, Modifier, Style};

/// Name of the theme used when none is configured.
pub const DEFAULT_NAME: &str = "slate";

/// Built-in theme names, default first.
const NAMES: [&str; 2] = [DEFAULT_NAME, "light"];

/// Styles used by the page widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	title: Style,
	border: Style,
	input: Style,
	placeholder: Style,
	hint: Style,
	info: Style,
	warning: Style,
	danger: Style,
	row: Style,
	selected_row: Style,
	action: Style,
}

impl Theme {
	pub fn slate() -> Self {
		Self {
			title: Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
			border: Style::new().fg(Color::DarkGray),
			input: Style::new().fg(Color::White),
			placeholder: Style::new().fg(Color::DarkGray),
			hint: Style::new().fg(Color::DarkGray),
			info: Style::new().fg(Color::Cyan),
			warning: Style::new().fg(Color::Yellow),
			danger: Style::new().fg(Color::LightRed).add_modifier(Modifier::BOLD),
			row: Style::new().fg(Color::Gray),
			selected_row: Style::new()
				.fg(Color::Black)
				.bg(Color::Cyan)
				.add_modifier(Modifier::BOLD),
			action: Style::new().fg(Color::Red),
		}
	}

	pub fn light() -> Self {
		Self {
			title: Style::new().fg(Color::Black).add_modifier(Modifier::BOLD),
			border: Style::new().fg(Color::Gray),
			input: Style::new().fg(Color::Black),
			placeholder: Style::new().fg(Color::Gray),
			hint: Style::new().fg(Color::Gray),
			info: Style::new().fg(Color::Blue),
			warning: Style::new().fg(Color::Magenta),
			danger: Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
			row: Style::new().fg(Color::Black),
			selected_row: Style::new()
				.fg(Color::White)
				.bg(Color::Blue)
				.add_modifier(Modifier::BOLD),
			action: Style::new().fg(Color::Red),
		}
	}

	pub fn title_style(&self) -> Style {
		self.title
	}

	pub fn border_style(&self) -> Style {
		self.border
	}

	pub fn input_style(&self) -> Style {
		self.input
	}

	pub fn placeholder_style(&self) -> Style {
		self.placeholder
	}

	pub fn hint_style(&self) -> Style {
		self.hint
	}

	pub fn info_style(&self) -> Style {
		self.info
	}

	pub fn warning_style(&self) -> Style {
		self.warning
	}

	pub fn danger_style(&self) -> Style {
		self.danger
	}

	pub fn row_style(&self) -> Style {
		self.row
	}

	pub fn selected_row_style(&self) -> Style {
		self.selected_row
	}

	pub fn action_style(&self) -> Style {
		self.action
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::slate()
	}
}

/// Names accepted by [`by_name`].
pub fn names() -> &'static [&'static str] {
	&NAMES
}

/// Look up a built-in theme, ignoring case and surrounding whitespace.
pub fn by_name(name: &str) -> Option<Theme> {
	match name.trim().to_ascii_lowercase().as_str() {
		"slate" | "default" | "dark" => Some(Theme::slate()),
		"light" => Some(Theme::light()),
		_ => None,
	}
}
