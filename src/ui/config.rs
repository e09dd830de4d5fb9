use std::fmt;
use std::str::FromStr;

/// Narrowest page the layout will try to honour.
pub const MIN_WIDTH: u16 = 24;

pub const DEFAULT_TITLE: &str = "Dictionary search and management";
pub const DEFAULT_PLACEHOLDER: &str = "Enter word to search";
pub const DEFAULT_WIDTH: u16 = 64;

/// How the page is placed inside the terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageLayout {
	/// A fixed-width column in the middle of the screen.
	#[default]
	Centered,
	/// Use the full terminal width.
	Wide,
}

impl PageLayout {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Centered => "centered",
			Self::Wide => "wide",
		}
	}
}

impl fmt::Display for PageLayout {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for PageLayout {
	type Err = String;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"centered" | "centred" | "center" => Ok(Self::Centered),
			"wide" | "full" => Ok(Self::Wide),
			other => Err(format!("unknown layout `{other}` (expected centered or wide)")),
		}
	}
}

/// Labels and layout of the search page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
	pub title: String,
	pub placeholder: String,
	pub layout: PageLayout,
	/// Column width used by [`PageLayout::Centered`].
	pub width: u16,
}

impl Default for UiConfig {
	fn default() -> Self {
		Self {
			title: DEFAULT_TITLE.to_string(),
			placeholder: DEFAULT_PLACEHOLDER.to_string(),
			layout: PageLayout::default(),
			width: DEFAULT_WIDTH,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn layout_parses_aliases() {
		assert_eq!("Centred".parse::<PageLayout>(), Ok(PageLayout::Centered));
		assert_eq!(" wide ".parse::<PageLayout>(), Ok(PageLayout::Wide));
		assert!("sideways".parse::<PageLayout>().is_err());
	}
}
