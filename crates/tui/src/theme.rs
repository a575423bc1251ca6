use ratatui::style::{Color, Modifier, Style};

/// Styles applied across the greeting screens.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
	/// The heart and other accents.
	pub accent: Style,
	/// Screen headlines.
	pub title: Style,
	/// Selectable buttons and list rows.
	pub option: Style,
	/// The currently highlighted row.
	pub highlight: Style,
	/// Key hints at the bottom of each screen.
	pub hint: Style,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			accent: Style::new().fg(Color::LightRed),
			title: Style::new()
				.fg(Color::LightMagenta)
				.add_modifier(Modifier::BOLD),
			option: Style::new().fg(Color::Magenta),
			highlight: Style::new()
				.fg(Color::White)
				.bg(Color::Magenta)
				.add_modifier(Modifier::BOLD),
			hint: Style::new().fg(Color::DarkGray),
		}
	}
}
