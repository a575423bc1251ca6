use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders};
use tui_textarea::TextArea;

/// One-line text input for the custom-place prompt.
///
/// Thin wrapper around [`TextArea`] that keeps the prompt single-line and
/// exposes just the trimmed text. Enter and Esc are handled by the caller
/// before keys reach [`PlacePrompt::input`].
pub struct PlacePrompt {
	textarea: TextArea<'static>,
}

impl PlacePrompt {
	#[must_use]
	pub fn new() -> Self {
		let mut textarea = TextArea::default();
		textarea.set_placeholder_text("Name your preferred place");
		textarea.set_block(
			Block::default()
				.borders(Borders::ALL)
				.title("Custom place (Enter to confirm, Esc to cancel)"),
		);
		Self { textarea }
	}

	/// Feed a key press into the input. Returns `true` when the text
	/// changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		self.textarea.input(key)
	}

	/// The current prompt text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

impl Default for PlacePrompt {
	fn default() -> Self {
		Self::new()
	}
}
