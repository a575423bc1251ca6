//! Aggregate state for the terminal front end.

use bemine_flow::{DateType, FlowController, FlowState, PlaceOption, Step};

use crate::input::PlacePrompt;
use crate::theme::Theme;

/// The terminal application: the flow controller plus view-local state.
///
/// List cursors and the custom-place prompt are view state; they never
/// touch the persisted [`FlowState`].
pub struct App {
	pub(crate) flow: FlowController,
	pub(crate) theme: Theme,
	/// Cursor on the date-pick list.
	pub(crate) date_cursor: usize,
	/// Cursor on the place-pick list.
	pub(crate) place_cursor: usize,
	/// The custom-place input, present while the prompt is open.
	pub(crate) prompt: Option<PlacePrompt>,
}

impl App {
	/// Wrap a controller with the default theme.
	#[must_use]
	pub fn new(flow: FlowController) -> Self {
		Self {
			flow,
			theme: Theme::default(),
			date_cursor: 0,
			place_cursor: 0,
			prompt: None,
		}
	}

	/// Replace the theme.
	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	/// The current flow state, for rendering and for the exit outcome.
	#[must_use]
	pub fn state(&self) -> &FlowState {
		self.flow.state()
	}

	pub(crate) fn step(&self) -> Step {
		self.flow.step()
	}

	/// The date type under the cursor on the date-pick screen.
	pub(crate) fn hovered_date(&self) -> DateType {
		DateType::ALL[self.date_cursor.min(DateType::ALL.len() - 1)]
	}

	/// The place options offered for the chosen date type.
	pub(crate) fn place_options(&self) -> Vec<PlaceOption> {
		self.flow.place_options()
	}

	pub(crate) fn move_cursor_up(&mut self) {
		let cursor = self.active_cursor_mut();
		if let Some(cursor) = cursor
			&& *cursor > 0
		{
			*cursor -= 1;
		}
	}

	pub(crate) fn move_cursor_down(&mut self) {
		let len = match self.step() {
			Step::DatePick => DateType::ALL.len(),
			Step::PlacePick => self.place_options().len(),
			_ => return,
		};
		if let Some(cursor) = self.active_cursor_mut()
			&& *cursor + 1 < len
		{
			*cursor += 1;
		}
	}

	fn active_cursor_mut(&mut self) -> Option<&mut usize> {
		match self.flow.step() {
			Step::DatePick => Some(&mut self.date_cursor),
			Step::PlacePick => Some(&mut self.place_cursor),
			_ => None,
		}
	}

	/// Forget view-local selections, used after a reset.
	pub(crate) fn clear_cursors(&mut self) {
		self.date_cursor = 0;
		self.place_cursor = 0;
		self.prompt = None;
	}
}
