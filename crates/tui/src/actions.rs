use bemine_flow::{ChoiceOutcome, FlowState, PlaceChoice, PlaceOption, Step};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::input::PlacePrompt;

impl App {
	/// Process a key press. Returns the final state once the user exits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<FlowState> {
		if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
			return Some(self.state().clone());
		}

		if self.prompt.is_some() {
			self.handle_prompt_key(key);
			return None;
		}

		match key.code {
			KeyCode::Char('q') | KeyCode::Esc => {
				return Some(self.state().clone());
			}
			KeyCode::Up | KeyCode::Char('k') => self.move_cursor_up(),
			KeyCode::Down | KeyCode::Char('j') => self.move_cursor_down(),
			_ => self.handle_screen_key(key),
		}
		None
	}

	fn handle_screen_key(&mut self, key: KeyEvent) {
		match self.step() {
			Step::Landing => {
				if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
					self.flow.tap_heart();
				}
			}
			Step::Proposal => {
				if matches!(key.code, KeyCode::Enter | KeyCode::Char('y')) {
					self.flow.accept();
				}
			}
			Step::DatePick => {
				if key.code == KeyCode::Enter {
					self.flow.choose_date(self.hovered_date());
					self.place_cursor = 0;
				}
			}
			Step::PlacePick => {
				if key.code == KeyCode::Enter {
					self.choose_hovered_place();
				}
			}
			Step::Celebration => {
				if key.code == KeyCode::Char('r') {
					self.flow.reset();
					self.clear_cursors();
				}
			}
		}
	}

	fn choose_hovered_place(&mut self) {
		let options = self.place_options();
		let Some(option) = options.get(self.place_cursor).copied() else {
			return;
		};
		let choice = match option {
			PlaceOption::Named(name) => PlaceChoice::Named(name.to_string()),
			PlaceOption::Custom => PlaceChoice::Custom,
		};
		if self.flow.choose_place(choice) == ChoiceOutcome::InputRequested {
			self.prompt = Some(PlacePrompt::new());
		}
	}

	fn handle_prompt_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Esc => {
				// Cancelled prompts never touch the flow state.
				let _ = self.flow.submit_custom_place(None);
				self.prompt = None;
			}
			KeyCode::Enter => {
				let text = self
					.prompt
					.as_ref()
					.map(|prompt| prompt.text().to_string())
					.unwrap_or_default();
				let _ = self.flow.submit_custom_place(Some(&text));
				self.prompt = None;
			}
			_ => {
				if let Some(prompt) = self.prompt.as_mut() {
					prompt.input(key);
				}
			}
		}
	}
}
