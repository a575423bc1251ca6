//! The flow controller: a guarded state machine over [`Step`].

use tracing::{debug, warn};

use crate::catalog::{CUSTOM_LABEL, DateType, NO_RESTAURANT, PlaceOption, options_for};
use crate::cue::{Cue, CuePlayer};
use crate::state::FlowState;
use crate::step::Step;
use crate::store::SnapshotStore;

/// A selection made on the place-pick screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceChoice {
	/// One of the catalog places, by label.
	Named(String),
	/// The free-text option; the controller answers with an input request.
	Custom,
}

/// Result of feeding a place selection into the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum ChoiceOutcome {
	/// The choice was recorded and the flow advanced.
	Advanced,
	/// The custom option needs free text; call
	/// [`FlowController::submit_custom_place`] once the host has it.
	InputRequested,
	/// The input did not apply at the current step and nothing changed.
	Ignored,
}

/// Drives the five-step greeting flow.
///
/// Transitions are guarded by the current step: a gesture arriving at the
/// wrong screen is a no-op. Every mutation writes the full [`FlowState`]
/// through the injected [`SnapshotStore`] immediately; a failed write is
/// logged and never surfaced.
pub struct FlowController {
	state: FlowState,
	store: Box<dyn SnapshotStore>,
	cues: Box<dyn CuePlayer>,
}

impl FlowController {
	/// Build a controller, resuming from the stored snapshot when one is
	/// present and readable. An unreadable snapshot is logged and treated
	/// as absent.
	pub fn new(store: Box<dyn SnapshotStore>, cues: Box<dyn CuePlayer>) -> Self {
		let state = match store.load() {
			Ok(Some(state)) => {
				debug!(step = %state.step, "resuming from snapshot");
				state
			}
			Ok(None) => FlowState::default(),
			Err(err) => {
				warn!(%err, "ignoring unreadable snapshot");
				FlowState::default()
			}
		};
		Self { state, store, cues }
	}

	/// The current flow state.
	#[must_use]
	pub fn state(&self) -> &FlowState {
		&self.state
	}

	/// The screen currently active.
	#[must_use]
	pub fn step(&self) -> Step {
		self.state.step
	}

	/// The date type chosen on the date-pick screen, once one is recorded.
	#[must_use]
	pub fn date_type(&self) -> Option<DateType> {
		DateType::from_label(&self.state.date_choice)
	}

	/// Place options for the chosen date type, empty before one is chosen.
	#[must_use]
	pub fn place_options(&self) -> Vec<PlaceOption> {
		self.date_type().map(options_for).unwrap_or_default()
	}

	/// Landing → proposal. The opening gesture; no cue.
	pub fn tap_heart(&mut self) {
		if self.state.step != Step::Landing {
			return;
		}
		self.advance_to(Step::Proposal);
	}

	/// Proposal → date pick. The affirmative answer; plays the kiss cue.
	pub fn accept(&mut self) {
		if self.state.step != Step::Proposal {
			return;
		}
		self.cues.play(Cue::Kiss);
		self.advance_to(Step::DatePick);
	}

	/// Date pick → place pick, or straight to the celebration for the
	/// no-restaurant date type.
	pub fn choose_date(&mut self, date: DateType) {
		if self.state.step != Step::DatePick {
			return;
		}
		self.state.date_choice = date.label().to_string();
		if date.skips_restaurant() {
			self.state.restaurant_choice = NO_RESTAURANT.to_string();
			self.cues.play(Cue::Yay);
			self.advance_to(Step::Celebration);
		} else {
			self.advance_to(Step::PlacePick);
		}
	}

	/// Place pick → celebration for a named place; the custom option is
	/// answered with [`ChoiceOutcome::InputRequested`] and changes nothing.
	pub fn choose_place(&mut self, choice: PlaceChoice) -> ChoiceOutcome {
		if self.state.step != Step::PlacePick {
			return ChoiceOutcome::Ignored;
		}
		match choice {
			PlaceChoice::Custom => ChoiceOutcome::InputRequested,
			PlaceChoice::Named(name) => {
				let offered = self
					.place_options()
					.iter()
					.any(|option| option.label() == name);
				if !offered {
					debug!(place = %name, "place not in the offered catalog");
					return ChoiceOutcome::Ignored;
				}
				self.state.restaurant_choice = name;
				self.cues.play(Cue::Yay);
				self.advance_to(Step::Celebration);
				ChoiceOutcome::Advanced
			}
		}
	}

	/// Answer a pending custom-place request. `None`, empty, or
	/// whitespace-only input cancels: no state change, no cue.
	pub fn submit_custom_place(&mut self, input: Option<&str>) -> ChoiceOutcome {
		if self.state.step != Step::PlacePick {
			return ChoiceOutcome::Ignored;
		}
		let Some(text) = input.map(str::trim).filter(|text| !text.is_empty()) else {
			return ChoiceOutcome::Ignored;
		};
		self.state.restaurant_choice = CUSTOM_LABEL.to_string();
		self.state.custom_place = text.to_string();
		self.cues.play(Cue::Yay);
		self.advance_to(Step::Celebration);
		ChoiceOutcome::Advanced
	}

	/// Clear every field back to the landing screen and erase the
	/// persisted snapshot. Accepted from any step.
	pub fn reset(&mut self) {
		debug!(step = %self.state.step, "resetting flow");
		self.state = FlowState::default();
		if let Err(err) = self.store.clear() {
			warn!(%err, "failed to erase snapshot");
		}
	}

	fn advance_to(&mut self, step: Step) {
		debug!(from = %self.state.step, to = %step, "flow transition");
		self.state.step = step;
		self.persist();
	}

	fn persist(&self) {
		if let Err(err) = self.store.save(&self.state) {
			warn!(%err, "failed to persist snapshot");
		}
	}
}
