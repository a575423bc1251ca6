use serde::{Deserialize, Serialize};

use crate::step::Step;

/// Complete state of the greeting flow.
///
/// The serialized form uses the short key names of the original snapshot
/// blob (`step`, `date`, `restaurant`, `custom`), so an existing snapshot
/// keeps loading. Which fields carry meaning is determined by `step`:
/// [`Step::Landing`] has no choices set, [`Step::Celebration`] has every
/// relevant choice set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowState {
	/// The screen currently shown.
	pub step: Step,
	/// Label of the chosen date type, empty until one is picked.
	#[serde(rename = "date")]
	pub date_choice: String,
	/// Chosen place label, the custom marker, or the no-restaurant
	/// sentinel. Empty until picked.
	#[serde(rename = "restaurant")]
	pub restaurant_choice: String,
	/// Free-text place name, only meaningful when the custom marker was
	/// picked.
	#[serde(rename = "custom")]
	pub custom_place: String,
}

impl FlowState {
	/// The place to show on the summary screen: the custom text when the
	/// custom marker was picked, otherwise the recorded choice.
	#[must_use]
	pub fn display_place(&self) -> &str {
		if self.restaurant_choice == crate::catalog::CUSTOM_LABEL {
			&self.custom_place
		} else {
			&self.restaurant_choice
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn snapshot_json_uses_short_keys() {
		let state = FlowState {
			step: Step::PlacePick,
			date_choice: "Hotel n Dinner".to_string(),
			restaurant_choice: String::new(),
			custom_place: String::new(),
		};
		let json = serde_json::to_value(&state).expect("serialize");
		assert_eq!(
			json,
			serde_json::json!({
				"step": 3,
				"date": "Hotel n Dinner",
				"restaurant": "",
				"custom": "",
			})
		);
	}

	#[test]
	fn snapshot_round_trips() {
		let state = FlowState {
			step: Step::Celebration,
			date_choice: "Breakfast n Hotel".to_string(),
			restaurant_choice: "Custom".to_string(),
			custom_place: "The Pier".to_string(),
		};
		let json = serde_json::to_string(&state).expect("serialize");
		let back: FlowState = serde_json::from_str(&json).expect("deserialize");
		assert_eq!(back, state);
	}

	#[test]
	fn invalid_step_index_fails_to_parse() {
		let json = r#"{"step": 9, "date": "", "restaurant": "", "custom": ""}"#;
		assert!(serde_json::from_str::<FlowState>(json).is_err());
	}

	#[test]
	fn display_place_prefers_custom_text() {
		let mut state = FlowState {
			restaurant_choice: "Custom".to_string(),
			custom_place: "The Pier".to_string(),
			..FlowState::default()
		};
		assert_eq!(state.display_place(), "The Pier");

		state.restaurant_choice = "Tsuki".to_string();
		assert_eq!(state.display_place(), "Tsuki");
	}
}
