use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of the screen the flow is currently showing.
///
/// Steps serialize as their integer index so snapshots written by earlier
/// versions of the greeting keep parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Step {
	/// The heart waiting to be tapped.
	Landing,
	/// The question itself.
	Proposal,
	/// Picking one of the four date types.
	DatePick,
	/// Picking a place from the filtered catalog.
	PlacePick,
	/// The final summary screen.
	Celebration,
}

impl Step {
	/// All steps in flow order.
	pub const ALL: [Step; 5] = [
		Step::Landing,
		Step::Proposal,
		Step::DatePick,
		Step::PlacePick,
		Step::Celebration,
	];

	/// Return the integer index used in snapshots.
	#[must_use]
	pub fn index(self) -> u8 {
		self as u8
	}
}

impl Default for Step {
	fn default() -> Self {
		Step::Landing
	}
}

impl From<Step> for u8 {
	fn from(step: Step) -> Self {
		step.index()
	}
}

impl TryFrom<u8> for Step {
	type Error = String;

	fn try_from(value: u8) -> Result<Self, Self::Error> {
		match value {
			0 => Ok(Step::Landing),
			1 => Ok(Step::Proposal),
			2 => Ok(Step::DatePick),
			3 => Ok(Step::PlacePick),
			4 => Ok(Step::Celebration),
			other => Err(format!("step index {other} is out of range 0..=4")),
		}
	}
}

impl fmt::Display for Step {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Step::Landing => "landing",
			Step::Proposal => "proposal",
			Step::DatePick => "date-pick",
			Step::PlacePick => "place-pick",
			Step::Celebration => "celebration",
		};
		write!(f, "{name}")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn indices_round_trip() {
		for step in Step::ALL {
			assert_eq!(Step::try_from(step.index()), Ok(step));
		}
	}

	#[test]
	fn out_of_range_index_is_rejected() {
		assert!(Step::try_from(5).is_err());
	}
}
