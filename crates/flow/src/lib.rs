//! Core flow logic for the `bemine` greeting.
//!
//! This crate owns the five-step state machine that drives the valentine
//! flow, together with the ports it talks to: a [`SnapshotStore`] that
//! persists the current [`FlowState`] across sessions and a [`CuePlayer`]
//! that fires best-effort audio cues. The terminal front end lives in
//! `bemine-tui`; nothing in here touches a terminal.

mod assets;
mod catalog;
mod controller;
mod cue;
mod state;
mod step;
mod store;

pub use assets::asset_file_name;
pub use catalog::{
	BREAKFAST_PLACES, CUSTOM_LABEL, DINNER_PLACES, DateType, NO_RESTAURANT, PlaceOption,
	options_for,
};
pub use controller::{ChoiceOutcome, FlowController, PlaceChoice};
pub use cue::{CommandCuePlayer, Cue, CuePlayer, NullCuePlayer, default_player};
pub use state::FlowState;
pub use step::Step;
pub use store::{JsonFileStore, MemoryStore, SnapshotStore, StoreError};
