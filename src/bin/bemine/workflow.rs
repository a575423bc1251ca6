use anyhow::Result;
use bemine_flow::{
	CommandCuePlayer, CuePlayer, FlowController, FlowState, JsonFileStore, MemoryStore,
	NullCuePlayer, SnapshotStore,
};
use bemine_tui::App;
use tracing::debug;

use crate::config::Config;

/// Coordinates building and running the interactive greeting.
pub(crate) struct GreetingWorkflow {
	app: App,
}

impl GreetingWorkflow {
	/// Wire up the store, cue player, and controller from configuration.
	pub(crate) fn from_config(config: Config) -> Self {
		let store: Box<dyn SnapshotStore> = match &config.snapshot_path {
			Some(path) => Box::new(JsonFileStore::new(path.clone())),
			None => Box::new(MemoryStore::new()),
		};

		let cues: Box<dyn CuePlayer> = match &config.player {
			Some(program) => Box::new(CommandCuePlayer::new(program, &config.assets_dir)),
			None => {
				debug!("no audio player configured, cues disabled");
				Box::new(NullCuePlayer)
			}
		};

		let flow = FlowController::new(store, cues);
		Self {
			app: App::new(flow),
		}
	}

	/// Run the interactive UI and return the final flow state.
	pub(crate) fn run(self) -> Result<FlowState> {
		bemine_tui::run(self.app)
	}
}
