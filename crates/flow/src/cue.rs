//! Audio cue port.
//!
//! Cues are strictly fire-and-forget: playback failure is logged and
//! swallowed, and the flow never waits on a player.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::{debug, warn};

/// The notification cues the flow can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
	/// Played when the proposal is accepted.
	Kiss,
	/// Played when a date type or place lands.
	Yay,
}

impl Cue {
	/// Asset file name for this cue.
	#[must_use]
	pub fn file_name(self) -> &'static str {
		match self {
			Cue::Kiss => "kiss.mp3",
			Cue::Yay => "yay.mp3",
		}
	}
}

/// Best-effort player for notification cues.
pub trait CuePlayer {
	/// Attempt to play `cue`. Implementations must not block the flow and
	/// must swallow failures.
	fn play(&self, cue: Cue);
}

/// Cue player that ignores every cue. Used by tests and `--no-sound`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCuePlayer;

impl CuePlayer for NullCuePlayer {
	fn play(&self, _cue: Cue) {}
}

/// Cue player that hands the asset file to an external player command.
///
/// The child process is spawned with nulled stdio and never awaited; a
/// spawn failure is logged at WARN and otherwise ignored.
#[derive(Debug, Clone)]
pub struct CommandCuePlayer {
	program: String,
	assets_dir: PathBuf,
}

impl CommandCuePlayer {
	#[must_use]
	pub fn new(program: impl Into<String>, assets_dir: impl Into<PathBuf>) -> Self {
		Self {
			program: program.into(),
			assets_dir: assets_dir.into(),
		}
	}
}

impl CuePlayer for CommandCuePlayer {
	fn play(&self, cue: Cue) {
		let asset = self.assets_dir.join(cue.file_name());
		debug!(cue = ?cue, asset = %asset.display(), "playing cue");
		let spawned = Command::new(&self.program)
			.arg(&asset)
			.stdin(Stdio::null())
			.stdout(Stdio::null())
			.stderr(Stdio::null())
			.spawn();
		if let Err(err) = spawned {
			warn!(
				program = %self.program,
				asset = %asset.display(),
				%err,
				"cue playback failed"
			);
		}
	}
}

/// The platform's conventional command-line audio player, if one exists.
#[must_use]
pub fn default_player() -> Option<&'static str> {
	if cfg!(target_os = "macos") {
		Some("afplay")
	} else {
		None
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cue_file_names_match_assets() {
		assert_eq!(Cue::Kiss.file_name(), "kiss.mp3");
		assert_eq!(Cue::Yay.file_name(), "yay.mp3");
	}

	#[test]
	fn missing_player_is_swallowed() {
		let player = CommandCuePlayer::new("bemine-test-no-such-player", "/nonexistent");
		player.play(Cue::Yay);
		player.play(Cue::Kiss);
	}
}
