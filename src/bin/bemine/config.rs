use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use bemine::app_dirs;
use bemine_flow::default_player;

use crate::cli::CliArgs;

/// Resolved application configuration derived from CLI arguments,
/// environment overrides, and platform defaults.
#[derive(Debug)]
pub(crate) struct Config {
	/// Snapshot file location; `None` keeps the flow in memory.
	pub(crate) snapshot_path: Option<PathBuf>,
	/// Root directory for cue and image assets.
	pub(crate) assets_dir: PathBuf,
	/// External audio player command, when cues are enabled.
	pub(crate) player: Option<String>,
}

impl Config {
	/// Build configuration from CLI arguments with sensible defaults.
	pub(crate) fn from_cli(cli: &CliArgs) -> Result<Self> {
		let snapshot_path = if cli.no_persist {
			None
		} else {
			let data_dir = match &cli.data_dir {
				Some(dir) => dir.clone(),
				None => app_dirs::default_data_dir()?,
			};
			Some(app_dirs::snapshot_path(&data_dir))
		};

		let assets_dir = resolve_assets_dir(cli)?;

		let player = if cli.no_sound {
			None
		} else {
			cli.player
				.clone()
				.or_else(|| default_player().map(str::to_string))
		};

		Ok(Self {
			snapshot_path,
			assets_dir,
			player,
		})
	}
}

/// Resolve the assets root, validating an explicit override exists.
fn resolve_assets_dir(cli: &CliArgs) -> Result<PathBuf> {
	match &cli.assets_dir {
		Some(dir) => {
			let metadata = std::fs::metadata(dir)
				.with_context(|| format!("failed to inspect assets dir {}", dir.display()))?;
			ensure!(metadata.is_dir(), "assets dir must be a directory");
			Ok(dir.clone())
		}
		None => env::current_dir().context("failed to determine working directory"),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::cli::OutputFormat;

	fn args() -> CliArgs {
		CliArgs {
			data_dir: None,
			assets_dir: None,
			player: None,
			no_persist: false,
			no_sound: false,
			reset: false,
			print_config: false,
			output: OutputFormat::Plain,
		}
	}

	#[test]
	fn no_persist_drops_the_snapshot_path() {
		let cli = CliArgs {
			no_persist: true,
			..args()
		};
		let config = Config::from_cli(&cli).expect("config");
		assert_eq!(config.snapshot_path, None);
	}

	#[test]
	fn explicit_data_dir_places_the_snapshot_inside_it() {
		let dir = tempfile::tempdir().expect("tempdir");
		let cli = CliArgs {
			data_dir: Some(dir.path().to_path_buf()),
			..args()
		};
		let config = Config::from_cli(&cli).expect("config");
		assert_eq!(
			config.snapshot_path,
			Some(dir.path().join(app_dirs::SNAPSHOT_FILE))
		);
	}

	#[test]
	fn no_sound_disables_the_player() {
		let cli = CliArgs {
			player: Some("afplay".to_string()),
			no_sound: true,
			..args()
		};
		let config = Config::from_cli(&cli).expect("config");
		assert_eq!(config.player, None);
	}

	#[test]
	fn missing_assets_dir_is_rejected() {
		let cli = CliArgs {
			assets_dir: Some(PathBuf::from("/definitely/not/a/real/dir")),
			..args()
		};
		assert!(Config::from_cli(&cli).is_err());
	}
}
