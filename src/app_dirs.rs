//! Resolve the data directory used to persist the greeting snapshot.
//!
//! CLI flags and the `BEMINE_DATA_DIR` environment variable (handled by
//! clap) take precedence; this module only supplies the platform default.

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};

const APPLICATION: &str = "bemine";

/// File name of the persisted snapshot inside the data directory.
pub const SNAPSHOT_FILE: &str = "valentines_state.json";

/// Return the default data directory for the saved snapshot.
pub fn default_data_dir() -> Result<PathBuf> {
	let base = dirs::data_dir().ok_or_else(|| anyhow!("unable to determine data directory"))?;
	Ok(base.join(APPLICATION))
}

/// The snapshot path inside `data_dir`.
#[must_use]
pub fn snapshot_path(data_dir: &Path) -> PathBuf {
	data_dir.join(SNAPSHOT_FILE)
}
