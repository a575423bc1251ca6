//! Persistence port for the greeting flow.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::state::FlowState;

/// Errors raised by a [`SnapshotStore`] backend.
#[derive(Debug, Error)]
pub enum StoreError {
	/// The backing file could not be read or written.
	#[error("snapshot io failed: {0}")]
	Io(#[from] io::Error),

	/// The stored blob is not a valid snapshot.
	#[error("snapshot is corrupt: {0}")]
	Corrupt(#[from] serde_json::Error),
}

/// Persisted key-value holder for [`FlowState`] across sessions.
///
/// The controller treats every call as best-effort: a failed `save` is
/// logged and swallowed, a failed `load` at startup falls back to the
/// default state.
pub trait SnapshotStore {
	/// Read the stored snapshot, `None` when nothing was saved yet.
	fn load(&self) -> Result<Option<FlowState>, StoreError>;

	/// Overwrite the stored snapshot with `state`.
	fn save(&self, state: &FlowState) -> Result<(), StoreError>;

	/// Erase the stored snapshot. Erasing an absent snapshot succeeds.
	fn clear(&self) -> Result<(), StoreError>;
}

/// Snapshot store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
	path: PathBuf,
}

impl JsonFileStore {
	/// Create a store persisting to `path`. Parent directories are created
	/// lazily on the first save.
	#[must_use]
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	/// The file this store persists to.
	#[must_use]
	pub fn path(&self) -> &std::path::Path {
		&self.path
	}
}

impl SnapshotStore for JsonFileStore {
	fn load(&self) -> Result<Option<FlowState>, StoreError> {
		let raw = match fs::read_to_string(&self.path) {
			Ok(raw) => raw,
			Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
			Err(err) => return Err(err.into()),
		};
		Ok(Some(serde_json::from_str(&raw)?))
	}

	fn save(&self, state: &FlowState) -> Result<(), StoreError> {
		if let Some(parent) = self.path.parent() {
			fs::create_dir_all(parent)?;
		}
		let raw = serde_json::to_string(state)?;
		fs::write(&self.path, raw)?;
		Ok(())
	}

	fn clear(&self) -> Result<(), StoreError> {
		match fs::remove_file(&self.path) {
			Ok(()) => Ok(()),
			Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
			Err(err) => Err(err.into()),
		}
	}
}

/// In-memory snapshot store for tests and `--no-persist` runs.
///
/// Clones share the same slot, so a test can hand one clone to the
/// controller and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
	slot: Arc<Mutex<Option<FlowState>>>,
}

impl MemoryStore {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// The currently stored snapshot, if any.
	#[must_use]
	pub fn snapshot(&self) -> Option<FlowState> {
		self.slot.lock().expect("snapshot slot poisoned").clone()
	}
}

impl SnapshotStore for MemoryStore {
	fn load(&self) -> Result<Option<FlowState>, StoreError> {
		Ok(self.snapshot())
	}

	fn save(&self, state: &FlowState) -> Result<(), StoreError> {
		*self.slot.lock().expect("snapshot slot poisoned") = Some(state.clone());
		Ok(())
	}

	fn clear(&self) -> Result<(), StoreError> {
		*self.slot.lock().expect("snapshot slot poisoned") = None;
		Ok(())
	}
}
