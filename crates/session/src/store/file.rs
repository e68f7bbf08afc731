//! JSON file-backed connection store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{ConnectionStore, StoreError, StoredConnection};

/// [`ConnectionStore`] persisting the record as one pretty-printed JSON file.
///
/// A missing file means "no prior session". An unreadable file is treated as
/// stale: it is deleted on read and reported as absent, so a corrupt record
/// can never wedge startup.
#[derive(Debug)]
pub struct FileStore {
	path: PathBuf,
}

impl FileStore {
	/// Creates a store backed by `path`. Parent directories are created on
	/// first save.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	/// Returns the backing file path.
	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl ConnectionStore for FileStore {
	fn load(&self) -> Result<Option<StoredConnection>, StoreError> {
		let content = match fs::read_to_string(&self.path) {
			Ok(content) => content,
			Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
			Err(err) => return Err(err.into()),
		};

		match serde_json::from_str(&content) {
			Ok(record) => Ok(Some(record)),
			Err(err) => {
				debug!(
					target: "wallet.store",
					path = %self.path.display(),
					error = %err,
					"removing unreadable connection record"
				);
				let _ = fs::remove_file(&self.path);
				Ok(None)
			}
		}
	}

	fn store(&self, record: &StoredConnection) -> Result<(), StoreError> {
		if let Some(parent) = self.path.parent() {
			fs::create_dir_all(parent)?;
		}
		fs::write(&self.path, serde_json::to_string_pretty(record)?)?;
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
