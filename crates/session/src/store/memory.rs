//! In-memory connection store.

use std::sync::Arc;

use parking_lot::Mutex;

use super::{ConnectionStore, StoreError, StoredConnection};

/// [`ConnectionStore`] over a shared in-memory slot.
///
/// Clones share the slot, so a test can hand one clone to the manager and
/// keep another to inspect what was persisted. Also suits embedders that
/// want session semantics without durability.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
	slot: Arc<Mutex<Option<StoredConnection>>>,
}

impl MemoryStore {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns a copy of the current record, if any.
	pub fn get(&self) -> Option<StoredConnection> {
		self.slot.lock().clone()
	}
}

impl ConnectionStore for MemoryStore {
	fn load(&self) -> Result<Option<StoredConnection>, StoreError> {
		Ok(self.slot.lock().clone())
	}

	fn store(&self, record: &StoredConnection) -> Result<(), StoreError> {
		*self.slot.lock() = Some(record.clone());
		Ok(())
	}

	fn clear(&self) -> Result<(), StoreError> {
		*self.slot.lock() = None;
		Ok(())
	}
}
