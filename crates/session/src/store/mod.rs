//! Persistence contract for the last successful wallet connection.
//!
//! The durable state of the whole subsystem is one record: which wallet was
//! connected and, optionally, which of its accounts was selected. The
//! [`ConnectionStore`] trait keeps the core independent of any concrete
//! storage host; [`FileStore`] persists to a JSON file and [`MemoryStore`]
//! backs tests and non-persistent embedders.

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// The single durable record describing the last successful connection.
///
/// Created on first successful connect, overwritten on every re-selection,
/// deleted on disconnect or failed restoration. At most one exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredConnection {
	/// Stable key of the wallet extension that was connected.
	pub wallet_name: String,
	/// Address of the account that was selected, when one was.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub account_address: Option<String>,
}

/// Errors surfaced by [`ConnectionStore`] implementations.
#[derive(Debug, Error)]
pub enum StoreError {
	/// Storage I/O failed.
	#[error(transparent)]
	Io(#[from] std::io::Error),
	/// The record could not be serialized.
	#[error(transparent)]
	Serialize(#[from] serde_json::Error),
}

/// Durable slot holding at most one [`StoredConnection`].
///
/// Every write fully overwrites the prior record (no merge); the last
/// writer wins. Safe under the manager's single-threaded mutation model;
/// multiple concurrent sessions over one slot would need lock discipline.
pub trait ConnectionStore: Send + Sync {
	/// Reads the record. Absent storage is `Ok(None)`, not an error.
	fn load(&self) -> Result<Option<StoredConnection>, StoreError>;

	/// Overwrites the record.
	fn store(&self, record: &StoredConnection) -> Result<(), StoreError>;

	/// Deletes the record. Deleting an absent record succeeds.
	fn clear(&self) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn record_serializes_camel_case() {
		let record = StoredConnection {
			wallet_name: "subwallet-js".into(),
			account_address: Some("addr1".into()),
		};

		let json = serde_json::to_string(&record).unwrap();
		assert!(json.contains("\"walletName\":\"subwallet-js\""));
		assert!(json.contains("\"accountAddress\":\"addr1\""));
	}

	#[test]
	fn record_omits_missing_account_address() {
		let record = StoredConnection {
			wallet_name: "talisman".into(),
			account_address: None,
		};

		let json = serde_json::to_string(&record).unwrap();
		assert!(!json.contains("accountAddress"));

		let back: StoredConnection = serde_json::from_str(&json).unwrap();
		assert_eq!(back, record);
	}

	#[test]
	fn record_requires_wallet_name() {
		let result: std::result::Result<StoredConnection, _> = serde_json::from_str("{\"accountAddress\":\"addr1\"}");
		assert!(result.is_err());
	}
}
