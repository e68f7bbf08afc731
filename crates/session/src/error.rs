//! Session error taxonomy.

use thiserror::Error;
use wallet_provider::ProviderError;

/// Result alias for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors returned by user-initiated session operations.
///
/// Only manual operations propagate errors; the auto-reconnect sequencer
/// suppresses all of its failures (logged, never surfaced). Discovery
/// failures never reach this type at all; host adapters normalize them to
/// an empty wallet list.
#[derive(Debug, Error)]
pub enum SessionError {
	/// The wallet answered the account request but exposed no accounts.
	///
	/// Zero accounts is a connection failure, never a valid connected state.
	#[error("no accounts found in wallet {wallet}")]
	NoAccounts {
		/// Wallet extension key.
		wallet: String,
	},

	/// The wallet extension rejected or failed the account request.
	#[error("failed to connect wallet {wallet}")]
	Connection {
		/// Wallet extension key.
		wallet: String,
		/// Underlying provider failure.
		#[source]
		source: ProviderError,
	},

	/// The account is not part of the active wallet's account list.
	///
	/// Selecting an account that was never handed out by the active wallet
	/// is a caller bug; it fails fast instead of desynchronizing the
	/// selection from the account list and the persisted record.
	#[error("account {address} is not exposed by the active wallet")]
	UnknownAccount {
		/// Address that failed membership resolution.
		address: String,
	},
}
