//! Read-only view of session state for consumers.

use serde::Serialize;
use wallet_provider::{AccountDescriptor, WalletDescriptor};

/// Point-in-time copy of the session state.
///
/// Consumers render from snapshots and invoke operations on the manager;
/// they never mutate state directly. A snapshot taken while a connect
/// attempt is in flight has `connecting` set; a stuck `connecting` flag is
/// a legitimate pending state (a slow or hung extension), not an error.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
	/// Wallets discovered in the host environment.
	pub wallets: Vec<WalletDescriptor>,
	/// The connected wallet, when there is one.
	pub active_wallet: Option<WalletDescriptor>,
	/// Accounts granted by the active wallet; empty when disconnected.
	pub accounts: Vec<AccountDescriptor>,
	/// The account acting as the current identity, when one is selected.
	pub selected_account: Option<AccountDescriptor>,
	/// True only while a connect attempt (manual or automatic) is in flight.
	pub connecting: bool,
}

impl SessionSnapshot {
	/// Returns true when a wallet is connected.
	pub fn is_connected(&self) -> bool {
		self.active_wallet.is_some()
	}
}
