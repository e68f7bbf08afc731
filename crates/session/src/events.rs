//! Typed session event stream.

use wallet_provider::{AccountDescriptor, WalletDescriptor};

/// Events broadcast by the session manager as its state changes.
///
/// Delivered over a `tokio::sync::broadcast` channel obtained from
/// [`SessionManager::subscribe`](crate::SessionManager::subscribe). Events
/// are fire-and-forget: emission never blocks and a send with no live
/// receivers is silently dropped.
#[derive(Debug, Clone)]
pub enum SessionEvent {
	/// Wallet discovery finished and the list was applied.
	WalletsDiscovered {
		/// Number of wallets found.
		count: usize,
	},
	/// A wallet connection succeeded, manually or via silent restoration.
	Connected {
		/// The now-active wallet.
		wallet: WalletDescriptor,
		/// The account selected as part of the connect.
		account: AccountDescriptor,
	},
	/// The selected account changed within the active wallet.
	AccountSelected {
		/// The newly selected account.
		account: AccountDescriptor,
	},
	/// The session was cleared.
	Disconnected,
	/// A consumer asked for the connect surface to be shown.
	///
	/// Carries no payload; whichever consumer renders the connect surface
	/// reacts, everyone else ignores it.
	ConnectRequested,
}
