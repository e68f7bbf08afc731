//! Session state machine for wallet connect/select/disconnect flows.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::broadcast;
use tracing::{debug, warn};
use wallet_provider::{AccountDescriptor, ExtensionHost, WalletDescriptor};

use crate::error::{Result, SessionError};
use crate::events::SessionEvent;
use crate::snapshot::SessionSnapshot;
use crate::store::{ConnectionStore, StoredConnection};

mod restore;

/// Event buffer per subscriber; a lagging receiver drops oldest events.
const EVENT_CHANNEL_CAPACITY: usize = 16;

/// In-memory session state. Owned exclusively by [`SessionManager`];
/// consumers only ever see cloned [`SessionSnapshot`]s.
#[derive(Default)]
struct SessionState {
	wallets: Vec<WalletDescriptor>,
	active_wallet: Option<WalletDescriptor>,
	accounts: Vec<AccountDescriptor>,
	selected_account: Option<AccountDescriptor>,
	connecting: bool,
	restore_attempted: bool,
}

impl SessionState {
	fn clear_session(&mut self) {
		self.active_wallet = None;
		self.accounts.clear();
		self.selected_account = None;
	}
}

/// Owner of all mutable session state and the operations that drive it.
///
/// Construct one instance at application start and pass it by reference to
/// every consumer; there is deliberately no ambient global. Operations take
/// `&self` and guard state with a lock whose scopes never span a suspension
/// point, so a snapshot taken while a connect attempt is awaiting the
/// extension still observes `connecting = true`. A hung extension call is
/// a visible pending state, not a deadlock.
///
/// The state machine assumes the cooperative single-threaded model of its
/// origin: state-mutating operations are not expected to run concurrently
/// against one manager, and concurrent connect calls are not coalesced;
/// callers are responsible for not re-entering while `connecting` is set.
pub struct SessionManager {
	host: Arc<dyn ExtensionHost>,
	store: Box<dyn ConnectionStore>,
	state: Mutex<SessionState>,
	events: broadcast::Sender<SessionEvent>,
}

impl SessionManager {
	/// Creates a disconnected manager over the given host and store.
	pub fn new(host: Arc<dyn ExtensionHost>, store: Box<dyn ConnectionStore>) -> Self {
		let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
		Self {
			host,
			store,
			state: Mutex::new(SessionState::default()),
			events,
		}
	}

	/// Returns the discovered wallets.
	pub fn wallets(&self) -> Vec<WalletDescriptor> {
		self.state.lock().wallets.clone()
	}

	/// Returns the connected wallet, when there is one.
	pub fn active_wallet(&self) -> Option<WalletDescriptor> {
		self.state.lock().active_wallet.clone()
	}

	/// Returns the accounts granted by the active wallet.
	pub fn accounts(&self) -> Vec<AccountDescriptor> {
		self.state.lock().accounts.clone()
	}

	/// Returns the account acting as the current identity.
	pub fn selected_account(&self) -> Option<AccountDescriptor> {
		self.state.lock().selected_account.clone()
	}

	/// Returns true while a connect attempt (manual or automatic) is in flight.
	pub fn connecting(&self) -> bool {
		self.state.lock().connecting
	}

	/// Returns a point-in-time copy of the session state.
	pub fn snapshot(&self) -> SessionSnapshot {
		let state = self.state.lock();
		SessionSnapshot {
			wallets: state.wallets.clone(),
			active_wallet: state.active_wallet.clone(),
			accounts: state.accounts.clone(),
			selected_account: state.selected_account.clone(),
			connecting: state.connecting,
		}
	}

	/// Subscribes to session events.
	pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
		self.events.subscribe()
	}

	/// Asks consumers to show the connect surface. Fire-and-forget.
	pub fn request_connect(&self) {
		self.emit(SessionEvent::ConnectRequested);
	}

	/// Connects to `wallet` and selects its first account.
	///
	/// On success the connection is persisted so it can be silently restored
	/// on the next start. On failure (rejection, host fault, or a wallet
	/// that grants zero accounts) the session is left exactly as it was
	/// before the call and nothing is persisted.
	pub async fn connect_wallet(&self, wallet: &WalletDescriptor) -> Result<()> {
		self.state.lock().connecting = true;
		let outcome = self.host.load_wallet(&wallet.name).await;

		let connection = match outcome {
			Ok(connection) => connection,
			Err(source) => {
				self.state.lock().connecting = false;
				debug!(
					target: "wallet.session",
					wallet = %wallet.name,
					error = %source,
					"wallet account request failed"
				);
				return Err(SessionError::Connection {
					wallet: wallet.name.clone(),
					source,
				});
			}
		};

		let Some(first) = connection.accounts.first().cloned() else {
			self.state.lock().connecting = false;
			return Err(SessionError::NoAccounts {
				wallet: wallet.name.clone(),
			});
		};

		{
			let mut state = self.state.lock();
			state.connecting = false;
			state.active_wallet = Some(wallet.clone());
			state.accounts = connection.accounts;
			state.selected_account = Some(first.clone());
		}
		self.persist(StoredConnection {
			wallet_name: wallet.name.clone(),
			account_address: Some(first.address.clone()),
		});
		debug!(target: "wallet.session", wallet = %wallet.name, "wallet connected");
		self.emit(SessionEvent::Connected {
			wallet: wallet.clone(),
			account: first,
		});
		Ok(())
	}

	/// Makes `account` the current identity and persists the choice.
	///
	/// The account must be one the active wallet handed out: membership is
	/// resolved by address against the live account list and a mismatch
	/// fails fast with [`SessionError::UnknownAccount`]. No network
	/// interaction.
	pub fn select_account(&self, account: &AccountDescriptor) -> Result<()> {
		let (wallet_name, resolved) = {
			let mut state = self.state.lock();
			let Some(wallet_name) = state.active_wallet.as_ref().map(|w| w.name.clone()) else {
				return Err(SessionError::UnknownAccount {
					address: account.address.clone(),
				});
			};
			let resolved = state
				.accounts
				.iter()
				.find(|a| a.address == account.address)
				.cloned()
				.ok_or_else(|| SessionError::UnknownAccount {
					address: account.address.clone(),
				})?;
			state.selected_account = Some(resolved.clone());
			(wallet_name, resolved)
		};

		self.persist(StoredConnection {
			wallet_name,
			account_address: Some(resolved.address.clone()),
		});
		self.emit(SessionEvent::AccountSelected { account: resolved });
		Ok(())
	}

	/// Clears the session and deletes the persisted connection. Idempotent.
	pub fn disconnect_wallet(&self) {
		self.state.lock().clear_session();
		self.clear_stored();
		self.emit(SessionEvent::Disconnected);
	}

	/// Persists `record`, demoting failures to a log line.
	///
	/// A session that connected but could not be written is still a valid
	/// session; it just will not survive a restart.
	fn persist(&self, record: StoredConnection) {
		if let Err(err) = self.store.store(&record) {
			warn!(
				target: "wallet.store",
				wallet = %record.wallet_name,
				error = %err,
				"failed to persist connection"
			);
		}
	}

	/// Deletes the persisted connection, demoting failures to a log line.
	fn clear_stored(&self) {
		if let Err(err) = self.store.clear() {
			warn!(
				target: "wallet.store",
				error = %err,
				"failed to delete stored connection"
			);
		}
	}

	fn emit(&self, event: SessionEvent) {
		// No receivers is fine; events are fire-and-forget.
		let _ = self.events.send(event);
	}
}
