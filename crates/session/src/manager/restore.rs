//! Startup discovery and silent session restoration.

use tracing::{debug, warn};

use crate::events::SessionEvent;
use crate::store::StoredConnection;

use super::SessionManager;

impl SessionManager {
	/// Discovers wallets, then silently restores the last session.
	///
	/// Discovery is applied to the wallet list before restoration is even
	/// considered; restoration therefore never resolves a stored wallet name
	/// against an unpopulated list (which would wrongly delete a valid
	/// record). Restoration runs at most once per manager lifetime, the
	/// first time the list comes up non-empty.
	///
	/// Infallible: the user never asked for the restore attempt, so every
	/// failure degrades to the disconnected default state with a diagnostic
	/// log instead of an error.
	pub async fn initialize(&self) {
		let wallets = self.host.list_wallets().await;
		debug!(target: "wallet.session", count = wallets.len(), "wallet discovery complete");

		let (count, should_restore) = {
			let mut state = self.state.lock();
			state.wallets = wallets;
			let should_restore = !state.wallets.is_empty() && !state.restore_attempted;
			if should_restore {
				state.restore_attempted = true;
			}
			(state.wallets.len(), should_restore)
		};
		self.emit(SessionEvent::WalletsDiscovered { count });

		if should_restore {
			self.try_restore().await;
		}
	}

	async fn try_restore(&self) {
		let stored = match self.store.load() {
			Ok(Some(stored)) => stored,
			Ok(None) => return,
			Err(err) => {
				debug!(
					target: "wallet.restore",
					error = %err,
					"stored connection unreadable; skipping restore"
				);
				return;
			}
		};

		let resolved = self
			.state
			.lock()
			.wallets
			.iter()
			.find(|w| w.name == stored.wallet_name)
			.cloned();
		let Some(wallet) = resolved else {
			debug!(
				target: "wallet.restore",
				wallet = %stored.wallet_name,
				"stored wallet no longer installed; clearing record"
			);
			self.clear_stored();
			return;
		};

		self.state.lock().connecting = true;
		let outcome = self.host.load_wallet(&wallet.name).await;

		let accounts = match outcome {
			Ok(connection) if !connection.accounts.is_empty() => connection.accounts,
			Ok(_) => {
				self.state.lock().connecting = false;
				debug!(
					target: "wallet.restore",
					wallet = %wallet.name,
					"wallet granted no accounts; clearing record"
				);
				self.clear_stored();
				return;
			}
			Err(err) => {
				self.state.lock().connecting = false;
				warn!(
					target: "wallet.restore",
					wallet = %wallet.name,
					error = %err,
					"silent reconnect failed; clearing record"
				);
				self.clear_stored();
				return;
			}
		};

		// Prefer the stored address; a stale one falls back to the wallet's
		// first account, and the record is rewritten either way so storage
		// matches what was actually selected.
		let selected = match stored
			.account_address
			.as_deref()
			.and_then(|address| accounts.iter().find(|a| a.address == address))
		{
			Some(account) => account.clone(),
			None => accounts[0].clone(),
		};

		{
			let mut state = self.state.lock();
			state.connecting = false;
			state.active_wallet = Some(wallet.clone());
			state.accounts = accounts;
			state.selected_account = Some(selected.clone());
		}
		self.persist(StoredConnection {
			wallet_name: wallet.name.clone(),
			account_address: Some(selected.address.clone()),
		});
		debug!(
			target: "wallet.restore",
			wallet = %wallet.name,
			account = %selected.address,
			"session restored"
		);
		self.emit(SessionEvent::Connected {
			wallet,
			account: selected,
		});
	}
}
