//! Scriptable extension host for exercising session logic without a browser.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::descriptor::{AccountDescriptor, WalletConnection, WalletDescriptor};
use crate::host::{ExtensionHost, ProviderError};

/// In-memory [`ExtensionHost`] with scripted wallets, accounts, and faults.
///
/// Wallets are registered with [`with_wallet`](Self::with_wallet); a wallet
/// can be made to reject account requests with
/// [`with_rejection`](Self::with_rejection), and discovery itself can be made
/// to fail with [`with_discovery_failure`](Self::with_discovery_failure).
/// Every account request is recorded and retrievable via
/// [`load_calls`](Self::load_calls).
#[derive(Default)]
pub struct FakeHost {
	state: Mutex<FakeHostState>,
}

#[derive(Default)]
struct FakeHostState {
	wallets: Vec<WalletDescriptor>,
	accounts: HashMap<String, Vec<AccountDescriptor>>,
	rejections: HashMap<String, String>,
	discovery_fails: bool,
	load_calls: Vec<String>,
}

impl FakeHost {
	/// Creates an empty host: no wallets installed, nothing fails.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a wallet and the accounts it will grant.
	pub fn with_wallet(self, wallet: WalletDescriptor, accounts: Vec<AccountDescriptor>) -> Self {
		{
			let mut state = self.state.lock();
			state.accounts.insert(wallet.name.clone(), accounts);
			state.wallets.push(wallet);
		}
		self
	}

	/// Makes account requests for `name` fail with a rejection.
	pub fn with_rejection(self, name: &str, reason: &str) -> Self {
		self.state.lock().rejections.insert(name.to_string(), reason.to_string());
		self
	}

	/// Simulates the host discovery API throwing.
	pub fn with_discovery_failure(self) -> Self {
		self.state.lock().discovery_fails = true;
		self
	}

	/// Returns the wallet names passed to [`ExtensionHost::load_wallet`], in call order.
	pub fn load_calls(&self) -> Vec<String> {
		self.state.lock().load_calls.clone()
	}
}

#[async_trait]
impl ExtensionHost for FakeHost {
	async fn list_wallets(&self) -> Vec<WalletDescriptor> {
		let state = self.state.lock();
		if state.discovery_fails {
			// Discovery failure is normalized to "nothing installed" per the
			// trait contract; it must never surface as an error.
			return Vec::new();
		}
		state.wallets.clone()
	}

	async fn load_wallet(&self, name: &str) -> Result<WalletConnection, ProviderError> {
		let mut state = self.state.lock();
		state.load_calls.push(name.to_string());

		if let Some(reason) = state.rejections.get(name) {
			return Err(ProviderError::Rejected {
				name: name.to_string(),
				reason: reason.clone(),
			});
		}
		if !state.wallets.iter().any(|w| w.name == name) {
			return Err(ProviderError::NotInstalled { name: name.to_string() });
		}

		let accounts = state.accounts.get(name).cloned().unwrap_or_default();
		Ok(WalletConnection { accounts })
	}
}
