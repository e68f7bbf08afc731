//! Extension host boundary: discovery and per-wallet account access.

use async_trait::async_trait;
use thiserror::Error;

use crate::descriptor::{WalletConnection, WalletDescriptor};

/// Errors surfaced by wallet extension providers.
#[derive(Debug, Error)]
pub enum ProviderError {
	/// No extension is registered under the requested name.
	#[error("wallet extension {name} is not installed")]
	NotInstalled {
		/// Requested extension key.
		name: String,
	},

	/// The extension refused the account-access request.
	#[error("wallet {name} rejected the request: {reason}")]
	Rejected {
		/// Extension key that rejected.
		name: String,
		/// Reason reported by the extension.
		reason: String,
	},

	/// The host environment failed before the wallet could answer.
	#[error("extension host failure: {0}")]
	Host(String),
}

/// Host environment exposing installed wallet extensions.
///
/// Adapters over a concrete host (an injected-extension registry, a remote
/// bridge, a test double) implement this trait; session logic only ever sees
/// the trait object.
#[async_trait]
pub trait ExtensionHost: Send + Sync {
	/// Lists the wallets visible in the current host environment.
	///
	/// Infallible by contract: implementations must normalize host failures
	/// to an empty list. An empty list means no wallets are installed; that
	/// is success, not an error.
	async fn list_wallets(&self) -> Vec<WalletDescriptor>;

	/// Requests full account access for the named wallet.
	///
	/// Resolves once the user (or the extension's standing grant) answers.
	/// Rejection, a missing extension, and host faults all surface as
	/// [`ProviderError`].
	async fn load_wallet(&self, name: &str) -> Result<WalletConnection, ProviderError>;
}
