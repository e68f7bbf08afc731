//! Wallet and account identity types produced by the extension host.

use serde::{Deserialize, Serialize};

/// Identity of an installable wallet extension.
///
/// Produced by discovery; immutable. The `name` is the stable key used for
/// account requests and for persisted-connection resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletDescriptor {
	/// Stable extension key, e.g. `polkadot-js`.
	pub name: String,
	/// Human-readable wallet title.
	pub title: String,
	/// Logo URL or data URI, when the extension ships one.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub logo: Option<String>,
}

impl WalletDescriptor {
	/// Creates a descriptor without a logo.
	pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			title: title.into(),
			logo: None,
		}
	}

	/// Sets the logo.
	pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
		self.logo = Some(logo.into());
		self
	}
}

/// One account exposed by a connected wallet.
///
/// Immutable once obtained. `wallet_name` is a back-reference to the owning
/// [`WalletDescriptor`] by key, a relation rather than ownership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDescriptor {
	/// Address, unique within the owning wallet.
	pub address: String,
	/// Display name assigned in the extension, when set.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Key of the wallet extension exposing this account.
	pub wallet_name: String,
}

impl AccountDescriptor {
	/// Creates an unnamed account for the given wallet.
	pub fn new(address: impl Into<String>, wallet_name: impl Into<String>) -> Self {
		Self {
			address: address.into(),
			name: None,
			wallet_name: wallet_name.into(),
		}
	}

	/// Sets the display name.
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}
}

/// Accounts granted by a wallet after an access request.
#[derive(Debug, Clone, Default)]
pub struct WalletConnection {
	/// Accounts the user exposed to this origin, in extension order.
	pub accounts: Vec<AccountDescriptor>,
}
