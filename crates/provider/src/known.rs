//! Registry of well-known wallet extension keys.

use crate::descriptor::WalletDescriptor;

/// Extension keys and display titles for commonly installed wallets.
pub const KNOWN_WALLETS: &[(&str, &str)] = &[
	("polkadot-js", "Polkadot.js"),
	("subwallet-js", "SubWallet"),
	("talisman", "Talisman"),
	("enkrypt", "Enkrypt"),
];

/// Returns the display title for a known extension key.
pub fn known_title(name: &str) -> Option<&'static str> {
	KNOWN_WALLETS
		.iter()
		.find(|(key, _)| *key == name)
		.map(|(_, title)| *title)
}

/// Builds a descriptor for a known extension key.
pub fn known_wallet(name: &str) -> Option<WalletDescriptor> {
	known_title(name).map(|title| WalletDescriptor::new(name, title))
}
