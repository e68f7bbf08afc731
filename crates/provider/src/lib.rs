//! Wallet extension host boundary.
//!
//! This crate defines the identity types produced by wallet browser
//! extensions and the [`ExtensionHost`] trait that adapters implement to
//! expose them: asynchronous discovery of installed wallets plus per-wallet
//! account-access requests. Session logic consumes these types without ever
//! touching a real host environment, which keeps it portable and testable;
//! the scriptable [`FakeHost`] stands in for a browser during tests.

pub mod descriptor;
pub mod fake;
pub mod host;
pub mod known;

pub use descriptor::{AccountDescriptor, WalletConnection, WalletDescriptor};
pub use fake::FakeHost;
pub use host::{ExtensionHost, ProviderError};
pub use known::{KNOWN_WALLETS, known_title, known_wallet};
