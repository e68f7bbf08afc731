//! Manual connect/select/disconnect lifecycle against a scripted host.

use std::sync::Arc;

use wallet_provider::{AccountDescriptor, FakeHost, WalletDescriptor};
use wallet_session::{
	ConnectionStore, MemoryStore, SessionError, SessionEvent, SessionManager, StoreError, StoredConnection,
};

fn wallet(name: &str) -> WalletDescriptor {
	WalletDescriptor::new(name, name)
}

fn account(address: &str, wallet_name: &str) -> AccountDescriptor {
	AccountDescriptor::new(address, wallet_name)
}

fn manager_with(host: FakeHost) -> (SessionManager, MemoryStore) {
	let store = MemoryStore::new();
	let manager = SessionManager::new(Arc::new(host), Box::new(store.clone()));
	(manager, store)
}

#[tokio::test]
async fn connect_selects_first_account_and_persists() {
	let host = FakeHost::new().with_wallet(wallet("polkadot-js"), vec![
		account("addr1", "polkadot-js"),
		account("addr2", "polkadot-js"),
	]);
	let (manager, store) = manager_with(host);

	manager.connect_wallet(&wallet("polkadot-js")).await.unwrap();

	let snapshot = manager.snapshot();
	assert!(snapshot.is_connected());
	assert_eq!(snapshot.active_wallet.as_ref().unwrap().name, "polkadot-js");
	assert_eq!(snapshot.accounts.len(), 2);
	assert_eq!(snapshot.selected_account.as_ref().unwrap().address, "addr1");
	assert!(!manager.connecting());
	assert_eq!(
		store.get(),
		Some(StoredConnection {
			wallet_name: "polkadot-js".into(),
			account_address: Some("addr1".into()),
		})
	);
}

#[tokio::test]
async fn connect_with_zero_accounts_fails_and_persists_nothing() {
	let host = FakeHost::new().with_wallet(wallet("talisman"), vec![]);
	let (manager, store) = manager_with(host);

	let err = manager.connect_wallet(&wallet("talisman")).await.unwrap_err();

	assert!(matches!(err, SessionError::NoAccounts { wallet } if wallet == "talisman"));
	let snapshot = manager.snapshot();
	assert!(snapshot.active_wallet.is_none());
	assert!(snapshot.accounts.is_empty());
	assert!(snapshot.selected_account.is_none());
	assert!(!snapshot.connecting);
	assert_eq!(store.get(), None);
}

#[tokio::test]
async fn failed_connect_leaves_previous_session_intact() {
	let host = FakeHost::new()
		.with_wallet(wallet("polkadot-js"), vec![account("addr1", "polkadot-js")])
		.with_wallet(wallet("talisman"), vec![]);
	let (manager, store) = manager_with(host);

	manager.connect_wallet(&wallet("polkadot-js")).await.unwrap();
	let before = manager.snapshot();

	let err = manager.connect_wallet(&wallet("talisman")).await.unwrap_err();
	assert!(matches!(err, SessionError::NoAccounts { .. }));

	let after = manager.snapshot();
	assert_eq!(after.active_wallet, before.active_wallet);
	assert_eq!(after.accounts, before.accounts);
	assert_eq!(after.selected_account, before.selected_account);
	assert_eq!(store.get().unwrap().wallet_name, "polkadot-js");
}

#[tokio::test]
async fn rejected_connect_surfaces_connection_error() {
	let host = FakeHost::new()
		.with_wallet(wallet("enkrypt"), vec![account("addr1", "enkrypt")])
		.with_rejection("enkrypt", "user denied");
	let (manager, store) = manager_with(host);

	let err = manager.connect_wallet(&wallet("enkrypt")).await.unwrap_err();

	assert!(matches!(err, SessionError::Connection { wallet, .. } if wallet == "enkrypt"));
	assert!(manager.snapshot().active_wallet.is_none());
	assert_eq!(store.get(), None);
}

#[tokio::test]
async fn select_account_updates_selection_and_storage_only() {
	let host = FakeHost::new().with_wallet(wallet("subwallet-js"), vec![
		account("addr1", "subwallet-js"),
		account("addr2", "subwallet-js"),
	]);
	let (manager, store) = manager_with(host);
	manager.connect_wallet(&wallet("subwallet-js")).await.unwrap();

	manager.select_account(&account("addr2", "subwallet-js")).unwrap();

	let snapshot = manager.snapshot();
	assert_eq!(snapshot.selected_account.as_ref().unwrap().address, "addr2");
	assert_eq!(snapshot.accounts.len(), 2);
	assert_eq!(snapshot.active_wallet.as_ref().unwrap().name, "subwallet-js");
	assert_eq!(
		store.get(),
		Some(StoredConnection {
			wallet_name: "subwallet-js".into(),
			account_address: Some("addr2".into()),
		})
	);
}

#[tokio::test]
async fn select_of_unknown_account_fails_fast_without_mutation() {
	let host = FakeHost::new().with_wallet(wallet("polkadot-js"), vec![account("addr1", "polkadot-js")]);
	let (manager, store) = manager_with(host);
	manager.connect_wallet(&wallet("polkadot-js")).await.unwrap();

	let err = manager.select_account(&account("intruder", "polkadot-js")).unwrap_err();

	assert!(matches!(err, SessionError::UnknownAccount { address } if address == "intruder"));
	assert_eq!(manager.selected_account().unwrap().address, "addr1");
	assert_eq!(manager.accounts().len(), 1);
	assert_eq!(store.get().unwrap().account_address, Some("addr1".into()));
}

#[tokio::test]
async fn select_while_disconnected_fails_fast() {
	let (manager, _store) = manager_with(FakeHost::new());

	let err = manager.select_account(&account("addr1", "polkadot-js")).unwrap_err();
	assert!(matches!(err, SessionError::UnknownAccount { .. }));
}

#[tokio::test]
async fn disconnect_is_idempotent_and_clears_storage() {
	let host = FakeHost::new().with_wallet(wallet("talisman"), vec![account("addr1", "talisman")]);
	let (manager, store) = manager_with(host);
	manager.connect_wallet(&wallet("talisman")).await.unwrap();

	manager.disconnect_wallet();
	manager.disconnect_wallet();

	let snapshot = manager.snapshot();
	assert!(snapshot.active_wallet.is_none());
	assert!(snapshot.accounts.is_empty());
	assert!(snapshot.selected_account.is_none());
	assert!(!snapshot.connecting);
	assert_eq!(store.get(), None);
}

#[tokio::test]
async fn storage_write_failure_does_not_fail_connect() {
	struct FailingStore;

	impl ConnectionStore for FailingStore {
		fn load(&self) -> Result<Option<StoredConnection>, StoreError> {
			Ok(None)
		}

		fn store(&self, _record: &StoredConnection) -> Result<(), StoreError> {
			Err(StoreError::Io(std::io::Error::other("disk full")))
		}

		fn clear(&self) -> Result<(), StoreError> {
			Ok(())
		}
	}

	let host = FakeHost::new().with_wallet(wallet("polkadot-js"), vec![account("addr1", "polkadot-js")]);
	let manager = SessionManager::new(Arc::new(host), Box::new(FailingStore));

	manager.connect_wallet(&wallet("polkadot-js")).await.unwrap();

	assert_eq!(manager.snapshot().selected_account.unwrap().address, "addr1");
}

#[tokio::test]
async fn events_are_emitted_in_operation_order() {
	let host = FakeHost::new().with_wallet(wallet("polkadot-js"), vec![
		account("addr1", "polkadot-js"),
		account("addr2", "polkadot-js"),
	]);
	let (manager, _store) = manager_with(host);
	let mut events = manager.subscribe();

	manager.connect_wallet(&wallet("polkadot-js")).await.unwrap();
	manager.select_account(&account("addr2", "polkadot-js")).unwrap();
	manager.disconnect_wallet();
	manager.request_connect();

	assert!(matches!(
		events.try_recv().unwrap(),
		SessionEvent::Connected { account, .. } if account.address == "addr1"
	));
	assert!(matches!(
		events.try_recv().unwrap(),
		SessionEvent::AccountSelected { account } if account.address == "addr2"
	));
	assert!(matches!(events.try_recv().unwrap(), SessionEvent::Disconnected));
	assert!(matches!(events.try_recv().unwrap(), SessionEvent::ConnectRequested));
	assert!(events.try_recv().is_err());
}
