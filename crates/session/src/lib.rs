//! Wallet session management: connect, select, persist, silently restore.
//!
//! The [`SessionManager`] is the single owner of in-memory session state:
//! which wallets are installed, which one is active, its accounts, and the
//! selected account. Consumers hold a reference to one manager instance
//! constructed at application start (no ambient globals), read state through
//! [`SessionSnapshot`], and observe changes through the typed
//! [`SessionEvent`] stream.
//!
//! The last successful connection is persisted through the
//! [`ConnectionStore`] trait as a single [`StoredConnection`] record and is
//! silently re-established on startup by [`SessionManager::initialize`].
//! Restoration failures never surface to the user; they degrade to the
//! disconnected default state with a diagnostic log.
//!
//! Operations take `&self`; state lives behind a lock whose scopes never
//! span a suspension point, so consumers can observe `connecting` while an
//! attempt is awaiting a slow extension. The state machine assumes the
//! cooperative single-threaded scheduling of its origin: concurrent
//! connect calls are not coalesced, and callers must not re-enter while
//! `connecting` is set.

pub mod error;
pub mod events;
pub mod manager;
pub mod snapshot;
pub mod store;

pub use error::{Result, SessionError};
pub use events::SessionEvent;
pub use manager::SessionManager;
pub use snapshot::SessionSnapshot;
pub use store::{ConnectionStore, FileStore, MemoryStore, StoreError, StoredConnection};
