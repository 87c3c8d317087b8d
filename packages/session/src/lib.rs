//! # Session crate — who is signed in right now
//!
//! The whole login state of the app is a single persisted marker: the email
//! address of the signed-in user, stored under [`EMAIL_KEY`]. There is no
//! token and no expiry; signing out simply removes the marker.
//!
//! [`SessionStore`] abstracts where that marker lives per platform:
//!
//! | Backend | Platform | Persistence |
//! |---------|----------|-------------|
//! | [`LocalStorage`] | Web (wasm, `web` feature) | Browser `localStorage` |
//! | [`FileStore`] | Desktop / native | One file per key on disk |
//! | [`MemoryStore`] | Tests | Process-local only |
//!
//! [`Session`] wraps a backend with the begin / read / end lifecycle so
//! callers never touch raw keys.

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;

/// Storage key holding the signed-in user's email.
pub const EMAIL_KEY: &str = "email";

/// Synchronous string key/value storage for session markers.
///
/// Implementations are infallible by contract: a backend that cannot read
/// reports an absent value, and write failures are swallowed. A lost marker
/// only ever signs the user out.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Login-session lifecycle over a [`SessionStore`].
#[derive(Clone, Debug)]
pub struct Session<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Email of the signed-in user, if any. An empty stored value counts
    /// as absent.
    pub fn current_email(&self) -> Option<String> {
        self.store.get(EMAIL_KEY).filter(|email| !email.is_empty())
    }

    /// Persist the marker for a freshly signed-in user.
    pub fn begin(&self, email: &str) {
        self.store.set(EMAIL_KEY, email);
    }

    /// Sign out by removing the marker.
    pub fn end(&self) {
        self.store.remove(EMAIL_KEY);
    }

    pub fn is_active(&self) -> bool {
        self.current_email().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_over_memory_store() {
        let session = Session::new(MemoryStore::new());

        assert!(!session.is_active());
        assert!(session.current_email().is_none());

        session.begin("dana@example.com");
        assert!(session.is_active());
        assert_eq!(session.current_email().as_deref(), Some("dana@example.com"));

        session.end();
        assert!(!session.is_active());
        assert!(session.current_email().is_none());
    }

    #[test]
    fn empty_marker_counts_as_absent() {
        let store = MemoryStore::new();
        store.set(EMAIL_KEY, "");

        let session = Session::new(store);
        assert!(session.current_email().is_none());
        assert!(!session.is_active());
    }

    #[test]
    fn end_is_idempotent() {
        let session = Session::new(MemoryStore::new());
        session.end();
        session.begin("dana@example.com");
        session.end();
        session.end();
        assert!(!session.is_active());
    }
}
