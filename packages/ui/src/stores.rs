//! Platform wiring: which session backend and which user store to use.

/// Session over the platform-appropriate marker store: browser
/// `localStorage` on web, a file in the platform data directory elsewhere.
pub fn make_session() -> session::Session<impl session::SessionStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        session::Session::new(session::LocalStorage::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        session::Session::new(session::FileStore::in_data_dir())
    }
}

/// User store pointed at the project's shared base. Every platform talks
/// to the hosted table directly.
pub fn make_users() -> api::AirtableStore {
    api::AirtableStore::default()
}
