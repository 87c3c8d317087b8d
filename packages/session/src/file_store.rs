//! # Filesystem-backed session store
//!
//! [`FileStore`] persists each session key as one small file under a base
//! directory, so a desktop build stays signed in across restarts.
//!
//! ## Platform data directories
//!
//! [`FileStore::in_data_dir`] roots the store at [`dirs::data_dir()`]:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/ultimate-social-suite/session/` |
//! | Linux | `~/.local/share/ultimate-social-suite/session/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\ultimate-social-suite\session\` |

use std::path::PathBuf;

use crate::SessionStore;

/// Filesystem-backed SessionStore, one file per key.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Store rooted in the platform data directory.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn in_data_dir() -> Self {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ultimate-social-suite")
            .join("session");
        Self::new(base)
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let content = std::fs::read_to_string(self.key_path(key)).ok()?;
        let value = content.trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    fn set(&self, key: &str, value: &str) {
        let _ = std::fs::create_dir_all(&self.base);
        let _ = std::fs::write(self.key_path(key), value);
    }

    fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.key_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Session;

    #[test]
    fn marker_survives_reopening_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("session");

        let session = Session::new(FileStore::new(base.clone()));
        assert!(session.current_email().is_none());

        session.begin("dana@example.com");

        // Re-open from the same directory
        let reopened = Session::new(FileStore::new(base));
        assert_eq!(
            reopened.current_email().as_deref(),
            Some("dana@example.com")
        );

        reopened.end();
        assert!(session.current_email().is_none());
    }

    #[test]
    fn missing_base_directory_reads_as_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("never-created"));
        assert!(store.get("email").is_none());
    }
}
