use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::SessionStore;

/// In-memory SessionStore for testing.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_same_values() {
        let store = MemoryStore::new();
        let clone = store.clone();

        store.set("email", "dana@example.com");
        assert_eq!(clone.get("email").as_deref(), Some("dana@example.com"));

        clone.remove("email");
        assert!(store.get("email").is_none());
    }
}
