use std::sync::{Arc, Mutex};

use crate::models::UserRecord;
use crate::store::{new_user_fields, now_rfc3339, StoreError, UserStore};

/// In-memory UserStore for testing.
///
/// Behaves like a tiny single-table base: records get `rec1`, `rec2`, …
/// ids, lookups are exact-match on the email cell, and
/// [`last_login_patches`](MemoryStore::last_login_patches) counts how many
/// times the last-login cell was written.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    records: Arc<Mutex<Vec<UserRecord>>>,
    patches: Arc<Mutex<u32>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of last-login writes seen so far.
    pub fn last_login_patches(&self) -> u32 {
        *self.patches.lock().unwrap()
    }
}

impl UserStore for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let records = self.records.lock().unwrap();
        Ok(records.iter().find(|r| r.fields.email == email).cloned())
    }

    async fn create_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserRecord, StoreError> {
        let mut records = self.records.lock().unwrap();
        let record = UserRecord {
            id: format!("rec{}", records.len() + 1),
            fields: new_user_fields(name, email, password),
        };
        records.push(record.clone());
        Ok(record)
    }

    async fn touch_last_login(&self, record_id: &str) -> Result<(), StoreError> {
        let mut records = self.records.lock().unwrap();
        let Some(record) = records.iter_mut().find(|r| r.id == record_id) else {
            return Err(StoreError::Api {
                status: 404,
                body: format!("no record {record_id}"),
            });
        };
        record.fields.last_login = Some(now_rfc3339());
        *self.patches.lock().unwrap() += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubscriptionPlan;

    #[tokio::test]
    async fn create_then_find_roundtrip() {
        let store = MemoryStore::new();

        let created = store
            .create_user("Dana Reyes", "dana@example.com", "hunter2")
            .await
            .unwrap();
        assert_eq!(created.id, "rec1");

        let found = store
            .find_by_email("dana@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found, created);
        assert_eq!(found.fields.given_name.as_deref(), Some("Dana"));
        assert_eq!(found.fields.password.as_deref(), Some("hunter2"));
        assert_eq!(
            found.fields.subscription_plan,
            Some(SubscriptionPlan::Free)
        );
    }

    #[tokio::test]
    async fn missing_email_is_none_not_an_error() {
        let store = MemoryStore::new();
        assert!(store.find_by_email("ghost@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn lookups_are_exact_match() {
        let store = MemoryStore::new();
        store
            .create_user("Dana Reyes", "dana@example.com", "hunter2")
            .await
            .unwrap();

        assert!(store.find_by_email("DANA@example.com").await.unwrap().is_none());
        assert!(store.find_by_email("dana@example.co").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_emails_resolve_to_the_first_record() {
        let store = MemoryStore::new();
        let first = store
            .create_user("Dana Reyes", "dana@example.com", "hunter2")
            .await
            .unwrap();
        store
            .create_user("Dana R", "dana@example.com", "swordfish")
            .await
            .unwrap();

        let found = store
            .find_by_email("dana@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, first.id);
        assert_eq!(found.fields.password.as_deref(), Some("hunter2"));
    }

    #[tokio::test]
    async fn touching_last_login_counts_writes() {
        let store = MemoryStore::new();
        let record = store
            .create_user("Dana Reyes", "dana@example.com", "hunter2")
            .await
            .unwrap();
        assert_eq!(store.last_login_patches(), 0);

        store.touch_last_login(&record.id).await.unwrap();
        assert_eq!(store.last_login_patches(), 1);

        let found = store
            .find_by_email("dana@example.com")
            .await
            .unwrap()
            .unwrap();
        assert!(found.fields.last_login.is_some());
    }

    #[tokio::test]
    async fn touching_an_unknown_record_fails_without_counting() {
        let store = MemoryStore::new();
        let result = store.touch_last_login("recGHOST").await;

        assert!(matches!(
            result,
            Err(StoreError::Api { status: 404, .. })
        ));
        assert_eq!(store.last_login_patches(), 0);
    }
}
