//! # HTTP-backed user store
//!
//! [`AirtableStore`] talks straight to the hosted table's REST API — the app
//! has no server of its own, so the browser (or desktop shell) is the API
//! client. One operation is one round trip:
//!
//! | Operation | Request |
//! |-----------|---------|
//! | `find_by_email` | `GET <table>?filterByFormula={email} = "<escaped>"` |
//! | `create_user` | `POST <table>` with a `{"fields": {...}}` body |
//! | `touch_last_login` | `PATCH <table>/<record_id>` writing only `last_login` |
//!
//! List responses arrive as `{"records": [...]}` pages; create and update
//! answer with the single affected record. Only the first match of a lookup
//! is used — the table is expected to hold at most one row per email, and
//! nothing here paginates past the first page.

use serde::{Deserialize, Serialize};

use crate::models::UserRecord;
use crate::store::{filter_by_email, new_user_fields, now_rfc3339, StoreError, TableConfig, UserStore};

/// User store backed by the hosted table's REST API.
#[derive(Clone, Debug)]
pub struct AirtableStore {
    client: reqwest::Client,
    config: TableConfig,
}

/// Request envelope: the table API wraps cell data in `fields`.
#[derive(Serialize)]
struct FieldsBody<T> {
    fields: T,
}

/// One page of a list response. `offset` and other page keys are ignored.
#[derive(Deserialize)]
struct RecordPage {
    #[serde(default)]
    records: Vec<UserRecord>,
}

/// Body for the last-login update. A dedicated type, so the patch can never
/// grow extra cells.
#[derive(Serialize)]
struct LastLoginFields {
    last_login: String,
}

impl AirtableStore {
    pub fn new(config: TableConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.config.api_key)
    }
}

impl Default for AirtableStore {
    /// Store pointed at the project's shared base.
    fn default() -> Self {
        Self::new(TableConfig::default())
    }
}

/// Read a response body, mapping non-success statuses to [`StoreError::Api`]
/// and undecodable bodies to [`StoreError::Decode`].
async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T, StoreError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(StoreError::Api {
            status: status.as_u16(),
            body,
        });
    }
    Ok(serde_json::from_str(&body)?)
}

impl UserStore for AirtableStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let response = self
            .client
            .get(self.config.endpoint())
            .header("Authorization", self.bearer())
            .query(&[("filterByFormula", filter_by_email(email))])
            .send()
            .await?;

        let page: RecordPage = decode(response).await?;
        Ok(page.records.into_iter().next())
    }

    async fn create_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserRecord, StoreError> {
        let body = FieldsBody {
            fields: new_user_fields(name, email, password),
        };

        let response = self
            .client
            .post(self.config.endpoint())
            .header("Authorization", self.bearer())
            .json(&body)
            .send()
            .await?;

        decode(response).await
    }

    async fn touch_last_login(&self, record_id: &str) -> Result<(), StoreError> {
        let body = FieldsBody {
            fields: LastLoginFields {
                last_login: now_rfc3339(),
            },
        };

        let response = self
            .client
            .patch(format!("{}/{}", self.config.endpoint(), record_id))
            .header("Authorization", self.bearer())
            .json(&body)
            .send()
            .await?;

        // The API echoes the updated record; decoding it doubles as the
        // status check.
        let _: UserRecord = decode(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubscriptionPlan;

    #[test]
    fn endpoint_is_base_then_table() {
        let config = TableConfig::new("key", "appBASE", "users");
        assert_eq!(
            config.endpoint(),
            "https://api.airtable.com/v0/appBASE/users"
        );

        let store = AirtableStore::new(config);
        assert_eq!(store.bearer(), "Bearer key");
    }

    #[test]
    fn decodes_a_realistic_record_page() {
        let body = r#"{
            "records": [{
                "id": "recAAA111",
                "createdTime": "2024-01-15T09:30:00.000Z",
                "fields": {
                    "email": "dana@example.com",
                    "password": "hunter2",
                    "given_name": "Dana",
                    "family_name": "Reyes",
                    "subscription_plan": "premium",
                    "profile_picture_url": [{
                        "id": "attX",
                        "url": "https://dl.airtable.com/avatar.png",
                        "filename": "avatar.png",
                        "size": 23451,
                        "type": "image/png"
                    }],
                    "bio": "Designing things.",
                    "twitter_handle": "danareyes",
                    "registration_date": "2023-11-02T08:00:00.000Z",
                    "last_login": "2024-02-01T12:00:00.000Z",
                    "Posts": ["recP1", "recP2", "recP3"],
                    "Analytics": 42
                }
            }],
            "offset": "itrNEXT"
        }"#;

        let page: RecordPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.records.len(), 1);

        let record = &page.records[0];
        assert_eq!(record.id, "recAAA111");
        assert_eq!(record.fields.email, "dana@example.com");
        assert_eq!(
            record.fields.subscription_plan,
            Some(SubscriptionPlan::Premium)
        );
        assert_eq!(record.fields.posts.len(), 3);
        assert_eq!(record.fields.analytics, Some(42));

        let profile = record.to_profile();
        assert_eq!(
            profile.profile_picture_url.as_deref(),
            Some("https://dl.airtable.com/avatar.png")
        );
        assert_eq!(profile.display_name(), "Dana Reyes");
        assert_eq!(profile.posts, 3);
    }

    #[test]
    fn lookup_takes_the_first_record_of_a_multi_match_page() {
        // Duplicate rows shouldn't exist, but the API can still return them.
        let body = r#"{
            "records": [
                {"id": "recFIRST", "fields": {"email": "dana@example.com"}},
                {"id": "recSECOND", "fields": {"email": "dana@example.com"}}
            ]
        }"#;

        let page: RecordPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.records.len(), 2);

        let first = page.records.into_iter().next().unwrap();
        assert_eq!(first.id, "recFIRST");
    }

    #[test]
    fn empty_and_missing_record_lists_decode_to_no_records() {
        let page: RecordPage = serde_json::from_str(r#"{"records": []}"#).unwrap();
        assert!(page.records.is_empty());

        let page: RecordPage = serde_json::from_str("{}").unwrap();
        assert!(page.records.is_empty());
    }

    #[test]
    fn create_body_wraps_cells_in_fields() {
        let body = FieldsBody {
            fields: new_user_fields("Dana Reyes", "dana@example.com", "hunter2"),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert!(value["fields"].is_object());
        assert_eq!(value["fields"]["email"], "dana@example.com");
        assert_eq!(value["fields"]["subscription_plan"], "free");
    }

    #[test]
    fn last_login_patch_writes_exactly_one_cell() {
        let body = FieldsBody {
            fields: LastLoginFields {
                last_login: "2024-02-01T12:00:00.000Z".to_string(),
            },
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["fields"].as_object().unwrap().len(), 1);
        assert_eq!(value["fields"]["last_login"], "2024-02-01T12:00:00.000Z");
    }
}
