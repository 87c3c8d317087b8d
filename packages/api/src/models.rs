//! # User models — wire records and their display projection
//!
//! Two representations of a user:
//!
//! ## [`UserRecord`] / [`UserFields`]
//!
//! The raw shape of one row in the remote user table, exactly as the REST API
//! returns it: a record `id` plus a sparse `fields` object. Every cell an
//! Airtable user can leave blank is an `Option` (or an empty `Vec` for
//! list-valued cells), and decoding never fails just because a column is
//! missing. Two columns keep their legacy capitalised names on the wire
//! (`Posts`, `Analytics`); everything else is snake_case.
//!
//! | Field | Wire name | Notes |
//! |-------|-----------|-------|
//! | `email` | `email` | Lookup key for login; `""` when absent |
//! | `password` | `password` | Plaintext column, compared verbatim on login |
//! | `given_name` / `family_name` | same | Split from the sign-up display name |
//! | `subscription_plan` | same | `"free"` or `"premium"`, anything else reads as free |
//! | `profile_picture_url` | same | Attachment list; first entry's URL is shown |
//! | `bio`, `*_handle` | same | Optional profile text |
//! | `registration_date`, `last_login` | same | RFC 3339 strings, passed through unparsed |
//! | `posts` | `Posts` | Linked record ids; only the count is displayed |
//! | `analytics` | `Analytics` | Numeric rollup |
//!
//! Serialisation skips empty optionals so create/update payloads contain
//! only the cells actually being written.
//!
//! ## [`UserProfile`]
//!
//! The dashboard-facing projection built by [`UserRecord::to_profile`]. It is
//! total: absent cells collapse to `""`, `0`, `None`, or the free plan, so
//! the view layer never deals in `Option`s it would only unwrap to defaults.

use serde::{Deserialize, Serialize};

/// Subscription tier stored in the `subscription_plan` column.
///
/// Unknown wire values decode as [`SubscriptionPlan::Free`] rather than
/// failing the whole record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionPlan {
    Premium,
    // serde requires the catch-all variant to come last.
    #[default]
    #[serde(other)]
    Free,
}

impl SubscriptionPlan {
    pub fn is_premium(self) -> bool {
        matches!(self, Self::Premium)
    }

    /// Membership line shown under the dashboard greeting.
    pub fn label(self) -> &'static str {
        match self {
            Self::Premium => "Pro Member",
            Self::Free => "Free Member",
        }
    }
}

/// One entry of an Airtable attachment cell. Extra keys (size, thumbnails)
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attachment {
    pub id: String,
    pub url: String,
    pub filename: String,
}

/// The `fields` object of a user record, as stored in the remote table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserFields {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_plan: Option<SubscriptionPlan>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub profile_picture_url: Vec<Attachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook_handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram_handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<String>,
    #[serde(rename = "Posts", skip_serializing_if = "Vec::is_empty")]
    pub posts: Vec<String>,
    #[serde(rename = "Analytics", skip_serializing_if = "Option::is_none")]
    pub analytics: Option<u32>,
}

/// One record from the user table: the remote row id plus its fields.
///
/// The REST API also returns a `createdTime` alongside these; it is unused
/// and dropped at decode time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub fields: UserFields,
}

impl UserRecord {
    /// Project the raw record into the display shape. Total: every absent
    /// cell collapses to a default instead of surfacing as an error.
    pub fn to_profile(&self) -> UserProfile {
        let f = &self.fields;
        UserProfile {
            id: self.id.clone(),
            email: f.email.clone(),
            given_name: f.given_name.clone().unwrap_or_default(),
            family_name: f.family_name.clone().unwrap_or_default(),
            plan: f.subscription_plan.unwrap_or_default(),
            profile_picture_url: f.profile_picture_url.first().map(|a| a.url.clone()),
            bio: f.bio.clone().unwrap_or_default(),
            twitter_handle: f.twitter_handle.clone().unwrap_or_default(),
            facebook_handle: f.facebook_handle.clone().unwrap_or_default(),
            instagram_handle: f.instagram_handle.clone().unwrap_or_default(),
            registration_date: f.registration_date.clone().unwrap_or_default(),
            last_login: f.last_login.clone().unwrap_or_default(),
            posts: f.posts.len(),
            analytics: f.analytics.unwrap_or(0),
        }
    }
}

/// Display projection of a [`UserRecord`] for the dashboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub given_name: String,
    pub family_name: String,
    pub plan: SubscriptionPlan,
    pub profile_picture_url: Option<String>,
    pub bio: String,
    pub twitter_handle: String,
    pub facebook_handle: String,
    pub instagram_handle: String,
    pub registration_date: String,
    pub last_login: String,
    pub posts: usize,
    pub analytics: u32,
}

impl UserProfile {
    /// Given and family names joined for the greeting, with no trailing
    /// space when the family name is empty.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
            .trim()
            .to_string()
    }
}
