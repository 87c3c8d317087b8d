//! # User store — one abstract interface over the remote user table
//!
//! [`UserStore`] is the seam between the auth/dashboard flows and wherever
//! user records actually live. All reads and writes go through the trait, so
//! the same logic runs against the hosted REST table in production
//! ([`AirtableStore`]) and a plain in-memory table in tests ([`MemoryStore`]).
//!
//! ## Operations
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`find_by_email`](UserStore::find_by_email) | Exact-email lookup; `Ok(None)` when no row matches. |
//! | [`create_user`](UserStore::create_user) | Inserts a fresh record with the plaintext password the table inherited, the free plan, and both timestamps set to now. |
//! | [`touch_last_login`](UserStore::touch_last_login) | Partial update writing only the `last_login` cell of one record. |
//!
//! Failures are typed ([`StoreError`]) rather than collapsed into an
//! absent-user result, so callers can tell "no such user" apart from "the
//! remote call blew up" even when they choose to render both the same way.

mod airtable;
mod memory;

pub use airtable::AirtableStore;
pub use memory::MemoryStore;

use crate::models::{UserFields, UserRecord};

/// Error from a user-store operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The HTTP round trip itself failed (offline, DNS, TLS).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The service answered with a non-success status.
    #[error("remote table returned {status}: {body}")]
    Api { status: u16, body: String },
    /// The response body did not match the expected record shape.
    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Async interface over the user table.
pub trait UserStore {
    /// Look up the single record whose `email` cell equals `email`.
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl std::future::Future<Output = Result<Option<UserRecord>, StoreError>>;

    /// Insert a new user from the sign-up form and return the stored record.
    fn create_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<UserRecord, StoreError>>;

    /// Overwrite only the `last_login` cell of the given record with now.
    fn touch_last_login(
        &self,
        record_id: &str,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
}

/// Connection details for the hosted user table.
///
/// The defaults are the project's shared base. Credentials living in client
/// code is inherited from the current deployment; swap in your own via
/// [`TableConfig::new`] when pointing at a different base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub api_key: String,
    pub base_id: String,
    pub table: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            api_key: "patL2qM5BxtZ0FLzr.e003e2da34ef3ffe13515922cfd839a31c14f650fee117c2ddaf4ca44f88eed2".to_string(),
            base_id: "appRHbWQu9VwOk33j".to_string(),
            table: "uss_base".to_string(),
        }
    }
}

impl TableConfig {
    pub fn new(api_key: &str, base_id: &str, table: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            base_id: base_id.to_string(),
            table: table.to_string(),
        }
    }

    /// Base URL of the table, without a trailing slash.
    pub fn endpoint(&self) -> String {
        format!("https://api.airtable.com/v0/{}/{}", self.base_id, self.table)
    }
}

/// Escape a value for interpolation into a `filterByFormula` string literal.
///
/// Backslashes first, then double quotes, so user-typed input cannot break
/// out of the quoted literal and rewrite the formula.
pub(crate) fn escape_formula_text(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Formula selecting records whose `email` cell equals `email` exactly.
pub(crate) fn filter_by_email(email: &str) -> String {
    format!("{{email}} = \"{}\"", escape_formula_text(email))
}

/// Current time as an RFC 3339 UTC string with millisecond precision,
/// the same shape the table's existing timestamp cells use.
pub(crate) fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// Split a sign-up display name into given and family names: first
/// whitespace-separated word, then the second. Anything past the second
/// word is dropped, and a single-word name has no family name.
pub(crate) fn split_display_name(name: &str) -> (String, Option<String>) {
    let mut words = name.split_whitespace();
    let given = words.next().unwrap_or_default().to_string();
    let family = words.next().map(str::to_string);
    (given, family)
}

/// Field set for a brand-new user record: sign-up form data, the free
/// plan, and both timestamps set to now.
pub(crate) fn new_user_fields(name: &str, email: &str, password: &str) -> UserFields {
    let (given_name, family_name) = split_display_name(name);
    let now = now_rfc3339();
    UserFields {
        email: email.to_string(),
        password: Some(password.to_string()),
        given_name: Some(given_name),
        family_name,
        subscription_plan: Some(crate::models::SubscriptionPlan::Free),
        registration_date: Some(now.clone()),
        last_login: Some(now),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formula_escaping_neutralises_quotes_and_backslashes() {
        assert_eq!(escape_formula_text("plain@example.com"), "plain@example.com");
        assert_eq!(escape_formula_text(r#"a"b"#), r#"a\"b"#);
        assert_eq!(escape_formula_text(r"a\b"), r"a\\b");
        // A backslash-quote pair must not collapse into an unescaped quote
        assert_eq!(escape_formula_text(r#"a\"b"#), r#"a\\\"b"#);
    }

    #[test]
    fn email_filter_wraps_the_escaped_value() {
        assert_eq!(
            filter_by_email("dana@example.com"),
            r#"{email} = "dana@example.com""#
        );
        assert_eq!(
            filter_by_email(r#"x" != ""#),
            r#"{email} = "x\" != \"""#
        );
    }

    #[test]
    fn display_names_split_on_first_two_words() {
        assert_eq!(
            split_display_name("Dana Reyes"),
            ("Dana".to_string(), Some("Reyes".to_string()))
        );
        assert_eq!(split_display_name("Madonna"), ("Madonna".to_string(), None));
        assert_eq!(
            split_display_name("Mary Jane Watson"),
            ("Mary".to_string(), Some("Jane".to_string()))
        );
        assert_eq!(split_display_name("   "), (String::new(), None));
    }

    #[test]
    fn timestamps_are_rfc3339_utc_with_millis() {
        let now = now_rfc3339();
        assert!(now.ends_with('Z'), "expected UTC suffix: {now}");
        assert!(now.contains('.'), "expected millisecond precision: {now}");
        assert!(chrono::DateTime::parse_from_rfc3339(&now).is_ok());
    }

    #[test]
    fn new_user_fields_carry_exactly_the_sign_up_cells() {
        let fields = new_user_fields("Dana Reyes", "dana@example.com", "hunter2");
        assert_eq!(fields.email, "dana@example.com");
        assert_eq!(fields.password.as_deref(), Some("hunter2"));
        assert_eq!(fields.given_name.as_deref(), Some("Dana"));
        assert_eq!(fields.family_name.as_deref(), Some("Reyes"));
        assert_eq!(
            fields.subscription_plan,
            Some(crate::models::SubscriptionPlan::Free)
        );
        assert_eq!(fields.registration_date, fields.last_login);
        assert!(fields.bio.is_none());
        assert!(fields.posts.is_empty());

        // Single-word names leave the family cell unwritten
        let fields = new_user_fields("Madonna", "m@example.com", "pw");
        assert!(fields.family_name.is_none());
    }
}
