//! # Email/password authentication against the user table
//!
//! No hashing and no tokens: the table stores passwords in a plaintext
//! column (inherited from the existing base), login is a string comparison
//! against it, and the only session artifact is the email marker the caller
//! persists after a success.
//!
//! Both flows work over any [`UserStore`], so tests run them against the
//! in-memory table.

use crate::models::UserProfile;
use crate::store::{StoreError, UserStore};

/// Why a login or sign-up was rejected.
///
/// "No such account" and "remote call failed" stay distinct variants even
/// though the login form renders both behind the same generic message —
/// callers that want to tell them apart can.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No record carries this email.
    #[error("No account found for this email")]
    NotFound,
    /// The record exists but the password cell does not match.
    #[error("Invalid email or password")]
    InvalidCredentials,
    /// Sign-up with an email that already has a record.
    #[error("An account with this email already exists")]
    EmailTaken,
    /// Sign-up form data rejected before any remote call.
    #[error("{0}")]
    Invalid(String),
    /// The user table itself failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Check an email/password pair against the user table.
///
/// The email is looked up exactly as typed; a record whose password cell is
/// empty can never authenticate.
pub async fn authenticate<S: UserStore>(
    users: &S,
    email: &str,
    password: &str,
) -> Result<UserProfile, AuthError> {
    let Some(record) = users.find_by_email(email).await? else {
        return Err(AuthError::NotFound);
    };

    if record.fields.password.as_deref() != Some(password) {
        return Err(AuthError::InvalidCredentials);
    }

    Ok(record.to_profile())
}

/// Create an account from the sign-up form.
///
/// The email is trimmed and lowercased before the duplicate check and the
/// insert, so the table never ends up with case-variant duplicates.
pub async fn sign_up<S: UserStore>(
    users: &S,
    name: &str,
    email: &str,
    password: &str,
) -> Result<UserProfile, AuthError> {
    let name = name.trim();
    let email = email.trim().to_lowercase();

    if name.is_empty() {
        return Err(AuthError::Invalid("Name is required".to_string()));
    }
    if email.is_empty() || !email.contains('@') {
        return Err(AuthError::Invalid("Invalid email address".to_string()));
    }
    if password.is_empty() {
        return Err(AuthError::Invalid("Password is required".to_string()));
    }

    if users.find_by_email(&email).await?.is_some() {
        return Err(AuthError::EmailTaken);
    }

    let record = users.create_user(name, &email, password).await?;
    Ok(record.to_profile())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRecord;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn authenticate_accepts_the_stored_password() {
        let users = MemoryStore::new();
        users
            .create_user("Dana Reyes", "dana@example.com", "hunter2")
            .await
            .unwrap();

        let profile = authenticate(&users, "dana@example.com", "hunter2")
            .await
            .unwrap();
        assert_eq!(profile.given_name, "Dana");
        assert_eq!(profile.email, "dana@example.com");

        // Login never writes back to the table
        assert_eq!(users.last_login_patches(), 0);
    }

    #[tokio::test]
    async fn authenticate_rejects_a_wrong_password() {
        let users = MemoryStore::new();
        users
            .create_user("Dana Reyes", "dana@example.com", "hunter2")
            .await
            .unwrap();

        let result = authenticate(&users, "dana@example.com", "wrong").await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
        assert_eq!(users.last_login_patches(), 0);
    }

    #[tokio::test]
    async fn authenticate_rejects_an_unknown_email() {
        let users = MemoryStore::new();
        let result = authenticate(&users, "ghost@example.com", "pw").await;
        assert!(matches!(result, Err(AuthError::NotFound)));
    }

    /// Store whose records have no password cell, like a hand-entered row.
    #[derive(Clone)]
    struct PasswordlessStore;

    impl UserStore for PasswordlessStore {
        async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
            let mut record = UserRecord {
                id: "rec1".to_string(),
                ..Default::default()
            };
            record.fields.email = email.to_string();
            Ok(Some(record))
        }

        async fn create_user(
            &self,
            _name: &str,
            _email: &str,
            _password: &str,
        ) -> Result<UserRecord, StoreError> {
            unreachable!("authenticate never creates records")
        }

        async fn touch_last_login(&self, _record_id: &str) -> Result<(), StoreError> {
            unreachable!("authenticate never patches records")
        }
    }

    #[tokio::test]
    async fn records_without_a_password_cell_cannot_log_in() {
        let result = authenticate(&PasswordlessStore, "dana@example.com", "hunter2").await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));

        // Not even with an empty password guess
        let result = authenticate(&PasswordlessStore, "dana@example.com", "").await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn sign_up_normalises_the_email_and_returns_a_profile() {
        let users = MemoryStore::new();
        let profile = sign_up(&users, "Dana Reyes", "  Dana@Example.COM ", "hunter2")
            .await
            .unwrap();

        assert_eq!(profile.email, "dana@example.com");
        assert_eq!(profile.display_name(), "Dana Reyes");
        assert!(users
            .find_by_email("dana@example.com")
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn sign_up_refuses_duplicate_emails() {
        let users = MemoryStore::new();
        sign_up(&users, "Dana Reyes", "dana@example.com", "hunter2")
            .await
            .unwrap();

        let result = sign_up(&users, "Other Dana", "Dana@Example.com", "pw").await;
        assert!(matches!(result, Err(AuthError::EmailTaken)));
    }

    #[tokio::test]
    async fn sign_up_validates_the_form_before_any_remote_call() {
        let users = MemoryStore::new();

        let result = sign_up(&users, "  ", "dana@example.com", "pw").await;
        assert!(matches!(result, Err(AuthError::Invalid(_))));

        let result = sign_up(&users, "Dana", "not-an-email", "pw").await;
        assert!(matches!(result, Err(AuthError::Invalid(_))));

        let result = sign_up(&users, "Dana", "dana@example.com", "").await;
        assert!(matches!(result, Err(AuthError::Invalid(_))));

        // Nothing was inserted by the rejected attempts
        assert!(users
            .find_by_email("dana@example.com")
            .await
            .unwrap()
            .is_none());
    }
}
