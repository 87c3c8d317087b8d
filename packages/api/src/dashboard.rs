//! # Dashboard load flow — session marker to displayed profile
//!
//! [`load`] resolves the persisted session marker into what the dashboard
//! should show. The outcome is always a terminal [`DashboardState`]; the
//! `Loading` variant exists for the view's first paint, never as a result.
//!
//! | Situation | Result | Logged |
//! |-----------|--------|--------|
//! | No session marker | `Empty`, **no remote call made** | — |
//! | Marker, record found | `Loaded(profile)` + a [`LastLoginPatch`] | — |
//! | Marker, no matching record | `Empty` | warn |
//! | Marker, remote call failed | `Empty` | error |
//!
//! ## The last-login patch
//!
//! A successful load also hands back a single [`LastLoginPatch`]. The view
//! runs it *after* the profile is already on screen; its result never feeds
//! back into the displayed state, and running it consumes it, so one load
//! can only ever produce one write.

use session::{Session, SessionStore};

use crate::models::UserProfile;
use crate::store::{StoreError, UserStore};

/// What the dashboard shows.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    /// First paint, before [`load`] resolves.
    Loading,
    /// A signed-in user with a matching record.
    Loaded(UserProfile),
    /// No session, no matching record, or the lookup failed.
    Empty,
}

/// Result of [`load`]: the state to display plus the deferred write.
pub struct DashboardLoad<S: UserStore> {
    pub state: DashboardState,
    pub patch: Option<LastLoginPatch<S>>,
}

/// One-shot deferred write of the user's `last_login` cell.
pub struct LastLoginPatch<S: UserStore> {
    store: S,
    record_id: String,
}

impl<S: UserStore> LastLoginPatch<S> {
    pub fn record_id(&self) -> &str {
        &self.record_id
    }

    /// Write `last_login = now`. Consumes the patch: it cannot run twice.
    pub async fn run(self) -> Result<(), StoreError> {
        self.store.touch_last_login(&self.record_id).await
    }
}

/// Resolve the session marker into a dashboard state.
///
/// Failures never escape: a broken lookup is logged and collapses to
/// [`DashboardState::Empty`], exactly like a missing user.
pub async fn load<St: SessionStore, S: UserStore + Clone>(
    session: &Session<St>,
    users: &S,
) -> DashboardLoad<S> {
    let Some(email) = session.current_email() else {
        return DashboardLoad {
            state: DashboardState::Empty,
            patch: None,
        };
    };

    match users.find_by_email(&email).await {
        Ok(Some(record)) => DashboardLoad {
            patch: Some(LastLoginPatch {
                store: users.clone(),
                record_id: record.id.clone(),
            }),
            state: DashboardState::Loaded(record.to_profile()),
        },
        Ok(None) => {
            tracing::warn!("no user record matches the session marker {email}");
            DashboardLoad {
                state: DashboardState::Empty,
                patch: None,
            }
        }
        Err(e) => {
            tracing::error!("dashboard user lookup failed: {e}");
            DashboardLoad {
                state: DashboardState::Empty,
                patch: None,
            }
        }
    }
}
