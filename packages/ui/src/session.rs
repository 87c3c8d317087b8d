//! Session context and hooks for the UI.

use dioxus::prelude::*;

use crate::icons::FaRightFromBracket;
use crate::Icon;

/// Login-session state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    /// Email of the signed-in user, if any.
    pub email: Option<String>,
    /// True until the persisted marker has been read once.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            email: None,
            loading: true,
        }
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that manages session state.
/// Wrap your app with this component so views can call [`use_session`].
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut state = use_signal(SessionState::default);

    // Read the persisted marker once on mount
    use_effect(move || {
        let email = crate::make_session().current_email();
        if let Some(email) = &email {
            tracing::debug!("restored session for {email}");
        }
        state.set(SessionState {
            email,
            loading: false,
        });
    });

    use_context_provider(|| state);

    rsx! {
        {children}
    }
}

/// Persist the marker and flip the in-memory state. Call on login or
/// sign-up success.
pub fn begin_session(state: &mut Signal<SessionState>, email: &str) {
    crate::make_session().begin(email);
    state.set(SessionState {
        email: Some(email.to_string()),
        loading: false,
    });
}

/// Remove the marker and clear the in-memory state. Call on logout.
pub fn end_session(state: &mut Signal<SessionState>) {
    crate::make_session().end();
    state.set(SessionState {
        email: None,
        loading: false,
    });
}

/// Button that signs the user out, then hands navigation to the caller.
#[component]
pub fn LogoutButton(
    #[props(default = "".to_string())] class: String,
    onlogout: EventHandler<()>,
) -> Element {
    let mut state = use_session();

    rsx! {
        button {
            class: "{class}",
            title: "Log out",
            onclick: move |_| {
                end_session(&mut state);
                onlogout.call(());
            },
            Icon { icon: FaRightFromBracket, width: 20, height: 20 }
        }
    }
}
