//! Login page view with the email/password form.

use dioxus::prelude::*;
use ui::{begin_session, use_session};

use crate::Route;

const AUTH_CSS: Asset = asset!("/assets/styling/auth.css");

#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in: straight to the dashboard
    if !session().loading && session().email.is_some() {
        nav.replace(Route::Dashboard {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() {
                error.set(Some("Please enter your email".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Please enter your password".to_string()));
                return;
            }

            loading.set(true);
            let users = ui::make_users();
            match api::auth::authenticate(&users, &e, &p).await {
                Ok(profile) => {
                    begin_session(&mut session, &profile.email);
                    nav.replace(Route::Dashboard {});
                }
                Err(
                    err @ (api::auth::AuthError::NotFound
                    | api::auth::AuthError::InvalidCredentials),
                ) => {
                    // Wrong email and wrong password read the same on purpose
                    tracing::debug!("login rejected: {err}");
                    loading.set(false);
                    error.set(Some("Invalid email or password".to_string()));
                }
                Err(err) => {
                    tracing::error!("login failed: {err}");
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        document::Stylesheet { href: AUTH_CSS }

        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 { class: "auth-title", "Welcome back" }
                p { class: "auth-subtitle", "Log in to Ultimate Social Suite" }

                form {
                    class: "auth-form",
                    onsubmit: handle_login,

                    if let Some(err) = error() {
                        div { class: "auth-error", "{err}" }
                    }

                    input {
                        class: "auth-input",
                        r#type: "email",
                        placeholder: "Email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }

                    input {
                        class: "auth-input",
                        r#type: "password",
                        placeholder: "Password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    button {
                        class: "auth-submit",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Logging in..." } else { "Login" }
                    }
                }

                p {
                    class: "auth-switch",
                    "Don't have an account? "
                    Link { to: Route::SignUp {}, "Sign up" }
                }
            }
        }
    }
}
