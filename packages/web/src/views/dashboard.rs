//! Signed-in dashboard view.
//!
//! The session marker is resolved exactly once, on mount. Until then the
//! view shows "Loading..."; a missing marker, a missing record, or a failed
//! lookup all land on the same empty state.

use api::dashboard::DashboardState;
use dioxus::prelude::*;
use ui::{CalendarCard, DashboardSidebar, ProfileCard, SkillsPanel, TaskList, WeeklyActivity};

use crate::Route;

const DASHBOARD_CSS: Asset = asset!("/assets/styling/dashboard.css");

#[component]
pub fn Dashboard() -> Element {
    let nav = use_navigator();
    let mut state = use_signal(|| DashboardState::Loading);

    let _loader = use_resource(move || async move {
        let session = ui::make_session();
        let users = ui::make_users();
        let load = api::dashboard::load(&session, &users).await;

        state.set(load.state);

        // Deferred last-login write, once the profile is already showing.
        // A failure only logs; it never disturbs the rendered state.
        if let Some(patch) = load.patch {
            if let Err(e) = patch.run().await {
                tracing::warn!("last-login update failed: {e}");
            }
        }
    });

    let body = match state() {
        DashboardState::Loading => rsx! {
            div { class: "dashboard-status", "Loading..." }
        },
        DashboardState::Empty => rsx! {
            div { class: "dashboard-status", "No user data available." }
        },
        DashboardState::Loaded(profile) => rsx! {
            div {
                class: "dashboard",
                DashboardSidebar {
                    avatar_url: profile.profile_picture_url.clone(),
                    onlogout: move |_| {
                        nav.replace(Route::Login {});
                    },
                }
                main {
                    class: "dashboard-main",
                    header {
                        class: "dashboard-header",
                        div {
                            h1 { class: "dashboard-greeting", "{profile.display_name()}" }
                            p { class: "dashboard-tier", "{profile.plan.label()}" }
                        }
                        if !profile.plan.is_premium() {
                            button { class: "upgrade-button", "Upgrade to Pro" }
                        }
                    }
                    div {
                        class: "dashboard-row",
                        TaskList {}
                        SkillsPanel {}
                    }
                    div {
                        class: "dashboard-row",
                        ProfileCard { profile: profile.clone() }
                        CalendarCard {}
                    }
                    WeeklyActivity {}
                }
            }
        },
    };

    rsx! {
        document::Stylesheet { href: DASHBOARD_CSS }
        {body}
    }
}
