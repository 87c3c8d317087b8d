use dioxus::prelude::*;

use crate::icons::{FaBell, FaGear, FaHouse, FaList, FaMessage, FaSquareCheck};
use crate::session::LogoutButton;
use crate::Icon;

const SIDEBAR_CSS: Asset = asset!("/assets/styling/sidebar.css");

/// The dashboard's icon rail tabs. Only `Home` has content today; the rest
/// are navigation affordances that highlight on selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    Home,
    Tasks,
    Lists,
    Messages,
    Notifications,
    Settings,
}

impl DashboardTab {
    const ALL: [DashboardTab; 6] = [
        DashboardTab::Home,
        DashboardTab::Tasks,
        DashboardTab::Lists,
        DashboardTab::Messages,
        DashboardTab::Notifications,
        DashboardTab::Settings,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Tasks => "Tasks",
            Self::Lists => "Lists",
            Self::Messages => "Messages",
            Self::Notifications => "Notifications",
            Self::Settings => "Settings",
        }
    }

    fn icon(self) -> Element {
        match self {
            Self::Home => rsx! { Icon { icon: FaHouse, width: 20, height: 20 } },
            Self::Tasks => rsx! { Icon { icon: FaSquareCheck, width: 20, height: 20 } },
            Self::Lists => rsx! { Icon { icon: FaList, width: 20, height: 20 } },
            Self::Messages => rsx! { Icon { icon: FaMessage, width: 20, height: 20 } },
            Self::Notifications => rsx! { Icon { icon: FaBell, width: 20, height: 20 } },
            Self::Settings => rsx! { Icon { icon: FaGear, width: 20, height: 20 } },
        }
    }
}

/// Icon rail on the left edge of the dashboard: avatar up top, one button
/// per tab, logout pinned to the bottom.
#[component]
pub fn DashboardSidebar(
    avatar_url: Option<String>,
    onlogout: EventHandler<()>,
) -> Element {
    let mut active = use_signal(|| DashboardTab::Home);

    rsx! {
        document::Stylesheet { href: SIDEBAR_CSS }

        nav {
            class: "dashboard-sidebar",

            if let Some(url) = avatar_url {
                img {
                    class: "sidebar-avatar",
                    src: "{url}",
                    alt: "Profile picture",
                }
            } else {
                div { class: "sidebar-avatar sidebar-avatar-placeholder" }
            }

            div {
                class: "sidebar-tabs",
                for tab in DashboardTab::ALL {
                    button {
                        class: if active() == tab { "sidebar-tab active" } else { "sidebar-tab" },
                        title: tab.label(),
                        onclick: move |_| active.set(tab),
                        {tab.icon()}
                    }
                }
            }

            LogoutButton { class: "sidebar-tab sidebar-logout", onlogout }
        }
    }
}
