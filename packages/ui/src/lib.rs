//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}
pub mod brand_icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::*;
}

pub const UI_CSS: Asset = asset!("/assets/ui.css");

mod session;
pub use self::session::{
    begin_session, end_session, use_session, LogoutButton, SessionProvider, SessionState,
};

mod stores;
pub use stores::{make_session, make_users};

mod navbar;
pub use navbar::Navbar;

mod hero;
pub use hero::Hero;

mod features;
pub use features::Features;

mod footer;
pub use footer::Footer;

pub mod dashboard;
pub use dashboard::{
    CalendarCard, DashboardSidebar, ProfileCard, SkillsPanel, TaskList, WeeklyActivity,
};
