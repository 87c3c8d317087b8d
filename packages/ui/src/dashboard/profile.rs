use api::UserProfile;
use dioxus::prelude::*;

use crate::brand_icons::{FaFacebook, FaInstagram, FaTwitter};
use crate::Icon;

const DASHBOARD_CSS: Asset = asset!("/assets/styling/dashboard.css");

/// Profile card: bio, social handles, post/analytics counts, and the raw
/// timestamp cells. Dates render exactly as stored — nothing validates or
/// reformats them.
#[component]
pub fn ProfileCard(profile: UserProfile) -> Element {
    rsx! {
        document::Stylesheet { href: DASHBOARD_CSS }

        div {
            class: "card profile-card",
            div {
                class: "card-header",
                h3 { "Profile" }
            }

            if !profile.bio.is_empty() {
                p { class: "profile-bio", "{profile.bio}" }
            }

            div {
                class: "profile-socials",
                if !profile.twitter_handle.is_empty() {
                    span {
                        class: "profile-social",
                        Icon { icon: FaTwitter, width: 16, height: 16, fill: "#1da1f2" }
                        "{profile.twitter_handle}"
                    }
                }
                if !profile.facebook_handle.is_empty() {
                    span {
                        class: "profile-social",
                        Icon { icon: FaFacebook, width: 16, height: 16, fill: "#1877f2" }
                        "{profile.facebook_handle}"
                    }
                }
                if !profile.instagram_handle.is_empty() {
                    span {
                        class: "profile-social",
                        Icon { icon: FaInstagram, width: 16, height: 16, fill: "#e1306c" }
                        "{profile.instagram_handle}"
                    }
                }
            }

            div {
                class: "profile-stats",
                div {
                    class: "profile-stat",
                    span { class: "profile-stat-value", "{profile.posts}" }
                    span { class: "profile-stat-label", "Posts" }
                }
                div {
                    class: "profile-stat",
                    span { class: "profile-stat-value", "{profile.analytics}" }
                    span { class: "profile-stat-label", "Analytics" }
                }
            }

            div {
                class: "profile-dates",
                if !profile.registration_date.is_empty() {
                    p { class: "profile-date", "Member since {profile.registration_date}" }
                }
                if !profile.last_login.is_empty() {
                    p { class: "profile-date", "Last login {profile.last_login}" }
                }
            }
        }
    }
}
