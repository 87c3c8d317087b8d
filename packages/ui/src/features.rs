use dioxus::prelude::*;

use crate::icons::{FaCalendar, FaChartColumn, FaGlobe};
use crate::Icon;

const FEATURES_CSS: Asset = asset!("/assets/styling/landing.css");

/// The three feature cards of the landing page.
#[component]
pub fn Features() -> Element {
    rsx! {
        document::Stylesheet { href: FEATURES_CSS }

        section {
            class: "features",
            h2 { class: "features-title", "Key Features" }
            div {
                class: "feature-grid",
                FeatureCard {
                    title: "Automated Scheduling",
                    blurb: "Plan and schedule your posts across multiple platforms with ease.",
                    icon: rsx! { Icon { icon: FaCalendar, width: 32, height: 32, fill: "#2b6cb0" } },
                }
                FeatureCard {
                    title: "Analytics Dashboard",
                    blurb: "Get insights into your social media performance with our comprehensive analytics.",
                    icon: rsx! { Icon { icon: FaChartColumn, width: 32, height: 32, fill: "#2b6cb0" } },
                }
                FeatureCard {
                    title: "Multi-Platform Support",
                    blurb: "Manage all your social media accounts from a single, intuitive dashboard.",
                    icon: rsx! { Icon { icon: FaGlobe, width: 32, height: 32, fill: "#2b6cb0" } },
                }
            }
        }
    }
}

#[component]
fn FeatureCard(title: String, blurb: String, icon: Element) -> Element {
    rsx! {
        div {
            class: "feature-card",
            div { class: "feature-icon", {icon} }
            h3 { class: "feature-name", "{title}" }
            p { class: "feature-blurb", "{blurb}" }
        }
    }
}
