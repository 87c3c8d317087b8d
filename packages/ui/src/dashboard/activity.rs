use dioxus::prelude::*;

use crate::dashboard::skills::SKILLS;
use crate::icons::{FaChevronLeft, FaChevronRight};
use crate::Icon;

const DASHBOARD_CSS: Asset = asset!("/assets/styling/dashboard.css");

/// "Weekly Activity" card. The chart itself is still a placeholder; the
/// legend reuses the skill palette.
#[component]
pub fn WeeklyActivity() -> Element {
    rsx! {
        document::Stylesheet { href: DASHBOARD_CSS }

        div {
            class: "card weekly-activity",
            div {
                class: "card-header",
                h3 { "Weekly Activity" }
                div {
                    class: "activity-range",
                    button {
                        class: "icon-button",
                        title: "Previous week",
                        Icon { icon: FaChevronLeft, width: 12, height: 12 }
                    }
                    span { class: "activity-dates", "FEBRUARY 23 - 29th" }
                    button {
                        class: "icon-button",
                        title: "Next week",
                        Icon { icon: FaChevronRight, width: 12, height: 12 }
                    }
                }
            }
            div {
                class: "activity-chart",
                "Weekly activity chart goes here"
            }
            div {
                class: "activity-legend",
                for skill in &SKILLS {
                    span {
                        class: "legend-entry",
                        span {
                            class: "legend-dot",
                            style: "background: {skill.color};",
                        }
                        "{skill.name}"
                    }
                }
            }
        }
    }
}
