use dioxus::prelude::*;

use crate::icons::FaPlus;
use crate::Icon;

const DASHBOARD_CSS: Asset = asset!("/assets/styling/dashboard.css");

pub(crate) struct Skill {
    pub name: &'static str,
    pub percentage: u32,
    pub color: &'static str,
}

/// Fixture skill levels; the same palette feeds the activity legend.
pub(crate) const SKILLS: [Skill; 5] = [
    Skill {
        name: "UX Design",
        percentage: 99,
        color: "#38a169",
    },
    Skill {
        name: "UI Design",
        percentage: 100,
        color: "#d69e2e",
    },
    Skill {
        name: "Animation",
        percentage: 99,
        color: "#3182ce",
    },
    Skill {
        name: "Illustration",
        percentage: 79,
        color: "#dd6b20",
    },
    Skill {
        name: "Logo Design",
        percentage: 75,
        color: "#d53f8c",
    },
];

/// "Top Skills" card: one progress bar per skill.
#[component]
pub fn SkillsPanel() -> Element {
    rsx! {
        document::Stylesheet { href: DASHBOARD_CSS }

        div {
            class: "card skills-panel",
            div {
                class: "card-header",
                h3 { "Top Skills" }
                button {
                    class: "icon-button",
                    title: "Add skill",
                    Icon { icon: FaPlus, width: 14, height: 14 }
                }
            }
            div {
                class: "skill-rows",
                for skill in &SKILLS {
                    div {
                        class: "skill-row",
                        div {
                            class: "skill-line",
                            span { class: "skill-name", "{skill.name}" }
                            span { class: "skill-value", "{skill.percentage}%" }
                        }
                        div {
                            class: "skill-track",
                            div {
                                class: "skill-fill",
                                style: "width: {skill.percentage}%; background: {skill.color};",
                            }
                        }
                    }
                }
            }
        }
    }
}
