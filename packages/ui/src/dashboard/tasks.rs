use dioxus::prelude::*;

const DASHBOARD_CSS: Asset = asset!("/assets/styling/dashboard.css");

pub(crate) struct Task {
    pub title: &'static str,
    pub time: &'static str,
    pub kind: &'static str,
}

/// Placeholder schedule shown until real post scheduling lands.
pub(crate) const TASKS: [Task; 3] = [
    Task {
        title: "UX/UI Design",
        time: "10:00",
        kind: "App Design",
    },
    Task {
        title: "Research & Optimisation",
        time: "16:00",
        kind: "R&D Design",
    },
    Task {
        title: "Design Team Meeting",
        time: "18:00",
        kind: "Design Process",
    },
];

/// "Task Lists" card with the day's fixture entries.
#[component]
pub fn TaskList() -> Element {
    rsx! {
        document::Stylesheet { href: DASHBOARD_CSS }

        div {
            class: "card task-list",
            div {
                class: "card-header",
                h3 { "Task Lists" }
                span { class: "card-subtitle", "February 5th" }
            }
            ul {
                class: "task-items",
                for task in &TASKS {
                    li {
                        class: "task-item",
                        span { class: "task-glyph", "\u{2699}" }
                        div {
                            class: "task-text",
                            span { class: "task-title", "{task.title}" }
                            span { class: "task-meta", "{task.time} - {task.kind}" }
                        }
                    }
                }
            }
        }
    }
}
