use dioxus::prelude::*;

use crate::icons::FaArrowRight;
use crate::Icon;

const HERO_CSS: Asset = asset!("/assets/styling/landing.css");

/// Landing hero: headline, pitch, and the sign-up call to action.
#[component]
pub fn Hero(on_get_started: EventHandler<()>) -> Element {
    rsx! {
        document::Stylesheet { href: HERO_CSS }

        section {
            class: "hero",
            h1 {
                class: "hero-title",
                span { "Simplify Your" }
                span { class: "hero-title-accent", "Social Media Management" }
            }
            p {
                class: "hero-subtitle",
                "Ultimate Social Suite helps you streamline your social media presence "
                "across multiple platforms, saving you time and boosting your engagement."
            }
            button {
                class: "hero-cta",
                onclick: move |_| on_get_started.call(()),
                "Get started"
                Icon { icon: FaArrowRight, width: 16, height: 16 }
            }
        }
    }
}
