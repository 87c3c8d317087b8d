use dioxus::prelude::*;

use crate::icons::FaGlobe;
use crate::Icon;

const FOOTER_CSS: Asset = asset!("/assets/styling/landing.css");

/// Landing page footer with the static company links.
#[component]
pub fn Footer() -> Element {
    rsx! {
        document::Stylesheet { href: FOOTER_CSS }

        footer {
            class: "footer",
            div {
                class: "footer-brand",
                Icon { icon: FaGlobe, width: 22, height: 22 }
                span { "Ultimate Social Suite" }
            }
            nav {
                class: "footer-links",
                a { href: "#", "About" }
                a { href: "#", "Privacy" }
                a { href: "#", "Terms" }
            }
            p {
                class: "footer-copyright",
                "© 2024 Ultimate Social Suite. All rights reserved."
            }
        }
    }
}
