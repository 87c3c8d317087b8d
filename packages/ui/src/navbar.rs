use dioxus::prelude::*;

use crate::icons::FaGlobe;
use crate::Icon;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Top navigation bar: brand on the left, caller-supplied links on the
/// right (the landing page passes its Login / Sign Up links in).
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Stylesheet { href: NAVBAR_CSS }

        header {
            class: "navbar",
            div {
                class: "navbar-brand",
                Icon { icon: FaGlobe, width: 28, height: 28, fill: "#2b6cb0" }
                span { class: "navbar-name", "Ultimate Social Suite" }
            }
            nav {
                class: "navbar-links",
                {children}
            }
        }
    }
}
