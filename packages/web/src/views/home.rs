//! Marketing landing page.

use dioxus::prelude::*;
use ui::{Features, Footer, Hero, Navbar};

use crate::Route;

const HOME_CSS: Asset = asset!("/assets/styling/home.css");

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        document::Stylesheet { href: HOME_CSS }

        div {
            class: "landing",
            Navbar {
                Link { class: "navbar-link", to: Route::Login {}, "Login" }
                Link { class: "navbar-link navbar-cta", to: Route::SignUp {}, "Sign Up" }
            }
            Hero {
                on_get_started: move |_| {
                    nav.push(Route::SignUp {});
                },
            }
            Features {}
            Footer {}
        }
    }
}
