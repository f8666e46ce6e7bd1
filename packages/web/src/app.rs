//! Root application component

use dioxus::prelude::*;

use crate::components::ToastView;
use crate::routes::Route;
use crate::state::ToastProvider;

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/tailwind.css") }

        // Toast context wraps the page container
        ToastProvider {
            div {
                id: "page",
                Router::<Route> {}
            }
            ToastView {}
        }
    }
}
