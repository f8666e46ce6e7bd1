//! Toast notifications

use dioxus::prelude::*;
use registration_core::{ToastIcon, ToastPosition};

use crate::state::use_toasts;

/// Renders the current toast at the configured anchor and dismisses it
/// once its duration has elapsed.
#[component]
pub fn ToastView() -> Element {
    let toasts = use_toasts();

    use_effect(move || {
        if let Some(shown) = (toasts.current)() {
            let duration = *toasts.duration_ms.peek();
            spawn(async move {
                #[cfg(feature = "web")]
                gloo_timers::future::TimeoutFuture::new(duration).await;
                #[cfg(not(feature = "web"))]
                let _ = duration;

                toasts.dismiss(shown.id);
            });
        }
    });

    let anchor = match toasts.position {
        ToastPosition::TopEnd => "top-4 right-4",
    };

    let Some(shown) = (toasts.current)() else {
        return rsx! {};
    };

    let (accent, icon_color) = match shown.toast.icon {
        ToastIcon::Error => ("border-red-200", "text-red-600"),
        ToastIcon::Success => ("border-green-200", "text-green-600"),
    };

    rsx! {
        div {
            class: "fixed {anchor} z-50 max-w-sm bg-white border {accent} rounded-lg shadow-lg px-4 py-3 flex items-start gap-3",
            role: "status",
            "data-position": toasts.position.as_str(),
            span { class: "text-lg {icon_color}", "{shown.toast.icon.icon()}" }
            p { class: "text-sm text-gray-800", "{shown.toast.title}" }
            button {
                r#type: "button",
                class: "ml-2 text-gray-400 hover:text-gray-600",
                onclick: move |_| toasts.dismiss(shown.id),
                "\u{00D7}"
            }
        }
    }
}
