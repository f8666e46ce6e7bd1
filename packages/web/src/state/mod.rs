//! Global state management

use dioxus::prelude::*;
use registration_core::config::DEFAULT_TOAST_DURATION_MS;
use registration_core::{Notifier, Toast, ToastPosition};

use crate::server_fns::toast_duration;

/// A toast currently on screen
#[derive(Clone, Debug, PartialEq)]
pub struct ShownToast {
    pub id: u64,
    pub toast: Toast,
}

/// Toast surface shared by every page.
///
/// Shows one toast at a time; a new toast replaces the current one.
#[derive(Clone, Copy)]
pub struct ToastState {
    pub current: Signal<Option<ShownToast>>,
    pub duration_ms: Signal<u32>,
    pub position: ToastPosition,
    next_id: Signal<u64>,
}

impl ToastState {
    /// Remove the toast if it is still the one on screen.
    pub fn dismiss(&self, id: u64) {
        let mut current = self.current;
        let still_shown = current.peek().as_ref().map(|shown| shown.id) == Some(id);
        if still_shown {
            current.set(None);
        }
    }
}

impl Notifier for ToastState {
    fn fire(&self, toast: Toast) {
        let mut next_id = self.next_id;
        let mut current = self.current;

        let id = *next_id.peek() + 1;
        next_id.set(id);
        current.set(Some(ShownToast { id, toast }));
    }
}

/// Toast provider component that wraps the app
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let current = use_signal(|| None::<ShownToast>);
    let mut duration_ms = use_signal(|| DEFAULT_TOAST_DURATION_MS);
    let next_id = use_signal(|| 0u64);

    use_context_provider(|| ToastState {
        current,
        duration_ms,
        position: ToastPosition::TopEnd,
        next_id,
    });

    // Load the configured duration
    use_effect(move || {
        spawn(async move {
            if let Ok(ms) = toast_duration().await {
                duration_ms.set(ms);
            }
        });
    });

    children
}

/// Hook to access the toast surface
pub fn use_toasts() -> ToastState {
    use_context::<ToastState>()
}
