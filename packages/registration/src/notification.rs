//! Toast notifications

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastIcon {
    Error,
    Success,
}

impl ToastIcon {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastIcon::Error => "\u{2716}",   // ✖
            ToastIcon::Success => "\u{2714}", // ✔
        }
    }
}

/// Screen anchor a notifier shows its toasts at
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ToastPosition {
    #[default]
    TopEnd,
}

impl ToastPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastPosition::TopEnd => "top-end",
        }
    }
}

/// A transient, non-blocking message
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub icon: ToastIcon,
    pub title: String,
}

impl Toast {
    pub fn error(title: impl Into<String>) -> Self {
        Self {
            icon: ToastIcon::Error,
            title: title.into(),
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self {
            icon: ToastIcon::Success,
            title: title.into(),
        }
    }
}

/// Surface that displays toasts.
///
/// Implementations live on the UI thread, so no `Send`/`Sync` bound.
pub trait Notifier {
    fn fire(&self, toast: Toast);
}
