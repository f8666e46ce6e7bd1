//! Reusable UI components

mod field_input;
mod toast;

pub use field_input::*;
pub use toast::*;
