//! Domain objects built from a valid form

mod address;
mod member;

pub use address::*;
pub use member::*;
