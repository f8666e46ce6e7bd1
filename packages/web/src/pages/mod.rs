//! Pages

mod register;

pub use register::*;
