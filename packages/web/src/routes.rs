//! Route definitions for the application

use dioxus::prelude::*;

use crate::pages::Register;

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Register {},
}
