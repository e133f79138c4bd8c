#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::views::{Dashboard, Landing};

#[derive(Routable, Clone, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/dashboard")]
    Dashboard {},
}

#[component]
pub fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}
