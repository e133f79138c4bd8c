// Landing screen: title, subtitle and the button into the dashboard
#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::app::Route;
use crate::config::AppConfig;

/// Where the landing button leads.
pub(crate) fn next_route() -> Route {
    Route::Dashboard {}
}

#[component]
pub fn Landing() -> Element {
    let config = use_context::<AppConfig>();
    let navigator = use_navigator();
    let landing = config.app.landing;

    rsx! {
        div { class: "landing",
            div { class: "landing-content",
                h1 { class: "landing-title", "{landing.title}" }
                p { class: "landing-subtitle", "{landing.subtitle}" }
                button {
                    class: "landing-button",
                    onclick: move |_| {
                        tracing::debug!(route = %next_route(), "Navigating from landing");
                        navigator.push(next_route());
                    },
                    "{landing.button_label}"
                }
            }
        }
    }
}
