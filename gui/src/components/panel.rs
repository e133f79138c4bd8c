#![allow(non_snake_case)]
use dioxus::prelude::*;

/// White card with a heading, wrapping one chart.
#[component]
pub fn ChartPanel(title: String, children: Element) -> Element {
    rsx! {
        div { class: "chart-panel",
            h2 { class: "chart-title", "{title}" }
            div { class: "chart-body", {children} }
        }
    }
}
