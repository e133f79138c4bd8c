#![allow(non_snake_case)]
use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div { class: "loading",
            div { class: "loading-spinner", "data-testid": "loading-spinner" }
            p { class: "loading-text", "Loading charts..." }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_renders_loading_text() {
        let mut dom = VirtualDom::new(LoadingSpinner);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("Loading charts..."));
        assert!(html.contains("data-testid=\"loading-spinner\""));
    }
}
