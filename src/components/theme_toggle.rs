use dioxus::prelude::*;
use crate::utils::{ LocalStore, ThemeState };

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_context::<Signal<ThemeState>>();

    rsx! {
        button {
            id: "theme-toggle",
            class: "theme-toggle",
            r#type: "button",
            "aria-label": "Toggle color theme",
            onclick: move |_| {
                let next = theme.write().toggle(&LocalStore::open());
                log::info!("Theme switched to {}", next);
            },
            span { class: "theme-icon", {theme().theme.icon()} }
        }
    }
}
