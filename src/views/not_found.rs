use dioxus::prelude::*;
use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    log::warn!("No page at /{}", path);

    rsx! {
        section { class: "container not-found",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { class: "btn", to: Route::Home, "Back to the portfolio" }
        }
    }
}
