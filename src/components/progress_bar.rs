use std::rc::Rc;
use dioxus::prelude::*;
use crate::utils::dom::{ current_scroll_percent, WindowListener };

fn refresh(mut percent: Signal<f64>) {
    match current_scroll_percent() {
        Ok(value) => percent.set(value),
        Err(e) => log::debug!("Scroll progress unavailable: {}", e),
    }
}

/// Thin bar across the top of the page tracking reading progress.
#[component]
pub fn ProgressBar() -> Element {
    let percent = use_signal(|| 0.0_f64);

    use_hook(move || {
        match WindowListener::passive("scroll", move || refresh(percent)) {
            Ok(listener) => Some(Rc::new(listener)),
            Err(e) => {
                log::warn!("Scroll progress disabled: {}", e);
                None
            }
        }
    });
    use_effect(move || refresh(percent));

    rsx! {
        div { class: "progress", "aria-hidden": "true",
            div { class: "progress-bar", style: "width: {percent}%" }
        }
    }
}
