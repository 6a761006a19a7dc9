use dioxus::prelude::*;
use crate::utils::dom::focus_anchor_target;

/// In-page link that also hands keyboard focus to its target section.
#[component]
pub fn AnchorLink(href: String, #[props(default)] class: String, children: Element) -> Element {
    let target = href.clone();

    rsx! {
        a {
            class: class,
            href: "{href}",
            onclick: move |_| {
                if let Err(e) = focus_anchor_target(&target) {
                    log::warn!("Could not focus {}: {}", target, e);
                }
            },
            {children}
        }
    }
}
