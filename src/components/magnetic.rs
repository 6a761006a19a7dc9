use std::rc::Rc;
use dioxus::prelude::*;
use crate::utils::dom::focus_anchor_target;
use crate::utils::motion::{ magnetic_transform, Bounds, MotionStyle };

/// Call-to-action link whose label drifts toward the pointer.
#[component]
pub fn MagneticButton(href: String, label: String, #[props(default)] primary: bool) -> Element {
    let mut node = use_signal(|| None::<Rc<MountedData>>);
    let mut style = use_signal(MotionStyle::default);
    let target = href.clone();

    rsx! {
        a {
            class: if primary { "btn btn-primary magnetic" } else { "btn magnetic" },
            href: "{href}",
            onmounted: move |evt: MountedEvent| node.set(Some(evt.data())),
            // Bounds are read on every move so a scroll under a resting pointer
            // never leaves them stale.
            onmousemove: move |evt: MouseEvent| async move {
                let point = evt.client_coordinates();
                let Some(node) = node() else {
                    return;
                };
                match node.get_client_rect().await {
                    Ok(rect) => {
                        style.write().transform = Some(
                            magnetic_transform(point.x, point.y, Bounds::from(rect))
                        );
                    }
                    Err(e) => log::debug!("Could not measure button: {:?}", e),
                }
            },
            onmouseleave: move |_| style.write().magnetic_leave(),
            onclick: move |_| {
                if let Err(e) = focus_anchor_target(&target) {
                    log::warn!("Could not focus {}: {}", target, e);
                }
            },
            span { style: "{style}", "{label}" }
        }
    }
}
