use std::rc::Rc;
use dioxus::prelude::*;
use crate::utils::motion::{ tilt_transform, Bounds, MotionStyle };

/// Card that tilts in 3D toward the pointer.
#[component]
pub fn TiltCard(#[props(default)] class: String, children: Element) -> Element {
    let mut node = use_signal(|| None::<Rc<MountedData>>);
    let mut bounds = use_signal(|| None::<Bounds>);
    let mut style = use_signal(MotionStyle::default);

    rsx! {
        div {
            class: "tilt {class}",
            style: "{style}",
            onmounted: move |evt: MountedEvent| node.set(Some(evt.data())),
            // Measured on every enter so scrolling and resizing never leave stale bounds.
            onmouseenter: move |_| async move {
                style.write().tilt_enter();
                let Some(node) = node() else {
                    return;
                };
                match node.get_client_rect().await {
                    Ok(rect) => bounds.set(Some(Bounds::from(rect))),
                    Err(e) => log::debug!("Could not measure card: {:?}", e),
                }
            },
            onmousemove: move |evt: MouseEvent| {
                if let Some(b) = bounds() {
                    let point = evt.client_coordinates();
                    style.write().transform = Some(tilt_transform(point.x, point.y, b));
                }
            },
            onmouseleave: move |_| style.write().tilt_leave(),
            {children}
        }
    }
}
