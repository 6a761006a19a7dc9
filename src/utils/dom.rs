//! Thin wrappers over `web-sys` for the bits of page behavior Dioxus does
//! not model: window listeners, the reveal observer, focus and alerts.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{ JsCast, JsValue };
use web_sys::{
    AddEventListenerOptions,
    Document,
    Element,
    FocusOptions,
    HtmlElement,
    IntersectionObserver,
    IntersectionObserverEntry,
    IntersectionObserverInit,
    Window,
};
use crate::error::DomError;
use crate::utils::motion::scroll_percent;

pub const REVEAL_SELECTORS: &str = ".section, .glass, .project-card, .skill, .item, .testimonial";
pub const REVEAL_CLASS: &str = "reveal";
pub const IN_VIEW_CLASS: &str = "in-view";
pub const REVEAL_THRESHOLD: f64 = 0.12;

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// Sets an attribute on `<html>`, e.g. `data-theme`.
pub fn set_root_attribute(name: &str, value: &str) -> Result<(), DomError> {
    let root = document()?
        .document_element()
        .ok_or_else(|| DomError::MissingElement("html".to_string()))?;
    root.set_attribute(name, value)?;
    Ok(())
}

/// Blocking `window.alert`.
pub fn alert(message: &str) {
    let shown = window().and_then(|w| w.alert_with_message(message).map_err(DomError::from));
    if let Err(e) = shown {
        log::warn!("Could not show alert: {}", e);
    }
}

/// Reading progress of the current page, in percent.
pub fn current_scroll_percent() -> Result<f64, DomError> {
    let window = window()?;
    let root = document()?
        .document_element()
        .ok_or_else(|| DomError::MissingElement("html".to_string()))?;
    let scroll_top = match window.scroll_y() {
        Ok(y) if y > 0.0 => y,
        _ => root.scroll_top() as f64,
    };
    let viewport = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok(scroll_percent(scroll_top, root.scroll_height() as f64, viewport))
}

/// A window event listener that is removed when dropped.
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn passive(event: &'static str, handler: impl FnMut() + 'static) -> Result<Self, DomError> {
        let callback = Closure::<dyn FnMut()>::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        window()?.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options
        )?;
        log::debug!("Registered passive '{}' listener", event);
        Ok(Self { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Ok(window) = window() {
            let _ = window.remove_event_listener_with_callback(
                self.event,
                self.callback.as_ref().unchecked_ref()
            );
        }
    }
}

/// Marks every element matching `selectors` with the reveal class and adds
/// the in-view class once it scrolls into view. Disconnects when dropped.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn observe_all(selectors: &str) -> Result<Self, DomError> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        let _ = entry.target().class_list().add_1(IN_VIEW_CLASS);
                    }
                }
            }
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options
        )?;

        let nodes = document()?.query_selector_all(selectors)?;
        let mut observed = 0;
        for i in 0..nodes.length() {
            let Some(node) = nodes.item(i) else {
                continue;
            };
            let Ok(element) = node.dyn_into::<Element>() else {
                continue;
            };
            element.class_list().add_1(REVEAL_CLASS)?;
            observer.observe(&element);
            observed += 1;
        }
        log::debug!("Observing {} elements for reveal", observed);

        Ok(Self { observer, _callback: callback })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// The element id an in-page link points at. `None` for external links and
/// for a bare `#`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Moves keyboard focus to the section an in-page link targets without
/// scrolling; the browser's own anchor navigation does the scrolling.
/// Missing targets are ignored.
pub fn focus_anchor_target(href: &str) -> Result<(), DomError> {
    let Some(id) = anchor_target(href) else {
        return Ok(());
    };
    let Some(section) = document()?.get_element_by_id(id) else {
        log::debug!("No section with id '{}'", id);
        return Ok(());
    };
    section.set_attribute("tabindex", "-1")?;
    let section: HtmlElement = section
        .dyn_into()
        .map_err(|_| DomError::MissingElement(format!("#{} is not an HTML element", id)))?;
    let options = FocusOptions::new();
    options.set_prevent_scroll(true);
    section.focus_with_options(&options)?;
    Ok(())
}
