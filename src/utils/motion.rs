//! Geometry for the scroll bar and the hover effects. Everything here is
//! pure so it can be driven from event handlers and unit tests alike.

use std::fmt::{ Display, Formatter };

pub const TILT_PERSPECTIVE_PX: u32 = 700;
/// Maximum tilt in degrees on either axis is half of this.
pub const TILT_RANGE_DEG: f64 = 6.0;
pub const TILT_ENTER_TRANSITION: &str = "transform 180ms ease";
pub const TILT_LEAVE_TRANSITION: &str = "transform 220ms ease";
pub const TILT_REST_TRANSFORM: &str = "perspective(700px) rotateX(0) rotateY(0)";

pub const MAGNETIC_PULL_X: f64 = 0.15;
pub const MAGNETIC_PULL_Y: f64 = 0.25;
pub const MAGNETIC_REST_TRANSFORM: &str = "translate(0,0)";

/// An element's client rectangle, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

impl From<dioxus::html::geometry::PixelsRect> for Bounds {
    fn from(rect: dioxus::html::geometry::PixelsRect) -> Self {
        Self::new(rect.origin.x, rect.origin.y, rect.size.width, rect.size.height)
    }
}

/// How far down the page the reader is, in percent. Pages that cannot
/// scroll report 0.
pub fn scroll_percent(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if !(scrollable > 0.0) || !scroll_top.is_finite() {
        return 0.0;
    }
    ((scroll_top / scrollable) * 100.0).clamp(0.0, 100.0)
}

// Avoids rendering "-0".
fn tidy(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

/// Rotation for a pointer at client coordinates `(x, y)` over a card.
pub fn tilt_angles(x: f64, y: f64, bounds: Bounds) -> (f64, f64) {
    if bounds.is_degenerate() {
        return (0.0, 0.0);
    }
    let local_x = x - bounds.left;
    let local_y = y - bounds.top;
    let rx = (local_y / bounds.height - 0.5) * -TILT_RANGE_DEG;
    let ry = (local_x / bounds.width - 0.5) * TILT_RANGE_DEG;
    (tidy(rx), tidy(ry))
}

pub fn tilt_transform(x: f64, y: f64, bounds: Bounds) -> String {
    if bounds.is_degenerate() {
        return TILT_REST_TRANSFORM.to_string();
    }
    let (rx, ry) = tilt_angles(x, y, bounds);
    format!(
        "perspective({}px) rotateX({}deg) rotateY({}deg) translateZ(0.0001px)",
        TILT_PERSPECTIVE_PX,
        rx,
        ry
    )
}

/// Offset of the inner span of a magnetic button, pulled toward the pointer.
pub fn magnetic_offset(x: f64, y: f64, bounds: Bounds) -> (f64, f64) {
    let dx = x - bounds.left - bounds.width / 2.0;
    let dy = y - bounds.top - bounds.height / 2.0;
    (tidy(dx * MAGNETIC_PULL_X), tidy(dy * MAGNETIC_PULL_Y))
}

pub fn magnetic_transform(x: f64, y: f64, bounds: Bounds) -> String {
    let (dx, dy) = magnetic_offset(x, y, bounds);
    format!("translate({}px, {}px)", dx, dy)
}

/// Inline style of a hover-animated element.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct MotionStyle {
    pub transform: Option<String>,
    pub transition: Option<&'static str>,
}

impl MotionStyle {
    pub fn tilt_enter(&mut self) {
        self.transition = Some(TILT_ENTER_TRANSITION);
    }

    pub fn tilt_leave(&mut self) {
        self.transition = Some(TILT_LEAVE_TRANSITION);
        self.transform = Some(TILT_REST_TRANSFORM.to_string());
    }

    pub fn magnetic_leave(&mut self) {
        self.transform = Some(MAGNETIC_REST_TRANSFORM.to_string());
    }
}

impl Display for MotionStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if let Some(transform) = &self.transform {
            write!(f, "transform: {};", transform)?;
        }
        if let Some(transition) = self.transition {
            if self.transform.is_some() {
                f.write_str(" ")?;
            }
            write!(f, "transition: {};", transition)?;
        }
        Ok(())
    }
}
