use super::common::card_bounds;
use crate::utils::motion::*;

#[test]
fn test_scroll_percent_is_clamped() {
    assert_eq!(scroll_percent(0.0, 2000.0, 1000.0), 0.0);
    assert_eq!(scroll_percent(500.0, 2000.0, 1000.0), 50.0);
    assert_eq!(scroll_percent(1000.0, 2000.0, 1000.0), 100.0);
    assert_eq!(scroll_percent(1400.0, 2000.0, 1000.0), 100.0);
    assert_eq!(scroll_percent(-30.0, 2000.0, 1000.0), 0.0);
}

#[test]
fn test_scroll_percent_on_short_page() {
    assert_eq!(scroll_percent(0.0, 800.0, 1000.0), 0.0);
    assert_eq!(scroll_percent(0.0, 1000.0, 1000.0), 0.0);
}

#[test]
fn test_tilt_is_flat_at_centre() {
    assert_eq!(
        tilt_transform(200.0, 100.0, card_bounds()),
        "perspective(700px) rotateX(0deg) rotateY(0deg) translateZ(0.0001px)"
    );
}

#[test]
fn test_tilt_reaches_three_degrees_at_corners() {
    assert_eq!(tilt_angles(100.0, 50.0, card_bounds()), (3.0, -3.0));
    assert_eq!(tilt_angles(300.0, 150.0, card_bounds()), (-3.0, 3.0));
}

#[test]
fn test_tilt_with_degenerate_bounds_rests() {
    let flat = Bounds::new(0.0, 0.0, 0.0, 40.0);
    assert_eq!(tilt_transform(10.0, 10.0, flat), TILT_REST_TRANSFORM);
}

#[test]
fn test_magnetic_pull() {
    assert_eq!(magnetic_transform(200.0, 100.0, card_bounds()), "translate(0px, 0px)");
    assert_eq!(magnetic_offset(300.0, 150.0, card_bounds()), (15.0, 12.5));
    assert_eq!(magnetic_offset(100.0, 50.0, card_bounds()), (-15.0, -12.5));
}

#[test]
fn test_motion_style_transitions() {
    let mut style = MotionStyle::default();
    assert_eq!(style.to_string(), "");

    style.tilt_enter();
    assert_eq!(style.to_string(), "transition: transform 180ms ease;");

    style.tilt_leave();
    assert_eq!(
        style.to_string(),
        "transform: perspective(700px) rotateX(0) rotateY(0); transition: transform 220ms ease;"
    );

    let mut span = MotionStyle::default();
    span.magnetic_leave();
    assert_eq!(span.to_string(), "transform: translate(0,0);");
}

#[test]
fn test_magnetic_follows_moved_bounds() {
    // Same pointer, button scrolled 40px up underneath it.
    let before = card_bounds();
    let after = Bounds::new(before.left, before.top - 40.0, before.width, before.height);
    assert_eq!(magnetic_offset(200.0, 100.0, before), (0.0, 0.0));
    assert_eq!(magnetic_offset(200.0, 100.0, after), (0.0, 10.0));
}
