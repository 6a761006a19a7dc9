use crate::utils::motion::Bounds;

pub fn setup() {
    let _ = env_logger::builder().is_test(true).filter_level(log::LevelFilter::Debug).try_init();
}

/// A 200x100 card placed at (100, 50) in client coordinates.
pub fn card_bounds() -> Bounds {
    Bounds::new(100.0, 50.0, 200.0, 100.0)
}
