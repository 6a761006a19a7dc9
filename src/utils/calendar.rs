use chrono::Datelike;

/// Calendar year shown in the footer.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
