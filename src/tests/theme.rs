use super::common::setup;
use crate::utils::{ KeyValueStore, MemoryStore, Theme, ThemeState, THEME_KEY };

#[test]
fn test_restore_defaults_to_dark_when_nothing_stored() {
    setup();
    let state = ThemeState::restore(&MemoryStore::new());
    assert_eq!(state.theme, Theme::Dark);
    assert!(state.is_dark());
}

#[test]
fn test_restore_reads_stored_light() {
    setup();
    let state = ThemeState::restore(&MemoryStore::with_entry(THEME_KEY, "light"));
    assert_eq!(state.theme, Theme::Light);
}

#[test]
fn test_restore_ignores_unknown_value() {
    setup();
    let state = ThemeState::restore(&MemoryStore::with_entry(THEME_KEY, "sepia"));
    assert_eq!(state.theme, Theme::Dark);
}

#[test]
fn test_toggle_persists_new_theme() {
    setup();
    let store = MemoryStore::new();
    let mut state = ThemeState::restore(&store);

    assert_eq!(state.toggle(&store), Theme::Light);
    assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
}

#[test]
fn test_toggle_twice_returns_to_original() {
    setup();
    let store = MemoryStore::with_entry(THEME_KEY, "light");
    let mut state = ThemeState::restore(&store);
    let original = state.theme;

    state.toggle(&store);
    state.toggle(&store);

    assert_eq!(state.theme, original);
    assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    assert_eq!(ThemeState::restore(&store).theme, original);
}

#[test]
fn test_toggle_survives_failed_write() {
    setup();
    let store = MemoryStore::read_only();
    let mut state = ThemeState::default();

    assert_eq!(state.toggle(&store), Theme::Light);
    assert_eq!(store.get(THEME_KEY).unwrap(), None);
}

#[test]
fn test_theme_icons_and_names() {
    assert_eq!(Theme::Light.icon(), "☀️");
    assert_eq!(Theme::Dark.icon(), "🌙");
    assert_eq!(Theme::Light.to_string(), "light");
    assert_eq!(" dark ".parse::<Theme>(), Ok(Theme::Dark));
    assert!("Dark".parse::<Theme>().is_err());
}
