use std::fmt::{ Display, Formatter };
use std::str::FromStr;
use crate::utils::storage::KeyValueStore;

/// Storage key for the persisted theme preference.
pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "☀️",
            Theme::Dark => "🌙",
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{}'", other)),
        }
    }
}

/// The page-wide theme, shared through context.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ThemeState {
    pub theme: Theme,
}

impl ThemeState {
    /// Reads the stored preference once. Missing, unreadable or unknown
    /// values fall back to the default theme.
    pub fn restore(store: &impl KeyValueStore) -> Self {
        let theme = match store.get(THEME_KEY) {
            Ok(Some(raw)) =>
                raw.parse::<Theme>().unwrap_or_else(|e| {
                    log::warn!("Ignoring stored theme: {}", e);
                    Theme::default()
                }),
            Ok(None) => Theme::default(),
            Err(e) => {
                log::warn!("Could not read theme preference: {}", e);
                Theme::default()
            }
        };
        log::debug!("Restored theme: {}", theme);
        Self { theme }
    }

    /// Flips the theme and persists the new value. A failed write is logged;
    /// the in-memory theme still changes.
    pub fn toggle(&mut self, store: &impl KeyValueStore) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(e) = store.set(THEME_KEY, self.theme.as_str()) {
            log::warn!("Could not persist theme preference: {}", e);
        }
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme == Theme::Dark
    }
}
