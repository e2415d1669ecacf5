// Dark/light preference shared with the rest of the site.
use super::storage::SaveStore;
use crate::config::THEME_KEY;
use crate::error::StorageError;
use crate::util::log_failure;

pub const DARK_CLASS: &str = "dark-mode";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Anything other than "dark" (including nothing) means light.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

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
}

pub fn load_theme(store: &dyn SaveStore) -> Theme {
    Theme::from_stored(store.load(THEME_KEY).as_deref())
}

pub fn save_theme(store: &dyn SaveStore, theme: Theme) -> Result<(), StorageError> {
    store.store(THEME_KEY, theme.as_str())
}

/// Sets or clears the dark class on `<body>`.
pub fn apply_theme(theme: Theme) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        log_failure(
            "theme class not applied",
            body.class_list()
                .toggle_with_force(DARK_CLASS, theme == Theme::Dark),
        );
    }
}
