//! UI preferences persisted alongside the session.
//!
//! Currently a single preference: the [`Theme`]. It lives under the `theme`
//! key and, unlike the session entries, is never cleared by logout.

use crate::kv::{KeyValueStore, KEY_THEME};

/// UI theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value; anything unrecognised falls back to the default.
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Load the persisted theme, defaulting to [`Theme::Light`].
pub async fn load_theme<S: KeyValueStore>(store: &S) -> Theme {
    match store.get(KEY_THEME).await {
        Some(value) => Theme::from_str_or_default(&value),
        None => Theme::default(),
    }
}

/// Persist the theme under the `theme` key.
pub async fn save_theme<S: KeyValueStore>(store: &S, theme: Theme) {
    store.set(KEY_THEME, theme.as_str()).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[tokio::test]
    async fn test_theme_roundtrip() {
        let store = MemoryStore::new();

        assert_eq!(load_theme(&store).await, Theme::Light);

        save_theme(&store, Theme::Dark).await;
        assert_eq!(load_theme(&store).await, Theme::Dark);
        assert_eq!(store.get(KEY_THEME).await.as_deref(), Some("dark"));
    }

    #[tokio::test]
    async fn test_garbage_value_falls_back() {
        let store = MemoryStore::new();
        store.set(KEY_THEME, "solarized").await;
        assert_eq!(load_theme(&store).await, Theme::Light);
    }

    #[test]
    fn test_toggled() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
