//! Light/dark preference, persisted under [`THEME_KEY`].

use std::sync::Arc;

use milk_core::Theme;

use crate::error::StorageError;
use crate::storage::KeyValueStore;

pub const THEME_KEY: &str = "ceialmilk_theme";

#[derive(Clone)]
pub struct ThemePreference {
    storage: Arc<dyn KeyValueStore>,
}

impl ThemePreference {
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// The stored choice, if it is a valid one.
    #[must_use]
    pub fn stored(&self) -> Option<Theme> {
        self.storage
            .get(THEME_KEY)
            .and_then(|value| Theme::parse(&value))
    }

    /// Stored choice, else the system preference.
    #[must_use]
    pub fn resolve(&self, system: Theme) -> Theme {
        self.stored().unwrap_or(system)
    }

    /// # Errors
    ///
    /// Returns [`StorageError`] if the choice cannot be persisted.
    pub fn set(&self, theme: Theme) -> Result<(), StorageError> {
        self.storage.set(THEME_KEY, theme.as_str())
    }

    /// Switch to the opposite of the current theme and return it.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the choice cannot be persisted.
    pub fn toggle(&self, system: Theme) -> Result<Theme, StorageError> {
        let next = self.resolve(system).toggled();
        self.set(next)?;
        Ok(next)
    }
}

impl std::fmt::Debug for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemePreference")
            .field("stored", &self.stored())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn falls_back_to_system_preference() {
        let theme = ThemePreference::new(Arc::new(MemoryStore::new()));
        assert_eq!(theme.resolve(Theme::Dark), Theme::Dark);
        assert_eq!(theme.stored(), None);
    }

    #[test]
    fn invalid_stored_value_is_ignored() {
        let theme = ThemePreference::new(Arc::new(MemoryStore::with_entries([(
            THEME_KEY, "sepia",
        )])));
        assert_eq!(theme.resolve(Theme::Light), Theme::Light);
    }

    #[test]
    fn toggle_persists_opposite() {
        let store = Arc::new(MemoryStore::new());
        let theme = ThemePreference::new(Arc::clone(&store) as Arc<dyn KeyValueStore>);
        assert_eq!(theme.toggle(Theme::Light).unwrap(), Theme::Dark);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(theme.toggle(Theme::Light).unwrap(), Theme::Light);
    }
}
