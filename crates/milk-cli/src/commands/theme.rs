use std::sync::Arc;

use milk_core::enums::Theme;
use milk_session::{KeyValueStore, ThemePreference};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ThemeCommands;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ThemeResponse {
    theme: Theme,
    /// False when the value came from `--system` rather than storage.
    stored: bool,
}

/// Handle `milk theme <subcommand>`. Needs only the local store.
pub fn handle(
    action: &ThemeCommands,
    storage: Arc<dyn KeyValueStore>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    output(&apply(action, &ThemePreference::new(storage))?, flags.format)
}

fn apply(action: &ThemeCommands, preference: &ThemePreference) -> anyhow::Result<ThemeResponse> {
    let response = match action {
        ThemeCommands::Show { system } => ThemeResponse {
            theme: preference.resolve((*system).into()),
            stored: preference.stored().is_some(),
        },
        ThemeCommands::Set { theme } => {
            let theme = Theme::from(*theme);
            preference.set(theme)?;
            ThemeResponse {
                theme,
                stored: true,
            }
        }
        ThemeCommands::Toggle { system } => ThemeResponse {
            theme: preference.toggle((*system).into())?,
            stored: true,
        },
    };
    Ok(response)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use milk_core::enums::Theme;
    use milk_session::{KeyValueStore, MemoryStore, THEME_KEY, ThemePreference};

    use super::apply;
    use crate::cli::ThemeArg;
    use crate::cli::subcommands::ThemeCommands;

    fn preference(store: &Arc<MemoryStore>) -> ThemePreference {
        ThemePreference::new(Arc::clone(store) as Arc<dyn KeyValueStore>)
    }

    #[test]
    fn show_falls_back_to_system_until_stored() {
        let store = Arc::new(MemoryStore::new());
        let pref = preference(&store);

        let shown = apply(&ThemeCommands::Show { system: ThemeArg::Dark }, &pref).unwrap();
        assert_eq!(shown.theme, Theme::Dark);
        assert!(!shown.stored);

        apply(&ThemeCommands::Set { theme: ThemeArg::Light }, &pref).unwrap();
        let shown = apply(&ThemeCommands::Show { system: ThemeArg::Dark }, &pref).unwrap();
        assert_eq!(shown.theme, Theme::Light);
        assert!(shown.stored);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn toggle_starts_from_system_preference() {
        let store = Arc::new(MemoryStore::new());
        let pref = preference(&store);

        let toggled = apply(&ThemeCommands::Toggle { system: ThemeArg::Light }, &pref).unwrap();
        assert_eq!(toggled.theme, Theme::Dark);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
    }
}
