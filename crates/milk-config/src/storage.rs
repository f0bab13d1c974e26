//! Client-side durable state location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const STATE_DIR: &str = ".ceialmilk";
const STATE_FILE: &str = "state.json";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Path of the key-value state file. Empty means `~/.ceialmilk/state.json`.
    #[serde(default)]
    pub path: String,
}

impl StorageConfig {
    /// Resolve the state file path. `None` only when no path is configured and
    /// the home directory cannot be determined.
    #[must_use]
    pub fn resolved_path(&self) -> Option<PathBuf> {
        if self.path.trim().is_empty() {
            dirs::home_dir().map(|home| home.join(STATE_DIR).join(STATE_FILE))
        } else {
            Some(PathBuf::from(self.path.trim()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let config = StorageConfig {
            path: "/tmp/milk/state.json".into(),
        };
        assert_eq!(
            config.resolved_path(),
            Some(PathBuf::from("/tmp/milk/state.json"))
        );
    }

    #[test]
    fn default_path_is_under_home() {
        let config = StorageConfig::default();
        if let Some(path) = config.resolved_path() {
            assert!(path.ends_with(".ceialmilk/state.json"));
        }
    }
}
