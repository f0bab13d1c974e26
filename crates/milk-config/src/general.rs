//! General application configuration.

use milk_core::Role;
use serde::{Deserialize, Serialize};

/// Default page size for paginated listings.
const fn default_limit() -> u32 {
    20
}

fn default_admin_roles() -> Vec<Role> {
    Role::ADMINISTRATIVE.to_vec()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default page size for the admin user listing.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Roles allowed through the administrative role gate.
    #[serde(default = "default_admin_roles")]
    pub admin_roles: Vec<Role>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            admin_roles: default_admin_roles(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_limit, 20);
        assert_eq!(config.admin_roles, vec![Role::Admin, Role::Developer]);
    }
}
