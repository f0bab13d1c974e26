use serde::{Deserialize, Serialize};
use std::fmt;

/// Access profile (`perfil`) assigned to a user by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    User,
    Admin,
    Developer,
    /// A profile this client does not know about. Never matches an allowed set.
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Roles allowed into the administrative area.
    pub const ADMINISTRATIVE: &'static [Self] = &[Self::Admin, Self::Developer];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
            Self::Developer => "DEVELOPER",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Parse a wire value. Unrecognized values map to [`Role::Unknown`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "USER" => Self::User,
            "ADMIN" => Self::Admin,
            "DEVELOPER" => Self::Developer,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub const fn is_administrative(self) -> bool {
        matches!(self, Self::Admin | Self::Developer)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated user as reported by `/api/auth/login` or `/api/auth/validate`.
///
/// Absent until the session store has resolved; destroyed on logout or when
/// validation fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
    #[serde(rename = "perfil")]
    pub role: Role,
    #[serde(rename = "nome", default)]
    pub display_name: String,
    /// Only present on validation responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

impl Identity {
    #[must_use]
    pub fn new(email: impl Into<String>, role: Role) -> Self {
        Self {
            email: email.into(),
            role,
            display_name: String::new(),
            user_id: None,
        }
    }

    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    /// Two identities belong to the same lifetime when they name the same account.
    #[must_use]
    pub fn same_account(&self, other: &Self) -> bool {
        self.email.eq_ignore_ascii_case(&other.email)
    }
}
