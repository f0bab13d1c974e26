//! Route guards.
//!
//! Guards fail closed: until the session is known they say "loading", never
//! "render".

use milk_core::Role;

use crate::session::SessionSnapshot;

pub const LOGIN_PATH: &str = "/login";
pub const ACCESS_DENIED_TITLE: &str = "Acesso Negado";

/// What a guarded page should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session still resolving; show a placeholder and do not redirect.
    Loading,
    /// Not logged in; go to `location`.
    Redirect { location: String },
    Render,
    /// Logged in without a permitted role; show `message` in place of the page.
    Denied { message: String },
}

impl GuardOutcome {
    #[must_use]
    pub const fn is_render(&self) -> bool {
        matches!(self, Self::Render)
    }
}

/// `/login?redirect=<path>`, with `path` percent-encoded. An empty path
/// returns to `/`.
#[must_use]
pub fn login_redirect(path: &str) -> String {
    let target = if path.is_empty() { "/" } else { path };
    format!("{LOGIN_PATH}?redirect={}", urlencoding::encode(target))
}

#[must_use]
pub fn authenticated_gate(session: &SessionSnapshot, path: &str) -> GuardOutcome {
    if !session.ready {
        return GuardOutcome::Loading;
    }
    if session.identity.is_none() {
        return GuardOutcome::Redirect {
            location: login_redirect(path),
        };
    }
    GuardOutcome::Render
}

/// [`authenticated_gate`] plus a role check against `allowed`.
#[must_use]
pub fn role_gate(session: &SessionSnapshot, path: &str, allowed: &[Role]) -> GuardOutcome {
    match authenticated_gate(session, path) {
        GuardOutcome::Render => {}
        other => return other,
    }
    let permitted = session
        .identity
        .as_ref()
        .is_some_and(|identity| allowed.contains(&identity.role));
    if permitted {
        GuardOutcome::Render
    } else {
        GuardOutcome::Denied {
            message: denied_message(allowed),
        }
    }
}

/// "Apenas usuários com perfil ADMIN ou DEVELOPER podem acessar esta área."
#[must_use]
pub fn denied_message(allowed: &[Role]) -> String {
    let names: Vec<&str> = allowed.iter().map(|role| role.as_str()).collect();
    let roles = match names.split_last() {
        None => return "Você não tem permissão para acessar esta área.".to_string(),
        Some((last, [])) => (*last).to_string(),
        Some((last, rest)) => format!("{} ou {last}", rest.join(", ")),
    };
    format!("Apenas usuários com perfil {roles} podem acessar esta área.")
}
