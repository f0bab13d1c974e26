//! Session Store: owns the authenticated identity.
//!
//! State changes are published on a [`watch`] channel so the active-farm
//! resolver (and anything else) can react to identity transitions.

use std::sync::Arc;

use milk_core::Identity;
use tokio::sync::watch;

use crate::error::SessionError;
use crate::ports::SessionBackend;

/// What consumers observe about the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub identity: Option<Identity>,
    /// False until the startup validation round-trip has completed, then
    /// true for the lifetime of the store.
    pub ready: bool,
}

impl SessionSnapshot {
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}

pub struct SessionStore {
    backend: Arc<dyn SessionBackend>,
    state: watch::Sender<SessionSnapshot>,
}

impl SessionStore {
    #[must_use]
    pub fn new(backend: Arc<dyn SessionBackend>) -> Self {
        let (state, _) = watch::channel(SessionSnapshot::default());
        Self { backend, state }
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn identity(&self) -> Option<Identity> {
        self.state.borrow().identity.clone()
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.state.borrow().ready
    }

    /// Validate the stored credential once and mark the store ready.
    ///
    /// Any failure counts as "not logged in"; this never errors.
    pub async fn initialize(&self) -> SessionSnapshot {
        let identity = match self.backend.validate().await {
            Ok(identity) => identity,
            Err(error) => {
                tracing::warn!(%error, "session validation failed; continuing logged out");
                None
            }
        };
        match &identity {
            Some(identity) => tracing::debug!(email = %identity.email, "session restored"),
            None => tracing::debug!("no active session"),
        }
        self.publish(identity)
    }

    /// # Errors
    ///
    /// Returns [`SessionError::Client`] on bad credentials or transport
    /// failure; the current identity is left untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<Identity, SessionError> {
        let identity = self.backend.login(email, password).await?;
        tracing::info!(email = %identity.email, role = %identity.role, "logged in");
        self.publish(Some(identity.clone()));
        Ok(identity)
    }

    /// Drop the session server-side and locally.
    ///
    /// The local identity and credential are cleared even when the server
    /// call fails, so the client never keeps acting on a session it tried to
    /// end.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Client`] if the server could not be told.
    pub async fn logout(&self) -> Result<(), SessionError> {
        let result = self.backend.logout().await;
        if let Err(error) = &result {
            tracing::warn!(%error, "server logout failed; dropping the local session anyway");
        }
        self.backend.clear_credentials();
        self.publish(None);
        tracing::info!("logged out");
        result.map_err(SessionError::from)
    }

    fn publish(&self, identity: Option<Identity>) -> SessionSnapshot {
        let snapshot = SessionSnapshot {
            identity,
            ready: true,
        };
        self.state.send_replace(snapshot.clone());
        snapshot
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}
