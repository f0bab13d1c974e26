//! The application-root context object.
//!
//! [`AppSession`] owns every piece of client session state and wires the
//! session store into the resolver. Build one per process (or per test) and
//! pass it down; there is no global.

use std::sync::Arc;

use milk_client::MilkClient;
use milk_core::{Farm, Identity, Role};

use crate::error::{ResolverError, SessionError, StorageError};
use crate::guard::{self, GuardOutcome};
use crate::ports::{FarmDirectory, SessionBackend};
use crate::resolver::ActiveFarmResolver;
use crate::session::{SessionSnapshot, SessionStore};
use crate::storage::KeyValueStore;
use crate::theme::ThemePreference;

/// Storage key for the persisted session cookies.
pub const SESSION_COOKIES_KEY: &str = "ceialmilk_session_cookies";

pub struct AppSession {
    session: SessionStore,
    resolver: ActiveFarmResolver,
    theme: ThemePreference,
    storage: Arc<dyn KeyValueStore>,
}

impl AppSession {
    #[must_use]
    pub fn new(
        backend: Arc<dyn SessionBackend>,
        directory: Arc<dyn FarmDirectory>,
        storage: Arc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            session: SessionStore::new(backend),
            resolver: ActiveFarmResolver::new(directory, Arc::clone(&storage)),
            theme: ThemePreference::new(Arc::clone(&storage)),
            storage,
        }
    }

    /// Context backed by a live API client, with its cookies restored from
    /// `storage`.
    #[must_use]
    pub fn connect(client: &Arc<MilkClient>, storage: Arc<dyn KeyValueStore>) -> Self {
        restore_cookies(client, storage.as_ref());
        Self::new(
            Arc::clone(client) as Arc<dyn SessionBackend>,
            Arc::clone(client) as Arc<dyn FarmDirectory>,
            storage,
        )
    }

    /// Validate the session, then run the active-farm pass.
    pub async fn start(&self) -> SessionSnapshot {
        let snapshot = self.session.initialize().await;
        self.resolver.handle_session(&snapshot).await;
        snapshot
    }

    /// # Errors
    ///
    /// Returns [`SessionError`] if the credentials are rejected.
    pub async fn login(&self, email: &str, password: &str) -> Result<Identity, SessionError> {
        let identity = self.session.login(email, password).await?;
        self.resolver.handle_session(&self.session.snapshot()).await;
        Ok(identity)
    }

    /// The local session, cookies included, ends even if the server call
    /// fails.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the server could not be told.
    pub async fn logout(&self) -> Result<(), SessionError> {
        let result = self.session.logout().await;
        self.resolver.handle_session(&self.session.snapshot()).await;
        result
    }

    /// # Errors
    ///
    /// See [`ActiveFarmResolver::set_active_farm`].
    pub async fn set_active_farm(&self, farm: Option<&Farm>) -> Result<Option<Farm>, ResolverError> {
        self.resolver.set_active_farm(farm).await
    }

    /// Authenticated-gate for `path` against the current session.
    #[must_use]
    pub fn guard(&self, path: &str) -> GuardOutcome {
        guard::authenticated_gate(&self.session.snapshot(), path)
    }

    /// Role-gate for `path`.
    #[must_use]
    pub fn require_role(&self, path: &str, allowed: &[Role]) -> GuardOutcome {
        guard::role_gate(&self.session.snapshot(), path, allowed)
    }

    #[must_use]
    pub const fn session(&self) -> &SessionStore {
        &self.session
    }

    #[must_use]
    pub const fn resolver(&self) -> &ActiveFarmResolver {
        &self.resolver
    }

    #[must_use]
    pub const fn theme(&self) -> &ThemePreference {
        &self.theme
    }

    #[must_use]
    pub fn storage(&self) -> &dyn KeyValueStore {
        self.storage.as_ref()
    }
}

impl std::fmt::Debug for AppSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppSession")
            .field("session", &self.session)
            .field("resolver", &self.resolver)
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

/// Seed `client` with cookies saved by [`persist_cookies`]. A missing or
/// unreadable entry means no session.
pub fn restore_cookies(client: &MilkClient, storage: &dyn KeyValueStore) {
    let Some(raw) = storage.get(SESSION_COOKIES_KEY) else {
        return;
    };
    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(cookies) => {
            if let Err(error) = client.restore_cookies(&cookies) {
                tracing::warn!(%error, "could not restore session cookies");
            }
        }
        Err(error) => tracing::warn!(%error, "ignoring malformed session cookies"),
    }
}

/// Save the client's current cookies; an empty jar removes the entry.
///
/// # Errors
///
/// Returns [`StorageError`] if the store cannot be written.
pub fn persist_cookies(client: &MilkClient, storage: &dyn KeyValueStore) -> Result<(), StorageError> {
    let cookies = client.cookie_snapshot();
    if cookies.is_empty() {
        return storage.remove(SESSION_COOKIES_KEY);
    }
    storage.set(SESSION_COOKIES_KEY, &serde_json::to_string(&cookies)?)
}
