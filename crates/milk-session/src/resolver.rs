//! Active-Farm Resolver.
//!
//! Decides which farm scopes the session, reconciling the persisted
//! selection, the server's membership list and the single-farm shortcut.
//!
//! Resolution runs at most once per identity lifetime:
//!
//! ```text
//! Unresolved ──(session ready)──▶ Resolving{owner} ──(membership)──▶ Resolved{owner}
//!      ▲                                                                   │
//!      └──────────── identity gone / different account ◀───────────────────┘
//! ```
//!
//! Every lifetime gets a number; a pass or selection that completes after its
//! lifetime ended is discarded.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use milk_client::ClientError;
use milk_core::{Farm, Identity};
use tokio::sync::watch;

use crate::error::ResolverError;
use crate::ports::FarmDirectory;
use crate::session::SessionSnapshot;
use crate::storage::KeyValueStore;

/// Storage key holding the active farm id as a decimal string.
pub const ACTIVE_FARM_KEY: &str = "ceialmilk_fazenda_ativa";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Unresolved,
    Resolving { owner: Identity },
    /// `owner` is `None` once resolved for a logged-out session.
    Resolved { owner: Option<Identity> },
}

impl Phase {
    const fn owner(&self) -> Option<&Identity> {
        match self {
            Self::Resolving { owner } | Self::Resolved { owner: Some(owner) } => Some(owner),
            Self::Unresolved | Self::Resolved { owner: None } => None,
        }
    }
}

#[derive(Debug)]
struct State {
    phase: Phase,
    active: Option<Farm>,
    ready: bool,
    in_flight: usize,
    lifetime: u64,
}

pub struct ActiveFarmResolver {
    directory: Arc<dyn FarmDirectory>,
    storage: Arc<dyn KeyValueStore>,
    state: Mutex<State>,
}

impl ActiveFarmResolver {
    #[must_use]
    pub fn new(directory: Arc<dyn FarmDirectory>, storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            directory,
            storage,
            state: Mutex::new(State {
                phase: Phase::Unresolved,
                active: None,
                ready: false,
                in_flight: 0,
                lifetime: 0,
            }),
        }
    }

    #[must_use]
    pub fn active_farm(&self) -> Option<Farm> {
        self.lock().active.clone()
    }

    /// False until the first resolution pass has completed.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.lock().ready
    }

    /// True while any membership check is in flight.
    #[must_use]
    pub fn is_validating(&self) -> bool {
        self.lock().in_flight > 0
    }

    /// React to a session snapshot.
    ///
    /// Does nothing until the session is ready. An absent identity clears the
    /// selection and re-arms the pass; a present identity runs the pass once
    /// per lifetime. Failures are logged and resolve to "no active farm".
    ///
    /// Dropping the future mid-pass re-arms the pass for the same identity.
    pub async fn handle_session(&self, session: &SessionSnapshot) {
        if !session.ready {
            return;
        }
        let Some(identity) = session.identity.as_ref() else {
            self.sign_out();
            return;
        };
        let Some(lifetime) = self.begin_pass(identity) else {
            return;
        };
        let mut pass = Pass {
            state: &self.state,
            lifetime,
            finished: false,
        };
        let _in_flight = InFlight(&self.state);

        let membership = self.directory.my_farms().await;
        self.finish_pass(lifetime, identity, membership);
        pass.finished = true;
    }

    /// Feed every session change into [`Self::handle_session`] until the
    /// session store goes away.
    pub async fn follow(&self, mut updates: watch::Receiver<SessionSnapshot>) {
        loop {
            let snapshot = updates.borrow_and_update().clone();
            self.handle_session(&snapshot).await;
            if updates.changed().await.is_err() {
                break;
            }
        }
    }

    /// Select `farm`, or clear the selection with `None`.
    ///
    /// Clearing is local and immediate. Selecting re-fetches the membership
    /// and only persists when the farm is in it; the server's record for the
    /// farm becomes the active value and is returned.
    ///
    /// # Errors
    ///
    /// - [`ResolverError::NotMember`] if the farm is not in the membership,
    ///   no identity is known, or the membership could not be fetched
    /// - [`ResolverError::SessionChanged`] if the identity changed meanwhile
    /// - [`ResolverError::Storage`] if the selection cannot be saved
    ///
    /// On every error the previous selection is left as it was.
    pub async fn set_active_farm(&self, farm: Option<&Farm>) -> Result<Option<Farm>, ResolverError> {
        let Some(farm) = farm else {
            let mut state = self.lock();
            self.storage.remove(ACTIVE_FARM_KEY)?;
            state.active = None;
            return Ok(None);
        };

        let lifetime = {
            let mut state = self.lock();
            if state.phase.owner().is_none() {
                tracing::debug!(farm_id = farm.id, "no identity to check membership for");
                return Err(ResolverError::NotMember { farm_id: farm.id });
            }
            state.in_flight += 1;
            state.lifetime
        };
        let _in_flight = InFlight(&self.state);

        let membership = match self.directory.my_farms().await {
            Ok(farms) => farms,
            Err(error) => {
                tracing::debug!(%error, farm_id = farm.id, "could not fetch membership");
                return Err(ResolverError::NotMember { farm_id: farm.id });
            }
        };
        let Some(member) = membership.into_iter().find(|f| f.id == farm.id) else {
            tracing::debug!(farm_id = farm.id, "farm is not in the membership list");
            return Err(ResolverError::NotMember { farm_id: farm.id });
        };

        let mut state = self.lock();
        if state.lifetime != lifetime {
            return Err(ResolverError::SessionChanged { farm_id: farm.id });
        }
        self.storage.set(ACTIVE_FARM_KEY, &member.id.to_string())?;
        tracing::debug!(farm_id = member.id, "active farm selected");
        state.active = Some(member.clone());
        Ok(Some(member))
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn sign_out(&self) {
        let mut state = self.lock();
        if state.phase != (Phase::Resolved { owner: None }) {
            state.lifetime += 1;
            state.phase = Phase::Resolved { owner: None };
            tracing::debug!("no identity; active farm cleared");
        }
        state.active = None;
        state.ready = true;
        self.forget();
    }

    /// Start a pass for `identity` unless this lifetime already has one.
    fn begin_pass(&self, identity: &Identity) -> Option<u64> {
        let mut state = self.lock();
        if let Some(owner) = state.phase.owner() {
            if owner.same_account(identity) {
                return None;
            }
            tracing::debug!(
                from = %owner.email,
                to = %identity.email,
                "identity switched; resetting active farm"
            );
            state.active = None;
            self.forget();
        }
        state.lifetime += 1;
        state.in_flight += 1;
        state.phase = Phase::Resolving {
            owner: identity.clone(),
        };
        Some(state.lifetime)
    }

    fn finish_pass(
        &self,
        lifetime: u64,
        identity: &Identity,
        membership: Result<Vec<Farm>, ClientError>,
    ) {
        let mut state = self.lock();
        if state.lifetime != lifetime {
            tracing::debug!(email = %identity.email, "discarding resolution for an ended session");
            return;
        }
        state.active = match membership {
            Ok(farms) => self.choose(farms),
            Err(error) => {
                tracing::warn!(%error, "could not load farm membership; no active farm");
                self.forget();
                None
            }
        };
        state.ready = true;
        state.phase = Phase::Resolved {
            owner: Some(identity.clone()),
        };
    }

    /// Pick the active farm from a fresh membership list.
    fn choose(&self, farms: Vec<Farm>) -> Option<Farm> {
        let Some(saved) = self.storage.get(ACTIVE_FARM_KEY) else {
            if farms.len() != 1 {
                return None;
            }
            let farm = farms.into_iter().next()?;
            if let Err(error) = self.storage.set(ACTIVE_FARM_KEY, &farm.id.to_string()) {
                tracing::warn!(%error, farm_id = farm.id, "could not persist active farm");
            }
            tracing::debug!(farm_id = farm.id, "single farm selected automatically");
            return Some(farm);
        };

        let Ok(id) = saved.trim().parse::<i64>() else {
            tracing::debug!(saved = %saved, "discarding malformed saved farm id");
            self.forget();
            return None;
        };
        let found = farms.into_iter().find(|f| f.id == id);
        if found.is_none() {
            tracing::debug!(farm_id = id, "saved farm is no longer accessible");
            self.forget();
        }
        found
    }

    fn forget(&self) {
        if let Err(error) = self.storage.remove(ACTIVE_FARM_KEY) {
            tracing::warn!(%error, "could not clear saved active farm");
        }
    }
}

impl std::fmt::Debug for ActiveFarmResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActiveFarmResolver")
            .field("state", &*self.lock())
            .finish_non_exhaustive()
    }
}

/// Counts one in-flight membership check until dropped.
struct InFlight<'a>(&'a Mutex<State>);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut state = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        state.in_flight = state.in_flight.saturating_sub(1);
    }
}

/// A resolution pass that has not completed yet. If it is dropped first, the
/// phase goes back to `Unresolved` so the next trigger runs a new pass.
struct Pass<'a> {
    state: &'a Mutex<State>,
    lifetime: u64,
    finished: bool,
}

impl Drop for Pass<'_> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.lifetime == self.lifetime && matches!(state.phase, Phase::Resolving { .. }) {
            tracing::debug!("resolution pass abandoned; re-arming");
            state.phase = Phase::Unresolved;
        }
    }
}
