//! In-memory fakes for the session ports.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use milk_client::ClientError;
use milk_core::{Farm, Identity, Role};
use milk_session::{FarmDirectory, SessionBackend, SessionSnapshot};
use tokio::sync::Semaphore;

pub fn farm(id: i64, name: &str) -> Farm {
    Farm::new(id, name)
}

pub fn user(email: &str) -> Identity {
    Identity::new(email, Role::User)
}

pub fn logged_in(identity: Identity) -> SessionSnapshot {
    SessionSnapshot {
        identity: Some(identity),
        ready: true,
    }
}

pub fn logged_out() -> SessionSnapshot {
    SessionSnapshot {
        identity: None,
        ready: true,
    }
}

fn server_error() -> ClientError {
    ClientError::Api {
        status: 500,
        code: Some("INTERNAL_ERROR".into()),
        message: None,
    }
}

/// Membership list served from memory. When gated, every call waits for a
/// [`FakeDirectory::release`].
#[derive(Default)]
pub struct FakeDirectory {
    farms: Mutex<Option<Vec<Farm>>>,
    calls: AtomicUsize,
    gate: Option<Semaphore>,
}

impl FakeDirectory {
    pub fn members(farms: Vec<Farm>) -> Self {
        Self {
            farms: Mutex::new(Some(farms)),
            ..Self::default()
        }
    }

    /// Every call fails with a 500.
    pub fn failing() -> Self {
        Self::default()
    }

    pub fn gated(mut self) -> Self {
        self.gate = Some(Semaphore::new(0));
        self
    }

    pub fn release(&self, calls: usize) {
        if let Some(gate) = &self.gate {
            gate.add_permits(calls);
        }
    }

    pub fn set_members(&self, farms: Vec<Farm>) {
        *self.farms.lock().unwrap_or_else(PoisonError::into_inner) = Some(farms);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Yield until `n` calls have started.
    pub async fn wait_for_calls(&self, n: usize) {
        while self.calls() < n {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl FarmDirectory for FakeDirectory {
    async fn my_farms(&self) -> Result<Vec<Farm>, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.acquire().await.expect("gate open").forget();
        }
        self.farms
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or_else(server_error)
    }
}

/// Session backend with one known account.
pub struct FakeBackend {
    current: Mutex<Option<Identity>>,
    account: Identity,
    password: String,
    fail_validate: bool,
    fail_logout: bool,
    pub logouts: AtomicUsize,
    pub cleared: AtomicUsize,
}

impl FakeBackend {
    pub fn new(account: Identity, password: &str) -> Self {
        Self {
            current: Mutex::new(None),
            account,
            password: password.into(),
            fail_validate: false,
            fail_logout: false,
            logouts: AtomicUsize::new(0),
            cleared: AtomicUsize::new(0),
        }
    }

    /// Start with a valid session cookie for the account.
    pub fn signed_in(self) -> Self {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Some(self.account.clone());
        self
    }

    pub fn failing_validate(mut self) -> Self {
        self.fail_validate = true;
        self
    }

    pub fn failing_logout(mut self) -> Self {
        self.fail_logout = true;
        self
    }
}

#[async_trait]
impl SessionBackend for FakeBackend {
    async fn validate(&self) -> Result<Option<Identity>, ClientError> {
        if self.fail_validate {
            return Err(server_error());
        }
        Ok(self
            .current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    async fn login(&self, email: &str, password: &str) -> Result<Identity, ClientError> {
        if email != self.account.email || password != self.password {
            return Err(ClientError::Unauthenticated {
                message: Some("Credenciais inválidas".into()),
            });
        }
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Some(self.account.clone());
        Ok(self.account.clone())
    }

    /// A failed logout leaves the server session alive.
    async fn logout(&self) -> Result<(), ClientError> {
        self.logouts.fetch_add(1, Ordering::SeqCst);
        if self.fail_logout {
            return Err(server_error());
        }
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }

    /// Dropping the cookie means the next validate finds no session.
    fn clear_credentials(&self) {
        self.cleared.fetch_add(1, Ordering::SeqCst);
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
