use std::path::PathBuf;

use milk_client::ClientError;
use thiserror::Error;

/// Failures of the durable key-value store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode storage state: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors surfaced by an explicit active-farm selection.
///
/// The automatic resolution pass never returns these; it logs and resolves
/// to "no active farm" instead.
#[derive(Debug, Error)]
pub enum ResolverError {
    /// The farm could not be confirmed as part of the session's membership:
    /// it is absent from the list, nobody is logged in, or the list could not
    /// be fetched.
    #[error("Fazenda não encontrada ou você não tem acesso a ela")]
    NotMember { farm_id: i64 },

    /// The identity changed while the membership check was in flight.
    #[error("session changed while selecting farm {farm_id}")]
    SessionChanged { farm_id: i64 },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors from session-level actions (login, logout).
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl SessionError {
    /// See [`ClientError::user_message`].
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Client(error) => error.user_message(fallback),
        }
    }
}
