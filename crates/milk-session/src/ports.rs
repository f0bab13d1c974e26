//! Seams between the session layer and the REST API.
//!
//! [`MilkClient`] implements both ports; tests plug in fakes.

use async_trait::async_trait;
use milk_client::{ClientError, MilkClient};
use milk_core::{Farm, Identity};

/// Issues, validates and drops the session credential.
#[async_trait]
pub trait SessionBackend: Send + Sync {
    /// `Ok(None)` when there is no valid session.
    async fn validate(&self) -> Result<Option<Identity>, ClientError>;

    async fn login(&self, email: &str, password: &str) -> Result<Identity, ClientError>;

    async fn logout(&self) -> Result<(), ClientError>;

    /// Forget the local credential. Runs on every logout, including one the
    /// server rejected.
    fn clear_credentials(&self) {}
}

/// Farms the current session may operate on.
#[async_trait]
pub trait FarmDirectory: Send + Sync {
    async fn my_farms(&self) -> Result<Vec<Farm>, ClientError>;
}

#[async_trait]
impl SessionBackend for MilkClient {
    async fn validate(&self) -> Result<Option<Identity>, ClientError> {
        Self::validate(self).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<Identity, ClientError> {
        Self::login(self, email, password).await
    }

    async fn logout(&self) -> Result<(), ClientError> {
        Self::logout(self).await
    }

    fn clear_credentials(&self) {
        self.clear_session_cookies();
    }
}

#[async_trait]
impl FarmDirectory for MilkClient {
    async fn my_farms(&self) -> Result<Vec<Farm>, ClientError> {
        Self::my_farms(self).await
    }
}
