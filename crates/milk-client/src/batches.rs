//! Batch (`lotes`) endpoints.

use milk_core::{Batch, BatchCreate, BatchUpdate};
use reqwest::Method;

use crate::{ClientError, MilkClient};

const BATCHES: &str = "/api/v1/lotes";

impl MilkClient {
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn list_batches(&self, farm_id: i64) -> Result<Vec<Batch>, ClientError> {
        self.get_list(BATCHES, &[("fazenda_id", farm_id.to_string())])
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn get_batch(&self, id: i64) -> Result<Option<Batch>, ClientError> {
        self.get_optional(&format!("{BATCHES}/{id}"), &[]).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn create_batch(&self, payload: &BatchCreate) -> Result<Batch, ClientError> {
        self.send_data(Method::POST, BATCHES, Some(payload)).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn update_batch(&self, id: i64, payload: &BatchUpdate) -> Result<Batch, ClientError> {
        self.send_data(Method::PUT, &format!("{BATCHES}/{id}"), Some(payload))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn delete_batch(&self, id: i64) -> Result<(), ClientError> {
        self.send_empty::<()>(Method::DELETE, &format!("{BATCHES}/{id}"), None)
            .await
    }
}
