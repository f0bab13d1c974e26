//! Farm endpoints.

use milk_core::{Count, Farm, FarmCreate, FarmUpdate};
use reqwest::Method;

use crate::{ClientError, MilkClient};

const FARMS: &str = "/api/v1/fazendas";

/// Farms the logged-in user is linked to.
pub const MY_FARMS_PATH: &str = "/api/v1/me/fazendas";

impl MilkClient {
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn list_farms(&self) -> Result<Vec<Farm>, ClientError> {
        self.get_list(FARMS, &[]).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn get_farm(&self, id: i64) -> Result<Option<Farm>, ClientError> {
        self.get_optional(&format!("{FARMS}/{id}"), &[]).await
    }

    /// Farm membership of the current session.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn my_farms(&self) -> Result<Vec<Farm>, ClientError> {
        self.get_list(MY_FARMS_PATH, &[]).await
    }

    /// Farms whose name contains `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn search_farms(&self, name: &str) -> Result<Vec<Farm>, ClientError> {
        self.get_list(
            &format!("{FARMS}/search/by-nome"),
            &[("nome", name.to_string())],
        )
        .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn count_farms(&self) -> Result<i64, ClientError> {
        let count: Option<Count> = self.get_optional(&format!("{FARMS}/count"), &[]).await?;
        Ok(count.map_or(0, |c| c.count))
    }

    /// Requires an administrative profile server-side.
    ///
    /// # Errors
    ///
    /// [`ClientError::Forbidden`] for non-admin sessions.
    pub async fn create_farm(&self, payload: &FarmCreate) -> Result<Farm, ClientError> {
        self.send_data(Method::POST, FARMS, Some(payload)).await
    }

    /// # Errors
    ///
    /// [`ClientError::Forbidden`] for non-admin sessions.
    pub async fn update_farm(&self, id: i64, payload: &FarmUpdate) -> Result<Farm, ClientError> {
        self.send_data(Method::PUT, &format!("{FARMS}/{id}"), Some(payload))
            .await
    }

    /// # Errors
    ///
    /// [`ClientError::Forbidden`] for non-admin sessions.
    pub async fn delete_farm(&self, id: i64) -> Result<(), ClientError> {
        self.send_empty::<()>(Method::DELETE, &format!("{FARMS}/{id}"), None)
            .await
    }
}
