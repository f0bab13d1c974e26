//! Animal endpoints.

use milk_core::{Animal, AnimalCreate, AnimalUpdate, BatchMove, Count};
use reqwest::Method;

use crate::{ClientError, MilkClient};

const ANIMALS: &str = "/api/v1/animais";

impl MilkClient {
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn list_animals(&self) -> Result<Vec<Animal>, ClientError> {
        self.get_list(ANIMALS, &[]).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn get_animal(&self, id: i64) -> Result<Option<Animal>, ClientError> {
        self.get_optional(&format!("{ANIMALS}/{id}"), &[]).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn list_animals_by_farm(&self, farm_id: i64) -> Result<Vec<Animal>, ClientError> {
        self.get_list(&format!("/api/v1/fazendas/{farm_id}/animais"), &[])
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn list_animals_by_batch(&self, batch_id: i64) -> Result<Vec<Animal>, ClientError> {
        self.get_list(
            &format!("{ANIMALS}/filter/by-lote"),
            &[("lote_id", batch_id.to_string())],
        )
        .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn list_animals_by_category(
        &self,
        farm_id: i64,
        category: &str,
    ) -> Result<Vec<Animal>, ClientError> {
        self.get_list(
            &format!("{ANIMALS}/filter/by-categoria"),
            &[
                ("fazenda_id", farm_id.to_string()),
                ("categoria", category.to_string()),
            ],
        )
        .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn list_animals_by_reproductive_status(
        &self,
        farm_id: i64,
        status: &str,
    ) -> Result<Vec<Animal>, ClientError> {
        self.get_list(
            &format!("{ANIMALS}/filter/by-status-reprodutivo"),
            &[
                ("fazenda_id", farm_id.to_string()),
                ("status_reprodutivo", status.to_string()),
            ],
        )
        .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn count_animals(&self) -> Result<i64, ClientError> {
        let count: Option<Count> = self
            .get_optional(&format!("{ANIMALS}/count"), &[])
            .await?;
        Ok(count.map_or(0, |c| c.count))
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn count_animals_by_farm(&self, farm_id: i64) -> Result<i64, ClientError> {
        let count: Option<Count> = self
            .get_optional(&format!("/api/v1/fazendas/{farm_id}/animais/count"), &[])
            .await?;
        Ok(count.map_or(0, |c| c.count))
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure, or
    /// [`ClientError::EmptyResponse`] if the server omits the created record.
    pub async fn create_animal(&self, payload: &AnimalCreate) -> Result<Animal, ClientError> {
        self.send_data(Method::POST, ANIMALS, Some(payload)).await
    }

    /// # Errors
    ///
    /// Same as [`Self::create_animal`].
    pub async fn update_animal(
        &self,
        id: i64,
        payload: &AnimalUpdate,
    ) -> Result<Animal, ClientError> {
        self.send_data(Method::PUT, &format!("{ANIMALS}/{id}"), Some(payload))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn delete_animal(&self, id: i64) -> Result<(), ClientError> {
        self.send_empty::<()>(Method::DELETE, &format!("{ANIMALS}/{id}"), None)
            .await
    }

    /// Move an animal to another batch, optionally recording why.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn move_animal_to_batch(
        &self,
        animal_id: i64,
        movement: &BatchMove,
    ) -> Result<(), ClientError> {
        self.send_empty(
            Method::POST,
            &format!("{ANIMALS}/{animal_id}/movimentar-lote"),
            Some(movement),
        )
        .await
    }
}
