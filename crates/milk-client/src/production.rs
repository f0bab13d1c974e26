//! Milk production endpoints.

use chrono::NaiveDate;
use milk_core::{Count, MilkProduction, MilkProductionCreate, MilkProductionUpdate, ProductionSummary};
use reqwest::Method;

use crate::{ClientError, MilkClient};

const PRODUCTION: &str = "/api/v1/producao";

impl MilkClient {
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn list_production(&self) -> Result<Vec<MilkProduction>, ClientError> {
        self.get_list(PRODUCTION, &[]).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn get_production(&self, id: i64) -> Result<Option<MilkProduction>, ClientError> {
        self.get_optional(&format!("{PRODUCTION}/{id}"), &[]).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn list_production_by_animal(
        &self,
        animal_id: i64,
    ) -> Result<Vec<MilkProduction>, ClientError> {
        self.get_list(&format!("/api/v1/animais/{animal_id}/producao"), &[])
            .await
    }

    /// Records between `start` and `end`, both inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn list_production_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<MilkProduction>, ClientError> {
        self.get_list(
            &format!("{PRODUCTION}/filter/by-date"),
            &[
                ("start", start.format("%Y-%m-%d").to_string()),
                ("end", end.format("%Y-%m-%d").to_string()),
            ],
        )
        .await
    }

    /// Totals for one animal; an empty answer is all zeros.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn production_summary(
        &self,
        animal_id: i64,
    ) -> Result<ProductionSummary, ClientError> {
        Ok(self
            .get_optional(&format!("/api/v1/animais/{animal_id}/producao/resumo"), &[])
            .await?
            .unwrap_or_default())
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn count_production(&self) -> Result<i64, ClientError> {
        let count: Option<Count> = self
            .get_optional(&format!("{PRODUCTION}/count"), &[])
            .await?;
        Ok(count.map_or(0, |c| c.count))
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure, or
    /// [`ClientError::EmptyResponse`] if the server omits the created record.
    pub async fn create_production(
        &self,
        payload: &MilkProductionCreate,
    ) -> Result<MilkProduction, ClientError> {
        self.send_data(Method::POST, PRODUCTION, Some(payload)).await
    }

    /// # Errors
    ///
    /// Same as [`Self::create_production`].
    pub async fn update_production(
        &self,
        id: i64,
        payload: &MilkProductionUpdate,
    ) -> Result<MilkProduction, ClientError> {
        self.send_data(Method::PUT, &format!("{PRODUCTION}/{id}"), Some(payload))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn delete_production(&self, id: i64) -> Result<(), ClientError> {
        self.send_empty::<()>(Method::DELETE, &format!("{PRODUCTION}/{id}"), None)
            .await
    }
}
