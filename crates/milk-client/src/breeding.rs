//! Reproductive management endpoints.
//!
//! Every list is scoped to one farm through the `fazenda_id` query parameter.

use milk_core::{
    Birth, BirthCreate, Covering, CoveringCreate, DryOff, DryOffCreate, Gestation, Heat,
    HeatCreate, Lactation, LactationCreate, PregnancyCheck, PregnancyCheckCreate,
};
use reqwest::Method;

use crate::{ClientError, MilkClient};

const HEATS: &str = "/api/v1/cios";
const COVERINGS: &str = "/api/v1/coberturas";
const CHECKS: &str = "/api/v1/toques";
const GESTATIONS: &str = "/api/v1/gestacoes";
const BIRTHS: &str = "/api/v1/partos";
const DRY_OFFS: &str = "/api/v1/secagens";
const LACTATIONS: &str = "/api/v1/lactacoes";

fn farm_scope(farm_id: i64) -> [(&'static str, String); 1] {
    [("fazenda_id", farm_id.to_string())]
}

impl MilkClient {
    // ── Heats ──────────────────────────────────────────────────────

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn list_heats(&self, farm_id: i64) -> Result<Vec<Heat>, ClientError> {
        self.get_list(HEATS, &farm_scope(farm_id)).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn list_heats_by_animal(&self, animal_id: i64) -> Result<Vec<Heat>, ClientError> {
        self.get_list(&format!("{HEATS}/by-animal/{animal_id}"), &[])
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn get_heat(&self, id: i64) -> Result<Option<Heat>, ClientError> {
        self.get_optional(&format!("{HEATS}/{id}"), &[]).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn create_heat(&self, payload: &HeatCreate) -> Result<Heat, ClientError> {
        self.send_data(Method::POST, HEATS, Some(payload)).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn delete_heat(&self, id: i64) -> Result<(), ClientError> {
        self.send_empty::<()>(Method::DELETE, &format!("{HEATS}/{id}"), None)
            .await
    }

    // ── Coverings ──────────────────────────────────────────────────

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn list_coverings(&self, farm_id: i64) -> Result<Vec<Covering>, ClientError> {
        self.get_list(COVERINGS, &farm_scope(farm_id)).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn get_covering(&self, id: i64) -> Result<Option<Covering>, ClientError> {
        self.get_optional(&format!("{COVERINGS}/{id}"), &[]).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn create_covering(&self, payload: &CoveringCreate) -> Result<Covering, ClientError> {
        self.send_data(Method::POST, COVERINGS, Some(payload)).await
    }

    // ── Pregnancy checks ───────────────────────────────────────────

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn list_pregnancy_checks(
        &self,
        farm_id: i64,
    ) -> Result<Vec<PregnancyCheck>, ClientError> {
        self.get_list(CHECKS, &farm_scope(farm_id)).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn create_pregnancy_check(
        &self,
        payload: &PregnancyCheckCreate,
    ) -> Result<PregnancyCheck, ClientError> {
        self.send_data(Method::POST, CHECKS, Some(payload)).await
    }

    // ── Gestations ─────────────────────────────────────────────────

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn list_gestations(&self, farm_id: i64) -> Result<Vec<Gestation>, ClientError> {
        self.get_list(GESTATIONS, &farm_scope(farm_id)).await
    }

    // ── Births ─────────────────────────────────────────────────────

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn list_births(&self, farm_id: i64) -> Result<Vec<Birth>, ClientError> {
        self.get_list(BIRTHS, &farm_scope(farm_id)).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn create_birth(&self, payload: &BirthCreate) -> Result<Birth, ClientError> {
        self.send_data(Method::POST, BIRTHS, Some(payload)).await
    }

    // ── Drying-off ─────────────────────────────────────────────────

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn list_dry_offs(&self, farm_id: i64) -> Result<Vec<DryOff>, ClientError> {
        self.get_list(DRY_OFFS, &farm_scope(farm_id)).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn create_dry_off(&self, payload: &DryOffCreate) -> Result<DryOff, ClientError> {
        self.send_data(Method::POST, DRY_OFFS, Some(payload)).await
    }

    // ── Lactations ─────────────────────────────────────────────────

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn list_lactations(&self, farm_id: i64) -> Result<Vec<Lactation>, ClientError> {
        self.get_list(LACTATIONS, &farm_scope(farm_id)).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn create_lactation(
        &self,
        payload: &LactationCreate,
    ) -> Result<Lactation, ClientError> {
        self.send_data(Method::POST, LACTATIONS, Some(payload)).await
    }
}
