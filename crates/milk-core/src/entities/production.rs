use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::MilkQuality;

/// A single milking record (`producao_leite`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilkProduction {
    pub id: i64,
    pub animal_id: i64,
    /// Litres.
    #[serde(rename = "quantidade")]
    pub quantity: f64,
    #[serde(rename = "data_hora")]
    pub recorded_at: DateTime<Utc>,
    #[serde(rename = "qualidade", default)]
    pub quality: Option<MilkQuality>,
    pub created_at: DateTime<Utc>,
}

/// Payload for `POST /api/v1/producao`. `recorded_at` defaults to "now" server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilkProductionCreate {
    pub animal_id: i64,
    #[serde(rename = "quantidade")]
    pub quantity: f64,
    #[serde(rename = "data_hora", skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<DateTime<Utc>>,
    #[serde(rename = "qualidade", skip_serializing_if = "Option::is_none")]
    pub quality: Option<MilkQuality>,
}

pub type MilkProductionUpdate = MilkProductionCreate;

/// Per-animal totals from `/api/v1/animais/{id}/producao/resumo`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductionSummary {
    #[serde(rename = "total_litros", default)]
    pub total_litres: f64,
    #[serde(rename = "media_litros", default)]
    pub average_litres: f64,
    #[serde(rename = "total_registros", default)]
    pub records: i64,
}
