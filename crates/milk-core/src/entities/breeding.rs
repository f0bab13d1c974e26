//! Reproductive-management records: heats, coverings, pregnancy checks,
//! gestations, births, drying-off and lactations.
//!
//! Every record is scoped to a farm (`fazenda_id`) and an animal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A detected heat (`cio`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heat {
    pub id: i64,
    pub animal_id: i64,
    #[serde(rename = "data_detectado")]
    pub detected_at: DateTime<Utc>,
    #[serde(rename = "metodo_deteccao", default)]
    pub detection_method: Option<String>,
    #[serde(rename = "intensidade", default)]
    pub intensity: Option<String>,
    #[serde(rename = "observacoes", default)]
    pub notes: Option<String>,
    #[serde(rename = "usuario_id", default)]
    pub recorded_by: Option<i64>,
    #[serde(rename = "fazenda_id")]
    pub farm_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatCreate {
    pub animal_id: i64,
    #[serde(rename = "data_detectado")]
    pub detected_at: DateTime<Utc>,
    #[serde(rename = "metodo_deteccao", skip_serializing_if = "Option::is_none")]
    pub detection_method: Option<String>,
    #[serde(rename = "intensidade", skip_serializing_if = "Option::is_none")]
    pub intensity: Option<String>,
    #[serde(rename = "observacoes", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(rename = "fazenda_id")]
    pub farm_id: i64,
}

/// A covering or insemination (`cobertura`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Covering {
    pub id: i64,
    pub animal_id: i64,
    /// Natural service, AI, IATF, ... (`tipo`).
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "data")]
    pub date: DateTime<Utc>,
    #[serde(rename = "fazenda_id")]
    pub farm_id: i64,
    #[serde(rename = "touro_animal_id", default)]
    pub bull_animal_id: Option<i64>,
    #[serde(rename = "touro_info", default)]
    pub bull_info: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoveringCreate {
    pub animal_id: i64,
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "data")]
    pub date: DateTime<Utc>,
    #[serde(rename = "fazenda_id")]
    pub farm_id: i64,
    #[serde(rename = "cio_id", skip_serializing_if = "Option::is_none")]
    pub heat_id: Option<i64>,
    #[serde(rename = "touro_animal_id", skip_serializing_if = "Option::is_none")]
    pub bull_animal_id: Option<i64>,
    #[serde(rename = "touro_info", skip_serializing_if = "Option::is_none")]
    pub bull_info: Option<String>,
    #[serde(rename = "semen_partida", skip_serializing_if = "Option::is_none")]
    pub semen_lot: Option<String>,
    #[serde(rename = "tecnico", skip_serializing_if = "Option::is_none")]
    pub technician: Option<String>,
    #[serde(rename = "protocolo_id", skip_serializing_if = "Option::is_none")]
    pub protocol_id: Option<i64>,
    #[serde(rename = "observacoes", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A pregnancy check (`toque` / `diagnostico_gestacao`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PregnancyCheck {
    pub id: i64,
    pub animal_id: i64,
    #[serde(rename = "data")]
    pub date: DateTime<Utc>,
    #[serde(rename = "resultado")]
    pub result: String,
    #[serde(rename = "fazenda_id")]
    pub farm_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PregnancyCheckCreate {
    pub animal_id: i64,
    #[serde(rename = "data")]
    pub date: DateTime<Utc>,
    #[serde(rename = "resultado")]
    pub result: String,
    #[serde(rename = "fazenda_id")]
    pub farm_id: i64,
    #[serde(rename = "cobertura_id", skip_serializing_if = "Option::is_none")]
    pub covering_id: Option<i64>,
    #[serde(rename = "dias_gestacao_estimados", skip_serializing_if = "Option::is_none")]
    pub estimated_days: Option<i32>,
    #[serde(rename = "metodo", skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(rename = "veterinario", skip_serializing_if = "Option::is_none")]
    pub veterinarian: Option<String>,
    #[serde(rename = "observacoes", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A confirmed gestation. Created server-side from a positive check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gestation {
    pub id: i64,
    pub animal_id: i64,
    #[serde(rename = "cobertura_id")]
    pub covering_id: i64,
    #[serde(rename = "data_confirmacao")]
    pub confirmed_at: DateTime<Utc>,
    pub status: String,
    #[serde(rename = "fazenda_id")]
    pub farm_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A birth (`parto`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Birth {
    pub id: i64,
    pub animal_id: i64,
    #[serde(rename = "data")]
    pub date: DateTime<Utc>,
    #[serde(rename = "numero_crias")]
    pub offspring: i32,
    #[serde(rename = "fazenda_id")]
    pub farm_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthCreate {
    pub animal_id: i64,
    #[serde(rename = "data")]
    pub date: DateTime<Utc>,
    #[serde(rename = "fazenda_id")]
    pub farm_id: i64,
    #[serde(rename = "gestacao_id", skip_serializing_if = "Option::is_none")]
    pub gestation_id: Option<i64>,
    #[serde(rename = "tipo", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "numero_crias", skip_serializing_if = "Option::is_none")]
    pub offspring: Option<i32>,
    #[serde(rename = "complicacoes", skip_serializing_if = "Option::is_none")]
    pub complications: Option<String>,
    #[serde(rename = "observacoes", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Drying-off (`secagem`): end of milking before the next calving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DryOff {
    pub id: i64,
    pub animal_id: i64,
    #[serde(rename = "data_secagem")]
    pub date: DateTime<Utc>,
    #[serde(rename = "fazenda_id")]
    pub farm_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DryOffCreate {
    pub animal_id: i64,
    #[serde(rename = "data_secagem")]
    pub date: DateTime<Utc>,
    #[serde(rename = "fazenda_id")]
    pub farm_id: i64,
    #[serde(rename = "gestacao_id", skip_serializing_if = "Option::is_none")]
    pub gestation_id: Option<i64>,
    #[serde(rename = "data_prevista_parto", skip_serializing_if = "Option::is_none")]
    pub expected_calving: Option<DateTime<Utc>>,
    #[serde(rename = "protocolo", skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(rename = "motivo", skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(rename = "observacoes", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A lactation period (`lactacao`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lactation {
    pub id: i64,
    pub animal_id: i64,
    #[serde(rename = "numero_lactacao")]
    pub number: i32,
    #[serde(rename = "data_inicio")]
    pub started_at: DateTime<Utc>,
    #[serde(rename = "fazenda_id")]
    pub farm_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LactationCreate {
    pub animal_id: i64,
    #[serde(rename = "numero_lactacao")]
    pub number: i32,
    #[serde(rename = "data_inicio")]
    pub started_at: DateTime<Utc>,
    #[serde(rename = "fazenda_id")]
    pub farm_id: i64,
    #[serde(rename = "parto_id", skip_serializing_if = "Option::is_none")]
    pub birth_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
