use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{HealthStatus, Sex};

/// An animal registered on a farm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    pub id: i64,
    /// Ear tag or herd identifier (`identificacao`).
    #[serde(rename = "identificacao")]
    pub tag: String,
    #[serde(rename = "raca", default)]
    pub breed: Option<String>,
    #[serde(rename = "data_nascimento", default)]
    pub birth_date: Option<DateTime<Utc>>,
    #[serde(rename = "sexo", default)]
    pub sex: Option<Sex>,
    #[serde(rename = "status_saude", default)]
    pub health: Option<HealthStatus>,
    #[serde(rename = "fazenda_id")]
    pub farm_id: i64,
    #[serde(rename = "categoria", default)]
    pub category: Option<String>,
    #[serde(rename = "status_reprodutivo", default)]
    pub reproductive_status: Option<String>,
    #[serde(rename = "mae_id", default)]
    pub dam_id: Option<i64>,
    #[serde(rename = "pai_info", default)]
    pub sire_info: Option<String>,
    #[serde(rename = "lote_id", default)]
    pub batch_id: Option<i64>,
    #[serde(rename = "peso_nascimento", default)]
    pub birth_weight: Option<f64>,
    #[serde(rename = "data_entrada", default)]
    pub entry_date: Option<DateTime<Utc>>,
    #[serde(rename = "data_saida", default)]
    pub exit_date: Option<DateTime<Utc>>,
    #[serde(rename = "motivo_saida", default)]
    pub exit_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for `POST /api/v1/animais` and `PUT /api/v1/animais/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimalCreate {
    #[serde(rename = "fazenda_id")]
    pub farm_id: i64,
    #[serde(rename = "identificacao")]
    pub tag: String,
    #[serde(rename = "raca", skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(rename = "data_nascimento", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<DateTime<Utc>>,
    #[serde(rename = "sexo", skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    #[serde(rename = "status_saude", skip_serializing_if = "Option::is_none")]
    pub health: Option<HealthStatus>,
    #[serde(rename = "categoria", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "status_reprodutivo", skip_serializing_if = "Option::is_none")]
    pub reproductive_status: Option<String>,
    #[serde(rename = "lote_id", skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<i64>,
    #[serde(rename = "mae_id", skip_serializing_if = "Option::is_none")]
    pub dam_id: Option<i64>,
    #[serde(rename = "pai_info", skip_serializing_if = "Option::is_none")]
    pub sire_info: Option<String>,
    #[serde(rename = "peso_nascimento", skip_serializing_if = "Option::is_none")]
    pub birth_weight: Option<f64>,
    #[serde(rename = "data_entrada", skip_serializing_if = "Option::is_none")]
    pub entry_date: Option<DateTime<Utc>>,
    #[serde(rename = "data_saida", skip_serializing_if = "Option::is_none")]
    pub exit_date: Option<DateTime<Utc>>,
    #[serde(rename = "motivo_saida", skip_serializing_if = "Option::is_none")]
    pub exit_reason: Option<String>,
}

pub type AnimalUpdate = AnimalCreate;

/// Payload for `POST /api/v1/animais/{id}/movimentar-lote`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchMove {
    #[serde(rename = "lote_destino_id")]
    pub target_batch_id: i64,
    #[serde(rename = "motivo", skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// `{ "count": n }` returned by the `/count` endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Count {
    #[serde(default)]
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_animal_with_typed_vocabularies() {
        let animal: Animal = serde_json::from_str(
            r#"{
                "id": 3,
                "identificacao": "BR-0042",
                "sexo": "F",
                "status_saude": "EM_TRATAMENTO",
                "fazenda_id": 7,
                "lote_id": 2,
                "created_at": "2024-01-10T12:00:00Z",
                "updated_at": "2024-01-10T12:00:00Z"
            }"#,
        )
        .expect("parse");
        assert_eq!(animal.tag, "BR-0042");
        assert_eq!(animal.sex, Some(Sex::Female));
        assert_eq!(animal.health, Some(HealthStatus::UnderTreatment));
        assert_eq!(animal.batch_id, Some(2));
        assert!(animal.breed.is_none());
    }

    #[test]
    fn batch_move_uses_wire_names() {
        let body = serde_json::to_value(BatchMove {
            target_batch_id: 5,
            reason: Some("secagem".into()),
        })
        .unwrap();
        assert_eq!(body["lote_destino_id"], 5);
        assert_eq!(body["motivo"], "secagem");
    }
}
