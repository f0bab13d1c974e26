use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A farm (`fazenda`). The unit every other CRUD screen is scoped to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Farm {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "localizacao", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Number of cows (`quantidade_vacas`).
    #[serde(rename = "quantidade_vacas", default)]
    pub headcount: i64,
    #[serde(rename = "fundacao", default, skip_serializing_if = "Option::is_none")]
    pub founded: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Farm {
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            location: None,
            headcount: 0,
            founded: None,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Payload for `POST /api/v1/fazendas`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarmCreate {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "localizacao", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "fundacao", default, skip_serializing_if = "Option::is_none")]
    pub founded: Option<DateTime<Utc>>,
}

/// Payload for `PUT /api/v1/fazendas/{id}`. Same shape as creation.
pub type FarmUpdate = FarmCreate;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_server_record() {
        let farm: Farm = serde_json::from_str(
            r#"{
                "id": 7,
                "nome": "Fazenda Alpha",
                "localizacao": "Minas Gerais",
                "quantidade_vacas": 120,
                "fundacao": "1998-03-01T00:00:00Z",
                "created_at": "2024-01-10T12:00:00Z",
                "updated_at": "2024-02-10T12:00:00Z"
            }"#,
        )
        .expect("parse");
        assert_eq!(farm.id, 7);
        assert_eq!(farm.name, "Fazenda Alpha");
        assert_eq!(farm.location.as_deref(), Some("Minas Gerais"));
        assert_eq!(farm.headcount, 120);
        assert!(farm.founded.is_some());
    }

    #[test]
    fn minimal_record_defaults_optional_fields() {
        let farm: Farm = serde_json::from_str(r#"{"id":1,"nome":"A"}"#).expect("parse");
        assert_eq!(farm, Farm::new(1, "A"));
    }

    #[test]
    fn create_payload_omits_absent_fields() {
        let payload = FarmCreate {
            name: "Nova".into(),
            location: None,
            founded: None,
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({"nome": "Nova"})
        );
    }
}
