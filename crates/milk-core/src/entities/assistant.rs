//! Request/response shapes for the natural-language assistant and the
//! dev-studio endpoints. The model integration lives server-side.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpretRequest {
    #[serde(rename = "texto")]
    pub text: String,
    #[serde(rename = "fazenda_id", skip_serializing_if = "Option::is_none")]
    pub farm_id: Option<i64>,
}

/// What the assistant understood from a command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interpretation {
    pub intent: String,
    #[serde(default)]
    pub payload: Map<String, Value>,
    /// Human-readable summary to confirm before executing (`resumo`).
    #[serde(rename = "resumo", default)]
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecuteRequest {
    pub intent: String,
    pub payload: Map<String, Value>,
    #[serde(rename = "fazenda_id", skip_serializing_if = "Option::is_none")]
    pub farm_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecuteResult {
    pub data: Option<Value>,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedChanges {
    #[serde(default)]
    pub files: BTreeMap<String, String>,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// A dev-studio code generation request and its lifecycle state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevStudioRequest {
    pub id: i64,
    pub user_id: i64,
    pub prompt: String,
    pub status: String,
    #[serde(default)]
    pub code_changes: GeneratedChanges,
    #[serde(default)]
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeGeneration {
    pub request_id: i64,
    #[serde(default)]
    pub files: BTreeMap<String, String>,
    #[serde(default)]
    pub explanation: String,
    pub status: String,
}
