//! Response envelopes produced by the CeialMilk API.
//!
//! Success bodies are `{ "data": T, "message": "...", "timestamp": "..." }`.
//! Error bodies are `{ "error": { "code", "message", "details" }, "timestamp" }`,
//! though some handlers still answer with `{ "error": "plain text" }`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Success envelope. Every field is optional on the wire.
///
/// Missing `Option` fields deserialize as `None` without `#[serde(default)]`,
/// which would otherwise put a `T: Default` bound on `Deserialize`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: Option<T>,
    pub message: Option<String>,
    pub timestamp: Option<String>,
}

impl<T> ApiEnvelope<T> {
    #[must_use]
    pub const fn new(data: T) -> Self {
        Self {
            data: Some(data),
            message: None,
            timestamp: None,
        }
    }
}

/// Error envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<ErrorPayload>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// The `error` field: either a bare string or a structured detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorPayload {
    Text(String),
    Detail {
        #[serde(default)]
        code: Option<String>,
        #[serde(default)]
        message: Option<String>,
        #[serde(default)]
        details: Option<Value>,
    },
}

impl ErrorPayload {
    /// Server error code (`VALIDATION_ERROR`, `FORBIDDEN`, ...), if structured.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Text(_) => None,
            Self::Detail { code, .. } => code.as_deref(),
        }
    }

    /// Most specific human-readable text: plain string, then string `details`,
    /// then `message`. Blank values are skipped.
    #[must_use]
    pub fn best_message(&self) -> Option<String> {
        let non_blank = |s: &str| {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };
        match self {
            Self::Text(text) => non_blank(text),
            Self::Detail {
                message, details, ..
            } => details
                .as_ref()
                .and_then(Value::as_str)
                .and_then(non_blank)
                .or_else(|| message.as_deref().and_then(non_blank)),
        }
    }
}
