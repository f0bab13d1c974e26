//! Client error types.

use thiserror::Error;

/// Fixed text shown when the API answers 429.
pub const RATE_LIMIT_MESSAGE: &str = "Limite de requisições atingido. Tente novamente mais tarde.";

/// Errors that can occur when talking to the CeialMilk API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error (connect, timeout, body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A request URL could not be built from the configured base URL.
    #[error("invalid URL '{url}': {reason}")]
    Url { url: String, reason: String },

    /// No valid session: 401 on an auth endpoint, or 401 after the refresh retry.
    #[error("not authenticated{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Unauthenticated { message: Option<String> },

    /// Authenticated but not allowed (403).
    #[error("access denied{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Forbidden { message: Option<String> },

    /// The API returned 429 Too Many Requests.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// Any other non-success status.
    #[error("API error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        /// Server error code (`VALIDATION_ERROR`, `NOT_FOUND`, ...).
        code: Option<String>,
        message: Option<String>,
    },

    /// A success envelope arrived without the `data` the call requires.
    #[error("empty response from {path}")]
    EmptyResponse { path: String },
}

impl ClientError {
    /// HTTP status behind this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthenticated { .. } => Some(401),
            Self::Forbidden { .. } => Some(403),
            Self::RateLimited { .. } => Some(429),
            Self::Api { status, .. } => Some(*status),
            Self::Http(_) | Self::Url { .. } | Self::EmptyResponse { .. } => None,
        }
    }

    /// Text suitable for an inline error next to the control that triggered
    /// the request. 429 always maps to [`RATE_LIMIT_MESSAGE`]; otherwise the
    /// server's own message is used when present, else `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::RateLimited { .. } => RATE_LIMIT_MESSAGE.to_string(),
            Self::Unauthenticated { message: Some(m) }
            | Self::Forbidden { message: Some(m) }
            | Self::Api {
                message: Some(m), ..
            } => m.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limited_always_uses_fixed_message() {
        let err = ClientError::RateLimited {
            retry_after_secs: 10,
        };
        assert_eq!(err.user_message("fallback"), RATE_LIMIT_MESSAGE);
        assert_eq!(err.status(), Some(429));
    }

    #[test]
    fn api_message_wins_over_fallback() {
        let err = ClientError::Api {
            status: 422,
            code: Some("VALIDATION_ERROR".into()),
            message: Some("nome é obrigatório".into()),
        };
        assert_eq!(err.user_message("Erro ao salvar"), "nome é obrigatório");
        assert_eq!(err.to_string(), "API error (422): nome é obrigatório");
    }

    #[test]
    fn fallback_used_without_server_message() {
        let err = ClientError::Api {
            status: 500,
            code: None,
            message: None,
        };
        assert_eq!(err.user_message("Erro ao salvar"), "Erro ao salvar");

        let err = ClientError::EmptyResponse {
            path: "/api/v1/fazendas".into(),
        };
        assert_eq!(err.user_message("Resposta inválida"), "Resposta inválida");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn display_includes_optional_message() {
        let bare = ClientError::Unauthenticated { message: None };
        assert_eq!(bare.to_string(), "not authenticated");
        let with = ClientError::Forbidden {
            message: Some("somente ADMIN".into()),
        };
        assert_eq!(with.to_string(), "access denied: somente ADMIN");
    }
}
