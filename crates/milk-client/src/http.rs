//! Shared HTTP response helpers.
//!
//! Centralizes status-code mapping (401, 403, 429 with `Retry-After`,
//! other non-success → [`ClientError::Api`]) so the service modules stay
//! focused on request construction and response mapping.

use milk_core::ApiErrorBody;

use crate::error::ClientError;

/// Endpoints that never trigger the refresh-and-retry cycle. A 401 from any
/// of them means "not logged in" or "bad credentials".
pub const AUTH_ENDPOINTS: [&str; 4] = [
    "/api/auth/validate",
    "/api/auth/login",
    "/api/auth/logout",
    "/api/auth/refresh",
];

#[must_use]
pub fn is_auth_endpoint(path: &str) -> bool {
    AUTH_ENDPOINTS.iter().any(|endpoint| path.contains(endpoint))
}

/// Check an HTTP response for error conditions.
///
/// Returns the response unchanged on success.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status.as_u16() == 429 {
        return Err(ClientError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }

    let body = resp.text().await.unwrap_or_default();
    let (code, message) = parse_error_body(&body);
    Err(match status.as_u16() {
        401 => ClientError::Unauthenticated { message },
        403 => ClientError::Forbidden { message },
        other => ClientError::Api {
            status: other,
            code,
            message,
        },
    })
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(60)
}

/// Extract `(code, message)` from an error body. Non-JSON bodies yield no code
/// and the trimmed text as message.
fn parse_error_body(body: &str) -> (Option<String>, Option<String>) {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => parsed.error.map_or((None, None), |payload| {
            (payload.code().map(str::to_string), payload.best_message())
        }),
        Err(_) => {
            let trimmed = body.trim();
            (None, (!trimmed.is_empty()).then(|| trimmed.to_string()))
        }
    }
}
