//! # milk-client
//!
//! REST client for the CeialMilk API.
//!
//! One [`MilkClient`] talks to one API origin. The session lives in an
//! HTTP-only cookie held by a [`SessionJar`]; any request that comes back
//! 401 triggers exactly one silent `POST /api/auth/refresh` followed by a
//! single retry, except for the four auth endpoints themselves.
//!
//! Endpoint wrappers are grouped per resource:
//! - [`auth`]: login, logout, validate, refresh, register
//! - [`farms`]: farms and the caller's own farm membership
//! - [`animals`], [`production`], [`breeding`], [`batches`]
//! - [`admin`]: user management
//! - [`assistant`]: command bar and dev studio

pub mod admin;
pub mod animals;
pub mod assistant;
pub mod auth;
pub mod batches;
pub mod breeding;
pub mod farms;
pub mod production;

mod cookies;
mod error;
mod http;

pub use cookies::{SessionJar, TOKEN_COOKIE};
pub use error::{ClientError, RATE_LIMIT_MESSAGE};
pub use http::{AUTH_ENDPOINTS, is_auth_endpoint};

use std::sync::Arc;
use std::time::Duration;

use milk_config::ApiConfig;
use milk_core::ApiEnvelope;
use reqwest::{Method, RequestBuilder, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::http::check_response;

/// Query-string pairs; values are pre-rendered strings.
pub(crate) type Query<'a> = [(&'a str, String)];

/// HTTP client for the CeialMilk REST API.
#[derive(Debug, Clone)]
pub struct MilkClient {
    http: reqwest::Client,
    origin: String,
    jar: Arc<SessionJar>,
}

impl MilkClient {
    /// Build a client from the `[api]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Url`] if the base URL does not parse, or
    /// [`ClientError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let origin = config.origin().to_string();
        Url::parse(&origin).map_err(|e| ClientError::Url {
            url: origin.clone(),
            reason: e.to_string(),
        })?;

        let jar = Arc::new(SessionJar::new());
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .cookie_provider(Arc::clone(&jar))
            .build()?;

        Ok(Self { http, origin, jar })
    }

    /// Build a client for `base_url` with default timeout and user agent.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::new(&ApiConfig {
            base_url: base_url.into(),
            ..ApiConfig::default()
        })
    }

    /// API origin without a trailing slash.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Cookies currently held, for persisting the session between runs.
    #[must_use]
    pub fn cookie_snapshot(&self) -> Vec<String> {
        self.jar.snapshot()
    }

    /// Bring back cookies saved by [`Self::cookie_snapshot`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Url`] if the origin cannot be parsed.
    pub fn restore_cookies(&self, cookies: &[String]) -> Result<(), ClientError> {
        let url = Url::parse(&self.origin).map_err(|e| ClientError::Url {
            url: self.origin.clone(),
            reason: e.to_string(),
        })?;
        self.jar.restore(&url, cookies);
        Ok(())
    }

    /// Drop every session cookie locally, whatever the server last said.
    pub fn clear_session_cookies(&self) {
        self.jar.clear();
    }

    /// Whether the jar currently holds an access-token cookie.
    #[must_use]
    pub fn has_session_cookie(&self) -> bool {
        self.jar.has_token()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.origin)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.url(path))
    }

    /// Send a request, refreshing the session and retrying once on 401.
    ///
    /// The refresh is skipped for the auth endpoints, and for requests whose
    /// body cannot be replayed.
    async fn execute(
        &self,
        path: &str,
        request: RequestBuilder,
    ) -> Result<reqwest::Response, ClientError> {
        let replay = request.try_clone();
        let resp = request.send().await?;

        if resp.status() == StatusCode::UNAUTHORIZED
            && !is_auth_endpoint(path)
            && let Some(replay) = replay
        {
            tracing::debug!(path, "access token rejected, refreshing session");
            match self.refresh_session().await {
                Ok(()) => return check_response(replay.send().await?).await,
                Err(error) => tracing::debug!(path, %error, "session refresh failed"),
            }
        }

        check_response(resp).await
    }

    /// `POST /api/auth/refresh` without going through [`Self::execute`], so a
    /// failing refresh can never trigger another refresh.
    async fn refresh_session(&self) -> Result<(), ClientError> {
        let resp = self
            .request(Method::POST, auth::REFRESH_PATH)
            .send()
            .await?;
        check_response(resp).await?;
        Ok(())
    }

    async fn envelope<T: DeserializeOwned>(
        &self,
        path: &str,
        request: RequestBuilder,
    ) -> Result<ApiEnvelope<T>, ClientError> {
        let resp = self.execute(path, request).await?;
        Ok(resp.json().await?)
    }

    /// GET returning `data`, or `None` when the envelope carries none.
    pub(crate) async fn get_optional<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query<'_>,
    ) -> Result<Option<T>, ClientError> {
        let request = self.request(Method::GET, path).query(query);
        Ok(self.envelope(path, request).await?.data)
    }

    /// GET returning a list; a missing `data` is an empty list.
    pub(crate) async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query<'_>,
    ) -> Result<Vec<T>, ClientError> {
        Ok(self.get_optional(path, query).await?.unwrap_or_default())
    }

    /// Send a JSON body (or none) and require `data` in the response.
    pub(crate) async fn send_data<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_envelope(method, path, body)
            .await?
            .data
            .ok_or_else(|| ClientError::EmptyResponse {
                path: path.to_string(),
            })
    }

    /// Send a JSON body (or none) and return the whole envelope.
    pub(crate) async fn send_envelope<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiEnvelope<T>, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = self.request(method, path);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.envelope(path, request).await
    }

    /// Send and discard the response body.
    pub(crate) async fn send_empty<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), ClientError>
    where
        B: Serialize + ?Sized,
    {
        let mut request = self.request(method, path);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute(path, request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_drops_trailing_slash() {
        let client = MilkClient::with_base_url("http://localhost:8080/").unwrap();
        assert_eq!(client.origin(), "http://localhost:8080");
        assert_eq!(
            client.url("/api/v1/fazendas"),
            "http://localhost:8080/api/v1/fazendas"
        );
    }

    #[test]
    fn fresh_client_has_no_session_cookie() {
        let client = MilkClient::with_base_url("http://localhost:8080").unwrap();
        assert!(!client.has_session_cookie());
        assert!(client.cookie_snapshot().is_empty());
    }

    #[test]
    fn restored_cookies_are_visible() {
        let client = MilkClient::with_base_url("http://localhost:8080").unwrap();
        client
            .restore_cookies(&["ceialmilk_token=abc; Path=/".to_string()])
            .unwrap();
        assert!(client.has_session_cookie());
    }

    #[test]
    fn cleared_client_has_nothing_to_persist() {
        let client = MilkClient::with_base_url("http://localhost:8080").unwrap();
        client
            .restore_cookies(&["ceialmilk_token=abc; Path=/".to_string()])
            .unwrap();
        client.clear_session_cookies();
        assert!(!client.has_session_cookie());
        assert!(client.cookie_snapshot().is_empty());
    }
}
