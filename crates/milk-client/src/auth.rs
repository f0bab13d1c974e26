//! Session endpoints under `/api/auth`.
//!
//! The server sets and clears the session cookie itself; these wrappers only
//! carry credentials and decode the identity it reports back.

use milk_core::{Identity, RegisteredUser, Registration};
use reqwest::Method;
use serde::Serialize;

use crate::{ClientError, MilkClient};

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const LOGOUT_PATH: &str = "/api/auth/logout";
pub const VALIDATE_PATH: &str = "/api/auth/validate";
pub const REFRESH_PATH: &str = "/api/auth/refresh";
pub const REGISTER_PATH: &str = "/api/auth/register";

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

impl MilkClient {
    /// # Errors
    ///
    /// [`ClientError::Unauthenticated`] for bad credentials; any transport or
    /// API error otherwise.
    pub async fn login(&self, email: &str, password: &str) -> Result<Identity, ClientError> {
        let identity = self
            .send_data(
                Method::POST,
                LOGIN_PATH,
                Some(&Credentials { email, password }),
            )
            .await?;
        tracing::debug!(email, "logged in");
        Ok(identity)
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the server could not be reached or refused.
    pub async fn logout(&self) -> Result<(), ClientError> {
        self.send_empty::<()>(Method::POST, LOGOUT_PATH, None).await
    }

    /// Who the current cookie belongs to. A 401 means "no session" and
    /// yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Any other failure is returned; callers treat it as "no session" too.
    pub async fn validate(&self) -> Result<Option<Identity>, ClientError> {
        match self
            .send_envelope::<(), Identity>(Method::POST, VALIDATE_PATH, None)
            .await
        {
            Ok(envelope) => Ok(envelope.data),
            Err(ClientError::Unauthenticated { .. }) => Ok(None),
            Err(error) => Err(error),
        }
    }

    /// Exchange the refresh cookie for a new access token.
    ///
    /// # Errors
    ///
    /// [`ClientError::Unauthenticated`] when the refresh cookie is missing or
    /// expired.
    pub async fn refresh(&self) -> Result<(), ClientError> {
        self.send_empty::<()>(Method::POST, REFRESH_PATH, None).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Api`] on validation or conflict errors.
    pub async fn register(&self, registration: &Registration) -> Result<RegisteredUser, ClientError> {
        self.send_data(Method::POST, REGISTER_PATH, Some(registration))
            .await
    }
}
