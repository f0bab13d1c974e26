//! Administrative user management. The server rejects non-admin sessions
//! with 403.

use milk_core::{User, UserCreate, UserPage, UserUpdate};
use reqwest::Method;

use crate::{ClientError, MilkClient};

const USERS: &str = "/api/v1/admin/usuarios";

impl MilkClient {
    /// One page of users. A response without payload is an empty page.
    ///
    /// # Errors
    ///
    /// [`ClientError::Forbidden`] for non-admin sessions.
    pub async fn list_users(&self, limit: u32, offset: u32) -> Result<UserPage, ClientError> {
        Ok(self
            .get_optional(
                USERS,
                &[("limit", limit.to_string()), ("offset", offset.to_string())],
            )
            .await?
            .unwrap_or_default())
    }

    /// # Errors
    ///
    /// [`ClientError::Forbidden`] for non-admin sessions.
    pub async fn create_user(&self, payload: &UserCreate) -> Result<User, ClientError> {
        self.send_data(Method::POST, USERS, Some(payload)).await
    }

    /// # Errors
    ///
    /// [`ClientError::Forbidden`] for non-admin sessions.
    pub async fn update_user(&self, id: i64, payload: &UserUpdate) -> Result<User, ClientError> {
        self.send_data(Method::PUT, &format!("{USERS}/{id}"), Some(payload))
            .await
    }

    /// Flip the user's `enabled` flag; returns the updated record.
    ///
    /// # Errors
    ///
    /// [`ClientError::Forbidden`] for non-admin sessions.
    pub async fn toggle_user_enabled(&self, id: i64) -> Result<User, ClientError> {
        self.send_data::<(), _>(Method::PATCH, &format!("{USERS}/{id}/toggle-enabled"), None)
            .await
    }
}
