use std::sync::Arc;

use anyhow::Context;
use milk_client::MilkClient;
use milk_config::MilkConfig;
use milk_session::{AppSession, KeyValueStore, persist_cookies};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: MilkConfig,
    pub client: Arc<MilkClient>,
    pub app: AppSession,
}

impl AppContext {
    /// Connect to the API with the saved cookies, validate the session and
    /// resolve the active farm.
    pub async fn init(config: MilkConfig, storage: Arc<dyn KeyValueStore>) -> anyhow::Result<Self> {
        let client = Arc::new(MilkClient::new(&config.api).context("invalid API configuration")?);
        let app = AppSession::connect(&client, storage);

        let snapshot = app.start().await;
        tracing::debug!(
            origin = client.origin(),
            authenticated = snapshot.is_authenticated(),
            farm_id = app.resolver().active_farm().map(|farm| farm.id),
            "session started"
        );

        Ok(Self {
            config,
            client,
            app,
        })
    }

    /// Save the cookie jar so the next invocation keeps the session.
    pub fn persist_session(&self) -> anyhow::Result<()> {
        persist_cookies(&self.client, self.app.storage()).context("failed to save session cookies")
    }
}
