//! Natural-language command bar and dev studio.

use milk_core::{
    CodeGeneration, DevStudioRequest, ExecuteRequest, ExecuteResult, InterpretRequest,
    Interpretation,
};
use reqwest::Method;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{ClientError, MilkClient};

const INTERPRET: &str = "/api/v1/assistente/interpretar";
const EXECUTE: &str = "/api/v1/assistente/executar";
const DEV_STUDIO: &str = "/api/v1/dev-studio";

/// Shown when the server confirms an action without a message of its own.
pub const DEFAULT_EXECUTE_MESSAGE: &str = "Ação concluída com sucesso.";

#[derive(Serialize)]
struct Prompt<'a> {
    prompt: &'a str,
}

impl MilkClient {
    /// Ask the assistant what a free-text command means. The text is trimmed
    /// before sending.
    ///
    /// # Errors
    ///
    /// [`ClientError::RateLimited`] when the assistant quota is exhausted;
    /// [`ClientError::EmptyResponse`] if nothing was understood.
    pub async fn interpret(
        &self,
        text: &str,
        farm_id: Option<i64>,
    ) -> Result<Interpretation, ClientError> {
        let request = InterpretRequest {
            text: text.trim().to_string(),
            farm_id,
        };
        self.send_data(Method::POST, INTERPRET, Some(&request)).await
    }

    /// Run a previously interpreted intent.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn execute_intent(
        &self,
        intent: &str,
        payload: Map<String, Value>,
        farm_id: Option<i64>,
    ) -> Result<ExecuteResult, ClientError> {
        let request = ExecuteRequest {
            intent: intent.to_string(),
            payload,
            farm_id,
        };
        let envelope = self
            .send_envelope::<_, Value>(Method::POST, EXECUTE, Some(&request))
            .await?;
        Ok(ExecuteResult {
            data: envelope.data,
            message: envelope
                .message
                .unwrap_or_else(|| DEFAULT_EXECUTE_MESSAGE.to_string()),
        })
    }

    // ── Dev studio ─────────────────────────────────────────────────

    /// # Errors
    ///
    /// [`ClientError::RateLimited`] when the generation quota is exhausted.
    pub async fn dev_studio_chat(&self, prompt: &str) -> Result<CodeGeneration, ClientError> {
        self.send_data(
            Method::POST,
            &format!("{DEV_STUDIO}/chat"),
            Some(&Prompt { prompt }),
        )
        .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn dev_studio_validate(
        &self,
        request_id: i64,
    ) -> Result<DevStudioRequest, ClientError> {
        self.send_data::<(), _>(
            Method::POST,
            &format!("{DEV_STUDIO}/validate/{request_id}"),
            None,
        )
        .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn dev_studio_history(&self) -> Result<Vec<DevStudioRequest>, ClientError> {
        self.get_list(&format!("{DEV_STUDIO}/history"), &[]).await
    }

    /// # Errors
    ///
    /// [`ClientError::EmptyResponse`] if the request id is unknown.
    pub async fn dev_studio_status(&self, id: i64) -> Result<DevStudioRequest, ClientError> {
        self.get_optional(&format!("{DEV_STUDIO}/status/{id}"), &[])
            .await?
            .ok_or_else(|| ClientError::EmptyResponse {
                path: format!("{DEV_STUDIO}/status/{id}"),
            })
    }
}
