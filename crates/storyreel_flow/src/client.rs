//! HTTP client for the flow engine's run endpoint.

use crate::{FlowConfig, FlowRequest, unwrap_reply};
use reqwest::Client;
use serde_json::Value;
use storyreel_error::{FlowError, FlowErrorKind};
use tracing::{debug, error, instrument};

/// Client for the conversational-flow engine.
///
/// One call per chat turn; no retries. Network faults surface as typed
/// errors for the HTTP layer to translate into a user-facing reply.
#[derive(Debug, Clone)]
pub struct FlowClient {
    client: Client,
    config: FlowConfig,
}

impl FlowClient {
    /// Create a new client for the configured flow.
    pub fn new(config: FlowConfig) -> Self {
        debug!(flow_id = %config.flow_id, "Creating flow engine client");
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Send one chat turn through the flow and return the decoded response
    /// body as-is.
    ///
    /// # Errors
    ///
    /// - [`FlowErrorKind::Http`] when the request cannot be sent.
    /// - [`FlowErrorKind::ApiStatus`] on a non-success status.
    /// - [`FlowErrorKind::Decode`] when the body is not valid JSON.
    #[instrument(skip(self, input), fields(flow_id = %self.config.flow_id, input_len = input.len()))]
    pub async fn run(&self, input: &str, session_id: Option<&str>) -> Result<Value, FlowError> {
        let mut request = FlowRequest::new(input);
        if let Some(session) = session_id {
            request = request.with_session_id(session);
        }

        let mut builder = self.client.post(self.config.run_url()).json(&request);
        if let Some(api_key) = &self.config.api_key {
            builder = builder.header("x-api-key", api_key);
        }

        let response = builder.send().await.map_err(|e| {
            error!(error = %e, "Failed to reach the flow engine");
            FlowError::new(FlowErrorKind::Http(e.to_string()))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Flow engine returned an error status");
            return Err(FlowError::new(FlowErrorKind::ApiStatus {
                status: status.as_u16(),
                message: body,
            }));
        }

        let body: Value = response.json().await.map_err(|e| {
            error!(error = %e, "Failed to decode flow engine response");
            FlowError::new(FlowErrorKind::Decode(e.to_string()))
        })?;

        debug!("Received flow engine response");
        Ok(body)
    }

    /// Send one chat turn and unwrap the assistant's reply text.
    ///
    /// # Errors
    ///
    /// Propagates [`run`](Self::run) failures; unwrapping itself never
    /// fails; an unrecognized shape degrades to a raw-payload echo.
    #[instrument(skip(self, input))]
    pub async fn reply(&self, input: &str, session_id: Option<&str>) -> Result<String, FlowError> {
        let body = self.run(input, session_id).await?;
        Ok(unwrap_reply(&body))
    }
}
