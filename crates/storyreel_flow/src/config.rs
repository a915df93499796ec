//! Configuration for the flow engine connection.

use storyreel_error::ConfigError;

/// Configuration for the conversational-flow engine connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FlowConfig {
    /// Base URL of the engine (e.g., "http://localhost:7860")
    pub base_url: String,
    /// Identifier of the flow to run
    pub flow_id: String,
    /// Optional API key (a local engine doesn't require one)
    pub api_key: Option<String>,
}

impl FlowConfig {
    /// Create a new flow configuration.
    pub fn new(base_url: impl Into<String>, flow_id: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            flow_id: flow_id.into(),
            api_key: None,
        }
    }

    /// Create config from environment variables.
    ///
    /// Reads:
    /// - `STORYREEL_FLOW_BASE_URL` (default: "http://localhost:7860")
    /// - `STORYREEL_FLOW_ID` (required)
    /// - `STORYREEL_FLOW_API_KEY` (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var("STORYREEL_FLOW_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:7860".to_string());
        let flow_id = std::env::var("STORYREEL_FLOW_ID")
            .map_err(|_| ConfigError::new("STORYREEL_FLOW_ID not set"))?;
        let api_key = std::env::var("STORYREEL_FLOW_API_KEY").ok();

        Ok(Self {
            base_url,
            flow_id,
            api_key,
        })
    }

    /// Set the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Full URL of the run endpoint for the configured flow.
    pub fn run_url(&self) -> String {
        format!(
            "{}/api/v1/run/{}",
            self.base_url.trim_end_matches('/'),
            self.flow_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_url_joins_base_and_flow_id() {
        let config = FlowConfig::new("http://localhost:7860", "abc-123");
        assert_eq!(config.run_url(), "http://localhost:7860/api/v1/run/abc-123");
    }

    #[test]
    fn run_url_tolerates_trailing_slash() {
        let config = FlowConfig::new("http://localhost:7860/", "abc-123");
        assert_eq!(config.run_url(), "http://localhost:7860/api/v1/run/abc-123");
    }

    #[test]
    fn api_key_defaults_to_none() {
        let config = FlowConfig::new("http://localhost:7860", "abc");
        assert!(config.api_key.is_none());
        let config = config.with_api_key("secret");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
    }
}
