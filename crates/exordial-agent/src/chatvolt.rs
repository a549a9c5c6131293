use async_trait::async_trait;
use exordial_core::{
    config::Config,
    error::{DraftError, GenerateError},
    generator::PetitionGenerator,
    prompts,
    types::PetitionRequest,
};
use serde::Serialize;
use tracing::{info, warn};

/// Templated-agent backend: posts the case data to a remote Chatvolt
/// agent that carries the full structuring prompt server-side.
pub struct ChatvoltGenerator {
    api_key: String,
    agent_id: String,
    base_url: String,
    timeout_s: u64,
}

impl ChatvoltGenerator {
    /// Fails when the API key or the agent id is absent.
    pub fn from_config(config: &Config) -> Result<Self, GenerateError> {
        if config.chatvolt_api_key.is_empty() || config.chatvolt_agent_id.is_empty() {
            return Err(GenerateError::InvalidCredential);
        }
        Ok(Self {
            api_key: config.chatvolt_api_key.clone(),
            agent_id: config.chatvolt_agent_id.clone(),
            base_url: config.chatvolt_base_url.clone(),
            timeout_s: config.http_timeout_s,
        })
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_s = secs;
        self
    }
}

#[derive(Serialize)]
struct AgentQuery {
    query: String,
    streaming: bool,
}

/// Extract the agent's reply text. The reply schema has drifted between
/// API versions, so both `answer` and `response` are accepted.
pub fn parse_agent_reply(body: &str) -> Result<String, GenerateError> {
    let decoded: serde_json::Value =
        serde_json::from_str(body).map_err(|e| GenerateError::Malformed(e.to_string()))?;

    let text = decoded
        .get("answer")
        .or_else(|| decoded.get("response"))
        .and_then(|v| v.as_str())
        .ok_or_else(|| GenerateError::Malformed("resposta sem campo answer/response".into()))?;

    let text = text.trim();
    if text.is_empty() {
        return Err(GenerateError::EmptyResponse);
    }
    Ok(text.to_string())
}

#[async_trait]
impl PetitionGenerator for ChatvoltGenerator {
    async fn generate(&self, request: &PetitionRequest) -> Result<String, DraftError> {
        let url = format!(
            "{}/{}/query",
            self.base_url.trim_end_matches('/'),
            self.agent_id,
        );

        let request_body = AgentQuery {
            query: prompts::agent_query(request),
            streaming: false,
        };

        info!(agent_id = %self.agent_id, "querying chatvolt agent");

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(self.timeout_s))
            .build()
            .map_err(|e| GenerateError::Transport(e.to_string()))?;

        let response = match client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) if e.is_timeout() => {
                warn!(agent_id = %self.agent_id, timeout_s = self.timeout_s, "chatvolt request timed out");
                return Err(GenerateError::Timeout {
                    secs: self.timeout_s,
                }
                .into());
            },
            Err(e) => {
                warn!(agent_id = %self.agent_id, "chatvolt request failed: {}", e);
                return Err(GenerateError::Transport(e.to_string()).into());
            },
        };

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GenerateError::Transport(e.to_string()))?;
        if !status.is_success() {
            warn!(agent_id = %self.agent_id, status = %status, "chatvolt returned non-200: {}", body);
            let err = match status.as_u16() {
                401 | 403 => GenerateError::InvalidCredential,
                429 => GenerateError::QuotaExceeded,
                s => GenerateError::Api {
                    status: s,
                    body: body.chars().take(500).collect(),
                },
            };
            return Err(err.into());
        }

        let text = parse_agent_reply(&body)?;
        info!(agent_id = %self.agent_id, output_len = text.len(), "chatvolt reply received");
        Ok(text)
    }
}
