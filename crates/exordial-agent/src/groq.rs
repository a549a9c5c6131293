use async_trait::async_trait;
use exordial_core::{
    config::Config,
    error::{DraftError, GenerateError},
    generator::PetitionGenerator,
    prompts,
    types::PetitionRequest,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Output length requested for the one-shot draft.
const MAX_TOKENS: u32 = 3_500;

/// Single-call backend: the whole petition in one OpenAI-compatible
/// chat completion.
pub struct GroqGenerator {
    api_key: String,
    base_url: String,
    model: String,
    timeout_s: u64,
}

impl GroqGenerator {
    /// Fails when the API key is absent.
    pub fn from_config(config: &Config) -> Result<Self, GenerateError> {
        if config.groq_api_key.is_empty() {
            return Err(GenerateError::InvalidCredential);
        }
        Ok(Self {
            api_key: config.groq_api_key.clone(),
            base_url: config.groq_base_url.clone(),
            model: config.groq_model.clone(),
            timeout_s: config.http_timeout_s,
        })
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_s = secs;
        self
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Option<Vec<Choice>>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Extract the completion text from a 200 response body.
pub fn parse_chat_completion(body: &str) -> Result<String, GenerateError> {
    let decoded: ChatResponse =
        serde_json::from_str(body).map_err(|e| GenerateError::Malformed(e.to_string()))?;

    let content = decoded
        .choices
        .unwrap_or_default()
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .ok_or_else(|| GenerateError::Malformed("resposta sem choices/message".into()))?;

    let content = content.trim();
    if content.is_empty() {
        return Err(GenerateError::EmptyResponse);
    }
    Ok(content.to_string())
}

#[async_trait]
impl PetitionGenerator for GroqGenerator {
    async fn generate(&self, request: &PetitionRequest) -> Result<String, DraftError> {
        let prompt = prompts::single_call_prompt(request);
        let url = format!(
            "{}/chat/completions",
            self.base_url.trim_end_matches('/'),
        );

        let request_body = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".into(),
                content: prompt,
            }],
            temperature: 0.7,
            max_tokens: MAX_TOKENS,
        };

        info!(model = %self.model, "calling groq chat completions");

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
                warn!(model = %self.model, timeout_s = self.timeout_s, "groq request timed out");
                return Err(GenerateError::Timeout {
                    secs: self.timeout_s,
                }
                .into());
            },
            Err(e) => {
                warn!(model = %self.model, "groq request failed: {}", e);
                return Err(GenerateError::Transport(e.to_string()).into());
            },
        };

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GenerateError::Transport(e.to_string()))?;
        if !status.is_success() {
            warn!(model = %self.model, status = %status, "groq returned non-200: {}", body);
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

        let text = parse_chat_completion(&body)?;
        info!(model = %self.model, output_len = text.len(), "groq response received");
        Ok(text)
    }
}
