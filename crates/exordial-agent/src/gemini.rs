use async_trait::async_trait;
use exordial_core::{config::Config, error::GenerateError, generator::TextGenerator};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Calls the Gemini `generateContent` REST API as the raw capability
/// behind the orchestrated flow.
///
/// Safety thresholds are relaxed: routine litigation narratives
/// (assault, negligence, consumer harm) trip the default filters. A
/// prompt the provider still refuses surfaces as a typed
/// `ContentBlocked` failure, never as empty text.
pub struct GeminiClient {
    api_key: String,
    base_url: String,
    model: String,
    timeout_s: u64,
}

impl GeminiClient {
    /// Fails when the API key is absent: a missing credential is a
    /// configuration error, never a silent default.
    pub fn from_config(config: &Config) -> Result<Self, GenerateError> {
        if config.gemini_api_key.is_empty() {
            return Err(GenerateError::InvalidCredential);
        }
        Ok(Self {
            api_key: config.gemini_api_key.clone(),
            base_url: config.gemini_base_url.clone(),
            model: config.gemini_model.clone(),
            timeout_s: config.http_timeout_s,
        })
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_s = secs;
        self
    }
}

const SAFETY_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
    #[serde(rename = "safetySettings")]
    safety_settings: Vec<SafetySetting>,
}

#[derive(Serialize)]
struct RequestContent {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct SafetySetting {
    category: &'static str,
    threshold: &'static str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    #[serde(rename = "promptFeedback")]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<Part>>,
}

#[derive(Deserialize)]
struct PromptFeedback {
    #[serde(rename = "blockReason")]
    block_reason: Option<String>,
}

/// Map a decoded 200 response body onto text or a typed failure.
pub fn parse_response(body: &str) -> Result<String, GenerateError> {
    let decoded: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| GenerateError::Malformed(e.to_string()))?;

    if let Some(reason) = decoded
        .prompt_feedback
        .and_then(|f| f.block_reason)
    {
        return Err(GenerateError::ContentBlocked { reason });
    }

    let text: String = decoded
        .candidates
        .unwrap_or_default()
        .into_iter()
        .filter_map(|c| c.content)
        .flat_map(|c| c.parts.unwrap_or_default())
        .map(|p| p.text)
        .collect::<Vec<_>>()
        .join("");

    if text.trim().is_empty() {
        return Err(GenerateError::EmptyResponse);
    }
    Ok(text)
}

/// Map a non-success HTTP status onto the typed failure space.
pub fn map_status(status: u16, body: &str) -> GenerateError {
    match status {
        401 | 403 => GenerateError::InvalidCredential,
        400 if body.contains("API key not valid") => GenerateError::InvalidCredential,
        429 => GenerateError::QuotaExceeded,
        _ if body.contains("RESOURCE_EXHAUSTED") => GenerateError::QuotaExceeded,
        _ => GenerateError::Api {
            status,
            // First 500 chars keep the failure message readable when it
            // is embedded inline in a draft.
            body: body.chars().take(500).collect(),
        },
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
        max_output_tokens: u32,
    ) -> Result<String, GenerateError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model,
            self.api_key,
        );

        let request_body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens,
                temperature: 0.7,
            },
            safety_settings: SAFETY_CATEGORIES
                .iter()
                .map(|&category| SafetySetting {
                    category,
                    threshold: "BLOCK_NONE",
                })
                .collect(),
        };

        info!(
            model = %self.model,
            prompt_len = prompt.len(),
            max_output_tokens,
            "calling gemini generateContent"
        );

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(self.timeout_s))
            .build()
            .map_err(|e| GenerateError::Transport(e.to_string()))?;

        let response = match client.post(&url).json(&request_body).send().await {
            Ok(r) => r,
            Err(e) if e.is_timeout() => {
                warn!(model = %self.model, timeout_s = self.timeout_s, "gemini request timed out");
                return Err(GenerateError::Timeout {
                    secs: self.timeout_s,
                });
            },
            Err(e) => {
                warn!(model = %self.model, "gemini request failed: {}", e);
                return Err(GenerateError::Transport(e.to_string()));
            },
        };

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GenerateError::Transport(e.to_string()))?;
        if !status.is_success() {
            warn!(model = %self.model, status = %status, "gemini returned non-200: {}", body);
            return Err(map_status(status.as_u16(), &body));
        }

        let text = parse_response(&body)?;
        info!(model = %self.model, output_len = text.len(), "gemini response received");
        Ok(text)
    }
}
