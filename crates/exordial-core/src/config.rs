use std::collections::HashMap;

use anyhow::Result;

/// Full application configuration.
/// Loaded from the environment with `.env` fallback. API keys carry no
/// defaults: a backend whose credential is absent fails at construction
/// time rather than running against a guessed value.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend used when the caller does not pick one
    /// ("simulated", "groq", "chatvolt", "flow").
    pub default_backend: String,

    // Groq (single-call completion)
    pub groq_api_key: String,
    pub groq_base_url: String,
    pub groq_model: String,

    // Chatvolt (templated remote agent)
    pub chatvolt_api_key: String,
    pub chatvolt_agent_id: String,
    pub chatvolt_base_url: String,

    // Gemini (raw capability behind the orchestrated flow)
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    pub gemini_model: String,

    /// Per-request HTTP timeout, seconds.
    pub http_timeout_s: u64,
}

fn parse_dotenv() -> HashMap<String, String> {
    let mut map = HashMap::new();
    let Ok(contents) = std::fs::read_to_string(".env") else {
        return map;
    };
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((k, v)) = line.split_once('=') {
            map.insert(k.trim().to_string(), v.trim().to_string());
        }
    }
    map
}

fn get(key: &str, dotenv: &HashMap<String, String>) -> Option<String> {
    std::env::var(key).ok().or_else(|| dotenv.get(key).cloned())
}

fn get_str(key: &str, dotenv: &HashMap<String, String>, default: &str) -> String {
    get(key, dotenv).unwrap_or_else(|| default.to_string())
}

fn get_u64(key: &str, dotenv: &HashMap<String, String>, default: u64) -> u64 {
    get(key, dotenv)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let dotenv = parse_dotenv();

        Ok(Config {
            default_backend: get_str("EXORDIAL_BACKEND", &dotenv, "simulated"),
            groq_api_key: get_str("GROQ_API_KEY", &dotenv, ""),
            groq_base_url: get_str("GROQ_API_BASE_URL", &dotenv, "https://api.groq.com/openai/v1"),
            groq_model: get_str("GROQ_MODEL", &dotenv, "llama3-8b-8192"),
            chatvolt_api_key: get_str("CHATVOLT_API_KEY", &dotenv, ""),
            chatvolt_agent_id: get_str("CHATVOLT_AGENT_ID", &dotenv, ""),
            chatvolt_base_url: get_str(
                "CHATVOLT_API_BASE_URL",
                &dotenv,
                "https://api.chatvolt.ai/agents",
            ),
            gemini_api_key: get_str("GEMINI_API_KEY", &dotenv, ""),
            gemini_base_url: get_str(
                "GEMINI_API_BASE_URL",
                &dotenv,
                "https://generativelanguage.googleapis.com/v1beta",
            ),
            gemini_model: get_str("GEMINI_MODEL", &dotenv, "gemini-2.0-flash"),
            http_timeout_s: get_u64("HTTP_TIMEOUT_S", &dotenv, 120),
        })
    }
}

impl Default for Config {
    /// All-defaults configuration with every credential empty. Useful
    /// for tests and for the simulated backend, which needs none.
    fn default() -> Self {
        Self {
            default_backend: "simulated".into(),
            groq_api_key: String::new(),
            groq_base_url: "https://api.groq.com/openai/v1".into(),
            groq_model: "llama3-8b-8192".into(),
            chatvolt_api_key: String::new(),
            chatvolt_agent_id: String::new(),
            chatvolt_base_url: "https://api.chatvolt.ai/agents".into(),
            gemini_api_key: String::new(),
            gemini_base_url: "https://generativelanguage.googleapis.com/v1beta".into(),
            gemini_model: "gemini-2.0-flash".into(),
            http_timeout_s: 120,
        }
    }
}
