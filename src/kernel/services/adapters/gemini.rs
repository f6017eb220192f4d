//! Generation gateway: prompts the hosted model for code-only replies.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::kernel::services::ports::{GatewayConfig, GenerateError};

pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

fn format_prompt(prompt: &str) -> String {
    format!(
        "You are an expert programmer. Generate code for the following task:\n\
         {prompt}\n\
         \n\
         Requirements:\n\
         - Write complete, working code\n\
         - Include necessary imports\n\
         - Add comments explaining the code\n\
         - Follow best practices\n\
         - Return ONLY the code, no explanations\n\
         \n\
         Code:"
    )
}

fn fence_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?s)```(?:\w+)?\n(.+?)```").unwrap())
}

/// Strips a leading triple-backtick fence (optional language hint) from a
/// model reply; text without a complete fence comes back unmodified.
pub fn extract_code_block(raw: &str) -> String {
    if raw.starts_with("```") {
        if let Some(captures) = fence_pattern().captures(raw) {
            return captures[1].trim().to_string();
        }
    }
    raw.to_string()
}

fn upstream_message(body: &serde_json::Value) -> String {
    body.get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
        .unwrap_or_default()
        .to_string()
}

impl GeminiClient {
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.generation_endpoint.clone(),
            model: config.generation_model.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Single best-effort round trip; no cancellation, no retry.
    pub async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(GenerateError::InvalidApiKey);
        };

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, self.model, api_key
        );
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: format_prompt(prompt),
                }],
            }],
        };

        tracing::debug!(model = %self.model, "submitting generation prompt");

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|err| GenerateError::classify(&err.to_string()))?;

        if !response.status().is_success() {
            let message = response
                .json::<serde_json::Value>()
                .await
                .map(|body| upstream_message(&body))
                .unwrap_or_default();
            tracing::warn!(error = %message, "generation request rejected");
            return Err(GenerateError::classify(&message));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|err| GenerateError::classify(&err.to_string()))?;

        let raw = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .map(|part| part.text)
            .unwrap_or_default();

        let code = extract_code_block(&raw);
        if code.is_empty() {
            return Err(GenerateError::Empty);
        }
        Ok(code)
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/gemini.rs"]
mod tests;
