//! Gemini `generateContent` client

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{build_prompt, AnswerModel};
use crate::config::RemoteModelConfig;
use crate::error::RemoteError;

pub struct GeminiClient {
    config: RemoteModelConfig,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: RemoteModelConfig) -> Result<Self, RemoteError> {
        if config.api_key.is_empty() {
            return Err(RemoteError::MissingApiKey);
        }
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RemoteError::Transport(e.to_string()))?;
        Ok(Self { config, client })
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint, self.config.model
        )
    }

    fn request_body(&self, prompt: &str) -> Value {
        json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "temperature": self.config.temperature,
                "maxOutputTokens": self.config.max_output_tokens,
            }
        })
    }
}

/// Pull the answer text out of a `generateContent` response
fn extract_text(data: &Value) -> Result<String, RemoteError> {
    data["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| RemoteError::Malformed("missing candidates[0].content.parts[0].text".into()))
}

#[async_trait]
impl AnswerModel for GeminiClient {
    fn name(&self) -> &str {
        &self.config.model
    }

    async fn answer(&self, query: &str, context: &str) -> Result<String, RemoteError> {
        let body = self.request_body(&build_prompt(query, context));

        let resp = self
            .client
            .post(self.url())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        let status = resp.status();
        if status.as_u16() == 429 {
            return Err(RemoteError::RateLimited);
        }
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(RemoteError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        let data: Value = resp
            .json()
            .await
            .map_err(|e| RemoteError::Malformed(e.to_string()))?;
        extract_text(&data)
    }
}
