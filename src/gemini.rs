use std::time::Duration;

use anyhow::{Context, anyhow, bail};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::GeminiConfig;

/// Outcome of a single text-generation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationResult {
    /// Non-blank answer text, exactly as returned by the provider
    Success(String),
    NoResult,
}

/// Anything that can turn a prompt into generated text.
///
/// Implementations absorb every failure into [`GenerationResult::NoResult`].
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> GenerationResult;
}

// -- request body for generateContent

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    pub fn new(prompt: &'a str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        }
    }
}

/// Client for the Gemini `generateContent` endpoint.
///
/// Built once at startup and shared across handlers; holds no mutable state.
pub struct GeminiClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    async fn request_text(&self, prompt: &str) -> anyhow::Result<String> {
        info!("Calling Gemini API at {}", self.api_url);

        // reqwest errors carry the full URL, which includes the key.
        let response = self
            .client
            .post(&self.api_url)
            .query(&[("key", self.api_key.as_str())])
            .json(&GenerateContentRequest::new(prompt))
            .send()
            .await
            .map_err(|e| anyhow!("Gemini request failed: {}", e.without_url()))?;

        let status = response.status();
        info!("Received response status: {}", status);

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            bail!("Gemini API request failed ({}): {}", status, error_text);
        }

        let body = response
            .text()
            .await
            .map_err(|e| anyhow!("Failed to read Gemini response body: {}", e.without_url()))?;
        debug!("Response body: {}", body);

        extract_text(&body)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> GenerationResult {
        match self.request_text(prompt).await {
            Ok(text) => GenerationResult::Success(text),
            Err(e) => {
                warn!("Gemini generation produced no result: {:#}", e);
                GenerationResult::NoResult
            }
        }
    }
}

/// Pull `candidates[0].content.parts[0].text` out of a generateContent body.
///
/// The text is returned untouched; only a blank answer is rejected.
pub fn extract_text(body: &str) -> anyhow::Result<String> {
    let root: Value = serde_json::from_str(body).context("Gemini response is not valid JSON")?;

    let candidate = root
        .get("candidates")
        .and_then(Value::as_array)
        .and_then(|candidates| candidates.first())
        .ok_or_else(|| anyhow!("Gemini response has no candidates"))?;

    let part = candidate
        .get("content")
        .and_then(|content| content.get("parts"))
        .and_then(Value::as_array)
        .and_then(|parts| parts.first())
        .ok_or_else(|| anyhow!("First candidate has no content parts"))?;

    match part.get("text").and_then(Value::as_str) {
        Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
        Some(_) => bail!("First content part has blank text"),
        None => bail!("First content part has no text"),
    }
}
