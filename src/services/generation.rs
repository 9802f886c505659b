//! Text generation service implementation
//!
//! This service backs the `/askcohere` command: it forwards a prompt to a
//! Cohere-style `generate` endpoint, optionally through an HTTP forward proxy,
//! and returns the generated text.

use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use crate::config::settings::GenerationConfig;
use crate::utils::errors::{AskRelayError, GenerationError, GenerationResult, Result};
use crate::utils::helpers::truncate_text;

/// Request body sent to the generate endpoint
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

/// Response body of the generate endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Anything that turns a prompt into generated text
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> GenerationResult<String>;
}

/// Text generation service
#[derive(Clone)]
#[derive(Debug)]
pub struct GenerationService {
    client: Client,
    config: GenerationConfig,
}

impl GenerationService {
    /// Create a new GenerationService instance
    pub fn new(config: GenerationConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("AskRelay-Bot/1.0");

        match config.proxy() {
            Some(proxy_url) => {
                let proxy = reqwest::Proxy::all(proxy_url).map_err(|e| {
                    AskRelayError::Config(format!("Invalid proxy URL '{}': {}", proxy_url, e))
                })?;
                info!(proxy = %proxy_url, "Text generation requests go through proxy");
                builder = builder.proxy(proxy);
            }
            None => {
                info!("No proxy configured, text generation uses a direct connection");
            }
        }

        let client = builder.build().map_err(AskRelayError::Http)?;

        Ok(Self { client, config })
    }

    fn build_request(&self, prompt: &str) -> GenerateRequest {
        GenerateRequest {
            model: self.config.model.clone(),
            prompt: prompt.to_string(),
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        }
    }
}

#[async_trait]
impl TextGenerator for GenerationService {
    async fn generate(&self, prompt: &str) -> GenerationResult<String> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(GenerationError::EmptyPrompt);
        }

        debug!(prompt = %truncate_text(prompt, 64), url = %self.config.api_url, "Making text generation request");

        let response = self.client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&self.build_request(prompt))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::Timeout
                } else {
                    GenerationError::RequestFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            warn!(status = status, "Text generation service returned an error status");
            return Err(GenerationError::Status { status, body });
        }

        let body: GenerateResponse = response.json().await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

        if body.text.trim().is_empty() {
            return Err(GenerationError::EmptyResponse);
        }

        debug!(id = ?body.id, finish_reason = ?body.finish_reason, "Text generation succeeded");
        Ok(body.text)
    }
}
