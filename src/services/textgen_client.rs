// src/services/textgen_client.rs
// DOCUMENTATION: Gemini API client
// PURPOSE: Handle communication with the hosted LLM for content generation

use crate::errors::CmsError;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Gemini API client
/// DOCUMENTATION: Handles authentication and calls to the generateContent endpoint
pub struct TextGenClient {
    /// HTTP client for making requests
    client: Client,
    /// Gemini API key
    api_key: String,
    /// Model identifier (e.g. gemini-1.5-flash)
    model: String,
    /// Base URL for the Gemini API
    base_url: String,
}

/// Request body for generateContent
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

/// Response from generateContent
/// DOCUMENTATION: Only the fields the service reads are modelled
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl TextGenClient {
    /// Create new Gemini API client
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }

    /// Whether an API key is configured
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Send a prompt and return the model's text response
    /// DOCUMENTATION: Single call, no retry and no streaming; the caller is
    /// responsible for parsing whatever the model returns
    pub async fn generate(&self, prompt: &str) -> Result<String, CmsError> {
        if self.api_key.is_empty() {
            return Err(CmsError::ExternalApiError(
                "Gemini API key not configured".to_string(),
            ));
        }

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        log::debug!(
            "Gemini generateContent: model={}, prompt_len={}",
            self.model,
            prompt.len()
        );

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                log::error!("Gemini API request failed: {}", e);
                CmsError::ExternalApiError(format!("Request failed: {}", e))
            })?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            log::error!("Gemini API quota exceeded");
            return Err(CmsError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::error!("Gemini API error {}: {}", status, body);
            return Err(CmsError::ExternalApiError(format!(
                "API error {}: {}",
                status, body
            )));
        }

        let api_response: GenerateContentResponse = response.json().await.map_err(|e| {
            log::error!("Failed to parse Gemini response: {}", e);
            CmsError::ExternalApiError(format!("Parse error: {}", e))
        })?;

        let text = api_response
            .candidates
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts)
            .map(|parts| {
                parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            log::error!("Gemini response contained no text candidates");
            return Err(CmsError::ExternalApiError(
                "Model returned an empty response".to_string(),
            ));
        }

        log::info!("Gemini returned {} chars", text.len());
        Ok(text)
    }
}
