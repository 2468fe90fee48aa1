// src/services/image_search_client.rs
// DOCUMENTATION: Pexels API client
// PURPOSE: Stock-photo search proxied to the admin image picker

use crate::errors::CmsError;
use crate::models::ImageSearchResult;
use reqwest::Client;
use serde::Deserialize;

/// Maximum results per request accepted by the proxy
const MAX_PER_PAGE: u32 = 30;

/// Pexels API client
/// DOCUMENTATION: Authenticates with the raw API key in the Authorization header
pub struct ImageSearchClient {
    /// HTTP client for making requests
    client: Client,
    /// Pexels API key
    api_key: String,
    /// Base URL for the Pexels API
    base_url: String,
}

/// Response from Pexels photo search
#[derive(Debug, Deserialize)]
struct PexelsSearchResponse {
    photos: Vec<PexelsPhoto>,
}

/// Individual photo from Pexels
#[derive(Debug, Deserialize)]
struct PexelsPhoto {
    src: PexelsSrc,
    photographer: String,
    #[serde(default)]
    alt: String,
}

/// Size variants of one photo
#[derive(Debug, Deserialize)]
struct PexelsSrc {
    large: String,
    medium: String,
}

impl ImageSearchClient {
    /// Create new Pexels API client
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: "https://api.pexels.com/v1".to_string(),
        }
    }

    /// Whether an API key is configured
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Search stock photos
    /// DOCUMENTATION: Used by GET /api/auth/image-search
    /// Results are mapped to the shape the admin frontend renders
    pub async fn search(
        &self,
        query: &str,
        per_page: Option<u32>,
    ) -> Result<Vec<ImageSearchResult>, CmsError> {
        if self.api_key.is_empty() {
            return Err(CmsError::ExternalApiError(
                "Pexels API key not configured".to_string(),
            ));
        }

        let url = format!("{}/search", self.base_url);
        let per_page = per_page.unwrap_or(12).clamp(1, MAX_PER_PAGE);

        log::debug!("Pexels search: query='{}', per_page={}", query, per_page);

        let response = self
            .client
            .get(&url)
            .header("Authorization", &self.api_key)
            .query(&[("query", query), ("per_page", &per_page.to_string())])
            .send()
            .await
            .map_err(|e| {
                log::error!("Pexels API request failed: {}", e);
                CmsError::ExternalApiError(format!("Request failed: {}", e))
            })?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            log::error!("Pexels API quota exceeded");
            return Err(CmsError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::error!("Pexels API error {}: {}", status, body);
            return Err(CmsError::ExternalApiError(format!(
                "API error {}: {}",
                status, body
            )));
        }

        let api_response: PexelsSearchResponse = response.json().await.map_err(|e| {
            log::error!("Failed to parse Pexels response: {}", e);
            CmsError::ExternalApiError(format!("Parse error: {}", e))
        })?;

        let results: Vec<ImageSearchResult> = api_response
            .photos
            .into_iter()
            .map(|photo| ImageSearchResult {
                url: photo.src.large,
                thumbnail_url: photo.src.medium,
                photographer: photo.photographer,
                alt: photo.alt,
            })
            .collect();

        log::info!("Pexels search returned {} results", results.len());
        Ok(results)
    }
}
