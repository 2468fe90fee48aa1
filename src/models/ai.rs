// src/models/ai.rs
// DOCUMENTATION: Request/response DTOs for the AI generation endpoints
// PURPOSE: Shapes shared between the /api/auth/ai-generate handlers and
// the generation service

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for all three ai-generate endpoints
/// DOCUMENTATION: The frontend sends { "destinationName": "Bali" }
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct AiGenerateRequest {
    /// Destination the drafts should be written for
    #[serde(rename = "destinationName")]
    #[validate(length(min = 1, max = 255))]
    pub destination_name: String,
}

/// A generated city draft
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedCity {
    pub name: String,
    pub description: String,
}

/// A generated highlight draft
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedHighlight {
    pub label: String,
}

/// A generated package draft
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPackage {
    pub name: String,
    pub description: String,
    pub duration_days: i32,
    pub duration_nights: i32,
    pub price: f64,
}

/// Query string for GET /api/auth/image-search
#[derive(Debug, Deserialize, Validate)]
pub struct ImageSearchQuery {
    /// Search term forwarded to the stock-photo API
    #[validate(length(min = 1, max = 255))]
    pub query: String,

    /// Number of results to request (max 30)
    pub per_page: Option<u32>,
}

/// One stock-photo result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageSearchResult {
    /// Full-size image URL
    pub url: String,

    /// Smaller variant suitable for grid previews
    pub thumbnail_url: String,

    /// Attribution name required by the photo provider
    pub photographer: String,

    /// Short description of the photo
    pub alt: String,
}
