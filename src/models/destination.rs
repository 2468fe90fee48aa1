// src/models/destination.rs
// DOCUMENTATION: Core data structures for destinations
// PURPOSE: Defines serialization/deserialization models for API and database

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::{CityResponse, PackageResponse};

/// Represents a complete destination record from the database
/// DOCUMENTATION: This struct maps directly to the destinations table in PostgreSQL
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Destination {
    /// Unique identifier (UUID v4)
    pub id: Uuid,

    /// Destination name - unique across the catalog
    pub name: String,

    /// Country the destination belongs to
    pub country: String,

    /// Marketing description
    pub description: Option<String>,

    /// Recommended travel season, free text
    pub best_time_to_visit: Option<String>,

    /// Hero image URL
    pub image_url: Option<String>,

    /// Whether the destination is promoted on the website
    pub is_featured: bool,

    /// When record was created
    pub created_at: DateTime<Utc>,

    /// When record was last modified
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for creating a new destination
/// DOCUMENTATION: Data transfer object for POST /api/destinations
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreateDestinationRequest {
    /// Destination name (required, unique)
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// Country (required)
    #[validate(length(min = 1, max = 255))]
    pub country: String,

    /// Marketing description
    pub description: Option<String>,

    /// Recommended travel season
    pub best_time_to_visit: Option<String>,

    /// Hero image URL
    pub image_url: Option<String>,

    /// Featured flag (defaults to false)
    #[serde(default)]
    pub is_featured: bool,
}

/// Request DTO for updating an existing destination
/// DOCUMENTATION: All fields are optional - only provided fields are updated
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateDestinationRequest {
    pub name: Option<String>,
    pub country: Option<String>,
    pub description: Option<String>,
    pub best_time_to_visit: Option<String>,
    pub image_url: Option<String>,
    pub is_featured: Option<bool>,
}

/// Response DTO for API consumers
#[derive(Debug, Serialize, Deserialize)]
pub struct DestinationResponse {
    pub id: Uuid,
    pub name: String,
    pub country: String,
    pub description: Option<String>,
    pub best_time_to_visit: Option<String>,
    pub image_url: Option<String>,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Detailed response with associated records
/// DOCUMENTATION: Used for GET /api/destinations/{id}
#[derive(Debug, Serialize)]
pub struct DestinationDetailResponse {
    #[serde(flatten)]
    pub destination: DestinationResponse,
    pub cities: Vec<CityResponse>,
    pub packages: Vec<PackageResponse>,
}

impl Destination {
    /// Convert Destination to DestinationResponse for API
    pub fn to_response(&self) -> DestinationResponse {
        DestinationResponse {
            id: self.id,
            name: self.name.clone(),
            country: self.country.clone(),
            description: self.description.clone(),
            best_time_to_visit: self.best_time_to_visit.clone(),
            image_url: self.image_url.clone(),
            is_featured: self.is_featured,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
