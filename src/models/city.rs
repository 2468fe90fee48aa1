// src/models/city.rs
// DOCUMENTATION: Core data structures for cities
// PURPOSE: Defines serialization/deserialization models for API and database

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Represents a complete city record from the database
/// DOCUMENTATION: This struct maps directly to the cities table in PostgreSQL
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct City {
    /// Unique identifier (UUID v4)
    pub id: Uuid,

    /// Parent destination
    pub destination_id: Uuid,

    /// City name - unique across the catalog
    pub name: String,

    /// Marketing description
    pub description: Option<String>,

    /// Image URL
    pub image_url: Option<String>,

    /// When record was created
    pub created_at: DateTime<Utc>,

    /// When record was last modified
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for creating a new city
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreateCityRequest {
    /// Parent destination (required)
    pub destination_id: Uuid,

    /// City name (required, unique)
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    pub description: Option<String>,

    pub image_url: Option<String>,
}

/// Request DTO for updating an existing city
/// DOCUMENTATION: All fields are optional - only provided fields are updated
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateCityRequest {
    pub destination_id: Option<Uuid>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// Response DTO for API consumers
#[derive(Debug, Serialize, Deserialize)]
pub struct CityResponse {
    pub id: Uuid,
    pub destination_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl City {
    pub fn to_response(&self) -> CityResponse {
        CityResponse {
            id: self.id,
            destination_id: self.destination_id,
            name: self.name.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
