// src/models/tour.rs
// DOCUMENTATION: Core data structures for tours

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A bookable tour activity, attached to packages via package_tours
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Tour {
    /// Unique identifier (UUID v4)
    pub id: Uuid,

    /// Tour name
    pub name: String,

    pub description: Option<String>,

    /// Category: sightseeing, adventure, cultural, etc.
    pub tour_type: Option<String>,

    pub image_url: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Request DTO for creating a new tour
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreateTourRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    pub description: Option<String>,

    pub tour_type: Option<String>,

    pub image_url: Option<String>,
}

/// Request DTO for updating an existing tour
/// DOCUMENTATION: All fields are optional - only provided fields are updated
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateTourRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub tour_type: Option<String>,
    pub image_url: Option<String>,
}

/// Response DTO for API consumers
#[derive(Debug, Serialize, Deserialize)]
pub struct TourResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub tour_type: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tour {
    pub fn to_response(&self) -> TourResponse {
        TourResponse {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            tour_type: self.tour_type.clone(),
            image_url: self.image_url.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
