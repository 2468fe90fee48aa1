// src/models/itinerary.rs
// DOCUMENTATION: Core data structures for per-day package itineraries
// PURPOSE: Defines serialization/deserialization models for API and database

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// One day of a package itinerary
/// DOCUMENTATION: Maps to the itinerary_days table; (package_id, day_number)
/// is unique so a package cannot have two entries for the same day
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ItineraryDay {
    /// Unique identifier (UUID v4)
    pub id: Uuid,

    /// Parent package
    pub package_id: Uuid,

    /// Day number within the trip (1-based)
    pub day_number: i32,

    /// Day title ("Arrival in Ubud")
    pub title: String,

    /// Free-text details for the day
    pub details: Option<String>,

    /// Structured per-day content (highlights, inclusions, exclusions)
    /// stored as a JSON blob
    pub day_plan: Option<Value>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Request DTO for creating an itinerary day
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreateItineraryDayRequest {
    /// Parent package (required)
    pub package_id: Uuid,

    /// Day number within the trip (required, 1-based)
    #[validate(range(min = 1))]
    pub day_number: i32,

    /// Day title (required)
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    pub details: Option<String>,

    /// Structured per-day content
    pub day_plan: Option<Value>,
}

/// Request DTO for updating an itinerary day
/// DOCUMENTATION: All fields are optional - only provided fields are updated
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateItineraryDayRequest {
    pub day_number: Option<i32>,
    pub title: Option<String>,
    pub details: Option<String>,
    pub day_plan: Option<Value>,
}

/// Response DTO for API consumers
#[derive(Debug, Serialize, Deserialize)]
pub struct ItineraryDayResponse {
    pub id: Uuid,
    pub package_id: Uuid,
    pub day_number: i32,
    pub title: String,
    pub details: Option<String>,
    pub day_plan: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ItineraryDay {
    pub fn to_response(&self) -> ItineraryDayResponse {
        ItineraryDayResponse {
            id: self.id,
            package_id: self.package_id,
            day_number: self.day_number,
            title: self.title.clone(),
            details: self.details.clone(),
            day_plan: self.day_plan.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
