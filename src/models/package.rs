// src/models/package.rs
// DOCUMENTATION: Core data structures for tour packages
// PURPOSE: Defines serialization/deserialization models for API and database

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::{CityResponse, ItineraryDayResponse, ReviewResponse, TourResponse};

/// Represents a complete package record from the database
/// DOCUMENTATION: This struct maps directly to the packages table in PostgreSQL
/// Associations (tours, cities, snippets) live in join tables and are loaded
/// separately for the detail response
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Package {
    /// Unique identifier (UUID v4)
    pub id: Uuid,

    /// Destination the package belongs to
    pub destination_id: Uuid,

    /// Package name
    pub name: String,

    /// Marketing description
    pub description: Option<String>,

    /// Trip length in days
    pub duration_days: i32,

    /// Trip length in nights
    pub duration_nights: i32,

    /// Price per person
    pub price: f64,

    /// Hero image URL
    pub image_url: Option<String>,

    /// Whether the package is promoted on the website
    pub is_featured: bool,

    /// When record was created
    pub created_at: DateTime<Utc>,

    /// When record was last modified
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for creating a new package
/// DOCUMENTATION: Data transfer object for POST /api/packages
/// The id arrays wire up join-table associations in the same request
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreatePackageRequest {
    /// Destination the package belongs to (required)
    pub destination_id: Uuid,

    /// Package name (required)
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    pub description: Option<String>,

    /// Trip length in days
    #[validate(range(min = 1))]
    pub duration_days: i32,

    /// Trip length in nights
    #[validate(range(min = 0))]
    pub duration_nights: i32,

    /// Price per person
    #[validate(range(min = 0.0))]
    pub price: f64,

    pub image_url: Option<String>,

    #[serde(default)]
    pub is_featured: bool,

    /// Tours included in the package
    #[serde(default)]
    pub tour_ids: Vec<Uuid>,

    /// Cities visited by the package
    #[serde(default)]
    pub city_ids: Vec<Uuid>,

    /// IEH snippets attached to the package
    #[serde(default)]
    pub snippet_ids: Vec<Uuid>,
}

/// Request DTO for updating an existing package
/// DOCUMENTATION: All scalar fields are optional - only provided fields are
/// updated; a provided id array replaces that association set wholesale
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdatePackageRequest {
    pub destination_id: Option<Uuid>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub duration_days: Option<i32>,
    pub duration_nights: Option<i32>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub is_featured: Option<bool>,
    pub tour_ids: Option<Vec<Uuid>>,
    pub city_ids: Option<Vec<Uuid>>,
    pub snippet_ids: Option<Vec<Uuid>>,
}

/// Response DTO for API consumers
#[derive(Debug, Serialize, Deserialize)]
pub struct PackageResponse {
    pub id: Uuid,
    pub destination_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub duration_days: i32,
    pub duration_nights: i32,
    pub price: f64,
    pub image_url: Option<String>,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Detailed response with all associated records
/// DOCUMENTATION: Used for GET /api/packages/{id}
/// Snippets are grouped into the three IEH lists the frontend renders
#[derive(Debug, Serialize)]
pub struct PackageDetailResponse {
    #[serde(flatten)]
    pub package: PackageResponse,
    pub itinerary: Vec<ItineraryDayResponse>,
    pub tours: Vec<TourResponse>,
    pub cities: Vec<CityResponse>,
    pub inclusions: Vec<String>,
    pub exclusions: Vec<String>,
    pub highlights: Vec<String>,
    pub reviews: Vec<ReviewResponse>,
}

impl Package {
    /// Convert Package to PackageResponse for API
    pub fn to_response(&self) -> PackageResponse {
        PackageResponse {
            id: self.id,
            destination_id: self.destination_id,
            name: self.name.clone(),
            description: self.description.clone(),
            duration_days: self.duration_days,
            duration_nights: self.duration_nights,
            price: self.price,
            image_url: self.image_url.clone(),
            is_featured: self.is_featured,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
