// src/models/hotel.rs
// DOCUMENTATION: Core data structures for hotels and their image gallery
// PURPOSE: Defines serialization/deserialization models for API and database

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Represents a complete hotel record from the database
/// DOCUMENTATION: This struct maps directly to the hotels table in PostgreSQL
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Hotel {
    /// Unique identifier (UUID v4)
    pub id: Uuid,

    /// City the hotel is located in
    pub city_id: Uuid,

    /// Hotel name
    pub name: String,

    /// Marketing description
    pub description: Option<String>,

    /// Star rating (1-5)
    pub star_rating: i32,

    /// Street address
    pub address: Option<String>,

    /// Amenity tags (wifi, pool, spa, etc.)
    pub amenities: Option<Vec<String>>,

    /// When record was created
    pub created_at: DateTime<Utc>,

    /// When record was last modified
    pub updated_at: DateTime<Utc>,
}

/// Gallery image attached to a hotel
/// DOCUMENTATION: Maps to the hotel_images table; one hotel has many images
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HotelImage {
    /// Unique identifier (UUID v4)
    pub id: Uuid,

    /// Parent hotel
    pub hotel_id: Uuid,

    /// Image URL
    pub image_url: String,

    /// Accessibility text
    pub alt_text: Option<String>,

    /// Whether this is the hotel's lead image
    pub is_primary: bool,

    /// Gallery ordering (ascending)
    pub display_order: i32,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Request DTO for creating a new hotel
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreateHotelRequest {
    /// City the hotel belongs to (required)
    pub city_id: Uuid,

    /// Hotel name (required)
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    pub description: Option<String>,

    /// Star rating (1-5)
    #[validate(range(min = 1, max = 5))]
    pub star_rating: i32,

    pub address: Option<String>,

    /// Amenity tags
    #[serde(default)]
    pub amenities: Vec<String>,
}

/// Request DTO for updating an existing hotel
/// DOCUMENTATION: All fields are optional - only provided fields are updated
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateHotelRequest {
    pub city_id: Option<Uuid>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub star_rating: Option<i32>,
    pub address: Option<String>,
    pub amenities: Option<Vec<String>>,
}

/// Request DTO for attaching an image to a hotel
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreateHotelImageRequest {
    /// Parent hotel (required)
    pub hotel_id: Uuid,

    /// Image URL (required)
    #[validate(length(min = 1, max = 1024))]
    pub image_url: String,

    pub alt_text: Option<String>,

    #[serde(default)]
    pub is_primary: bool,

    #[serde(default)]
    pub display_order: i32,
}

/// Request DTO for updating a hotel image
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateHotelImageRequest {
    pub image_url: Option<String>,
    pub alt_text: Option<String>,
    pub is_primary: Option<bool>,
    pub display_order: Option<i32>,
}

/// Response DTO for API consumers
#[derive(Debug, Serialize, Deserialize)]
pub struct HotelResponse {
    pub id: Uuid,
    pub city_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub star_rating: i32,
    pub address: Option<String>,
    pub amenities: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Detailed response with the image gallery
/// DOCUMENTATION: Used for GET /api/hotels/{id}
#[derive(Debug, Serialize)]
pub struct HotelDetailResponse {
    #[serde(flatten)]
    pub hotel: HotelResponse,
    pub images: Vec<HotelImage>,
}

impl Hotel {
    pub fn to_response(&self) -> HotelResponse {
        HotelResponse {
            id: self.id,
            city_id: self.city_id,
            name: self.name.clone(),
            description: self.description.clone(),
            star_rating: self.star_rating,
            address: self.address.clone(),
            amenities: self.amenities.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
