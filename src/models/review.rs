// src/models/review.rs
// DOCUMENTATION: Core data structures for package reviews

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A customer review attached to a package
/// DOCUMENTATION: The public website only sees reviews with is_approved = true
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Review {
    /// Unique identifier (UUID v4)
    pub id: Uuid,

    /// Reviewed package
    pub package_id: Uuid,

    /// Display name of the reviewer
    pub author_name: String,

    /// Rating (1-5)
    pub rating: i32,

    /// Review headline
    pub title: Option<String>,

    /// Review body
    pub content: Option<String>,

    /// Moderation flag
    pub is_approved: bool,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Request DTO for creating a new review
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreateReviewRequest {
    /// Reviewed package (required)
    pub package_id: Uuid,

    #[validate(length(min = 1, max = 255))]
    pub author_name: String,

    /// Rating (1-5)
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,

    pub title: Option<String>,

    pub content: Option<String>,

    /// Moderation flag (defaults to false)
    #[serde(default)]
    pub is_approved: bool,
}

/// Request DTO for updating an existing review
/// DOCUMENTATION: All fields are optional - only provided fields are updated
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateReviewRequest {
    pub author_name: Option<String>,
    pub rating: Option<i32>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub is_approved: Option<bool>,
}

/// Response DTO for API consumers
#[derive(Debug, Serialize, Deserialize)]
pub struct ReviewResponse {
    pub id: Uuid,
    pub package_id: Uuid,
    pub author_name: String,
    pub rating: i32,
    pub title: Option<String>,
    pub content: Option<String>,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    pub fn to_response(&self) -> ReviewResponse {
        ReviewResponse {
            id: self.id,
            package_id: self.package_id,
            author_name: self.author_name.clone(),
            rating: self.rating,
            title: self.title.clone(),
            content: self.content.clone(),
            is_approved: self.is_approved,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
