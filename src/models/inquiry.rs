// src/models/inquiry.rs
// DOCUMENTATION: Core data structures for customer inquiries
// PURPOSE: Inquiries are created by the public website contact form and
// worked through their status lifecycle from the admin surface

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Inquiry lifecycle status, stored as a PostgreSQL enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "inquiry_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    New,
    Contacted,
    Closed,
}

impl Default for InquiryStatus {
    fn default() -> Self {
        InquiryStatus::New
    }
}

impl std::str::FromStr for InquiryStatus {
    type Err = crate::errors::CmsError;

    /// Parse the ?status= query value
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(InquiryStatus::New),
            "contacted" => Ok(InquiryStatus::Contacted),
            "closed" => Ok(InquiryStatus::Closed),
            other => Err(crate::errors::CmsError::InvalidInput(format!(
                "Unknown inquiry status: {}",
                other
            ))),
        }
    }
}

/// Represents a complete inquiry record from the database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Inquiry {
    /// Unique identifier (UUID v4)
    pub id: Uuid,

    /// Package the inquiry refers to, if any
    pub package_id: Option<Uuid>,

    /// Contact name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Contact phone
    pub phone: Option<String>,

    /// The message body
    pub message: String,

    /// Intended travel date
    pub travel_date: Option<NaiveDate>,

    /// Party size
    pub traveler_count: Option<i32>,

    /// Lifecycle status
    pub status: InquiryStatus,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Request DTO for creating a new inquiry
/// DOCUMENTATION: Accepted from the public website API as well as the admin API
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreateInquiryRequest {
    pub package_id: Option<Uuid>,

    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    pub phone: Option<String>,

    #[validate(length(min = 1))]
    pub message: String,

    pub travel_date: Option<NaiveDate>,

    pub traveler_count: Option<i32>,
}

/// Request DTO for updating an inquiry from the admin surface
/// DOCUMENTATION: All fields are optional - only provided fields are updated
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateInquiryRequest {
    pub phone: Option<String>,
    pub travel_date: Option<NaiveDate>,
    pub traveler_count: Option<i32>,
    pub status: Option<InquiryStatus>,
}

/// Response DTO for API consumers
#[derive(Debug, Serialize, Deserialize)]
pub struct InquiryResponse {
    pub id: Uuid,
    pub package_id: Option<Uuid>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub travel_date: Option<NaiveDate>,
    pub traveler_count: Option<i32>,
    pub status: InquiryStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Inquiry {
    pub fn to_response(&self) -> InquiryResponse {
        InquiryResponse {
            id: self.id,
            package_id: self.package_id,
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            message: self.message.clone(),
            travel_date: self.travel_date,
            traveler_count: self.traveler_count,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&InquiryStatus::Contacted).unwrap(),
            "\"contacted\""
        );
        let parsed: InquiryStatus = serde_json::from_str("\"new\"").unwrap();
        assert_eq!(parsed, InquiryStatus::New);
    }

    #[test]
    fn test_status_from_str() {
        use std::str::FromStr;

        assert_eq!(
            InquiryStatus::from_str("closed").unwrap(),
            InquiryStatus::Closed
        );
        assert!(InquiryStatus::from_str("archived").is_err());
    }
}
