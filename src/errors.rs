// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Comprehensive error enum for all possible failures
/// Each variant maps to appropriate HTTP status code and error response
#[derive(Error, Debug)]
pub enum CmsError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Record already exists: {0}")]
    AlreadyExists(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Forbidden access")]
    Forbidden,

    #[error("External API error: {0}")]
    ExternalApiError(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Template error: {0}")]
    TemplateError(String),
}

impl From<askama::Error> for CmsError {
    fn from(e: askama::Error) -> Self {
        log::error!("Template rendering failed: {}", e);
        CmsError::TemplateError(e.to_string())
    }
}

impl CmsError {
    /// Map a sqlx error to an application error
    /// DOCUMENTATION: Unique-constraint violations (code 23505) become 409s;
    /// everything else is flattened to DatabaseError, matching the uniform
    /// error shape of the API
    pub fn from_db(context: &str, e: sqlx::Error) -> CmsError {
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.code().as_deref() == Some("23505") {
                log::warn!("Unique constraint violation ({}): {}", context, db_err);
                return CmsError::AlreadyExists(context.to_string());
            }
        }
        log::error!("Database error ({}): {}", context, e);
        CmsError::DatabaseError(format!("{}: {}", context, e))
    }
}

/// Convert CmsError to HTTP response
/// DOCUMENTATION: Every error body uses the uniform API envelope
/// with success=false and a stringified message
impl ResponseError for CmsError {
    fn error_response(&self) -> HttpResponse {
        let body = json!({
            "success": false,
            "error": self.to_string(),
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            CmsError::NotFound(_) => StatusCode::NOT_FOUND,
            CmsError::AlreadyExists(_) => StatusCode::CONFLICT,
            CmsError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CmsError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            CmsError::ValidationError(_) => StatusCode::BAD_REQUEST,
            CmsError::Unauthorized => StatusCode::UNAUTHORIZED,
            CmsError::Forbidden => StatusCode::FORBIDDEN,
            CmsError::ExternalApiError(_) => StatusCode::BAD_GATEWAY,
            CmsError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
            CmsError::TemplateError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            CmsError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CmsError::AlreadyExists("x".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(CmsError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            CmsError::RateLimitExceeded.status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            CmsError::ExternalApiError("x".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_error_messages() {
        let err = CmsError::NotFound("destination abc".into());
        assert_eq!(err.to_string(), "Record not found: destination abc");

        let err = CmsError::ValidationError("name too long".into());
        assert!(err.to_string().contains("name too long"));
    }
}
