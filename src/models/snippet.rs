// src/models/snippet.rs
// DOCUMENTATION: Core data structures for IEH snippets
// PURPOSE: One table backs the three REST collections /api/inclusions,
// /api/exclusions and /api/highlights; the kind column tells them apart

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::errors::CmsError;

/// Snippet kind, stored as a PostgreSQL enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "snippet_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SnippetKind {
    Inclusion,
    Exclusion,
    Highlight,
}

impl SnippetKind {
    /// Resolve the collection segment of the URL path to a kind
    /// DOCUMENTATION: /api/inclusions -> Inclusion, etc. The route pattern
    /// only admits the three known segments, but handlers still go through
    /// this so an unknown segment cannot silently pick a kind
    pub fn from_path_slug(slug: &str) -> Result<Self, CmsError> {
        match slug {
            "inclusions" => Ok(SnippetKind::Inclusion),
            "exclusions" => Ok(SnippetKind::Exclusion),
            "highlights" => Ok(SnippetKind::Highlight),
            other => Err(CmsError::InvalidInput(format!(
                "Unknown snippet collection: {}",
                other
            ))),
        }
    }
}

/// A reusable one-line snippet attached to packages
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Snippet {
    /// Unique identifier (UUID v4)
    pub id: Uuid,

    /// Which of the three collections the snippet belongs to
    pub kind: SnippetKind,

    /// The snippet text - unique within its kind
    pub label: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Request DTO for creating a snippet
/// DOCUMENTATION: The kind comes from the URL path, not the body
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreateSnippetRequest {
    #[validate(length(min = 1, max = 512))]
    pub label: String,
}

/// Request DTO for updating a snippet
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateSnippetRequest {
    pub label: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_slug() {
        assert_eq!(
            SnippetKind::from_path_slug("inclusions").unwrap(),
            SnippetKind::Inclusion
        );
        assert_eq!(
            SnippetKind::from_path_slug("exclusions").unwrap(),
            SnippetKind::Exclusion
        );
        assert_eq!(
            SnippetKind::from_path_slug("highlights").unwrap(),
            SnippetKind::Highlight
        );
        assert!(SnippetKind::from_path_slug("inclusion").is_err());
        assert!(SnippetKind::from_path_slug("").is_err());
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SnippetKind::Highlight).unwrap(),
            "\"highlight\""
        );
    }
}
