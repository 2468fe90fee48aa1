// src/models/common.rs
// DOCUMENTATION: Shared API types - response envelope, pagination, list queries
// PURPOSE: Every /api endpoint answers with the same JSON envelope

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum page size accepted by any list endpoint
pub const MAX_PAGE_SIZE: i64 = 100;

/// Default page size when the client does not send one
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Uniform API response envelope
/// DOCUMENTATION: { success, data?, pagination?, error? }
/// Error responses are produced by CmsError; handlers only build successes
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Successful response carrying data
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            pagination: None,
            error: None,
        }
    }

    /// Successful paginated response
    pub fn ok_paginated(data: T, pagination: Pagination) -> Self {
        Self {
            success: true,
            data: Some(data),
            pagination: Some(pagination),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Successful response with no payload (deletes)
    pub fn ok_empty() -> Self {
        Self {
            success: true,
            data: None,
            pagination: None,
            error: None,
        }
    }
}

/// Pagination metadata attached to list responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page (1-based)
    pub page: i64,

    /// Results per page
    pub limit: i64,

    /// Total number of matches regardless of pagination
    pub total: i64,

    /// Total number of pages
    pub total_pages: i64,
}

impl Pagination {
    /// Build pagination metadata from a total count
    pub fn new(page: i64, limit: i64, total: i64) -> Self {
        let total_pages = if limit > 0 {
            (total + limit - 1) / limit
        } else {
            0
        };

        Self {
            page,
            limit,
            total,
            total_pages,
        }
    }
}

/// Query string parameters shared by all list endpoints
/// DOCUMENTATION: page/limit/search/sort/order plus the entity filters
/// each route cares about; unused filters are simply ignored
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Page number (1-based)
    pub page: Option<i64>,

    /// Results per page (max 100)
    pub limit: Option<i64>,

    /// Case-insensitive substring filter on the entity's name-like column
    pub search: Option<String>,

    /// Sort key, validated against a per-entity whitelist
    pub sort: Option<String>,

    /// Sort direction: asc or desc
    pub order: Option<String>,

    /// Filter by parent destination
    pub destination_id: Option<Uuid>,

    /// Filter by parent city
    pub city_id: Option<Uuid>,

    /// Filter by parent hotel
    pub hotel_id: Option<Uuid>,

    /// Filter by parent package
    pub package_id: Option<Uuid>,

    /// Filter by featured flag (destinations, packages)
    pub featured: Option<bool>,

    /// Filter by approval flag (reviews)
    pub approved: Option<bool>,

    /// Filter by status (inquiries)
    pub status: Option<String>,
}

impl ListQuery {
    /// Current page clamped to >= 1
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Page size clamped to 1..=MAX_PAGE_SIZE
    pub fn limit(&self) -> i64 {
        self.limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }

    /// Row offset for the current page
    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.limit()
    }

    /// ILIKE pattern for the search term, if any
    pub fn search_pattern(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| format!("%{}%", s))
    }

    /// Sort direction as a SQL keyword (default ASC)
    pub fn direction(&self) -> &'static str {
        match self.order.as_deref() {
            Some("desc") | Some("DESC") => "DESC",
            _ => "ASC",
        }
    }

    /// Resolve the sort key against a whitelist of (query key, column) pairs
    /// DOCUMENTATION: Unknown keys fall back to the default column so that
    /// client input never reaches the SQL string unchecked
    pub fn order_clause(&self, allowed: &[(&str, &str)], default: &str) -> String {
        let column = self
            .sort
            .as_deref()
            .and_then(|key| {
                allowed
                    .iter()
                    .find(|(name, _)| *name == key)
                    .map(|(_, col)| *col)
            })
            .unwrap_or(default);

        format!("ORDER BY {} {}", column, self.direction())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_math() {
        let p = Pagination::new(1, 20, 0);
        assert_eq!(p.total_pages, 0);

        let p = Pagination::new(1, 20, 20);
        assert_eq!(p.total_pages, 1);

        let p = Pagination::new(2, 20, 41);
        assert_eq!(p.total_pages, 3);

        let p = Pagination::new(1, 10, 9);
        assert_eq!(p.total_pages, 1);
    }

    #[test]
    fn test_list_query_clamping() {
        let q = ListQuery {
            page: Some(0),
            limit: Some(1000),
            ..Default::default()
        };
        assert_eq!(q.page(), 1);
        assert_eq!(q.limit(), MAX_PAGE_SIZE);
        assert_eq!(q.offset(), 0);

        let q = ListQuery {
            page: Some(3),
            limit: Some(15),
            ..Default::default()
        };
        assert_eq!(q.offset(), 30);

        let q = ListQuery::default();
        assert_eq!(q.page(), 1);
        assert_eq!(q.limit(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_search_pattern() {
        let q = ListQuery {
            search: Some("  bali ".to_string()),
            ..Default::default()
        };
        assert_eq!(q.search_pattern(), Some("%bali%".to_string()));

        let q = ListQuery {
            search: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(q.search_pattern(), None);

        assert_eq!(ListQuery::default().search_pattern(), None);
    }

    #[test]
    fn test_order_clause_whitelist() {
        let allowed = [("name", "name"), ("created", "created_at")];

        let q = ListQuery {
            sort: Some("name".to_string()),
            order: Some("desc".to_string()),
            ..Default::default()
        };
        assert_eq!(q.order_clause(&allowed, "created_at"), "ORDER BY name DESC");

        // Unknown sort keys fall back to the default column
        let q = ListQuery {
            sort: Some("password; DROP TABLE users".to_string()),
            ..Default::default()
        };
        assert_eq!(
            q.order_clause(&allowed, "created_at"),
            "ORDER BY created_at ASC"
        );

        let q = ListQuery::default();
        assert_eq!(
            q.order_clause(&allowed, "created_at"),
            "ORDER BY created_at ASC"
        );
    }

    #[test]
    fn test_envelope_shape() {
        let resp = ApiResponse::ok_paginated(vec![1, 2, 3], Pagination::new(1, 20, 3));
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
        assert_eq!(json["pagination"]["total_pages"], 1);
        assert!(json.get("error").is_none());

        let resp = ApiResponse::ok_empty();
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], true);
        assert!(json.get("data").is_none());
        assert!(json.get("pagination").is_none());
    }
}
