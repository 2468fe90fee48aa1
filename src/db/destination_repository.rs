// src/db/destination_repository.rs
// DOCUMENTATION: Database access layer for destinations
// PURPOSE: Abstract database operations from business logic

use crate::errors::CmsError;
use crate::models::{CreateDestinationRequest, Destination, ListQuery, UpdateDestinationRequest};
use sqlx::PgPool;
use uuid::Uuid;

/// Sort keys accepted by GET /api/destinations
const SORT_KEYS: &[(&str, &str)] = &[
    ("name", "name"),
    ("country", "country"),
    ("created_at", "created_at"),
    ("updated_at", "updated_at"),
];

/// DestinationRepository: All database operations for destinations
/// DOCUMENTATION: Uses query_as for type-safe SQL queries
pub struct DestinationRepository;

impl DestinationRepository {
    /// Create new destination in database
    /// DOCUMENTATION: Inserts destination and returns created record
    /// Used by POST /api/destinations endpoint
    pub async fn create(
        pool: &PgPool,
        req: &CreateDestinationRequest,
    ) -> Result<Destination, CmsError> {
        let destination = sqlx::query_as::<_, Destination>(
            r#"
            INSERT INTO destinations (
                name, country, description, best_time_to_visit, image_url, is_featured
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&req.name)
        .bind(&req.country)
        .bind(&req.description)
        .bind(&req.best_time_to_visit)
        .bind(&req.image_url)
        .bind(req.is_featured)
        .fetch_one(pool)
        .await
        .map_err(|e| CmsError::from_db("create destination", e))?;

        log::info!("Created destination with id: {}", destination.id);
        Ok(destination)
    }

    /// Retrieve destination by ID
    /// DOCUMENTATION: Used for GET /api/destinations/{id} endpoint
    pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<Destination, CmsError> {
        let destination = sqlx::query_as::<_, Destination>(
            "SELECT * FROM destinations WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| CmsError::from_db("get destination", e))?
        .ok_or_else(|| {
            log::warn!("Destination not found: {}", id);
            CmsError::NotFound(format!("Destination {}", id))
        })?;

        Ok(destination)
    }

    /// List destinations with filters and pagination
    /// DOCUMENTATION: Used for GET /api/destinations endpoint
    /// Returns tuple: (results, total_count) for pagination
    /// The count query and the page query run in parallel
    pub async fn list(
        pool: &PgPool,
        query: &ListQuery,
    ) -> Result<(Vec<Destination>, i64), CmsError> {
        let pattern = query.search_pattern();

        // Build dynamic WHERE clause; values are bound, never interpolated
        let mut conditions: Vec<String> = Vec::new();

        if pattern.is_some() {
            let n = conditions.len() + 1;
            conditions.push(format!("(name ILIKE ${0} OR country ILIKE ${0})", n));
        }
        if query.featured.is_some() {
            let n = conditions.len() + 1;
            conditions.push(format!("is_featured = ${}", n));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let count_sql = format!("SELECT COUNT(*) FROM destinations {}", where_clause);
        let page_sql = format!(
            "SELECT * FROM destinations {} {} LIMIT {} OFFSET {}",
            where_clause,
            query.order_clause(SORT_KEYS, "created_at"),
            query.limit(),
            query.offset()
        );

        let mut count_query = sqlx::query_as::<_, (i64,)>(&count_sql);
        let mut page_query = sqlx::query_as::<_, Destination>(&page_sql);

        if let Some(p) = &pattern {
            count_query = count_query.bind(p);
            page_query = page_query.bind(p);
        }
        if let Some(featured) = query.featured {
            count_query = count_query.bind(featured);
            page_query = page_query.bind(featured);
        }

        let ((total,), destinations) = tokio::try_join!(
            count_query.fetch_one(pool),
            page_query.fetch_all(pool)
        )
        .map_err(|e| CmsError::from_db("list destinations", e))?;

        Ok((destinations, total))
    }

    /// Update existing destination
    /// DOCUMENTATION: Partial update - only provided fields are modified
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        req: &UpdateDestinationRequest,
    ) -> Result<Destination, CmsError> {
        let destination = sqlx::query_as::<_, Destination>(
            r#"
            UPDATE destinations
            SET name = COALESCE($1, name),
                country = COALESCE($2, country),
                description = COALESCE($3, description),
                best_time_to_visit = COALESCE($4, best_time_to_visit),
                image_url = COALESCE($5, image_url),
                is_featured = COALESCE($6, is_featured),
                updated_at = NOW()
            WHERE id = $7
            RETURNING *
            "#,
        )
        .bind(&req.name)
        .bind(&req.country)
        .bind(&req.description)
        .bind(&req.best_time_to_visit)
        .bind(&req.image_url)
        .bind(req.is_featured)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| CmsError::from_db("update destination", e))?
        .ok_or_else(|| {
            log::warn!("Destination not found: {}", id);
            CmsError::NotFound(format!("Destination {}", id))
        })?;

        log::info!("Updated destination: {}", id);
        Ok(destination)
    }

    /// Physically delete a destination
    /// DOCUMENTATION: DELETE cascades to cities and packages via foreign keys
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), CmsError> {
        let rows = sqlx::query("DELETE FROM destinations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| CmsError::from_db("delete destination", e))?
            .rows_affected();

        if rows == 0 {
            return Err(CmsError::NotFound(format!("Destination {}", id)));
        }

        log::info!("Deleted destination: {}", id);
        Ok(())
    }
}
