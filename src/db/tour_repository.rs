// src/db/tour_repository.rs
// DOCUMENTATION: Database access layer for tours

use crate::errors::CmsError;
use crate::models::{CreateTourRequest, ListQuery, Tour, UpdateTourRequest};
use sqlx::PgPool;
use uuid::Uuid;

/// Sort keys accepted by GET /api/tours
const SORT_KEYS: &[(&str, &str)] = &[
    ("name", "name"),
    ("tour_type", "tour_type"),
    ("created_at", "created_at"),
    ("updated_at", "updated_at"),
];

pub struct TourRepository;

impl TourRepository {
    /// Create new tour in database
    pub async fn create(pool: &PgPool, req: &CreateTourRequest) -> Result<Tour, CmsError> {
        let tour = sqlx::query_as::<_, Tour>(
            r#"
            INSERT INTO tours (name, description, tour_type, image_url)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&req.name)
        .bind(&req.description)
        .bind(&req.tour_type)
        .bind(&req.image_url)
        .fetch_one(pool)
        .await
        .map_err(|e| CmsError::from_db("create tour", e))?;

        log::info!("Created tour with id: {}", tour.id);
        Ok(tour)
    }

    /// Retrieve tour by ID
    pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<Tour, CmsError> {
        let tour = sqlx::query_as::<_, Tour>("SELECT * FROM tours WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| CmsError::from_db("get tour", e))?
            .ok_or_else(|| {
                log::warn!("Tour not found: {}", id);
                CmsError::NotFound(format!("Tour {}", id))
            })?;

        Ok(tour)
    }

    /// List tours with filters and pagination
    /// DOCUMENTATION: Supports ?search= on name; count and page queries
    /// run in parallel
    pub async fn list(pool: &PgPool, query: &ListQuery) -> Result<(Vec<Tour>, i64), CmsError> {
        let pattern = query.search_pattern();

        let mut conditions: Vec<String> = Vec::new();

        if pattern.is_some() {
            let n = conditions.len() + 1;
            conditions.push(format!("(name ILIKE ${0} OR tour_type ILIKE ${0})", n));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let count_sql = format!("SELECT COUNT(*) FROM tours {}", where_clause);
        let page_sql = format!(
            "SELECT * FROM tours {} {} LIMIT {} OFFSET {}",
            where_clause,
            query.order_clause(SORT_KEYS, "created_at"),
            query.limit(),
            query.offset()
        );

        let mut count_query = sqlx::query_as::<_, (i64,)>(&count_sql);
        let mut page_query = sqlx::query_as::<_, Tour>(&page_sql);

        if let Some(p) = &pattern {
            count_query = count_query.bind(p);
            page_query = page_query.bind(p);
        }

        let ((total,), tours) = tokio::try_join!(
            count_query.fetch_one(pool),
            page_query.fetch_all(pool)
        )
        .map_err(|e| CmsError::from_db("list tours", e))?;

        Ok((tours, total))
    }

    /// All tours attached to a package via package_tours
    pub async fn list_by_package(pool: &PgPool, package_id: Uuid) -> Result<Vec<Tour>, CmsError> {
        let tours = sqlx::query_as::<_, Tour>(
            r#"
            SELECT t.*
            FROM tours t
            INNER JOIN package_tours pt ON pt.tour_id = t.id
            WHERE pt.package_id = $1
            ORDER BY t.name ASC
            "#,
        )
        .bind(package_id)
        .fetch_all(pool)
        .await
        .map_err(|e| CmsError::from_db("list tours by package", e))?;

        Ok(tours)
    }

    /// Update existing tour
    /// DOCUMENTATION: Partial update - only provided fields are modified
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        req: &UpdateTourRequest,
    ) -> Result<Tour, CmsError> {
        let tour = sqlx::query_as::<_, Tour>(
            r#"
            UPDATE tours
            SET name = COALESCE($1, name),
                description = COALESCE($2, description),
                tour_type = COALESCE($3, tour_type),
                image_url = COALESCE($4, image_url),
                updated_at = NOW()
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(&req.name)
        .bind(&req.description)
        .bind(&req.tour_type)
        .bind(&req.image_url)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| CmsError::from_db("update tour", e))?
        .ok_or_else(|| {
            log::warn!("Tour not found: {}", id);
            CmsError::NotFound(format!("Tour {}", id))
        })?;

        log::info!("Updated tour: {}", id);
        Ok(tour)
    }

    /// Physically delete a tour
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), CmsError> {
        let rows = sqlx::query("DELETE FROM tours WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| CmsError::from_db("delete tour", e))?
            .rows_affected();

        if rows == 0 {
            return Err(CmsError::NotFound(format!("Tour {}", id)));
        }

        log::info!("Deleted tour: {}", id);
        Ok(())
    }
}
