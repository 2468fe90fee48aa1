// src/db/itinerary_repository.rs
// DOCUMENTATION: Database access layer for itinerary days
// PURPOSE: One row per (package, day); the unique constraint keeps a
// package from having two entries for the same day_number

use crate::errors::CmsError;
use crate::models::{CreateItineraryDayRequest, ItineraryDay, ListQuery, UpdateItineraryDayRequest};
use sqlx::PgPool;
use uuid::Uuid;

pub struct ItineraryRepository;

impl ItineraryRepository {
    /// Create new itinerary day
    /// DOCUMENTATION: A duplicate (package_id, day_number) surfaces as 409
    pub async fn create(
        pool: &PgPool,
        req: &CreateItineraryDayRequest,
    ) -> Result<ItineraryDay, CmsError> {
        let day = sqlx::query_as::<_, ItineraryDay>(
            r#"
            INSERT INTO itinerary_days (package_id, day_number, title, details, day_plan)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(req.package_id)
        .bind(req.day_number)
        .bind(&req.title)
        .bind(&req.details)
        .bind(&req.day_plan)
        .fetch_one(pool)
        .await
        .map_err(|e| CmsError::from_db("create itinerary day", e))?;

        log::info!("Created itinerary day with id: {}", day.id);
        Ok(day)
    }

    /// Retrieve itinerary day by ID
    pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<ItineraryDay, CmsError> {
        let day = sqlx::query_as::<_, ItineraryDay>("SELECT * FROM itinerary_days WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| CmsError::from_db("get itinerary day", e))?
            .ok_or_else(|| {
                log::warn!("Itinerary day not found: {}", id);
                CmsError::NotFound(format!("Itinerary day {}", id))
            })?;

        Ok(day)
    }

    /// List itinerary days with pagination
    /// DOCUMENTATION: Supports ?package_id= filter; ordered by day_number
    pub async fn list(
        pool: &PgPool,
        query: &ListQuery,
    ) -> Result<(Vec<ItineraryDay>, i64), CmsError> {
        let mut conditions: Vec<String> = Vec::new();

        if query.package_id.is_some() {
            conditions.push("package_id = $1".to_string());
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let count_sql = format!("SELECT COUNT(*) FROM itinerary_days {}", where_clause);
        let page_sql = format!(
            "SELECT * FROM itinerary_days {} ORDER BY package_id, day_number ASC LIMIT {} OFFSET {}",
            where_clause,
            query.limit(),
            query.offset()
        );

        let mut count_query = sqlx::query_as::<_, (i64,)>(&count_sql);
        let mut page_query = sqlx::query_as::<_, ItineraryDay>(&page_sql);

        if let Some(package_id) = query.package_id {
            count_query = count_query.bind(package_id);
            page_query = page_query.bind(package_id);
        }

        let ((total,), days) = tokio::try_join!(
            count_query.fetch_one(pool),
            page_query.fetch_all(pool)
        )
        .map_err(|e| CmsError::from_db("list itinerary days", e))?;

        Ok((days, total))
    }

    /// All days of a package in trip order, used by the package detail response
    pub async fn list_by_package(
        pool: &PgPool,
        package_id: Uuid,
    ) -> Result<Vec<ItineraryDay>, CmsError> {
        let days = sqlx::query_as::<_, ItineraryDay>(
            "SELECT * FROM itinerary_days WHERE package_id = $1 ORDER BY day_number ASC",
        )
        .bind(package_id)
        .fetch_all(pool)
        .await
        .map_err(|e| CmsError::from_db("list itinerary by package", e))?;

        Ok(days)
    }

    /// Update existing itinerary day
    /// DOCUMENTATION: Partial update - only provided fields are modified
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        req: &UpdateItineraryDayRequest,
    ) -> Result<ItineraryDay, CmsError> {
        let day = sqlx::query_as::<_, ItineraryDay>(
            r#"
            UPDATE itinerary_days
            SET day_number = COALESCE($1, day_number),
                title = COALESCE($2, title),
                details = COALESCE($3, details),
                day_plan = COALESCE($4, day_plan),
                updated_at = NOW()
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(req.day_number)
        .bind(&req.title)
        .bind(&req.details)
        .bind(&req.day_plan)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| CmsError::from_db("update itinerary day", e))?
        .ok_or_else(|| {
            log::warn!("Itinerary day not found: {}", id);
            CmsError::NotFound(format!("Itinerary day {}", id))
        })?;

        log::info!("Updated itinerary day: {}", id);
        Ok(day)
    }

    /// Physically delete an itinerary day
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), CmsError> {
        let rows = sqlx::query("DELETE FROM itinerary_days WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| CmsError::from_db("delete itinerary day", e))?
            .rows_affected();

        if rows == 0 {
            return Err(CmsError::NotFound(format!("Itinerary day {}", id)));
        }

        log::info!("Deleted itinerary day: {}", id);
        Ok(())
    }
}
