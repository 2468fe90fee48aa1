// src/db/hotel_repository.rs
// DOCUMENTATION: Database access layer for hotels

use crate::errors::CmsError;
use crate::models::{CreateHotelRequest, Hotel, ListQuery, UpdateHotelRequest};
use sqlx::PgPool;
use uuid::Uuid;

/// Sort keys accepted by GET /api/hotels
const SORT_KEYS: &[(&str, &str)] = &[
    ("name", "name"),
    ("star_rating", "star_rating"),
    ("created_at", "created_at"),
    ("updated_at", "updated_at"),
];

pub struct HotelRepository;

impl HotelRepository {
    /// Create new hotel in database
    pub async fn create(pool: &PgPool, req: &CreateHotelRequest) -> Result<Hotel, CmsError> {
        let hotel = sqlx::query_as::<_, Hotel>(
            r#"
            INSERT INTO hotels (city_id, name, description, star_rating, address, amenities)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(req.city_id)
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.star_rating)
        .bind(&req.address)
        .bind(&req.amenities)
        .fetch_one(pool)
        .await
        .map_err(|e| CmsError::from_db("create hotel", e))?;

        log::info!("Created hotel with id: {}", hotel.id);
        Ok(hotel)
    }

    /// Retrieve hotel by ID
    pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<Hotel, CmsError> {
        let hotel = sqlx::query_as::<_, Hotel>("SELECT * FROM hotels WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| CmsError::from_db("get hotel", e))?
            .ok_or_else(|| {
                log::warn!("Hotel not found: {}", id);
                CmsError::NotFound(format!("Hotel {}", id))
            })?;

        Ok(hotel)
    }

    /// List hotels with filters and pagination
    /// DOCUMENTATION: Supports ?search= on name and ?city_id= filter
    /// The count query and the page query run in parallel
    pub async fn list(pool: &PgPool, query: &ListQuery) -> Result<(Vec<Hotel>, i64), CmsError> {
        let pattern = query.search_pattern();

        let mut conditions: Vec<String> = Vec::new();

        if pattern.is_some() {
            let n = conditions.len() + 1;
            conditions.push(format!("name ILIKE ${}", n));
        }
        if query.city_id.is_some() {
            let n = conditions.len() + 1;
            conditions.push(format!("city_id = ${}", n));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let count_sql = format!("SELECT COUNT(*) FROM hotels {}", where_clause);
        let page_sql = format!(
            "SELECT * FROM hotels {} {} LIMIT {} OFFSET {}",
            where_clause,
            query.order_clause(SORT_KEYS, "created_at"),
            query.limit(),
            query.offset()
        );

        let mut count_query = sqlx::query_as::<_, (i64,)>(&count_sql);
        let mut page_query = sqlx::query_as::<_, Hotel>(&page_sql);

        if let Some(p) = &pattern {
            count_query = count_query.bind(p);
            page_query = page_query.bind(p);
        }
        if let Some(city_id) = query.city_id {
            count_query = count_query.bind(city_id);
            page_query = page_query.bind(city_id);
        }

        let ((total,), hotels) = tokio::try_join!(
            count_query.fetch_one(pool),
            page_query.fetch_all(pool)
        )
        .map_err(|e| CmsError::from_db("list hotels", e))?;

        Ok((hotels, total))
    }

    /// Update existing hotel
    /// DOCUMENTATION: Partial update - only provided fields are modified
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        req: &UpdateHotelRequest,
    ) -> Result<Hotel, CmsError> {
        let hotel = sqlx::query_as::<_, Hotel>(
            r#"
            UPDATE hotels
            SET city_id = COALESCE($1, city_id),
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                star_rating = COALESCE($4, star_rating),
                address = COALESCE($5, address),
                amenities = COALESCE($6, amenities),
                updated_at = NOW()
            WHERE id = $7
            RETURNING *
            "#,
        )
        .bind(req.city_id)
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.star_rating)
        .bind(&req.address)
        .bind(&req.amenities)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| CmsError::from_db("update hotel", e))?
        .ok_or_else(|| {
            log::warn!("Hotel not found: {}", id);
            CmsError::NotFound(format!("Hotel {}", id))
        })?;

        log::info!("Updated hotel: {}", id);
        Ok(hotel)
    }

    /// Physically delete a hotel
    /// DOCUMENTATION: DELETE cascades to hotel_images via foreign key
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), CmsError> {
        let rows = sqlx::query("DELETE FROM hotels WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| CmsError::from_db("delete hotel", e))?
            .rows_affected();

        if rows == 0 {
            return Err(CmsError::NotFound(format!("Hotel {}", id)));
        }

        log::info!("Deleted hotel: {}", id);
        Ok(())
    }
}
