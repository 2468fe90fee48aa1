// src/db/hotel_image_repository.rs
// DOCUMENTATION: Hotel image database operations
// PURPOSE: Handle CRUD operations for hotel gallery images

use crate::errors::CmsError;
use crate::models::{CreateHotelImageRequest, HotelImage, ListQuery, UpdateHotelImageRequest};
use sqlx::PgPool;
use uuid::Uuid;

pub struct HotelImageRepository;

impl HotelImageRepository {
    /// Attach a new image to a hotel
    /// DOCUMENTATION: When is_primary is set, other primaries for the hotel
    /// are cleared first so the gallery keeps a single lead image
    pub async fn create(
        pool: &PgPool,
        req: &CreateHotelImageRequest,
    ) -> Result<HotelImage, CmsError> {
        if req.is_primary {
            Self::clear_primary(pool, req.hotel_id).await?;
        }

        let image = sqlx::query_as::<_, HotelImage>(
            r#"
            INSERT INTO hotel_images (hotel_id, image_url, alt_text, is_primary, display_order)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(req.hotel_id)
        .bind(&req.image_url)
        .bind(&req.alt_text)
        .bind(req.is_primary)
        .bind(req.display_order)
        .fetch_one(pool)
        .await
        .map_err(|e| CmsError::from_db("create hotel image", e))?;

        log::info!("Created hotel image with id: {}", image.id);
        Ok(image)
    }

    /// Retrieve hotel image by ID
    pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<HotelImage, CmsError> {
        let image = sqlx::query_as::<_, HotelImage>("SELECT * FROM hotel_images WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| CmsError::from_db("get hotel image", e))?
            .ok_or_else(|| {
                log::warn!("Hotel image not found: {}", id);
                CmsError::NotFound(format!("Hotel image {}", id))
            })?;

        Ok(image)
    }

    /// List hotel images with pagination
    /// DOCUMENTATION: Supports ?hotel_id= filter; ordered for gallery display
    pub async fn list(
        pool: &PgPool,
        query: &ListQuery,
    ) -> Result<(Vec<HotelImage>, i64), CmsError> {
        let mut conditions: Vec<String> = Vec::new();

        if query.hotel_id.is_some() {
            conditions.push("hotel_id = $1".to_string());
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let count_sql = format!("SELECT COUNT(*) FROM hotel_images {}", where_clause);
        let page_sql = format!(
            "SELECT * FROM hotel_images {} ORDER BY is_primary DESC, display_order ASC LIMIT {} OFFSET {}",
            where_clause,
            query.limit(),
            query.offset()
        );

        let mut count_query = sqlx::query_as::<_, (i64,)>(&count_sql);
        let mut page_query = sqlx::query_as::<_, HotelImage>(&page_sql);

        if let Some(hotel_id) = query.hotel_id {
            count_query = count_query.bind(hotel_id);
            page_query = page_query.bind(hotel_id);
        }

        let ((total,), images) = tokio::try_join!(
            count_query.fetch_one(pool),
            page_query.fetch_all(pool)
        )
        .map_err(|e| CmsError::from_db("list hotel images", e))?;

        Ok((images, total))
    }

    /// All images of a hotel, ordered for gallery display
    pub async fn list_by_hotel(pool: &PgPool, hotel_id: Uuid) -> Result<Vec<HotelImage>, CmsError> {
        let images = sqlx::query_as::<_, HotelImage>(
            r#"
            SELECT * FROM hotel_images
            WHERE hotel_id = $1
            ORDER BY is_primary DESC, display_order ASC, created_at ASC
            "#,
        )
        .bind(hotel_id)
        .fetch_all(pool)
        .await
        .map_err(|e| CmsError::from_db("list images by hotel", e))?;

        Ok(images)
    }

    /// Update existing hotel image
    /// DOCUMENTATION: Partial update; promoting an image to primary clears
    /// the previous primary first
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        req: &UpdateHotelImageRequest,
    ) -> Result<HotelImage, CmsError> {
        if req.is_primary == Some(true) {
            let current = Self::get_by_id(pool, id).await?;
            Self::clear_primary(pool, current.hotel_id).await?;
        }

        let image = sqlx::query_as::<_, HotelImage>(
            r#"
            UPDATE hotel_images
            SET image_url = COALESCE($1, image_url),
                alt_text = COALESCE($2, alt_text),
                is_primary = COALESCE($3, is_primary),
                display_order = COALESCE($4, display_order),
                updated_at = NOW()
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(&req.image_url)
        .bind(&req.alt_text)
        .bind(req.is_primary)
        .bind(req.display_order)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| CmsError::from_db("update hotel image", e))?
        .ok_or_else(|| {
            log::warn!("Hotel image not found: {}", id);
            CmsError::NotFound(format!("Hotel image {}", id))
        })?;

        log::info!("Updated hotel image: {}", id);
        Ok(image)
    }

    /// Physically delete a hotel image
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), CmsError> {
        let rows = sqlx::query("DELETE FROM hotel_images WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| CmsError::from_db("delete hotel image", e))?
            .rows_affected();

        if rows == 0 {
            return Err(CmsError::NotFound(format!("Hotel image {}", id)));
        }

        log::info!("Deleted hotel image: {}", id);
        Ok(())
    }

    /// Unset all primary flags for a hotel
    async fn clear_primary(pool: &PgPool, hotel_id: Uuid) -> Result<(), CmsError> {
        sqlx::query("UPDATE hotel_images SET is_primary = FALSE WHERE hotel_id = $1")
            .bind(hotel_id)
            .execute(pool)
            .await
            .map_err(|e| CmsError::from_db("clear primary hotel image", e))?;

        Ok(())
    }
}
