// src/db/review_repository.rs
// DOCUMENTATION: Database access layer for package reviews

use crate::errors::CmsError;
use crate::models::{CreateReviewRequest, ListQuery, Review, UpdateReviewRequest};
use sqlx::PgPool;
use uuid::Uuid;

/// Sort keys accepted by GET /api/reviews
const SORT_KEYS: &[(&str, &str)] = &[
    ("rating", "rating"),
    ("author_name", "author_name"),
    ("created_at", "created_at"),
];

pub struct ReviewRepository;

impl ReviewRepository {
    /// Create new review in database
    pub async fn create(pool: &PgPool, req: &CreateReviewRequest) -> Result<Review, CmsError> {
        let review = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (package_id, author_name, rating, title, content, is_approved)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(req.package_id)
        .bind(&req.author_name)
        .bind(req.rating)
        .bind(&req.title)
        .bind(&req.content)
        .bind(req.is_approved)
        .fetch_one(pool)
        .await
        .map_err(|e| CmsError::from_db("create review", e))?;

        log::info!("Created review with id: {}", review.id);
        Ok(review)
    }

    /// Retrieve review by ID
    pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<Review, CmsError> {
        let review = sqlx::query_as::<_, Review>("SELECT * FROM reviews WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| CmsError::from_db("get review", e))?
            .ok_or_else(|| {
                log::warn!("Review not found: {}", id);
                CmsError::NotFound(format!("Review {}", id))
            })?;

        Ok(review)
    }

    /// List reviews with filters and pagination
    /// DOCUMENTATION: Supports ?package_id= and ?approved= filters plus
    /// ?search= on author_name; count and page queries run in parallel
    pub async fn list(pool: &PgPool, query: &ListQuery) -> Result<(Vec<Review>, i64), CmsError> {
        let pattern = query.search_pattern();

        let mut conditions: Vec<String> = Vec::new();

        if pattern.is_some() {
            let n = conditions.len() + 1;
            conditions.push(format!("author_name ILIKE ${}", n));
        }
        if query.package_id.is_some() {
            let n = conditions.len() + 1;
            conditions.push(format!("package_id = ${}", n));
        }
        if query.approved.is_some() {
            let n = conditions.len() + 1;
            conditions.push(format!("is_approved = ${}", n));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let count_sql = format!("SELECT COUNT(*) FROM reviews {}", where_clause);
        let page_sql = format!(
            "SELECT * FROM reviews {} {} LIMIT {} OFFSET {}",
            where_clause,
            query.order_clause(SORT_KEYS, "created_at"),
            query.limit(),
            query.offset()
        );

        let mut count_query = sqlx::query_as::<_, (i64,)>(&count_sql);
        let mut page_query = sqlx::query_as::<_, Review>(&page_sql);

        if let Some(p) = &pattern {
            count_query = count_query.bind(p);
            page_query = page_query.bind(p);
        }
        if let Some(package_id) = query.package_id {
            count_query = count_query.bind(package_id);
            page_query = page_query.bind(package_id);
        }
        if let Some(approved) = query.approved {
            count_query = count_query.bind(approved);
            page_query = page_query.bind(approved);
        }

        let ((total,), reviews) = tokio::try_join!(
            count_query.fetch_one(pool),
            page_query.fetch_all(pool)
        )
        .map_err(|e| CmsError::from_db("list reviews", e))?;

        Ok((reviews, total))
    }

    /// Approved reviews of a package, newest first
    /// DOCUMENTATION: The only review query the public website sees
    pub async fn list_approved_by_package(
        pool: &PgPool,
        package_id: Uuid,
    ) -> Result<Vec<Review>, CmsError> {
        let reviews = sqlx::query_as::<_, Review>(
            r#"
            SELECT * FROM reviews
            WHERE package_id = $1 AND is_approved = TRUE
            ORDER BY created_at DESC
            "#,
        )
        .bind(package_id)
        .fetch_all(pool)
        .await
        .map_err(|e| CmsError::from_db("list approved reviews", e))?;

        Ok(reviews)
    }

    /// Update existing review
    /// DOCUMENTATION: Partial update - only provided fields are modified
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        req: &UpdateReviewRequest,
    ) -> Result<Review, CmsError> {
        let review = sqlx::query_as::<_, Review>(
            r#"
            UPDATE reviews
            SET author_name = COALESCE($1, author_name),
                rating = COALESCE($2, rating),
                title = COALESCE($3, title),
                content = COALESCE($4, content),
                is_approved = COALESCE($5, is_approved),
                updated_at = NOW()
            WHERE id = $6
            RETURNING *
            "#,
        )
        .bind(&req.author_name)
        .bind(req.rating)
        .bind(&req.title)
        .bind(&req.content)
        .bind(req.is_approved)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| CmsError::from_db("update review", e))?
        .ok_or_else(|| {
            log::warn!("Review not found: {}", id);
            CmsError::NotFound(format!("Review {}", id))
        })?;

        log::info!("Updated review: {}", id);
        Ok(review)
    }

    /// Physically delete a review
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), CmsError> {
        let rows = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| CmsError::from_db("delete review", e))?
            .rows_affected();

        if rows == 0 {
            return Err(CmsError::NotFound(format!("Review {}", id)));
        }

        log::info!("Deleted review: {}", id);
        Ok(())
    }
}
