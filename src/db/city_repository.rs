// src/db/city_repository.rs
// DOCUMENTATION: Database access layer for cities

use crate::errors::CmsError;
use crate::models::{City, CreateCityRequest, ListQuery, UpdateCityRequest};
use sqlx::PgPool;
use uuid::Uuid;

/// Sort keys accepted by GET /api/cities
const SORT_KEYS: &[(&str, &str)] = &[
    ("name", "name"),
    ("created_at", "created_at"),
    ("updated_at", "updated_at"),
];

pub struct CityRepository;

impl CityRepository {
    /// Create new city in database
    pub async fn create(pool: &PgPool, req: &CreateCityRequest) -> Result<City, CmsError> {
        let city = sqlx::query_as::<_, City>(
            r#"
            INSERT INTO cities (destination_id, name, description, image_url)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(req.destination_id)
        .bind(&req.name)
        .bind(&req.description)
        .bind(&req.image_url)
        .fetch_one(pool)
        .await
        .map_err(|e| CmsError::from_db("create city", e))?;

        log::info!("Created city with id: {}", city.id);
        Ok(city)
    }

    /// Retrieve city by ID
    pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<City, CmsError> {
        let city = sqlx::query_as::<_, City>("SELECT * FROM cities WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| CmsError::from_db("get city", e))?
            .ok_or_else(|| {
                log::warn!("City not found: {}", id);
                CmsError::NotFound(format!("City {}", id))
            })?;

        Ok(city)
    }

    /// List cities with filters and pagination
    /// DOCUMENTATION: Supports ?search= on name and ?destination_id= filter
    /// The count query and the page query run in parallel
    pub async fn list(pool: &PgPool, query: &ListQuery) -> Result<(Vec<City>, i64), CmsError> {
        let pattern = query.search_pattern();

        let mut conditions: Vec<String> = Vec::new();

        if pattern.is_some() {
            let n = conditions.len() + 1;
            conditions.push(format!("name ILIKE ${}", n));
        }
        if query.destination_id.is_some() {
            let n = conditions.len() + 1;
            conditions.push(format!("destination_id = ${}", n));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let count_sql = format!("SELECT COUNT(*) FROM cities {}", where_clause);
        let page_sql = format!(
            "SELECT * FROM cities {} {} LIMIT {} OFFSET {}",
            where_clause,
            query.order_clause(SORT_KEYS, "created_at"),
            query.limit(),
            query.offset()
        );

        let mut count_query = sqlx::query_as::<_, (i64,)>(&count_sql);
        let mut page_query = sqlx::query_as::<_, City>(&page_sql);

        if let Some(p) = &pattern {
            count_query = count_query.bind(p);
            page_query = page_query.bind(p);
        }
        if let Some(destination_id) = query.destination_id {
            count_query = count_query.bind(destination_id);
            page_query = page_query.bind(destination_id);
        }

        let ((total,), cities) = tokio::try_join!(
            count_query.fetch_one(pool),
            page_query.fetch_all(pool)
        )
        .map_err(|e| CmsError::from_db("list cities", e))?;

        Ok((cities, total))
    }

    /// All cities of a destination, used by the destination detail response
    pub async fn list_by_destination(
        pool: &PgPool,
        destination_id: Uuid,
    ) -> Result<Vec<City>, CmsError> {
        let cities = sqlx::query_as::<_, City>(
            "SELECT * FROM cities WHERE destination_id = $1 ORDER BY name ASC",
        )
        .bind(destination_id)
        .fetch_all(pool)
        .await
        .map_err(|e| CmsError::from_db("list cities by destination", e))?;

        Ok(cities)
    }

    /// All cities attached to a package via package_cities
    pub async fn list_by_package(pool: &PgPool, package_id: Uuid) -> Result<Vec<City>, CmsError> {
        let cities = sqlx::query_as::<_, City>(
            r#"
            SELECT c.*
            FROM cities c
            INNER JOIN package_cities pc ON pc.city_id = c.id
            WHERE pc.package_id = $1
            ORDER BY c.name ASC
            "#,
        )
        .bind(package_id)
        .fetch_all(pool)
        .await
        .map_err(|e| CmsError::from_db("list cities by package", e))?;

        Ok(cities)
    }

    /// Update existing city
    /// DOCUMENTATION: Partial update - only provided fields are modified
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        req: &UpdateCityRequest,
    ) -> Result<City, CmsError> {
        let city = sqlx::query_as::<_, City>(
            r#"
            UPDATE cities
            SET destination_id = COALESCE($1, destination_id),
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                image_url = COALESCE($4, image_url),
                updated_at = NOW()
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(req.destination_id)
        .bind(&req.name)
        .bind(&req.description)
        .bind(&req.image_url)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| CmsError::from_db("update city", e))?
        .ok_or_else(|| {
            log::warn!("City not found: {}", id);
            CmsError::NotFound(format!("City {}", id))
        })?;

        log::info!("Updated city: {}", id);
        Ok(city)
    }

    /// Physically delete a city
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), CmsError> {
        let rows = sqlx::query("DELETE FROM cities WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| CmsError::from_db("delete city", e))?
            .rows_affected();

        if rows == 0 {
            return Err(CmsError::NotFound(format!("City {}", id)));
        }

        log::info!("Deleted city: {}", id);
        Ok(())
    }
}
