// src/db/package_repository.rs
// DOCUMENTATION: Database access layer for packages
// PURPOSE: Package CRUD plus the join-table wiring to tours, cities and
// snippets; association writes happen inside a transaction with the
// package row itself

use crate::errors::CmsError;
use crate::models::{CreatePackageRequest, ListQuery, Package, UpdatePackageRequest};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

/// Sort keys accepted by GET /api/packages
const SORT_KEYS: &[(&str, &str)] = &[
    ("name", "name"),
    ("price", "price"),
    ("duration_days", "duration_days"),
    ("created_at", "created_at"),
    ("updated_at", "updated_at"),
];

pub struct PackageRepository;

impl PackageRepository {
    /// Create new package with its associations
    /// DOCUMENTATION: Inserts the package row and the join rows for tours,
    /// cities and snippets in one transaction
    pub async fn create(pool: &PgPool, req: &CreatePackageRequest) -> Result<Package, CmsError> {
        let mut tx = pool
            .begin()
            .await
            .map_err(|e| CmsError::from_db("begin create package", e))?;

        let package = sqlx::query_as::<_, Package>(
            r#"
            INSERT INTO packages (
                destination_id, name, description, duration_days,
                duration_nights, price, image_url, is_featured
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(req.destination_id)
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.duration_days)
        .bind(req.duration_nights)
        .bind(req.price)
        .bind(&req.image_url)
        .bind(req.is_featured)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| CmsError::from_db("create package", e))?;

        Self::replace_tours(&mut tx, package.id, &req.tour_ids).await?;
        Self::replace_cities(&mut tx, package.id, &req.city_ids).await?;
        Self::replace_snippets(&mut tx, package.id, &req.snippet_ids).await?;

        tx.commit()
            .await
            .map_err(|e| CmsError::from_db("commit create package", e))?;

        log::info!("Created package with id: {}", package.id);
        Ok(package)
    }

    /// Retrieve package by ID
    pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<Package, CmsError> {
        let package = sqlx::query_as::<_, Package>("SELECT * FROM packages WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| CmsError::from_db("get package", e))?
            .ok_or_else(|| {
                log::warn!("Package not found: {}", id);
                CmsError::NotFound(format!("Package {}", id))
            })?;

        Ok(package)
    }

    /// List packages with filters and pagination
    /// DOCUMENTATION: Supports ?search= on name, ?destination_id= and
    /// ?featured= filters; count and page queries run in parallel
    pub async fn list(pool: &PgPool, query: &ListQuery) -> Result<(Vec<Package>, i64), CmsError> {
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
        if query.featured.is_some() {
            let n = conditions.len() + 1;
            conditions.push(format!("is_featured = ${}", n));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let count_sql = format!("SELECT COUNT(*) FROM packages {}", where_clause);
        let page_sql = format!(
            "SELECT * FROM packages {} {} LIMIT {} OFFSET {}",
            where_clause,
            query.order_clause(SORT_KEYS, "created_at"),
            query.limit(),
            query.offset()
        );

        let mut count_query = sqlx::query_as::<_, (i64,)>(&count_sql);
        let mut page_query = sqlx::query_as::<_, Package>(&page_sql);

        if let Some(p) = &pattern {
            count_query = count_query.bind(p);
            page_query = page_query.bind(p);
        }
        if let Some(destination_id) = query.destination_id {
            count_query = count_query.bind(destination_id);
            page_query = page_query.bind(destination_id);
        }
        if let Some(featured) = query.featured {
            count_query = count_query.bind(featured);
            page_query = page_query.bind(featured);
        }

        let ((total,), packages) = tokio::try_join!(
            count_query.fetch_one(pool),
            page_query.fetch_all(pool)
        )
        .map_err(|e| CmsError::from_db("list packages", e))?;

        Ok((packages, total))
    }

    /// All packages of a destination, used by the destination detail response
    pub async fn list_by_destination(
        pool: &PgPool,
        destination_id: Uuid,
    ) -> Result<Vec<Package>, CmsError> {
        let packages = sqlx::query_as::<_, Package>(
            "SELECT * FROM packages WHERE destination_id = $1 ORDER BY name ASC",
        )
        .bind(destination_id)
        .fetch_all(pool)
        .await
        .map_err(|e| CmsError::from_db("list packages by destination", e))?;

        Ok(packages)
    }

    /// Update existing package
    /// DOCUMENTATION: Partial update for scalar columns; a provided id array
    /// replaces that association set wholesale inside the same transaction
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        req: &UpdatePackageRequest,
    ) -> Result<Package, CmsError> {
        let mut tx = pool
            .begin()
            .await
            .map_err(|e| CmsError::from_db("begin update package", e))?;

        let package = sqlx::query_as::<_, Package>(
            r#"
            UPDATE packages
            SET destination_id = COALESCE($1, destination_id),
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                duration_days = COALESCE($4, duration_days),
                duration_nights = COALESCE($5, duration_nights),
                price = COALESCE($6, price),
                image_url = COALESCE($7, image_url),
                is_featured = COALESCE($8, is_featured),
                updated_at = NOW()
            WHERE id = $9
            RETURNING *
            "#,
        )
        .bind(req.destination_id)
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.duration_days)
        .bind(req.duration_nights)
        .bind(req.price)
        .bind(&req.image_url)
        .bind(req.is_featured)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| CmsError::from_db("update package", e))?
        .ok_or_else(|| {
            log::warn!("Package not found: {}", id);
            CmsError::NotFound(format!("Package {}", id))
        })?;

        if let Some(tour_ids) = &req.tour_ids {
            Self::replace_tours(&mut tx, id, tour_ids).await?;
        }
        if let Some(city_ids) = &req.city_ids {
            Self::replace_cities(&mut tx, id, city_ids).await?;
        }
        if let Some(snippet_ids) = &req.snippet_ids {
            Self::replace_snippets(&mut tx, id, snippet_ids).await?;
        }

        tx.commit()
            .await
            .map_err(|e| CmsError::from_db("commit update package", e))?;

        log::info!("Updated package: {}", id);
        Ok(package)
    }

    /// Physically delete a package
    /// DOCUMENTATION: DELETE cascades to join rows, itinerary days and reviews
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), CmsError> {
        let rows = sqlx::query("DELETE FROM packages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| CmsError::from_db("delete package", e))?
            .rows_affected();

        if rows == 0 {
            return Err(CmsError::NotFound(format!("Package {}", id)));
        }

        log::info!("Deleted package: {}", id);
        Ok(())
    }

    /// Replace the tour association set for a package
    async fn replace_tours(
        tx: &mut Transaction<'_, Postgres>,
        package_id: Uuid,
        tour_ids: &[Uuid],
    ) -> Result<(), CmsError> {
        sqlx::query("DELETE FROM package_tours WHERE package_id = $1")
            .bind(package_id)
            .execute(&mut **tx)
            .await
            .map_err(|e| CmsError::from_db("clear package tours", e))?;

        if !tour_ids.is_empty() {
            sqlx::query(
                r#"
                INSERT INTO package_tours (package_id, tour_id)
                SELECT $1, unnest($2::uuid[])
                ON CONFLICT DO NOTHING
                "#,
            )
            .bind(package_id)
            .bind(tour_ids)
            .execute(&mut **tx)
            .await
            .map_err(|e| CmsError::from_db("set package tours", e))?;
        }

        Ok(())
    }

    /// Replace the city association set for a package
    async fn replace_cities(
        tx: &mut Transaction<'_, Postgres>,
        package_id: Uuid,
        city_ids: &[Uuid],
    ) -> Result<(), CmsError> {
        sqlx::query("DELETE FROM package_cities WHERE package_id = $1")
            .bind(package_id)
            .execute(&mut **tx)
            .await
            .map_err(|e| CmsError::from_db("clear package cities", e))?;

        if !city_ids.is_empty() {
            sqlx::query(
                r#"
                INSERT INTO package_cities (package_id, city_id)
                SELECT $1, unnest($2::uuid[])
                ON CONFLICT DO NOTHING
                "#,
            )
            .bind(package_id)
            .bind(city_ids)
            .execute(&mut **tx)
            .await
            .map_err(|e| CmsError::from_db("set package cities", e))?;
        }

        Ok(())
    }

    /// Replace the snippet association set for a package
    async fn replace_snippets(
        tx: &mut Transaction<'_, Postgres>,
        package_id: Uuid,
        snippet_ids: &[Uuid],
    ) -> Result<(), CmsError> {
        sqlx::query("DELETE FROM package_snippets WHERE package_id = $1")
            .bind(package_id)
            .execute(&mut **tx)
            .await
            .map_err(|e| CmsError::from_db("clear package snippets", e))?;

        if !snippet_ids.is_empty() {
            sqlx::query(
                r#"
                INSERT INTO package_snippets (package_id, snippet_id)
                SELECT $1, unnest($2::uuid[])
                ON CONFLICT DO NOTHING
                "#,
            )
            .bind(package_id)
            .bind(snippet_ids)
            .execute(&mut **tx)
            .await
            .map_err(|e| CmsError::from_db("set package snippets", e))?;
        }

        Ok(())
    }
}
