// src/db/inquiry_repository.rs
// DOCUMENTATION: Database access layer for customer inquiries

use std::str::FromStr;

use crate::errors::CmsError;
use crate::models::{CreateInquiryRequest, Inquiry, InquiryStatus, ListQuery, UpdateInquiryRequest};
use sqlx::PgPool;
use uuid::Uuid;

/// Sort keys accepted by GET /api/inquiries
const SORT_KEYS: &[(&str, &str)] = &[
    ("name", "name"),
    ("travel_date", "travel_date"),
    ("created_at", "created_at"),
];

pub struct InquiryRepository;

impl InquiryRepository {
    /// Create new inquiry in database
    /// DOCUMENTATION: New inquiries always start in status 'new'
    pub async fn create(pool: &PgPool, req: &CreateInquiryRequest) -> Result<Inquiry, CmsError> {
        let inquiry = sqlx::query_as::<_, Inquiry>(
            r#"
            INSERT INTO inquiries (
                package_id, name, email, phone, message, travel_date, traveler_count, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, 'new')
            RETURNING *
            "#,
        )
        .bind(req.package_id)
        .bind(&req.name)
        .bind(&req.email)
        .bind(&req.phone)
        .bind(&req.message)
        .bind(req.travel_date)
        .bind(req.traveler_count)
        .fetch_one(pool)
        .await
        .map_err(|e| CmsError::from_db("create inquiry", e))?;

        log::info!("Created inquiry with id: {}", inquiry.id);
        Ok(inquiry)
    }

    /// Retrieve inquiry by ID
    pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<Inquiry, CmsError> {
        let inquiry = sqlx::query_as::<_, Inquiry>("SELECT * FROM inquiries WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| CmsError::from_db("get inquiry", e))?
            .ok_or_else(|| {
                log::warn!("Inquiry not found: {}", id);
                CmsError::NotFound(format!("Inquiry {}", id))
            })?;

        Ok(inquiry)
    }

    /// List inquiries with filters and pagination
    /// DOCUMENTATION: Supports ?status=, ?package_id= and ?search= on
    /// name/email; an unknown status value is a 400, not an empty result
    pub async fn list(pool: &PgPool, query: &ListQuery) -> Result<(Vec<Inquiry>, i64), CmsError> {
        let pattern = query.search_pattern();

        let status = match query.status.as_deref() {
            Some(raw) => Some(InquiryStatus::from_str(raw)?),
            None => None,
        };

        let mut conditions: Vec<String> = Vec::new();

        if pattern.is_some() {
            let n = conditions.len() + 1;
            conditions.push(format!("(name ILIKE ${0} OR email ILIKE ${0})", n));
        }
        if query.package_id.is_some() {
            let n = conditions.len() + 1;
            conditions.push(format!("package_id = ${}", n));
        }
        if status.is_some() {
            let n = conditions.len() + 1;
            conditions.push(format!("status = ${}", n));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let count_sql = format!("SELECT COUNT(*) FROM inquiries {}", where_clause);
        let page_sql = format!(
            "SELECT * FROM inquiries {} {} LIMIT {} OFFSET {}",
            where_clause,
            query.order_clause(SORT_KEYS, "created_at"),
            query.limit(),
            query.offset()
        );

        let mut count_query = sqlx::query_as::<_, (i64,)>(&count_sql);
        let mut page_query = sqlx::query_as::<_, Inquiry>(&page_sql);

        if let Some(p) = &pattern {
            count_query = count_query.bind(p);
            page_query = page_query.bind(p);
        }
        if let Some(package_id) = query.package_id {
            count_query = count_query.bind(package_id);
            page_query = page_query.bind(package_id);
        }
        if let Some(status) = status {
            count_query = count_query.bind(status);
            page_query = page_query.bind(status);
        }

        let ((total,), inquiries) = tokio::try_join!(
            count_query.fetch_one(pool),
            page_query.fetch_all(pool)
        )
        .map_err(|e| CmsError::from_db("list inquiries", e))?;

        Ok((inquiries, total))
    }

    /// Update existing inquiry
    /// DOCUMENTATION: The admin surface moves inquiries through their
    /// status lifecycle and corrects contact details
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        req: &UpdateInquiryRequest,
    ) -> Result<Inquiry, CmsError> {
        let inquiry = sqlx::query_as::<_, Inquiry>(
            r#"
            UPDATE inquiries
            SET phone = COALESCE($1, phone),
                travel_date = COALESCE($2, travel_date),
                traveler_count = COALESCE($3, traveler_count),
                status = COALESCE($4, status),
                updated_at = NOW()
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(&req.phone)
        .bind(req.travel_date)
        .bind(req.traveler_count)
        .bind(req.status)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| CmsError::from_db("update inquiry", e))?
        .ok_or_else(|| {
            log::warn!("Inquiry not found: {}", id);
            CmsError::NotFound(format!("Inquiry {}", id))
        })?;

        log::info!("Updated inquiry: {}", id);
        Ok(inquiry)
    }

    /// Physically delete an inquiry
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), CmsError> {
        let rows = sqlx::query("DELETE FROM inquiries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| CmsError::from_db("delete inquiry", e))?
            .rows_affected();

        if rows == 0 {
            return Err(CmsError::NotFound(format!("Inquiry {}", id)));
        }

        log::info!("Deleted inquiry: {}", id);
        Ok(())
    }
}
