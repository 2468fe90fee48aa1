// src/db/snippet_repository.rs
// DOCUMENTATION: Database access layer for IEH snippets
// PURPOSE: One table serves the three collections; every query is scoped
// by kind so /api/inclusions can never see a highlight

use crate::errors::CmsError;
use crate::models::{CreateSnippetRequest, ListQuery, Snippet, SnippetKind, UpdateSnippetRequest};
use sqlx::PgPool;
use uuid::Uuid;

/// Sort keys accepted by the snippet collections
const SORT_KEYS: &[(&str, &str)] = &[("label", "label"), ("created_at", "created_at")];

pub struct SnippetRepository;

impl SnippetRepository {
    /// Create new snippet of the given kind
    /// DOCUMENTATION: (kind, label) is unique; duplicates surface as 409
    pub async fn create(
        pool: &PgPool,
        kind: SnippetKind,
        req: &CreateSnippetRequest,
    ) -> Result<Snippet, CmsError> {
        let snippet = sqlx::query_as::<_, Snippet>(
            r#"
            INSERT INTO snippets (kind, label)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(kind)
        .bind(&req.label)
        .fetch_one(pool)
        .await
        .map_err(|e| CmsError::from_db("create snippet", e))?;

        log::info!("Created {:?} snippet with id: {}", kind, snippet.id);
        Ok(snippet)
    }

    /// Retrieve snippet by ID within a kind
    /// DOCUMENTATION: The kind guard keeps ids from leaking across the
    /// three collections
    pub async fn get_by_id(pool: &PgPool, kind: SnippetKind, id: Uuid) -> Result<Snippet, CmsError> {
        let snippet = sqlx::query_as::<_, Snippet>(
            "SELECT * FROM snippets WHERE id = $1 AND kind = $2",
        )
        .bind(id)
        .bind(kind)
        .fetch_optional(pool)
        .await
        .map_err(|e| CmsError::from_db("get snippet", e))?
        .ok_or_else(|| {
            log::warn!("Snippet not found: {}", id);
            CmsError::NotFound(format!("Snippet {}", id))
        })?;

        Ok(snippet)
    }

    /// List snippets of a kind with pagination
    /// DOCUMENTATION: Supports ?search= on label; count and page queries
    /// run in parallel
    pub async fn list(
        pool: &PgPool,
        kind: SnippetKind,
        query: &ListQuery,
    ) -> Result<(Vec<Snippet>, i64), CmsError> {
        let pattern = query.search_pattern();

        let mut conditions: Vec<String> = vec!["kind = $1".to_string()];

        if pattern.is_some() {
            let n = conditions.len() + 1;
            conditions.push(format!("label ILIKE ${}", n));
        }

        let where_clause = format!("WHERE {}", conditions.join(" AND "));

        let count_sql = format!("SELECT COUNT(*) FROM snippets {}", where_clause);
        let page_sql = format!(
            "SELECT * FROM snippets {} {} LIMIT {} OFFSET {}",
            where_clause,
            query.order_clause(SORT_KEYS, "label"),
            query.limit(),
            query.offset()
        );

        let mut count_query = sqlx::query_as::<_, (i64,)>(&count_sql).bind(kind);
        let mut page_query = sqlx::query_as::<_, Snippet>(&page_sql).bind(kind);

        if let Some(p) = &pattern {
            count_query = count_query.bind(p);
            page_query = page_query.bind(p);
        }

        let ((total,), snippets) = tokio::try_join!(
            count_query.fetch_one(pool),
            page_query.fetch_all(pool)
        )
        .map_err(|e| CmsError::from_db("list snippets", e))?;

        Ok((snippets, total))
    }

    /// All snippets attached to a package via package_snippets
    /// DOCUMENTATION: Returns every kind; the service groups them into the
    /// three IEH lists
    pub async fn list_by_package(
        pool: &PgPool,
        package_id: Uuid,
    ) -> Result<Vec<Snippet>, CmsError> {
        let snippets = sqlx::query_as::<_, Snippet>(
            r#"
            SELECT s.*
            FROM snippets s
            INNER JOIN package_snippets ps ON ps.snippet_id = s.id
            WHERE ps.package_id = $1
            ORDER BY s.label ASC
            "#,
        )
        .bind(package_id)
        .fetch_all(pool)
        .await
        .map_err(|e| CmsError::from_db("list snippets by package", e))?;

        Ok(snippets)
    }

    /// Update existing snippet within a kind
    pub async fn update(
        pool: &PgPool,
        kind: SnippetKind,
        id: Uuid,
        req: &UpdateSnippetRequest,
    ) -> Result<Snippet, CmsError> {
        let snippet = sqlx::query_as::<_, Snippet>(
            r#"
            UPDATE snippets
            SET label = COALESCE($1, label),
                updated_at = NOW()
            WHERE id = $2 AND kind = $3
            RETURNING *
            "#,
        )
        .bind(&req.label)
        .bind(id)
        .bind(kind)
        .fetch_optional(pool)
        .await
        .map_err(|e| CmsError::from_db("update snippet", e))?
        .ok_or_else(|| {
            log::warn!("Snippet not found: {}", id);
            CmsError::NotFound(format!("Snippet {}", id))
        })?;

        log::info!("Updated snippet: {}", id);
        Ok(snippet)
    }

    /// Physically delete a snippet within a kind
    pub async fn delete(pool: &PgPool, kind: SnippetKind, id: Uuid) -> Result<(), CmsError> {
        let rows = sqlx::query("DELETE FROM snippets WHERE id = $1 AND kind = $2")
            .bind(id)
            .bind(kind)
            .execute(pool)
            .await
            .map_err(|e| CmsError::from_db("delete snippet", e))?
            .rows_affected();

        if rows == 0 {
            return Err(CmsError::NotFound(format!("Snippet {}", id)));
        }

        log::info!("Deleted snippet: {}", id);
        Ok(())
    }
}
