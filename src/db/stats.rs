// src/db/stats.rs
// DOCUMENTATION: Aggregate counts for the admin dashboard

use crate::errors::CmsError;
use sqlx::{FromRow, PgPool};

/// Record counts shown on the dashboard landing page
#[derive(Debug, Clone, FromRow)]
pub struct DashboardCounts {
    pub destinations: i64,
    pub cities: i64,
    pub hotels: i64,
    pub packages: i64,
    pub tours: i64,
    pub reviews: i64,
    pub inquiries: i64,
    pub new_inquiries: i64,
}

/// Fetch all dashboard counts in a single round trip
pub async fn dashboard_counts(pool: &PgPool) -> Result<DashboardCounts, CmsError> {
    let counts = sqlx::query_as::<_, DashboardCounts>(
        r#"
        SELECT
            (SELECT COUNT(*) FROM destinations) AS destinations,
            (SELECT COUNT(*) FROM cities) AS cities,
            (SELECT COUNT(*) FROM hotels) AS hotels,
            (SELECT COUNT(*) FROM packages) AS packages,
            (SELECT COUNT(*) FROM tours) AS tours,
            (SELECT COUNT(*) FROM reviews) AS reviews,
            (SELECT COUNT(*) FROM inquiries) AS inquiries,
            (SELECT COUNT(*) FROM inquiries WHERE status = 'new') AS new_inquiries
        "#,
    )
    .fetch_one(pool)
    .await
    .map_err(|e| CmsError::from_db("dashboard counts", e))?;

    Ok(counts)
}
