// src/services/package_service.rs
// DOCUMENTATION: Business logic for packages
// PURPOSE: Assembles the package detail response from its repositories

use crate::db::{
    CityRepository, ItineraryRepository, PackageRepository, ReviewRepository, SnippetRepository,
    TourRepository,
};
use crate::errors::CmsError;
use crate::models::{PackageDetailResponse, Snippet, SnippetKind};
use sqlx::PgPool;
use uuid::Uuid;

pub struct PackageService;

impl PackageService {
    /// Get a package with its itinerary, tours, cities, IEH lists and
    /// approved reviews
    /// DOCUMENTATION: Used by GET /api/packages/{id} and the website API
    pub async fn get_detail(pool: &PgPool, id: Uuid) -> Result<PackageDetailResponse, CmsError> {
        let package = PackageRepository::get_by_id(pool, id).await?;
        let itinerary = ItineraryRepository::list_by_package(pool, id).await?;
        let tours = TourRepository::list_by_package(pool, id).await?;
        let cities = CityRepository::list_by_package(pool, id).await?;
        let snippets = SnippetRepository::list_by_package(pool, id).await?;
        let reviews = ReviewRepository::list_approved_by_package(pool, id).await?;

        let (inclusions, exclusions, highlights) = Self::group_snippets(&snippets);

        Ok(PackageDetailResponse {
            package: package.to_response(),
            itinerary: itinerary.iter().map(|d| d.to_response()).collect(),
            tours: tours.iter().map(|t| t.to_response()).collect(),
            cities: cities.iter().map(|c| c.to_response()).collect(),
            inclusions,
            exclusions,
            highlights,
            reviews: reviews.iter().map(|r| r.to_response()).collect(),
        })
    }

    /// Split a package's snippets into the three IEH lists
    fn group_snippets(snippets: &[Snippet]) -> (Vec<String>, Vec<String>, Vec<String>) {
        let mut inclusions = Vec::new();
        let mut exclusions = Vec::new();
        let mut highlights = Vec::new();

        for snippet in snippets {
            match snippet.kind {
                SnippetKind::Inclusion => inclusions.push(snippet.label.clone()),
                SnippetKind::Exclusion => exclusions.push(snippet.label.clone()),
                SnippetKind::Highlight => highlights.push(snippet.label.clone()),
            }
        }

        (inclusions, exclusions, highlights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn snippet(kind: SnippetKind, label: &str) -> Snippet {
        Snippet {
            id: Uuid::new_v4(),
            kind,
            label: label.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_group_snippets() {
        let snippets = vec![
            snippet(SnippetKind::Inclusion, "Airport transfers"),
            snippet(SnippetKind::Highlight, "Sunrise volcano hike"),
            snippet(SnippetKind::Exclusion, "International flights"),
            snippet(SnippetKind::Inclusion, "Daily breakfast"),
        ];

        let (inclusions, exclusions, highlights) = PackageService::group_snippets(&snippets);

        assert_eq!(inclusions, vec!["Airport transfers", "Daily breakfast"]);
        assert_eq!(exclusions, vec!["International flights"]);
        assert_eq!(highlights, vec!["Sunrise volcano hike"]);
    }

    #[test]
    fn test_group_snippets_empty() {
        let (inclusions, exclusions, highlights) = PackageService::group_snippets(&[]);

        assert!(inclusions.is_empty());
        assert!(exclusions.is_empty());
        assert!(highlights.is_empty());
    }
}
