// src/services/destination_service.rs
// DOCUMENTATION: Business logic for destinations
// PURPOSE: Assembles the destination detail response from its repositories

use crate::db::{CityRepository, DestinationRepository, PackageRepository};
use crate::errors::CmsError;
use crate::models::DestinationDetailResponse;
use sqlx::PgPool;
use uuid::Uuid;

pub struct DestinationService;

impl DestinationService {
    /// Get a destination with its cities and packages
    /// DOCUMENTATION: Used by GET /api/destinations/{id} and the website API
    pub async fn get_detail(pool: &PgPool, id: Uuid) -> Result<DestinationDetailResponse, CmsError> {
        let destination = DestinationRepository::get_by_id(pool, id).await?;
        let cities = CityRepository::list_by_destination(pool, id).await?;
        let packages = PackageRepository::list_by_destination(pool, id).await?;

        Ok(DestinationDetailResponse {
            destination: destination.to_response(),
            cities: cities.iter().map(|c| c.to_response()).collect(),
            packages: packages.iter().map(|p| p.to_response()).collect(),
        })
    }
}
