// src/services/hotel_service.rs
// DOCUMENTATION: Business logic for hotels
// PURPOSE: Assembles the hotel detail response with its image gallery

use crate::db::{HotelImageRepository, HotelRepository};
use crate::errors::CmsError;
use crate::models::HotelDetailResponse;
use sqlx::PgPool;
use uuid::Uuid;

pub struct HotelService;

impl HotelService {
    /// Get a hotel with its gallery images
    /// DOCUMENTATION: Used by GET /api/hotels/{id}
    pub async fn get_detail(pool: &PgPool, id: Uuid) -> Result<HotelDetailResponse, CmsError> {
        let hotel = HotelRepository::get_by_id(pool, id).await?;
        let images = HotelImageRepository::list_by_hotel(pool, id).await?;

        Ok(HotelDetailResponse {
            hotel: hotel.to_response(),
            images,
        })
    }
}
