// src/handlers/hotels.rs
// DOCUMENTATION: HTTP handlers for hotels and their image gallery
// PURPOSE: Serves both /api/hotels and /api/hotel-images

use crate::db::{HotelImageRepository, HotelRepository};
use crate::errors::CmsError;
use crate::models::{
    ApiResponse, CreateHotelImageRequest, CreateHotelRequest, HotelResponse, ListQuery,
    Pagination, UpdateHotelImageRequest, UpdateHotelRequest,
};
use crate::services::HotelService;
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// GET /api/hotels
/// List hotels with pagination, search and city filter
pub async fn list_hotels(
    pool: web::Data<PgPool>,
    query: web::Query<ListQuery>,
) -> Result<impl Responder, CmsError> {
    let (hotels, total) = HotelRepository::list(pool.get_ref(), &query).await?;

    let data: Vec<HotelResponse> = hotels.iter().map(|h| h.to_response()).collect();
    let pagination = Pagination::new(query.page(), query.limit(), total);

    Ok(HttpResponse::Ok().json(ApiResponse::ok_paginated(data, pagination)))
}

/// POST /api/hotels
/// Create a new hotel
pub async fn create_hotel(
    pool: web::Data<PgPool>,
    req: web::Json<CreateHotelRequest>,
) -> Result<impl Responder, CmsError> {
    if let Err(e) = req.validate() {
        return Err(CmsError::ValidationError(e.to_string()));
    }

    let hotel = HotelRepository::create(pool.get_ref(), &req).await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok(hotel.to_response())))
}

/// GET /api/hotels/{id}
/// Retrieve a hotel with its image gallery
pub async fn get_hotel(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, CmsError> {
    let detail = HotelService::get_detail(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(detail)))
}

/// PUT /api/hotels/{id}
/// Update a hotel
pub async fn update_hotel(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    req: web::Json<UpdateHotelRequest>,
) -> Result<impl Responder, CmsError> {
    let hotel = HotelRepository::update(pool.get_ref(), path.into_inner(), &req).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(hotel.to_response())))
}

/// DELETE /api/hotels/{id}
/// Physically delete a hotel and its images
pub async fn delete_hotel(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, CmsError> {
    HotelRepository::delete(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok_empty()))
}

/// GET /api/hotel-images
/// List hotel images, usually filtered by ?hotel_id=
pub async fn list_hotel_images(
    pool: web::Data<PgPool>,
    query: web::Query<ListQuery>,
) -> Result<impl Responder, CmsError> {
    let (images, total) = HotelImageRepository::list(pool.get_ref(), &query).await?;
    let pagination = Pagination::new(query.page(), query.limit(), total);

    Ok(HttpResponse::Ok().json(ApiResponse::ok_paginated(images, pagination)))
}

/// POST /api/hotel-images
/// Attach an image to a hotel
pub async fn create_hotel_image(
    pool: web::Data<PgPool>,
    req: web::Json<CreateHotelImageRequest>,
) -> Result<impl Responder, CmsError> {
    if let Err(e) = req.validate() {
        return Err(CmsError::ValidationError(e.to_string()));
    }

    let image = HotelImageRepository::create(pool.get_ref(), &req).await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok(image)))
}

/// GET /api/hotel-images/{id}
/// Retrieve a hotel image by ID
pub async fn get_hotel_image(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, CmsError> {
    let image = HotelImageRepository::get_by_id(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(image)))
}

/// PUT /api/hotel-images/{id}
/// Update a hotel image
pub async fn update_hotel_image(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    req: web::Json<UpdateHotelImageRequest>,
) -> Result<impl Responder, CmsError> {
    let image = HotelImageRepository::update(pool.get_ref(), path.into_inner(), &req).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(image)))
}

/// DELETE /api/hotel-images/{id}
/// Physically delete a hotel image
pub async fn delete_hotel_image(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, CmsError> {
    HotelImageRepository::delete(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok_empty()))
}

/// Configuration for hotel routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/hotels")
            .route("", web::get().to(list_hotels))
            .route("", web::post().to(create_hotel))
            .route("/{id}", web::get().to(get_hotel))
            .route("/{id}", web::put().to(update_hotel))
            .route("/{id}", web::delete().to(delete_hotel)),
    );
}

/// Configuration for hotel image routes
pub fn images_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/hotel-images")
            .route("", web::get().to(list_hotel_images))
            .route("", web::post().to(create_hotel_image))
            .route("/{id}", web::get().to(get_hotel_image))
            .route("/{id}", web::put().to(update_hotel_image))
            .route("/{id}", web::delete().to(delete_hotel_image)),
    );
}
