// src/handlers/itineraries.rs
// DOCUMENTATION: HTTP handlers for itinerary day operations

use crate::db::ItineraryRepository;
use crate::errors::CmsError;
use crate::models::{
    ApiResponse, CreateItineraryDayRequest, ItineraryDayResponse, ListQuery, Pagination,
    UpdateItineraryDayRequest,
};
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// GET /api/itineraries
/// List itinerary days, optionally filtered by package
pub async fn list_itinerary_days(
    pool: web::Data<PgPool>,
    query: web::Query<ListQuery>,
) -> Result<impl Responder, CmsError> {
    let (days, total) = ItineraryRepository::list(pool.get_ref(), &query).await?;

    let data: Vec<ItineraryDayResponse> = days.iter().map(|d| d.to_response()).collect();
    let pagination = Pagination::new(query.page(), query.limit(), total);

    Ok(HttpResponse::Ok().json(ApiResponse::ok_paginated(data, pagination)))
}

/// POST /api/itineraries
/// Create an itinerary day; duplicate (package, day_number) maps to 409
pub async fn create_itinerary_day(
    pool: web::Data<PgPool>,
    req: web::Json<CreateItineraryDayRequest>,
) -> Result<impl Responder, CmsError> {
    if let Err(e) = req.validate() {
        return Err(CmsError::ValidationError(e.to_string()));
    }

    let day = ItineraryRepository::create(pool.get_ref(), &req).await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok(day.to_response())))
}

/// GET /api/itineraries/{id}
pub async fn get_itinerary_day(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, CmsError> {
    let day = ItineraryRepository::get_by_id(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(day.to_response())))
}

/// PUT /api/itineraries/{id}
pub async fn update_itinerary_day(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    req: web::Json<UpdateItineraryDayRequest>,
) -> Result<impl Responder, CmsError> {
    let day = ItineraryRepository::update(pool.get_ref(), path.into_inner(), &req).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(day.to_response())))
}

/// DELETE /api/itineraries/{id}
pub async fn delete_itinerary_day(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, CmsError> {
    ItineraryRepository::delete(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok_empty()))
}

/// Configuration for itinerary routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/itineraries")
            .route("", web::get().to(list_itinerary_days))
            .route("", web::post().to(create_itinerary_day))
            .route("/{id}", web::get().to(get_itinerary_day))
            .route("/{id}", web::put().to(update_itinerary_day))
            .route("/{id}", web::delete().to(delete_itinerary_day)),
    );
}
