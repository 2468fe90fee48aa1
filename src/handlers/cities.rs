// src/handlers/cities.rs
// DOCUMENTATION: HTTP handlers for city operations

use crate::db::CityRepository;
use crate::errors::CmsError;
use crate::models::{ApiResponse, CityResponse, CreateCityRequest, ListQuery, Pagination, UpdateCityRequest};
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// GET /api/cities
/// List cities with pagination, search and destination filter
pub async fn list_cities(
    pool: web::Data<PgPool>,
    query: web::Query<ListQuery>,
) -> Result<impl Responder, CmsError> {
    let (cities, total) = CityRepository::list(pool.get_ref(), &query).await?;

    let data: Vec<CityResponse> = cities.iter().map(|c| c.to_response()).collect();
    let pagination = Pagination::new(query.page(), query.limit(), total);

    Ok(HttpResponse::Ok().json(ApiResponse::ok_paginated(data, pagination)))
}

/// POST /api/cities
/// Create a new city
pub async fn create_city(
    pool: web::Data<PgPool>,
    req: web::Json<CreateCityRequest>,
) -> Result<impl Responder, CmsError> {
    if let Err(e) = req.validate() {
        return Err(CmsError::ValidationError(e.to_string()));
    }

    let city = CityRepository::create(pool.get_ref(), &req).await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok(city.to_response())))
}

/// GET /api/cities/{id}
/// Retrieve a city by ID
pub async fn get_city(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, CmsError> {
    let city = CityRepository::get_by_id(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(city.to_response())))
}

/// PUT /api/cities/{id}
/// Update a city
pub async fn update_city(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    req: web::Json<UpdateCityRequest>,
) -> Result<impl Responder, CmsError> {
    let city = CityRepository::update(pool.get_ref(), path.into_inner(), &req).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(city.to_response())))
}

/// DELETE /api/cities/{id}
/// Physically delete a city
pub async fn delete_city(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, CmsError> {
    CityRepository::delete(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok_empty()))
}

/// Configuration for city routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/cities")
            .route("", web::get().to(list_cities))
            .route("", web::post().to(create_city))
            .route("/{id}", web::get().to(get_city))
            .route("/{id}", web::put().to(update_city))
            .route("/{id}", web::delete().to(delete_city)),
    );
}
