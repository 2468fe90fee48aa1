// src/handlers/destinations.rs
// DOCUMENTATION: HTTP handlers for destination operations
// PURPOSE: Parse requests, call repositories/services, return enveloped responses

use crate::db::DestinationRepository;
use crate::errors::CmsError;
use crate::models::{
    ApiResponse, CreateDestinationRequest, DestinationResponse, ListQuery, Pagination,
    UpdateDestinationRequest,
};
use crate::services::DestinationService;
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// GET /api/destinations
/// List destinations with pagination, search and featured filter
pub async fn list_destinations(
    pool: web::Data<PgPool>,
    query: web::Query<ListQuery>,
) -> Result<impl Responder, CmsError> {
    let (destinations, total) = DestinationRepository::list(pool.get_ref(), &query).await?;

    let data: Vec<DestinationResponse> = destinations.iter().map(|d| d.to_response()).collect();
    let pagination = Pagination::new(query.page(), query.limit(), total);

    Ok(HttpResponse::Ok().json(ApiResponse::ok_paginated(data, pagination)))
}

/// POST /api/destinations
/// Create a new destination
pub async fn create_destination(
    pool: web::Data<PgPool>,
    req: web::Json<CreateDestinationRequest>,
) -> Result<impl Responder, CmsError> {
    if let Err(e) = req.validate() {
        return Err(CmsError::ValidationError(e.to_string()));
    }

    let destination = DestinationRepository::create(pool.get_ref(), &req).await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok(destination.to_response())))
}

/// GET /api/destinations/{id}
/// Retrieve a destination with its cities and packages
pub async fn get_destination(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, CmsError> {
    let detail = DestinationService::get_detail(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(detail)))
}

/// PUT /api/destinations/{id}
/// Update a destination
pub async fn update_destination(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    req: web::Json<UpdateDestinationRequest>,
) -> Result<impl Responder, CmsError> {
    let destination =
        DestinationRepository::update(pool.get_ref(), path.into_inner(), &req).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(destination.to_response())))
}

/// DELETE /api/destinations/{id}
/// Physically delete a destination
pub async fn delete_destination(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, CmsError> {
    DestinationRepository::delete(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok_empty()))
}

/// Configuration for destination routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/destinations")
            .route("", web::get().to(list_destinations))
            .route("", web::post().to(create_destination))
            .route("/{id}", web::get().to(get_destination))
            .route("/{id}", web::put().to(update_destination))
            .route("/{id}", web::delete().to(delete_destination)),
    );
}
