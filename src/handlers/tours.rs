// src/handlers/tours.rs
// DOCUMENTATION: HTTP handlers for tour operations

use crate::db::TourRepository;
use crate::errors::CmsError;
use crate::models::{ApiResponse, CreateTourRequest, ListQuery, Pagination, TourResponse, UpdateTourRequest};
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// GET /api/tours
/// List tours with pagination and name/type search
pub async fn list_tours(
    pool: web::Data<PgPool>,
    query: web::Query<ListQuery>,
) -> Result<impl Responder, CmsError> {
    let (tours, total) = TourRepository::list(pool.get_ref(), &query).await?;

    let data: Vec<TourResponse> = tours.iter().map(|t| t.to_response()).collect();
    let pagination = Pagination::new(query.page(), query.limit(), total);

    Ok(HttpResponse::Ok().json(ApiResponse::ok_paginated(data, pagination)))
}

/// POST /api/tours
pub async fn create_tour(
    pool: web::Data<PgPool>,
    req: web::Json<CreateTourRequest>,
) -> Result<impl Responder, CmsError> {
    if let Err(e) = req.validate() {
        return Err(CmsError::ValidationError(e.to_string()));
    }

    let tour = TourRepository::create(pool.get_ref(), &req).await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok(tour.to_response())))
}

/// GET /api/tours/{id}
pub async fn get_tour(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, CmsError> {
    let tour = TourRepository::get_by_id(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(tour.to_response())))
}

/// PUT /api/tours/{id}
pub async fn update_tour(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    req: web::Json<UpdateTourRequest>,
) -> Result<impl Responder, CmsError> {
    let tour = TourRepository::update(pool.get_ref(), path.into_inner(), &req).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(tour.to_response())))
}

/// DELETE /api/tours/{id}
/// Physically delete a tour; package associations are removed by cascade
pub async fn delete_tour(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, CmsError> {
    TourRepository::delete(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok_empty()))
}

/// Configuration for tour routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/tours")
            .route("", web::get().to(list_tours))
            .route("", web::post().to(create_tour))
            .route("/{id}", web::get().to(get_tour))
            .route("/{id}", web::put().to(update_tour))
            .route("/{id}", web::delete().to(delete_tour)),
    );
}
