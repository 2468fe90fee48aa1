// src/handlers/packages.rs
// DOCUMENTATION: HTTP handlers for package operations

use crate::db::PackageRepository;
use crate::errors::CmsError;
use crate::models::{
    ApiResponse, CreatePackageRequest, ListQuery, PackageResponse, Pagination,
    UpdatePackageRequest,
};
use crate::services::PackageService;
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// GET /api/packages
/// List packages with pagination, search, destination and featured filters
pub async fn list_packages(
    pool: web::Data<PgPool>,
    query: web::Query<ListQuery>,
) -> Result<impl Responder, CmsError> {
    let (packages, total) = PackageRepository::list(pool.get_ref(), &query).await?;

    let data: Vec<PackageResponse> = packages.iter().map(|p| p.to_response()).collect();
    let pagination = Pagination::new(query.page(), query.limit(), total);

    Ok(HttpResponse::Ok().json(ApiResponse::ok_paginated(data, pagination)))
}

/// POST /api/packages
/// Create a new package with its tour/city/snippet associations
pub async fn create_package(
    pool: web::Data<PgPool>,
    req: web::Json<CreatePackageRequest>,
) -> Result<impl Responder, CmsError> {
    if let Err(e) = req.validate() {
        return Err(CmsError::ValidationError(e.to_string()));
    }

    let package = PackageRepository::create(pool.get_ref(), &req).await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok(package.to_response())))
}

/// GET /api/packages/{id}
/// Retrieve the assembled package detail
pub async fn get_package(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, CmsError> {
    let detail = PackageService::get_detail(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(detail)))
}

/// PUT /api/packages/{id}
/// Update a package; provided id arrays replace those association sets
pub async fn update_package(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    req: web::Json<UpdatePackageRequest>,
) -> Result<impl Responder, CmsError> {
    let package = PackageRepository::update(pool.get_ref(), path.into_inner(), &req).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(package.to_response())))
}

/// DELETE /api/packages/{id}
/// Physically delete a package with its itinerary, reviews and join rows
pub async fn delete_package(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, CmsError> {
    PackageRepository::delete(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok_empty()))
}

/// Configuration for package routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/packages")
            .route("", web::get().to(list_packages))
            .route("", web::post().to(create_package))
            .route("/{id}", web::get().to(get_package))
            .route("/{id}", web::put().to(update_package))
            .route("/{id}", web::delete().to(delete_package)),
    );
}
