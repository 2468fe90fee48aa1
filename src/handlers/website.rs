// src/handlers/website.rs
// DOCUMENTATION: Public read-only API for the marketing website
// PURPOSE: Mirrors the read endpoints under /api/website, gated by a
// static x-api-key header instead of the admin session

use crate::config::Config;
use crate::db::{DestinationRepository, InquiryRepository, PackageRepository, ReviewRepository, TourRepository};
use crate::errors::CmsError;
use crate::models::{
    ApiResponse, CreateInquiryRequest, DestinationResponse, InquiryResponse, ListQuery,
    PackageResponse, Pagination, ReviewResponse, TourResponse,
};
use crate::services::{DestinationService, PackageService};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// Helper function to verify the website API key
/// DOCUMENTATION: Checks the x-api-key header against WEBSITE_API_KEY
fn verify_website_key(req: &HttpRequest, config: &Config) -> Result<(), CmsError> {
    if config.website_api_key.is_empty() {
        log::warn!("Website API request rejected: WEBSITE_API_KEY not configured");
        return Err(CmsError::Forbidden);
    }

    let key = req
        .headers()
        .get("x-api-key")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            log::warn!("Website API request without key");
            CmsError::Unauthorized
        })?;

    if key != config.website_api_key {
        log::warn!("Website API request with invalid key");
        return Err(CmsError::Forbidden);
    }

    Ok(())
}

/// GET /api/website/destinations[?featured=true]
pub async fn list_destinations(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: HttpRequest,
    query: web::Query<ListQuery>,
) -> Result<impl Responder, CmsError> {
    verify_website_key(&req, &config)?;

    let (destinations, total) = DestinationRepository::list(pool.get_ref(), &query).await?;

    let data: Vec<DestinationResponse> = destinations.iter().map(|d| d.to_response()).collect();
    let pagination = Pagination::new(query.page(), query.limit(), total);

    Ok(HttpResponse::Ok().json(ApiResponse::ok_paginated(data, pagination)))
}

/// GET /api/website/destinations/{id}
pub async fn get_destination(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> Result<impl Responder, CmsError> {
    verify_website_key(&req, &config)?;

    let detail = DestinationService::get_detail(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(detail)))
}

/// GET /api/website/packages[?destination_id=...]
pub async fn list_packages(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: HttpRequest,
    query: web::Query<ListQuery>,
) -> Result<impl Responder, CmsError> {
    verify_website_key(&req, &config)?;

    let (packages, total) = PackageRepository::list(pool.get_ref(), &query).await?;

    let data: Vec<PackageResponse> = packages.iter().map(|p| p.to_response()).collect();
    let pagination = Pagination::new(query.page(), query.limit(), total);

    Ok(HttpResponse::Ok().json(ApiResponse::ok_paginated(data, pagination)))
}

/// GET /api/website/packages/{id}
pub async fn get_package(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> Result<impl Responder, CmsError> {
    verify_website_key(&req, &config)?;

    let detail = PackageService::get_detail(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(detail)))
}

/// GET /api/website/tours
pub async fn list_tours(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: HttpRequest,
    query: web::Query<ListQuery>,
) -> Result<impl Responder, CmsError> {
    verify_website_key(&req, &config)?;

    let (tours, total) = TourRepository::list(pool.get_ref(), &query).await?;

    let data: Vec<TourResponse> = tours.iter().map(|t| t.to_response()).collect();
    let pagination = Pagination::new(query.page(), query.limit(), total);

    Ok(HttpResponse::Ok().json(ApiResponse::ok_paginated(data, pagination)))
}

/// GET /api/website/reviews?package_id=...
/// Approved reviews only, regardless of the query string
pub async fn list_reviews(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: HttpRequest,
    query: web::Query<ListQuery>,
) -> Result<impl Responder, CmsError> {
    verify_website_key(&req, &config)?;

    let mut query = query.into_inner();
    query.approved = Some(true);

    let (reviews, total) = ReviewRepository::list(pool.get_ref(), &query).await?;

    let data: Vec<ReviewResponse> = reviews.iter().map(|r| r.to_response()).collect();
    let pagination = Pagination::new(query.page(), query.limit(), total);

    Ok(HttpResponse::Ok().json(ApiResponse::ok_paginated(data, pagination)))
}

/// POST /api/website/inquiries
/// The marketing site's contact form writes through the same gate
pub async fn create_inquiry(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: HttpRequest,
    body: web::Json<CreateInquiryRequest>,
) -> Result<impl Responder, CmsError> {
    verify_website_key(&req, &config)?;

    if let Err(e) = body.validate() {
        return Err(CmsError::ValidationError(e.to_string()));
    }

    let inquiry = InquiryRepository::create(pool.get_ref(), &body).await?;

    let data: InquiryResponse = inquiry.to_response();
    Ok(HttpResponse::Created().json(ApiResponse::ok(data)))
}

/// Configuration for the public website API
/// DOCUMENTATION: Mounted outside the session middleware; the key check
/// above is the only gate
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/website")
            .route("/destinations", web::get().to(list_destinations))
            .route("/destinations/{id}", web::get().to(get_destination))
            .route("/packages", web::get().to(list_packages))
            .route("/packages/{id}", web::get().to(get_package))
            .route("/tours", web::get().to(list_tours))
            .route("/reviews", web::get().to(list_reviews))
            .route("/inquiries", web::post().to(create_inquiry)),
    );
}
