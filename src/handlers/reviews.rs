// src/handlers/reviews.rs
// DOCUMENTATION: HTTP handlers for review moderation

use crate::db::ReviewRepository;
use crate::errors::CmsError;
use crate::models::{
    ApiResponse, CreateReviewRequest, ListQuery, Pagination, ReviewResponse, UpdateReviewRequest,
};
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// GET /api/reviews
/// List reviews with author search, package and approval filters
pub async fn list_reviews(
    pool: web::Data<PgPool>,
    query: web::Query<ListQuery>,
) -> Result<impl Responder, CmsError> {
    let (reviews, total) = ReviewRepository::list(pool.get_ref(), &query).await?;

    let data: Vec<ReviewResponse> = reviews.iter().map(|r| r.to_response()).collect();
    let pagination = Pagination::new(query.page(), query.limit(), total);

    Ok(HttpResponse::Ok().json(ApiResponse::ok_paginated(data, pagination)))
}

/// POST /api/reviews
pub async fn create_review(
    pool: web::Data<PgPool>,
    req: web::Json<CreateReviewRequest>,
) -> Result<impl Responder, CmsError> {
    if let Err(e) = req.validate() {
        return Err(CmsError::ValidationError(e.to_string()));
    }

    let review = ReviewRepository::create(pool.get_ref(), &req).await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok(review.to_response())))
}

/// GET /api/reviews/{id}
pub async fn get_review(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, CmsError> {
    let review = ReviewRepository::get_by_id(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(review.to_response())))
}

/// PUT /api/reviews/{id}
/// Update a review; toggling is_approved controls website visibility
pub async fn update_review(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    req: web::Json<UpdateReviewRequest>,
) -> Result<impl Responder, CmsError> {
    let review = ReviewRepository::update(pool.get_ref(), path.into_inner(), &req).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(review.to_response())))
}

/// DELETE /api/reviews/{id}
pub async fn delete_review(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, CmsError> {
    ReviewRepository::delete(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok_empty()))
}

/// Configuration for review routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/reviews")
            .route("", web::get().to(list_reviews))
            .route("", web::post().to(create_review))
            .route("/{id}", web::get().to(get_review))
            .route("/{id}", web::put().to(update_review))
            .route("/{id}", web::delete().to(delete_review)),
    );
}
