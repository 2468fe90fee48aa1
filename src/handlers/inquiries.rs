// src/handlers/inquiries.rs
// DOCUMENTATION: HTTP handlers for inquiry management

use crate::db::InquiryRepository;
use crate::errors::CmsError;
use crate::models::{
    ApiResponse, CreateInquiryRequest, InquiryResponse, ListQuery, Pagination,
    UpdateInquiryRequest,
};
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// GET /api/inquiries
/// List inquiries with name/email search, package and status filters
pub async fn list_inquiries(
    pool: web::Data<PgPool>,
    query: web::Query<ListQuery>,
) -> Result<impl Responder, CmsError> {
    let (inquiries, total) = InquiryRepository::list(pool.get_ref(), &query).await?;

    let data: Vec<InquiryResponse> = inquiries.iter().map(|i| i.to_response()).collect();
    let pagination = Pagination::new(query.page(), query.limit(), total);

    Ok(HttpResponse::Ok().json(ApiResponse::ok_paginated(data, pagination)))
}

/// POST /api/inquiries
/// Create an inquiry; status always starts as new
pub async fn create_inquiry(
    pool: web::Data<PgPool>,
    req: web::Json<CreateInquiryRequest>,
) -> Result<impl Responder, CmsError> {
    if let Err(e) = req.validate() {
        return Err(CmsError::ValidationError(e.to_string()));
    }

    let inquiry = InquiryRepository::create(pool.get_ref(), &req).await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok(inquiry.to_response())))
}

/// GET /api/inquiries/{id}
pub async fn get_inquiry(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, CmsError> {
    let inquiry = InquiryRepository::get_by_id(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(inquiry.to_response())))
}

/// PUT /api/inquiries/{id}
/// Update contact details or move the inquiry through its status workflow
pub async fn update_inquiry(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    req: web::Json<UpdateInquiryRequest>,
) -> Result<impl Responder, CmsError> {
    let inquiry = InquiryRepository::update(pool.get_ref(), path.into_inner(), &req).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(inquiry.to_response())))
}

/// DELETE /api/inquiries/{id}
pub async fn delete_inquiry(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, CmsError> {
    InquiryRepository::delete(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok_empty()))
}

/// Configuration for inquiry routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/inquiries")
            .route("", web::get().to(list_inquiries))
            .route("", web::post().to(create_inquiry))
            .route("/{id}", web::get().to(get_inquiry))
            .route("/{id}", web::put().to(update_inquiry))
            .route("/{id}", web::delete().to(delete_inquiry)),
    );
}
