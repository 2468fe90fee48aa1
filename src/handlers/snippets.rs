// src/handlers/snippets.rs
// DOCUMENTATION: HTTP handlers for the three snippet collections
// PURPOSE: /api/inclusions, /api/exclusions and /api/highlights share
// these handlers; the first path segment picks the kind

use crate::db::SnippetRepository;
use crate::errors::CmsError;
use crate::models::{
    ApiResponse, CreateSnippetRequest, ListQuery, Pagination, SnippetKind, UpdateSnippetRequest,
};
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// GET /api/{inclusions|exclusions|highlights}
pub async fn list_snippets(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
    query: web::Query<ListQuery>,
) -> Result<impl Responder, CmsError> {
    let kind = SnippetKind::from_path_slug(&path.into_inner())?;
    let (snippets, total) = SnippetRepository::list(pool.get_ref(), kind, &query).await?;

    let pagination = Pagination::new(query.page(), query.limit(), total);
    Ok(HttpResponse::Ok().json(ApiResponse::ok_paginated(snippets, pagination)))
}

/// POST /api/{inclusions|exclusions|highlights}
pub async fn create_snippet(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
    req: web::Json<CreateSnippetRequest>,
) -> Result<impl Responder, CmsError> {
    let kind = SnippetKind::from_path_slug(&path.into_inner())?;

    if let Err(e) = req.validate() {
        return Err(CmsError::ValidationError(e.to_string()));
    }

    let snippet = SnippetRepository::create(pool.get_ref(), kind, &req).await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok(snippet)))
}

/// GET /api/{inclusions|exclusions|highlights}/{id}
pub async fn get_snippet(
    pool: web::Data<PgPool>,
    path: web::Path<(String, Uuid)>,
) -> Result<impl Responder, CmsError> {
    let (slug, id) = path.into_inner();
    let kind = SnippetKind::from_path_slug(&slug)?;

    let snippet = SnippetRepository::get_by_id(pool.get_ref(), kind, id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(snippet)))
}

/// PUT /api/{inclusions|exclusions|highlights}/{id}
pub async fn update_snippet(
    pool: web::Data<PgPool>,
    path: web::Path<(String, Uuid)>,
    req: web::Json<UpdateSnippetRequest>,
) -> Result<impl Responder, CmsError> {
    let (slug, id) = path.into_inner();
    let kind = SnippetKind::from_path_slug(&slug)?;

    let snippet = SnippetRepository::update(pool.get_ref(), kind, id, &req).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(snippet)))
}

/// DELETE /api/{inclusions|exclusions|highlights}/{id}
pub async fn delete_snippet(
    pool: web::Data<PgPool>,
    path: web::Path<(String, Uuid)>,
) -> Result<impl Responder, CmsError> {
    let (slug, id) = path.into_inner();
    let kind = SnippetKind::from_path_slug(&slug)?;

    SnippetRepository::delete(pool.get_ref(), kind, id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok_empty()))
}

/// Configuration for the snippet collections
/// DOCUMENTATION: The regex segment only matches the three collection
/// names, so /api/destinations and friends are unaffected
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/{kind:inclusions|exclusions|highlights}")
            .route("", web::get().to(list_snippets))
            .route("", web::post().to(create_snippet))
            .route("/{id}", web::get().to(get_snippet))
            .route("/{id}", web::put().to(update_snippet))
            .route("/{id}", web::delete().to(delete_snippet)),
    );
}
