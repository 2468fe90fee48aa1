// src/handlers/ai.rs
// DOCUMENTATION: HTTP handlers for AI content drafting and image search
// PURPOSE: POST /api/auth/ai-generate/{cities|highlights|packages} and
// GET /api/auth/image-search

use crate::errors::CmsError;
use crate::models::{AiGenerateRequest, ApiResponse, ImageSearchQuery};
use crate::services::{AiRateLimiter, AiService, ImageSearchClient, TextGenClient};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use validator::Validate;

/// Client key used for rate limiting
/// DOCUMENTATION: Prefers the address reported by proxy headers so limits
/// follow the real client behind a reverse proxy
fn client_ip(req: &HttpRequest) -> String {
    req.connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string()
}

/// POST /api/auth/ai-generate/cities
/// Draft cities for a destination
pub async fn generate_cities(
    http_req: HttpRequest,
    limiter: web::Data<AiRateLimiter>,
    client: web::Data<TextGenClient>,
    req: web::Json<AiGenerateRequest>,
) -> Result<impl Responder, CmsError> {
    limiter.check(&client_ip(&http_req))?;

    if let Err(e) = req.validate() {
        return Err(CmsError::ValidationError(e.to_string()));
    }

    let cities = AiService::generate_cities(client.get_ref(), &req.destination_name).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(cities)))
}

/// POST /api/auth/ai-generate/highlights
/// Draft highlight snippets for a destination
pub async fn generate_highlights(
    http_req: HttpRequest,
    limiter: web::Data<AiRateLimiter>,
    client: web::Data<TextGenClient>,
    req: web::Json<AiGenerateRequest>,
) -> Result<impl Responder, CmsError> {
    limiter.check(&client_ip(&http_req))?;

    if let Err(e) = req.validate() {
        return Err(CmsError::ValidationError(e.to_string()));
    }

    let highlights =
        AiService::generate_highlights(client.get_ref(), &req.destination_name).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(highlights)))
}

/// POST /api/auth/ai-generate/packages
/// Draft packages for a destination
pub async fn generate_packages(
    http_req: HttpRequest,
    limiter: web::Data<AiRateLimiter>,
    client: web::Data<TextGenClient>,
    req: web::Json<AiGenerateRequest>,
) -> Result<impl Responder, CmsError> {
    limiter.check(&client_ip(&http_req))?;

    if let Err(e) = req.validate() {
        return Err(CmsError::ValidationError(e.to_string()));
    }

    let packages = AiService::generate_packages(client.get_ref(), &req.destination_name).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(packages)))
}

/// GET /api/auth/image-search?query=...&per_page=...
/// Proxy a stock-photo search for the admin image picker
pub async fn image_search(
    client: web::Data<ImageSearchClient>,
    query: web::Query<ImageSearchQuery>,
) -> Result<impl Responder, CmsError> {
    if let Err(e) = query.validate() {
        return Err(CmsError::ValidationError(e.to_string()));
    }

    let results = client.search(&query.query, query.per_page).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(results)))
}

/// Configuration for AI routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/ai-generate/cities", web::post().to(generate_cities))
            .route("/ai-generate/highlights", web::post().to(generate_highlights))
            .route("/ai-generate/packages", web::post().to(generate_packages))
            .route("/image-search", web::get().to(image_search)),
    );
}
