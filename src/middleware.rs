// src/middleware.rs
// DOCUMENTATION: Session authentication middleware
// PURPOSE: Single gate in front of the admin pages and the admin API;
// browser traffic is redirected to /login, API traffic gets the 401 envelope

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_session::SessionExt;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::{Error, HttpResponse};
use futures::future::LocalBoxFuture;
use serde_json::json;

/// Session key holding the logged-in admin's email
pub const SESSION_USER_KEY: &str = "admin_email";

/// Middleware factory protecting a scope with the cookie session
pub struct RequireAuth;

impl<S, B> Transform<S, ServiceRequest> for RequireAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RequireAuthMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        let authenticated = req
            .get_session()
            .get::<String>(SESSION_USER_KEY)
            .ok()
            .flatten()
            .is_some();

        Box::pin(async move {
            if authenticated {
                let res = service.call(req).await?;
                return Ok(res.map_into_left_body());
            }

            let path = req.path().to_string();
            log::debug!("Unauthenticated request to {}", path);

            let response = if is_api_path(&path) {
                HttpResponse::Unauthorized().json(json!({
                    "success": false,
                    "error": "Unauthorized access",
                }))
            } else {
                HttpResponse::Found()
                    .insert_header((header::LOCATION, "/login"))
                    .finish()
            };

            let (request, _) = req.into_parts();
            Ok(ServiceResponse::new(request, response).map_into_right_body())
        })
    }
}

/// API requests get a JSON 401; everything else is browser traffic
fn is_api_path(path: &str) -> bool {
    path.starts_with("/api")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_api_path() {
        assert!(is_api_path("/api/destinations"));
        assert!(is_api_path("/api/auth/ai-generate/cities"));
        assert!(!is_api_path("/admin/destinations"));
        assert!(!is_api_path("/login"));
        assert!(!is_api_path("/"));
    }
}
