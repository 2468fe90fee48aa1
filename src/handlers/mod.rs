// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components and assemble the route tree

use actix_web::web;

use crate::middleware::RequireAuth;

pub mod ai;
pub mod auth;
pub mod cities;
pub mod destinations;
pub mod health;
pub mod hotels;
pub mod inquiries;
pub mod itineraries;
pub mod packages;
pub mod pages;
pub mod reviews;
pub mod snippets;
pub mod tours;
pub mod website;

pub use auth::config as auth_config;
pub use health::config as health_config;
pub use website::config as website_config;

/// Admin REST surface under /api, session-protected
/// DOCUMENTATION: /api/website is mounted separately (website_config) so
/// the key-gated public routes bypass the session middleware. The snippet
/// collections are registered last; their path segment is a regex that
/// only matches the three collection names
pub fn api_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .wrap(RequireAuth)
            .configure(destinations::config)
            .configure(cities::config)
            .configure(hotels::config)
            .configure(hotels::images_config)
            .configure(packages::config)
            .configure(itineraries::config)
            .configure(tours::config)
            .configure(reviews::config)
            .configure(inquiries::config)
            .configure(ai::config)
            .configure(snippets::config),
    );
}

/// Server-rendered admin pages, session-protected
pub fn pages_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(pages::root_redirect)).service(
        web::scope("/admin")
            .wrap(RequireAuth)
            .configure(pages::routes),
    );
}
