// src/handlers/auth.rs
// DOCUMENTATION: Session login and logout for the admin surface
// PURPOSE: GET/POST /login and POST /logout; the identity lives in a
// signed cookie session read back by the auth middleware

use crate::config::Config;
use crate::errors::CmsError;
use crate::middleware::SESSION_USER_KEY;
use actix_session::Session;
use actix_web::http::header::{self, ContentType};
use actix_web::{web, HttpResponse};
use askama::Template;
use serde::Deserialize;

/// Login page template
#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage {
    pub error: Option<String>,
}

/// Credentials posted by the login form
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// GET /login
/// Render the login form; signed-in admins go straight to the dashboard
pub async fn login_page(session: Session) -> Result<HttpResponse, actix_web::Error> {
    if session.get::<String>(SESSION_USER_KEY)?.is_some() {
        return Ok(redirect("/admin"));
    }

    let page = LoginPage { error: None };
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page.render().map_err(CmsError::from)?))
}

/// POST /login
/// Check the credentials and open a session
pub async fn login_submit(
    config: web::Data<Config>,
    session: Session,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, actix_web::Error> {
    let email = form.email.trim();

    if email.eq_ignore_ascii_case(&config.admin_email) && form.password == config.admin_password {
        session.renew();
        session.insert(SESSION_USER_KEY, email.to_string())?;
        log::info!("Admin login: {}", email);
        return Ok(redirect("/admin"));
    }

    log::warn!("Failed admin login attempt for: {}", email);

    let page = LoginPage {
        error: Some("Invalid email or password".to_string()),
    };
    Ok(HttpResponse::Unauthorized()
        .content_type(ContentType::html())
        .body(page.render().map_err(CmsError::from)?))
}

/// POST /logout
/// Purge the session and return to the login form
pub async fn logout(session: Session) -> HttpResponse {
    session.purge();
    log::info!("Admin logged out");
    redirect("/login")
}

/// Configuration for authentication routes
/// DOCUMENTATION: Mounted outside the auth middleware so the login form
/// itself is reachable
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/login", web::get().to(login_page))
        .route("/login", web::post().to(login_submit))
        .route("/logout", web::post().to(logout));
}
