// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, database, and start HTTP server

mod config;
mod db;
mod errors;
mod handlers;
mod middleware;
mod models;
mod services;

use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::{middleware::Logger, web, App, HttpServer};
use config::Config;
use dotenv::dotenv;
use services::{start_cleanup_task, AiRateLimiter, ImageSearchClient, TextGenClient};
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();
    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    }

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        // Use configured log level or default
        let log_level = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info,actix_web=info,sqlx=warn"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    log::info!("Starting meridian-cms backend...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Initialize database connection pool
    let pool = match config::init_db_pool(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    // 5. Initialize external API clients and the AI rate limiter
    let textgen = web::Data::new(TextGenClient::new(
        config.textgen_api_key.clone(),
        config.textgen_model.clone(),
    ));
    let image_search = web::Data::new(ImageSearchClient::new(config.image_search_api_key.clone()));

    let limiter = web::Data::new(AiRateLimiter::new(config.ai_rate_limit_per_minute));
    log::info!(
        "AI rate limiter: {} requests/minute per client",
        config.ai_rate_limit_per_minute
    );

    // Start background cleanup task (runs every 5 minutes)
    start_cleanup_task(limiter.clone().into_inner(), 300);
    log::info!("Started rate limiter cleanup task (interval: 5 minutes)");

    // 6. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    let session_key = config.session_key();
    let cookie_secure = config.environment == "production";
    let config_clone = config.clone();

    HttpServer::new(move || {
        App::new()
            // Application state (database pool, config, clients, limiter)
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(config_clone.clone()))
            .app_data(textgen.clone())
            .app_data(image_search.clone())
            .app_data(limiter.clone())
            // Middleware
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), session_key.clone())
                    .cookie_secure(cookie_secure)
                    .build(),
            )
            // Routes: health and login are open; /api/website carries its
            // own key gate; /api and /admin sit behind the session check
            .configure(handlers::health_config)
            .configure(handlers::auth_config)
            .configure(handlers::website_config)
            .configure(handlers::api_config)
            .configure(handlers::pages_config)
    })
    .bind(&server_addr)?
    .run()
    .await
}
