// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod ai_service;
pub mod destination_service;
pub mod hotel_service;
pub mod image_search_client;
pub mod package_service;
pub mod rate_limiter;
pub mod textgen_client;

pub use ai_service::AiService;
pub use destination_service::DestinationService;
pub use hotel_service::HotelService;
pub use image_search_client::ImageSearchClient;
pub use package_service::PackageService;
pub use rate_limiter::{start_cleanup_task, AiRateLimiter};
pub use textgen_client::TextGenClient;
