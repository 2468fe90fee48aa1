// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export database components

pub mod city_repository;
pub mod destination_repository;
pub mod hotel_image_repository;
pub mod hotel_repository;
pub mod inquiry_repository;
pub mod itinerary_repository;
pub mod package_repository;
pub mod review_repository;
pub mod snippet_repository;
pub mod stats;
pub mod tour_repository;

pub use city_repository::*;
pub use destination_repository::*;
pub use hotel_image_repository::*;
pub use hotel_repository::*;
pub use inquiry_repository::*;
pub use itinerary_repository::*;
pub use package_repository::*;
pub use review_repository::*;
pub use snippet_repository::*;
pub use stats::*;
pub use tour_repository::*;
