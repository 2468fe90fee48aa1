// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod ai;
pub mod city;
pub mod common;
pub mod destination;
pub mod hotel;
pub mod inquiry;
pub mod itinerary;
pub mod package;
pub mod review;
pub mod snippet;
pub mod tour;

pub use ai::*;
pub use city::*;
pub use common::*;
pub use destination::*;
pub use hotel::*;
pub use inquiry::*;
pub use itinerary::*;
pub use package::*;
pub use review::*;
pub use snippet::*;
pub use tour::*;
