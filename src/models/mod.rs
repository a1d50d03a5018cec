//! Data models for the destinations catalog
//!
//! - Destination: the catalog record
//! - Itinerary: the five-day sample plan attached to each destination

pub mod destination;
pub mod itinerary;

// Re-export all public types for convenient access
pub use destination::Destination;
pub use itinerary::{DayKey, Itinerary};
