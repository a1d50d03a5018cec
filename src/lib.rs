//! `AthleticDestinations` - curated travel destinations for athletes
//!
//! This library holds the read-only destination catalog, the region,
//! interest and text filters over it, and the session that tracks a
//! viewer's filter state.

pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod landing;
pub mod logging;
pub mod models;
pub mod present;
pub mod session;

// Re-export core types for public API
pub use crate::catalog::{Catalog, distinct_interests, distinct_regions};
pub use crate::config::DestinationsConfig;
pub use crate::error::DestinationsError;
pub use crate::filter::{DestinationFilter, query};
pub use crate::landing::LandingPage;
pub use crate::models::{DayKey, Destination, Itinerary};
pub use crate::present::{OutputFormat, Renderer};
pub use crate::session::{FilterEvent, FilterSession, Selection};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, DestinationsError>;
