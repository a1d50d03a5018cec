//! Destination catalog
//!
//! The catalog is a read-only collection of destinations fixed at process
//! start. The region and interest lists used to populate the selectors are
//! derived once when the catalog is built and cached alongside it.

pub mod seed;

use std::collections::HashSet;
use std::sync::LazyLock;

use tracing::info;

use crate::error::DestinationsError;
use crate::filter::{DestinationFilter, query};
use crate::models::Destination;

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::new(seed::destinations()).expect("built-in destination dataset is valid")
});

/// Read-only destination catalog with cached selector values
#[derive(Debug, Clone)]
pub struct Catalog {
    destinations: Vec<Destination>,
    regions: Vec<String>,
    interests: Vec<String>,
}

impl Catalog {
    /// Build a catalog, checking that ids are unique and every destination
    /// has a name, a region and at least one interest.
    pub fn new(destinations: Vec<Destination>) -> crate::Result<Self> {
        let mut seen_ids = HashSet::new();
        for destination in &destinations {
            if !seen_ids.insert(destination.id) {
                return Err(DestinationsError::catalog(format!(
                    "duplicate destination id {}",
                    destination.id
                )));
            }
            if destination.name.trim().is_empty() {
                return Err(DestinationsError::catalog(format!(
                    "destination {} has no name",
                    destination.id
                )));
            }
            if destination.region.trim().is_empty() {
                return Err(DestinationsError::catalog(format!(
                    "destination '{}' has no region",
                    destination.name
                )));
            }
            if destination.interests.is_empty() {
                return Err(DestinationsError::catalog(format!(
                    "destination '{}' has no interests",
                    destination.name
                )));
            }
        }

        let regions = distinct_regions(&destinations);
        let interests = distinct_interests(&destinations);

        info!(
            "Loaded {} destinations across {} regions and {} interests",
            destinations.len(),
            regions.len(),
            interests.len()
        );

        Ok(Self {
            destinations,
            regions,
            interests,
        })
    }

    /// The built-in catalog shared by the whole process
    ///
    /// # Panics
    /// Panics on first use if the embedded dataset breaks a catalog invariant.
    #[must_use]
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// All destinations in catalog order
    #[must_use]
    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    /// Unique regions, in order of first appearance
    #[must_use]
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Unique interest tags, in order of first appearance
    #[must_use]
    pub fn interests(&self) -> &[String] {
        &self.interests
    }

    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Destinations matching every active predicate of `filter`
    #[must_use]
    pub fn query(&self, filter: &DestinationFilter) -> Vec<&Destination> {
        query(&self.destinations, filter)
    }
}

/// Every region present in `destinations`, first appearance wins the order
#[must_use]
pub fn distinct_regions(destinations: &[Destination]) -> Vec<String> {
    let mut seen = HashSet::new();
    destinations
        .iter()
        .filter(|d| seen.insert(d.region.as_str()))
        .map(|d| d.region.clone())
        .collect()
}

/// Every interest tag present in `destinations`, first appearance wins the order
#[must_use]
pub fn distinct_interests(destinations: &[Destination]) -> Vec<String> {
    let mut seen = HashSet::new();
    destinations
        .iter()
        .flat_map(|d| d.interests.iter())
        .filter(|tag| seen.insert(tag.as_str()))
        .cloned()
        .collect()
}
