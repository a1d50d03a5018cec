//! Destination filtering
//!
//! A [`DestinationFilter`] carries up to three predicates: region equality,
//! interest membership and a case-insensitive text search over name and
//! description. Active predicates are combined with a logical AND, and the
//! result keeps the catalog order.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::Destination;

/// Active filter predicates. `None` and empty strings are both "unset".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationFilter {
    /// Exact, case-sensitive region match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Exact, case-sensitive interest tag membership
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest: Option<String>,
    /// Case-insensitive substring of name or description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl DestinationFilter {
    /// Filter with every predicate unset
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    #[must_use]
    pub fn with_interest(mut self, interest: impl Into<String>) -> Self {
        self.interest = Some(interest.into());
        self
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// True when no predicate narrows the catalog
    #[must_use]
    pub fn is_empty(&self) -> bool {
        active(self.region.as_deref()).is_none()
            && active(self.interest.as_deref()).is_none()
            && active(self.search.as_deref()).is_none()
    }

    /// Whether `destination` satisfies every active predicate
    #[must_use]
    pub fn matches(&self, destination: &Destination) -> bool {
        let needle = active(self.search.as_deref()).map(str::to_lowercase);
        self.matches_with(destination, needle.as_deref())
    }

    fn matches_with(&self, destination: &Destination, needle: Option<&str>) -> bool {
        if let Some(region) = active(self.region.as_deref()) {
            if destination.region != region {
                return false;
            }
        }
        if let Some(interest) = active(self.interest.as_deref()) {
            if !destination.has_interest(interest) {
                return false;
            }
        }
        needle.is_none_or(|needle| destination.mentions(needle))
    }
}

fn active(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Destinations from `catalog` matching every active predicate of `filter`,
/// in catalog order. An empty result means "no matches", not an error.
#[must_use]
pub fn query<'a>(catalog: &'a [Destination], filter: &DestinationFilter) -> Vec<&'a Destination> {
    let needle = active(filter.search.as_deref()).map(str::to_lowercase);
    let results: Vec<&Destination> = catalog
        .iter()
        .filter(|destination| filter.matches_with(destination, needle.as_deref()))
        .collect();

    debug!(
        region = ?filter.region,
        interest = ?filter.interest,
        search = ?filter.search,
        "Filter matched {} of {} destinations",
        results.len(),
        catalog.len()
    );

    results
}
