//! Filter session
//!
//! A viewing session owns the current filter state and the list of
//! destinations it selects. Selector changes, text input and resets arrive as
//! [`FilterEvent`]s; every event re-runs the query over the catalog.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::catalog::Catalog;
use crate::error::DestinationsError;
use crate::filter::DestinationFilter;
use crate::models::Destination;

/// Selector entry meaning "no restriction"
pub const ALL: &str = "all";

/// Value picked in a region or interest selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The "All Regions" / "All Interests" entry
    All,
    Only(String),
}

impl Selection {
    /// Map a raw selector value; `"all"` and blank values clear the predicate
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(ALL) {
            Selection::All
        } else {
            Selection::Only(value.to_string())
        }
    }

    fn into_predicate(self) -> Option<String> {
        match self {
            Selection::All => None,
            Selection::Only(value) => Some(value),
        }
    }
}

/// Change of filter state coming from the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    RegionSelected(Selection),
    InterestSelected(Selection),
    /// Search box contents exactly as typed. Surrounding whitespace is kept
    /// and is part of the substring match; only an empty string clears it.
    SearchChanged(String),
    Reset,
}

impl FromStr for FilterEvent {
    type Err = DestinationsError;

    /// Parse `region <value>`, `interest <value>`, `search [text]` or `reset`.
    /// Selector values are trimmed; search text is everything after the
    /// single separator following `search`, untrimmed.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start().trim_end_matches(['\r', '\n']);
        let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let argument = rest.trim();

        match command.to_ascii_lowercase().as_str() {
            "region" | "interest" if argument.is_empty() => Err(DestinationsError::validation(
                format!("'{command}' needs a value, or '{ALL}' to clear it"),
            )),
            "region" => Ok(FilterEvent::RegionSelected(Selection::from_value(argument))),
            "interest" => Ok(FilterEvent::InterestSelected(Selection::from_value(argument))),
            "search" => Ok(FilterEvent::SearchChanged(rest.to_string())),
            "reset" if argument.is_empty() => Ok(FilterEvent::Reset),
            "reset" => Err(DestinationsError::validation("'reset' takes no value")),
            "" => Err(DestinationsError::validation("empty command")),
            other => Err(DestinationsError::validation(format!(
                "unknown command '{other}', expected region, interest, search or reset"
            ))),
        }
    }
}

impl fmt::Display for FilterEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterEvent::RegionSelected(Selection::All) => write!(f, "region {ALL}"),
            FilterEvent::RegionSelected(Selection::Only(v)) => write!(f, "region {v}"),
            FilterEvent::InterestSelected(Selection::All) => write!(f, "interest {ALL}"),
            FilterEvent::InterestSelected(Selection::Only(v)) => write!(f, "interest {v}"),
            FilterEvent::SearchChanged(text) => write!(f, "search {text}"),
            FilterEvent::Reset => write!(f, "reset"),
        }
    }
}

/// Filter state and current results for one viewer
#[derive(Debug)]
pub struct FilterSession<'a> {
    catalog: &'a Catalog,
    filter: DestinationFilter,
    results: Vec<&'a Destination>,
}

impl<'a> FilterSession<'a> {
    /// Start a session showing the whole catalog
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            filter: DestinationFilter::default(),
            results: catalog.destinations().iter().collect(),
        }
    }

    /// Start a session with an initial filter already applied
    #[must_use]
    pub fn with_filter(catalog: &'a Catalog, filter: DestinationFilter) -> Self {
        let results = catalog.query(&filter);
        Self {
            catalog,
            filter,
            results,
        }
    }

    #[must_use]
    pub fn filter(&self) -> &DestinationFilter {
        &self.filter
    }

    #[must_use]
    pub fn results(&self) -> &[&'a Destination] {
        &self.results
    }

    /// Region values for the region selector
    #[must_use]
    pub fn region_options(&self) -> &'a [String] {
        self.catalog.regions()
    }

    /// Interest values for the interest selector
    #[must_use]
    pub fn interest_options(&self) -> &'a [String] {
        self.catalog.interests()
    }

    /// Apply one event and return the refreshed results
    pub fn apply(&mut self, event: FilterEvent) -> &[&'a Destination] {
        debug!("Applying filter event: {event}");
        match event {
            FilterEvent::RegionSelected(selection) => {
                self.filter.region = selection.into_predicate();
            }
            FilterEvent::InterestSelected(selection) => {
                self.filter.interest = selection.into_predicate();
            }
            FilterEvent::SearchChanged(text) => {
                self.filter.search = Some(text).filter(|t| !t.is_empty());
            }
            FilterEvent::Reset => return self.reset(),
        }
        self.results = self.catalog.query(&self.filter);
        &self.results
    }

    /// Clear every predicate and show the full catalog again
    pub fn reset(&mut self) -> &[&'a Destination] {
        self.filter = DestinationFilter::default();
        self.results = self.catalog.destinations().iter().collect();
        &self.results
    }
}
