//! Destination record shown in the catalog

use serde::{Deserialize, Serialize};

use super::Itinerary;

/// A single athletic travel destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    /// Unique identifier within the catalog
    pub id: u32,
    /// Display name, e.g. "Boulder, Colorado"
    pub name: String,
    /// Region, e.g. "North America"
    pub region: String,
    /// Interest tags, never empty
    pub interests: Vec<String>,
    /// Free text searched by the text filter
    pub description: String,
    /// Travel tips for visiting athletes
    pub tips: Vec<String>,
    /// Sample five-day itinerary
    pub itinerary: Itinerary,
}

impl Destination {
    /// Whether the destination carries the given interest tag (exact match)
    #[must_use]
    pub fn has_interest(&self, interest: &str) -> bool {
        self.interests.iter().any(|tag| tag == interest)
    }

    /// Whether the lowercased name or description contains `needle`.
    /// `needle` must already be lowercase.
    #[must_use]
    pub fn mentions(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.description.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Destination {
        Destination {
            id: 42,
            name: "Font-Romeu, France".to_string(),
            region: "Europe".to_string(),
            interests: vec!["Running".to_string(), "Altitude Training".to_string()],
            description: "Pyrenean plateau used by Olympic squads.".to_string(),
            tips: vec![],
            itinerary: Itinerary::new(["a", "b", "c", "d", "e"]),
        }
    }

    #[test]
    fn test_has_interest_is_exact() {
        let destination = sample();
        assert!(destination.has_interest("Running"));
        assert!(!destination.has_interest("running"));
        assert!(!destination.has_interest("Run"));
    }

    #[test]
    fn test_mentions_checks_name_and_description() {
        let destination = sample();
        assert!(destination.mentions("font-romeu"));
        assert!(destination.mentions("olympic"));
        assert!(!destination.mentions("kenya"));
    }
}
