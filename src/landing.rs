//! Landing page content: pitch, highlights and featured destinations

use serde::Serialize;
use tracing::warn;

use crate::catalog::Catalog;
use crate::models::Destination;

pub const SITE_NAME: &str = "AthleticDestinations";
pub const HEADLINE: &str = "Travel Destinations for Athletes";
pub const INTRO: &str = "Discover the perfect destinations for your athletic adventures. \
From mountain trails to coastal routes, we have curated the best locations for every sport.";

/// One "Why Choose Us" item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub title: &'static str,
    pub body: &'static str,
}

pub const HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        title: "Athletic-Focused",
        body: "All our destinations are selected with athletes in mind, featuring training facilities and routes.",
    },
    Highlight {
        title: "Detailed Itineraries",
        body: "Our sample itineraries include training schedules and recovery options.",
    },
    Highlight {
        title: "Expert Advice",
        body: "Travel tips from professional athletes and sports nutritionists.",
    },
];

/// (destination id, tagline) pairs shown on the landing page
const FEATURED: [(u32, &str); 3] = [
    (1, "Perfect for trail runners and cyclists"),
    (2, "Cycling paradise with scenic coastal routes"),
    (3, "Triathlon training with year-round warm weather"),
];

/// A featured destination card
#[derive(Debug, Clone, Serialize)]
pub struct FeaturedDestination<'a> {
    pub destination: &'a Destination,
    pub tagline: &'static str,
}

/// Everything the landing page displays
#[derive(Debug, Clone, Serialize)]
pub struct LandingPage<'a> {
    pub site_name: &'static str,
    pub headline: &'static str,
    pub intro: &'static str,
    pub highlights: &'static [Highlight],
    pub featured: Vec<FeaturedDestination<'a>>,
}

impl<'a> LandingPage<'a> {
    /// Assemble the landing page, resolving featured entries against `catalog`.
    /// Featured ids missing from the catalog are skipped.
    #[must_use]
    pub fn build(catalog: &'a Catalog) -> Self {
        let featured = FEATURED
            .iter()
            .filter_map(|&(id, tagline)| match catalog.get(id) {
                Some(destination) => Some(FeaturedDestination {
                    destination,
                    tagline,
                }),
                None => {
                    warn!("Featured destination {} is not in the catalog", id);
                    None
                }
            })
            .collect();

        Self {
            site_name: SITE_NAME,
            headline: HEADLINE,
            intro: INTRO,
            highlights: &HIGHLIGHTS,
            featured,
        }
    }
}
