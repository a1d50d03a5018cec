//! Terminal rendering of landing page and destination cards

use std::fmt::{self, Write as _};

use serde::{Deserialize, Serialize};

use crate::config::DisplayConfig;
use crate::error::DestinationsError;
use crate::landing::LandingPage;
use crate::models::Destination;

pub const NO_RESULTS_TITLE: &str = "No destinations found";
pub const NO_RESULTS_HINT: &str = "Try adjusting your filters to see more results";

/// Output format for rendered views
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Renders views in the configured format
#[derive(Debug, Clone)]
pub struct Renderer {
    format: OutputFormat,
    display: DisplayConfig,
}

#[derive(Serialize)]
struct ResultsView<'a> {
    count: usize,
    destinations: &'a [&'a Destination],
}

#[derive(Serialize)]
struct RejectionView {
    error: String,
}

impl Renderer {
    #[must_use]
    pub fn new(format: OutputFormat, display: DisplayConfig) -> Self {
        Self { format, display }
    }

    /// Filtered destination list, or the empty-state message
    pub fn results(&self, destinations: &[&Destination]) -> crate::Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&ResultsView {
                count: destinations.len(),
                destinations,
            })?),
            OutputFormat::Text if destinations.is_empty() => {
                Ok(format!("{NO_RESULTS_TITLE}\n{NO_RESULTS_HINT}\n"))
            }
            OutputFormat::Text => {
                let cards = destinations
                    .iter()
                    .map(|d| self.card(d))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(cards.join("\n"))
            }
        }
    }

    /// A single destination
    pub fn destination(&self, destination: &Destination) -> crate::Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(destination)?),
            OutputFormat::Text => Ok(self.card(destination)?),
        }
    }

    /// A rejected input, as `{"error": ...}` in JSON mode
    pub fn rejection(&self, err: &DestinationsError) -> crate::Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&RejectionView {
                error: err.user_message(),
            })?),
            OutputFormat::Text => Ok(err.user_message()),
        }
    }

    /// Selector values, one per line in text mode
    pub fn options(&self, label: &str, values: &[String]) -> crate::Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(values)?),
            OutputFormat::Text => {
                let lines: String = values.iter().map(|value| format!("  {value}\n")).collect();
                Ok(format!("{label}:\n{lines}"))
            }
        }
    }

    pub fn landing(&self, page: &LandingPage<'_>) -> crate::Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(page)?),
            OutputFormat::Text => Ok(landing_text(page)?),
        }
    }

    fn card(&self, destination: &Destination) -> Result<String, fmt::Error> {
        let mut out = String::new();
        writeln!(out, "[{}] {}", destination.id, destination.name)?;
        writeln!(out, "    Region: {}", destination.region)?;
        writeln!(out, "    Interests: {}", destination.interests.join(" | "))?;
        writeln!(out, "    {}", destination.description)?;

        if self.display.show_tips && !destination.tips.is_empty() {
            writeln!(out, "    Travel Tips:")?;
            let limit = usize::try_from(self.display.max_tips).unwrap_or(usize::MAX);
            for tip in destination.tips.iter().take(limit) {
                writeln!(out, "      - {tip}")?;
            }
        }

        if self.display.show_itinerary {
            writeln!(out, "    Sample Itinerary:")?;
            for (day, plan) in destination.itinerary.days() {
                writeln!(out, "      Day {}: {plan}", day.number())?;
            }
        }
        Ok(out)
    }
}

fn landing_text(page: &LandingPage<'_>) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{}\n", page.site_name)?;
    writeln!(out, "{}", page.headline)?;
    writeln!(out, "{}\n", page.intro)?;
    writeln!(out, "Why Choose Us")?;
    for highlight in page.highlights {
        writeln!(out, "  * {}: {}", highlight.title, highlight.body)?;
    }
    writeln!(out, "\nFeatured Destinations")?;
    for featured in &page.featured {
        writeln!(
            out,
            "  [{}] {} - {}",
            featured.destination.id, featured.destination.name, featured.tagline
        )?;
    }
    writeln!(out, "\nRun 'list' to explore all destinations.")?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn text() -> Renderer {
        Renderer::new(OutputFormat::Text, DisplayConfig::default())
    }

    fn json() -> Renderer {
        Renderer::new(OutputFormat::Json, DisplayConfig::default())
    }

    #[test]
    fn test_empty_results_message() {
        let out = text().results(&[]).unwrap();
        assert!(out.contains(NO_RESULTS_TITLE));
        assert!(out.contains(NO_RESULTS_HINT));
    }

    #[test]
    fn test_card_contents() {
        let kona = Catalog::builtin().get(3).unwrap();
        let out = text().destination(kona).unwrap();
        assert!(out.starts_with("[3] Kona, Hawaii\n"));
        assert!(out.contains("Region: North America"));
        assert!(out.contains("Triathlon | Swimming | Running"));
        assert!(out.contains("Day 1: Swim at Kailua Bay"));
        assert!(out.contains("Day 5: Practice race simulation"));
        assert!(out.contains("high SPF sunscreen"));
    }

    #[test]
    fn test_card_respects_display_settings() {
        let display = DisplayConfig {
            show_itinerary: false,
            max_tips: 1,
            ..DisplayConfig::default()
        };
        let renderer = Renderer::new(OutputFormat::Text, display);
        let out = renderer.destination(Catalog::builtin().get(6).unwrap()).unwrap();
        assert!(!out.contains("Sample Itinerary"));
        assert!(out.contains("Allow 2-3 weeks"));
        assert!(!out.contains("Join local runners"));
    }

    #[test]
    fn test_json_results() {
        let catalog = Catalog::builtin();
        let europe: Vec<&Destination> = catalog
            .destinations()
            .iter()
            .filter(|d| d.region == "Europe")
            .collect();
        let out = json().results(&europe).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["count"], 2);
        assert_eq!(value["destinations"][1]["name"], "Chamonix, France");
        assert_eq!(
            value["destinations"][0]["itinerary"]["day2"],
            "Challenging climb up Sa Calobra, recovery walk along the beach"
        );
    }

    #[test]
    fn test_text_options() {
        let out = text()
            .options("Regions", &["Europe".to_string(), "Africa".to_string()])
            .unwrap();
        assert_eq!(out, "Regions:\n  Europe\n  Africa\n");
    }

    #[test]
    fn test_rejection_is_json_in_json_mode() {
        let err = DestinationsError::validation("unknown command 'sort'");
        let out = json().rejection(&err).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["error"], "Invalid input: unknown command 'sort'");

        assert_eq!(
            text().rejection(&err).unwrap(),
            "Invalid input: unknown command 'sort'"
        );
    }

    #[test]
    fn test_landing_text() {
        let page = LandingPage::build(Catalog::builtin());
        let out = text().landing(&page).unwrap();
        assert!(out.contains("Travel Destinations for Athletes"));
        assert!(out.contains("Detailed Itineraries"));
        assert!(out.contains("[2] Mallorca, Spain - Cycling paradise"));
    }

    #[test]
    fn test_output_format_serde_names() {
        assert_eq!(serde_json::to_string(&OutputFormat::Json).unwrap(), "\"json\"");
        let format: OutputFormat = serde_json::from_str("\"text\"").unwrap();
        assert_eq!(format, OutputFormat::Text);
        assert!(serde_json::from_str::<OutputFormat>("\"yaml\"").is_err());
    }
}
