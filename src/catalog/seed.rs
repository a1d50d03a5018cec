//! Built-in destination dataset

use crate::models::{Destination, Itinerary};

fn destination(
    id: u32,
    name: &str,
    region: &str,
    interests: &[&str],
    description: &str,
    tips: &[&str],
    itinerary: [&str; 5],
) -> Destination {
    Destination {
        id,
        name: name.to_string(),
        region: region.to_string(),
        interests: interests.iter().map(|s| (*s).to_string()).collect(),
        description: description.to_string(),
        tips: tips.iter().map(|s| (*s).to_string()).collect(),
        itinerary: Itinerary::new(itinerary),
    }
}

/// The six curated destinations, in display order
#[must_use]
pub fn destinations() -> Vec<Destination> {
    vec![
        destination(
            1,
            "Boulder, Colorado",
            "North America",
            &["Trail Running", "Cycling", "Rock Climbing"],
            "A mecca for endurance athletes with high-altitude training opportunities and endless trails.",
            &[
                "Acclimatize to the altitude before intense training",
                "Hydrate more than usual due to the dry climate",
                "Check weather conditions as they can change rapidly",
            ],
            [
                "Morning trail run at Chautauqua Park, afternoon recovery at Boulder Creek",
                "Cycling up Flagstaff Mountain, yoga session in the evening",
                "Rock climbing at Eldorado Canyon, recovery swim at Boulder Reservoir",
                "Long run on Boulder Creek Path, sports massage in the afternoon",
                "Mountain biking at Valmont Bike Park, stretching and recovery",
            ],
        ),
        destination(
            2,
            "Mallorca, Spain",
            "Europe",
            &["Cycling", "Swimming", "Triathlon"],
            "A cyclist's paradise with smooth roads, challenging climbs, and beautiful Mediterranean scenery.",
            &[
                "Best cycling season is from February to June and September to November",
                "Rent a bike locally to avoid travel hassles",
                "Stay hydrated in the Mediterranean heat",
            ],
            [
                "Morning coastal ride to Cap Formentor, afternoon swim at Port de Pollença",
                "Challenging climb up Sa Calobra, recovery walk along the beach",
                "Easy spin around Alcúdia Bay, open water swimming session",
                "Long ride through the Tramuntana mountains, massage therapy",
                "Recovery ride to Artà, beach relaxation and stretching",
            ],
        ),
        destination(
            3,
            "Kona, Hawaii",
            "North America",
            &["Triathlon", "Swimming", "Running"],
            "Home of the IRONMAN World Championship with perfect conditions for triathlon training year-round.",
            &[
                "Train during the same time of day as your race to acclimatize to the heat",
                "Practice open water swimming in the bay to get used to ocean conditions",
                "Use high SPF sunscreen as the Hawaiian sun is intense",
            ],
            [
                "Swim at Kailua Bay, easy run along Ali'i Drive",
                "Bike the Queen K Highway, recovery swim",
                "Run to the Energy Lab, afternoon yoga for recovery",
                "Long ride up to Hawi, light swim in the afternoon",
                "Practice race simulation with transitions, recovery massage",
            ],
        ),
        destination(
            4,
            "Chamonix, France",
            "Europe",
            &["Trail Running", "Skiing", "Mountaineering"],
            "A trail runner's dream with access to the iconic Ultra-Trail du Mont-Blanc course and alpine terrain.",
            &[
                "Prepare for significant elevation changes on trails",
                "Carry emergency gear even on short runs due to changing mountain weather",
                "Consider hiring a local guide for the more technical routes",
            ],
            [
                "Acclimatization hike to Lac Blanc, stretching session in the evening",
                "Technical trail run on part of the UTMB course, recovery walk in town",
                "Long mountain run to Mer de Glace, ice bath in glacial streams",
                "Vertical kilometer training, massage therapy in the afternoon",
                "Easy trail to Plan de l'Aiguille, yoga and recovery",
            ],
        ),
        destination(
            5,
            "Gold Coast, Australia",
            "Oceania",
            &["Swimming", "Surfing", "Triathlon"],
            "Year-round warm weather with excellent swimming facilities and beautiful beaches for training.",
            &[
                "Early morning training is best to avoid the midday heat",
                "Be aware of strong ocean currents when swimming",
                "The Miami Aquatic Centre offers Olympic-standard facilities",
            ],
            [
                "Ocean swim at Burleigh Heads, beach run in the afternoon",
                "Pool session at Miami Aquatic Centre, coastal cycle route",
                "Surf lesson at Surfers Paradise, recovery walk along the esplanade",
                "Triathlon brick session, afternoon stretching and yoga",
                "Long beach run, ocean recovery swim",
            ],
        ),
        destination(
            6,
            "Iten, Kenya",
            "Africa",
            &["Running", "Altitude Training"],
            "The 'Home of Champions' where many elite Kenyan runners train at high altitude.",
            &[
                "Allow 2-3 weeks for proper altitude acclimatization",
                "Join local runners for group training sessions",
                "Respect local customs and training methods",
            ],
            [
                "Easy acclimatization run, visit to High Altitude Training Centre",
                "Morning fartlek session with local runners, afternoon rest",
                "Long run through tea plantations, recovery walk",
                "Track session at Kamariny Stadium, stretching and mobility work",
                "Easy trail run, visit to local running camp",
            ],
        ),
    ]
}
