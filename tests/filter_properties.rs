//! Catalog filtering behavior through the public API

use athletic_destinations::{
    Catalog, Destination, DestinationFilter, FilterEvent, FilterSession, Selection,
    distinct_interests, distinct_regions, query,
};
use rstest::rstest;

fn catalog() -> &'static Catalog {
    Catalog::builtin()
}

fn names(results: &[&Destination]) -> Vec<String> {
    results.iter().map(|d| d.name.clone()).collect()
}

#[test]
fn identity_query_returns_catalog_in_order() {
    let results = query(catalog().destinations(), &DestinationFilter::default());
    let expected: Vec<&Destination> = catalog().destinations().iter().collect();
    assert_eq!(results, expected);
}

#[rstest]
#[case("Europe", &["Mallorca, Spain", "Chamonix, France"])]
#[case("North America", &["Boulder, Colorado", "Kona, Hawaii"])]
#[case("Oceania", &["Gold Coast, Australia"])]
#[case("Africa", &["Iten, Kenya"])]
#[case("South America", &[])]
fn region_scenarios(#[case] region: &str, #[case] expected: &[&str]) {
    let results = catalog().query(&DestinationFilter::new().with_region(region));
    assert_eq!(names(&results), expected);
}

#[test]
fn triathlon_destinations() {
    let results = catalog().query(&DestinationFilter::new().with_interest("Triathlon"));
    let names = names(&results);
    assert!(names.contains(&"Kona, Hawaii".to_string()));
    assert!(names.contains(&"Gold Coast, Australia".to_string()));
    // Mallorca also lists Triathlon among its interests
    assert_eq!(names, ["Mallorca, Spain", "Kona, Hawaii", "Gold Coast, Australia"]);
}

#[test]
fn altitude_search_scenario() {
    let results = catalog().query(&DestinationFilter::new().with_search("altitude"));
    assert_eq!(names(&results), ["Boulder, Colorado", "Iten, Kenya"]);
}

#[test]
fn africa_cycling_is_empty() {
    let filter = DestinationFilter::new()
        .with_region("Africa")
        .with_interest("Cycling");
    assert!(catalog().query(&filter).is_empty());
}

#[test]
fn search_case_does_not_matter() {
    let upper = catalog().query(&DestinationFilter::new().with_search("MALLORCA"));
    let lower = catalog().query(&DestinationFilter::new().with_search("mallorca"));
    assert_eq!(upper, lower);
    assert_eq!(names(&upper), ["Mallorca, Spain"]);
}

#[test]
fn every_region_and_interest_filter_is_consistent() {
    let destinations = catalog().destinations();
    for region in distinct_regions(destinations) {
        for interest in distinct_interests(destinations) {
            let filter = DestinationFilter::new()
                .with_region(region.clone())
                .with_interest(interest.clone());
            let results = query(destinations, &filter);
            let expected: Vec<&Destination> = destinations
                .iter()
                .filter(|d| d.region == region && d.has_interest(&interest))
                .collect();
            assert_eq!(results, expected, "{region} / {interest}");
        }
    }
}

#[test]
fn session_reset_after_any_filters() {
    let mut session = FilterSession::new(catalog());
    for line in ["region Europe", "interest Skiing", "search mont-blanc"] {
        session.apply(line.parse().unwrap());
    }
    assert_eq!(names(session.results()), ["Chamonix, France"]);

    session.apply(FilterEvent::InterestSelected(Selection::Only("Surfing".into())));
    assert!(session.results().is_empty());

    let results = session.apply(FilterEvent::Reset);
    assert_eq!(results.len(), catalog().len());
    assert_eq!(results[0].id, 1);
    assert_eq!(results[5].id, 6);
}
