use pickup_search_core::common::{CITY, DISTANCE};
use pickup_search_core::prelude::*;
use std::collections::HashMap;

/// Engine stand-in that records what it was asked to run.
struct RecordingEngine;

impl PickupLocationSearch for RecordingEngine {
    type Output = Vec<String>;
    type Error = String;

    fn execute(&self, request: &SearchRequest) -> std::result::Result<Vec<String>, String> {
        if request.distance_filter().is_none() && request.address_filter().is_empty() {
            return Err("unbounded search".to_string());
        }
        Ok(request
            .sort()
            .iter()
            .map(|o| format!("{} {}", o.field(), o.direction()))
            .collect())
    }
}

struct MapResolver(HashMap<(&'static str, &'static str), u32>);

impl StockResolver for MapResolver {
    type Error = String;

    fn resolve(&self, scope_type: &str, scope_code: &str) -> std::result::Result<StockId, String> {
        self.0
            .iter()
            .find(|((t, c), _)| *t == scope_type && *c == scope_code)
            .map(|(_, id)| StockId(*id))
            .ok_or_else(|| format!("no stock for {scope_type}/{scope_code}"))
    }
}

fn request(radius: Option<u32>) -> Result<SearchRequest> {
    let mut builder = SearchRequestBuilder::new();
    builder
        .set_scope_code("eu_website")
        .set_scope_type(SCOPE_TYPE_WEBSITE)
        .set_page_size(10)?
        .set_current_page(1)?
        .set_sort_orders([SortOrder::asc(CITY)?, SortOrder::desc(DISTANCE)?]);
    if let Some(radius) = radius {
        builder
            .set_distance_filter_radius(radius)?
            .set_distance_filter_country("DE");
    }
    builder.create()
}

#[test]
fn engine_receives_sort_keys_in_order() -> Result<()> {
    let out = RecordingEngine.execute(&request(Some(50))?).unwrap();
    assert_eq!(out, vec!["city ASC", "distance DESC"]);
    Ok(())
}

#[test]
fn engine_errors_stay_with_the_engine() -> Result<()> {
    assert_eq!(
        RecordingEngine.execute(&request(None)?),
        Err("unbounded search".to_string())
    );
    Ok(())
}

#[test]
fn scope_resolves_through_the_resolver() -> Result<()> {
    let resolver = MapResolver(HashMap::from([(("website", "eu_website"), 2)]));
    assert_eq!(resolver.resolve_for(&request(None)?), Ok(StockId(2)));
    assert!(resolver.resolve("website", "us_website").is_err());
    Ok(())
}
