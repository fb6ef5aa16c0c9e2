//! Basic usage example for pickup-search-rs
//!
//! This example demonstrates how to:
//! - Configure a search request with address and distance filters
//! - Order results by several sort keys
//! - Compile the request and inspect it
//! - Hand the request to the engine as JSON

use pickup_search_rs::common::{CITY, DISTANCE, PICKUP_LOCATION_CODE};
use pickup_search_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== Pickup Search Basic Usage Example ===\n");

    // Example 1: Configure the builder
    println!("--- Example 1: Configure a request ---");
    let mut builder = SearchRequestBuilder::new();
    builder
        .set_address_country_filter("UA", None)?
        .set_address_city_filter("Zhytomyr", ConditionKind::Neq)?
        .set_name_filter("Nam%", ConditionKind::Like)?
        .set_distance_filter_radius(50)?
        .set_distance_filter_country("UA")
        .set_distance_filter_city("Kyiv")
        .set_scope_code("default_website")
        .set_scope_type(SCOPE_TYPE_WEBSITE)
        .set_page_size(20)?
        .set_current_page(1)?
        .set_sort_orders([
            SortOrder::desc(DISTANCE)?,
            SortOrder::asc(CITY)?,
            SortOrder::asc(PICKUP_LOCATION_CODE)?,
        ]);
    println!("✓ Builder configured\n");

    // Example 2: Compile and inspect
    println!("--- Example 2: Compile the request ---");
    let request = builder.create()?;
    for criterion in request.address_filter().iter() {
        println!(
            "address {} {} {}",
            criterion.field(),
            criterion.condition_type(),
            criterion.value()
        );
    }
    if let Some(distance) = request.distance_filter() {
        println!(
            "within {} km of {}, {}",
            distance.radius(),
            distance.city().unwrap_or("-"),
            distance.country()
        );
    }
    for (i, order) in request.sort().iter().enumerate() {
        println!("{}. {} {}", i + 1, order.field(), order.direction());
    }
    println!();

    // Example 3: Wire form
    println!("--- Example 3: JSON for the engine ---");
    println!("{}", request.to_json_pretty()?);

    Ok(())
}
