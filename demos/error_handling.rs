//! Error handling example for pickup-search-rs
//!
//! This example demonstrates which inputs are rejected, and when

use pickup_search_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== Pickup Search Error Handling Example ===\n");

    let mut builder = SearchRequestBuilder::new();

    // Example 1: Setters reject bad input immediately
    println!("--- Example 1: Rejected setter calls ---");
    match builder.set_address_region_id_filter("1%", ConditionKind::Like) {
        Ok(_) => println!("  accepted"),
        Err(e) => println!("  ✗ {e}"),
    }
    match builder.set_page_size(0) {
        Ok(_) => println!("  accepted"),
        Err(e) => println!("  ✗ {e}"),
    }
    match "between".parse::<ConditionKind>() {
        Ok(c) => println!("  parsed {c}"),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    // Example 2: create() refuses incomplete requests
    println!("--- Example 2: Incomplete requests ---");
    if let Err(e) = builder.create() {
        println!("  ✗ {e}");
    }
    builder.set_scope_code("default_website").set_scope_type(SCOPE_TYPE_WEBSITE);
    if let Err(e) = builder.create() {
        println!("  ✗ {e}");
    }
    builder.set_page_size(10)?.set_current_page(1)?;
    builder.set_distance_filter_radius(5)?;
    if let Err(e) = builder.create() {
        println!("  ✗ {e}");
    }
    println!();

    // Example 3: Complete it
    println!("--- Example 3: Complete request ---");
    builder.set_distance_filter_country("UA");
    let request = builder.create()?;
    println!("  ✓ page {} of size {}", request.current_page(), request.page_size());

    Ok(())
}
