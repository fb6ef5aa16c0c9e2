use criterion::{criterion_group, criterion_main, Criterion};
use pickup_search_core::common::{CITY, DISTANCE};
use pickup_search_core::prelude::*;
use std::hint::black_box;

fn configured_builder() -> SearchRequestBuilder<'static> {
    let mut builder = SearchRequestBuilder::new();
    builder
        .set_address_street_filter("Some Street", None)
        .and_then(|b| b.set_address_postcode_filter("123,456", ConditionKind::In))
        .and_then(|b| b.set_address_region_filter("Reg%", ConditionKind::Like))
        .and_then(|b| b.set_distance_filter_radius(999))
        .and_then(|b| b.set_page_size(500))
        .and_then(|b| b.set_current_page(200))
        .expect("valid bench input")
        .set_distance_filter_country("UA")
        .set_scope_code("default_website")
        .set_scope_type(SCOPE_TYPE_WEBSITE);
    if let (Ok(city), Ok(distance)) = (SortOrder::asc(CITY), SortOrder::desc(DISTANCE)) {
        builder.set_sort_orders([city, distance]);
    }
    builder
}

fn bench_builder(c: &mut Criterion) {
    c.bench_function("set_filter", |b| {
        let mut builder = SearchRequestBuilder::new();
        b.iter(|| {
            builder
                .set_address_city_filter(black_box("Kyiv"), ConditionKind::Neq)
                .is_ok()
        })
    });

    let builder = configured_builder();
    c.bench_function("create", |b| b.iter(|| black_box(&builder).create()));

    #[cfg(feature = "json")]
    {
        let request = builder.create().expect("complete builder");
        c.bench_function("to_json", |b| b.iter(|| black_box(&request).to_json()));
    }
}

criterion_group!(benches, bench_builder);
criterion_main!(benches);
