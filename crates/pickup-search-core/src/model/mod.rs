// crates/pickup-search-core/src/model/mod.rs
pub mod address;
pub mod distance;
pub mod request;
pub mod sort;

pub use address::AddressFilter;
pub use distance::DistanceFilter;
pub use request::{Pagination, Scope, SearchRequest};
pub use sort::{SortDirection, SortOrder, SortOrderBuilder};
