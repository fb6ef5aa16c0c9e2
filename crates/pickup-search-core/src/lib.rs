// crates/pickup-search-core/src/lib.rs
//! Construction and validation of pickup-location search requests.
//!
//! [`SearchRequestBuilder`] collects filter criteria, a distance constraint,
//! scope, sort keys and paging, and compiles them into an immutable
//! [`SearchRequest`] for an external [`PickupLocationSearch`] engine.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod builder;
pub mod common;
pub mod condition;
pub mod criterion;
pub mod error;
pub mod model;
pub mod prelude;
pub mod registry;
pub mod traits;
pub mod wire;

// Re-exports
pub use crate::builder::SearchRequestBuilder;
pub use crate::common::FieldId;
pub use crate::condition::{ConditionKind, FilterValue};
pub use crate::criterion::FilterCriterion;
pub use crate::error::{Result, SearchRequestError};
pub use crate::model::{
    AddressFilter, DistanceFilter, Pagination, Scope, SearchRequest, SortDirection, SortOrder,
    SortOrderBuilder,
};
pub use crate::registry::{FieldRegistry, FieldRule};
pub use crate::traits::{PickupLocationSearch, StockId, StockResolver, SCOPE_TYPE_WEBSITE};
