// src/lib.rs
//! Workspace facade over `pickup-search-core`, used by the demos.
pub use pickup_search_core::*;
