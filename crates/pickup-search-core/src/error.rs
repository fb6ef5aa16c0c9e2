// crates/pickup-search-core/src/error.rs
use crate::common::FieldId;
use thiserror::Error;

/// Every way building, validating or decoding a search request can fail.
///
/// Validation errors are raised synchronously by the setter that received
/// the bad input, or by [`crate::SearchRequestBuilder::create`]. They never
/// surface later in the execution engine.
#[derive(Error, Debug)]
pub enum SearchRequestError {
    #[error(
        "condition type '{condition}' is not supported{}",
        .field.map(|f| format!(" for field '{f}'")).unwrap_or_default()
    )]
    InvalidCondition {
        condition: String,
        field: Option<FieldId>,
    },

    #[error("value for field '{field}' does not fit condition '{condition}': {reason}")]
    InvalidValueShape {
        field: FieldId,
        condition: String,
        reason: String,
    },

    #[error("{what} must be a positive integer, got {value}")]
    InvalidPagination { what: &'static str, value: i64 },

    #[error("distance radius must be greater than zero")]
    InvalidRadius,

    #[error("sort direction '{0}' is not supported, expected ASC or DESC")]
    InvalidSortDirection(String),

    #[error("sort order has no field")]
    MissingSortField,

    #[error("search request has no scope {0}")]
    MissingScope(&'static str),

    #[error("search request has no {0}")]
    MissingPagination(&'static str),

    #[error("distance filter has a radius but no country to anchor it")]
    MissingDistanceAnchor,

    #[error("invalid field registry: {0}")]
    InvalidRegistry(String),

    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "compact")]
    #[error("binary encoding error: {0}")]
    Bincode(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, SearchRequestError>;
