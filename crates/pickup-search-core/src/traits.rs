// crates/pickup-search-core/src/traits.rs
//! Boundaries to the collaborators that sit on either side of this crate.
use crate::model::SearchRequest;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scope type of a website sales channel.
pub const SCOPE_TYPE_WEBSITE: &str = "website";

/// Identifier of the stock a scope resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StockId(pub u32);

impl fmt::Display for StockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maps a scope (e.g. `("website", "base")`) to the stock it sells from.
///
/// Implemented outside this crate; scope strings are passed through
/// untouched.
pub trait StockResolver {
    type Error;

    fn resolve(&self, scope_type: &str, scope_code: &str) -> Result<StockId, Self::Error>;

    /// Resolves the scope a compiled request runs against.
    fn resolve_for(&self, request: &SearchRequest) -> Result<StockId, Self::Error> {
        self.resolve(request.scope_type(), request.scope_code())
    }
}

/// An engine that executes compiled requests.
///
/// Ranking, distance computation and data access all live behind this
/// trait.
pub trait PickupLocationSearch {
    type Output;
    type Error;

    fn execute(&self, request: &SearchRequest) -> Result<Self::Output, Self::Error>;
}
