// crates/pickup-search-core/src/prelude.rs
pub use crate::common::{self, FieldId};
pub use crate::condition::{ConditionKind, FilterValue};
pub use crate::error::{Result, SearchRequestError};
pub use crate::model::{SearchRequest, SortDirection, SortOrder, SortOrderBuilder};
pub use crate::registry::FieldRegistry;
pub use crate::traits::{PickupLocationSearch, StockId, StockResolver, SCOPE_TYPE_WEBSITE};
pub use crate::SearchRequestBuilder;
