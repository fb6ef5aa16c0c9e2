// crates/pickup-search-core/src/model/request.rs
use super::{AddressFilter, DistanceFilter, SortOrder};
use crate::common::FieldId;
use crate::criterion::FilterCriterion;
use crate::error::{Result, SearchRequestError};
use crate::registry::FieldRegistry;
use serde::{Deserialize, Serialize};

/// Tenant/channel context a search executes within. Both parts are opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scope {
    code: String,
    #[serde(rename = "type")]
    scope_type: String,
}

impl Scope {
    pub fn new(code: impl Into<String>, scope_type: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            scope_type: scope_type.into(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn scope_type(&self) -> &str {
        &self.scope_type
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pagination {
    page_size: u32,
    current_page: u32,
}

impl Pagination {
    pub(crate) fn new(page_size: u32, current_page: u32) -> Self {
        Self {
            page_size,
            current_page,
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Number of items preceding the requested page.
    pub fn offset(&self) -> u64 {
        u64::from(self.current_page.saturating_sub(1)) * u64::from(self.page_size)
    }
}

/// A compiled, validated pickup-location search.
///
/// Only [`crate::SearchRequestBuilder`] creates these (or the wire decoders,
/// which re-validate). There are no setters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    address_filter: AddressFilter,
    distance_filter: Option<DistanceFilter>,
    scope: Scope,
    name_filter: Option<FilterCriterion>,
    pickup_location_code_filter: Option<FilterCriterion>,
    sort: Vec<SortOrder>,
    pagination: Pagination,
}

impl SearchRequest {
    pub(crate) fn from_parts(
        address_filter: AddressFilter,
        distance_filter: Option<DistanceFilter>,
        scope: Scope,
        name_filter: Option<FilterCriterion>,
        pickup_location_code_filter: Option<FilterCriterion>,
        sort: Vec<SortOrder>,
        pagination: Pagination,
    ) -> Self {
        Self {
            address_filter,
            distance_filter,
            scope,
            name_filter,
            pickup_location_code_filter,
            sort,
            pagination,
        }
    }

    pub fn address_filter(&self) -> &AddressFilter {
        &self.address_filter
    }

    pub fn distance_filter(&self) -> Option<&DistanceFilter> {
        self.distance_filter.as_ref()
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn scope_code(&self) -> &str {
        self.scope.code()
    }

    pub fn scope_type(&self) -> &str {
        self.scope.scope_type()
    }

    pub fn name_filter(&self) -> Option<&FilterCriterion> {
        self.name_filter.as_ref()
    }

    pub fn pickup_location_code_filter(&self) -> Option<&FilterCriterion> {
        self.pickup_location_code_filter.as_ref()
    }

    /// Sort keys, primary first.
    pub fn sort(&self) -> &[SortOrder] {
        &self.sort
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn page_size(&self) -> u32 {
        self.pagination.page_size
    }

    pub fn current_page(&self) -> u32 {
        self.pagination.current_page
    }

    /// Checks every invariant a builder-made request satisfies.
    ///
    /// Used on requests that arrive from outside the builder.
    pub fn validate(&self, registry: &FieldRegistry) -> Result<()> {
        self.address_filter.validate(registry)?;
        if let Some(distance) = &self.distance_filter {
            distance.validate()?;
        }
        for (field, criterion) in [
            (FieldId::Name, &self.name_filter),
            (FieldId::PickupLocationCode, &self.pickup_location_code_filter),
        ] {
            if let Some(criterion) = criterion {
                if criterion.field() != field {
                    return Err(SearchRequestError::InvalidValueShape {
                        field,
                        condition: criterion.condition_type().to_string(),
                        reason: format!("criterion targets field '{}'", criterion.field()),
                    });
                }
                registry.validate(criterion)?;
            }
        }
        for order in &self.sort {
            order.validate()?;
        }
        if self.pagination.page_size == 0 {
            return Err(SearchRequestError::InvalidPagination {
                what: "page size",
                value: 0,
            });
        }
        if self.pagination.current_page == 0 {
            return Err(SearchRequestError::InvalidPagination {
                what: "current page",
                value: 0,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_counts_previous_pages() {
        assert_eq!(Pagination::new(20, 1).offset(), 0);
        assert_eq!(Pagination::new(500, 200).offset(), 99_500);
    }

    #[test]
    fn zero_page_fails_validation() {
        let request = SearchRequest::from_parts(
            AddressFilter::default(),
            None,
            Scope::new("default", "website"),
            None,
            None,
            Vec::new(),
            Pagination::new(10, 0),
        );
        assert!(matches!(
            request.validate(FieldRegistry::standard()),
            Err(SearchRequestError::InvalidPagination { what: "current page", .. })
        ));
    }
}
