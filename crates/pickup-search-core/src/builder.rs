// crates/pickup-search-core/src/builder.rs

//! # Search Request Builder
//!
//! Collects criteria, a distance constraint, scope, sort keys and paging
//! through chained setters, then compiles them with [`SearchRequestBuilder::create`].
//!
//! ```rust
//! use pickup_search_core::prelude::*;
//!
//! let mut builder = SearchRequestBuilder::new();
//! builder
//!     .set_address_city_filter("Kyiv", None)?
//!     .set_distance_filter_radius(25)?
//!     .set_distance_filter_country("UA")
//!     .set_scope_code("default_website")
//!     .set_scope_type(SCOPE_TYPE_WEBSITE)
//!     .set_page_size(20)?
//!     .set_current_page(1)?;
//!
//! let request = builder.create()?;
//! assert_eq!(request.distance_filter().map(|d| d.radius()), Some(25));
//! # Ok::<(), pickup_search_core::SearchRequestError>(())
//! ```

use crate::common::FieldId;
use crate::condition::{ConditionKind, FilterValue};
use crate::criterion::FilterCriterion;
use crate::error::{Result, SearchRequestError};
use crate::model::distance::DistanceDraft;
use crate::model::{AddressFilter, Pagination, Scope, SearchRequest, SortOrder};
use crate::registry::FieldRegistry;
use tracing::{debug, trace};

/// Mutable accumulator for one [`SearchRequest`].
///
/// Setters overwrite (last write wins) and leave the builder untouched when
/// they reject their input. [`create`](Self::create) snapshots the current
/// state; it can be called again after further changes.
///
/// A builder is meant for a single caller. Compiled requests are immutable
/// and can be shared freely.
#[derive(Debug, Clone)]
pub struct SearchRequestBuilder<'r> {
    registry: &'r FieldRegistry,
    address: AddressFilter,
    distance: DistanceDraft,
    scope_code: Option<String>,
    scope_type: Option<String>,
    name: Option<FilterCriterion>,
    pickup_location_code: Option<FilterCriterion>,
    sort: Vec<SortOrder>,
    page_size: Option<u32>,
    current_page: Option<u32>,
}

impl Default for SearchRequestBuilder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchRequestBuilder<'static> {
    /// A builder checked against [`FieldRegistry::standard`].
    pub fn new() -> Self {
        Self::with_registry(FieldRegistry::standard())
    }
}

impl<'r> SearchRequestBuilder<'r> {
    pub fn with_registry(registry: &'r FieldRegistry) -> Self {
        Self {
            registry,
            address: AddressFilter::default(),
            distance: DistanceDraft::default(),
            scope_code: None,
            scope_type: None,
            name: None,
            pickup_location_code: None,
            sort: Vec::new(),
            page_size: None,
            current_page: None,
        }
    }

    pub fn registry(&self) -> &'r FieldRegistry {
        self.registry
    }

    // -----------------------------------------------------------------------
    // CRITERIA
    // -----------------------------------------------------------------------

    /// Sets the criterion for any field. `condition = None` applies the
    /// registry default for that field.
    pub fn set_filter(
        &mut self,
        field: FieldId,
        value: impl Into<FilterValue>,
        condition: impl Into<Option<ConditionKind>>,
    ) -> Result<&mut Self> {
        let criterion = self
            .registry
            .criterion(field, value, condition.into())
            .map_err(|e| {
                debug!(%field, error = %e, "rejected filter");
                e
            })?;
        trace!(
            %field,
            condition = %criterion.condition_type(),
            value = %criterion.value(),
            "set filter"
        );
        match self.address.slot_mut(field) {
            Some(slot) => *slot = Some(criterion),
            None if field == FieldId::Name => self.name = Some(criterion),
            None => self.pickup_location_code = Some(criterion),
        }
        Ok(self)
    }

    pub fn set_address_street_filter(
        &mut self,
        value: impl Into<FilterValue>,
        condition: impl Into<Option<ConditionKind>>,
    ) -> Result<&mut Self> {
        self.set_filter(FieldId::Street, value, condition)
    }

    pub fn set_address_postcode_filter(
        &mut self,
        value: impl Into<FilterValue>,
        condition: impl Into<Option<ConditionKind>>,
    ) -> Result<&mut Self> {
        self.set_filter(FieldId::Postcode, value, condition)
    }

    pub fn set_address_city_filter(
        &mut self,
        value: impl Into<FilterValue>,
        condition: impl Into<Option<ConditionKind>>,
    ) -> Result<&mut Self> {
        self.set_filter(FieldId::City, value, condition)
    }

    pub fn set_address_region_id_filter(
        &mut self,
        value: impl Into<FilterValue>,
        condition: impl Into<Option<ConditionKind>>,
    ) -> Result<&mut Self> {
        self.set_filter(FieldId::RegionId, value, condition)
    }

    pub fn set_address_region_filter(
        &mut self,
        value: impl Into<FilterValue>,
        condition: impl Into<Option<ConditionKind>>,
    ) -> Result<&mut Self> {
        self.set_filter(FieldId::Region, value, condition)
    }

    pub fn set_address_country_filter(
        &mut self,
        value: impl Into<FilterValue>,
        condition: impl Into<Option<ConditionKind>>,
    ) -> Result<&mut Self> {
        self.set_filter(FieldId::Country, value, condition)
    }

    pub fn set_name_filter(
        &mut self,
        value: impl Into<FilterValue>,
        condition: impl Into<Option<ConditionKind>>,
    ) -> Result<&mut Self> {
        self.set_filter(FieldId::Name, value, condition)
    }

    pub fn set_pickup_location_code_filter(
        &mut self,
        value: impl Into<FilterValue>,
        condition: impl Into<Option<ConditionKind>>,
    ) -> Result<&mut Self> {
        self.set_filter(FieldId::PickupLocationCode, value, condition)
    }

    // -----------------------------------------------------------------------
    // DISTANCE
    // -----------------------------------------------------------------------

    /// Radius in km. Setting it activates the distance filter.
    pub fn set_distance_filter_radius(&mut self, radius: u32) -> Result<&mut Self> {
        if radius == 0 {
            debug!("rejected zero distance radius");
            return Err(SearchRequestError::InvalidRadius);
        }
        trace!(radius, "set distance radius");
        self.distance.radius = Some(radius);
        Ok(self)
    }

    pub fn set_distance_filter_country(&mut self, country: impl Into<String>) -> &mut Self {
        let country: String = country.into();
        trace!(%country, "set distance country");
        self.distance.country = Some(country);
        self
    }

    pub fn set_distance_filter_region(&mut self, region: impl Into<String>) -> &mut Self {
        let region: String = region.into();
        trace!(%region, "set distance region");
        self.distance.region = Some(region);
        self
    }

    pub fn set_distance_filter_city(&mut self, city: impl Into<String>) -> &mut Self {
        let city: String = city.into();
        trace!(%city, "set distance city");
        self.distance.city = Some(city);
        self
    }

    pub fn set_distance_filter_postcode(&mut self, postcode: impl Into<String>) -> &mut Self {
        let postcode: String = postcode.into();
        trace!(%postcode, "set distance postcode");
        self.distance.postcode = Some(postcode);
        self
    }

    // -----------------------------------------------------------------------
    // SCOPE, SORT, PAGING
    // -----------------------------------------------------------------------

    pub fn set_scope_code(&mut self, code: impl Into<String>) -> &mut Self {
        let code: String = code.into();
        trace!(%code, "set scope code");
        self.scope_code = Some(code);
        self
    }

    pub fn set_scope_type(&mut self, scope_type: impl Into<String>) -> &mut Self {
        let scope_type: String = scope_type.into();
        trace!(%scope_type, "set scope type");
        self.scope_type = Some(scope_type);
        self
    }

    /// Replaces the sort sequence. Order is kept as given.
    pub fn set_sort_orders(&mut self, sort: impl IntoIterator<Item = SortOrder>) -> &mut Self {
        self.sort = sort.into_iter().collect();
        trace!(orders = self.sort.len(), "set sort orders");
        self
    }

    pub fn set_page_size(&mut self, page_size: i64) -> Result<&mut Self> {
        let page_size = positive("page size", page_size)?;
        trace!(page_size, "set page size");
        self.page_size = Some(page_size);
        Ok(self)
    }

    pub fn set_current_page(&mut self, current_page: i64) -> Result<&mut Self> {
        let current_page = positive("current page", current_page)?;
        trace!(current_page, "set current page");
        self.current_page = Some(current_page);
        Ok(self)
    }

    // -----------------------------------------------------------------------
    // COMPILE
    // -----------------------------------------------------------------------

    /// Compiles a snapshot of the current state.
    ///
    /// Fails with [`SearchRequestError::MissingScope`],
    /// [`SearchRequestError::MissingPagination`] or
    /// [`SearchRequestError::MissingDistanceAnchor`]; never returns a partial
    /// request.
    pub fn create(&self) -> Result<SearchRequest> {
        let scope_code = self
            .scope_code
            .clone()
            .ok_or(SearchRequestError::MissingScope("code"))?;
        let scope_type = self
            .scope_type
            .clone()
            .ok_or(SearchRequestError::MissingScope("type"))?;
        let page_size = self
            .page_size
            .ok_or(SearchRequestError::MissingPagination("page size"))?;
        let current_page = self
            .current_page
            .ok_or(SearchRequestError::MissingPagination("current page"))?;
        let distance_filter = self.distance.compile()?;

        let request = SearchRequest::from_parts(
            self.address.clone(),
            distance_filter,
            Scope::new(scope_code, scope_type),
            self.name.clone(),
            self.pickup_location_code.clone(),
            self.sort.clone(),
            Pagination::new(page_size, current_page),
        );

        debug!(
            scope_code = request.scope_code(),
            scope_type = request.scope_type(),
            address_filters = request.address_filter().iter().count(),
            distance = request.distance_filter().is_some(),
            sort_keys = request.sort().len(),
            page_size,
            current_page,
            "compiled search request"
        );
        Ok(request)
    }

    /// Consuming form of [`create`](Self::create).
    pub fn build(self) -> Result<SearchRequest> {
        self.create()
    }
}

fn positive(what: &'static str, value: i64) -> Result<u32> {
    u32::try_from(value)
        .ok()
        .filter(|v| *v > 0)
        .ok_or_else(|| {
            debug!(what, value, "rejected pagination value");
            SearchRequestError::InvalidPagination { what, value }
        })
}
