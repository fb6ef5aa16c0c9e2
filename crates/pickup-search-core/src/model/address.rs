// crates/pickup-search-core/src/model/address.rs
use crate::common::FieldId;
use crate::criterion::FilterCriterion;
use crate::error::{Result, SearchRequestError};
use crate::registry::FieldRegistry;
use serde::{Deserialize, Serialize};

/// Up to six optional criteria on the location's address.
///
/// Unset criteria stay `None`; there is no wildcard or empty placeholder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressFilter {
    pub(crate) street: Option<FilterCriterion>,
    pub(crate) postcode: Option<FilterCriterion>,
    pub(crate) city: Option<FilterCriterion>,
    pub(crate) region_id: Option<FilterCriterion>,
    pub(crate) region: Option<FilterCriterion>,
    pub(crate) country: Option<FilterCriterion>,
}

impl AddressFilter {
    pub fn street_filter(&self) -> Option<&FilterCriterion> {
        self.street.as_ref()
    }

    pub fn postcode_filter(&self) -> Option<&FilterCriterion> {
        self.postcode.as_ref()
    }

    pub fn city_filter(&self) -> Option<&FilterCriterion> {
        self.city.as_ref()
    }

    pub fn region_id_filter(&self) -> Option<&FilterCriterion> {
        self.region_id.as_ref()
    }

    pub fn region_filter(&self) -> Option<&FilterCriterion> {
        self.region.as_ref()
    }

    pub fn country_filter(&self) -> Option<&FilterCriterion> {
        self.country.as_ref()
    }

    /// Criterion for an address field; `None` for unset or non-address fields.
    pub fn get(&self, field: FieldId) -> Option<&FilterCriterion> {
        match field {
            FieldId::Street => self.street_filter(),
            FieldId::Postcode => self.postcode_filter(),
            FieldId::City => self.city_filter(),
            FieldId::RegionId => self.region_id_filter(),
            FieldId::Region => self.region_filter(),
            FieldId::Country => self.country_filter(),
            FieldId::Name | FieldId::PickupLocationCode => None,
        }
    }

    /// Present criteria in a fixed field order.
    pub fn iter(&self) -> impl Iterator<Item = &FilterCriterion> {
        FieldId::ADDRESS.into_iter().filter_map(|f| self.get(f))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub(crate) fn slot_mut(&mut self, field: FieldId) -> Option<&mut Option<FilterCriterion>> {
        match field {
            FieldId::Street => Some(&mut self.street),
            FieldId::Postcode => Some(&mut self.postcode),
            FieldId::City => Some(&mut self.city),
            FieldId::RegionId => Some(&mut self.region_id),
            FieldId::Region => Some(&mut self.region),
            FieldId::Country => Some(&mut self.country),
            FieldId::Name | FieldId::PickupLocationCode => None,
        }
    }

    /// Each present criterion must sit in the slot of its own field and pass
    /// the registry.
    pub(crate) fn validate(&self, registry: &FieldRegistry) -> Result<()> {
        for field in FieldId::ADDRESS {
            if let Some(criterion) = self.get(field) {
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
        Ok(())
    }
}
