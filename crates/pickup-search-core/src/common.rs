// crates/pickup-search-core/src/common.rs
//! Field identifiers shared by criteria, the registry and sort orders.
use crate::error::{Result, SearchRequestError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Logical fields that can carry a filter criterion.
///
/// The wire name of each field is what the execution engine expects, so
/// `Country` travels as `country_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    Street,
    Postcode,
    City,
    RegionId,
    Region,
    #[serde(rename = "country_id")]
    Country,
    Name,
    PickupLocationCode,
}

impl FieldId {
    pub const ALL: [FieldId; 8] = [
        FieldId::Street,
        FieldId::Postcode,
        FieldId::City,
        FieldId::RegionId,
        FieldId::Region,
        FieldId::Country,
        FieldId::Name,
        FieldId::PickupLocationCode,
    ];

    /// The six fields that make up an address filter.
    pub const ADDRESS: [FieldId; 6] = [
        FieldId::Street,
        FieldId::Postcode,
        FieldId::City,
        FieldId::RegionId,
        FieldId::Region,
        FieldId::Country,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Street => STREET,
            FieldId::Postcode => POSTCODE,
            FieldId::City => CITY,
            FieldId::RegionId => REGION_ID,
            FieldId::Region => REGION,
            FieldId::Country => COUNTRY_ID,
            FieldId::Name => NAME,
            FieldId::PickupLocationCode => PICKUP_LOCATION_CODE,
        }
    }

    pub fn is_address(&self) -> bool {
        Self::ADDRESS.contains(self)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldId {
    type Err = SearchRequestError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s.trim())
            .ok_or_else(|| SearchRequestError::UnknownField(s.to_string()))
    }
}

// Wire names understood by the execution engine. Sort orders reference
// these directly; `DISTANCE` is only meaningful as a sort key.
pub const STREET: &str = "street";
pub const POSTCODE: &str = "postcode";
pub const CITY: &str = "city";
pub const REGION_ID: &str = "region_id";
pub const REGION: &str = "region";
pub const COUNTRY_ID: &str = "country_id";
pub const NAME: &str = "name";
pub const PICKUP_LOCATION_CODE: &str = "pickup_location_code";
pub const DISTANCE: &str = "distance";
