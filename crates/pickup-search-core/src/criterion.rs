// crates/pickup-search-core/src/criterion.rs
use crate::common::FieldId;
use crate::condition::{ConditionKind, FilterValue};
use crate::error::Result;
use crate::registry::FieldRegistry;
use serde::{Deserialize, Serialize};

/// One comparison on one logical field: `field <condition> value`.
///
/// Immutable once built. Construction goes through a [`FieldRegistry`], so a
/// criterion always carries a condition its field allows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriterion {
    field: FieldId,
    value: FilterValue,
    #[serde(rename = "condition_type")]
    condition: ConditionKind,
}

impl FilterCriterion {
    /// Builds a criterion checked against [`FieldRegistry::standard`].
    pub fn new(
        field: FieldId,
        value: impl Into<FilterValue>,
        condition: ConditionKind,
    ) -> Result<Self> {
        FieldRegistry::standard().criterion(field, value, Some(condition))
    }

    pub(crate) fn from_parts(field: FieldId, value: FilterValue, condition: ConditionKind) -> Self {
        Self {
            field,
            value,
            condition,
        }
    }

    pub fn field(&self) -> FieldId {
        self.field
    }

    pub fn value(&self) -> &FilterValue {
        &self.value
    }

    pub fn condition_type(&self) -> ConditionKind {
        self.condition
    }
}
