// crates/pickup-search-core/src/registry.rs

//! # Field Registry
//!
//! Declares, per logical field, which condition kinds are legal and which
//! condition a setter applies when the caller does not name one.
//!
//! The standard registry is built once per process. Alternative registries
//! can be loaded from a JSON document (feature `json`):
//!
//! ```json
//! { "fields": { "street": { "allowed": ["eq", "like"], "default": "eq" }, ... } }
//! ```

use crate::common::FieldId;
use crate::condition::{ConditionKind, FilterValue};
use crate::criterion::FilterCriterion;
use crate::error::{Result, SearchRequestError};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[cfg(feature = "json")]
use std::fs::File;
#[cfg(feature = "json")]
use std::io::{BufReader, Read};
#[cfg(feature = "json")]
use std::path::Path;

static STANDARD_REGISTRY: Lazy<FieldRegistry> = Lazy::new(FieldRegistry::build_standard);

/// Allowed conditions and the default condition for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    allowed: Vec<ConditionKind>,
    #[serde(rename = "default")]
    default_condition: ConditionKind,
}

impl FieldRule {
    pub fn new(allowed: impl IntoIterator<Item = ConditionKind>, default: ConditionKind) -> Self {
        Self {
            allowed: allowed.into_iter().collect(),
            default_condition: default,
        }
    }

    pub fn allowed(&self) -> &[ConditionKind] {
        &self.allowed
    }

    pub fn default_condition(&self) -> ConditionKind {
        self.default_condition
    }

    pub fn allows(&self, condition: ConditionKind) -> bool {
        self.allowed.contains(&condition)
    }
}

/// Raw registry document as it comes from JSON.
#[cfg(feature = "json")]
#[derive(Debug, Serialize, Deserialize)]
struct RegistryDocument {
    fields: BTreeMap<FieldId, FieldRule>,
}

/// Lookup table `FieldId -> FieldRule`.
///
/// A registry always declares every [`FieldId`], and every default is one of
/// its field's allowed conditions. Both are checked on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRegistry {
    rules: BTreeMap<FieldId, FieldRule>,
}

impl FieldRegistry {
    /// The process-wide default registry.
    ///
    /// Text fields accept every condition kind. `region_id` holds numeric
    /// identifiers and rejects `like` and `fulltext`. Every field defaults
    /// to `eq`.
    pub fn standard() -> &'static FieldRegistry {
        &STANDARD_REGISTRY
    }

    fn build_standard() -> Self {
        let text = FieldRule::new(ConditionKind::ALL, ConditionKind::Eq);
        let identifier = FieldRule::new(
            ConditionKind::ALL.into_iter().filter(|c| !c.is_textual()),
            ConditionKind::Eq,
        );
        let rules = FieldId::ALL
            .into_iter()
            .map(|field| match field {
                FieldId::RegionId => (field, identifier.clone()),
                _ => (field, text.clone()),
            })
            .collect();
        Self { rules }
    }

    pub fn new(rules: impl IntoIterator<Item = (FieldId, FieldRule)>) -> Result<Self> {
        let rules: BTreeMap<_, _> = rules.into_iter().collect();
        for field in FieldId::ALL {
            let rule = rules.get(&field).ok_or_else(|| {
                SearchRequestError::InvalidRegistry(format!("field '{field}' is not declared"))
            })?;
            if rule.allowed.is_empty() {
                return Err(SearchRequestError::InvalidRegistry(format!(
                    "field '{field}' allows no condition"
                )));
            }
            if !rule.allows(rule.default_condition) {
                return Err(SearchRequestError::InvalidRegistry(format!(
                    "default condition '{}' of field '{field}' is not allowed for it",
                    rule.default_condition
                )));
            }
        }
        Ok(Self { rules })
    }

    pub fn rule(&self, field: FieldId) -> Result<&FieldRule> {
        self.rules.get(&field).ok_or_else(|| {
            SearchRequestError::InvalidRegistry(format!("field '{field}' is not declared"))
        })
    }

    pub fn default_condition(&self, field: FieldId) -> Result<ConditionKind> {
        Ok(self.rule(field)?.default_condition)
    }

    /// Fails with [`SearchRequestError::InvalidCondition`] unless `condition`
    /// is allowed for `field`.
    pub fn check(&self, field: FieldId, condition: ConditionKind) -> Result<()> {
        if self.rule(field)?.allows(condition) {
            Ok(())
        } else {
            Err(SearchRequestError::InvalidCondition {
                condition: condition.to_string(),
                field: Some(field),
            })
        }
    }

    /// Validates and builds a criterion. `None` applies the field's default.
    pub fn criterion(
        &self,
        field: FieldId,
        value: impl Into<FilterValue>,
        condition: Option<ConditionKind>,
    ) -> Result<FilterCriterion> {
        let condition = match condition {
            Some(c) => c,
            None => self.default_condition(field)?,
        };
        self.check(field, condition)?;
        let value = value.into();
        value.check_shape(field, condition)?;
        Ok(FilterCriterion::from_parts(field, value, condition))
    }

    /// Re-checks a criterion built elsewhere, e.g. one decoded from the wire.
    pub fn validate(&self, criterion: &FilterCriterion) -> Result<()> {
        self.check(criterion.field(), criterion.condition_type())?;
        criterion
            .value()
            .check_shape(criterion.field(), criterion.condition_type())
    }

    // -----------------------------------------------------------------------
    // JSON CONFIGURATION
    // -----------------------------------------------------------------------

    #[cfg(feature = "json")]
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let doc: RegistryDocument = serde_json::from_reader(reader)?;
        Self::new(doc.fields)
    }

    #[cfg(feature = "json")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let doc: RegistryDocument = serde_json::from_str(json)?;
        Self::new(doc.fields)
    }

    #[cfg(feature = "json")]
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            SearchRequestError::NotFound(format!(
                "Field registry not found at {}: {}",
                path.display(),
                e
            ))
        })?;
        let registry = Self::from_reader(BufReader::new(file))?;
        tracing::debug!(path = %path.display(), "loaded field registry");
        Ok(registry)
    }

    #[cfg(feature = "json")]
    pub fn to_json_pretty(&self) -> Result<String> {
        let doc = RegistryDocument {
            fields: self.rules.clone(),
        };
        Ok(serde_json::to_string_pretty(&doc)?)
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::standard().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_defaults_to_eq() {
        let registry = FieldRegistry::standard();
        for field in FieldId::ALL {
            assert_eq!(registry.default_condition(field).unwrap(), ConditionKind::Eq);
        }
    }

    #[test]
    fn region_id_rejects_pattern_conditions() {
        let registry = FieldRegistry::standard();
        for c in [ConditionKind::Like, ConditionKind::FullText] {
            let err = registry.check(FieldId::RegionId, c).unwrap_err();
            assert!(matches!(
                err,
                SearchRequestError::InvalidCondition { field: Some(FieldId::RegionId), .. }
            ));
        }
        assert!(registry.check(FieldId::RegionId, ConditionKind::Nin).is_ok());
        assert!(registry.check(FieldId::Country, ConditionKind::FullText).is_ok());
    }

    #[test]
    fn criterion_applies_default_condition() {
        let c = FieldRegistry::standard()
            .criterion(FieldId::City, "Kyiv", None)
            .unwrap();
        assert_eq!(c.condition_type(), ConditionKind::Eq);
        assert_eq!(c.value().as_text(), Some("Kyiv"));
    }

    #[test]
    fn incomplete_registry_is_rejected() {
        let err = FieldRegistry::new([(
            FieldId::Street,
            FieldRule::new([ConditionKind::Eq], ConditionKind::Eq),
        )])
        .unwrap_err();
        assert!(matches!(err, SearchRequestError::InvalidRegistry(_)));
    }

    #[test]
    fn default_must_be_allowed() {
        let rules = FieldId::ALL.into_iter().map(|f| {
            (
                f,
                FieldRule::new([ConditionKind::Like], ConditionKind::Eq),
            )
        });
        assert!(matches!(
            FieldRegistry::new(rules),
            Err(SearchRequestError::InvalidRegistry(_))
        ));
    }

    #[cfg(feature = "json")]
    #[test]
    fn standard_registry_survives_json() {
        let json = FieldRegistry::standard().to_json_pretty().unwrap();
        assert!(json.contains("\"country_id\""));
        let parsed = FieldRegistry::from_json_str(&json).unwrap();
        assert_eq!(&parsed, FieldRegistry::standard());
    }
}
