// crates/pickup-search-core/src/model/distance.rs
use crate::error::{Result, SearchRequestError};
use serde::{Deserialize, Serialize};

/// Geo-proximity constraint: locations within `radius` km of an anchor.
///
/// The anchor is resolved by the execution engine from the administrative
/// hints. `country` is always present and non-blank; the narrower hints are
/// optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceFilter {
    radius: u32,
    country: String,
    region: Option<String>,
    city: Option<String>,
    postcode: Option<String>,
}

impl DistanceFilter {
    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn postcode(&self) -> Option<&str> {
        self.postcode.as_deref()
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.radius == 0 {
            return Err(SearchRequestError::InvalidRadius);
        }
        if self.country.trim().is_empty() {
            return Err(SearchRequestError::MissingDistanceAnchor);
        }
        Ok(())
    }
}

/// In-progress distance settings held by the builder.
///
/// Nothing is cross-checked until [`DistanceDraft::compile`].
#[derive(Debug, Clone, Default)]
pub(crate) struct DistanceDraft {
    pub(crate) radius: Option<u32>,
    pub(crate) country: Option<String>,
    pub(crate) region: Option<String>,
    pub(crate) city: Option<String>,
    pub(crate) postcode: Option<String>,
}

impl DistanceDraft {
    /// `radius` activates the filter. Without it the anchor hints are
    /// dropped; with it, a non-blank country is required.
    pub(crate) fn compile(&self) -> Result<Option<DistanceFilter>> {
        let Some(radius) = self.radius else {
            return Ok(None);
        };
        let country = self
            .country
            .clone()
            .filter(|c| !c.trim().is_empty())
            .ok_or(SearchRequestError::MissingDistanceAnchor)?;
        Ok(Some(DistanceFilter {
            radius,
            country,
            region: self.region.clone(),
            city: self.city.clone(),
            postcode: self.postcode.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_radius_means_no_filter() {
        let draft = DistanceDraft {
            country: Some("UA".into()),
            city: Some("Kyiv".into()),
            ..Default::default()
        };
        assert_eq!(draft.compile().unwrap(), None);
    }

    #[test]
    fn radius_keeps_only_supplied_hints() {
        let draft = DistanceDraft {
            radius: Some(15),
            country: Some("UA".into()),
            postcode: Some("100011".into()),
            ..Default::default()
        };
        let filter = draft.compile().unwrap().unwrap();
        assert_eq!(filter.radius(), 15);
        assert_eq!(filter.country(), "UA");
        assert_eq!(filter.postcode(), Some("100011"));
        assert_eq!(filter.city(), None);
        assert_eq!(filter.region(), None);
    }

    #[test]
    fn radius_without_country_has_no_anchor() {
        let draft = DistanceDraft {
            radius: Some(5),
            city: Some("Kyiv".into()),
            ..Default::default()
        };
        assert!(matches!(
            draft.compile(),
            Err(SearchRequestError::MissingDistanceAnchor)
        ));
    }

    #[test]
    fn blank_country_is_no_anchor() {
        for country in ["", "  "] {
            let draft = DistanceDraft {
                radius: Some(5),
                country: Some(country.into()),
                ..Default::default()
            };
            assert!(matches!(
                draft.compile(),
                Err(SearchRequestError::MissingDistanceAnchor)
            ));
        }
    }

    #[test]
    fn decoded_filter_with_blank_country_fails_validation() {
        let filter = DistanceFilter {
            radius: 5,
            country: String::new(),
            region: None,
            city: None,
            postcode: None,
        };
        assert!(matches!(
            filter.validate(),
            Err(SearchRequestError::MissingDistanceAnchor)
        ));
    }
}
