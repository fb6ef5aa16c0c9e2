// crates/pickup-search-core/src/wire.rs

//! # Wire Encoding
//!
//! Hands compiled requests to the execution engine as JSON (`json`) or as a
//! bincode payload (`compact`). Decoding re-validates against a registry
//! (the standard one unless a `*_with` form names another), so a decoded
//! request holds the same guarantees as a built one.

#[cfg(any(feature = "json", feature = "compact"))]
use crate::error::Result;
#[cfg(any(feature = "json", feature = "compact"))]
use crate::model::SearchRequest;
#[cfg(any(feature = "json", feature = "compact"))]
use crate::registry::FieldRegistry;

#[cfg(feature = "json")]
impl SearchRequest {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_json_with(json, FieldRegistry::standard())
    }

    /// Decodes a request compiled against `registry`.
    pub fn from_json_with(json: &str, registry: &FieldRegistry) -> Result<Self> {
        let request: SearchRequest = serde_json::from_str(json)?;
        request.validate(registry)?;
        Ok(request)
    }
}

#[cfg(feature = "compact")]
impl SearchRequest {
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes_with(bytes, FieldRegistry::standard())
    }

    /// Decodes a request compiled against `registry`.
    pub fn from_bytes_with(bytes: &[u8], registry: &FieldRegistry) -> Result<Self> {
        let request: SearchRequest = bincode::deserialize(bytes)?;
        request.validate(registry)?;
        Ok(request)
    }
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use crate::common::FieldId;
    use crate::condition::ConditionKind;
    use crate::error::SearchRequestError;
    use crate::registry::{FieldRegistry, FieldRule};
    use crate::SearchRequestBuilder;

    fn minimal() -> SearchRequestBuilder<'static> {
        let mut builder = SearchRequestBuilder::new();
        complete(&mut builder);
        builder
    }

    fn complete(builder: &mut SearchRequestBuilder<'_>) {
        builder
            .set_scope_code("default_website")
            .set_scope_type("website")
            .set_page_size(20)
            .unwrap()
            .set_current_page(1)
            .unwrap();
    }

    fn permissive() -> FieldRegistry {
        FieldRegistry::new(
            FieldId::ALL
                .into_iter()
                .map(|f| (f, FieldRule::new(ConditionKind::ALL, ConditionKind::Eq))),
        )
        .unwrap()
    }

    #[test]
    fn json_uses_engine_field_names() {
        let mut builder = minimal();
        builder
            .set_address_country_filter("U", ConditionKind::FullText)
            .unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&builder.create().unwrap().to_json().unwrap()).unwrap();

        assert_eq!(json["scope"]["code"], "default_website");
        assert_eq!(json["scope"]["type"], "website");
        assert_eq!(json["pagination"]["page_size"], 20);
        assert_eq!(json["address_filter"]["country"]["field"], "country_id");
        assert_eq!(
            json["address_filter"]["country"]["condition_type"],
            "fulltext"
        );
        assert_eq!(json["address_filter"]["country"]["value"]["text"], "U");
        assert!(json["address_filter"]["street"].is_null());
        assert!(json["distance_filter"].is_null());
    }

    #[test]
    fn decoding_rechecks_the_registry() {
        let mut builder = minimal();
        builder.set_address_region_id_filter("14", None).unwrap();
        let json = builder
            .create()
            .unwrap()
            .to_json()
            .unwrap()
            .replace("\"eq\"", "\"like\"");
        assert!(matches!(
            crate::SearchRequest::from_json(&json),
            Err(SearchRequestError::InvalidCondition { .. })
        ));
    }

    #[test]
    fn decoding_rejects_zero_page_size() {
        let json = minimal()
            .create()
            .unwrap()
            .to_json()
            .unwrap()
            .replace("\"page_size\":20", "\"page_size\":0");
        assert!(matches!(
            crate::SearchRequest::from_json(&json),
            Err(SearchRequestError::InvalidPagination { .. })
        ));
    }

    #[test]
    fn custom_registry_requests_decode_with_that_registry() {
        let registry = permissive();
        let mut builder = SearchRequestBuilder::with_registry(&registry);
        complete(&mut builder);
        builder
            .set_address_region_id_filter("1%", ConditionKind::Like)
            .unwrap();
        let request = builder.create().unwrap();
        let json = request.to_json().unwrap();

        assert_eq!(
            crate::SearchRequest::from_json_with(&json, &registry).unwrap(),
            request
        );
        assert!(matches!(
            crate::SearchRequest::from_json(&json),
            Err(SearchRequestError::InvalidCondition { .. })
        ));
    }

    #[cfg(feature = "compact")]
    #[test]
    fn custom_registry_payload_decodes_with_that_registry() {
        let registry = permissive();
        let mut builder = SearchRequestBuilder::with_registry(&registry);
        complete(&mut builder);
        builder
            .set_address_region_id_filter("1%", ConditionKind::Like)
            .unwrap();
        let request = builder.create().unwrap();
        let bytes = request.to_bytes().unwrap();

        assert_eq!(
            crate::SearchRequest::from_bytes_with(&bytes, &registry).unwrap(),
            request
        );
        assert!(crate::SearchRequest::from_bytes(&bytes).is_err());
    }

    #[cfg(feature = "compact")]
    #[test]
    fn binary_payload_with_zero_page_size_is_rejected() {
        use crate::model::{AddressFilter, Pagination, Scope};

        let request = crate::SearchRequest::from_parts(
            AddressFilter::default(),
            None,
            Scope::new("default_website", "website"),
            None,
            None,
            Vec::new(),
            Pagination::new(0, 1),
        );
        assert!(matches!(
            crate::SearchRequest::from_bytes(&request.to_bytes().unwrap()),
            Err(SearchRequestError::InvalidPagination { what: "page size", .. })
        ));
    }

    #[cfg(feature = "compact")]
    #[test]
    fn truncated_binary_payload_is_rejected() {
        let bytes = minimal().create().unwrap().to_bytes().unwrap();
        assert!(matches!(
            crate::SearchRequest::from_bytes(&bytes[..bytes.len() / 2]),
            Err(SearchRequestError::Bincode(_))
        ));
    }

    #[cfg(feature = "compact")]
    #[test]
    fn binary_payload_decodes_to_same_request() {
        let mut builder = minimal();
        builder
            .set_distance_filter_radius(999)
            .unwrap()
            .set_distance_filter_country("UA");
        let request = builder.create().unwrap();
        let decoded = crate::SearchRequest::from_bytes(&request.to_bytes().unwrap()).unwrap();
        assert_eq!(decoded, request);
    }
}
