// crates/pickup-search-core/src/model/sort.rs
use crate::error::{Result, SearchRequestError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = SearchRequestError;

    /// Accepts `asc` / `desc` in any case.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            d if d.eq_ignore_ascii_case("asc") => Ok(SortDirection::Asc),
            d if d.eq_ignore_ascii_case("desc") => Ok(SortDirection::Desc),
            _ => Err(SearchRequestError::InvalidSortDirection(s.to_string())),
        }
    }
}

/// One ordering key. A request holds these in priority order.
///
/// `field` is a wire name such as [`crate::common::CITY`] or
/// [`crate::common::DISTANCE`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortOrder {
    field: String,
    direction: SortDirection,
}

impl SortOrder {
    pub fn builder() -> SortOrderBuilder {
        SortOrderBuilder::new()
    }

    pub fn asc(field: impl Into<String>) -> Result<Self> {
        Self::builder().field(field).ascending().build()
    }

    pub fn desc(field: impl Into<String>) -> Result<Self> {
        Self::builder().field(field).descending().build()
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.field.trim().is_empty() {
            return Err(SearchRequestError::MissingSortField);
        }
        Ok(())
    }
}

/// Builder for a single [`SortOrder`]. Direction defaults to ascending.
#[derive(Debug, Clone, Default)]
pub struct SortOrderBuilder {
    field: Option<String>,
    direction: SortDirection,
}

impl SortOrderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn direction(mut self, direction: SortDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn ascending(self) -> Self {
        self.direction(SortDirection::Asc)
    }

    pub fn descending(self) -> Self {
        self.direction(SortDirection::Desc)
    }

    pub fn build(self) -> Result<SortOrder> {
        let order = SortOrder {
            field: self.field.ok_or(SearchRequestError::MissingSortField)?,
            direction: self.direction,
        };
        order.validate()?;
        Ok(order)
    }
}
