// crates/pickup-search-core/src/condition.rs
//! Comparison operators and the values they compare against.
use crate::common::FieldId;
use crate::error::{Result, SearchRequestError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The comparison a filter criterion applies.
///
/// Textual names are the lowercase operator names used on the wire
/// (`eq`, `nin`, `fulltext`, `notnull`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionKind {
    Eq,
    Neq,
    In,
    Nin,
    Like,
    FullText,
    Gt,
    GtEq,
    Lt,
    LtEq,
    Null,
    NotNull,
}

impl ConditionKind {
    pub const ALL: [ConditionKind; 12] = [
        ConditionKind::Eq,
        ConditionKind::Neq,
        ConditionKind::In,
        ConditionKind::Nin,
        ConditionKind::Like,
        ConditionKind::FullText,
        ConditionKind::Gt,
        ConditionKind::GtEq,
        ConditionKind::Lt,
        ConditionKind::LtEq,
        ConditionKind::Null,
        ConditionKind::NotNull,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionKind::Eq => "eq",
            ConditionKind::Neq => "neq",
            ConditionKind::In => "in",
            ConditionKind::Nin => "nin",
            ConditionKind::Like => "like",
            ConditionKind::FullText => "fulltext",
            ConditionKind::Gt => "gt",
            ConditionKind::GtEq => "gteq",
            ConditionKind::Lt => "lt",
            ConditionKind::LtEq => "lteq",
            ConditionKind::Null => "null",
            ConditionKind::NotNull => "notnull",
        }
    }

    /// `in` / `nin`: the value is a set of candidates.
    pub fn is_list_like(&self) -> bool {
        matches!(self, ConditionKind::In | ConditionKind::Nin)
    }

    /// `like` / `fulltext`: the value is a pattern or search text.
    pub fn is_textual(&self) -> bool {
        matches!(self, ConditionKind::Like | ConditionKind::FullText)
    }

    /// `null` / `notnull`: the value is carried but never compared.
    pub fn ignores_value(&self) -> bool {
        matches!(self, ConditionKind::Null | ConditionKind::NotNull)
    }
}

impl fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConditionKind {
    type Err = SearchRequestError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| SearchRequestError::InvalidCondition {
                condition: s.to_string(),
                field: None,
            })
    }
}

/// The operand of a filter criterion.
///
/// Delimited text such as `"eu-1,eu-2"` is kept verbatim; the execution
/// engine splits it. [`FilterValue::List`] is the explicit form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterValue {
    Text(String),
    Number(f64),
    List(Vec<String>),
}

impl FilterValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FilterValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FilterValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FilterValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Checks that this value can be the operand of `condition` on `field`.
    ///
    /// List-like conditions only require at least one non-blank item; the
    /// items themselves are not inspected. Non-finite numbers never pass,
    /// since JSON has no way to carry them.
    pub fn check_shape(&self, field: FieldId, condition: ConditionKind) -> Result<()> {
        let reason = match (condition, self) {
            (_, FilterValue::Number(n)) if !n.is_finite() => Some("number is not finite"),
            (c, _) if c.ignores_value() => None,
            (c, FilterValue::List(items)) if c.is_list_like() => items
                .iter()
                .all(|i| i.trim().is_empty())
                .then_some("list has no items"),
            (c, FilterValue::Text(s)) if c.is_list_like() => s
                .split(',')
                .all(|i| i.trim().is_empty())
                .then_some("delimited list has no items"),
            (c, FilterValue::Number(_)) if c.is_list_like() => Some("expected a list of values"),
            (c, FilterValue::Text(s)) if c.is_textual() => {
                s.is_empty().then_some("pattern is empty")
            }
            (c, _) if c.is_textual() => Some("expected a text pattern"),
            (_, FilterValue::List(_)) => Some("expected a single value, got a list"),
            _ => None,
        };

        match reason {
            Some(reason) => Err(SearchRequestError::InvalidValueShape {
                field,
                condition: condition.to_string(),
                reason: reason.to_string(),
            }),
            None => Ok(()),
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Text(s) => f.write_str(s),
            FilterValue::Number(n) => write!(f, "{n}"),
            FilterValue::List(items) => f.write_str(&items.join(",")),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        FilterValue::Number(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Number(value as f64)
    }
}

impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        FilterValue::Number(f64::from(value))
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(value: Vec<String>) -> Self {
        FilterValue::List(value)
    }
}

impl From<Vec<&str>> for FilterValue {
    fn from(value: Vec<&str>) -> Self {
        FilterValue::List(value.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for FilterValue {
    fn from(value: &[&str]) -> Self {
        FilterValue::List(value.iter().map(|s| s.to_string()).collect())
    }
}
