//! Natural keys and dotted attribute paths.
//!
//! A natural key is the human-meaningful value a source record is joined or
//! deduplicated by (a make's name, a customer's numeric id). Keys sort by
//! the natural ordering of their type: integers numerically, strings
//! lexically, integers before strings when a column mixes both.

use crate::error::{EtlError, EtlResult};
use serde_json::Value;
use std::fmt;

/// A scalar natural-key value extracted from a source record.
///
/// Variant order defines the cross-type sort order, so the derived `Ord`
/// gives numeric-before-lexical.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NaturalKey {
    Int(i64),
    Text(String),
}

impl NaturalKey {
    /// Convert a JSON scalar to a key. Floats, booleans, nulls, and nested
    /// values are not valid natural keys.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().map(NaturalKey::Int),
            Value::String(s) => Some(NaturalKey::Text(s.clone())),
            _ => None,
        }
    }

    /// Canonical lowercase form, for enum-like attributes (fuel type,
    /// transmission) that are joined case-insensitively.
    pub fn fold_case(self) -> Self {
        match self {
            NaturalKey::Text(s) => NaturalKey::Text(s.to_lowercase()),
            other => other,
        }
    }
}

impl fmt::Display for NaturalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NaturalKey::Int(n) => write!(f, "{n}"),
            NaturalKey::Text(s) => write!(f, "{s}"),
        }
    }
}

/// A dotted attribute path into a record, supporting one level of nesting
/// (`location.county`) and list-valued leaves (`colours`).
#[derive(Debug, Clone)]
pub struct AttributePath {
    raw: String,
    segments: Vec<String>,
}

impl AttributePath {
    pub fn new(path: &str) -> Self {
        Self {
            raw: path.to_string(),
            segments: path.split('.').map(str::to_string).collect(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Walk the path through nested objects. Returns `None` if any segment
    /// is absent or a non-object is traversed.
    pub fn get<'a>(&self, record: &'a Value) -> Option<&'a Value> {
        let mut current = record;
        for segment in &self.segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Extract every key at this path: a list-valued leaf expands to one key
    /// per element, a scalar leaf yields one key.
    pub fn extract_keys(&self, record: &Value, fold_case: bool) -> EtlResult<Vec<NaturalKey>> {
        let value = self
            .get(record)
            .ok_or_else(|| self.missing(record))?;

        let keys = match value {
            Value::Array(items) => items
                .iter()
                .map(|item| NaturalKey::from_value(item).ok_or_else(|| self.missing(record)))
                .collect::<EtlResult<Vec<_>>>()?,
            scalar => vec![NaturalKey::from_value(scalar).ok_or_else(|| self.missing(record))?],
        };

        if fold_case {
            Ok(keys.into_iter().map(NaturalKey::fold_case).collect())
        } else {
            Ok(keys)
        }
    }

    /// Extract exactly one key at this path. List-valued leaves are not
    /// valid join attributes.
    pub fn extract_key(&self, record: &Value, fold_case: bool) -> EtlResult<NaturalKey> {
        let value = self
            .get(record)
            .ok_or_else(|| self.missing(record))?;

        let key = NaturalKey::from_value(value).ok_or_else(|| self.missing(record))?;
        Ok(if fold_case { key.fold_case() } else { key })
    }

    fn missing(&self, record: &Value) -> EtlError {
        EtlError::AttributeMissing {
            attribute: self.as_str().to_string(),
            record: record_summary(record),
        }
    }
}

/// Compact single-line rendering of a source record for error messages.
pub(crate) fn record_summary(record: &Value) -> String {
    let rendered = record.to_string();
    if rendered.chars().count() > 160 {
        let truncated: String = rendered.chars().take(160).collect();
        format!("{truncated}...")
    } else {
        rendered
    }
}

#[cfg(test)]
#[path = "key_test.rs"]
mod tests;
