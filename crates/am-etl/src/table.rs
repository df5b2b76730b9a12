//! In-memory table representation shared by the builders and the
//! persistence layer.

use crate::key::NaturalKey;
use serde_json::Value;
use std::collections::HashMap;

/// A scalar cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// Convert a JSON scalar. Arrays and objects have no cell form.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(Scalar::Null),
            Value::Bool(b) => Some(Scalar::Bool(*b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Scalar::Int(i))
                } else {
                    n.as_f64().map(Scalar::Float)
                }
            }
            Value::String(s) => Some(Scalar::Text(s.clone())),
            _ => None,
        }
    }
}

impl From<NaturalKey> for Scalar {
    fn from(key: NaturalKey) -> Self {
        match key {
            NaturalKey::Int(n) => Scalar::Int(n),
            NaturalKey::Text(s) => Scalar::Text(s),
        }
    }
}

/// A fully-built in-memory table, ready to persist.
///
/// The first column is the table's dense 1-based surrogate key.
#[derive(Debug, Clone)]
pub struct TableData {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Scalar>>,
}

impl TableData {
    pub fn column_position(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// Name of the surrogate-key column.
    pub fn id_column(&self) -> &str {
        &self.columns[0]
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A table a fact-builder role can join against.
///
/// Implemented by [`crate::dimension::Dimension`] and by [`TableData`]
/// itself, so a fact table (customers) can be the target of a later fact's
/// role through the same equality-join machinery dimensions use.
pub trait JoinSource {
    /// Table name, for error messages.
    fn table_name(&self) -> &str;

    /// Build a natural-key to surrogate-id index over `join_key`.
    ///
    /// Returns `None` when the table has no such column; rows whose join
    /// value is not a valid natural key are not indexed.
    fn join_index(&self, join_key: &str) -> Option<HashMap<NaturalKey, i64>>;
}

impl JoinSource for TableData {
    fn table_name(&self) -> &str {
        &self.name
    }

    fn join_index(&self, join_key: &str) -> Option<HashMap<NaturalKey, i64>> {
        let key_pos = self.column_position(join_key)?;

        let mut index = HashMap::with_capacity(self.rows.len());
        for row in &self.rows {
            let Scalar::Int(id) = &row[0] else { continue };
            let key = match &row[key_pos] {
                Scalar::Int(n) => NaturalKey::Int(*n),
                Scalar::Text(s) => NaturalKey::Text(s.clone()),
                _ => continue,
            };
            index.entry(key).or_insert(*id);
        }
        Some(index)
    }
}

#[cfg(test)]
#[path = "table_test.rs"]
mod tests;
