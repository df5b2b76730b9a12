//! Dimension builders.
//!
//! A dimension is a small reference table: one denormalized attribute column
//! extracted from a batch of flat records, deduplicated, sorted, and given a
//! dense 1-based surrogate key. A dependent dimension additionally resolves
//! each record's parent natural key against an already-built parent
//! dimension and carries the parent's surrogate id as a foreign key.

use crate::error::{EtlError, EtlResult};
use crate::key::{record_summary, AttributePath, NaturalKey};
use crate::table::{JoinSource, Scalar, TableData};
use serde_json::Value;
use std::collections::{BTreeSet, HashMap};

/// Declaration of a dimension: target naming plus extraction behavior.
#[derive(Debug, Clone)]
pub struct DimensionSpec {
    /// Target table name, e.g. "makes"
    pub table: &'static str,
    /// Surrogate-key column name, e.g. "make_id"
    pub id_column: &'static str,
    /// Natural-key column name, e.g. "make_name"
    pub key_column: &'static str,
    /// Dotted attribute path extracted from each record
    pub attribute: &'static str,
    /// Deduplicate extracted values (the common case)
    pub unique: bool,
    /// Lowercase extracted text values (enum-like attributes)
    pub fold_case: bool,
}

/// A built dimension table. Immutable for the duration of a run.
#[derive(Debug, Clone)]
pub struct Dimension {
    pub table: String,
    pub id_column: String,
    pub key_column: String,
    /// Foreign-key column name, set for dependent dimensions
    pub parent_column: Option<String>,
    pub rows: Vec<DimensionRow>,
}

/// One dimension row: dense id, natural key, optional parent id.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionRow {
    pub id: i64,
    pub key: NaturalKey,
    pub parent_id: Option<i64>,
}

/// Build an independent dimension from flat records.
///
/// Deterministic for a given input: extract, optionally deduplicate, sort by
/// the keys' natural ordering, assign ids `1..=N`. Pure function.
pub fn build_dimension(records: &[Value], spec: &DimensionSpec) -> EtlResult<Dimension> {
    let path = AttributePath::new(spec.attribute);

    let mut keys = Vec::new();
    for record in records {
        keys.extend(path.extract_keys(record, spec.fold_case)?);
    }

    if spec.unique {
        let deduped: BTreeSet<NaturalKey> = keys.into_iter().collect();
        keys = deduped.into_iter().collect();
    } else {
        keys.sort();
    }

    if keys.is_empty() {
        return Err(EtlError::EmptyInput {
            attribute: spec.attribute.to_string(),
        });
    }

    let rows: Vec<DimensionRow> = keys
        .into_iter()
        .enumerate()
        .map(|(i, key)| DimensionRow {
            id: i as i64 + 1,
            key,
            parent_id: None,
        })
        .collect();

    log::debug!("Built dimension '{}' ({} rows)", spec.table, rows.len());
    Ok(Dimension {
        table: spec.table.to_string(),
        id_column: spec.id_column.to_string(),
        key_column: spec.key_column.to_string(),
        parent_column: None,
        rows,
    })
}

/// Build a dimension whose rows reference a parent dimension.
///
/// Each record's `parent_attribute` is resolved against the parent's natural
/// key; a miss is an [`EtlError::UnresolvedReference`] carrying the source
/// record. Ids are assigned after the join, in ascending parent-id order
/// with ties broken by the child key, so the output is stable.
pub fn build_dependent_dimension(
    records: &[Value],
    spec: &DimensionSpec,
    parent: &Dimension,
    parent_attribute: &str,
) -> EtlResult<Dimension> {
    let child_path = AttributePath::new(spec.attribute);
    let parent_path = AttributePath::new(parent_attribute);
    let parent_index = parent
        .join_index(&parent.key_column)
        .unwrap_or_default();

    let mut pairs: Vec<(i64, NaturalKey)> = Vec::new();
    for record in records {
        let parent_key = parent_path.extract_key(record, false)?;
        let parent_id = *parent_index.get(&parent_key).ok_or_else(|| {
            EtlError::UnresolvedReference {
                role: parent.table.clone(),
                value: parent_key.to_string(),
                record: record_summary(record),
            }
        })?;

        for child_key in child_path.extract_keys(record, spec.fold_case)? {
            pairs.push((parent_id, child_key));
        }
    }

    if spec.unique {
        let deduped: BTreeSet<(i64, NaturalKey)> = pairs.into_iter().collect();
        pairs = deduped.into_iter().collect();
    } else {
        pairs.sort();
    }

    if pairs.is_empty() {
        return Err(EtlError::EmptyInput {
            attribute: spec.attribute.to_string(),
        });
    }

    let rows: Vec<DimensionRow> = pairs
        .into_iter()
        .enumerate()
        .map(|(i, (parent_id, key))| DimensionRow {
            id: i as i64 + 1,
            key,
            parent_id: Some(parent_id),
        })
        .collect();

    log::debug!(
        "Built dependent dimension '{}' referencing '{}' ({} rows)",
        spec.table,
        parent.table,
        rows.len()
    );
    Ok(Dimension {
        table: spec.table.to_string(),
        id_column: spec.id_column.to_string(),
        key_column: spec.key_column.to_string(),
        parent_column: Some(parent.id_column.clone()),
        rows,
    })
}

impl Dimension {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Flatten into the persistable table shape: id column, key column,
    /// then the parent foreign key for dependent dimensions.
    pub fn to_table(&self) -> TableData {
        let mut columns = vec![self.id_column.clone(), self.key_column.clone()];
        if let Some(parent_column) = &self.parent_column {
            columns.push(parent_column.clone());
        }

        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut cells = vec![Scalar::Int(row.id), Scalar::from(row.key.clone())];
                if self.parent_column.is_some() {
                    // parent_id is always Some for dependent dimensions
                    cells.push(Scalar::Int(row.parent_id.unwrap_or_default()));
                }
                cells
            })
            .collect();

        TableData {
            name: self.table.clone(),
            columns,
            rows,
        }
    }
}

impl JoinSource for Dimension {
    fn table_name(&self) -> &str {
        &self.table
    }

    fn join_index(&self, join_key: &str) -> Option<HashMap<NaturalKey, i64>> {
        if join_key == self.key_column {
            Some(
                self.rows
                    .iter()
                    .map(|row| (row.key.clone(), row.id))
                    .collect(),
            )
        } else if join_key == self.id_column {
            Some(
                self.rows
                    .iter()
                    .map(|row| (NaturalKey::Int(row.id), row.id))
                    .collect(),
            )
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "dimension_test.rs"]
mod tests;
