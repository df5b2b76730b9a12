//! Fact table builder.
//!
//! A fact row is one source record with every natural-key attribute replaced
//! by the surrogate id of the matching dimension row, plus its scalar
//! attributes copied verbatim. Facts are never deduplicated or reordered:
//! row order carries the source's referential semantics, so ids `1..=N`
//! follow input order exactly.

use crate::error::{EtlError, EtlResult};
use crate::key::{record_summary, AttributePath, NaturalKey};
use crate::table::{JoinSource, Scalar, TableData};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// A declared foreign-key role: which record attribute joins which table.
#[derive(Debug, Clone)]
pub struct FactRole {
    /// Logical role name, e.g. "model" (also the key into the refs map)
    pub role: &'static str,
    /// Dotted attribute path on the source record
    pub attribute: &'static str,
    /// Output foreign-key column, e.g. "model_id"
    pub column: &'static str,
    /// Lowercase the record value before the join
    pub fold_case: bool,
}

/// A scalar attribute copied through to the fact table.
#[derive(Debug, Clone)]
pub struct ScalarColumn {
    pub column: &'static str,
    pub attribute: &'static str,
    /// Lowercase text values (enum-like strings)
    pub fold_case: bool,
}

/// Declaration of a fact table.
#[derive(Debug, Clone)]
pub struct FactSpec {
    pub table: &'static str,
    pub id_column: &'static str,
    pub roles: Vec<FactRole>,
    pub scalars: Vec<ScalarColumn>,
}

/// A role's join target: a table and the column to join on.
pub struct DimensionRef<'a> {
    pub source: &'a dyn JoinSource,
    pub join_key: &'a str,
}

/// Build a fact table by joining every declared role and copying scalars.
///
/// All refs are validated before any join is attempted: a role without a
/// supplied table, or a join key the table does not have, is a
/// [`EtlError::SchemaMismatch`]. A record whose join value has no match is
/// an [`EtlError::UnresolvedReference`] naming the role and the value.
pub fn build_fact_table(
    records: &[Value],
    spec: &FactSpec,
    refs: &BTreeMap<&str, DimensionRef<'_>>,
) -> EtlResult<TableData> {
    // Resolve and validate every role eagerly, before touching any record.
    let mut joins: Vec<(AttributePath, &FactRole, HashMap<NaturalKey, i64>)> =
        Vec::with_capacity(spec.roles.len());
    for role in &spec.roles {
        let dim_ref = refs.get(role.role).ok_or_else(|| EtlError::SchemaMismatch {
            role: role.role.to_string(),
            reason: "no table supplied for role".to_string(),
        })?;
        let index = dim_ref
            .source
            .join_index(dim_ref.join_key)
            .ok_or_else(|| EtlError::SchemaMismatch {
                role: role.role.to_string(),
                reason: format!(
                    "table '{}' has no join column '{}'",
                    dim_ref.source.table_name(),
                    dim_ref.join_key
                ),
            })?;
        joins.push((AttributePath::new(role.attribute), role, index));
    }

    let scalar_paths: Vec<(AttributePath, &ScalarColumn)> = spec
        .scalars
        .iter()
        .map(|scalar| (AttributePath::new(scalar.attribute), scalar))
        .collect();

    let mut columns = vec![spec.id_column.to_string()];
    columns.extend(spec.roles.iter().map(|r| r.column.to_string()));
    columns.extend(spec.scalars.iter().map(|s| s.column.to_string()));

    let mut rows = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        let mut cells = Vec::with_capacity(columns.len());
        cells.push(Scalar::Int(i as i64 + 1));

        for (path, role, index) in &joins {
            let key = path.extract_key(record, role.fold_case)?;
            let id = *index
                .get(&key)
                .ok_or_else(|| EtlError::UnresolvedReference {
                    role: role.role.to_string(),
                    value: key.to_string(),
                    record: record_summary(record),
                })?;
            cells.push(Scalar::Int(id));
        }

        for (path, scalar) in &scalar_paths {
            let value = path.get(record).ok_or_else(|| EtlError::AttributeMissing {
                attribute: scalar.attribute.to_string(),
                record: record_summary(record),
            })?;
            let mut cell = Scalar::from_json(value).ok_or_else(|| EtlError::AttributeMissing {
                attribute: scalar.attribute.to_string(),
                record: record_summary(record),
            })?;
            if scalar.fold_case {
                if let Scalar::Text(s) = cell {
                    cell = Scalar::Text(s.to_lowercase());
                }
            }
            cells.push(cell);
        }

        rows.push(cells);
    }

    log::debug!("Built fact table '{}' ({} rows)", spec.table, rows.len());
    Ok(TableData {
        name: spec.table.to_string(),
        columns,
        rows,
    })
}

#[cfg(test)]
#[path = "fact_test.rs"]
mod tests;
