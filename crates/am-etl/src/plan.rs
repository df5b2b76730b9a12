//! The concrete car-sales build plan.
//!
//! Wires the builders into the fixed nine-table schema and returns the
//! built tables in dependency order (referenced tables before referencing
//! ones), ready for single-transaction persistence.

use crate::dimension::{build_dependent_dimension, build_dimension, DimensionSpec};
use crate::error::EtlResult;
use crate::fact::{build_fact_table, DimensionRef, FactRole, FactSpec, ScalarColumn};
use crate::table::TableData;
use am_core::Fixtures;
use std::collections::BTreeMap;

/// Schema tables in dependency order: independent dimensions, then
/// dependent dimensions, then the tables that reference them.
pub const TABLE_ORDER: [&str; 9] = [
    "makes",
    "colours",
    "fuel_types",
    "transmissions",
    "counties",
    "models",
    "towns",
    "customers",
    "cars_for_sale",
];

const MAKES: DimensionSpec = DimensionSpec {
    table: "makes",
    id_column: "make_id",
    key_column: "make_name",
    attribute: "make",
    unique: true,
    fold_case: false,
};

const COLOURS: DimensionSpec = DimensionSpec {
    table: "colours",
    id_column: "colour_id",
    key_column: "colour_name",
    attribute: "colours",
    unique: true,
    fold_case: false,
};

const FUEL_TYPES: DimensionSpec = DimensionSpec {
    table: "fuel_types",
    id_column: "fuel_type_id",
    key_column: "fuel_type",
    attribute: "fuel_types",
    unique: true,
    fold_case: true,
};

const TRANSMISSIONS: DimensionSpec = DimensionSpec {
    table: "transmissions",
    id_column: "transmission_id",
    key_column: "transmission_type",
    attribute: "transmissions",
    unique: true,
    fold_case: true,
};

const COUNTIES: DimensionSpec = DimensionSpec {
    table: "counties",
    id_column: "county_id",
    key_column: "county_name",
    attribute: "location.county",
    unique: true,
    fold_case: false,
};

const MODELS: DimensionSpec = DimensionSpec {
    table: "models",
    id_column: "model_id",
    key_column: "model_name",
    attribute: "model",
    unique: true,
    fold_case: false,
};

const TOWNS: DimensionSpec = DimensionSpec {
    table: "towns",
    id_column: "town_id",
    key_column: "town_name",
    attribute: "location.town",
    unique: true,
    fold_case: false,
};

fn customers_spec() -> FactSpec {
    FactSpec {
        table: "customers",
        id_column: "customer_id",
        roles: vec![FactRole {
            role: "town",
            attribute: "location.town",
            column: "town_id",
            fold_case: false,
        }],
        scalars: vec![
            ScalarColumn {
                column: "first_name",
                attribute: "first_name",
                fold_case: false,
            },
            ScalarColumn {
                column: "last_name",
                attribute: "last_name",
                fold_case: false,
            },
        ],
    }
}

fn cars_for_sale_spec() -> FactSpec {
    FactSpec {
        table: "cars_for_sale",
        id_column: "car_id",
        roles: vec![
            FactRole {
                role: "make",
                attribute: "make",
                column: "make_id",
                fold_case: false,
            },
            FactRole {
                role: "model",
                attribute: "model",
                column: "model_id",
                fold_case: false,
            },
            FactRole {
                role: "colour",
                attribute: "color",
                column: "colour_id",
                fold_case: false,
            },
            FactRole {
                role: "fuel_type",
                attribute: "fuel_type",
                column: "fuel_type_id",
                fold_case: true,
            },
            FactRole {
                role: "transmission",
                attribute: "transmission",
                column: "transmission_id",
                fold_case: true,
            },
            FactRole {
                role: "customer",
                attribute: "customer_id",
                column: "customer_id",
                fold_case: false,
            },
        ],
        scalars: vec![
            ScalarColumn {
                column: "year",
                attribute: "year",
                fold_case: false,
            },
            ScalarColumn {
                column: "price",
                attribute: "price",
                fold_case: false,
            },
            ScalarColumn {
                column: "mileage",
                attribute: "mileage",
                fold_case: false,
            },
            ScalarColumn {
                column: "description",
                attribute: "description",
                fold_case: false,
            },
        ],
    }
}

/// Build every schema table from the loaded fixtures.
///
/// Pure over its input: the returned tables depend only on the fixture
/// records, in [`TABLE_ORDER`].
pub fn build_schema(fixtures: &Fixtures) -> EtlResult<Vec<TableData>> {
    // Independent dimensions
    let makes = build_dimension(&fixtures.cars, &MAKES)?;
    let colours = build_dimension(&fixtures.cars, &COLOURS)?;
    let fuel_types = build_dimension(&fixtures.cars, &FUEL_TYPES)?;
    let transmissions = build_dimension(&fixtures.cars, &TRANSMISSIONS)?;
    let counties = build_dimension(&fixtures.customers, &COUNTIES)?;

    // Dependent dimensions
    let models = build_dependent_dimension(&fixtures.cars, &MODELS, &makes, "make")?;
    let towns =
        build_dependent_dimension(&fixtures.customers, &TOWNS, &counties, "location.county")?;

    // Customers: fact-built (input-ordered ids, scalars, town foreign key)
    let customer_refs = BTreeMap::from([(
        "town",
        DimensionRef {
            source: &towns,
            join_key: "town_name",
        },
    )]);
    let customers = build_fact_table(&fixtures.customers, &customers_spec(), &customer_refs)?;

    // Car listings: every role joins a dimension, except "customer" which
    // joins the customers table by its id column.
    let listing_refs = BTreeMap::from([
        (
            "make",
            DimensionRef {
                source: &makes,
                join_key: "make_name",
            },
        ),
        (
            "model",
            DimensionRef {
                source: &models,
                join_key: "model_name",
            },
        ),
        (
            "colour",
            DimensionRef {
                source: &colours,
                join_key: "colour_name",
            },
        ),
        (
            "fuel_type",
            DimensionRef {
                source: &fuel_types,
                join_key: "fuel_type",
            },
        ),
        (
            "transmission",
            DimensionRef {
                source: &transmissions,
                join_key: "transmission_type",
            },
        ),
        (
            "customer",
            DimensionRef {
                source: &customers,
                join_key: "customer_id",
            },
        ),
    ]);
    let cars_for_sale =
        build_fact_table(&fixtures.listings, &cars_for_sale_spec(), &listing_refs)?;

    Ok(vec![
        makes.to_table(),
        colours.to_table(),
        fuel_types.to_table(),
        transmissions.to_table(),
        counties.to_table(),
        models.to_table(),
        towns.to_table(),
        customers,
        cars_for_sale,
    ])
}

#[cfg(test)]
#[path = "plan_test.rs"]
mod tests;
