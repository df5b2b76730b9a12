use super::*;
use crate::table::{JoinSource, Scalar};
use am_core::Fixtures;
use serde_json::json;

fn fixtures() -> Fixtures {
    Fixtures {
        cars: vec![
            json!({
                "make": "Ford", "model": "Focus",
                "colours": ["Blue", "Red"],
                "fuel_types": ["Petrol", "Diesel"],
                "transmissions": ["Manual", "Automatic"],
                "retail_price": 28000
            }),
            json!({
                "make": "BMW", "model": "X5",
                "colours": ["Black", "Blue"],
                "fuel_types": ["Petrol", "Hybrid"],
                "transmissions": ["Automatic"],
                "retail_price": 62000
            }),
        ],
        customers: vec![
            json!({
                "customer_id": 1, "first_name": "Ada", "last_name": "Lovelace",
                "location": {"town": "Birmingham", "county": "West Midlands"}
            }),
            json!({
                "customer_id": 2, "first_name": "Alan", "last_name": "Turing",
                "location": {"town": "Coventry", "county": "West Midlands"}
            }),
            json!({
                "customer_id": 3, "first_name": "Mary", "last_name": "Shelley",
                "location": {"town": "Bath", "county": "Somerset"}
            }),
        ],
        listings: vec![
            json!({
                "make": "Ford", "model": "Focus", "year": 2018,
                "fuel_type": "Petrol", "transmission": "Manual", "color": "Blue",
                "customer_id": 2, "mileage": 54000, "price": 9500,
                "description": "One careful owner"
            }),
            json!({
                "make": "BMW", "model": "X5", "year": 2022,
                "fuel_type": "Hybrid", "transmission": "Automatic", "color": "Black",
                "customer_id": 3, "mileage": 12000, "price": 48000,
                "description": "Nearly new"
            }),
        ],
    }
}

fn table<'a>(tables: &'a [TableData], name: &str) -> &'a TableData {
    tables.iter().find(|t| t.name == name).unwrap()
}

#[test]
fn test_tables_come_back_in_dependency_order() {
    let tables = build_schema(&fixtures()).unwrap();
    let names: Vec<&str> = tables.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, TABLE_ORDER);
}

#[test]
fn test_dimension_contents() {
    let tables = build_schema(&fixtures()).unwrap();

    let makes = table(&tables, "makes");
    assert_eq!(makes.columns, vec!["make_id", "make_name"]);
    assert_eq!(makes.rows[0][1], Scalar::Text("BMW".to_string()));
    assert_eq!(makes.rows[1][1], Scalar::Text("Ford".to_string()));

    // Colour lists from both cars, deduplicated and sorted
    let colours = table(&tables, "colours");
    let names: Vec<&Scalar> = colours.rows.iter().map(|r| &r[1]).collect();
    assert_eq!(
        names,
        vec![
            &Scalar::Text("Black".to_string()),
            &Scalar::Text("Blue".to_string()),
            &Scalar::Text("Red".to_string()),
        ]
    );

    // Enum-like dimensions are case-folded
    let fuel_types = table(&tables, "fuel_types");
    assert_eq!(fuel_types.rows[0][1], Scalar::Text("diesel".to_string()));
}

#[test]
fn test_towns_reference_counties() {
    let tables = build_schema(&fixtures()).unwrap();

    let counties = table(&tables, "counties");
    let towns = table(&tables, "towns");
    assert_eq!(towns.columns, vec!["town_id", "town_name", "county_id"]);

    // Somerset=1, West Midlands=2; towns ordered by county then name
    assert_eq!(counties.rows[0][1], Scalar::Text("Somerset".to_string()));
    assert_eq!(towns.rows[0][1], Scalar::Text("Bath".to_string()));
    assert_eq!(towns.rows[0][2], Scalar::Int(1));
    assert_eq!(towns.rows[1][1], Scalar::Text("Birmingham".to_string()));
    assert_eq!(towns.rows[1][2], Scalar::Int(2));
}

#[test]
fn test_customers_keep_input_order() {
    let tables = build_schema(&fixtures()).unwrap();

    let customers = table(&tables, "customers");
    assert_eq!(
        customers.columns,
        vec!["customer_id", "town_id", "first_name", "last_name"]
    );
    assert_eq!(customers.rows[0][0], Scalar::Int(1));
    assert_eq!(customers.rows[0][2], Scalar::Text("Ada".to_string()));
    assert_eq!(customers.rows[2][3], Scalar::Text("Shelley".to_string()));
}

#[test]
fn test_listing_foreign_keys_resolve() {
    let tables = build_schema(&fixtures()).unwrap();

    let cars = table(&tables, "cars_for_sale");
    assert_eq!(cars.len(), 2);
    assert_eq!(
        cars.columns,
        vec![
            "car_id",
            "make_id",
            "model_id",
            "colour_id",
            "fuel_type_id",
            "transmission_id",
            "customer_id",
            "year",
            "price",
            "mileage",
            "description",
        ]
    );

    // Every foreign key resolves to an existing id in its table
    for (role_col, target) in [
        ("make_id", "makes"),
        ("model_id", "models"),
        ("colour_id", "colours"),
        ("fuel_type_id", "fuel_types"),
        ("transmission_id", "transmissions"),
        ("customer_id", "customers"),
    ] {
        let fk_pos = cars.column_position(role_col).unwrap();
        let referenced = table(&tables, target);
        let ids: Vec<&Scalar> = referenced.rows.iter().map(|r| &r[0]).collect();
        for row in &cars.rows {
            assert!(
                ids.contains(&&row[fk_pos]),
                "{role_col} value {:?} not found in {target}",
                row[fk_pos]
            );
        }
    }

    // Scalars round-trip verbatim
    let desc_pos = cars.column_position("description").unwrap();
    assert_eq!(
        cars.rows[0][desc_pos],
        Scalar::Text("One careful owner".to_string())
    );
}

#[test]
fn test_customer_join_goes_through_id_index() {
    let tables = build_schema(&fixtures()).unwrap();
    let customers = table(&tables, "customers");
    let index = customers.join_index("customer_id").unwrap();
    assert_eq!(index.len(), 3);
}

#[test]
fn test_unknown_listing_model_fails() {
    let mut fixtures = fixtures();
    fixtures.listings.push(json!({
        "make": "Ford", "model": "Unknown", "year": 2020,
        "fuel_type": "Petrol", "transmission": "Manual", "color": "Blue",
        "customer_id": 1, "mileage": 1000, "price": 100,
        "description": "mystery car"
    }));

    let err = build_schema(&fixtures).unwrap_err();
    match err {
        crate::error::EtlError::UnresolvedReference { role, value, .. } => {
            assert_eq!(role, "model");
            assert_eq!(value, "Unknown");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_empty_cars_fixture_fails() {
    let mut fixtures = fixtures();
    fixtures.cars.clear();

    let err = build_schema(&fixtures).unwrap_err();
    assert!(matches!(
        err,
        crate::error::EtlError::EmptyInput { .. }
    ));
}
