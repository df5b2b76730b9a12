use super::*;
use serde_json::json;

const MAKES: DimensionSpec = DimensionSpec {
    table: "makes",
    id_column: "make_id",
    key_column: "make_name",
    attribute: "make",
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

#[test]
fn test_dedup_and_sort() {
    let records = vec![
        json!({"make": "Ford"}),
        json!({"make": "BMW"}),
        json!({"make": "Ford"}),
    ];
    let makes = build_dimension(&records, &MAKES).unwrap();

    assert_eq!(makes.len(), 2);
    assert_eq!(makes.rows[0].id, 1);
    assert_eq!(makes.rows[0].key, NaturalKey::Text("BMW".to_string()));
    assert_eq!(makes.rows[1].id, 2);
    assert_eq!(makes.rows[1].key, NaturalKey::Text("Ford".to_string()));
}

#[test]
fn test_ids_are_dense_from_one() {
    let records: Vec<_> = ["Volvo", "Audi", "Kia", "Audi", "Seat", "Kia"]
        .iter()
        .map(|m| json!({ "make": m }))
        .collect();
    let makes = build_dimension(&records, &MAKES).unwrap();

    let ids: Vec<i64> = makes.rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn test_permuted_input_yields_identical_table() {
    let records = vec![
        json!({"make": "Ford"}),
        json!({"make": "BMW"}),
        json!({"make": "Audi"}),
    ];
    let mut permuted = records.clone();
    permuted.reverse();

    let a = build_dimension(&records, &MAKES).unwrap();
    let b = build_dimension(&permuted, &MAKES).unwrap();
    assert_eq!(a.rows, b.rows);
}

#[test]
fn test_empty_input() {
    let err = build_dimension(&[], &MAKES).unwrap_err();
    match err {
        EtlError::EmptyInput { attribute } => assert_eq!(attribute, "make"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_list_valued_attribute_expands() {
    let spec = DimensionSpec {
        table: "colours",
        id_column: "colour_id",
        key_column: "colour_name",
        attribute: "colours",
        unique: true,
        fold_case: false,
    };
    let records = vec![
        json!({"colours": ["Red", "Blue"]}),
        json!({"colours": ["Blue", "Green"]}),
    ];
    let colours = build_dimension(&records, &spec).unwrap();

    let keys: Vec<String> = colours.rows.iter().map(|r| r.key.to_string()).collect();
    assert_eq!(keys, vec!["Blue", "Green", "Red"]);
}

#[test]
fn test_fold_case_dedups_variants() {
    let spec = DimensionSpec {
        table: "fuel_types",
        id_column: "fuel_type_id",
        key_column: "fuel_type",
        attribute: "fuel_types",
        unique: true,
        fold_case: true,
    };
    let records = vec![
        json!({"fuel_types": ["Petrol", "Diesel"]}),
        json!({"fuel_types": ["petrol"]}),
    ];
    let fuel_types = build_dimension(&records, &spec).unwrap();

    let keys: Vec<String> = fuel_types.rows.iter().map(|r| r.key.to_string()).collect();
    assert_eq!(keys, vec!["diesel", "petrol"]);
}

#[test]
fn test_non_unique_keeps_duplicates_sorted() {
    let spec = DimensionSpec {
        unique: false,
        ..MAKES
    };
    let records = vec![
        json!({"make": "Ford"}),
        json!({"make": "BMW"}),
        json!({"make": "Ford"}),
    ];
    let makes = build_dimension(&records, &spec).unwrap();

    let keys: Vec<String> = makes.rows.iter().map(|r| r.key.to_string()).collect();
    assert_eq!(keys, vec!["BMW", "Ford", "Ford"]);
}

#[test]
fn test_numeric_keys_sort_numerically() {
    let spec = DimensionSpec {
        table: "years",
        id_column: "year_id",
        key_column: "year",
        attribute: "year",
        unique: true,
        fold_case: false,
    };
    let records = vec![
        json!({"year": 2019}),
        json!({"year": 2010}),
        json!({"year": 2024}),
    ];
    let years = build_dimension(&records, &spec).unwrap();

    let keys: Vec<NaturalKey> = years.rows.iter().map(|r| r.key.clone()).collect();
    assert_eq!(
        keys,
        vec![
            NaturalKey::Int(2010),
            NaturalKey::Int(2019),
            NaturalKey::Int(2024),
        ]
    );
}

#[test]
fn test_dependent_dimension_orders_by_parent_then_key() {
    let records = vec![
        json!({"make": "Ford", "model": "Focus"}),
        json!({"make": "BMW", "model": "X5"}),
        json!({"make": "Ford", "model": "Fiesta"}),
        json!({"make": "BMW", "model": "i3"}),
        json!({"make": "Ford", "model": "Focus"}),
    ];
    let makes = build_dimension(&records, &MAKES).unwrap();
    let models = build_dependent_dimension(&records, &MODELS, &makes, "make").unwrap();

    // BMW is make 1, Ford is make 2; children sorted within each parent
    let rows: Vec<(i64, String, i64)> = models
        .rows
        .iter()
        .map(|r| (r.id, r.key.to_string(), r.parent_id.unwrap()))
        .collect();
    assert_eq!(
        rows,
        vec![
            (1, "X5".to_string(), 1),
            (2, "i3".to_string(), 1),
            (3, "Fiesta".to_string(), 2),
            (4, "Focus".to_string(), 2),
        ]
    );
    assert_eq!(models.parent_column.as_deref(), Some("make_id"));
}

#[test]
fn test_dependent_dimension_unresolved_parent() {
    let dim_records = vec![json!({"make": "Ford", "model": "Focus"})];
    let makes = build_dimension(&dim_records, &MAKES).unwrap();

    let records = vec![json!({"make": "Lada", "model": "Niva"})];
    let err = build_dependent_dimension(&records, &MODELS, &makes, "make").unwrap_err();
    match err {
        EtlError::UnresolvedReference { role, value, record } => {
            assert_eq!(role, "makes");
            assert_eq!(value, "Lada");
            assert!(record.contains("Niva"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_to_table_shape() {
    let records = vec![
        json!({"make": "Ford", "model": "Focus"}),
        json!({"make": "BMW", "model": "X5"}),
    ];
    let makes = build_dimension(&records, &MAKES).unwrap();
    let models = build_dependent_dimension(&records, &MODELS, &makes, "make").unwrap();

    let makes_table = makes.to_table();
    assert_eq!(makes_table.columns, vec!["make_id", "make_name"]);
    assert_eq!(makes_table.rows[0][0], Scalar::Int(1));

    let models_table = models.to_table();
    assert_eq!(
        models_table.columns,
        vec!["model_id", "model_name", "make_id"]
    );
}

#[test]
fn test_join_index_on_key_and_id() {
    let records = vec![json!({"make": "Ford"}), json!({"make": "BMW"})];
    let makes = build_dimension(&records, &MAKES).unwrap();

    let by_key = makes.join_index("make_name").unwrap();
    assert_eq!(by_key.get(&NaturalKey::Text("Ford".to_string())), Some(&2));

    let by_id = makes.join_index("make_id").unwrap();
    assert_eq!(by_id.get(&NaturalKey::Int(1)), Some(&1));

    assert!(makes.join_index("colour_name").is_none());
}
