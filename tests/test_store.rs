//! Tests for the JSON description store

use std::fs;
use tablesmith::{ColumnSpec, DescriptionStore, JsonFileStore, SchemaError, ValueType};
use tempfile::TempDir;

fn users() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("user_id", ValueType::Int).primary_key().auto_increment(),
        ColumnSpec::new("email", ValueType::Varchar).unique().check("email <> ''"),
        ColumnSpec::new("score", ValueType::Double).default_value("0"),
        ColumnSpec::new("role_id", ValueType::Int).references("roles", "role_id"),
    ]
}

#[test]
fn test_save_then_load_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp_dir.path());

    store.save("users", &users()).unwrap();
    let loaded = store.load("users").unwrap();

    assert_eq!(loaded, users());
}

#[test]
fn test_save_creates_missing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp_dir.path().join("jsons").join("structures"));

    store.save("users", &users()).unwrap();

    assert!(store.path_for("users").is_file());
}

#[test]
fn test_saved_file_uses_stable_field_names() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp_dir.path());
    store
        .save("roles", &[ColumnSpec::new("role_id", ValueType::Int).primary_key().auto_increment()])
        .unwrap();

    let written = fs::read_to_string(store.path_for("roles")).unwrap();
    assert_eq!(
        written,
        "[\n    {\n        \"name\": \"role_id\",\n        \"key_type\": \"PRIMARY KEY\",\n        \"value_type\": \"INT\",\n        \"auto_increment\": true\n    }\n]"
    );
}

#[test]
fn test_loads_file_with_optional_fields_omitted() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("users.json"),
        r#"[
            {"name": "username", "key_type": "", "value_type": "VARCHAR(255)", "unique": true},
            {"name": "role_id", "key_type": "FOREIGN KEY", "value_type": "INT",
             "foreign_key": {"reference_table": "roles", "reference_column": "role_id"}}
        ]"#,
    )
    .unwrap();
    let store = JsonFileStore::new(temp_dir.path());

    let loaded = store.load("users").unwrap();

    assert_eq!(
        loaded,
        vec![
            ColumnSpec::new("username", ValueType::Varchar).unique(),
            ColumnSpec::new("role_id", ValueType::Int).references("roles", "role_id"),
        ]
    );
}

#[test]
fn test_load_missing_table_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp_dir.path());

    match store.load("ghosts") {
        Err(SchemaError::NotFound(table)) => assert_eq!(table, "ghosts"),
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_load_invalid_json_is_malformed() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("broken.json"), "{ not json").unwrap();
    let store = JsonFileStore::new(temp_dir.path());

    assert!(matches!(store.load("broken"), Err(SchemaError::MalformedSpec(_))));
}

#[test]
fn test_load_foreign_role_without_reference_is_malformed() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("users.json"),
        r#"[{"name": "role_id", "key_type": "FOREIGN KEY", "value_type": "INT"}]"#,
    )
    .unwrap();
    let store = JsonFileStore::new(temp_dir.path());

    assert!(matches!(store.load("users"), Err(SchemaError::MalformedSpec(_))));
}

#[test]
fn test_save_rejects_empty_column_name() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp_dir.path());

    let result = store.save("users", &[ColumnSpec::new("", ValueType::Int)]);

    assert!(matches!(result, Err(SchemaError::MalformedSpec(_))));
    assert!(!store.path_for("users").exists());
}
