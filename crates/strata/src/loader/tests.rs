//! Tests for directory discovery, layering, and the parse escape hatch.

use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::TempDir;

/// Write config file contents to a path, creating parent directories if
/// needed.
fn write_file(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("dir");
    }
    fs::write(path, contents).expect("write");
}

/// Unwrap a `json!` object literal into the map form the loaders take.
fn object(doc: Value) -> Map<String, Value> {
    let Value::Object(map) = doc else {
        panic!("object literal expected")
    };
    map
}

/// A lone base file supplies the whole mapping.
#[test]
fn loads_a_single_base_file() {
    let temp = TempDir::new().expect("tmp");
    write_file(
        &temp.path().join("app.json5"),
        r#"{ config: { a: "value", b: [1, 2, 3] } }"#,
    );

    let config = Config::load(temp.path()).expect("config");
    assert_eq!(config.get("a"), Some(&json!("value")));
    assert_eq!(config["b"][0], json!(1));
}

/// A `.local.` companion overrides its base file key by key.
#[test]
fn local_override_wins_per_key() {
    let temp = TempDir::new().expect("tmp");
    write_file(
        &temp.path().join("app.json5"),
        r#"{ config: { a: "value", b: [1, 2, 3] } }"#,
    );
    write_file(
        &temp.path().join("app.local.json5"),
        r#"{ config: { a: "newvalue", c: [4, 5] } }"#,
    );

    let config = Config::load(temp.path()).expect("config");
    assert_eq!(config.get("a"), Some(&json!("newvalue")));
    assert_eq!(config.get("b"), Some(&json!([1, 2, 3])));
    assert_eq!(config.get("c"), Some(&json!([4, 5])));
}

/// A directory that does not exist is not an error; the result is empty.
#[test]
fn missing_directory_yields_an_empty_config() {
    let temp = TempDir::new().expect("tmp");

    let config = Config::load(temp.path().join("nope")).expect("config");
    assert!(config.is_empty());
    assert_eq!(config.get("anything"), None);
    assert_eq!(config["anything"], Value::Null);
}

#[test]
fn missing_directory_keeps_defaults() {
    let temp = TempDir::new().expect("tmp");
    let defaults = object(json!({ "a": 1 }));

    let config =
        Config::load_with_defaults(temp.path().join("nope"), defaults.clone()).expect("config");
    assert_eq!(config.as_map(), &defaults);
}

#[test]
fn empty_directory_keeps_defaults() {
    let temp = TempDir::new().expect("tmp");
    let defaults = object(json!({ "a": 1 }));

    let config = Config::load_with_defaults(temp.path(), defaults.clone()).expect("config");
    assert_eq!(config.as_map(), &defaults);
}

/// Defaults, base, and local merge per key with the later layer winning.
#[test]
fn file_layers_override_defaults_per_key() {
    let temp = TempDir::new().expect("tmp");
    write_file(&temp.path().join("app.json5"), r#"{ config: { a: 10 } }"#);
    write_file(
        &temp.path().join("app.local.json5"),
        r#"{ config: { a: 100, c: 300 } }"#,
    );
    let defaults = object(json!({ "a": 1, "b": 2, "c": 3 }));

    let config = Config::load_with_defaults(temp.path(), defaults).expect("config");
    assert_eq!(config.as_map(), &object(json!({ "a": 100, "b": 2, "c": 300 })));
}

/// Base files merge in filename order, each followed by its own override.
#[test]
fn base_files_merge_in_filename_order() {
    let temp = TempDir::new().expect("tmp");
    write_file(
        &temp.path().join("b.json5"),
        r#"{ config: { shared: "b", late: true } }"#,
    );
    write_file(
        &temp.path().join("a.json5"),
        r#"{ config: { shared: "a", early: true } }"#,
    );
    write_file(
        &temp.path().join("a.local.json5"),
        r#"{ config: { shared: "a-local", a_only: 1 } }"#,
    );

    let config = Config::load(temp.path()).expect("config");
    assert_eq!(config.get("shared"), Some(&json!("b")));
    assert_eq!(config.get("early"), Some(&json!(true)));
    assert_eq!(config.get("late"), Some(&json!(true)));
    assert_eq!(config.get("a_only"), Some(&json!(1)));
}

/// A `.local.` file with no base sibling is not a layer of its own.
#[test]
fn orphan_local_file_is_ignored() {
    let temp = TempDir::new().expect("tmp");
    write_file(&temp.path().join("app.local.json5"), r#"{ config: { a: 1 } }"#);

    let config = Config::load(temp.path()).expect("config");
    assert!(config.is_empty());
}

#[test]
fn drivers_cover_mixed_formats() {
    let temp = TempDir::new().expect("tmp");
    write_file(&temp.path().join("a.json"), r#"{ "from_json": 1 }"#);
    write_file(&temp.path().join("b.yaml"), "from_yaml: 2\n");
    write_file(&temp.path().join("c.json5"), "{ config: { from_json5: 3 } }");

    let config = Config::load(temp.path()).expect("config");
    assert_eq!(config.get("from_json"), Some(&json!(1)));
    assert_eq!(config.get("from_yaml"), Some(&json!(2)));
    assert_eq!(config.get("from_json5"), Some(&json!(3)));
}

#[test]
fn unrecognized_extensions_are_skipped() {
    let temp = TempDir::new().expect("tmp");
    write_file(&temp.path().join("notes.txt"), "not config");
    write_file(&temp.path().join("app.json5"), r#"{ config: { a: 1 } }"#);

    let config = Config::load(temp.path()).expect("config");
    assert_eq!(config.as_map(), &object(json!({ "a": 1 })));
}

/// Malformed content degrades to an empty layer; the defaults survive.
#[test]
fn malformed_files_contribute_nothing() {
    let temp = TempDir::new().expect("tmp");
    write_file(&temp.path().join("app.json5"), "{{{{");
    let defaults = object(json!({ "a": 1 }));

    let config = Config::load_with_defaults(temp.path(), defaults.clone()).expect("config");
    assert_eq!(config.as_map(), &defaults);
}

#[test]
fn file_without_the_config_entry_contributes_nothing() {
    let temp = TempDir::new().expect("tmp");
    write_file(&temp.path().join("app.json5"), r#"{ nuthin: "yep" }"#);

    let config = Config::load(temp.path()).expect("config");
    assert!(config.is_empty());
}

/// A discovered base file that cannot be read aborts the load.
#[test]
fn unreadable_base_file_fails_the_load() {
    let temp = TempDir::new().expect("tmp");
    // Invalid UTF-8 makes the read itself fail.
    fs::write(temp.path().join("app.json5"), [0xC0, 0xAF, 0xFE]).expect("write");

    let err = Config::load(temp.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ReadFailed { .. }));
}

/// Overrides are optional, so an unreadable one degrades to nothing.
#[test]
fn unreadable_local_override_is_tolerated() {
    let temp = TempDir::new().expect("tmp");
    write_file(&temp.path().join("app.json5"), r#"{ config: { a: 1 } }"#);
    fs::write(temp.path().join("app.local.json5"), [0xC0, 0xAF]).expect("write");

    let config = Config::load(temp.path()).expect("config");
    assert_eq!(config.get("a"), Some(&json!(1)));
}

#[test]
fn repeated_loads_observe_equal_mappings() {
    let temp = TempDir::new().expect("tmp");
    write_file(&temp.path().join("app.json5"), r#"{ config: { a: 1 } }"#);
    write_file(&temp.path().join("app.local.json5"), r#"{ config: { b: 2 } }"#);
    let defaults = object(json!({ "c": 3 }));

    let first = Config::load_with_defaults(temp.path(), defaults.clone()).expect("first");
    let second = Config::load_with_defaults(temp.path(), defaults).expect("second");
    assert_eq!(first, second);
}

#[test]
fn parse_file_runs_one_file_through_its_driver() {
    let temp = TempDir::new().expect("tmp");
    let path = temp.path().join("app.json5");
    write_file(&path, r#"{ config: { a: "value" }, extra: true }"#);

    let values = Config::parse_file(&path).expect("values");
    assert_eq!(values, object(json!({ "a": "value" })));
}

#[test]
fn parse_file_round_trips_a_written_mapping() {
    let temp = TempDir::new().expect("tmp");
    let expected = object(json!({ "name": "app", "port": 8080, "tags": ["a", "b"] }));
    let path = temp.path().join("roundtrip.json");
    write_file(&path, &serde_json::to_string(&expected).expect("encode"));

    assert_eq!(Config::parse_file(&path).expect("values"), expected);
}

/// A well-formed file without the designated entry parses to an empty
/// mapping, not an error.
#[test]
fn parse_file_without_the_config_entry_yields_an_empty_mapping() {
    let temp = TempDir::new().expect("tmp");
    let path = temp.path().join("app.json5");
    write_file(&path, r#"{ nuthin: "yep" }"#);

    let values = Config::parse_file(&path).expect("values");
    assert!(values.is_empty());
}

#[test]
fn parse_file_on_a_missing_path_is_not_found() {
    let temp = TempDir::new().expect("tmp");

    let err = Config::parse_file(temp.path().join("missing.json5")).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound { .. }));
}

#[test]
fn parse_file_on_a_directory_is_not_found() {
    let temp = TempDir::new().expect("tmp");
    let dir = temp.path().join("dir.json5");
    fs::create_dir(&dir).expect("dir");

    let err = Config::parse_file(&dir).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound { .. }));
}

#[test]
fn parse_file_rejects_unknown_extensions() {
    let temp = TempDir::new().expect("tmp");
    let path = temp.path().join("app.toml");
    write_file(&path, "a = 1");

    let err = Config::parse_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat { .. }));
}

#[test]
fn errors_name_the_offending_path() {
    let temp = TempDir::new().expect("tmp");

    let err = Config::parse_file(temp.path().join("absent.json5")).unwrap_err();
    assert!(format!("{err}").contains("absent.json5"));
}
