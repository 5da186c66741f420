// Copyright (c) Contributors to the curlbox project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;
use tempfile::TempDir;

use super::*;

fn write_var_file(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join(crate::VARS_FILENAME);
    std::fs::write(&path, content).expect("Failed to write variable file");
    path
}

#[rstest]
fn test_load_multiple_environments() {
    let tmp = TempDir::new().unwrap();
    let path = write_var_file(
        tmp.path(),
        r#"
[default]
api_url = "https://api.example.com"
timeout = 30

[staging]
api_url = "https://staging.example.com"
"#,
    );

    let file = VarFile::load(&path).expect("Should parse variable file");

    assert_eq!(file.environments.len(), 2);
    assert_eq!(file.source_path, Some(path));
    // Blocks keep file declaration order
    let names: Vec<&String> = file.environments.keys().collect();
    assert_eq!(names, vec!["default", "staging"]);

    let default = &file.environments["default"];
    assert_eq!(
        default["api_url"],
        Scalar::String("https://api.example.com".to_string())
    );
    assert_eq!(default["timeout"], Scalar::Integer(30));
}

#[rstest]
#[case::string("name = \"box\"", "name", "box")]
#[case::integer("retries = 3", "retries", "3")]
#[case::negative("offset = -12", "offset", "-12")]
#[case::float("ratio = 4.5", "ratio", "4.5")]
#[case::boolean("debug = true", "debug", "true")]
#[case::boolean_false("debug = false", "debug", "false")]
fn test_scalar_rendering(#[case] line: &str, #[case] key: &str, #[case] expected: &str) {
    let tmp = TempDir::new().unwrap();
    let path = write_var_file(tmp.path(), &format!("[default]\n{}\n", line));

    let file = VarFile::load(&path).expect("Should parse variable file");
    let value = &file.environments["default"][key];

    assert_eq!(value.render(), expected);
}

#[rstest]
fn test_select_named_block() {
    let tmp = TempDir::new().unwrap();
    let path = write_var_file(
        tmp.path(),
        r#"
[default]
who = "everyone"

[staging]
who = "testers"
"#,
    );

    let file = VarFile::load(&path).expect("Should parse variable file");

    match file.select("staging") {
        Selection::Named(block) => {
            assert_eq!(block["who"], Scalar::String("testers".to_string()));
        }
        other => panic!("Expected Named, got: {:?}", other),
    }
}

#[rstest]
fn test_select_falls_back_to_default() {
    let tmp = TempDir::new().unwrap();
    let path = write_var_file(
        tmp.path(),
        r#"
[default]
who = "everyone"
"#,
    );

    let file = VarFile::load(&path).expect("Should parse variable file");

    match file.select("staging") {
        Selection::Fallback(block) => {
            assert_eq!(block["who"], Scalar::String("everyone".to_string()));
        }
        other => panic!("Expected Fallback, got: {:?}", other),
    }
}

#[rstest]
fn test_select_missing() {
    let tmp = TempDir::new().unwrap();
    let path = write_var_file(
        tmp.path(),
        r#"
[production]
who = "customers"
"#,
    );

    let file = VarFile::load(&path).expect("Should parse variable file");

    assert!(matches!(file.select("staging"), Selection::Missing));
}

#[rstest]
fn test_invalid_toml() {
    let tmp = TempDir::new().unwrap();
    let path = write_var_file(
        tmp.path(),
        r#"
[default
broken = "
"#,
    );

    let result = VarFile::load(&path);

    match result {
        Err(crate::Error::InvalidToml { path: err_path, .. }) => assert_eq!(err_path, path),
        other => panic!("Expected InvalidToml, got: {:?}", other),
    }
}

#[rstest]
fn test_structured_values_rejected() {
    let tmp = TempDir::new().unwrap();
    let path = write_var_file(
        tmp.path(),
        r#"
[default]
hosts = ["a", "b"]
"#,
    );

    let result = VarFile::load(&path);

    assert!(
        matches!(result, Err(crate::Error::InvalidToml { .. })),
        "Array values should fail parsing"
    );
}

#[rstest]
fn test_nested_tables_rejected() {
    let tmp = TempDir::new().unwrap();
    let path = write_var_file(
        tmp.path(),
        r#"
[default.nested]
key = "value"
"#,
    );

    let result = VarFile::load(&path);

    assert!(
        matches!(result, Err(crate::Error::InvalidToml { .. })),
        "Nested tables should fail parsing"
    );
}

#[rstest]
fn test_missing_file_is_read_error() {
    let tmp = TempDir::new().unwrap();

    let result = VarFile::load(tmp.path().join(crate::VARS_FILENAME));

    assert!(matches!(result, Err(crate::Error::ReadFailed { .. })));
}
