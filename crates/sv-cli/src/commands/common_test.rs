use super::*;
use std::io::Write;

#[test]
fn test_load_definition() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "CREATE TABLE t (id int) COMMENT='version 0.1';\nALTER TABLE t ADD COLUMN x int, COMMENT='version 0.2';\n"
    )
    .unwrap();

    let def = load_definition(file.path().to_str().unwrap()).unwrap();
    assert_eq!(def.len(), 2);
    assert_eq!(summarize(&def), "2 chunk(s), 2 statement(s), 1 table(s)");
}

#[test]
fn test_load_definition_missing_file() {
    let err = load_definition("/nonexistent/file.sql").unwrap_err();
    assert!(err.to_string().contains("Failed to read"));
}

#[test]
fn test_load_definition_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "CREATE TABLE t (id int);\n").unwrap();

    let err = load_definition(file.path().to_str().unwrap()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse"));
}
