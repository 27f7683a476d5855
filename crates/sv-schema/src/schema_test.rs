use super::*;
use sv_db::MemoryDb;

const DEFINITION: &str = "\
CREATE TABLE test (
  uid int(10) unsigned NOT NULL DEFAULT '0'
) ENGINE=InnoDB COMMENT='version 0.1';

ALTER TABLE test
  ADD COLUMN pid int(10) unsigned NOT NULL DEFAULT '0',
  COMMENT='version 0.2';
";

#[test]
fn test_apply_from_scratch() {
    let db = MemoryDb::new();
    let schema = Schema::new(&db);
    let definition = sv_core::parse(DEFINITION).unwrap();

    schema.apply(&definition).unwrap();

    assert_eq!(
        schema.current_table_version(&TableName::new("test")).unwrap(),
        Some(VersionLabel::new("0.2"))
    );
    assert_eq!(db.statement_log().len(), 2);
}

#[test]
fn test_apply_is_idempotent() {
    let db = MemoryDb::new();
    let schema = Schema::new(&db);
    let definition = sv_core::parse(DEFINITION).unwrap();

    schema.apply(&definition).unwrap();
    db.clear_statement_log();

    schema.apply(&definition).unwrap();
    assert!(
        db.statement_log().is_empty(),
        "second apply must execute zero statements"
    );
}

#[test]
fn test_apply_stops_at_first_failure() {
    let db = MemoryDb::new();
    let schema = Schema::new(&db);

    let definition = sv_core::parse(
        "\
CREATE TABLE a (id int) COMMENT='version 0.1';
GRANT ALL ON a TO nobody;
ALTER TABLE a ADD COLUMN x int, COMMENT='version 0.2';
CREATE TABLE b (id int) COMMENT='version 0.1';
",
    )
    .unwrap();

    let err = schema.apply(&definition).unwrap_err();
    assert!(matches!(err, SchemaError::Db(_)));

    // chunk one stayed applied, chunk two never ran
    assert_eq!(
        schema.current_table_version(&TableName::new("a")).unwrap(),
        Some(VersionLabel::new("0.1"))
    );
    assert_eq!(
        schema.current_table_version(&TableName::new("b")).unwrap(),
        None
    );
}

#[test]
fn test_load_file_missing_path() {
    let db = MemoryDb::new();
    let schema = Schema::new(&db);

    let err = schema.load_file("/nonexistent/definition.sql").unwrap_err();
    assert!(matches!(err, SchemaError::Io { .. }));
}
