use super::*;

fn create_test_table(db: &MemoryDb) {
    db.execute(
        "CREATE TABLE test (\n  uid int(10) unsigned NOT NULL DEFAULT '0',\n  pid int(10) unsigned NOT NULL DEFAULT '0'\n) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COMMENT='version 0.1'",
    )
    .unwrap();
}

#[test]
fn test_create_and_show_create() {
    let db = MemoryDb::new();
    create_test_table(&db);

    let expected = "CREATE TABLE `test` (\n  `uid` int(10) unsigned NOT NULL DEFAULT '0',\n  `pid` int(10) unsigned NOT NULL DEFAULT '0'\n) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COMMENT='version 0.1'";
    assert_eq!(db.show_create("test").unwrap(), expected);

    let rows = db.query("SHOW CREATE TABLE test").unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0].as_deref(), Some("test"));
    assert_eq!(rows[0][1].as_deref(), Some(expected));
}

#[test]
fn test_create_duplicate_table() {
    let db = MemoryDb::new();
    create_test_table(&db);

    let err = db
        .execute("CREATE TABLE test (id int)")
        .unwrap_err();
    assert_eq!(err.code(), 1050);

    // IF NOT EXISTS is a no-op
    db.execute("CREATE TABLE IF NOT EXISTS test (id int)").unwrap();
}

#[test]
fn test_alter_add_column_and_comment() {
    let db = MemoryDb::new();
    create_test_table(&db);

    db.execute(
        "ALTER TABLE test\n  ADD COLUMN did int(10) unsigned NOT NULL DEFAULT '0',\n  COMMENT='version 0.2'",
    )
    .unwrap();

    let rendered = db.show_create("test").unwrap();
    assert!(rendered.contains("`did` int(10) unsigned NOT NULL DEFAULT '0'"));
    assert!(rendered.ends_with("COMMENT='version 0.2'"));
}

#[test]
fn test_alter_drop_and_modify() {
    let db = MemoryDb::new();
    create_test_table(&db);

    db.execute("ALTER TABLE test MODIFY COLUMN pid bigint unsigned NOT NULL")
        .unwrap();
    assert!(db.show_create("test").unwrap().contains("`pid` bigint unsigned NOT NULL"));

    db.execute("ALTER TABLE test DROP COLUMN pid").unwrap();
    assert!(!db.show_create("test").unwrap().contains("`pid`"));

    let err = db.execute("ALTER TABLE test DROP COLUMN pid").unwrap_err();
    assert_eq!(err.code(), 1091);
}

#[test]
fn test_alter_unknown_table() {
    let db = MemoryDb::new();
    let err = db.execute("ALTER TABLE missing ADD COLUMN x int").unwrap_err();
    assert!(matches!(err, DbError::TableNotFound(ref t) if t == "missing"));
}

#[test]
fn test_drop_table() {
    let db = MemoryDb::new();
    create_test_table(&db);

    db.execute("DROP TABLE test").unwrap();
    assert!(matches!(
        db.show_create("test"),
        Err(DbError::TableNotFound(_))
    ));

    // plain DROP on a missing table fails, IF EXISTS does not
    assert!(db.execute("DROP TABLE test").is_err());
    db.execute("DROP TABLE IF EXISTS test").unwrap();
}

#[test]
fn test_show_create_unknown_table() {
    let db = MemoryDb::new();
    let err = db.query("SHOW CREATE TABLE nope").unwrap_err();
    assert!(matches!(err, DbError::TableNotFound(_)));
}

#[test]
fn test_information_schema_comment_lookup() {
    let db = MemoryDb::new();
    create_test_table(&db);

    let rows = db
        .query("SELECT TABLE_COMMENT FROM INFORMATION_SCHEMA.TABLES WHERE TABLE_NAME = \"test\" LIMIT 1")
        .unwrap();
    assert_eq!(rows, vec![vec![Some("version 0.1".to_string())]]);

    // absent table yields zero rows, not an error
    let rows = db
        .query("SELECT TABLE_COMMENT FROM INFORMATION_SCHEMA.TABLES WHERE TABLE_NAME = \"gone\" LIMIT 1")
        .unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_syntax_error_is_1064() {
    let db = MemoryDb::new();
    let err = db.execute("GRANT ALL ON *.* TO nobody").unwrap_err();
    assert_eq!(err.code(), 1064);
    assert!(err.to_string().contains("error in your SQL syntax"));
}

#[test]
fn test_dml_requires_table() {
    let db = MemoryDb::new();
    create_test_table(&db);

    db.execute("INSERT INTO test VALUES (1, 2)").unwrap();
    assert!(db.execute("INSERT INTO other VALUES (1)").is_err());
}

#[test]
fn test_statement_log() {
    let db = MemoryDb::new();
    create_test_table(&db);
    db.execute("INSERT INTO test VALUES (1, 2)").unwrap();

    assert_eq!(db.statement_log().len(), 2);

    // failed statements are not logged
    let _ = db.execute("nonsense");
    assert_eq!(db.statement_log().len(), 2);

    db.clear_statement_log();
    assert!(db.statement_log().is_empty());
}

#[test]
fn test_constraint_entries_render() {
    let db = MemoryDb::new();
    db.execute(
        "CREATE TABLE t (\n  id int NOT NULL,\n  PRIMARY KEY (id)\n) COMMENT='version 1.0'",
    )
    .unwrap();

    let rendered = db.show_create("t").unwrap();
    assert!(rendered.contains("  PRIMARY KEY (id)"));
    assert!(rendered.ends_with("COMMENT='version 1.0'"));
}
