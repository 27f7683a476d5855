use super::*;

#[test]
fn test_comment_marker() {
    assert_eq!(
        comment_marker("version 0.2"),
        Some(VersionLabel::new("0.2"))
    );
    assert_eq!(
        comment_marker("user table, version 1.3"),
        Some(VersionLabel::new("1.3"))
    );
    assert_eq!(comment_marker("no marker here"), None);
    assert_eq!(comment_marker(""), None);
}

#[test]
fn test_version_marker_create_table() {
    let sql = "CREATE TABLE test (\n  uid int(10) unsigned NOT NULL DEFAULT '0'\n) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COMMENT='version 0.1'";
    assert_eq!(version_marker(sql), Some(VersionLabel::new("0.1")));
}

#[test]
fn test_version_marker_alter_table() {
    let sql = "ALTER TABLE test ADD COLUMN did int(10) unsigned NOT NULL DEFAULT '0', COMMENT='version 0.2'";
    assert_eq!(version_marker(sql), Some(VersionLabel::new("0.2")));
}

#[test]
fn test_version_marker_without_equals_sign() {
    let sql = "CREATE TABLE t (id int) COMMENT 'version 2.0'";
    assert_eq!(version_marker(sql), Some(VersionLabel::new("2.0")));
}

#[test]
fn test_version_marker_prefers_table_level_comment() {
    // Column comments come first in the definition; the table-level
    // comment is last and wins.
    let sql = "CREATE TABLE t (\n  id int COMMENT 'legacy version 9.9 field'\n) COMMENT='version 0.3'";
    assert_eq!(version_marker(sql), Some(VersionLabel::new("0.3")));
}

#[test]
fn test_version_marker_absent() {
    let sql = "CREATE TABLE t (id int) ENGINE=InnoDB";
    assert_eq!(version_marker(sql), None);

    // comment without the marker pattern
    let sql = "CREATE TABLE t (id int) COMMENT='user accounts'";
    assert_eq!(version_marker(sql), None);
}

#[test]
fn test_structural_target() {
    assert_eq!(
        structural_target("CREATE TABLE test (id int)"),
        Some(TableName::new("test"))
    );
    assert_eq!(
        structural_target("create table if not exists logs (id int)"),
        Some(TableName::new("logs"))
    );
    assert_eq!(
        structural_target("ALTER TABLE `quoted name` ADD COLUMN x int"),
        Some(TableName::new("quoted name"))
    );
    assert_eq!(
        structural_target("ALTER TABLE app.users DROP COLUMN x"),
        Some(TableName::new("app.users"))
    );
}

#[test]
fn test_structural_target_non_structural() {
    assert_eq!(structural_target("INSERT INTO test VALUES (1)"), None);
    assert_eq!(structural_target("DROP TABLE test"), None);
    assert_eq!(structural_target("CREATE VIEW v AS SELECT 1"), None);
}

#[test]
fn test_is_structural() {
    assert!(is_structural("CREATE TABLE t (id int)"));
    assert!(is_structural("  alter table t add column x int"));
    assert!(!is_structural("SELECT * FROM t"));
}
