#![allow(dead_code)]

pub(crate) mod http;

use std::path::PathBuf;

use hostdb::config::GlobalConfig;
use hostdb::predicate::{ClauseSet, Limit, WhereFragment};
use sqlparser::dialect::MySqlDialect;
use sqlparser::parser::Parser;

pub(crate) fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from("tests/fixtures").join(name)
}

pub(crate) fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("fixture should be readable")
}

pub(crate) fn load_fixture_clause_set(name: &str) -> ClauseSet {
    serde_json::from_str(&read_fixture(name)).expect("fixture clause set should parse")
}

pub(crate) fn load_fixture_config() -> GlobalConfig {
    GlobalConfig::load(&fixture_path("config.json")).expect("fixture config should load")
}

/// Full statement as an executor would assemble it.
pub(crate) fn select_statement(fragment: &WhereFragment, limit: &Limit) -> String {
    format!("SELECT * FROM records {} {}", fragment.sql, limit.to_sql())
}

/// Panics unless the statement parses as MySQL and has one `?` per bound value.
pub(crate) fn assert_valid_select(fragment: &WhereFragment, limit: &Limit) {
    let sql = select_statement(fragment, limit);
    let statements = Parser::parse_sql(&MySqlDialect {}, &sql)
        .unwrap_or_else(|e| panic!("generated SQL should parse: {e}\n{sql}"));
    assert_eq!(statements.len(), 1, "expected one statement from:\n{sql}");
    assert_eq!(
        fragment.sql.matches('?').count(),
        fragment.values.len(),
        "placeholder count should match bound values in:\n{sql}"
    );
}
