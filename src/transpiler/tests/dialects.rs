//! Dialect-specific SQL generation tests.

use pretty_assertions::assert_eq;

use super::{citizen, citizen_col, citizen_named_sam};
use crate::ast::builders::*;
use crate::ast::{
    Column, FromJoin, FromTable, ResultLimit, SqlSelect, SqlUpdate, Statement, Value,
};
use crate::error::SqlError;
use crate::transpiler::dialect::DialectConfig;
use crate::transpiler::{Dialect, StatementGenerator, ToSql, sql};

fn select_as_position(dialect: Dialect, start: Option<Value>) -> String {
    SqlSelect::builder()
        .from(citizen())
        .with_value(select_as(
            locate("a", citizen_col("first_name"), start),
            "position",
        ))
        .build()
        .unwrap()
        .to_sql_with_dialect(dialect)
        .unwrap()
}

fn select_value(dialect: Dialect, value: Value) -> String {
    SqlSelect::builder()
        .from(FromTable::new("citizen"))
        .with_value(value)
        .build()
        .unwrap()
        .to_sql_with_dialect(dialect)
        .unwrap()
}

#[test]
fn test_table_alias_with_as() {
    for dialect in [
        Dialect::Default,
        Dialect::Derby,
        Dialect::MySql,
        Dialect::MariaDb,
        Dialect::Postgres,
    ] {
        assert_eq!(
            citizen_named_sam().to_sql_with_dialect(dialect).unwrap(),
            "select c.id from citizen AS c where c.first_name = 'Sam'",
            "{}",
            dialect
        );
    }
}

#[test]
fn test_oracle_bare_table_alias() {
    assert_eq!(
        citizen_named_sam()
            .to_sql_with_dialect(Dialect::Oracle)
            .unwrap(),
        "select c.id from citizen c where c.first_name = 'Sam'"
    );
}

#[test]
fn test_oracle_join_aliases() {
    let region = FromTable::new("region").with_alias("r");
    let city = FromTable::new("city").with_alias("c");
    let join = FromJoin::inner(
        city.clone(),
        vec![Column::new("id")],
        vec![Column::new("region_id")],
    )
    .unwrap();
    let sql = SqlSelect::builder()
        .from(region.with_join(join))
        .with_value(select_as(table_col(&city, "name"), "city_name"))
        .build()
        .unwrap()
        .to_sql_with_dialect(Dialect::Oracle)
        .unwrap();
    assert_eq!(
        sql,
        "select c.name AS city_name from region r INNER JOIN city c ON r.id = c.region_id"
    );
}

#[test]
fn test_postgres_position() {
    assert_eq!(
        select_as_position(Dialect::Postgres, None),
        "select POSITION('a' IN c.first_name) AS position from citizen AS c"
    );
}

#[test]
fn test_oracle_instr() {
    assert_eq!(
        select_as_position(Dialect::Oracle, None),
        "select INSTR(c.first_name, 'a') AS position from citizen c"
    );
    assert_eq!(
        select_as_position(Dialect::Oracle, Some(int(3))),
        "select INSTR(c.first_name, 'a', 3) AS position from citizen c"
    );
}

#[test]
fn test_locate_families() {
    for dialect in [Dialect::Default, Dialect::Derby, Dialect::MySql] {
        assert_eq!(
            select_as_position(dialect, None),
            "select LOCATE('a', c.first_name) AS position from citizen AS c"
        );
    }
}

#[test]
fn test_substring_names() {
    let value = || substring(col("first_name"), 2);
    assert_eq!(
        select_value(Dialect::Derby, value()),
        "select SUBSTR(first_name, 2) from citizen"
    );
    assert_eq!(
        select_value(Dialect::Oracle, value()),
        "select SUBSTR(first_name, 2) from citizen"
    );
    assert_eq!(
        select_value(Dialect::MySql, value()),
        "select SUBSTRING(first_name, 2) from citizen"
    );
}

#[test]
fn test_length_names() {
    assert_eq!(
        select_value(Dialect::MySql, length(col("first_name"))),
        "select CHAR_LENGTH(first_name) from citizen"
    );
    assert_eq!(
        select_value(Dialect::Postgres, length(col("first_name"))),
        "select LENGTH(first_name) from citizen"
    );
}

#[test]
fn test_concat_styles() {
    let value = || concat(vec![col("first_name"), text(" "), col("last_name")]);
    assert_eq!(
        select_value(Dialect::Derby, value()),
        "select first_name || ' ' || last_name from citizen"
    );
    assert_eq!(
        select_value(Dialect::Oracle, value()),
        "select first_name || ' ' || last_name from citizen"
    );
    assert_eq!(
        select_value(Dialect::MySql, value()),
        "select CONCAT(first_name, ' ', last_name) from citizen"
    );
}

#[test]
fn test_oracle_booleans() {
    let select = SqlSelect::builder()
        .from(citizen())
        .with_value(citizen_col("id"))
        .with_condition(equals_true(citizen_col("active")))
        .with_condition(eq(citizen_col("verified"), false))
        .build()
        .unwrap();
    assert_eq!(
        select.to_sql_with_dialect(Dialect::Oracle).unwrap(),
        "select c.id from citizen c where c.active = 1 and c.verified = 0"
    );
    assert_eq!(
        select.to_sql_with_dialect(Dialect::Postgres).unwrap(),
        "select c.id from citizen AS c where c.active = TRUE and c.verified = FALSE"
    );
}

#[test]
fn test_offset_fetch_limits() {
    let limited = |limit: ResultLimit| {
        SqlSelect::builder()
            .from(citizen())
            .with_value(citizen_col("id"))
            .with_result_limit(limit)
            .build()
            .unwrap()
    };
    assert_eq!(
        limited(ResultLimit::new(Some(10), Some(20)))
            .to_sql_with_dialect(Dialect::Oracle)
            .unwrap(),
        "select c.id from citizen c offset 20 rows fetch next 10 rows only"
    );
    assert_eq!(
        limited(ResultLimit::new(Some(10), None))
            .to_sql_with_dialect(Dialect::Derby)
            .unwrap(),
        "select c.id from citizen AS c fetch next 10 rows only"
    );
    assert_eq!(
        limited(ResultLimit::new(None, Some(5)))
            .to_sql_with_dialect(Dialect::MySql)
            .unwrap(),
        "select c.id from citizen AS c offset 5"
    );
}

#[test]
fn test_oracle_update_alias() {
    let update = SqlUpdate::builder(citizen())
        .with_assignment(Column::new("active"), false)
        .with_condition(eq(citizen_col("id"), 7))
        .build()
        .unwrap();
    assert_eq!(
        update.to_sql_with_dialect(Dialect::Oracle).unwrap(),
        "update citizen c set active=0 where c.id = 7"
    );
}

#[test]
fn test_oracle_current_time_is_unsupported() {
    let statement: Statement = SqlSelect::builder()
        .from(FromTable::new("dual"))
        .with_value(current_time())
        .build()
        .unwrap()
        .into();

    let err = StatementGenerator::new(Dialect::Oracle)
        .export(&statement)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unsupported construct: CurrentTime is not supported by the oracle dialect"
    );

    assert_eq!(
        StatementGenerator::new(Dialect::Postgres)
            .export(&statement)
            .unwrap(),
        "select CURRENT_TIME from dual"
    );
}

static POSITION_ONLY: DialectConfig = DialectConfig {
    name: "position-only",
    rewrites: &[],
    ..sql::postgres::CONFIG
};

#[test]
fn test_missing_rewrite_is_unsupported() {
    let generator = StatementGenerator::with_config(&POSITION_ONLY);
    let statement: Statement = SqlSelect::builder()
        .from(citizen())
        .with_value(locate("a", citizen_col("first_name"), Some(int(2))))
        .build()
        .unwrap()
        .into();

    let err = generator.export(&statement).unwrap_err();
    assert!(matches!(
        err,
        SqlError::UnsupportedConstruct { ref dialect, .. } if dialect == "position-only"
    ));

    let plain: Statement = SqlSelect::builder()
        .from(citizen())
        .with_value(locate("a", citizen_col("first_name"), None))
        .build()
        .unwrap()
        .into();
    assert_eq!(
        generator.export(&plain).unwrap(),
        "select POSITION('a' IN c.first_name) from citizen AS c"
    );
}
