//! Transpiler test modules.
//!
//! Tests are organized by category:
//! - `core`: SELECT, INSERT, UPDATE, DELETE and condition rendering
//! - `dialects`: output differences between dialects
//! - `ddl`: CREATE TABLE / CREATE SEQUENCE and sequence queries
//! - `rewrite`: LOCATE with a start offset on PostgreSQL

mod ddl;
mod dialects;

use crate::ast::builders::*;
use crate::ast::{FromTable, SqlSelect, Value};

pub(super) fn citizen() -> FromTable {
    FromTable::new("citizen").with_alias("c")
}

pub(super) fn citizen_col(name: &str) -> Value {
    table_col(&citizen(), name)
}

/// `select c.id from citizen AS c where c.first_name = 'Sam'`
pub(super) fn citizen_named_sam() -> SqlSelect {
    SqlSelect::builder()
        .from(citizen())
        .with_value(citizen_col("id"))
        .with_condition(eq(citizen_col("first_name"), "Sam"))
        .build()
        .unwrap()
}
