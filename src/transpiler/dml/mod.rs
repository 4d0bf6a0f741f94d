//! DML (Data Manipulation Language) SQL generation.
//!
//! This module contains functions for generating SELECT, INSERT, UPDATE and
//! DELETE statements.

pub mod delete;
pub mod insert;
pub mod select;
pub mod update;

use crate::ast::Condition;
use crate::error::SqlResult;
use crate::transpiler::ParamContext;
use crate::transpiler::conditions::render_conjunction;
use crate::transpiler::dialect::{DialectConfig, TableAliasStyle};

/// `name[ AS alias]`, spelled per dialect.
pub fn table_reference(name: &str, alias: Option<&str>, config: &DialectConfig) -> String {
    match (alias, config.table_alias) {
        (Some(alias), TableAliasStyle::As) => format!("{} AS {}", name, alias),
        (Some(alias), TableAliasStyle::Bare) => format!("{} {}", name, alias),
        (None, _) => name.to_string(),
    }
}

/// Append ` where ...` when there are conditions.
pub fn push_where(sql: &mut String, conditions: &[Condition], ctx: &mut ParamContext) -> SqlResult<()> {
    if !conditions.is_empty() {
        sql.push_str(" where ");
        sql.push_str(&render_conjunction(conditions, ctx)?);
    }
    Ok(())
}
