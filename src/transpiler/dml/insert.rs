//! INSERT SQL generation.

use crate::ast::SqlInsert;
use crate::error::SqlResult;
use crate::transpiler::ParamContext;
use crate::transpiler::expr::render_value;

/// Generate INSERT SQL: `insert into T (c1,c2) values (?,?)`.
pub fn build_insert(insert: &SqlInsert, ctx: &mut ParamContext) -> SqlResult<String> {
    let columns: Vec<&str> = insert.columns().iter().map(|c| c.name()).collect();
    let mut values = Vec::with_capacity(insert.values().len());
    for value in insert.values() {
        values.push(render_value(value, ctx)?);
    }
    Ok(format!(
        "insert into {} ({}) values ({})",
        insert.table().name(),
        columns.join(","),
        values.join(",")
    ))
}
