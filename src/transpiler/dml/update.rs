//! UPDATE SQL generation.

use crate::ast::SqlUpdate;
use crate::error::SqlResult;
use crate::transpiler::ParamContext;
use crate::transpiler::dml::{push_where, table_reference};
use crate::transpiler::expr::render_value;

/// Generate UPDATE SQL. SET targets are never qualified.
pub fn build_update(update: &SqlUpdate, ctx: &mut ParamContext) -> SqlResult<String> {
    let table = update.table();
    let mut sql = String::from("update ");
    sql.push_str(&table_reference(table.name(), table.alias(), ctx.config));

    let mut assignments = Vec::with_capacity(update.assignments().len());
    for (column, value) in update.assignments() {
        assignments.push(format!("{}={}", column.name(), render_value(value, ctx)?));
    }
    sql.push_str(" set ");
    sql.push_str(&assignments.join(","));

    push_where(&mut sql, update.conditions(), ctx)?;
    Ok(sql)
}
