//! DELETE SQL generation.

use crate::ast::SqlDelete;
use crate::error::SqlResult;
use crate::transpiler::ParamContext;
use crate::transpiler::dml::{push_where, table_reference};

/// Generate DELETE SQL.
pub fn build_delete(delete: &SqlDelete, ctx: &mut ParamContext) -> SqlResult<String> {
    let table = delete.table();
    let mut sql = String::from("delete from ");
    sql.push_str(&table_reference(table.name(), table.alias(), ctx.config));
    push_where(&mut sql, delete.conditions(), ctx)?;
    Ok(sql)
}
