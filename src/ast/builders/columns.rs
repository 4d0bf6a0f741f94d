//! Column references, literals and parameters.

use crate::ast::{Column, FromTable, Literal, TableColumn, Value};

/// Unqualified column.
pub fn col(name: &str) -> Value {
    Value::Column(Column::new(name))
}

/// Column qualified by its table's alias.
pub fn table_col(table: &FromTable, name: &str) -> Value {
    Value::TableColumn(TableColumn::new(table, Column::new(name)))
}

/// Bind parameter (`?`).
pub fn param(label: &str) -> Value {
    Value::Literal(Literal::parameter(label))
}

pub fn text(s: &str) -> Value {
    Value::Literal(Literal::Text(s.to_string()))
}

pub fn int(n: i64) -> Value {
    Value::Literal(Literal::Integer(n))
}

pub fn null() -> Value {
    Value::Literal(Literal::Null)
}

/// Expression text emitted verbatim.
pub fn raw(sql: &str) -> Value {
    Value::Literal(Literal::raw(sql))
}
