//! INSERT, UPDATE and DELETE statements.

use serde::{Deserialize, Serialize};

use crate::ast::{Column, Condition, FromTable, Literal, Value};
use crate::error::{SqlError, SqlResult};

fn column_parameter(column: &Column) -> Value {
    Value::Literal(Literal::parameter(column.name()))
}

/// Modifying statements target one table; joins have nowhere to render.
fn validate_target(statement: &'static str, table: &FromTable) -> SqlResult<()> {
    if table.name().is_empty() {
        return Err(SqlError::invalid(statement, "a table name"));
    }
    if !table.joins().is_empty() {
        return Err(SqlError::invalid(
            statement,
            format!(
                "a target table without joins ('{}' has {})",
                table.name(),
                table.joins().len()
            ),
        ));
    }
    Ok(())
}

/// An INSERT statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqlInsert {
    table: FromTable,
    columns: Vec<Column>,
    values: Vec<Value>,
}

impl SqlInsert {
    pub fn builder(table: FromTable) -> SqlInsertBuilder {
        SqlInsertBuilder {
            table,
            columns: vec![],
            values: None,
        }
    }

    pub fn table(&self) -> &FromTable {
        &self.table
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn validate(&self) -> SqlResult<()> {
        validate_target("SqlInsert", &self.table)?;
        if self.columns.is_empty() {
            return Err(SqlError::invalid("SqlInsert", "at least one column"));
        }
        if self.values.len() != self.columns.len() {
            return Err(SqlError::invalid(
                "SqlInsert",
                format!(
                    "one value per column ({} values for {} columns)",
                    self.values.len(),
                    self.columns.len()
                ),
            ));
        }
        self.values.iter().try_for_each(Value::validate)
    }
}

#[derive(Debug)]
pub struct SqlInsertBuilder {
    table: FromTable,
    columns: Vec<Column>,
    values: Option<Vec<Value>>,
}

impl SqlInsertBuilder {
    pub fn with_columns(mut self, columns: impl IntoIterator<Item = Column>) -> Self {
        self.columns.extend(columns);
        self
    }

    /// Explicit values; without them every column gets a bind parameter
    /// labelled with the column name.
    pub fn with_values(mut self, values: impl IntoIterator<Item = Value>) -> Self {
        self.values = Some(values.into_iter().collect());
        self
    }

    pub fn build(self) -> SqlResult<SqlInsert> {
        let values = match self.values {
            Some(values) => values,
            None => self.columns.iter().map(column_parameter).collect(),
        };
        let insert = SqlInsert {
            table: self.table,
            columns: self.columns,
            values,
        };
        insert.validate()?;
        Ok(insert)
    }
}

/// An UPDATE statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqlUpdate {
    table: FromTable,
    assignments: Vec<(Column, Value)>,
    #[serde(default)]
    conditions: Vec<Condition>,
}

impl SqlUpdate {
    pub fn builder(table: FromTable) -> SqlUpdateBuilder {
        SqlUpdateBuilder {
            table,
            assignments: vec![],
            conditions: vec![],
        }
    }

    pub fn table(&self) -> &FromTable {
        &self.table
    }

    pub fn assignments(&self) -> &[(Column, Value)] {
        &self.assignments
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn validate(&self) -> SqlResult<()> {
        validate_target("SqlUpdate", &self.table)?;
        if self.assignments.is_empty() {
            return Err(SqlError::invalid("SqlUpdate", "at least one column to set"));
        }
        for (_, value) in &self.assignments {
            value.validate()?;
        }
        self.conditions.iter().try_for_each(Condition::validate)
    }
}

#[derive(Debug)]
pub struct SqlUpdateBuilder {
    table: FromTable,
    assignments: Vec<(Column, Value)>,
    conditions: Vec<Condition>,
}

impl SqlUpdateBuilder {
    pub fn with_assignment(mut self, column: Column, value: impl Into<Value>) -> Self {
        self.assignments.push((column, value.into()));
        self
    }

    /// Set each column to a bind parameter labelled with its name.
    pub fn with_columns(mut self, columns: impl IntoIterator<Item = Column>) -> Self {
        for column in columns {
            let value = column_parameter(&column);
            self.assignments.push((column, value));
        }
        self
    }

    pub fn with_condition(mut self, condition: impl Into<Condition>) -> Self {
        self.conditions.push(condition.into());
        self
    }

    pub fn with_conditions(mut self, conditions: impl IntoIterator<Item = Condition>) -> Self {
        self.conditions.extend(conditions);
        self
    }

    pub fn build(self) -> SqlResult<SqlUpdate> {
        let update = SqlUpdate {
            table: self.table,
            assignments: self.assignments,
            conditions: self.conditions,
        };
        update.validate()?;
        Ok(update)
    }
}

/// A DELETE statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqlDelete {
    table: FromTable,
    #[serde(default)]
    conditions: Vec<Condition>,
}

impl SqlDelete {
    pub fn builder(table: FromTable) -> SqlDeleteBuilder {
        SqlDeleteBuilder {
            table,
            conditions: vec![],
        }
    }

    pub fn table(&self) -> &FromTable {
        &self.table
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn validate(&self) -> SqlResult<()> {
        validate_target("SqlDelete", &self.table)?;
        self.conditions.iter().try_for_each(Condition::validate)
    }
}

#[derive(Debug)]
pub struct SqlDeleteBuilder {
    table: FromTable,
    conditions: Vec<Condition>,
}

impl SqlDeleteBuilder {
    pub fn with_condition(mut self, condition: impl Into<Condition>) -> Self {
        self.conditions.push(condition.into());
        self
    }

    pub fn with_conditions(mut self, conditions: impl IntoIterator<Item = Condition>) -> Self {
        self.conditions.extend(conditions);
        self
    }

    pub fn build(self) -> SqlResult<SqlDelete> {
        let delete = SqlDelete {
            table: self.table,
            conditions: self.conditions,
        };
        delete.validate()?;
        Ok(delete)
    }
}
