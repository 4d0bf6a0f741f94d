use serde::{Deserialize, Serialize};

use crate::ast::{Condition, FromSource, SortOrder, Value};
use crate::error::{SqlError, SqlResult};

/// GROUP BY columns, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupBy {
    columns: Vec<Value>,
}

impl GroupBy {
    pub fn new(columns: Vec<Value>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[Value] {
        &self.columns
    }
}

/// One ORDER BY entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBy {
    value: Value,
    #[serde(default)]
    order: SortOrder,
}

impl OrderBy {
    pub fn asc(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            order: SortOrder::Asc,
        }
    }

    pub fn desc(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            order: SortOrder::Desc,
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }
}

/// Row window of a select (max results / first result).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResultLimit {
    #[serde(default)]
    pub max_results: Option<u64>,
    #[serde(default)]
    pub first_result: Option<u64>,
}

impl ResultLimit {
    pub fn new(max_results: Option<u64>, first_result: Option<u64>) -> Self {
        Self {
            max_results,
            first_result,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.max_results.is_none() && self.first_result.is_none()
    }
}

/// A SELECT statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqlSelect {
    from: Vec<FromSource>,
    values: Vec<Value>,
    #[serde(default)]
    conditions: Vec<Condition>,
    #[serde(default)]
    group_by: Option<GroupBy>,
    #[serde(default)]
    having: Option<Condition>,
    #[serde(default)]
    order_by: Vec<OrderBy>,
    #[serde(default)]
    distinct: bool,
    #[serde(default)]
    result_limit: Option<ResultLimit>,
}

impl SqlSelect {
    pub fn builder() -> SqlSelectBuilder {
        SqlSelectBuilder::default()
    }

    pub fn from(&self) -> &[FromSource] {
        &self.from
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Top-level conditions, implicitly AND-ed.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn group_by(&self) -> Option<&GroupBy> {
        self.group_by.as_ref()
    }

    pub fn having(&self) -> Option<&Condition> {
        self.having.as_ref()
    }

    pub fn order_by(&self) -> &[OrderBy] {
        &self.order_by
    }

    pub fn is_distinct(&self) -> bool {
        self.distinct
    }

    pub fn result_limit(&self) -> Option<&ResultLimit> {
        self.result_limit.as_ref().filter(|l| !l.is_empty())
    }

    pub fn validate(&self) -> SqlResult<()> {
        if self.from.is_empty() {
            return Err(SqlError::invalid("SqlSelect", "a FROM source"));
        }
        if self.values.is_empty() {
            return Err(SqlError::invalid("SqlSelect", "at least one output value"));
        }
        for source in &self.from {
            source.validate()?;
        }
        self.values.iter().try_for_each(Value::validate)?;
        for condition in &self.conditions {
            condition.validate()?;
        }
        if let Some(group_by) = &self.group_by {
            if group_by.columns.is_empty() {
                return Err(SqlError::invalid("SqlSelect", "at least one GROUP BY column"));
            }
            group_by.columns.iter().try_for_each(Value::validate)?;
        }
        if let Some(having) = &self.having {
            having.validate()?;
        }
        self.order_by.iter().try_for_each(|o| o.value.validate())
    }
}

/// Accumulates the parts of a [`SqlSelect`].
#[derive(Debug, Default)]
pub struct SqlSelectBuilder {
    from: Vec<FromSource>,
    values: Vec<Value>,
    conditions: Vec<Condition>,
    group_by: Option<GroupBy>,
    having: Option<Condition>,
    order_by: Vec<OrderBy>,
    distinct: bool,
    result_limit: Option<ResultLimit>,
}

impl SqlSelectBuilder {
    pub fn from(mut self, source: impl Into<FromSource>) -> Self {
        self.from.push(source.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.values.push(value.into());
        self
    }

    pub fn with_values(mut self, values: impl IntoIterator<Item = Value>) -> Self {
        self.values.extend(values);
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

    pub fn with_group_by(mut self, group_by: GroupBy) -> Self {
        self.group_by = Some(group_by);
        self
    }

    pub fn with_having(mut self, having: impl Into<Condition>) -> Self {
        self.having = Some(having.into());
        self
    }

    pub fn with_order_by(mut self, order_by: impl IntoIterator<Item = OrderBy>) -> Self {
        self.order_by.extend(order_by);
        self
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    pub fn with_result_limit(mut self, limit: ResultLimit) -> Self {
        self.result_limit = Some(limit);
        self
    }

    pub fn build(self) -> SqlResult<SqlSelect> {
        let select = SqlSelect {
            from: self.from,
            values: self.values,
            conditions: self.conditions,
            group_by: self.group_by,
            having: self.having,
            order_by: self.order_by,
            distinct: self.distinct,
            result_limit: self.result_limit,
        };
        select.validate()?;
        Ok(select)
    }
}
