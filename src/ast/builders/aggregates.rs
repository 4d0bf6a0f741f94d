//! Aggregate function builders (COUNT, SUM, AVG, etc.)

use crate::ast::{Aggregate, AggregateFunction, Value};

/// COUNT(value)
pub fn count(value: impl Into<Value>) -> Value {
    Aggregate::new(AggregateFunction::Count, value).into()
}

/// COUNT(distinct value)
pub fn count_distinct(value: impl Into<Value>) -> Value {
    Aggregate::new(AggregateFunction::Count, Value::Distinct(Box::new(value.into()))).into()
}

/// SUM(value)
pub fn sum(value: impl Into<Value>) -> Value {
    Aggregate::new(AggregateFunction::Sum, value).into()
}

/// AVG(value)
pub fn avg(value: impl Into<Value>) -> Value {
    Aggregate::new(AggregateFunction::Avg, value).into()
}

/// MIN(value)
pub fn min(value: impl Into<Value>) -> Value {
    Aggregate::new(AggregateFunction::Min, value).into()
}

/// MAX(value)
pub fn max(value: impl Into<Value>) -> Value {
    Aggregate::new(AggregateFunction::Max, value).into()
}
