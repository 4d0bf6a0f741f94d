//! Condition builders for WHERE clauses.
//!
//! The logic combinators return `SqlResult` because they need two or more
//! operands.

use crate::ast::{
    BetweenCondition, BinaryCondition, BinaryLogicCondition, ComparisonType, Condition,
    InCondition, LikeCondition, Literal, LogicType, UnaryCondition, UnaryConditionType,
    UnaryLogicCondition, Value,
};
use crate::error::SqlResult;

fn compare(comparison: ComparisonType, column: Value, expression: Literal) -> Condition {
    BinaryCondition::compare(comparison, column, Value::Literal(expression))
}

/// column = expression
pub fn eq(column: impl Into<Value>, expression: impl Into<Literal>) -> Condition {
    compare(ComparisonType::Equal, column.into(), expression.into())
}

/// column <> expression
pub fn ne(column: impl Into<Value>, expression: impl Into<Literal>) -> Condition {
    compare(ComparisonType::NotEqual, column.into(), expression.into())
}

/// column > expression
pub fn gt(column: impl Into<Value>, expression: impl Into<Literal>) -> Condition {
    compare(ComparisonType::GreaterThan, column.into(), expression.into())
}

/// column >= expression
pub fn ge(column: impl Into<Value>, expression: impl Into<Literal>) -> Condition {
    compare(ComparisonType::GreaterThanOrEqualTo, column.into(), expression.into())
}

/// column < expression
pub fn lt(column: impl Into<Value>, expression: impl Into<Literal>) -> Condition {
    compare(ComparisonType::LessThan, column.into(), expression.into())
}

/// column <= expression
pub fn le(column: impl Into<Value>, expression: impl Into<Literal>) -> Condition {
    compare(ComparisonType::LessThanOrEqualTo, column.into(), expression.into())
}

/// Column-to-column equality.
pub fn eq_col(left: impl Into<Value>, right: impl Into<Value>) -> Condition {
    BinaryCondition::compare(ComparisonType::Equal, left.into(), right.into())
}

pub fn is_null(operand: impl Into<Value>) -> Condition {
    UnaryCondition::new(UnaryConditionType::IsNull, operand).into()
}

pub fn is_not_null(operand: impl Into<Value>) -> Condition {
    UnaryCondition::new(UnaryConditionType::IsNotNull, operand).into()
}

pub fn equals_true(operand: impl Into<Value>) -> Condition {
    UnaryCondition::new(UnaryConditionType::EqualsTrue, operand).into()
}

pub fn equals_false(operand: impl Into<Value>) -> Condition {
    UnaryCondition::new(UnaryConditionType::EqualsFalse, operand).into()
}

pub fn between(
    operand: impl Into<Value>,
    low: impl Into<Value>,
    high: impl Into<Value>,
) -> Condition {
    BetweenCondition::new(operand, low, high).into()
}

pub fn not_between(
    operand: impl Into<Value>,
    low: impl Into<Value>,
    high: impl Into<Value>,
) -> Condition {
    BetweenCondition::new(operand, low, high).negated().into()
}

pub fn like(operand: impl Into<Value>, pattern: impl Into<Value>) -> Condition {
    LikeCondition::new(operand, pattern).into()
}

pub fn in_list<L: Into<Literal>>(
    operand: impl Into<Value>,
    values: impl IntoIterator<Item = L>,
) -> Condition {
    InCondition::new(operand, values).into()
}

pub fn not_in<L: Into<Literal>>(
    operand: impl Into<Value>,
    values: impl IntoIterator<Item = L>,
) -> Condition {
    InCondition::new(operand, values).negated().into()
}

pub fn and(conditions: Vec<Condition>) -> SqlResult<Condition> {
    BinaryLogicCondition::new(LogicType::And, conditions).map(Condition::from)
}

pub fn or(conditions: Vec<Condition>) -> SqlResult<Condition> {
    BinaryLogicCondition::new(LogicType::Or, conditions).map(Condition::from)
}

pub fn not(condition: Condition) -> Condition {
    UnaryLogicCondition::not(condition).into()
}
