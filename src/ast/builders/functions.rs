//! Scalar function and arithmetic builders.

use crate::ast::{ArithmeticOp, Function, Locate, SelectItem, SqlBinaryExpression, Substring, Trim, Value};

pub fn abs(v: impl Into<Value>) -> Value {
    Function::Abs(v.into()).into()
}

pub fn sqrt(v: impl Into<Value>) -> Value {
    Function::Sqrt(v.into()).into()
}

pub fn lower(v: impl Into<Value>) -> Value {
    Function::Lower(v.into()).into()
}

pub fn upper(v: impl Into<Value>) -> Value {
    Function::Upper(v.into()).into()
}

pub fn length(v: impl Into<Value>) -> Value {
    Function::Length(v.into()).into()
}

pub fn trim(v: impl Into<Value>) -> Value {
    Trim::new(v).into()
}

pub fn concat(parts: impl IntoIterator<Item = Value>) -> Value {
    Function::Concat(parts.into_iter().collect()).into()
}

/// SUBSTRING(target, start)
pub fn substring(target: impl Into<Value>, start: impl Into<Value>) -> Value {
    Substring::new(target, start).into()
}

/// Position of `pattern` in `target`, optionally searching from `start`.
pub fn locate(
    pattern: impl Into<Value>,
    target: impl Into<Value>,
    start: Option<Value>,
) -> Value {
    let locate = Locate::new(pattern, target);
    match start {
        Some(start) => locate.with_start(start).into(),
        None => locate.into(),
    }
}

pub fn coalesce(args: impl IntoIterator<Item = Value>) -> Value {
    Function::Coalesce(args.into_iter().collect()).into()
}

pub fn nullif(a: impl Into<Value>, b: impl Into<Value>) -> Value {
    Function::Nullif(a.into(), b.into()).into()
}

/// MOD(a, b); `mod` is a keyword.
pub fn modulo(a: impl Into<Value>, b: impl Into<Value>) -> Value {
    Function::Mod(a.into(), b.into()).into()
}

pub fn current_date() -> Value {
    Function::CurrentDate.into()
}

pub fn current_time() -> Value {
    Function::CurrentTime.into()
}

pub fn current_timestamp() -> Value {
    Function::CurrentTimestamp.into()
}

/// a + b
pub fn sum_of(a: impl Into<Value>, b: impl Into<Value>) -> Value {
    SqlBinaryExpression::new(ArithmeticOp::Sum, a, b).into()
}

/// a - b
pub fn diff(a: impl Into<Value>, b: impl Into<Value>) -> Value {
    SqlBinaryExpression::new(ArithmeticOp::Diff, a, b).into()
}

/// a * b
pub fn prod(a: impl Into<Value>, b: impl Into<Value>) -> Value {
    SqlBinaryExpression::new(ArithmeticOp::Prod, a, b).into()
}

/// a / b
pub fn quot(a: impl Into<Value>, b: impl Into<Value>) -> Value {
    SqlBinaryExpression::new(ArithmeticOp::Quot, a, b).into()
}

/// `value AS alias` in a select list
pub fn select_as(value: impl Into<Value>, alias: &str) -> Value {
    SelectItem::aliased(value, alias).into()
}
