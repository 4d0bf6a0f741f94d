use serde::{Deserialize, Serialize};

use crate::ast::{AggregateFunction, ArithmeticOp, FromTable, Literal, TrimSpec};
use crate::error::{SqlError, SqlResult};

/// A column name with an optional output alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    name: String,
    #[serde(default)]
    alias: Option<String>,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Output alias, rendered only in a select list.
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }
}

/// Where a [`TableColumn`] comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnSource {
    Table(FromTable),
    /// A FROM-clause subquery, referenced by its alias
    Subquery { alias: String },
}

/// A column qualified by its source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableColumn {
    source: ColumnSource,
    column: Column,
}

impl TableColumn {
    pub fn new(table: &FromTable, column: Column) -> Self {
        Self {
            source: ColumnSource::Table(table.reference()),
            column,
        }
    }

    pub fn from_subquery(alias: impl Into<String>, column: Column) -> Self {
        Self {
            source: ColumnSource::Subquery {
                alias: alias.into(),
            },
            column,
        }
    }

    pub fn source(&self) -> &ColumnSource {
        &self.source
    }

    pub fn column(&self) -> &Column {
        &self.column
    }

    /// The qualifier this column renders with, if any.
    pub fn qualifier(&self) -> Option<&str> {
        match &self.source {
            ColumnSource::Table(t) => t.alias(),
            ColumnSource::Subquery { alias } => Some(alias),
        }
    }
}

/// A select-list entry with an optional output alias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectItem {
    value: Value,
    #[serde(default)]
    alias: Option<String>,
}

impl SelectItem {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            alias: None,
        }
    }

    pub fn aliased(value: impl Into<Value>, alias: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            alias: Some(alias.into()),
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }
}

/// String search: position of `pattern` in `target`, 1-based, 0 when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Locate {
    pattern: Value,
    target: Value,
    #[serde(default)]
    start: Option<Value>,
}

impl Locate {
    pub fn new(pattern: impl Into<Value>, target: impl Into<Value>) -> Self {
        Self {
            pattern: pattern.into(),
            target: target.into(),
            start: None,
        }
    }

    pub fn with_start(mut self, start: impl Into<Value>) -> Self {
        self.start = Some(start.into());
        self
    }

    pub fn pattern(&self) -> &Value {
        &self.pattern
    }

    pub fn target(&self) -> &Value {
        &self.target
    }

    pub fn start(&self) -> Option<&Value> {
        self.start.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Substring {
    target: Value,
    start: Value,
    #[serde(default)]
    length: Option<Value>,
}

impl Substring {
    pub fn new(target: impl Into<Value>, start: impl Into<Value>) -> Self {
        Self {
            target: target.into(),
            start: start.into(),
            length: None,
        }
    }

    pub fn with_length(mut self, length: impl Into<Value>) -> Self {
        self.length = Some(length.into());
        self
    }

    pub fn target(&self) -> &Value {
        &self.target
    }

    pub fn start(&self) -> &Value {
        &self.start
    }

    pub fn length(&self) -> Option<&Value> {
        self.length.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trim {
    target: Value,
    #[serde(default)]
    spec: Option<TrimSpec>,
    #[serde(default)]
    character: Option<char>,
}

impl Trim {
    pub fn new(target: impl Into<Value>) -> Self {
        Self {
            target: target.into(),
            spec: None,
            character: None,
        }
    }

    pub fn with_spec(mut self, spec: TrimSpec) -> Self {
        self.spec = Some(spec);
        self
    }

    pub fn with_character(mut self, character: char) -> Self {
        self.character = Some(character);
        self
    }

    pub fn target(&self) -> &Value {
        &self.target
    }

    pub fn spec(&self) -> Option<TrimSpec> {
        self.spec
    }

    pub fn character(&self) -> Option<char> {
        self.character
    }
}

/// Scalar functions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Function {
    Abs(Value),
    Sqrt(Value),
    Lower(Value),
    Upper(Value),
    Length(Value),
    Concat(Vec<Value>),
    Trim(Trim),
    Substring(Substring),
    Locate(Locate),
    Coalesce(Vec<Value>),
    Nullif(Value, Value),
    Mod(Value, Value),
    CurrentDate,
    CurrentTime,
    CurrentTimestamp,
}

impl Function {
    /// Check the arguments, recursively.
    pub fn validate(&self) -> SqlResult<()> {
        match self {
            Function::Concat(args) | Function::Coalesce(args) => {
                if args.is_empty() {
                    return Err(SqlError::invalid(self.tag(), "at least one argument"));
                }
                args.iter().try_for_each(Value::validate)
            }
            Function::Abs(v)
            | Function::Sqrt(v)
            | Function::Lower(v)
            | Function::Upper(v)
            | Function::Length(v) => v.validate(),
            Function::Trim(t) => t.target.validate(),
            Function::Substring(s) => {
                s.target.validate()?;
                s.start.validate()?;
                s.length.as_ref().map_or(Ok(()), Value::validate)
            }
            Function::Locate(l) => {
                l.pattern.validate()?;
                l.target.validate()?;
                l.start.as_ref().map_or(Ok(()), Value::validate)
            }
            Function::Nullif(a, b) | Function::Mod(a, b) => {
                a.validate()?;
                b.validate()
            }
            Function::CurrentDate | Function::CurrentTime | Function::CurrentTimestamp => Ok(()),
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Function::Abs(_) => "Abs",
            Function::Sqrt(_) => "Sqrt",
            Function::Lower(_) => "Lower",
            Function::Upper(_) => "Upper",
            Function::Length(_) => "Length",
            Function::Concat(_) => "Concat",
            Function::Trim(_) => "Trim",
            Function::Substring(_) => "Substring",
            Function::Locate(_) => "Locate",
            Function::Coalesce(_) => "Coalesce",
            Function::Nullif(_, _) => "Nullif",
            Function::Mod(_, _) => "Mod",
            Function::CurrentDate => "CurrentDate",
            Function::CurrentTime => "CurrentTime",
            Function::CurrentTimestamp => "CurrentTimestamp",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregate {
    function: AggregateFunction,
    argument: Value,
}

impl Aggregate {
    pub fn new(function: AggregateFunction, argument: impl Into<Value>) -> Self {
        Self {
            function,
            argument: argument.into(),
        }
    }

    pub fn function(&self) -> AggregateFunction {
        self.function
    }

    pub fn argument(&self) -> &Value {
        &self.argument
    }
}

/// Arithmetic over two values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqlBinaryExpression {
    op: ArithmeticOp,
    left: Value,
    right: Value,
}

impl SqlBinaryExpression {
    pub fn new(op: ArithmeticOp, left: impl Into<Value>, right: impl Into<Value>) -> Self {
        Self {
            op,
            left: left.into(),
            right: right.into(),
        }
    }

    pub fn op(&self) -> ArithmeticOp {
        self.op
    }

    pub fn left(&self) -> &Value {
        &self.left
    }

    pub fn right(&self) -> &Value {
        &self.right
    }
}

/// Any renderable SQL expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Column(Column),
    TableColumn(TableColumn),
    Literal(Literal),
    SelectItem(Box<SelectItem>),
    Function(Box<Function>),
    Aggregate(Box<Aggregate>),
    /// `distinct <value>`, as an aggregate argument
    Distinct(Box<Value>),
    Binary(Box<SqlBinaryExpression>),
}

impl Value {
    /// Check the invariants builders cannot enforce, e.g. after deserializing.
    pub fn validate(&self) -> SqlResult<()> {
        match self {
            Value::Column(_) | Value::TableColumn(_) => Ok(()),
            Value::Literal(l) => l.validate(),
            Value::SelectItem(item) => item.value.validate(),
            Value::Function(f) => f.validate(),
            Value::Aggregate(a) => a.argument.validate(),
            Value::Distinct(v) => v.validate(),
            Value::Binary(b) => {
                b.left.validate()?;
                b.right.validate()
            }
        }
    }

    /// Variant name used in diagnostics.
    pub fn tag(&self) -> &'static str {
        match self {
            Value::Column(_) => "Column",
            Value::TableColumn(_) => "TableColumn",
            Value::Literal(_) => "Literal",
            Value::SelectItem(_) => "SelectItem",
            Value::Function(f) => f.tag(),
            Value::Aggregate(_) => "Aggregate",
            Value::Distinct(_) => "Distinct",
            Value::Binary(_) => "SqlBinaryExpression",
        }
    }
}

impl From<Column> for Value {
    fn from(c: Column) -> Self {
        Value::Column(c)
    }
}

impl From<TableColumn> for Value {
    fn from(c: TableColumn) -> Self {
        Value::TableColumn(c)
    }
}

impl From<Literal> for Value {
    fn from(l: Literal) -> Self {
        Value::Literal(l)
    }
}

impl From<SelectItem> for Value {
    fn from(item: SelectItem) -> Self {
        Value::SelectItem(Box::new(item))
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Value::Function(Box::new(f))
    }
}

impl From<Locate> for Value {
    fn from(l: Locate) -> Self {
        Function::Locate(l).into()
    }
}

impl From<Substring> for Value {
    fn from(s: Substring) -> Self {
        Function::Substring(s).into()
    }
}

impl From<Trim> for Value {
    fn from(t: Trim) -> Self {
        Function::Trim(t).into()
    }
}

impl From<Aggregate> for Value {
    fn from(a: Aggregate) -> Self {
        Value::Aggregate(Box::new(a))
    }
}

impl From<SqlBinaryExpression> for Value {
    fn from(e: SqlBinaryExpression) -> Self {
        Value::Binary(Box::new(e))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Literal(Literal::Integer(n))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Literal(Literal::Integer(n as i64))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Literal(Literal::from(s))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Literal(Literal::Boolean(b))
    }
}
