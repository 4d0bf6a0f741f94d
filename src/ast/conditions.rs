use serde::{Deserialize, Serialize};

use crate::ast::{ComparisonType, Literal, LogicType, UnaryConditionType, Value};
use crate::error::{SqlError, SqlResult};

/// A boolean predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Condition {
    Unary(UnaryCondition),
    Binary(BinaryCondition),
    Between(BetweenCondition),
    Like(LikeCondition),
    In(InCondition),
    BinaryLogic(BinaryLogicCondition),
    UnaryLogic(UnaryLogicCondition),
    /// An AND over nothing: always true
    EmptyConjunction,
    /// An OR over nothing: always false
    EmptyDisjunction,
}

impl Condition {
    /// Variant name used in diagnostics.
    pub fn tag(&self) -> &'static str {
        match self {
            Condition::Unary(_) => "UnaryCondition",
            Condition::Binary(_) => "BinaryCondition",
            Condition::Between(_) => "BetweenCondition",
            Condition::Like(_) => "LikeCondition",
            Condition::In(_) => "InCondition",
            Condition::BinaryLogic(_) => "BinaryLogicCondition",
            Condition::UnaryLogic(_) => "UnaryLogicCondition",
            Condition::EmptyConjunction => "EmptyConjunction",
            Condition::EmptyDisjunction => "EmptyDisjunction",
        }
    }

    pub fn validate(&self) -> SqlResult<()> {
        match self {
            Condition::Unary(c) => c.operand.validate(),
            Condition::Binary(c) => {
                c.left.validate()?;
                c.right.validate()
            }
            Condition::Between(c) => {
                c.operand.validate()?;
                c.low.validate()?;
                c.high.validate()
            }
            Condition::Like(c) => {
                c.operand.validate()?;
                c.pattern.validate()?;
                c.escape.as_ref().map_or(Ok(()), Value::validate)
            }
            Condition::In(c) => {
                if c.values.is_empty() {
                    return Err(SqlError::invalid("InCondition", "at least one value"));
                }
                c.operand.validate()?;
                c.values.iter().try_for_each(Literal::validate)
            }
            Condition::BinaryLogic(c) => {
                if c.conditions.len() < 2 {
                    return Err(SqlError::invalid(
                        "BinaryLogicCondition",
                        "at least two conditions",
                    ));
                }
                c.conditions.iter().try_for_each(Condition::validate)
            }
            Condition::UnaryLogic(c) => c.condition.validate(),
            Condition::EmptyConjunction | Condition::EmptyDisjunction => Ok(()),
        }
    }
}

/// `operand IS NULL`, `operand = TRUE`, ...
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryCondition {
    kind: UnaryConditionType,
    operand: Value,
}

impl UnaryCondition {
    pub fn new(kind: UnaryConditionType, operand: impl Into<Value>) -> Self {
        Self {
            kind,
            operand: operand.into(),
        }
    }

    pub fn kind(&self) -> UnaryConditionType {
        self.kind
    }

    pub fn operand(&self) -> &Value {
        &self.operand
    }
}

/// A comparison between two operands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryCondition {
    comparison: ComparisonType,
    left: Value,
    right: Value,
}

impl BinaryCondition {
    pub fn builder(comparison: ComparisonType) -> BinaryConditionBuilder {
        BinaryConditionBuilder {
            comparison,
            left_column: None,
            left_expression: None,
            right_column: None,
            right_expression: None,
        }
    }

    /// Sides already known to be well-formed; used by the builder shortcuts.
    pub(crate) fn compare(comparison: ComparisonType, left: Value, right: Value) -> Condition {
        Condition::Binary(Self {
            comparison,
            left,
            right,
        })
    }

    pub fn comparison(&self) -> ComparisonType {
        self.comparison
    }

    pub fn left(&self) -> &Value {
        &self.left
    }

    pub fn right(&self) -> &Value {
        &self.right
    }
}

/// Builds a [`BinaryCondition`] whose sides are each either a column or a
/// literal expression, never both and never neither.
#[derive(Debug, Clone)]
pub struct BinaryConditionBuilder {
    comparison: ComparisonType,
    left_column: Option<Value>,
    left_expression: Option<Literal>,
    right_column: Option<Value>,
    right_expression: Option<Literal>,
}

impl BinaryConditionBuilder {
    pub fn with_left_column(mut self, column: impl Into<Value>) -> Self {
        self.left_column = Some(column.into());
        self
    }

    pub fn with_left_expression(mut self, expression: impl Into<Literal>) -> Self {
        self.left_expression = Some(expression.into());
        self
    }

    pub fn with_right_column(mut self, column: impl Into<Value>) -> Self {
        self.right_column = Some(column.into());
        self
    }

    pub fn with_right_expression(mut self, expression: impl Into<Literal>) -> Self {
        self.right_expression = Some(expression.into());
        self
    }

    pub fn build(self) -> SqlResult<Condition> {
        let left = Self::side("left", self.left_column, self.left_expression)?;
        let right = Self::side("right", self.right_column, self.right_expression)?;
        Ok(Condition::Binary(BinaryCondition {
            comparison: self.comparison,
            left,
            right,
        }))
    }

    fn side(name: &str, column: Option<Value>, expression: Option<Literal>) -> SqlResult<Value> {
        match (column, expression) {
            (Some(column), None) => Ok(column),
            (None, Some(expression)) => Ok(Value::Literal(expression)),
            (None, None) => Err(SqlError::invalid(
                "BinaryCondition",
                format!("a {} column or expression", name),
            )),
            (Some(_), Some(_)) => Err(SqlError::invalid(
                "BinaryCondition",
                format!("either a {} column or a {} expression, not both", name, name),
            )),
        }
    }
}

/// `operand [NOT] BETWEEN low AND high`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BetweenCondition {
    operand: Value,
    low: Value,
    high: Value,
    #[serde(default)]
    negated: bool,
}

impl BetweenCondition {
    pub fn new(operand: impl Into<Value>, low: impl Into<Value>, high: impl Into<Value>) -> Self {
        Self {
            operand: operand.into(),
            low: low.into(),
            high: high.into(),
            negated: false,
        }
    }

    pub fn negated(mut self) -> Self {
        self.negated = true;
        self
    }

    pub fn operand(&self) -> &Value {
        &self.operand
    }

    pub fn low(&self) -> &Value {
        &self.low
    }

    pub fn high(&self) -> &Value {
        &self.high
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }
}

/// `operand [NOT] LIKE pattern [ESCAPE e]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikeCondition {
    operand: Value,
    pattern: Value,
    #[serde(default)]
    escape: Option<Value>,
    #[serde(default)]
    negated: bool,
}

impl LikeCondition {
    pub fn new(operand: impl Into<Value>, pattern: impl Into<Value>) -> Self {
        Self {
            operand: operand.into(),
            pattern: pattern.into(),
            escape: None,
            negated: false,
        }
    }

    pub fn with_escape(mut self, escape: impl Into<Value>) -> Self {
        self.escape = Some(escape.into());
        self
    }

    pub fn negated(mut self) -> Self {
        self.negated = true;
        self
    }

    pub fn operand(&self) -> &Value {
        &self.operand
    }

    pub fn pattern(&self) -> &Value {
        &self.pattern
    }

    pub fn escape(&self) -> Option<&Value> {
        self.escape.as_ref()
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }
}

/// `operand [NOT] IN (v1, v2, ...)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InCondition {
    operand: Value,
    values: Vec<Literal>,
    #[serde(default)]
    negated: bool,
}

impl InCondition {
    pub fn new<L: Into<Literal>>(
        operand: impl Into<Value>,
        values: impl IntoIterator<Item = L>,
    ) -> Self {
        Self {
            operand: operand.into(),
            values: values.into_iter().map(Into::into).collect(),
            negated: false,
        }
    }

    pub fn negated(mut self) -> Self {
        self.negated = true;
        self
    }

    pub fn operand(&self) -> &Value {
        &self.operand
    }

    pub fn values(&self) -> &[Literal] {
        &self.values
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }
}

/// AND / OR over two or more conditions.
///
/// `nested` wraps the rendered group in parentheses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryLogicCondition {
    logic: LogicType,
    conditions: Vec<Condition>,
    #[serde(default)]
    nested: bool,
}

impl BinaryLogicCondition {
    /// Combine `conditions`. Operands that are logic groups of the other
    /// type are marked nested so precedence survives rendering.
    pub fn new(logic: LogicType, conditions: Vec<Condition>) -> SqlResult<Self> {
        if conditions.len() < 2 {
            return Err(SqlError::invalid(
                "BinaryLogicCondition",
                "at least two conditions",
            ));
        }
        let conditions = conditions
            .into_iter()
            .map(|c| match c {
                Condition::BinaryLogic(mut inner) if inner.logic != logic => {
                    inner.nested = true;
                    Condition::BinaryLogic(inner)
                }
                other => other,
            })
            .collect();
        Ok(Self {
            logic,
            conditions,
            nested: false,
        })
    }

    pub fn with_nested(mut self, nested: bool) -> Self {
        self.nested = nested;
        self
    }

    pub fn logic(&self) -> LogicType {
        self.logic
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn is_nested(&self) -> bool {
        self.nested
    }
}

/// NOT over one condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryLogicCondition {
    condition: Box<Condition>,
}

impl UnaryLogicCondition {
    pub fn not(condition: Condition) -> Self {
        Self {
            condition: Box::new(condition),
        }
    }

    pub fn condition(&self) -> &Condition {
        &self.condition
    }
}

impl From<UnaryCondition> for Condition {
    fn from(c: UnaryCondition) -> Self {
        Condition::Unary(c)
    }
}

impl From<BetweenCondition> for Condition {
    fn from(c: BetweenCondition) -> Self {
        Condition::Between(c)
    }
}

impl From<LikeCondition> for Condition {
    fn from(c: LikeCondition) -> Self {
        Condition::Like(c)
    }
}

impl From<InCondition> for Condition {
    fn from(c: InCondition) -> Self {
        Condition::In(c)
    }
}

impl From<BinaryLogicCondition> for Condition {
    fn from(c: BinaryLogicCondition) -> Self {
        Condition::BinaryLogic(c)
    }
}

impl From<UnaryLogicCondition> for Condition {
    fn from(c: UnaryLogicCondition) -> Self {
        Condition::UnaryLogic(c)
    }
}
