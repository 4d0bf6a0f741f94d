use serde::{Deserialize, Serialize};

/// Logical operator keys of a dialect's operator spelling table.
///
/// Conditions never carry SQL text; the renderer looks up each key in the
/// active dialect's [`OperatorTable`](crate::transpiler::OperatorTable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqualTo,
    LessThan,
    LessThanOrEqualTo,
    Gt,
    Lt,
    And,
    Or,
    Not,
    IsNull,
    IsNotNull,
    EqualsTrue,
    EqualsFalse,
    Between,
    NotBetween,
    Like,
    NotLike,
    Escape,
    In,
    NotIn,
    EmptyConjunction,
    EmptyDisjunction,
}

impl Operator {
    pub const ALL: [Operator; 24] = [
        Operator::Equal,
        Operator::NotEqual,
        Operator::GreaterThan,
        Operator::GreaterThanOrEqualTo,
        Operator::LessThan,
        Operator::LessThanOrEqualTo,
        Operator::Gt,
        Operator::Lt,
        Operator::And,
        Operator::Or,
        Operator::Not,
        Operator::IsNull,
        Operator::IsNotNull,
        Operator::EqualsTrue,
        Operator::EqualsFalse,
        Operator::Between,
        Operator::NotBetween,
        Operator::Like,
        Operator::NotLike,
        Operator::Escape,
        Operator::In,
        Operator::NotIn,
        Operator::EmptyConjunction,
        Operator::EmptyDisjunction,
    ];
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Operator::Equal => "EQUAL",
            Operator::NotEqual => "NOT_EQUAL",
            Operator::GreaterThan => "GREATER_THAN",
            Operator::GreaterThanOrEqualTo => "GREATER_THAN_OR_EQUAL_TO",
            Operator::LessThan => "LESS_THAN",
            Operator::LessThanOrEqualTo => "LESS_THAN_OR_EQUAL_TO",
            Operator::Gt => "GT",
            Operator::Lt => "LT",
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Not => "NOT",
            Operator::IsNull => "IS_NULL",
            Operator::IsNotNull => "IS_NOT_NULL",
            Operator::EqualsTrue => "EQUALS_TRUE",
            Operator::EqualsFalse => "EQUALS_FALSE",
            Operator::Between => "BETWEEN",
            Operator::NotBetween => "NOT_BETWEEN",
            Operator::Like => "LIKE",
            Operator::NotLike => "NOT_LIKE",
            Operator::Escape => "ESCAPE",
            Operator::In => "IN",
            Operator::NotIn => "NOT_IN",
            Operator::EmptyConjunction => "EMPTY_CONJUNCTION",
            Operator::EmptyDisjunction => "EMPTY_DISJUNCTION",
        };
        write!(f, "{}", name)
    }
}

/// Comparison operators of a [`BinaryCondition`](crate::ast::BinaryCondition).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonType {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqualTo,
    LessThan,
    LessThanOrEqualTo,
    /// Numeric `gt`, spelled like `GreaterThan` in every shipped dialect.
    Gt,
    /// Numeric `lt`, spelled like `LessThan` in every shipped dialect.
    Lt,
}

impl ComparisonType {
    pub fn operator(self) -> Operator {
        match self {
            ComparisonType::Equal => Operator::Equal,
            ComparisonType::NotEqual => Operator::NotEqual,
            ComparisonType::GreaterThan => Operator::GreaterThan,
            ComparisonType::GreaterThanOrEqualTo => Operator::GreaterThanOrEqualTo,
            ComparisonType::LessThan => Operator::LessThan,
            ComparisonType::LessThanOrEqualTo => Operator::LessThanOrEqualTo,
            ComparisonType::Gt => Operator::Gt,
            ComparisonType::Lt => Operator::Lt,
        }
    }
}

/// Single-operand predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryConditionType {
    IsNull,
    IsNotNull,
    EqualsTrue,
    EqualsFalse,
}

impl UnaryConditionType {
    pub fn operator(self) -> Operator {
        match self {
            UnaryConditionType::IsNull => Operator::IsNull,
            UnaryConditionType::IsNotNull => Operator::IsNotNull,
            UnaryConditionType::EqualsTrue => Operator::EqualsTrue,
            UnaryConditionType::EqualsFalse => Operator::EqualsFalse,
        }
    }
}

/// Logical combinators of a [`BinaryLogicCondition`](crate::ast::BinaryLogicCondition).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicType {
    And,
    Or,
}

impl LogicType {
    pub fn operator(self) -> Operator {
        match self {
            LogicType::And => Operator::And,
            LogicType::Or => Operator::Or,
        }
    }
}

/// Arithmetic operators of a [`SqlBinaryExpression`](crate::ast::SqlBinaryExpression).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArithmeticOp {
    /// Difference (`diff` in the criteria layer)
    Diff,
    /// Subtraction, kept apart from `Diff` because the calling layer names both
    Minus,
    Prod,
    Quot,
    Sum,
}

impl std::fmt::Display for ArithmeticOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArithmeticOp::Diff | ArithmeticOp::Minus => write!(f, "-"),
            ArithmeticOp::Prod => write!(f, "*"),
            ArithmeticOp::Quot => write!(f, "/"),
            ArithmeticOp::Sum => write!(f, "+"),
        }
    }
}

/// Aggregate functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AggregateFunction {
    Count,
    Sum,
    Avg,
    Min,
    Max,
}

impl std::fmt::Display for AggregateFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AggregateFunction::Count => write!(f, "COUNT"),
            AggregateFunction::Sum => write!(f, "SUM"),
            AggregateFunction::Avg => write!(f, "AVG"),
            AggregateFunction::Min => write!(f, "MIN"),
            AggregateFunction::Max => write!(f, "MAX"),
        }
    }
}

/// Join kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JoinType {
    #[default]
    Inner,
    LeftOuter,
}

impl std::fmt::Display for JoinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JoinType::Inner => write!(f, "INNER JOIN"),
            JoinType::LeftOuter => write!(f, "LEFT OUTER JOIN"),
        }
    }
}

/// Sort order direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "ASC"),
            SortOrder::Desc => write!(f, "DESC"),
        }
    }
}

/// Which side(s) `TRIM` strips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrimSpec {
    Leading,
    Trailing,
    Both,
}

impl std::fmt::Display for TrimSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrimSpec::Leading => write!(f, "LEADING"),
            TrimSpec::Trailing => write!(f, "TRAILING"),
            TrimSpec::Both => write!(f, "BOTH"),
        }
    }
}
