pub mod builders;
pub mod cmd;
pub mod conditions;
pub mod ddl;
pub mod expr;
pub mod from;
pub mod operators;
pub mod values;

pub use self::cmd::{
    GroupBy, OrderBy, ResultLimit, SqlDelete, SqlDeleteBuilder, SqlInsert, SqlInsertBuilder,
    SqlSelect, SqlSelectBuilder, SqlUpdate, SqlUpdateBuilder, Statement,
};
pub use self::conditions::{
    BetweenCondition, BinaryCondition, BinaryConditionBuilder, BinaryLogicCondition, Condition,
    InCondition, LikeCondition, UnaryCondition, UnaryLogicCondition,
};
pub use self::ddl::{
    ColumnDeclaration, DdlData, DdlStatement, ForeignKeyDeclaration, JoinColumnMapping,
    PrimaryKey, SqlCreateJoinTable, SqlCreateSequence, SqlCreateSequenceBuilder, SqlCreateTable,
    SqlCreateTableBuilder, SqlType,
};
pub use self::expr::{
    Aggregate, Column, ColumnSource, Function, Locate, SelectItem, SqlBinaryExpression,
    Substring, TableColumn, Trim, Value,
};
pub use self::from::{FromJoin, FromSelect, FromSource, FromTable};
pub use self::operators::{
    AggregateFunction, ArithmeticOp, ComparisonType, JoinType, LogicType, Operator, SortOrder,
    TrimSpec, UnaryConditionType,
};
pub use self::values::{Literal, Parameter};
