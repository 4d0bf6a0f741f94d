use crate::ast::SqlType;
use crate::transpiler::dialect::{
    BooleanStyle, ConcatStyle, DialectConfig, FunctionNames, IdentityStyle, LimitStyle,
    LocateStyle, Rewrite, SequenceStyle, TableAliasStyle,
};

const TYPES: &[(SqlType, &str)] = &[
    (SqlType::Boolean, "boolean"),
    (SqlType::SmallInt, "smallint"),
    (SqlType::Integer, "integer"),
    (SqlType::BigInt, "bigint"),
    (SqlType::Real, "real"),
    (SqlType::Double, "double precision"),
    (SqlType::Decimal, "numeric"),
    (SqlType::Char, "char"),
    (SqlType::Varchar, "varchar"),
    (SqlType::Clob, "text"),
    (SqlType::Blob, "bytea"),
    (SqlType::Date, "date"),
    (SqlType::Time, "time"),
    (SqlType::Timestamp, "timestamp"),
];

/// PostgreSQL. String search is `POSITION(p IN t)`, which has no start
/// offset, so LOCATE with a start is rewritten.
pub const CONFIG: DialectConfig = DialectConfig {
    name: "postgres",
    table_alias: TableAliasStyle::As,
    operators: &[],
    functions: FunctionNames {
        substring: "SUBSTRING",
        length: "LENGTH",
    },
    locate: LocateStyle::Position,
    concat: ConcatStyle::Function,
    booleans: BooleanStyle::Keyword,
    limit: LimitStyle::LimitOffset,
    supports_current_time: true,
    identity: IdentityStyle::GeneratedByDefault,
    sequences: SequenceStyle::Nextval,
    types: TYPES,
    rewrites: &[Rewrite::LocateWithOffset],
};
