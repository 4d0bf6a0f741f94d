use crate::ast::SqlType;
use crate::transpiler::dialect::{
    BooleanStyle, ConcatStyle, DialectConfig, FunctionNames, IdentityStyle, LimitStyle,
    LocateStyle, SequenceStyle, TableAliasStyle,
};

/// Type names shared by the ANSI-leaning dialects.
pub const TYPES: &[(SqlType, &str)] = &[
    (SqlType::Boolean, "boolean"),
    (SqlType::SmallInt, "smallint"),
    (SqlType::Integer, "integer"),
    (SqlType::BigInt, "bigint"),
    (SqlType::Real, "real"),
    (SqlType::Double, "double precision"),
    (SqlType::Decimal, "decimal"),
    (SqlType::Char, "char"),
    (SqlType::Varchar, "varchar"),
    (SqlType::Clob, "clob"),
    (SqlType::Blob, "blob"),
    (SqlType::Date, "date"),
    (SqlType::Time, "time"),
    (SqlType::Timestamp, "timestamp"),
];

/// The default, ANSI-like dialect.
pub const CONFIG: DialectConfig = DialectConfig {
    name: "default",
    table_alias: TableAliasStyle::As,
    operators: &[],
    functions: FunctionNames {
        substring: "SUBSTRING",
        length: "LENGTH",
    },
    locate: LocateStyle::Locate,
    concat: ConcatStyle::Function,
    booleans: BooleanStyle::Keyword,
    limit: LimitStyle::LimitOffset,
    supports_current_time: true,
    identity: IdentityStyle::GeneratedByDefault,
    sequences: SequenceStyle::NextValueFor,
    types: TYPES,
    rewrites: &[],
};
