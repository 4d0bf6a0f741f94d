use crate::ast::SqlType;
use crate::transpiler::dialect::{
    BooleanStyle, ConcatStyle, DialectConfig, FunctionNames, IdentityStyle, LimitStyle,
    LocateStyle, SequenceStyle, TableAliasStyle,
};

const TYPES: &[(SqlType, &str)] = &[
    (SqlType::Boolean, "boolean"),
    (SqlType::SmallInt, "smallint"),
    (SqlType::Integer, "integer"),
    (SqlType::BigInt, "bigint"),
    (SqlType::Real, "real"),
    (SqlType::Double, "double"),
    (SqlType::Decimal, "decimal"),
    (SqlType::Char, "char"),
    (SqlType::Varchar, "varchar"),
    (SqlType::Clob, "clob"),
    (SqlType::Blob, "blob"),
    (SqlType::Date, "date"),
    (SqlType::Time, "time"),
    (SqlType::Timestamp, "timestamp"),
];

/// Apache Derby. No CONCAT function, SUBSTR instead of SUBSTRING, and
/// OFFSET/FETCH row windows.
pub const CONFIG: DialectConfig = DialectConfig {
    name: "derby",
    table_alias: TableAliasStyle::As,
    operators: &[],
    functions: FunctionNames {
        substring: "SUBSTR",
        length: "LENGTH",
    },
    locate: LocateStyle::Locate,
    concat: ConcatStyle::Operator,
    booleans: BooleanStyle::Keyword,
    limit: LimitStyle::OffsetFetch,
    supports_current_time: true,
    identity: IdentityStyle::GeneratedByDefault,
    sequences: SequenceStyle::Values,
    types: TYPES,
    rewrites: &[],
};
