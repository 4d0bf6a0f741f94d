use crate::ast::{Operator, SqlType};
use crate::transpiler::dialect::{
    BooleanStyle, ConcatStyle, DialectConfig, FunctionNames, IdentityStyle, LimitStyle,
    LocateStyle, SequenceStyle, TableAliasStyle,
};

const TYPES: &[(SqlType, &str)] = &[
    (SqlType::Boolean, "number(1)"),
    (SqlType::SmallInt, "number(5)"),
    (SqlType::Integer, "number(10)"),
    (SqlType::BigInt, "number(19)"),
    (SqlType::Real, "binary_float"),
    (SqlType::Double, "binary_double"),
    (SqlType::Decimal, "number"),
    (SqlType::Char, "char"),
    (SqlType::Varchar, "varchar2"),
    (SqlType::Clob, "clob"),
    (SqlType::Blob, "blob"),
    (SqlType::Date, "date"),
    // DATE carries a time of day
    (SqlType::Time, "date"),
    (SqlType::Timestamp, "timestamp"),
];

/// Oracle. No `AS` before table aliases, no SQL boolean type, no
/// CURRENT_TIME, and INSTR takes its arguments target first.
pub const CONFIG: DialectConfig = DialectConfig {
    name: "oracle",
    table_alias: TableAliasStyle::Bare,
    operators: &[
        (Operator::EqualsTrue, "= 1"),
        (Operator::EqualsFalse, "= 0"),
    ],
    functions: FunctionNames {
        substring: "SUBSTR",
        length: "LENGTH",
    },
    locate: LocateStyle::Instr,
    concat: ConcatStyle::Operator,
    booleans: BooleanStyle::Numeric,
    limit: LimitStyle::OffsetFetch,
    supports_current_time: false,
    identity: IdentityStyle::GeneratedByDefault,
    sequences: SequenceStyle::Dual,
    types: TYPES,
    rewrites: &[],
};
