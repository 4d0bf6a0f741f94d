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
    (SqlType::Clob, "longtext"),
    (SqlType::Blob, "longblob"),
    (SqlType::Date, "date"),
    (SqlType::Time, "time"),
    (SqlType::Timestamp, "datetime"),
];

/// MySQL. `||` is logical OR here, so concatenation stays a function call;
/// LENGTH counts bytes, so character length is CHAR_LENGTH.
pub const CONFIG: DialectConfig = DialectConfig {
    name: "mysql",
    table_alias: TableAliasStyle::As,
    operators: &[],
    functions: FunctionNames {
        substring: "SUBSTRING",
        length: "CHAR_LENGTH",
    },
    locate: LocateStyle::Locate,
    concat: ConcatStyle::Function,
    booleans: BooleanStyle::Keyword,
    limit: LimitStyle::LimitOffset,
    supports_current_time: true,
    identity: IdentityStyle::AutoIncrement,
    sequences: SequenceStyle::Unsupported,
    types: TYPES,
    rewrites: &[],
};

/// MariaDB: MySQL plus sequences.
pub const MARIADB_CONFIG: DialectConfig = DialectConfig {
    name: "mariadb",
    sequences: SequenceStyle::NextValueFor,
    ..CONFIG
};
