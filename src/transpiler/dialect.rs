//! Dialect configuration tables.
//!
//! A dialect is data, not code: the renderer is one algorithm driven by the
//! [`DialectConfig`] of the selected [`Dialect`]. Constructs a dialect cannot
//! express natively are handled by named [`Rewrite`] hooks.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ast::{Operator, SqlType};
use crate::error::{SqlError, SqlResult};
use crate::transpiler::sql;

/// Supported SQL dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// ANSI-like default
    #[default]
    #[serde(alias = "ansi")]
    Default,
    Derby,
    MySql,
    MariaDb,
    Oracle,
    #[serde(alias = "postgresql")]
    Postgres,
}

impl Dialect {
    pub const ALL: [Dialect; 6] = [
        Dialect::Default,
        Dialect::Derby,
        Dialect::MySql,
        Dialect::MariaDb,
        Dialect::Oracle,
        Dialect::Postgres,
    ];

    pub fn config(&self) -> &'static DialectConfig {
        match self {
            Dialect::Default => &sql::ansi::CONFIG,
            Dialect::Derby => &sql::derby::CONFIG,
            Dialect::MySql => &sql::mysql::CONFIG,
            Dialect::MariaDb => &sql::mysql::MARIADB_CONFIG,
            Dialect::Oracle => &sql::oracle::CONFIG,
            Dialect::Postgres => &sql::postgres::CONFIG,
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.config().name)
    }
}

impl FromStr for Dialect {
    type Err = SqlError;

    fn from_str(s: &str) -> SqlResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "default" | "ansi" => Ok(Dialect::Default),
            "derby" => Ok(Dialect::Derby),
            "mysql" => Ok(Dialect::MySql),
            "mariadb" => Ok(Dialect::MariaDb),
            "oracle" => Ok(Dialect::Oracle),
            "postgres" | "postgresql" => Ok(Dialect::Postgres),
            other => Err(SqlError::Config(format!(
                "unknown dialect '{}'. Expected: default, derby, mysql, mariadb, oracle, postgres",
                other
            ))),
        }
    }
}

/// How a table alias follows its table name in FROM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAliasStyle {
    /// `citizen AS c`
    As,
    /// `citizen c`
    Bare,
}

/// Spelling of string search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocateStyle {
    /// `LOCATE(pattern, target[, start])`
    Locate,
    /// `INSTR(target, pattern[, start])`
    Instr,
    /// `POSITION(pattern IN target)`, no start offset
    Position,
}

/// Spelling of string concatenation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcatStyle {
    /// `CONCAT(a, b, c)`
    Function,
    /// `a || b || c`
    Operator,
}

/// Spelling of boolean literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanStyle {
    /// `TRUE` / `FALSE`
    Keyword,
    /// `1` / `0`
    Numeric,
}

/// Row window clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitStyle {
    /// ` limit n offset m`
    LimitOffset,
    /// ` offset m rows fetch next n rows only`
    OffsetFetch,
}

/// Identity column clause in CREATE TABLE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityStyle {
    /// `generated by default as identity`
    GeneratedByDefault,
    /// `auto_increment`
    AutoIncrement,
}

/// Query fetching a sequence's next value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceStyle {
    /// `select next value for s`
    NextValueFor,
    /// `VALUES (NEXT VALUE FOR s)`
    Values,
    /// `select nextval('s')`
    Nextval,
    /// `select s.nextval from dual`
    Dual,
    Unsupported,
}

/// Named AST-to-AST rewrites a dialect opts into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rewrite {
    /// LOCATE with a start offset, for dialects whose search has none
    LocateWithOffset,
}

/// Per-dialect function names that differ only by spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionNames {
    pub substring: &'static str,
    pub length: &'static str,
}

/// Everything a dialect overrides.
#[derive(Debug, Clone, Copy)]
pub struct DialectConfig {
    pub name: &'static str,
    pub table_alias: TableAliasStyle,
    /// Tokens replacing entries of [`BASE_OPERATORS`].
    pub operators: &'static [(Operator, &'static str)],
    pub functions: FunctionNames,
    pub locate: LocateStyle,
    pub concat: ConcatStyle,
    pub booleans: BooleanStyle,
    pub limit: LimitStyle,
    pub supports_current_time: bool,
    pub identity: IdentityStyle,
    pub sequences: SequenceStyle,
    /// Column type names; a type missing here cannot be declared.
    pub types: &'static [(SqlType, &'static str)],
    pub rewrites: &'static [Rewrite],
}

impl DialectConfig {
    pub fn has_rewrite(&self, rewrite: Rewrite) -> bool {
        self.rewrites.contains(&rewrite)
    }

    pub fn type_name(&self, sql_type: SqlType) -> Option<&'static str> {
        self.types
            .iter()
            .find(|(t, _)| *t == sql_type)
            .map(|(_, name)| *name)
    }

    pub fn boolean(&self, value: bool) -> &'static str {
        match (self.booleans, value) {
            (BooleanStyle::Keyword, true) => "TRUE",
            (BooleanStyle::Keyword, false) => "FALSE",
            (BooleanStyle::Numeric, true) => "1",
            (BooleanStyle::Numeric, false) => "0",
        }
    }
}

/// Operator tokens shared by every dialect unless overridden.
pub const BASE_OPERATORS: &[(Operator, &str)] = &[
    (Operator::Equal, "="),
    (Operator::NotEqual, "<>"),
    (Operator::GreaterThan, ">"),
    (Operator::GreaterThanOrEqualTo, ">="),
    (Operator::LessThan, "<"),
    (Operator::LessThanOrEqualTo, "<="),
    (Operator::Gt, ">"),
    (Operator::Lt, "<"),
    (Operator::And, "and"),
    (Operator::Or, "or"),
    (Operator::Not, "not"),
    (Operator::IsNull, "is null"),
    (Operator::IsNotNull, "is not null"),
    (Operator::EqualsTrue, "= TRUE"),
    (Operator::EqualsFalse, "= FALSE"),
    (Operator::Between, "between"),
    (Operator::NotBetween, "not between"),
    (Operator::Like, "like"),
    (Operator::NotLike, "not like"),
    (Operator::Escape, "escape"),
    (Operator::In, "in"),
    (Operator::NotIn, "not in"),
    (Operator::EmptyConjunction, "1=1"),
    (Operator::EmptyDisjunction, "1=2"),
];

/// Resolved operator spellings of one dialect.
#[derive(Debug, Clone)]
pub struct OperatorTable {
    tokens: HashMap<Operator, &'static str>,
}

impl OperatorTable {
    pub fn new(config: &DialectConfig) -> Self {
        let mut tokens: HashMap<Operator, &'static str> = BASE_OPERATORS.iter().copied().collect();
        tokens.extend(config.operators.iter().copied());
        Self { tokens }
    }

    pub fn get(&self, op: Operator) -> Option<&'static str> {
        self.tokens.get(&op).copied()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_names_round_trip() {
        for dialect in Dialect::ALL {
            assert_eq!(dialect.to_string().parse::<Dialect>().unwrap(), dialect);
        }
        assert_eq!("PostgreSQL".parse::<Dialect>().unwrap(), Dialect::Postgres);
        assert_eq!("ansi".parse::<Dialect>().unwrap(), Dialect::Default);
        assert!("sqlite".parse::<Dialect>().is_err());
    }

    #[test]
    fn test_base_table_covers_every_operator() {
        let table = OperatorTable::new(Dialect::Default.config());
        for op in Operator::ALL {
            assert!(table.get(op).is_some(), "missing token for {}", op);
        }
    }

    #[test]
    fn test_overrides_replace_base_tokens() {
        let oracle = OperatorTable::new(Dialect::Oracle.config());
        assert_eq!(oracle.get(Operator::EqualsTrue), Some("= 1"));
        assert_eq!(oracle.get(Operator::Equal), Some("="));
        assert_eq!(oracle.len(), Operator::ALL.len());
    }

    #[test]
    fn test_every_dialect_names_every_type() {
        let types = [
            SqlType::Boolean,
            SqlType::SmallInt,
            SqlType::Integer,
            SqlType::BigInt,
            SqlType::Real,
            SqlType::Double,
            SqlType::Decimal,
            SqlType::Char,
            SqlType::Varchar,
            SqlType::Clob,
            SqlType::Blob,
            SqlType::Date,
            SqlType::Time,
            SqlType::Timestamp,
        ];
        for dialect in Dialect::ALL {
            for t in types {
                assert!(
                    dialect.config().type_name(t).is_some(),
                    "{} has no name for {:?}",
                    dialect,
                    t
                );
            }
        }
    }
}
