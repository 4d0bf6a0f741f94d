use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{SqlError, SqlResult};

/// A bind parameter placeholder.
///
/// The generator renders every parameter as `?` and reports it back, in
/// placeholder order, through [`RenderedSql`](crate::transpiler::RenderedSql).
/// The label is opaque to this crate; the calling layer uses it to find the
/// value to bind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parameter {
    label: String,
}

impl Parameter {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, ":{}", self.label)
    }
}

/// An already-resolved literal or placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    /// NULL value
    Null,
    /// Boolean, spelled per dialect
    Boolean(bool),
    Integer(i64),
    Decimal(f64),
    /// Character string, rendered single-quoted
    Text(String),
    Date(NaiveDate),
    Time(NaiveTime),
    Timestamp(NaiveDateTime),
    /// Bind parameter, rendered `?`
    Parameter(Parameter),
    /// Expression text produced by the calling layer, emitted verbatim
    Raw(String),
}

impl Literal {
    pub fn parameter(label: impl Into<String>) -> Self {
        Literal::Parameter(Parameter::new(label))
    }

    pub fn raw(text: impl Into<String>) -> Self {
        Literal::Raw(text.into())
    }
}

impl Literal {
    /// NaN and the infinities have no SQL spelling.
    pub fn validate(&self) -> SqlResult<()> {
        match self {
            Literal::Decimal(n) if !n.is_finite() => Err(SqlError::invalid(
                "Literal",
                format!("a finite decimal (got {})", n),
            )),
            _ => Ok(()),
        }
    }
}

/// Quote a character string literal, doubling embedded quotes.
pub fn quote_text(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Null => write!(f, "NULL"),
            Literal::Boolean(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            Literal::Integer(n) => write!(f, "{}", n),
            Literal::Decimal(n) => write!(f, "{}", n),
            Literal::Text(s) => write!(f, "{}", quote_text(s)),
            Literal::Date(d) => write!(f, "'{}'", d.format("%Y-%m-%d")),
            Literal::Time(t) => write!(f, "'{}'", t.format("%H:%M:%S")),
            Literal::Timestamp(ts) => write!(f, "'{}'", ts.format("%Y-%m-%d %H:%M:%S")),
            Literal::Parameter(_) => write!(f, "?"),
            Literal::Raw(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Literal::Boolean(b)
    }
}

impl From<i32> for Literal {
    fn from(n: i32) -> Self {
        Literal::Integer(n as i64)
    }
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Literal::Integer(n)
    }
}

impl From<f64> for Literal {
    fn from(n: f64) -> Self {
        Literal::Decimal(n)
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::Text(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::Text(s)
    }
}

impl From<NaiveDate> for Literal {
    fn from(d: NaiveDate) -> Self {
        Literal::Date(d)
    }
}

impl From<NaiveTime> for Literal {
    fn from(t: NaiveTime) -> Self {
        Literal::Time(t)
    }
}

impl From<NaiveDateTime> for Literal {
    fn from(ts: NaiveDateTime) -> Self {
        Literal::Timestamp(ts)
    }
}

impl From<Parameter> for Literal {
    fn from(p: Parameter) -> Self {
        Literal::Parameter(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_quoting() {
        assert_eq!(Literal::from("Sam").to_string(), "'Sam'");
        assert_eq!(Literal::from("O'Hara").to_string(), "'O''Hara'");
    }

    #[test]
    fn test_temporal_literals() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(Literal::from(date).to_string(), "'2024-02-29'");

        let ts = date.and_hms_opt(8, 5, 0).unwrap();
        assert_eq!(Literal::from(ts).to_string(), "'2024-02-29 08:05:00'");
    }

    #[test]
    fn test_non_finite_decimal_is_invalid() {
        assert!(Literal::from(2.5).validate().is_ok());
        let err = Literal::from(f64::NAN).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid statement: Literal requires a finite decimal (got NaN)"
        );
        assert!(Literal::from(f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_parameter_renders_placeholder() {
        assert_eq!(Literal::parameter("id").to_string(), "?");
        assert_eq!(Parameter::new("id").to_string(), ":id");
    }
}
