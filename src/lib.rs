//! # relgen: relational query model and multi-dialect SQL generator
//!
//! Statements are built as immutable trees of typed nodes (columns, table
//! references, joins, conditions, functions, aggregates) and rendered to
//! literal SQL text for one of several dialects.
//!
//! ## Quick Example
//!
//! ```
//! use relgen::prelude::*;
//!
//! let citizen = FromTable::new("citizen").with_alias("c");
//! let select = SqlSelect::builder()
//!     .from(citizen.clone())
//!     .with_value(table_col(&citizen, "id"))
//!     .with_condition(eq(table_col(&citizen, "first_name"), "Sam"))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     select.to_sql().unwrap(),
//!     "select c.id from citizen AS c where c.first_name = 'Sam'"
//! );
//! assert_eq!(
//!     select.to_sql_with_dialect(Dialect::Oracle).unwrap(),
//!     "select c.id from citizen c where c.first_name = 'Sam'"
//! );
//! ```
//!
//! ## Dialects
//!
//! | Dialect    | Table alias | String search          | Concatenation |
//! |------------|-------------|------------------------|---------------|
//! | `default`  | `T AS a`    | `LOCATE(p, t)`         | `CONCAT(..)`  |
//! | `derby`    | `T AS a`    | `LOCATE(p, t)`         | `a \|\| b`    |
//! | `mysql`    | `T AS a`    | `LOCATE(p, t)`         | `CONCAT(..)`  |
//! | `mariadb`  | `T AS a`    | `LOCATE(p, t)`         | `CONCAT(..)`  |
//! | `oracle`   | `T a`       | `INSTR(t, p)`          | `a \|\| b`    |
//! | `postgres` | `T AS a`    | `POSITION(p IN t)`     | `CONCAT(..)`  |

pub mod alias;
pub mod ast;
pub mod config;
pub mod error;
pub mod transpiler;

pub mod prelude {
    pub use crate::alias::AliasGenerator;
    pub use crate::ast::builders::{
        abs, and, avg, between, coalesce, col, concat, count, count_distinct, current_date,
        current_time, current_timestamp, diff, eq, eq_col, equals_false, equals_true, ge, gt,
        in_list, int, is_not_null, is_null, le, length, like, locate, lower, lt, max, min, modulo,
        ne, not, not_between, not_in, null, nullif, or, param, prod, quot, raw, select_as, sqrt,
        substring, sum, sum_of, table_col, text, trim, upper,
    };
    pub use crate::ast::*;
    pub use crate::error::*;
    pub use crate::transpiler::{Dialect, RenderedSql, StatementGenerator, ToSql};
}
