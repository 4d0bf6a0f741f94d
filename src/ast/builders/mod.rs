//! Ergonomic builder functions for relgen AST nodes.
//!
//! Short free functions that construct nodes without spelling out the
//! structs, for the calling layer and for tests.
//!
//! - `columns` - column references, literals and parameters
//! - `conditions` - WHERE clause predicates and logic combinators
//! - `functions` - scalar functions and arithmetic
//! - `aggregates` - COUNT, SUM, AVG, MIN, MAX
//!
//! # Example
//! ```
//! use relgen::ast::builders::*;
//! use relgen::ast::{FromTable, SqlSelect};
//!
//! let citizen = FromTable::new("citizen").with_alias("c");
//! let select = SqlSelect::builder()
//!     .from(citizen.clone())
//!     .with_value(table_col(&citizen, "id"))
//!     .with_condition(eq(table_col(&citizen, "first_name"), "Sam"))
//!     .build()
//!     .unwrap();
//! assert_eq!(select.values().len(), 1);
//! ```

pub mod aggregates;
pub mod columns;
pub mod conditions;
pub mod functions;

pub use aggregates::{avg, count, count_distinct, max, min, sum};
pub use columns::{col, int, null, param, raw, table_col, text};
pub use conditions::{
    and, between, eq, eq_col, equals_false, equals_true, ge, gt, in_list, is_not_null, is_null,
    le, like, lt, ne, not, not_between, not_in, or,
};
pub use functions::{
    abs, coalesce, concat, current_date, current_time, current_timestamp, diff, length, locate,
    lower, modulo, nullif, prod, quot, select_as, sqrt, substring, sum_of, trim, upper,
};
