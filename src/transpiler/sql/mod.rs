//! Per-dialect configuration tables.

pub mod ansi;
pub mod derby;
pub mod mysql;
pub mod oracle;
pub mod postgres;
