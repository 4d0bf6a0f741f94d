//! Per-statement table alias allocation.
//!
//! Aliases are assigned while a statement is built and rendered verbatim
//! afterwards; the generator never derives aliases of its own.

use std::collections::{HashMap, HashSet};

/// Hands out one short, collision-free alias per distinct table name.
///
/// The alias is the first letter of the table name, lower-cased, followed by
/// the smallest counter that makes it unique within the statement:
/// `citizen -> c`, `city -> c1`, `country -> c2`.
#[derive(Debug, Default, Clone)]
pub struct AliasGenerator {
    by_table: HashMap<String, String>,
    used: HashSet<String>,
}

impl AliasGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Alias of `table`, allocating one on first use.
    pub fn alias_for(&mut self, table: &str) -> String {
        if let Some(alias) = self.by_table.get(table) {
            return alias.clone();
        }

        let stem = table
            .chars()
            .find(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_lowercase())
            .unwrap_or('t')
            .to_string();

        let mut alias = stem.clone();
        let mut counter = 1;
        while self.used.contains(&alias) {
            alias = format!("{}{}", stem, counter);
            counter += 1;
        }

        tracing::trace!(table, alias = %alias, "allocated table alias");
        self.used.insert(alias.clone());
        self.by_table.insert(table.to_string(), alias.clone());
        alias
    }

    /// Alias already allocated to `table`, if any.
    pub fn get(&self, table: &str) -> Option<&str> {
        self.by_table.get(table).map(String::as_str)
    }

    /// Forget every allocation; the next statement starts fresh.
    pub fn reset(&mut self) {
        self.by_table.clear();
        self.used.clear();
    }
}
