//! Relation sources of a statement's FROM section.

use serde::{Deserialize, Serialize};

use crate::alias::AliasGenerator;
use crate::ast::{Column, JoinType, SqlSelect};
use crate::error::{SqlError, SqlResult};

/// A table in a FROM clause, with its joins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FromTable {
    name: String,
    #[serde(default)]
    alias: Option<String>,
    #[serde(default)]
    joins: Vec<FromJoin>,
}

impl FromTable {
    /// An unaliased table. Columns of it render unqualified.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            joins: vec![],
        }
    }

    /// A table aliased by the statement's alias allocator.
    pub fn aliased(name: impl Into<String>, aliases: &mut AliasGenerator) -> Self {
        let name = name.into();
        let alias = aliases.alias_for(&name);
        Self::new(name).with_alias(alias)
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_join(mut self, join: FromJoin) -> Self {
        self.joins.push(join);
        self
    }

    pub fn with_joins(mut self, joins: impl IntoIterator<Item = FromJoin>) -> Self {
        self.joins.extend(joins);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn joins(&self) -> &[FromJoin] {
        &self.joins
    }

    /// The same table without its joins, as embedded in column references.
    pub fn reference(&self) -> FromTable {
        Self {
            name: self.name.clone(),
            alias: self.alias.clone(),
            joins: vec![],
        }
    }

    pub fn validate(&self) -> SqlResult<()> {
        if self.name.is_empty() {
            return Err(SqlError::invalid("FromTable", "a table name"));
        }
        if !self.joins.is_empty() && self.alias.is_none() {
            return Err(SqlError::invalid(
                "FromTable",
                format!("an alias on joined table '{}'", self.name),
            ));
        }
        for join in &self.joins {
            join.validate()?;
        }
        Ok(())
    }
}

/// A join from the owning [`FromTable`] to `target`.
///
/// `from_columns[i]` belongs to the owning table and is matched for equality
/// with `to_columns[i]` of the target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FromJoin {
    target: FromTable,
    #[serde(default)]
    join_type: JoinType,
    from_columns: Vec<Column>,
    to_columns: Vec<Column>,
}

impl FromJoin {
    pub fn inner(
        target: FromTable,
        from_columns: Vec<Column>,
        to_columns: Vec<Column>,
    ) -> SqlResult<Self> {
        Self::new(JoinType::Inner, target, from_columns, to_columns)
    }

    pub fn left_outer(
        target: FromTable,
        from_columns: Vec<Column>,
        to_columns: Vec<Column>,
    ) -> SqlResult<Self> {
        Self::new(JoinType::LeftOuter, target, from_columns, to_columns)
    }

    pub fn new(
        join_type: JoinType,
        target: FromTable,
        from_columns: Vec<Column>,
        to_columns: Vec<Column>,
    ) -> SqlResult<Self> {
        let join = Self {
            target,
            join_type,
            from_columns,
            to_columns,
        };
        join.validate()?;
        Ok(join)
    }

    pub fn target(&self) -> &FromTable {
        &self.target
    }

    pub fn join_type(&self) -> JoinType {
        self.join_type
    }

    pub fn from_columns(&self) -> &[Column] {
        &self.from_columns
    }

    pub fn to_columns(&self) -> &[Column] {
        &self.to_columns
    }

    /// Column pairs of the ON clause, in declaration order.
    pub fn column_pairs(&self) -> impl Iterator<Item = (&Column, &Column)> {
        self.from_columns.iter().zip(self.to_columns.iter())
    }

    pub fn validate(&self) -> SqlResult<()> {
        if self.from_columns.is_empty() {
            return Err(SqlError::invalid("FromJoin", "at least one join column"));
        }
        if self.from_columns.len() != self.to_columns.len() {
            return Err(SqlError::invalid(
                "FromJoin",
                format!(
                    "as many target columns as source columns ({} != {})",
                    self.to_columns.len(),
                    self.from_columns.len()
                ),
            ));
        }
        if self.target.alias.is_none() {
            return Err(SqlError::invalid(
                "FromJoin",
                format!("an alias on join target '{}'", self.target.name),
            ));
        }
        self.target.validate()
    }
}

/// A subquery in a FROM clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FromSelect {
    select: Box<SqlSelect>,
    alias: String,
}

impl FromSelect {
    pub fn new(select: SqlSelect, alias: impl Into<String>) -> Self {
        Self {
            select: Box::new(select),
            alias: alias.into(),
        }
    }

    pub fn select(&self) -> &SqlSelect {
        &self.select
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn validate(&self) -> SqlResult<()> {
        if self.alias.is_empty() {
            return Err(SqlError::invalid("FromSelect", "an alias"));
        }
        self.select.validate()
    }
}

/// One entry of a FROM clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FromSource {
    Table(FromTable),
    Subquery(FromSelect),
}

impl FromSource {
    pub fn validate(&self) -> SqlResult<()> {
        match self {
            FromSource::Table(t) => t.validate(),
            FromSource::Subquery(s) => s.validate(),
        }
    }
}

impl From<FromTable> for FromSource {
    fn from(table: FromTable) -> Self {
        FromSource::Table(table)
    }
}

impl From<FromSelect> for FromSource {
    fn from(select: FromSelect) -> Self {
        FromSource::Subquery(select)
    }
}
