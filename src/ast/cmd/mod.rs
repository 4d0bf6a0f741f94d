mod modify;
mod select;

pub use self::modify::{
    SqlDelete, SqlDeleteBuilder, SqlInsert, SqlInsertBuilder, SqlUpdate, SqlUpdateBuilder,
};
pub use self::select::{GroupBy, OrderBy, ResultLimit, SqlSelect, SqlSelectBuilder};

use serde::{Deserialize, Serialize};

use crate::ast::{DdlStatement, SqlCreateJoinTable, SqlCreateSequence, SqlCreateTable};
use crate::error::SqlResult;

/// Any statement the generator can export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Statement {
    Select(SqlSelect),
    Insert(SqlInsert),
    Update(SqlUpdate),
    Delete(SqlDelete),
    CreateTable(SqlCreateTable),
    CreateJoinTable(SqlCreateJoinTable),
    CreateSequence(SqlCreateSequence),
}

impl Statement {
    pub fn kind(&self) -> &'static str {
        match self {
            Statement::Select(_) => "select",
            Statement::Insert(_) => "insert",
            Statement::Update(_) => "update",
            Statement::Delete(_) => "delete",
            Statement::CreateTable(_) => "create_table",
            Statement::CreateJoinTable(_) => "create_join_table",
            Statement::CreateSequence(_) => "create_sequence",
        }
    }

    /// Re-check builder invariants, e.g. after deserializing.
    pub fn validate(&self) -> SqlResult<()> {
        match self {
            Statement::Select(s) => s.validate(),
            Statement::Insert(s) => s.validate(),
            Statement::Update(s) => s.validate(),
            Statement::Delete(s) => s.validate(),
            Statement::CreateTable(s) => s.validate(),
            Statement::CreateJoinTable(s) => s.validate(),
            Statement::CreateSequence(s) => s.validate(),
        }
    }
}

impl From<SqlSelect> for Statement {
    fn from(s: SqlSelect) -> Self {
        Statement::Select(s)
    }
}

impl From<SqlInsert> for Statement {
    fn from(s: SqlInsert) -> Self {
        Statement::Insert(s)
    }
}

impl From<SqlUpdate> for Statement {
    fn from(s: SqlUpdate) -> Self {
        Statement::Update(s)
    }
}

impl From<SqlDelete> for Statement {
    fn from(s: SqlDelete) -> Self {
        Statement::Delete(s)
    }
}

impl From<SqlCreateTable> for Statement {
    fn from(s: SqlCreateTable) -> Self {
        Statement::CreateTable(s)
    }
}

impl From<SqlCreateJoinTable> for Statement {
    fn from(s: SqlCreateJoinTable) -> Self {
        Statement::CreateJoinTable(s)
    }
}

impl From<SqlCreateSequence> for Statement {
    fn from(s: SqlCreateSequence) -> Self {
        Statement::CreateSequence(s)
    }
}

impl From<DdlStatement> for Statement {
    fn from(ddl: DdlStatement) -> Self {
        match ddl {
            DdlStatement::CreateTable(t) => Statement::CreateTable(t),
            DdlStatement::CreateJoinTable(t) => Statement::CreateJoinTable(t),
            DdlStatement::CreateSequence(s) => Statement::CreateSequence(s),
        }
    }
}
