//! SQL generator for the relational AST.
//!
//! Converts statement trees into literal SQL text for one dialect. The
//! rendering algorithm is shared; dialects only contribute a
//! [`DialectConfig`](dialect::DialectConfig).

pub mod conditions;
pub mod ddl;
pub mod dialect;
pub mod dml;
pub mod expr;
pub mod rewrite;
pub mod sql;

#[cfg(test)]
mod tests;

use std::sync::OnceLock;

use serde::Serialize;

use crate::ast::{
    DdlStatement, Operator, Parameter, SqlDelete, SqlInsert, SqlSelect, SqlUpdate, Statement,
};
use crate::error::{SqlError, SqlResult};

pub use dialect::{Dialect, DialectConfig, OperatorTable, Rewrite};
pub use rewrite::rewrite_locate_with_offset;

/// Rendered SQL plus the bind parameters it references, in placeholder order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedSql {
    pub sql: String,
    pub parameters: Vec<Parameter>,
}

/// State threaded through one render call.
pub struct ParamContext<'a> {
    pub config: &'a DialectConfig,
    pub operators: &'a OperatorTable,
    /// Parameters seen so far, one per emitted `?`
    pub params: Vec<Parameter>,
}

impl<'a> ParamContext<'a> {
    pub fn new(config: &'a DialectConfig, operators: &'a OperatorTable) -> Self {
        Self {
            config,
            operators,
            params: Vec::new(),
        }
    }

    /// Record a parameter and return its placeholder.
    pub fn add_param(&mut self, param: &Parameter) -> &'static str {
        self.params.push(param.clone());
        "?"
    }

    /// Token of `op` in this dialect.
    pub fn op(&self, op: Operator) -> SqlResult<&'static str> {
        self.operators
            .get(op)
            .ok_or_else(|| self.unsupported(op.to_string()))
    }

    pub fn unsupported(&self, construct: impl Into<String>) -> SqlError {
        SqlError::unsupported(construct, self.config.name)
    }
}

/// Renders statements for one dialect.
///
/// The generator holds no per-call state: one instance can be shared across
/// threads and used for any number of exports.
#[derive(Debug)]
pub struct StatementGenerator {
    config: &'static DialectConfig,
    operators: OnceLock<OperatorTable>,
}

impl StatementGenerator {
    pub fn new(dialect: Dialect) -> Self {
        Self::with_config(dialect.config())
    }

    /// A generator for a configuration not covered by [`Dialect`].
    pub fn with_config(config: &'static DialectConfig) -> Self {
        Self {
            config,
            operators: OnceLock::new(),
        }
    }

    pub fn config(&self) -> &'static DialectConfig {
        self.config
    }

    /// Build the operator table. Idempotent; exports call it on demand.
    pub fn init(&self) -> &OperatorTable {
        self.operators.get_or_init(|| {
            let table = OperatorTable::new(self.config);
            tracing::debug!(
                dialect = self.config.name,
                operators = table.len(),
                "operator table initialized"
            );
            table
        })
    }

    pub fn export(&self, statement: &Statement) -> SqlResult<String> {
        self.export_with_params(statement).map(|rendered| rendered.sql)
    }

    /// Render `statement` and report its bind parameters.
    ///
    /// The statement is validated first, so trees decoded from JSON get the
    /// same checks as built ones.
    pub fn export_with_params(&self, statement: &Statement) -> SqlResult<RenderedSql> {
        statement.validate()?;
        let mut ctx = ParamContext::new(self.config, self.init());
        let sql = match statement {
            Statement::Select(s) => dml::select::build_select(s, &mut ctx)?,
            Statement::Insert(s) => dml::insert::build_insert(s, &mut ctx)?,
            Statement::Update(s) => dml::update::build_update(s, &mut ctx)?,
            Statement::Delete(s) => dml::delete::build_delete(s, &mut ctx)?,
            Statement::CreateTable(s) => ddl::build_create_table(s, &ctx)?,
            Statement::CreateJoinTable(s) => ddl::build_create_join_table(s, &ctx)?,
            Statement::CreateSequence(s) => ddl::build_create_sequence(s, &ctx)?,
        };
        tracing::debug!(
            dialect = self.config.name,
            kind = statement.kind(),
            parameters = ctx.params.len(),
            "exported statement"
        );
        Ok(RenderedSql {
            sql,
            parameters: ctx.params,
        })
    }

    pub fn export_select(&self, select: &SqlSelect) -> SqlResult<String> {
        select.validate()?;
        let mut ctx = ParamContext::new(self.config, self.init());
        dml::select::build_select(select, &mut ctx)
    }

    pub fn export_insert(&self, insert: &SqlInsert) -> SqlResult<String> {
        insert.validate()?;
        let mut ctx = ParamContext::new(self.config, self.init());
        dml::insert::build_insert(insert, &mut ctx)
    }

    pub fn export_update(&self, update: &SqlUpdate) -> SqlResult<String> {
        update.validate()?;
        let mut ctx = ParamContext::new(self.config, self.init());
        dml::update::build_update(update, &mut ctx)
    }

    pub fn export_delete(&self, delete: &SqlDelete) -> SqlResult<String> {
        delete.validate()?;
        let mut ctx = ParamContext::new(self.config, self.init());
        dml::delete::build_delete(delete, &mut ctx)
    }

    /// Render one DDL statement.
    pub fn export_ddl_statement(&self, statement: &DdlStatement) -> SqlResult<String> {
        statement.validate()?;
        let ctx = ParamContext::new(self.config, self.init());
        let sql = match statement {
            DdlStatement::CreateTable(t) => ddl::build_create_table(t, &ctx)?,
            DdlStatement::CreateJoinTable(t) => ddl::build_create_join_table(t, &ctx)?,
            DdlStatement::CreateSequence(s) => ddl::build_create_sequence(s, &ctx)?,
        };
        Ok(sql)
    }

    /// Render a DDL batch, preserving order. Fails on the first statement
    /// the dialect cannot express.
    pub fn export_ddl(&self, statements: &[DdlStatement]) -> SqlResult<Vec<String>> {
        let rendered = statements
            .iter()
            .map(|s| self.export_ddl_statement(s))
            .collect::<SqlResult<Vec<_>>>()?;
        tracing::debug!(
            dialect = self.config.name,
            statements = rendered.len(),
            "exported ddl batch"
        );
        Ok(rendered)
    }

    /// Query returning the next value of sequence `name`.
    pub fn sequence_next_value(&self, name: &str) -> SqlResult<String> {
        ddl::sequence_next_value(name, self.config)
    }
}

impl Default for StatementGenerator {
    fn default() -> Self {
        Self::new(Dialect::default())
    }
}

/// Trait for converting statements to SQL.
pub trait ToSql {
    /// Convert this statement to SQL using the default dialect.
    fn to_sql(&self) -> SqlResult<String> {
        self.to_sql_with_dialect(Dialect::default())
    }

    /// Convert this statement to SQL with a specific dialect.
    fn to_sql_with_dialect(&self, dialect: Dialect) -> SqlResult<String>;
}

impl ToSql for Statement {
    fn to_sql_with_dialect(&self, dialect: Dialect) -> SqlResult<String> {
        StatementGenerator::new(dialect).export(self)
    }
}

impl ToSql for SqlSelect {
    fn to_sql_with_dialect(&self, dialect: Dialect) -> SqlResult<String> {
        StatementGenerator::new(dialect).export_select(self)
    }
}

impl ToSql for SqlInsert {
    fn to_sql_with_dialect(&self, dialect: Dialect) -> SqlResult<String> {
        StatementGenerator::new(dialect).export_insert(self)
    }
}

impl ToSql for SqlUpdate {
    fn to_sql_with_dialect(&self, dialect: Dialect) -> SqlResult<String> {
        StatementGenerator::new(dialect).export_update(self)
    }
}

impl ToSql for SqlDelete {
    fn to_sql_with_dialect(&self, dialect: Dialect) -> SqlResult<String> {
        StatementGenerator::new(dialect).export_delete(self)
    }
}

impl ToSql for DdlStatement {
    fn to_sql_with_dialect(&self, dialect: Dialect) -> SqlResult<String> {
        StatementGenerator::new(dialect).export_ddl_statement(self)
    }
}
