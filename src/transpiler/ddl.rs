use std::collections::HashSet;

use crate::ast::{
    ColumnDeclaration, ForeignKeyDeclaration, SqlCreateJoinTable, SqlCreateSequence,
    SqlCreateTable, SqlType,
};
use crate::error::{SqlError, SqlResult};
use crate::transpiler::ParamContext;
use crate::transpiler::dialect::{DialectConfig, IdentityStyle, SequenceStyle};

const DEFAULT_VARCHAR_LENGTH: u32 = 255;

/// Generate CREATE TABLE SQL for an entity table.
///
/// Key columns come first, then the declared columns, then any foreign key
/// column not declared already.
pub fn build_create_table(table: &SqlCreateTable, ctx: &ParamContext) -> SqlResult<String> {
    let mut declared: HashSet<&str> = HashSet::new();
    let mut defs = Vec::new();

    for column in table.primary_key().columns() {
        declared.insert(column.name());
        defs.push(column_definition(column, true, ctx.config)?);
    }
    for column in table.columns() {
        if declared.insert(column.name()) {
            defs.push(column_definition(column, false, ctx.config)?);
        }
    }
    for fk in table.foreign_keys() {
        for column in fk.mapping().columns() {
            if declared.insert(column.name()) {
                defs.push(column_definition(column, false, ctx.config)?);
            }
        }
    }

    let keys: Vec<&str> = table
        .primary_key()
        .columns()
        .iter()
        .map(|c| c.name())
        .collect();
    defs.push(format!("primary key ({})", keys.join(", ")));
    defs.extend(table.foreign_keys().iter().map(foreign_key));

    Ok(format!("create table {} ({})", table.name(), defs.join(", ")))
}

/// Generate CREATE TABLE SQL for a many-to-many join table.
pub fn build_create_join_table(
    table: &SqlCreateJoinTable,
    ctx: &ParamContext,
) -> SqlResult<String> {
    let mut defs = Vec::new();
    for fk in [table.owning(), table.target()] {
        for column in fk.mapping().columns() {
            defs.push(column_definition(column, false, ctx.config)?);
        }
    }
    defs.push(foreign_key(table.owning()));
    defs.push(foreign_key(table.target()));
    Ok(format!("create table {} ({})", table.name(), defs.join(", ")))
}

pub fn build_create_sequence(
    sequence: &SqlCreateSequence,
    ctx: &ParamContext,
) -> SqlResult<String> {
    if ctx.config.sequences == SequenceStyle::Unsupported {
        return Err(ctx.unsupported("SqlCreateSequence"));
    }
    Ok(format!(
        "create sequence {} start with {} increment by {}",
        sequence.name(),
        sequence.initial_value(),
        sequence.allocation_size()
    ))
}

/// Query returning the next value of a sequence.
pub fn sequence_next_value(name: &str, config: &DialectConfig) -> SqlResult<String> {
    match config.sequences {
        SequenceStyle::NextValueFor => Ok(format!("select next value for {}", name)),
        SequenceStyle::Values => Ok(format!("VALUES (NEXT VALUE FOR {})", name)),
        SequenceStyle::Nextval => Ok(format!("select nextval('{}')", name)),
        SequenceStyle::Dual => Ok(format!("select {}.nextval from dual", name)),
        SequenceStyle::Unsupported => Err(SqlError::unsupported("sequence", config.name)),
    }
}

fn column_definition(
    column: &ColumnDeclaration,
    key: bool,
    config: &DialectConfig,
) -> SqlResult<String> {
    let mut sql = format!("{} {}", column.name(), column_type(column, config)?);
    let ddl = column.ddl();
    if key || !ddl.nullable {
        sql.push_str(" not null");
    }
    if ddl.unique {
        sql.push_str(" unique");
    }
    if column.is_identity() {
        sql.push_str(match config.identity {
            IdentityStyle::GeneratedByDefault => " generated by default as identity",
            IdentityStyle::AutoIncrement => " auto_increment",
        });
    }
    Ok(sql)
}

fn column_type(column: &ColumnDeclaration, config: &DialectConfig) -> SqlResult<String> {
    let sql_type = column.sql_type();
    let name = config
        .type_name(sql_type)
        .ok_or_else(|| SqlError::unsupported(format!("{:?}", sql_type), config.name))?;
    let ddl = column.ddl();
    let params = match sql_type {
        SqlType::Varchar => Some(ddl.length.unwrap_or(DEFAULT_VARCHAR_LENGTH).to_string()),
        SqlType::Char => ddl.length.map(|l| l.to_string()),
        SqlType::Decimal => ddl
            .precision
            .map(|p| format!("{},{}", p, ddl.scale.unwrap_or(0))),
        _ => None,
    };
    Ok(match params {
        Some(params) => format!("{}({})", name, params),
        None => name.to_string(),
    })
}

fn foreign_key(fk: &ForeignKeyDeclaration) -> String {
    let columns: Vec<&str> = fk.mapping().columns().iter().map(|c| c.name()).collect();
    format!(
        "foreign key ({}) references {}",
        columns.join(", "),
        fk.referenced_table()
    )
}
