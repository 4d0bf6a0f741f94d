//! CREATE TABLE / CREATE SEQUENCE shapes.

use serde::{Deserialize, Serialize};

use crate::error::{SqlError, SqlResult};

/// Semantic column type; each dialect maps it to a type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SqlType {
    Boolean,
    SmallInt,
    Integer,
    BigInt,
    Real,
    Double,
    Decimal,
    Char,
    Varchar,
    Clob,
    Blob,
    Date,
    Time,
    Timestamp,
}

/// Optional column metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DdlData {
    #[serde(default)]
    pub length: Option<u32>,
    #[serde(default)]
    pub precision: Option<u32>,
    #[serde(default)]
    pub scale: Option<u32>,
    #[serde(default = "nullable_default")]
    pub nullable: bool,
    #[serde(default)]
    pub unique: bool,
}

fn nullable_default() -> bool {
    true
}

impl Default for DdlData {
    fn default() -> Self {
        Self {
            length: None,
            precision: None,
            scale: None,
            nullable: true,
            unique: false,
        }
    }
}

/// A column of a CREATE TABLE.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDeclaration {
    name: String,
    sql_type: SqlType,
    #[serde(default)]
    ddl: DdlData,
    #[serde(default)]
    identity: bool,
}

impl ColumnDeclaration {
    pub fn new(name: impl Into<String>, sql_type: SqlType) -> Self {
        Self {
            name: name.into(),
            sql_type,
            ddl: DdlData::default(),
            identity: false,
        }
    }

    pub fn with_ddl(mut self, ddl: DdlData) -> Self {
        self.ddl = ddl;
        self
    }

    pub fn with_length(mut self, length: u32) -> Self {
        self.ddl.length = Some(length);
        self
    }

    pub fn with_precision(mut self, precision: u32, scale: u32) -> Self {
        self.ddl.precision = Some(precision);
        self.ddl.scale = Some(scale);
        self
    }

    pub fn not_null(mut self) -> Self {
        self.ddl.nullable = false;
        self
    }

    pub fn unique(mut self) -> Self {
        self.ddl.unique = true;
        self
    }

    /// Value generated by the database on insert.
    pub fn identity(mut self) -> Self {
        self.identity = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sql_type(&self) -> SqlType {
        self.sql_type
    }

    pub fn ddl(&self) -> &DdlData {
        &self.ddl
    }

    pub fn is_identity(&self) -> bool {
        self.identity
    }
}

/// Primary key of a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PrimaryKey {
    Simple(ColumnDeclaration),
    Composite(Vec<ColumnDeclaration>),
}

impl PrimaryKey {
    pub fn columns(&self) -> &[ColumnDeclaration] {
        match self {
            PrimaryKey::Simple(c) => std::slice::from_ref(c),
            PrimaryKey::Composite(cs) => cs,
        }
    }
}

/// Join columns held by one table and pointing at another table's key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinColumnMapping {
    columns: Vec<ColumnDeclaration>,
}

impl JoinColumnMapping {
    pub fn new(columns: Vec<ColumnDeclaration>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[ColumnDeclaration] {
        &self.columns
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForeignKeyDeclaration {
    mapping: JoinColumnMapping,
    referenced_table: String,
}

impl ForeignKeyDeclaration {
    pub fn new(mapping: JoinColumnMapping, referenced_table: impl Into<String>) -> Self {
        Self {
            mapping,
            referenced_table: referenced_table.into(),
        }
    }

    pub fn mapping(&self) -> &JoinColumnMapping {
        &self.mapping
    }

    pub fn referenced_table(&self) -> &str {
        &self.referenced_table
    }

    pub fn validate(&self) -> SqlResult<()> {
        if self.mapping.columns.is_empty() {
            return Err(SqlError::invalid(
                "ForeignKeyDeclaration",
                format!("at least one join column referencing '{}'", self.referenced_table),
            ));
        }
        if self.referenced_table.is_empty() {
            return Err(SqlError::invalid("ForeignKeyDeclaration", "a referenced table"));
        }
        Ok(())
    }
}

/// CREATE TABLE for an entity table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqlCreateTable {
    name: String,
    primary_key: PrimaryKey,
    #[serde(default)]
    columns: Vec<ColumnDeclaration>,
    #[serde(default)]
    foreign_keys: Vec<ForeignKeyDeclaration>,
}

impl SqlCreateTable {
    pub fn builder(name: impl Into<String>) -> SqlCreateTableBuilder {
        SqlCreateTableBuilder {
            name: name.into(),
            primary_key: None,
            columns: vec![],
            foreign_keys: vec![],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn primary_key(&self) -> &PrimaryKey {
        &self.primary_key
    }

    pub fn columns(&self) -> &[ColumnDeclaration] {
        &self.columns
    }

    pub fn foreign_keys(&self) -> &[ForeignKeyDeclaration] {
        &self.foreign_keys
    }

    pub fn validate(&self) -> SqlResult<()> {
        if self.name.is_empty() {
            return Err(SqlError::invalid("SqlCreateTable", "a table name"));
        }
        if self.primary_key.columns().is_empty() {
            return Err(SqlError::invalid("SqlCreateTable", "at least one primary key column"));
        }
        self.foreign_keys
            .iter()
            .try_for_each(ForeignKeyDeclaration::validate)
    }
}

#[derive(Debug)]
pub struct SqlCreateTableBuilder {
    name: String,
    primary_key: Option<PrimaryKey>,
    columns: Vec<ColumnDeclaration>,
    foreign_keys: Vec<ForeignKeyDeclaration>,
}

impl SqlCreateTableBuilder {
    pub fn with_primary_key(mut self, primary_key: PrimaryKey) -> Self {
        self.primary_key = Some(primary_key);
        self
    }

    pub fn with_columns(mut self, columns: impl IntoIterator<Item = ColumnDeclaration>) -> Self {
        self.columns.extend(columns);
        self
    }

    pub fn with_foreign_key(mut self, foreign_key: ForeignKeyDeclaration) -> Self {
        self.foreign_keys.push(foreign_key);
        self
    }

    pub fn build(self) -> SqlResult<SqlCreateTable> {
        let primary_key = self
            .primary_key
            .ok_or_else(|| SqlError::invalid("SqlCreateTable", "a primary key"))?;
        let table = SqlCreateTable {
            name: self.name,
            primary_key,
            columns: self.columns,
            foreign_keys: self.foreign_keys,
        };
        table.validate()?;
        Ok(table)
    }
}

/// CREATE TABLE for a many-to-many join table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqlCreateJoinTable {
    name: String,
    owning: ForeignKeyDeclaration,
    target: ForeignKeyDeclaration,
}

impl SqlCreateJoinTable {
    pub fn new(
        name: impl Into<String>,
        owning: ForeignKeyDeclaration,
        target: ForeignKeyDeclaration,
    ) -> SqlResult<Self> {
        let table = Self {
            name: name.into(),
            owning,
            target,
        };
        table.validate()?;
        Ok(table)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owning(&self) -> &ForeignKeyDeclaration {
        &self.owning
    }

    pub fn target(&self) -> &ForeignKeyDeclaration {
        &self.target
    }

    pub fn validate(&self) -> SqlResult<()> {
        if self.name.is_empty() {
            return Err(SqlError::invalid("SqlCreateJoinTable", "a table name"));
        }
        self.owning.validate()?;
        self.target.validate()
    }
}

/// CREATE SEQUENCE.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlCreateSequence {
    name: String,
    #[serde(default = "one")]
    initial_value: i64,
    #[serde(default = "one")]
    allocation_size: i64,
}

fn one() -> i64 {
    1
}

impl SqlCreateSequence {
    /// Starts at 1 and increments by 1 unless told otherwise.
    pub fn builder(name: impl Into<String>) -> SqlCreateSequenceBuilder {
        SqlCreateSequenceBuilder {
            name: name.into(),
            initial_value: 1,
            allocation_size: 1,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn initial_value(&self) -> i64 {
        self.initial_value
    }

    pub fn allocation_size(&self) -> i64 {
        self.allocation_size
    }

    pub fn validate(&self) -> SqlResult<()> {
        if self.name.is_empty() {
            return Err(SqlError::invalid("SqlCreateSequence", "a sequence name"));
        }
        if self.allocation_size == 0 {
            return Err(SqlError::invalid("SqlCreateSequence", "a non-zero allocation size"));
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct SqlCreateSequenceBuilder {
    name: String,
    initial_value: i64,
    allocation_size: i64,
}

impl SqlCreateSequenceBuilder {
    pub fn with_initial_value(mut self, initial_value: i64) -> Self {
        self.initial_value = initial_value;
        self
    }

    pub fn with_allocation_size(mut self, allocation_size: i64) -> Self {
        self.allocation_size = allocation_size;
        self
    }

    pub fn build(self) -> SqlResult<SqlCreateSequence> {
        let sequence = SqlCreateSequence {
            name: self.name,
            initial_value: self.initial_value,
            allocation_size: self.allocation_size,
        };
        sequence.validate()?;
        Ok(sequence)
    }
}

/// Any DDL statement, for batch export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DdlStatement {
    CreateTable(SqlCreateTable),
    CreateJoinTable(SqlCreateJoinTable),
    CreateSequence(SqlCreateSequence),
}

impl DdlStatement {
    pub fn validate(&self) -> SqlResult<()> {
        match self {
            DdlStatement::CreateTable(t) => t.validate(),
            DdlStatement::CreateJoinTable(t) => t.validate(),
            DdlStatement::CreateSequence(s) => s.validate(),
        }
    }
}

impl From<SqlCreateTable> for DdlStatement {
    fn from(t: SqlCreateTable) -> Self {
        DdlStatement::CreateTable(t)
    }
}

impl From<SqlCreateJoinTable> for DdlStatement {
    fn from(t: SqlCreateJoinTable) -> Self {
        DdlStatement::CreateJoinTable(t)
    }
}

impl From<SqlCreateSequence> for DdlStatement {
    fn from(s: SqlCreateSequence) -> Self {
        DdlStatement::CreateSequence(s)
    }
}
