//! DDL generation tests.

use pretty_assertions::assert_eq;

use crate::ast::{
    ColumnDeclaration, DdlStatement, ForeignKeyDeclaration, JoinColumnMapping, PrimaryKey,
    SqlCreateJoinTable, SqlCreateSequence, SqlCreateTable, SqlType,
};
use crate::error::SqlError;
use crate::transpiler::{Dialect, StatementGenerator, ToSql};

fn citizen_table() -> SqlCreateTable {
    SqlCreateTable::builder("citizen")
        .with_primary_key(PrimaryKey::Simple(
            ColumnDeclaration::new("id", SqlType::BigInt).identity(),
        ))
        .with_columns([
            ColumnDeclaration::new("first_name", SqlType::Varchar)
                .with_length(64)
                .not_null(),
            ColumnDeclaration::new("email", SqlType::Varchar).unique(),
            ColumnDeclaration::new("balance", SqlType::Decimal).with_precision(19, 2),
        ])
        .with_foreign_key(ForeignKeyDeclaration::new(
            JoinColumnMapping::new(vec![ColumnDeclaration::new("city_id", SqlType::BigInt)]),
            "city",
        ))
        .build()
        .unwrap()
}

fn fk(column: &str, table: &str) -> ForeignKeyDeclaration {
    ForeignKeyDeclaration::new(
        JoinColumnMapping::new(vec![
            ColumnDeclaration::new(column, SqlType::BigInt).not_null(),
        ]),
        table,
    )
}

fn create(dialect: Dialect, table: SqlCreateTable) -> String {
    DdlStatement::from(table).to_sql_with_dialect(dialect).unwrap()
}

#[test]
fn test_create_table() {
    assert_eq!(
        create(Dialect::Default, citizen_table()),
        "create table citizen (id bigint not null generated by default as identity, \
         first_name varchar(64) not null, email varchar(255) unique, balance decimal(19,2), \
         city_id bigint, primary key (id), foreign key (city_id) references city)"
    );
}

#[test]
fn test_create_table_mysql() {
    assert_eq!(
        create(Dialect::MySql, citizen_table()),
        "create table citizen (id bigint not null auto_increment, \
         first_name varchar(64) not null, email varchar(255) unique, balance decimal(19,2), \
         city_id bigint, primary key (id), foreign key (city_id) references city)"
    );
}

#[test]
fn test_create_table_oracle() {
    assert_eq!(
        create(Dialect::Oracle, citizen_table()),
        "create table citizen (id number(19) not null generated by default as identity, \
         first_name varchar2(64) not null, email varchar2(255) unique, balance number(19,2), \
         city_id number(19), primary key (id), foreign key (city_id) references city)"
    );
}

#[test]
fn test_type_names_per_dialect() {
    let table = SqlCreateTable::builder("document")
        .with_primary_key(PrimaryKey::Simple(ColumnDeclaration::new(
            "id",
            SqlType::Integer,
        )))
        .with_columns([
            ColumnDeclaration::new("body", SqlType::Clob),
            ColumnDeclaration::new("scan", SqlType::Blob),
            ColumnDeclaration::new("public", SqlType::Boolean),
            ColumnDeclaration::new("opened_at", SqlType::Time),
        ])
        .build()
        .unwrap();

    assert_eq!(
        create(Dialect::Postgres, table.clone()),
        "create table document (id integer not null, body text, scan bytea, public boolean, \
         opened_at time, primary key (id))"
    );
    assert_eq!(
        create(Dialect::Oracle, table.clone()),
        "create table document (id number(10) not null, body clob, scan blob, public number(1), \
         opened_at date, primary key (id))"
    );
    assert_eq!(
        create(Dialect::MySql, table),
        "create table document (id integer not null, body longtext, scan longblob, \
         public boolean, opened_at time, primary key (id))"
    );
}

#[test]
fn test_composite_primary_key() {
    let table = SqlCreateTable::builder("order_line")
        .with_primary_key(PrimaryKey::Composite(vec![
            ColumnDeclaration::new("order_id", SqlType::Integer),
            ColumnDeclaration::new("line_no", SqlType::SmallInt),
        ]))
        .with_columns([ColumnDeclaration::new("sku", SqlType::Char).with_length(12)])
        .build()
        .unwrap();
    assert_eq!(
        create(Dialect::Derby, table),
        "create table order_line (order_id integer not null, line_no smallint not null, \
         sku char(12), primary key (order_id, line_no))"
    );
}

#[test]
fn test_create_table_requires_primary_key() {
    let err = SqlCreateTable::builder("citizen")
        .with_columns([ColumnDeclaration::new("name", SqlType::Varchar)])
        .build()
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid statement: SqlCreateTable requires a primary key"
    );
}

#[test]
fn test_create_join_table() {
    let table = SqlCreateJoinTable::new(
        "citizen_language",
        fk("citizen_id", "citizen"),
        fk("language_id", "language"),
    )
    .unwrap();
    assert_eq!(
        DdlStatement::from(table).to_sql().unwrap(),
        "create table citizen_language (citizen_id bigint not null, language_id bigint not null, \
         foreign key (citizen_id) references citizen, foreign key (language_id) references language)"
    );
}

#[test]
fn test_create_sequence() {
    let sequence = DdlStatement::from(SqlCreateSequence::builder("address_seq").build().unwrap());
    for dialect in [
        Dialect::Default,
        Dialect::Derby,
        Dialect::MariaDb,
        Dialect::Oracle,
        Dialect::Postgres,
    ] {
        assert_eq!(
            sequence.to_sql_with_dialect(dialect).unwrap(),
            "create sequence address_seq start with 1 increment by 1"
        );
    }

    let custom = SqlCreateSequence::builder("invoice_seq")
        .with_initial_value(1000)
        .with_allocation_size(50)
        .build()
        .unwrap();
    assert_eq!(
        DdlStatement::from(custom).to_sql().unwrap(),
        "create sequence invoice_seq start with 1000 increment by 50"
    );
}

#[test]
fn test_mysql_has_no_sequences() {
    let generator = StatementGenerator::new(Dialect::MySql);
    let err = generator
        .export_ddl_statement(&SqlCreateSequence::builder("address_seq").build().unwrap().into())
        .unwrap_err();
    assert!(matches!(err, SqlError::UnsupportedConstruct { .. }));
    assert!(generator.sequence_next_value("address_seq").is_err());
}

#[test]
fn test_sequence_next_value() {
    let next = |dialect| {
        StatementGenerator::new(dialect)
            .sequence_next_value("address_seq")
            .unwrap()
    };
    assert_eq!(next(Dialect::Postgres), "select nextval('address_seq')");
    assert_eq!(next(Dialect::Oracle), "select address_seq.nextval from dual");
    assert_eq!(next(Dialect::Derby), "VALUES (NEXT VALUE FOR address_seq)");
    assert_eq!(next(Dialect::Default), "select next value for address_seq");
    assert_eq!(next(Dialect::MariaDb), "select next value for address_seq");
}

#[test]
fn test_ddl_batch_preserves_order() {
    let batch = vec![
        DdlStatement::from(SqlCreateSequence::builder("citizen_seq").build().unwrap()),
        DdlStatement::from(citizen_table()),
    ];
    let sql = StatementGenerator::new(Dialect::Postgres)
        .export_ddl(&batch)
        .unwrap();
    assert_eq!(sql.len(), 2);
    assert!(sql[0].starts_with("create sequence citizen_seq"));
    assert!(sql[1].starts_with("create table citizen (id bigint"));

    assert!(
        StatementGenerator::new(Dialect::MySql)
            .export_ddl(&batch)
            .is_err()
    );
}

#[test]
fn test_decoded_sequence_is_validated_before_rendering() {
    let batch: Vec<DdlStatement> = serde_json::from_str(
        r#"[{"kind": "create_sequence", "name": "", "allocation_size": 0}]"#,
    )
    .unwrap();
    let err = StatementGenerator::new(Dialect::Postgres)
        .export_ddl(&batch)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid statement: SqlCreateSequence requires a sequence name"
    );
}
