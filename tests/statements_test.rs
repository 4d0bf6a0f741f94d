use pretty_assertions::assert_eq;

use relgen::prelude::*;

fn citizen() -> FromTable {
    FromTable::new("citizen").with_alias("c")
}

#[test]
fn test_same_tree_every_dialect() {
    let citizen = citizen();
    let select = SqlSelect::builder()
        .from(citizen.clone())
        .with_value(table_col(&citizen, "id"))
        .with_condition(eq(table_col(&citizen, "first_name"), "Sam"))
        .build()
        .expect("valid select");

    let rendered: Vec<String> = Dialect::ALL
        .iter()
        .map(|d| select.to_sql_with_dialect(*d).unwrap())
        .collect();

    let with_as = "select c.id from citizen AS c where c.first_name = 'Sam'";
    assert_eq!(
        rendered,
        vec![
            with_as.to_string(),
            with_as.to_string(),
            with_as.to_string(),
            with_as.to_string(),
            "select c.id from citizen c where c.first_name = 'Sam'".to_string(),
            with_as.to_string(),
        ]
    );
}

#[test]
fn test_statement_from_json() {
    let json = r#"{
        "kind": "select",
        "from": [{"Table": {"name": "citizen", "alias": "c"}}],
        "values": [
            {"TableColumn": {
                "source": {"Table": {"name": "citizen", "alias": "c"}},
                "column": {"name": "id"}
            }}
        ],
        "conditions": [
            {"Binary": {
                "comparison": "Equal",
                "left": {"TableColumn": {
                    "source": {"Table": {"name": "citizen", "alias": "c"}},
                    "column": {"name": "first_name"}
                }},
                "right": {"Literal": {"Parameter": {"label": "name"}}}
            }}
        ]
    }"#;

    let statement: Statement = serde_json::from_str(json).expect("decodes");
    statement.validate().expect("valid");

    let rendered = StatementGenerator::new(Dialect::Oracle)
        .export_with_params(&statement)
        .unwrap();
    assert_eq!(rendered.sql, "select c.id from citizen c where c.first_name = ?");
    assert_eq!(rendered.parameters, vec![Parameter::new("name")]);
}

#[test]
fn test_json_round_trip_renders_identically() {
    let mut aliases = AliasGenerator::new();
    let region = FromTable::aliased("region", &mut aliases);
    let city = FromTable::aliased("city", &mut aliases);
    let join = FromJoin::inner(
        city.clone(),
        vec![Column::new("id")],
        vec![Column::new("region_id")],
    )
    .unwrap();
    let select: Statement = SqlSelect::builder()
        .from(region.clone().with_join(join))
        .with_value(select_as(count(table_col(&city, "id")), "cities"))
        .with_condition(like(table_col(&region, "name"), "N%"))
        .with_group_by(GroupBy::new(vec![table_col(&region, "name")]))
        .build()
        .unwrap()
        .into();

    let json = serde_json::to_string(&select).unwrap();
    let decoded: Statement = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, select);
    assert_eq!(decoded.to_sql().unwrap(), select.to_sql().unwrap());
}

#[test]
fn test_invalid_json_statement_is_rejected_by_export() {
    let json = r#"{"kind": "insert", "table": {"name": "citizen"}, "columns": [], "values": []}"#;
    let statement: Statement = serde_json::from_str(json).unwrap();
    let err = statement.validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid statement: SqlInsert requires at least one column"
    );
    for dialect in Dialect::ALL {
        assert!(matches!(
            statement.to_sql_with_dialect(dialect),
            Err(SqlError::InvalidStatement { statement: "SqlInsert", .. })
        ));
    }
}

#[test]
fn test_empty_concat_fails_in_every_dialect() {
    let json = r#"{
        "kind": "select",
        "from": [{"Table": {"name": "citizen", "alias": "c"}}],
        "values": [{"Function": {"Concat": []}}]
    }"#;
    let statement: Statement = serde_json::from_str(json).unwrap();
    for dialect in Dialect::ALL {
        let err = StatementGenerator::new(dialect).export(&statement).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid statement: Concat requires at least one argument"
        );
    }

    let built = SqlSelect::builder()
        .from(citizen())
        .with_value(coalesce(vec![]))
        .build();
    assert!(built.is_err());
}

#[test]
fn test_ddl_batch_from_json() {
    let json = r#"[
        {"kind": "create_sequence", "name": "citizen_seq"},
        {"kind": "create_table", "name": "citizen",
         "primary_key": {"Simple": {"name": "id", "sql_type": "BigInt"}},
         "columns": [{"name": "first_name", "sql_type": "Varchar", "ddl": {"length": 40}}]}
    ]"#;
    let batch: Vec<DdlStatement> = serde_json::from_str(json).unwrap();
    let sql = StatementGenerator::new(Dialect::Derby)
        .export_ddl(&batch)
        .unwrap();
    assert_eq!(
        sql,
        vec![
            "create sequence citizen_seq start with 1 increment by 1".to_string(),
            "create table citizen (id bigint not null, first_name varchar(40), primary key (id))"
                .to_string(),
        ]
    );
}
