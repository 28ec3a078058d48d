use querybuilder::{StatementBuilder, Value};
use querybuilder_test::{open_test_db, query};

#[test]
fn test_select_all() {
    let conn = open_test_db();

    let stmt = StatementBuilder::new("my_table").select_all().sql(None).unwrap();
    assert_eq!(stmt, ("SELECT * FROM my_table".to_string(), Vec::<Value>::new()));

    let rows = query(&conn, stmt);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].len(), 3);
}

#[test]
fn test_select_columns() {
    let conn = open_test_db();

    let rows = query(
        &conn,
        StatementBuilder::new("my_table")
            .select(["name"])
            .sql(None)
            .unwrap(),
    );

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].len(), 1);
}

#[test]
fn test_select_where() {
    let conn = open_test_db();

    let rows = query(
        &conn,
        StatementBuilder::new("my_table")
            .select(["name"])
            .where_and([("age", 22)])
            .sql(None)
            .unwrap(),
    );

    assert_eq!(rows, vec![vec![Value::Str("lisa".into())]]);
}

#[test]
fn test_select_where_or() {
    let conn = open_test_db();

    let rows = query(
        &conn,
        StatementBuilder::new("my_table")
            .select(["name"])
            .where_or([("age", 19), ("age", 32)])
            .sql(None)
            .unwrap(),
    );

    assert_eq!(
        rows,
        vec![
            vec![Value::Str("mike".into())],
            vec![Value::Str("rebecca".into())]
        ]
    );
}

#[test]
fn test_rebind_where() {
    let conn = open_test_db();

    let mut builder = StatementBuilder::new("my_table");
    builder.select(["name"]).where_and([("age", 22)]);

    for (age, name) in [(19, "mike"), (22, "lisa"), (32, "rebecca")] {
        let rows = query(&conn, builder.sql(Some(vec![age.into()])).unwrap());
        assert_eq!(rows, vec![vec![Value::Str(name.into())]]);
    }
}

#[test]
fn test_escaped_select() {
    let conn = open_test_db();

    let rows = query(
        &conn,
        StatementBuilder::with_escape("main.my_table", querybuilder::quote_ident)
            .select(["name", "age"])
            .where_and([("name", "mike")])
            .sql(None)
            .unwrap(),
    );

    assert_eq!(rows, vec![vec![Value::Str("mike".into()), Value::I64(19)]]);
}
