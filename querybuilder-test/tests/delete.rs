use querybuilder::StatementBuilder;
use querybuilder_test::{execute, open_test_db, query};

#[test]
fn test_delete_where() {
    let conn = open_test_db();

    let mut builder = StatementBuilder::new("my_table");
    builder.delete().where_and([("name", "lisa")]);

    assert_eq!(execute(&conn, builder.sql(None).unwrap()), 1);
    assert_eq!(execute(&conn, builder.sql(None).unwrap()), 0);

    let rows = query(
        &conn,
        StatementBuilder::new("my_table").select_all().sql(None).unwrap(),
    );
    assert_eq!(rows.len(), 2);
}

#[test]
fn test_delete_all() {
    let conn = open_test_db();

    assert_eq!(
        execute(
            &conn,
            StatementBuilder::new("my_table").delete().sql(None).unwrap()
        ),
        3
    );
}

#[test]
fn test_delete_escaped_condition_refused() {
    let conn = open_test_db();

    let mut builder = StatementBuilder::with_escape("my_table", |name| {
        if name == "secret" {
            None
        } else {
            Some(name.to_string())
        }
    });
    builder.delete().where_and([("secret", 1)]);
    assert!(builder.sql(None).is_err());

    builder.select(["secret"]);
    assert!(builder.sql(None).is_err());

    let rows = query(
        &conn,
        StatementBuilder::new("my_table").select_all().sql(None).unwrap(),
    );
    assert_eq!(rows.len(), 3);
}
