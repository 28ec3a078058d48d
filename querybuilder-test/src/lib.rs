use querybuilder::Value;

const RESET_SCRIPT: &str = "
DROP TABLE IF EXISTS my_table;
CREATE TABLE my_table (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    age INTEGER
);
INSERT INTO my_table (name, age) VALUES ('mike', 19);
INSERT INTO my_table (name, age) VALUES ('lisa', 22);
INSERT INTO my_table (name, age) VALUES ('rebecca', 32);
";

/// Open an in-memory database seeded with three rows in `my_table`
pub fn open_test_db() -> rusqlite::Connection {
    env_logger::try_init().ok();

    let conn = rusqlite::Connection::open_in_memory().unwrap();
    conn.execute_batch(RESET_SCRIPT).unwrap();

    conn
}

pub fn execute(conn: &rusqlite::Connection, (sql, params): (String, Vec<Value>)) -> usize {
    conn.execute(&sql, rusqlite::params_from_iter(params.iter()))
        .unwrap()
}

pub fn query(conn: &rusqlite::Connection, (sql, params): (String, Vec<Value>)) -> Vec<Vec<Value>> {
    let mut stmt = conn.prepare(&sql).unwrap();
    let column_count = stmt.column_count();

    let rows = stmt
        .query_map(rusqlite::params_from_iter(params.iter()), |row| {
            (0..column_count)
                .map(|i| row.get::<_, Value>(i))
                .collect::<rusqlite::Result<Vec<_>>>()
        })
        .unwrap()
        .collect::<rusqlite::Result<Vec<_>>>()
        .unwrap();

    rows
}
