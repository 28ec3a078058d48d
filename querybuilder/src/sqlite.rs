//! # Sqlite glue
//!
//! Lets rendered params go straight into `rusqlite`:
//!
//! ```
//! use querybuilder::{StatementBuilder, Value};
//!
//! let conn = rusqlite::Connection::open_in_memory().unwrap();
//! conn.execute("CREATE TABLE ta (a INTEGER, b TEXT)", []).unwrap();
//!
//! let (sql, params) = StatementBuilder::new("ta")
//!     .insert([("a", Value::from(1)), ("b", "abc".into())])
//!     .sql(None)
//!     .unwrap();
//! conn.execute(&sql, rusqlite::params_from_iter(params.iter())).unwrap();
//! ```

use rusqlite::types::{FromSql, FromSqlResult, Null, ToSql, ToSqlOutput, ValueRef};

use crate::Value;

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match &self {
            Value::Null => Ok(ToSqlOutput::from(Null)),
            Value::Bool(v) => <bool as ToSql>::to_sql(v),
            Value::U8(v) => <u8 as ToSql>::to_sql(v),
            Value::I8(v) => <i8 as ToSql>::to_sql(v),
            Value::U16(v) => <u16 as ToSql>::to_sql(v),
            Value::I16(v) => <i16 as ToSql>::to_sql(v),
            Value::U32(v) => <u32 as ToSql>::to_sql(v),
            Value::I32(v) => <i32 as ToSql>::to_sql(v),
            Value::U64(v) => i64::try_from(*v)
                .map(ToSqlOutput::from)
                .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e))),
            Value::I64(v) => <i64 as ToSql>::to_sql(v),
            Value::F32(v) => <f32 as ToSql>::to_sql(v),
            Value::F64(v) => <f64 as ToSql>::to_sql(v),
            Value::Str(v) => <String as ToSql>::to_sql(v),
            Value::Bytes(v) => <Vec<u8> as ToSql>::to_sql(v),
        }
    }
}

impl FromSql for Value {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        Ok(match value {
            ValueRef::Null => Value::Null,
            ValueRef::Integer(v) => Value::I64(v),
            ValueRef::Real(v) => Value::F64(v),
            ValueRef::Text(v) => Value::Str(String::from_utf8_lossy(v).into_owned()),
            ValueRef::Blob(v) => Value::Bytes(v.to_vec()),
        })
    }
}

#[cfg(test)]
mod test {
    use rusqlite::types::ToSql;

    use crate::*;

    #[test]
    fn test_u64_overflow() {
        assert!(Value::U64(1).to_sql().is_ok());
        assert!(Value::U64(u64::MAX).to_sql().is_err());
    }

    #[test]
    fn test_round_trip_row() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let row: Vec<Value> = conn
            .query_row(
                "SELECT ?, ?, ?, ?",
                rusqlite::params_from_iter(
                    [Value::Null, Value::Bool(true), Value::F32(0.5), "abc".into()].iter(),
                ),
                |row| {
                    Ok(vec![
                        row.get::<_, Value>(0)?,
                        row.get::<_, Value>(1)?,
                        row.get::<_, Value>(2)?,
                        row.get::<_, Value>(3)?,
                    ])
                },
            )
            .unwrap();

        assert_eq!(
            row,
            vec![
                Value::Null,
                Value::I64(1),
                Value::F64(0.5),
                Value::Str("abc".into())
            ]
        );
    }
}
