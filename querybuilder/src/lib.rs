//! # Query builder
//!
//! Builds single table `SELECT`, `INSERT`, `UPDATE` and `DELETE` statements
//! with `?` placeholders, returning the sql text and its params in order.
//!
//! ```
//! use querybuilder::{StatementBuilder, Value};
//!
//! let (sql, params) = StatementBuilder::new("my_table")
//!     .select(["name"])
//!     .where_and([("age", 22)])
//!     .sql(None)
//!     .unwrap();
//!
//! assert_eq!(&sql, "SELECT name FROM my_table WHERE age=?");
//! assert_eq!(params, vec![Value::I32(22)]);
//! ```

mod condition;
mod escape;
#[cfg(feature = "sqlite")]
mod sqlite;
mod statement;
mod value;

pub use querybuilder_error as error;

pub use condition::{Condition, Conjunction};
pub use escape::{quote_ident, EscapeHook};
pub use statement::{Bindings, Kind, StatementBuilder};
pub use value::Value;
