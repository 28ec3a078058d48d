use std::fmt;

use querybuilder_error::Result;

use crate::{Condition, Conjunction, EscapeHook, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Select,
    Insert,
    Update,
    Delete,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Select => "SELECT",
            Self::Insert => "INSERT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        })
    }
}

/// Render time overrides for [`StatementBuilder::sql_with`]
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    table: Option<String>,
    values: Option<Vec<Value>>,
    where_values: Option<Vec<Value>>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render against another table, passed through the escape hook
    pub fn table<S>(&mut self, table: S) -> &mut Self
    where
        S: ToString,
    {
        self.table = Some(table.to_string());
        self
    }

    /// Replace the INSERT/UPDATE values, positionally
    pub fn values<T, V>(&mut self, values: T) -> &mut Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the WHERE values, positionally
    pub fn where_values<T, V>(&mut self, values: T) -> &mut Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.where_values = Some(values.into_iter().map(Into::into).collect());
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct StatementBuilder {
    table: String,
    kind: Option<Kind>,
    columns: Vec<String>,
    values: Vec<Value>,
    condition: Option<Condition>,
    escape: Option<EscapeHook>,
    // Columns were requested but the escape hook dropped all of them
    columns_dropped: bool,
}

impl StatementBuilder {
    pub fn new<S>(table: S) -> Self
    where
        S: ToString,
    {
        Self {
            table: table.to_string(),
            ..Default::default()
        }
    }

    /// Create builder whose table and column names pass through `hook`
    ///
    /// # Examples
    ///
    /// ```
    /// use querybuilder::{quote_ident, StatementBuilder, Value};
    ///
    /// let (sql, params) = StatementBuilder::with_escape("main.user", quote_ident)
    ///     .select(["name"])
    ///     .where_and([("age", 22)])
    ///     .sql(None)
    ///     .unwrap();
    ///
    /// assert_eq!(&sql, r#"SELECT "name" FROM "main"."user" WHERE "age"=?"#);
    /// assert_eq!(params, vec![Value::I32(22)]);
    /// ```
    pub fn with_escape<S, F>(table: S, hook: F) -> Self
    where
        S: ToString,
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        let hook = EscapeHook::new(hook);
        let table = table.to_string();

        Self {
            table: hook.escape(&table).unwrap_or(table),
            escape: Some(hook),
            ..Default::default()
        }
    }

    /// Select columns, an empty list selects `*`
    ///
    /// # Examples
    ///
    /// ```
    /// use querybuilder::StatementBuilder;
    ///
    /// let (sql, params) = StatementBuilder::new("ta")
    ///     .select(["a", "b"])
    ///     .sql(None)
    ///     .unwrap();
    ///
    /// assert_eq!(&sql, "SELECT a, b FROM ta");
    /// assert!(params.is_empty());
    /// ```
    pub fn select<T, S>(&mut self, cols: T) -> &mut Self
    where
        T: IntoIterator<Item = S>,
        S: ToString,
    {
        self.kind = Some(Kind::Select);
        let (columns, requested) = self.escape_columns(cols);
        self.columns_dropped = requested > 0 && columns.is_empty();
        self.columns = columns;
        self.values.clear();
        self
    }

    /// Same as `select` with no columns
    ///
    /// # Examples
    ///
    /// ```
    /// use querybuilder::StatementBuilder;
    ///
    /// let (sql, _) = StatementBuilder::new("ta").select_all().sql(None).unwrap();
    ///
    /// assert_eq!(&sql, "SELECT * FROM ta");
    /// ```
    pub fn select_all(&mut self) -> &mut Self {
        self.select(Vec::<String>::new())
    }

    /// Insert column value pairs
    ///
    /// # Examples
    ///
    /// ```
    /// use querybuilder::{StatementBuilder, Value};
    ///
    /// let (sql, params) = StatementBuilder::new("ta")
    ///     .insert([("a", Value::I32(1)), ("b", "abc".into())])
    ///     .sql(None)
    ///     .unwrap();
    ///
    /// assert_eq!(&sql, "INSERT INTO ta (a, b) VALUES (?, ?)");
    /// assert_eq!(params, vec![Value::I32(1), Value::Str("abc".into())]);
    /// ```
    pub fn insert<T, S, V>(&mut self, kvs: T) -> &mut Self
    where
        T: IntoIterator<Item = (S, V)>,
        S: ToString,
        V: Into<Value>,
    {
        self.kind = Some(Kind::Insert);
        self.set_pairs(kvs)
    }

    /// Insert columns whose values are bound at render time
    ///
    /// # Examples
    ///
    /// ```
    /// use querybuilder::{Bindings, StatementBuilder, Value};
    ///
    /// let (sql, params) = StatementBuilder::new("ta")
    ///     .insert_columns(["a", "b"])
    ///     .sql_with(Bindings::new().values([1, 2]))
    ///     .unwrap();
    ///
    /// assert_eq!(&sql, "INSERT INTO ta (a, b) VALUES (?, ?)");
    /// assert_eq!(params, vec![Value::I32(1), Value::I32(2)]);
    /// ```
    pub fn insert_columns<T, S>(&mut self, cols: T) -> &mut Self
    where
        T: IntoIterator<Item = S>,
        S: ToString,
    {
        self.insert(cols.into_iter().map(|col| (col, Value::Null)))
    }

    /// Insert `count` positional values without a column list
    ///
    /// # Examples
    ///
    /// ```
    /// use querybuilder::{Bindings, StatementBuilder, Value};
    ///
    /// let (sql, params) = StatementBuilder::new("ta")
    ///     .insert_count(3)
    ///     .sql_with(Bindings::new().values([Value::I32(4), "joe".into(), Value::I32(44)]))
    ///     .unwrap();
    ///
    /// assert_eq!(&sql, "INSERT INTO ta VALUES (?, ?, ?)");
    /// assert_eq!(params.len(), 3);
    /// ```
    pub fn insert_count(&mut self, count: usize) -> &mut Self {
        self.kind = Some(Kind::Insert);
        self.columns.clear();
        self.columns_dropped = false;
        self.values = vec![Value::Null; count];
        self
    }

    /// Update column value pairs
    ///
    /// # Examples
    ///
    /// ```
    /// use querybuilder::{StatementBuilder, Value};
    ///
    /// let (sql, params) = StatementBuilder::new("ta")
    ///     .update([("a", 1), ("b", 2)])
    ///     .where_or([("c", 3), ("d", 4)])
    ///     .sql(None)
    ///     .unwrap();
    ///
    /// assert_eq!(&sql, "UPDATE ta SET a=?, b=? WHERE c=? OR d=?");
    /// assert_eq!(params, vec![Value::I32(1), Value::I32(2), Value::I32(3), Value::I32(4)]);
    /// ```
    pub fn update<T, S, V>(&mut self, kvs: T) -> &mut Self
    where
        T: IntoIterator<Item = (S, V)>,
        S: ToString,
        V: Into<Value>,
    {
        self.kind = Some(Kind::Update);
        self.set_pairs(kvs)
    }

    /// Update columns whose values are bound at render time
    pub fn update_columns<T, S>(&mut self, cols: T) -> &mut Self
    where
        T: IntoIterator<Item = S>,
        S: ToString,
    {
        self.update(cols.into_iter().map(|col| (col, Value::Null)))
    }

    /// # Examples
    ///
    /// ```
    /// use querybuilder::{StatementBuilder, Value};
    ///
    /// let (sql, params) = StatementBuilder::new("ta")
    ///     .delete()
    ///     .where_and([("a", 1)])
    ///     .sql(None)
    ///     .unwrap();
    ///
    /// assert_eq!(&sql, "DELETE FROM ta WHERE a=?");
    /// assert_eq!(params, vec![Value::I32(1)]);
    /// ```
    pub fn delete(&mut self) -> &mut Self {
        self.kind = Some(Kind::Delete);
        self.columns.clear();
        self.columns_dropped = false;
        self.values.clear();
        self
    }

    /// Set the WHERE condition, pairs joined by `AND`
    ///
    /// Replaces any previous condition.
    ///
    /// # Examples
    ///
    /// ```
    /// use querybuilder::{StatementBuilder, Value};
    ///
    /// let (sql, params) = StatementBuilder::new("ta")
    ///     .select(["a", "b"])
    ///     .where_and([("c", 1)])
    ///     .sql(None)
    ///     .unwrap();
    ///
    /// assert_eq!(&sql, "SELECT a, b FROM ta WHERE c=?");
    /// assert_eq!(params, vec![Value::I32(1)]);
    /// ```
    pub fn where_and<T, S, V>(&mut self, kvs: T) -> &mut Self
    where
        T: IntoIterator<Item = (S, V)>,
        S: ToString,
        V: Into<Value>,
    {
        self.set_condition(Conjunction::And, kvs)
    }

    /// Set the WHERE condition, pairs joined by `OR`
    ///
    /// Replaces any previous condition.
    pub fn where_or<T, S, V>(&mut self, kvs: T) -> &mut Self
    where
        T: IntoIterator<Item = (S, V)>,
        S: ToString,
        V: Into<Value>,
    {
        self.set_condition(Conjunction::Or, kvs)
    }

    /// Build sql and params, optionally rebinding the WHERE values
    ///
    /// # Examples
    ///
    /// ```
    /// use querybuilder::{StatementBuilder, Value};
    ///
    /// let mut builder = StatementBuilder::new("ta");
    /// builder.select(["a"]).where_and([("c", 1)]);
    ///
    /// let (sql, params) = builder.sql(Some(vec![Value::I32(2)])).unwrap();
    ///
    /// assert_eq!(&sql, "SELECT a FROM ta WHERE c=?");
    /// assert_eq!(params, vec![Value::I32(2)]);
    /// ```
    pub fn sql(&self, where_values: Option<Vec<Value>>) -> Result<(String, Vec<Value>)> {
        let bindings = Bindings {
            where_values,
            ..Default::default()
        };

        self.sql_with(&bindings)
    }

    /// Build sql and params with render time overrides
    ///
    /// # Examples
    ///
    /// ```
    /// use querybuilder::{Bindings, StatementBuilder, Value};
    ///
    /// let (sql, params) = StatementBuilder::new("ta")
    ///     .update([("a", 1)])
    ///     .where_and([("b", 2)])
    ///     .sql_with(Bindings::new().table("tb").values([10]).where_values([20]))
    ///     .unwrap();
    ///
    /// assert_eq!(&sql, "UPDATE tb SET a=? WHERE b=?");
    /// assert_eq!(params, vec![Value::I32(10), Value::I32(20)]);
    /// ```
    pub fn sql_with(&self, bindings: &Bindings) -> Result<(String, Vec<Value>)> {
        let kind = self.validate()?;

        let table = match &bindings.table {
            Some(table) => self.escape_table(table),
            None => self.table.clone(),
        };

        let mut params = bind("values", &self.values, bindings.values.as_deref())?;
        let where_params = bind(
            "where",
            &self.condition_values(),
            bindings.where_values.as_deref(),
        )?;

        let mut parts = Vec::<String>::new();

        match kind {
            Kind::Select => {
                parts.push("SELECT".into());
                if self.columns.is_empty() {
                    parts.push("*".into());
                } else {
                    parts.push(self.columns.join(", "));
                }
                parts.push("FROM".into());
                parts.push(table);
            }
            Kind::Insert => {
                parts.push("INSERT INTO".into());
                parts.push(table);
                if params.is_empty() {
                    parts.push("DEFAULT VALUES".into());
                } else {
                    if !self.columns.is_empty() {
                        parts.push(format!("({})", self.columns.join(", ")));
                    }
                    parts.push("VALUES".into());
                    parts.push(format!("({})", placeholders(params.len())));
                }
            }
            Kind::Update => {
                parts.push("UPDATE".into());
                parts.push(table);
                parts.push("SET".into());
                parts.push(
                    self.columns
                        .iter()
                        .map(|col| format!("{}=?", col))
                        .collect::<Vec<_>>()
                        .join(", "),
                );
            }
            Kind::Delete => {
                parts.push("DELETE FROM".into());
                parts.push(table);
            }
        }

        // INSERT has no WHERE clause, its condition is neither rendered nor bound
        if kind != Kind::Insert {
            if let Some(cond) = &self.condition {
                parts.push("WHERE".into());
                parts.push(cond.build());
                params.extend(where_params);
            }
        }

        let sql = parts.join(" ");
        log::trace!("Build `{}` with {} params", sql, params.len());

        Ok((sql, params))
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn kind(&self) -> Option<Kind> {
        self.kind
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }

    /// Stored params in render order, before any override
    pub fn values(&self) -> Vec<Value> {
        let mut values = self.values.clone();
        if self.kind != Some(Kind::Insert) {
            values.extend(self.condition_values());
        }
        values
    }

    pub fn is_complete(&self) -> bool {
        !self.table.is_empty() && self.validate().is_ok()
    }

    /// Validate builder
    fn validate(&self) -> Result<Kind> {
        let kind = self.kind.ok_or_else(|| {
            querybuilder_error::incomplete_statement!(
                "No statement kind chosen for table `{}`",
                self.table
            )
        })?;

        if self.columns_dropped {
            return Err(querybuilder_error::incomplete_statement!(
                "Escape hook dropped every {} column on table `{}`",
                kind,
                self.table
            ));
        }

        if self.condition.as_ref().is_some_and(Condition::is_empty) {
            return Err(querybuilder_error::incomplete_statement!(
                "Empty WHERE condition on table `{}`",
                self.table
            ));
        }

        if kind == Kind::Update && self.columns.is_empty() {
            return Err(querybuilder_error::incomplete_statement!(
                "Update empty columns on table `{}`",
                self.table
            ));
        }

        Ok(kind)
    }

    fn set_pairs<T, S, V>(&mut self, kvs: T) -> &mut Self
    where
        T: IntoIterator<Item = (S, V)>,
        S: ToString,
        V: Into<Value>,
    {
        let (pairs, requested) = self.escape_pairs(kvs);
        let (columns, values): (Vec<String>, Vec<Value>) = pairs.into_iter().unzip();
        self.columns_dropped = requested > 0 && columns.is_empty();
        self.columns = columns;
        self.values = values;
        self
    }

    fn set_condition<T, S, V>(&mut self, conjunction: Conjunction, kvs: T) -> &mut Self
    where
        T: IntoIterator<Item = (S, V)>,
        S: ToString,
        V: Into<Value>,
    {
        let (pairs, _) = self.escape_pairs(kvs);
        let cond = Condition::new(conjunction, pairs);
        if let Some(old) = &self.condition {
            log::debug!(
                "Replace WHERE `{}` with `{}` on table `{}`",
                old.build(),
                cond.build(),
                self.table
            );
        }

        self.condition = Some(cond);
        self
    }

    fn condition_values(&self) -> Vec<Value> {
        self.condition
            .as_ref()
            .map(|cond| cond.values().cloned().collect())
            .unwrap_or_default()
    }

    fn escape_table(&self, table: &str) -> String {
        match &self.escape {
            Some(hook) => hook.escape(table).unwrap_or_else(|| table.to_string()),
            None => table.to_string(),
        }
    }

    fn escape_column(&self, col: String) -> Option<String> {
        match &self.escape {
            Some(hook) => hook.escape(&col),
            None => Some(col),
        }
    }

    /// Returns the surviving columns and how many were requested
    fn escape_columns<T, S>(&self, cols: T) -> (Vec<String>, usize)
    where
        T: IntoIterator<Item = S>,
        S: ToString,
    {
        let mut requested = 0;
        let columns = cols
            .into_iter()
            .inspect(|_| requested += 1)
            .filter_map(|col| self.escape_column(col.to_string()))
            .collect();

        (columns, requested)
    }

    /// Returns the surviving pairs and how many were requested
    fn escape_pairs<T, S, V>(&self, kvs: T) -> (Vec<(String, Value)>, usize)
    where
        T: IntoIterator<Item = (S, V)>,
        S: ToString,
        V: Into<Value>,
    {
        let mut requested = 0;
        let pairs = kvs
            .into_iter()
            .inspect(|_| requested += 1)
            .filter_map(|(col, val)| Some((self.escape_column(col.to_string())?, val.into())))
            .collect();

        (pairs, requested)
    }
}

impl fmt::Display for StatementBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sql(None) {
            Ok((sql, _)) => f.write_str(&sql),
            Err(_) => write!(f, "Incomplete Query on table: {}", self.table),
        }
    }
}

fn bind(binding: &'static str, stored: &[Value], replace: Option<&[Value]>) -> Result<Vec<Value>> {
    match replace {
        Some(values) if values.len() != stored.len() => Err(
            querybuilder_error::parameter_count_mismatch!(binding, stored.len(), values.len()),
        ),
        Some(values) => Ok(values.to_vec()),
        None => Ok(stored.to_vec()),
    }
}

fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}
