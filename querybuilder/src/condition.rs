//! # Condition
//!
//! A flat `WHERE` clause: `col1=? AND col2=? AND ...` or the same with `OR`.
//! One conjunction applies to every pair, there is no nesting.

use std::fmt;

use crate::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Conjunction {
    #[default]
    And,
    Or,
}

impl Conjunction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

impl fmt::Display for Conjunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Condition {
    pairs: Vec<(String, Value)>,
    conjunction: Conjunction,
}

impl Condition {
    pub fn new<T, S, V>(conjunction: Conjunction, pairs: T) -> Self
    where
        T: IntoIterator<Item = (S, V)>,
        S: ToString,
        V: Into<Value>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(col, val)| (col.to_string(), val.into()))
                .collect(),
            conjunction,
        }
    }

    pub fn conjunction(&self) -> Conjunction {
        self.conjunction
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(col, _)| col.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.pairs.iter().map(|(_, val)| val)
    }

    /// Build the clause body, without the `WHERE` keyword
    ///
    /// # Examples
    ///
    /// ```
    /// use querybuilder::{Condition, Conjunction};
    ///
    /// let cond = Condition::new(Conjunction::Or, [("a", 1), ("b", 2)]);
    ///
    /// assert_eq!(&cond.build(), "a=? OR b=?");
    /// ```
    pub fn build(&self) -> String {
        self.pairs
            .iter()
            .map(|(col, _)| format!("{}=?", col))
            .collect::<Vec<_>>()
            .join(&format!(" {} ", self.conjunction))
    }
}

#[cfg(test)]
mod test {
    use crate::*;

    #[test]
    fn test_build() {
        assert_eq!(&Condition::new(Conjunction::And, [("a", 1)]).build(), "a=?");

        assert_eq!(
            &Condition::new(Conjunction::And, [("a", 1), ("b", 2), ("c", 3)]).build(),
            "a=? AND b=? AND c=?"
        );

        assert_eq!(
            &Condition::new(Conjunction::Or, [("a", 1), ("b", 2)]).build(),
            "a=? OR b=?"
        );

        let empty = Condition::new(Conjunction::Or, Vec::<(&str, Value)>::new());
        assert!(empty.is_empty());
        assert_eq!(&empty.build(), "");
    }

    #[test]
    fn test_accessors() {
        let cond = Condition::new(Conjunction::Or, [("a", Value::from(1)), ("b", "x".into())]);

        assert_eq!(cond.len(), 2);
        assert_eq!(cond.conjunction(), Conjunction::Or);
        assert_eq!(cond.columns().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(
            cond.values().cloned().collect::<Vec<_>>(),
            vec![Value::I32(1), Value::Str("x".into())]
        );
    }
}
