//! # Escape hook
//!
//! Rewrites table and column names before they are written into a statement.
//! Returning `None` for a column drops it, along with its value.

use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct EscapeHook(Arc<dyn Fn(&str) -> Option<String> + Send + Sync>);

impl EscapeHook {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn escape(&self, name: &str) -> Option<String> {
        (self.0)(name)
    }
}

impl fmt::Debug for EscapeHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EscapeHook")
    }
}

/// Quote every dot separated part of an identifier, doubling embedded `"`
///
/// # Examples
///
/// ```
/// use querybuilder::quote_ident;
///
/// assert_eq!(quote_ident("main.user").as_deref(), Some(r#""main"."user""#));
/// assert_eq!(quote_ident(r#"a"b"#).as_deref(), Some(r#""a""b""#));
/// assert_eq!(quote_ident(""), None);
/// ```
pub fn quote_ident(name: &str) -> Option<String> {
    if name.is_empty() || name.contains('\0') {
        return None;
    }

    let mut parts = Vec::<String>::new();
    for part in name.split('.') {
        if part.is_empty() {
            return None;
        }
        parts.push(format!("\"{}\"", part.replace('"', "\"\"")));
    }

    Some(parts.join("."))
}
