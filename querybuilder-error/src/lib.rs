pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IncompleteStatement: `{0}`")]
    IncompleteStatement(String),
    #[error("ParameterCountMismatch: `{binding}` expects {expected} values, got {actual}")]
    ParameterCountMismatch {
        binding: &'static str,
        expected: usize,
        actual: usize,
    },
}

#[macro_export]
macro_rules! incomplete_statement {
    ($($arg:tt)*) => { $crate::Error::IncompleteStatement(format!($($arg)*)) };
}

#[macro_export]
macro_rules! parameter_count_mismatch {
    ($binding:expr, $expected:expr, $actual:expr) => {
        $crate::Error::ParameterCountMismatch {
            binding: $binding,
            expected: $expected,
            actual: $actual,
        }
    };
}

#[cfg(test)]
mod test {
    #[test]
    fn test_display() {
        assert_eq!(
            incomplete_statement!("No statement kind on table `{}`", "ta").to_string(),
            "IncompleteStatement: `No statement kind on table `ta``"
        );

        assert_eq!(
            parameter_count_mismatch!("where", 1, 2).to_string(),
            "ParameterCountMismatch: `where` expects 1 values, got 2"
        );
    }
}
