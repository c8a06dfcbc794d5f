use thiserror::Error;

/// Errors that can occur while building or configuring a classifier.
///
/// Classification itself never fails: non-matching input is reported as
/// `None` or [`Classification::Unknown`](crate::Classification::Unknown).
#[derive(Debug, Error)]
pub enum TheiaError {
    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),

    /// A precedence name was not one of the known values.
    #[error("unknown precedence {0:?} (expected \"tv\" or \"movie\")")]
    UnknownPrecedence(String),
}

/// Result type alias for Theia operations.
pub type Result<T> = std::result::Result<T, TheiaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = TheiaError::UnknownPrecedence("both".into());
        assert_eq!(
            err.to_string(),
            "unknown precedence \"both\" (expected \"tv\" or \"movie\")"
        );

        let regex_err = regex::Regex::new("(").unwrap_err();
        let err = TheiaError::from(regex_err);
        assert!(err.to_string().starts_with("regex compilation error"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TheiaError>();
    }
}
