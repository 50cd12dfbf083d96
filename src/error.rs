use thiserror::Error;

/// Errors raised while listing compile options
#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("Cannot open database: {0}")]
    Connection(#[source] rusqlite::Error),

    #[error("Compile options query failed: {0}")]
    Query(#[source] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl OptionsError {
    pub fn error_code(&self) -> &'static str {
        match self {
            OptionsError::Connection(_) => "ConnectionError",
            OptionsError::Query(_) => "QueryError",
            OptionsError::Io(_) => "IoError",
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, OptionsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = OptionsError::Connection(rusqlite::Error::InvalidQuery);
        assert_eq!(err.error_code(), "ConnectionError");

        let err = OptionsError::Query(rusqlite::Error::InvalidQuery);
        assert_eq!(err.error_code(), "QueryError");

        let err = OptionsError::from(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert_eq!(err.error_code(), "IoError");
    }

    #[test]
    fn test_messages_keep_source() {
        let err = OptionsError::Query(rusqlite::Error::QueryReturnedNoRows);
        let message = err.to_string();
        assert!(message.starts_with("Compile options query failed:"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
