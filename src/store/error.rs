//! Storage-specific error types.

/// Errors raised by the record store.
///
/// Every variant is fatal to the session: local storage problems are
/// treated as unrecoverable environment errors, reported once, and the
/// process exits non-zero.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Storage file could not be opened or created
    #[error("Failed to open database at {path}: {source}")]
    Open {
        path: String,
        source: rusqlite::Error,
    },

    /// Schema could not be applied on startup
    #[error("Failed to apply database schema: {0}")]
    Schema(rusqlite::Error),

    /// A prepared operation or read failed
    #[error("Database operation failed: {0}")]
    Query(#[from] rusqlite::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let error = StoreError::Open {
            path: "database.sqlite".to_string(),
            source: rusqlite::Error::InvalidQuery,
        };
        assert!(error.to_string().contains("Failed to open database"));
        assert!(error.to_string().contains("database.sqlite"));

        let error = StoreError::Schema(rusqlite::Error::InvalidQuery);
        assert!(error.to_string().contains("Failed to apply database schema"));

        let error = StoreError::Query(rusqlite::Error::InvalidQuery);
        assert!(error.to_string().contains("Database operation failed"));
    }
}
