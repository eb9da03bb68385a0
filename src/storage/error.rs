use thiserror::Error;

/// Storage-specific errors that can occur while talking to the store
#[derive(Error, Debug)]
pub enum StorageError {
    /// Transport, auth, or throttling failure reported by the store client
    #[error("scan of table {table} failed: {source}")]
    Scan {
        table: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl StorageError {
    /// Wrap a store client failure with the table it happened on
    pub fn scan(
        table: &str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        StorageError::Scan {
            table: table.to_string(),
            source: Box::new(source),
        }
    }
}
