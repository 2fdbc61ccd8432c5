//! Error types for relation generation.

/// Error type for building a generator.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Config error
    #[error("Config error: {0}")]
    Config(#[from] relation_core::ConfigError),

    /// The materialized row buffer could not be allocated
    #[error("Failed to allocate buffer for {rows} rows: {source}")]
    Allocation {
        rows: u64,
        #[source]
        source: std::collections::TryReserveError,
    },
}

/// Error type for cursor operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CursorError {
    /// The operation is not available for this cursor
    #[error("{operation} is not supported")]
    Unsupported { operation: &'static str },

    /// All rows have been returned
    #[error("Cursor exhausted after {rows} rows")]
    Exhausted { rows: u64 },
}
