//! Error types for relation configuration.

/// Error type for configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading config file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The relation has no data columns
    #[error("Relation must have at least one column")]
    NoColumns,

    /// In-memory row count cannot be buffered on this platform
    #[error("Cannot hold {rows} rows in memory")]
    RowsTooLarge { rows: u64 },

    /// Product of (max + 1) over all columns does not fit in a u64 id
    #[error("Level space of {columns} columns overflows the 64-bit id range")]
    IdSpaceOverflow { columns: usize },

    /// Correlated jitter band must be a finite, non-negative half-width
    #[error("Invalid correlated spread: {0}")]
    InvalidSpread(f64),
}
