//! Column descriptor of a synthetic relation.

use crate::radix::MixedRadix;
use std::sync::Arc;

/// Name of the id column that precedes the data columns.
pub const ID_COLUMN: &str = "id";

/// Describes the bounds of every data column. Built once per relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationMetaData {
    max_values: Arc<[u32]>,
    cardinality: u64,
}

impl RelationMetaData {
    pub fn new(radix: &MixedRadix) -> Self {
        Self {
            max_values: Arc::clone(radix.max_values()),
            cardinality: radix.cardinality(),
        }
    }

    /// Number of data columns (the id column is not counted).
    pub fn column_count(&self) -> usize {
        self.max_values.len()
    }

    /// Name of data column `column`, e.g. `col0`.
    pub fn column_name(&self, column: usize) -> Option<String> {
        (column < self.column_count()).then(|| format!("col{column}"))
    }

    /// All column names, starting with the id column.
    pub fn column_names(&self) -> Vec<String> {
        std::iter::once(ID_COLUMN.to_string())
            .chain((0..self.column_count()).map(|i| format!("col{i}")))
            .collect()
    }

    /// Inclusive maximum level of data column `column`.
    pub fn max_level(&self, column: usize) -> Option<u32> {
        self.max_values.get(column).copied()
    }

    pub fn max_values(&self) -> &Arc<[u32]> {
        &self.max_values
    }

    /// Size of the id space.
    pub fn cardinality(&self) -> u64 {
        self.cardinality
    }
}
