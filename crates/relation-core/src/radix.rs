//! Mixed-radix encoding of level vectors into dense tuple ids.
//!
//! Column `i` has base `max_values[i] + 1`. The last column is the least
//! significant digit, so `mult[n-1] = 1` and
//! `mult[i] = mult[i+1] * (max_values[i+1] + 1)`.

use crate::error::ConfigError;
use std::sync::Arc;

/// Precomputed place values for one relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixedRadix {
    max_values: Arc<[u32]>,
    multipliers: Arc<[u64]>,
    cardinality: u64,
}

impl MixedRadix {
    /// Compute the multipliers for the given inclusive maximum levels.
    ///
    /// Fails if there are no columns or if the level space does not fit in
    /// a `u64`.
    pub fn new(max_values: &[u32]) -> Result<Self, ConfigError> {
        let len = max_values.len();
        if len == 0 {
            return Err(ConfigError::NoColumns);
        }
        let overflow = || ConfigError::IdSpaceOverflow { columns: len };

        let mut multipliers = vec![1u64; len];
        for i in (0..len - 1).rev() {
            let base = u64::from(max_values[i + 1]) + 1;
            multipliers[i] = multipliers[i + 1].checked_mul(base).ok_or_else(overflow)?;
        }
        let cardinality = multipliers[0]
            .checked_mul(u64::from(max_values[0]) + 1)
            .ok_or_else(overflow)?;

        Ok(Self {
            max_values: Arc::from(max_values),
            multipliers: multipliers.into(),
            cardinality,
        })
    }

    /// Encode a level vector. Levels must be within bounds.
    pub fn encode(&self, levels: &[u32]) -> u64 {
        debug_assert_eq!(levels.len(), self.multipliers.len());
        levels
            .iter()
            .zip(self.multipliers.iter())
            .map(|(&level, &mult)| u64::from(level) * mult)
            .sum()
    }

    /// Decode an id back into its level vector.
    ///
    /// Returns `None` if the id is outside `0..cardinality()`.
    pub fn decode(&self, id: u64) -> Option<Vec<u32>> {
        if id >= self.cardinality {
            return None;
        }
        let mut rest = id;
        let levels = self
            .multipliers
            .iter()
            .map(|&mult| {
                let level = rest / mult;
                rest %= mult;
                // level <= max_values[i] because id < cardinality
                level as u32
            })
            .collect();
        Some(levels)
    }

    /// Number of distinct level vectors, i.e. the size of the id space.
    pub fn cardinality(&self) -> u64 {
        self.cardinality
    }

    pub fn multipliers(&self) -> &Arc<[u64]> {
        &self.multipliers
    }

    pub fn max_values(&self) -> &Arc<[u32]> {
        &self.max_values
    }
}
