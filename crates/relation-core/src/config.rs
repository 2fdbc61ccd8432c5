//! Generator configuration for synthetic relations.
//!
//! A [`RelationConfig`] describes one relation: the distribution shape, the
//! inclusive maximum level of every column, how many rows are visible, how
//! many rows are discarded up front, the seed, and the cursor mode.
//!
//! Configs can be built in code or loaded from YAML:
//!
//! ```yaml
//! distribution:
//!   type: anti_correlated
//! max_values: [9, 9, 9]
//! rows: 10000
//! offset: 500
//! seed: 42
//! in_memory: true
//! ```

use crate::error::ConfigError;
use crate::radix::MixedRadix;
use crate::tuple::LevelTuple;
use serde::{Deserialize, Serialize};
use std::fs;
use std::mem::size_of;
use std::path::Path;

/// Default inclusive maximum level per column (levels `0..=10`).
pub const DEFAULT_MAXIMUM_LEVEL: u32 = 10;

/// Default half-width of the correlated jitter band.
pub const DEFAULT_CORRELATED_SPREAD: f64 = 0.15;

fn default_spread() -> f64 {
    DEFAULT_CORRELATED_SPREAD
}

/// Largest row count whose tuple buffer stays within `isize::MAX` bytes.
fn max_buffered_rows() -> u64 {
    isize::MAX as u64 / size_of::<LevelTuple>() as u64
}

/// Statistical shape of the generated columns.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Distribution {
    /// Every column is an independent uniform draw
    #[default]
    Independent,

    /// Columns follow a shared base value with bounded jitter
    Correlated {
        /// Half-width of the band around the base value
        #[serde(default = "default_spread")]
        spread: f64,
    },

    /// A high first column pushes the remaining columns low, and vice versa
    AntiCorrelated {
        /// Arc constants bounding the admissible band of columns `1..`
        #[serde(default)]
        calibration: ArcCalibration,
    },

    /// Bell shape around 0.5, truncated to the unit interval
    Gaussian,
}

impl Distribution {
    /// Correlated distribution with the default spread.
    pub fn correlated() -> Self {
        Distribution::Correlated {
            spread: DEFAULT_CORRELATED_SPREAD,
        }
    }

    /// Anti-correlated distribution with the default arc calibration.
    pub fn anti_correlated() -> Self {
        Distribution::AntiCorrelated {
            calibration: ArcCalibration::default(),
        }
    }

    /// Short lowercase name, as used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Distribution::Independent => "independent",
            Distribution::Correlated { .. } => "correlated",
            Distribution::AntiCorrelated { .. } => "anti_correlated",
            Distribution::Gaussian => "gaussian",
        }
    }
}

/// Circular-arc constants of the anti-correlated band.
///
/// The lower border is the arc centred at `(lower_x, lower_y)` through
/// `(1, 0)`; the upper border is the arc centred at `(-upper_x, -upper_y)`
/// through `(0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcCalibration {
    pub lower_x: f64,
    pub lower_y: f64,
    pub upper_x: f64,
    pub upper_y: f64,
}

impl Default for ArcCalibration {
    fn default() -> Self {
        Self {
            lower_x: 1.0,
            lower_y: 1.0,
            upper_x: 0.0,
            upper_y: 0.0,
        }
    }
}

/// How the offset interacts with in-memory materialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OffsetPolicy {
    /// Discard `offset` rows, then fill the buffer with the next `rows` rows
    #[default]
    SkipBeforeMaterialize,

    /// In-memory relations start at row 0 of the seeded stream; the offset
    /// only applies to streaming cursors
    IgnoreWhenMaterialized,
}

/// Parameters of one synthetic relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationConfig {
    /// Distribution shape
    #[serde(default)]
    pub distribution: Distribution,

    /// Inclusive maximum level per column
    pub max_values: Vec<u32>,

    /// Number of visible rows
    pub rows: u64,

    /// Rows generated and discarded before the first visible row
    #[serde(default)]
    pub offset: u64,

    /// Seed of the sampler
    #[serde(default)]
    pub seed: u64,

    /// Materialize all rows at construction (enables peek and exact replay)
    #[serde(default)]
    pub in_memory: bool,

    /// Streaming `reset()` re-seeds and replays the same rows instead of
    /// only rewinding the row counter
    #[serde(default)]
    pub reproducible_reset: bool,

    /// Offset handling for in-memory relations
    #[serde(default)]
    pub offset_policy: OffsetPolicy,
}

impl RelationConfig {
    /// Create a config with explicit per-column maximum levels.
    pub fn new(distribution: Distribution, max_values: Vec<u32>, rows: u64) -> Self {
        Self {
            distribution,
            max_values,
            rows,
            offset: 0,
            seed: 0,
            in_memory: false,
            reproducible_reset: false,
            offset_policy: OffsetPolicy::default(),
        }
    }

    /// Create a config where every column shares the same maximum level.
    pub fn with_columns(
        distribution: Distribution,
        columns: usize,
        maximum_level: u32,
        rows: u64,
    ) -> Self {
        Self::new(distribution, vec![maximum_level; columns], rows)
    }

    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn in_memory(mut self, in_memory: bool) -> Self {
        self.in_memory = in_memory;
        self
    }

    pub fn with_reproducible_reset(mut self, reproducible_reset: bool) -> Self {
        self.reproducible_reset = reproducible_reset;
        self
    }

    pub fn with_offset_policy(mut self, offset_policy: OffsetPolicy) -> Self {
        self.offset_policy = offset_policy;
        self
    }

    /// Number of data columns.
    pub fn columns(&self) -> usize {
        self.max_values.len()
    }

    /// Load config from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serialize config to a YAML string.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check the invariants the generator relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_values.is_empty() {
            return Err(ConfigError::NoColumns);
        }
        MixedRadix::new(&self.max_values)?;
        if self.in_memory && self.rows > max_buffered_rows() {
            return Err(ConfigError::RowsTooLarge { rows: self.rows });
        }
        if let Distribution::Correlated { spread } = self.distribution {
            if !spread.is_finite() || spread < 0.0 {
                return Err(ConfigError::InvalidSpread(spread));
            }
        }
        Ok(())
    }
}
