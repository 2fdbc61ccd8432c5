//! Quantization of raw values into bounded levels.

use relation_core::{ConfigError, LevelTuple, MixedRadix};

/// Maps raw `[0, 1]` rows to level tuples of one relation.
#[derive(Debug, Clone)]
pub struct Quantizer {
    radix: MixedRadix,
}

impl Quantizer {
    pub fn new(max_values: &[u32]) -> Result<Self, ConfigError> {
        Ok(Self {
            radix: MixedRadix::new(max_values)?,
        })
    }

    pub fn radix(&self) -> &MixedRadix {
        &self.radix
    }

    /// Level of a single raw value: `floor(raw * (max + 1))`, with
    /// `raw == 1.0` mapped to `max`.
    pub fn level(raw: f64, max: u32) -> u32 {
        // float-to-int `as` saturates, so negatives land on 0
        let level = (raw * (f64::from(max) + 1.0)).floor() as u32;
        level.min(max)
    }

    /// Quantize one raw row into a level tuple.
    pub fn quantize(&self, raw: &[f64]) -> LevelTuple {
        let levels = raw
            .iter()
            .zip(self.radix.max_values().iter())
            .map(|(&value, &max)| Self::level(value, max))
            .collect();
        LevelTuple::new(levels, &self.radix)
    }
}
