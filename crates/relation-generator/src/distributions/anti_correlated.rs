//! Anti-correlated columns modelling a trade-off surface.
//!
//! Column 0 is `0.5 + gaussian()` folded into `[0, 1]`. Every other column
//! is uniform inside a band bounded by two circular arcs evaluated at the
//! first value. With the default calibration the band is
//! `[1 - sqrt(1 - (1 - x)^2), sqrt(1 - x^2))`, so a large first value pushes
//! the remaining columns towards 0 and a small one towards 1.

use super::{fold_unit, RowSampler};
use crate::sampler::Sampler;
use relation_core::ArcCalibration;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AntiCorrelated {
    calibration: ArcCalibration,
}

impl AntiCorrelated {
    pub fn new(calibration: ArcCalibration) -> Self {
        Self { calibration }
    }

    /// Lower border of the admissible band at `x`.
    pub fn low(&self, x: f64) -> f64 {
        let ArcCalibration {
            lower_x, lower_y, ..
        } = self.calibration;
        let radius_sq = (lower_x - 1.0).powi(2) + lower_y.powi(2);
        lower_y - (radius_sq - (lower_x - x).powi(2)).max(0.0).sqrt()
    }

    /// Upper border of the admissible band at `x`.
    pub fn high(&self, x: f64) -> f64 {
        let ArcCalibration {
            upper_x, upper_y, ..
        } = self.calibration;
        let radius_sq = upper_x.powi(2) + (1.0 + upper_y).powi(2);
        (radius_sq - (upper_x + x).powi(2)).max(0.0).sqrt() - upper_y
    }
}

impl AntiCorrelated {
    /// Fill columns `1..` for a folded first value.
    ///
    /// `first == 1` gives all zeros and `first == 0` gives all ones without
    /// drawing from the sampler. Both checks run on the folded value, so a
    /// raw draw that folds onto a border takes the edge branch too.
    fn fill_rest(&self, first: f64, rest: &mut [f64], sampler: &mut Sampler) {
        if first == 1.0 {
            rest.fill(0.0);
            return;
        }
        if first == 0.0 {
            rest.fill(1.0);
            return;
        }

        let low = self.low(first);
        let distance = self.high(first) - low;
        for value in rest.iter_mut() {
            *value = (low + sampler.gen_uniform() * distance).clamp(0.0, 1.0);
        }
    }
}

impl RowSampler for AntiCorrelated {
    fn sample(&self, sampler: &mut Sampler, out: &mut [f64]) {
        let Some((head, rest)) = out.split_first_mut() else {
            return;
        };
        let first = fold_unit(0.5 + sampler.gen_gaussian());
        *head = first;
        self.fill_rest(first, rest, sampler);
    }
}
