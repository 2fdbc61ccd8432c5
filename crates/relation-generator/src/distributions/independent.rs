//! Independent (uniform) columns.

use super::RowSampler;
use crate::sampler::Sampler;

/// Every column is an independent uniform draw in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Independent;

impl RowSampler for Independent {
    fn sample(&self, sampler: &mut Sampler, out: &mut [f64]) {
        for value in out.iter_mut() {
            *value = sampler.gen_uniform();
        }
    }
}
