//! Positively correlated columns.

use super::{fold_unit, RowSampler};
use crate::sampler::Sampler;
use relation_core::DEFAULT_CORRELATED_SPREAD;

/// Column 0 is a base value `fold(0.5 + gaussian())`; every other column is
/// uniform in `[base - spread, base + spread)` cut to the unit interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correlated {
    spread: f64,
}

impl Default for Correlated {
    fn default() -> Self {
        Self::new(DEFAULT_CORRELATED_SPREAD)
    }
}

impl Correlated {
    pub fn new(spread: f64) -> Self {
        Self { spread }
    }
}

impl RowSampler for Correlated {
    fn sample(&self, sampler: &mut Sampler, out: &mut [f64]) {
        let Some((head, rest)) = out.split_first_mut() else {
            return;
        };
        let base = fold_unit(0.5 + sampler.gen_gaussian());
        *head = base;

        let low = (base - self.spread).max(0.0);
        let high = (base + self.spread).min(1.0);
        for value in rest.iter_mut() {
            *value = low + sampler.gen_uniform() * (high - low);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::pearson_correlation;

    #[test]
    fn test_columns_near_base() {
        let s = Correlated::new(0.1);
        let mut sampler = Sampler::from_seed(17);
        for _ in 0..5_000 {
            let row = s.sample_row(&mut sampler, 5);
            for &v in &row[1..] {
                assert!((v - row[0]).abs() <= 0.1 + 1e-12);
                assert!((0.0..=1.0).contains(&v));
            }
        }
    }

    #[test]
    fn test_zero_spread_copies_base() {
        let s = Correlated::new(0.0);
        let mut sampler = Sampler::from_seed(2);
        let row = s.sample_row(&mut sampler, 3);
        assert_eq!(row[1], row[0]);
        assert_eq!(row[2], row[0]);
    }

    #[test]
    fn test_positive_correlation() {
        let s = Correlated::default();
        let mut sampler = Sampler::from_seed(42);
        let rows: Vec<Vec<f64>> = (0..20_000).map(|_| s.sample_row(&mut sampler, 2)).collect();
        let xs: Vec<f64> = rows.iter().map(|r| r[0]).collect();
        let ys: Vec<f64> = rows.iter().map(|r| r[1]).collect();

        let r = pearson_correlation(&xs, &ys).unwrap();
        assert!(r > 0.8, "expected strong positive correlation, got {r}");
    }
}
