//! Distribution strategies that turn sampler draws into raw column values.
//!
//! Every strategy fills one row of `n` values in `[0, 1]`; the quantizer
//! turns them into levels afterwards.

pub mod anti_correlated;
pub mod correlated;
pub mod gaussian;
pub mod independent;

pub use anti_correlated::AntiCorrelated;
pub use correlated::Correlated;
pub use gaussian::Gaussian;
pub use independent::Independent;

use crate::sampler::Sampler;
use relation_core::Distribution;

/// Trait for producing one raw row.
pub trait RowSampler {
    /// Fill `out` with values in `[0, 1]`, consuming draws from `sampler`.
    fn sample(&self, sampler: &mut Sampler, out: &mut [f64]);

    /// Allocate and fill a row of `columns` values.
    fn sample_row(&self, sampler: &mut Sampler, columns: usize) -> Vec<f64> {
        let mut row = vec![0.0; columns];
        self.sample(sampler, &mut row);
        row
    }
}

/// The strategy selected by a [`Distribution`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
    Independent(Independent),
    Correlated(Correlated),
    AntiCorrelated(AntiCorrelated),
    Gaussian(Gaussian),
}

impl From<Distribution> for Strategy {
    fn from(distribution: Distribution) -> Self {
        match distribution {
            Distribution::Independent => Strategy::Independent(Independent),
            Distribution::Correlated { spread } => Strategy::Correlated(Correlated::new(spread)),
            Distribution::AntiCorrelated { calibration } => {
                Strategy::AntiCorrelated(AntiCorrelated::new(calibration))
            }
            Distribution::Gaussian => Strategy::Gaussian(Gaussian),
        }
    }
}

impl RowSampler for Strategy {
    fn sample(&self, sampler: &mut Sampler, out: &mut [f64]) {
        match self {
            Strategy::Independent(s) => s.sample(sampler, out),
            Strategy::Correlated(s) => s.sample(sampler, out),
            Strategy::AntiCorrelated(s) => s.sample(sampler, out),
            Strategy::Gaussian(s) => s.sample(sampler, out),
        }
    }
}

/// Fold an arbitrary value into `[0, 1]`.
///
/// Negative values are mirrored at 0. Values above 1 keep their fractional
/// part when the integer part is even and are reflected (`1 - frac`) when it
/// is odd.
pub fn fold_unit(value: f64) -> f64 {
    let value = value.abs();
    if value <= 1.0 {
        return value;
    }
    let frac = value % 1.0;
    if (value as u64) % 2 == 0 {
        frac
    } else {
        1.0 - frac
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_fold_unit() {
        assert_eq!(fold_unit(0.25), 0.25);
        assert_eq!(fold_unit(1.0), 1.0);
        assert_eq!(fold_unit(0.0), 0.0);
        assert_eq!(fold_unit(-0.75), 0.75);
        // odd integer part reflects
        assert_abs_diff_eq!(fold_unit(1.25), 0.75, epsilon = 1e-12);
        assert_abs_diff_eq!(fold_unit(-1.25), 0.75, epsilon = 1e-12);
        // even integer part keeps the fraction
        assert_abs_diff_eq!(fold_unit(2.25), 0.25, epsilon = 1e-12);
        assert_eq!(fold_unit(2.0), 0.0);
        assert_eq!(fold_unit(3.0), 1.0);
    }

    #[test]
    fn test_strategy_from_distribution() {
        assert_eq!(
            Strategy::from(Distribution::Independent),
            Strategy::Independent(Independent)
        );
        assert_eq!(
            Strategy::from(Distribution::Gaussian),
            Strategy::Gaussian(Gaussian)
        );
        assert!(matches!(
            Strategy::from(Distribution::correlated()),
            Strategy::Correlated(_)
        ));
        assert!(matches!(
            Strategy::from(Distribution::anti_correlated()),
            Strategy::AntiCorrelated(_)
        ));
    }

    #[test]
    fn test_every_strategy_stays_in_unit_interval() {
        let distributions = [
            Distribution::Independent,
            Distribution::correlated(),
            Distribution::anti_correlated(),
            Distribution::Gaussian,
        ];
        for distribution in distributions {
            let strategy = Strategy::from(distribution);
            let mut sampler = Sampler::from_seed(3);
            for _ in 0..2_000 {
                for value in strategy.sample_row(&mut sampler, 4) {
                    assert!(
                        (0.0..=1.0).contains(&value),
                        "{} produced {value}",
                        distribution.name()
                    );
                }
            }
        }
    }

    #[test]
    fn test_strategy_is_deterministic() {
        let strategy = Strategy::from(Distribution::anti_correlated());
        let mut a = Sampler::from_seed(11);
        let mut b = Sampler::from_seed(11);
        for _ in 0..100 {
            assert_eq!(strategy.sample_row(&mut a, 3), strategy.sample_row(&mut b, 3));
        }
    }
}
