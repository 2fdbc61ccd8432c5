//! Gaussian columns truncated to the unit interval.

use super::RowSampler;
use crate::sampler::Sampler;

/// Divisor applied to the standard normal draw; a value is redrawn when it
/// falls more than three standard deviations from the mean.
pub const SPREAD_DIVISOR: f64 = 6.0;

/// Each column is `gaussian() / 6 + 0.5`, redrawn until inside `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Gaussian;

impl RowSampler for Gaussian {
    fn sample(&self, sampler: &mut Sampler, out: &mut [f64]) {
        for value in out.iter_mut() {
            *value = loop {
                let candidate = sampler.gen_gaussian() / SPREAD_DIVISOR + 0.5;
                if (0.0..=1.0).contains(&candidate) {
                    break candidate;
                }
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_centred_on_half() {
        let mut sampler = Sampler::from_seed(9);
        let n = 20_000;
        let values: Vec<f64> = (0..n)
            .flat_map(|_| Gaussian.sample_row(&mut sampler, 2))
            .collect();
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let sd = (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
            / values.len() as f64)
            .sqrt();

        assert_abs_diff_eq!(mean, 0.5, epsilon = 0.01);
        // truncation at 3 sigma barely narrows the bell
        assert_abs_diff_eq!(sd, 1.0 / 6.0, epsilon = 0.01);
        assert!(values.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn test_center_mass() {
        let mut sampler = Sampler::from_seed(1);
        let values: Vec<f64> = (0..10_000)
            .flat_map(|_| Gaussian.sample_row(&mut sampler, 1))
            .collect();
        let central = values.iter().filter(|v| (0.25..0.75).contains(*v)).count();
        // about 86.6% of N(0.5, 1/6) lies within 1.5 sigma
        assert!(central as f64 / values.len() as f64 > 0.8);
    }
}
