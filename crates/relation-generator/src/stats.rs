//! Summary statistics for checking the shape of a generated relation.

use relation_core::LevelTuple;

/// Pearson correlation coefficient of two equally long samples.
///
/// Returns `None` for fewer than two points, mismatched lengths, or a
/// sample with zero variance.
pub fn pearson_correlation(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in xs.iter().zip(ys) {
        let (dx, dy) = (x - mean_x, y - mean_y);
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some(cov / (var_x.sqrt() * var_y.sqrt()))
}

/// Per-column level statistics of a set of tuples.
#[derive(Debug, Clone, PartialEq)]
pub struct RelationStats {
    /// Number of tuples summarised
    pub rows: u64,
    /// Mean level per column
    pub means: Vec<f64>,
    /// Pairwise Pearson correlation of the levels; `None` where undefined
    pub correlations: Vec<Vec<Option<f64>>>,
}

impl RelationStats {
    /// Summarise tuples that all have `columns` columns.
    pub fn from_tuples<'a, I>(tuples: I, columns: usize) -> Self
    where
        I: IntoIterator<Item = &'a LevelTuple>,
    {
        let mut accumulator = StatsAccumulator::new(columns);
        for tuple in tuples {
            accumulator.push(tuple);
        }
        accumulator.finish()
    }
}

/// Running means and co-moments, updated one tuple at a time.
///
/// Memory stays `O(columns^2)` regardless of the number of rows.
#[derive(Debug, Clone)]
pub struct StatsAccumulator {
    columns: usize,
    rows: u64,
    means: Vec<f64>,
    /// Row-major `columns x columns` sums of centred products
    co_moments: Vec<f64>,
    /// Per-column deviation from the previous mean, reused across pushes
    deltas: Vec<f64>,
}

impl StatsAccumulator {
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            rows: 0,
            means: vec![0.0; columns],
            co_moments: vec![0.0; columns * columns],
            deltas: vec![0.0; columns],
        }
    }

    /// Add one tuple. Missing columns count as level 0.
    pub fn push(&mut self, tuple: &LevelTuple) {
        self.rows += 1;
        let n = self.rows as f64;
        for c in 0..self.columns {
            let x = tuple.level(c).map_or(0.0, f64::from);
            self.deltas[c] = x - self.means[c];
            self.means[c] += self.deltas[c] / n;
        }
        for i in 0..self.columns {
            for j in 0..self.columns {
                let x_j = tuple.level(j).map_or(0.0, f64::from);
                self.co_moments[i * self.columns + j] += self.deltas[i] * (x_j - self.means[j]);
            }
        }
    }

    pub fn rows(&self) -> u64 {
        self.rows
    }

    pub fn finish(self) -> RelationStats {
        let columns = self.columns;
        let correlations = (0..columns)
            .map(|i| {
                (0..columns)
                    .map(|j| {
                        let var_i = self.co_moments[i * columns + i];
                        let var_j = self.co_moments[j * columns + j];
                        if self.rows < 2 || var_i == 0.0 || var_j == 0.0 {
                            return None;
                        }
                        Some(self.co_moments[i * columns + j] / (var_i.sqrt() * var_j.sqrt()))
                    })
                    .collect()
            })
            .collect();

        RelationStats {
            rows: self.rows,
            means: self.means,
            correlations,
        }
    }
}
