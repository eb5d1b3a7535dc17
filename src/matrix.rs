//! Square weight matrix for linear ordering instances.
//!
//! [`WeightMatrix`] is immutable after construction and shared read-only by
//! every permutation in a run. `mat[(i, j)]` is the reward collected when
//! index `i` is ordered before index `j`.

use crate::error::Error;
use rand::Rng;
use std::ops::Index;

/// Default density of nonzero entries below the diagonal in [`WeightMatrix::random`].
pub const DEFAULT_LOWER_DENSITY: f64 = 0.05;

/// Default density of nonzero entries above the diagonal in [`WeightMatrix::random`].
pub const DEFAULT_UPPER_DENSITY: f64 = 0.4;

/// An n×n integer weight matrix, stored row-major.
///
/// Only the strictly upper and lower triangular entries matter to the
/// objective; the diagonal is ignored by every consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightMatrix {
    n: usize,
    data: Vec<i64>,
}

impl WeightMatrix {
    /// Builds a matrix from rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if any row's length differs from the
    /// number of rows.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self, Error> {
        let n = rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(Error::InvalidInput(format!(
                    "matrix is not square: row {i} has {} entries, expected {n}",
                    row.len()
                )));
            }
        }
        let data = rows.into_iter().flatten().collect();
        Ok(Self { n, data })
    }

    /// Generates a random 0/1 instance.
    ///
    /// Entries below the diagonal are Bernoulli(`lower_density`), entries
    /// above are Bernoulli(`upper_density`), the diagonal is zero. With the
    /// default densities ([`DEFAULT_LOWER_DENSITY`], [`DEFAULT_UPPER_DENSITY`])
    /// the identity ordering is already close to triangular, which makes
    /// these instances useful for tests and benchmarks.
    ///
    /// Densities are clamped to `[0, 1]`.
    pub fn random<R: Rng>(n: usize, lower_density: f64, upper_density: f64, rng: &mut R) -> Self {
        let d1 = lower_density.clamp(0.0, 1.0);
        let d2 = upper_density.clamp(0.0, 1.0);
        let mut data = vec![0i64; n * n];
        for i in 0..n {
            for j in 0..n {
                if i > j {
                    data[i * n + j] = i64::from(rng.random_bool(d1));
                } else if i < j {
                    data[i * n + j] = i64::from(rng.random_bool(d2));
                }
            }
        }
        Self { n, data }
    }

    /// The matrix dimension n.
    #[inline]
    pub fn dim(&self) -> usize {
        self.n
    }

    /// The entry at row `i`, column `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> i64 {
        debug_assert!(i < self.n && j < self.n);
        self.data[i * self.n + j]
    }
}

impl Index<(usize, usize)> for WeightMatrix {
    type Output = i64;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &i64 {
        &self.data[i * self.n + j]
    }
}
