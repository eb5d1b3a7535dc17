//! Population member type.

use crate::matrix::WeightMatrix;
use crate::objective::objective;

/// A permutation paired with its objective score.
///
/// The score is computed at construction and the fields are private, so a
/// stored score always equals the true objective of its permutation.
/// In-place mutation happens only on raw permutations *before* they enter
/// the population; re-entering requires a fresh [`ScoredPermutation::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredPermutation {
    perm: Vec<usize>,
    score: i64,
}

impl ScoredPermutation {
    /// Scores `perm` against `mat` and wraps the pair.
    pub fn new(mat: &WeightMatrix, perm: Vec<usize>) -> Self {
        let score = objective(mat, &perm);
        Self { perm, score }
    }

    /// The permutation.
    #[inline]
    pub fn perm(&self) -> &[usize] {
        &self.perm
    }

    /// The objective score of [`perm`](Self::perm).
    #[inline]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Consumes the pair, returning the permutation.
    pub fn into_perm(self) -> Vec<usize> {
        self.perm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_computed_at_construction() {
        let mat = WeightMatrix::from_rows(vec![
            vec![0, 2, 0],
            vec![1, 0, 3],
            vec![0, 0, 0],
        ])
        .unwrap();
        let sp = ScoredPermutation::new(&mat, vec![1, 0, 2]);
        // mat[1,0] + mat[1,2] + mat[0,2] = 1 + 3 + 0
        assert_eq!(sp.score(), 4);
        assert_eq!(sp.perm(), &[1, 0, 2]);
        assert_eq!(sp.into_perm(), vec![1, 0, 2]);
    }
}
