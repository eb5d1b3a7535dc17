//! LOP objective evaluation.
//!
//! The objective of a permutation `p` is the total weight that ends up above
//! the diagonal after reordering: Σ over ordered pairs i<j of
//! `mat[(p[i], p[j])]`. [`objective`] recomputes it from scratch in O(n²);
//! [`delta_swap`] yields the O(1) signed change for an adjacent
//! transposition, which is what makes the insertion-neighborhood scan in
//! [`crate::local_search`] cheap.

use crate::matrix::WeightMatrix;

/// Full objective of permutation `p` against `mat`. O(n²).
///
/// `p` must be a valid permutation of `0..mat.dim()`.
///
/// # Panics
/// Panics if `p`'s length differs from the matrix dimension.
#[inline]
pub fn objective(mat: &WeightMatrix, p: &[usize]) -> i64 {
    assert_eq!(p.len(), mat.dim(), "permutation length must match matrix dimension");
    let n = p.len();
    let mut res = 0;
    for i in 0..n {
        for j in i + 1..n {
            res += mat.get(p[i], p[j]);
        }
    }
    res
}

/// Signed change in objective if positions `i` and `i + 1` of `p` were
/// swapped. O(1), does not mutate `p`.
///
/// Must be evaluated *before* the swap is applied; the caller accumulates
/// the delta into a running score to avoid full recomputation.
#[inline]
pub fn delta_swap(mat: &WeightMatrix, p: &[usize], i: usize) -> i64 {
    debug_assert!(i + 1 < p.len());
    let pi = p[i];
    let pii = p[i + 1];
    mat.get(pii, pi) - mat.get(pi, pii)
}
