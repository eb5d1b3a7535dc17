//! In-place permutation edits used by the local search.

use rand::seq::SliceRandom;
use rand::Rng;

/// Swaps `p[i]` and `p[i + 1]` in place.
///
/// Bounds are the caller's responsibility: `i + 1 < p.len()`.
#[inline]
pub fn swap_adjacent(p: &mut [usize], i: usize) {
    p.swap(i, i + 1);
}

/// Removes the element at position `i` and reinserts it at position `j`,
/// shifting the intervening block by one. `i == j` is a no-op.
///
/// For `i < j` the elements at `i+1..=j` shift left and the removed element
/// lands at `j`; for `i > j` the elements at `j..i` shift right. Relocating
/// back (`relocate(p, j, i)`) restores the original arrangement.
#[inline]
pub fn relocate(p: &mut [usize], i: usize, j: usize) {
    if i < j {
        p[i..=j].rotate_left(1);
    } else if i > j {
        p[j..=i].rotate_right(1);
    }
}

/// A uniformly random permutation of `0..n`.
pub fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut p: Vec<usize> = (0..n).collect();
    p.shuffle(rng);
    p
}
