//! Subset-reordering crossover for permutations.

use rand::Rng;

/// Recombines two parent permutations into one child.
///
/// Each position is independently marked with probability 0.5. Positions
/// outside the marked set keep `p1`'s values and order; the values `p1`
/// holds at the marked positions are written back into those same positions
/// reordered to follow their relative order in `p2`. The child is always a
/// valid permutation: the value multiset is `p1`'s, only the arrangement of
/// the marked subset changes.
///
/// An empty or singleton marked set leaves the child equal to `p1`; marking
/// every position yields `p2` itself. Identical parents always reproduce
/// themselves, whatever the mask.
///
/// # Complexity
/// O(n log n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths.
pub fn crossover<R: Rng>(p1: &[usize], p2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = p1.len();
    assert_eq!(n, p2.len(), "parents must have equal length");

    let marked: Vec<usize> = (0..n).filter(|_| rng.random_bool(0.5)).collect();
    crossover_with_mask(p1, p2, &marked)
}

/// The deterministic core of [`crossover`]: `marked` must hold strictly
/// increasing positions in `0..p1.len()`.
fn crossover_with_mask(p1: &[usize], p2: &[usize], marked: &[usize]) -> Vec<usize> {
    let mut child = p1.to_vec();
    if marked.len() < 2 {
        return child;
    }

    // Position of each value in p2.
    let mut rank = vec![0usize; p2.len()];
    for (pos, &v) in p2.iter().enumerate() {
        rank[v] = pos;
    }

    let mut values: Vec<usize> = marked.iter().map(|&i| p1[i]).collect();
    values.sort_unstable_by_key(|&v| rank[v]);

    for (&i, &v) in marked.iter().zip(values.iter()) {
        child[i] = v;
    }
    child
}
