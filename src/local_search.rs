//! Insertion-neighborhood local search.
//!
//! # Algorithm
//!
//! A single [`visit`] step performs first-improvement search over the
//! insertion neighborhood: every permutation reachable by moving one element
//! to another position. For each anchor position the candidate relocations
//! are explored as a chain of adjacent swaps in both directions, so each
//! candidate costs one O(1) [`delta_swap`] instead of an O(n²) recompute.
//! The first anchor with a qualifying relocation is committed and the step
//! reports an update; if no anchor qualifies the permutation is a local
//! optimum of the neighborhood.
//!
//! A relocation qualifies only when its running objective is strictly
//! positive *and* exceeds the anchor's current objective; the threshold
//! starts at zero, not at the current objective, so moves whose running
//! objective stays non-positive are never taken even when they would
//! improve. See `test_visit_skips_improving_but_nonpositive_move`.
//!
//! # Reference
//!
//! Schiavinotto, T. & Stützle, T. (2005). "The linear ordering problem:
//! Instances, search space analysis and algorithms", *Journal of
//! Mathematical Modelling and Algorithms* 3(4), 367–402.

use crate::matrix::WeightMatrix;
use crate::objective::{delta_swap, objective};
use crate::perm::{relocate, swap_adjacent};

/// Default cap on [`visit`] steps per [`local_search`] call.
pub const DEFAULT_MAX_ITERATIONS: usize = 100_000;

/// One first-improvement step. Returns `true` if an improving relocation was
/// committed, `false` if `p` is a local optimum (always `false` for n ≤ 1).
///
/// Mutates `p` in place and performs no allocation.
pub fn visit(mat: &WeightMatrix, p: &mut [usize]) -> bool {
    let n = p.len();
    if n < 2 {
        return false;
    }
    let obj0 = objective(mat, p);
    for i in 0..n {
        let mut rbar = i;
        let mut objbar = 0;

        // Walk the anchor left one swap at a time, tracking the running
        // objective; the best running value and its landing position are
        // shared with the forward scan below.
        let mut obj1 = obj0;
        for j in (0..i).rev() {
            obj1 += delta_swap(mat, p, j);
            swap_adjacent(p, j);
            if obj1 > objbar {
                rbar = j;
                objbar = obj1;
            }
        }
        relocate(p, 0, i);

        // Walk the anchor right.
        let mut obj1 = obj0;
        for j in i..n - 1 {
            obj1 += delta_swap(mat, p, j);
            swap_adjacent(p, j);
            if obj1 > objbar {
                rbar = j + 1;
                objbar = obj1;
            }
        }
        relocate(p, n - 1, i);

        if objbar > obj0 {
            relocate(p, i, rbar);
            return true;
        }
    }
    false
}

/// Drives `p` to a local optimum of the insertion neighborhood, in place.
///
/// Repeats [`visit`] until it reports no update or `max_iterations` steps
/// have run. The caller re-derives the score via
/// [`objective`](crate::objective::objective) if needed.
pub fn local_search(mat: &WeightMatrix, p: &mut [usize], max_iterations: usize) {
    for _ in 0..max_iterations {
        if !visit(mat, p) {
            break;
        }
    }
}
