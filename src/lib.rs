//! Heuristic solver for the Linear Ordering Problem (LOP).
//!
//! Given an n×n matrix of pairwise preference weights, find a permutation of
//! indices that maximizes the total weight above the diagonal when rows and
//! columns are reordered identically — i.e. triangularize the matrix as
//! closely as possible.
//!
//! The solver is a memetic algorithm:
//!
//! - **Local search**: first-improvement search over the insertion
//!   neighborhood, realized as chained adjacent swaps so each step costs an
//!   O(1) incremental objective update.
//! - **Memetic driver**: a fixed-size population of locally optimal
//!   permutations evolved by crossover + local search, with survivor
//!   selection by score, stagnation detection, and periodic partial restarts
//!   (diversification) to escape local optima.
//!
//! # Modules
//!
//! - [`matrix`]: square weight matrix and a Bernoulli random-instance generator
//! - [`objective`]: LOP objective and incremental adjacent-swap delta
//! - [`perm`]: in-place permutation edits (adjacent swap, block relocation)
//! - [`local_search`]: insertion-neighborhood hill climbing
//! - [`ma`]: the memetic driver — configuration, crossover, runner
//!
//! # Reference
//!
//! Schiavinotto, T. & Stützle, T. (2005). "The linear ordering problem:
//! Instances, search space analysis and algorithms", *Journal of
//! Mathematical Modelling and Algorithms* 3(4), 367–402.

pub mod error;
pub mod local_search;
pub mod ma;
pub mod matrix;
pub mod objective;
pub mod perm;

pub use error::Error;
pub use matrix::WeightMatrix;
