//! Memetic driver for the linear ordering problem.
//!
//! A fixed-size population of locally optimal permutations is evolved
//! generation by generation: crossover produces offspring, each offspring is
//! driven to a local optimum, survivors are selected by score, and detected
//! stagnation triggers a partial restart of the population.
//!
//! # Key Types
//!
//! - [`MaConfig`]: algorithm parameters (population size, offspring count,
//!   diversification window, stagnation stop, seed)
//! - [`MaRunner`]: executes the generational loop
//! - [`MaResult`]: best permutation found plus run statistics
//! - [`ScoredPermutation`]: a population member whose score is computed at
//!   construction and can never desynchronize from its permutation
//!
//! # References
//!
//! - Schiavinotto & Stützle (2005), *The linear ordering problem: Instances,
//!   search space analysis and algorithms*
//! - Moscato (1989), *On Evolution, Search, Optimization, Genetic Algorithms
//!   and Martial Arts: Towards Memetic Algorithms*

mod config;
mod crossover;
mod runner;
mod types;

pub use config::MaConfig;
pub use crossover::crossover;
pub use runner::{MaResult, MaRunner};
pub use types::ScoredPermutation;
