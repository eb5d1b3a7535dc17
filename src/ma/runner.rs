//! Memetic algorithm execution loop.
//!
//! # Algorithm
//!
//! 1. Build `population_size` random permutations, each driven to a local
//!    optimum of the insertion neighborhood.
//! 2. Each generation: draw two distinct parents per offspring, recombine,
//!    locally optimize and score the child, then shuffle the grown
//!    population and keep the `population_size` best.
//! 3. Track the best score; a generation without a new best increments the
//!    stagnation counter, an improvement resets it.
//! 4. Every `diversify_after` generations, if the mean population score has
//!    not moved across the whole window, keep only the single best
//!    individual and refill the population from scratch.
//! 5. Stop once `stop_after` consecutive generations pass without a new
//!    best score, and return the best individual of the final population.
//!
//! Progress is written to an injected [`io::Write`] sink as a single
//! carriage-return-overwritten status line, newline-terminated on the final
//! report.

use crate::error::Error;
use crate::local_search::local_search;
use crate::matrix::WeightMatrix;
use crate::perm::random_permutation;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::io::{self, Write};

use super::config::MaConfig;
use super::crossover::crossover;
use super::types::ScoredPermutation;

/// Result of a memetic optimization run.
#[derive(Debug, Clone)]
pub struct MaResult {
    /// The best permutation found.
    pub best: Vec<usize>,

    /// Objective score of [`best`](Self::best).
    pub best_score: i64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Number of diversification restarts triggered.
    pub diversifications: usize,

    /// Best score at the end of each generation.
    pub score_history: Vec<i64>,
}

/// Executes the memetic algorithm.
///
/// # Usage
///
/// ```
/// use linord::ma::{MaConfig, MaRunner};
/// use linord::matrix::WeightMatrix;
///
/// let mat = WeightMatrix::from_rows(vec![
///     vec![0, 0, 0],
///     vec![1, 0, 0],
///     vec![1, 1, 0],
/// ])?;
/// let config = MaConfig::default().with_seed(42);
/// let result = MaRunner::run(&mat, &config)?;
/// assert_eq!(result.best, vec![2, 1, 0]);
/// # Ok::<(), linord::Error>(())
/// ```
pub struct MaRunner;

impl MaRunner {
    /// Runs the optimization, discarding progress output.
    pub fn run(mat: &WeightMatrix, config: &MaConfig) -> Result<MaResult, Error> {
        Self::run_with_progress(mat, config, &mut io::sink())
    }

    /// Runs the optimization, reporting progress to `progress`.
    ///
    /// A status line `{generation:6} ({stagnation:3}): {best}` is written
    /// every `diversify_after` generations, prefixed with a carriage return
    /// so a terminal overwrites it in place; the final report at
    /// termination ends with a newline instead. Write failures on the sink
    /// are ignored and never fail the run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `config` does not pass
    /// [`MaConfig::validate`].
    pub fn run_with_progress<W: Write>(
        mat: &WeightMatrix,
        config: &MaConfig,
        progress: &mut W,
    ) -> Result<MaResult, Error> {
        config.validate().map_err(Error::InvalidConfiguration)?;

        let n = mat.dim();
        if n < 2 {
            report(progress, 0, 0, 0, true);
            return Ok(MaResult {
                best: (0..n).collect(),
                best_score: 0,
                generations: 0,
                diversifications: 0,
                score_history: Vec::new(),
            });
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut population: Vec<ScoredPermutation> =
            Vec::with_capacity(config.population_size + config.offspring_count);
        for _ in 0..config.population_size {
            population.push(new_local_optimum(mat, config, &mut rng));
        }

        let mut best = best_score(&population);
        let mut generation = 0usize;
        let mut stagnation = 0usize;
        let mut diversifications = 0usize;
        let mut mean_window = vec![0.0f64; config.diversify_after];
        let mut score_history = Vec::new();

        while stagnation < config.stop_after {
            if generation % config.diversify_after == 0 {
                report(progress, generation, stagnation, best, false);
            }
            generation += 1;

            // Parents are drawn from the pre-growth population only;
            // offspring never parent within their own generation.
            for _ in 0..config.offspring_count {
                let (a, b) = distinct_pair(config.population_size, &mut rng);
                let mut child = crossover(population[a].perm(), population[b].perm(), &mut rng);
                local_search(mat, &mut child, config.max_search_iterations);
                population.push(ScoredPermutation::new(mat, child));
            }

            // Shuffle before the stable sort so score ties survive
            // selection in random order.
            population.shuffle(&mut rng);
            population.sort_by(|a, b| b.score().cmp(&a.score()));
            population.truncate(config.population_size);

            let generation_best = population[0].score();
            if generation_best > best {
                best = generation_best;
                stagnation = 0;
            } else {
                stagnation += 1;
            }

            mean_window[generation % config.diversify_after] = mean_score(&population);
            if generation % config.diversify_after == 0 && window_is_flat(&mean_window) {
                // The mean score has been frozen for the whole window:
                // restart everything but the single best individual.
                population.truncate(1);
                for _ in 1..config.population_size {
                    population.push(new_local_optimum(mat, config, &mut rng));
                }
                diversifications += 1;
            }

            score_history.push(best);
        }

        report(progress, generation, stagnation, best, true);

        let winner = population
            .into_iter()
            .max_by_key(ScoredPermutation::score)
            .expect("population must not be empty");
        Ok(MaResult {
            best_score: winner.score(),
            best: winner.into_perm(),
            generations: generation,
            diversifications,
            score_history,
        })
    }
}

/// A random permutation driven to a local optimum and scored.
fn new_local_optimum<R: Rng>(
    mat: &WeightMatrix,
    config: &MaConfig,
    rng: &mut R,
) -> ScoredPermutation {
    let mut p = random_permutation(mat.dim(), rng);
    local_search(mat, &mut p, config.max_search_iterations);
    ScoredPermutation::new(mat, p)
}

/// Two distinct indices drawn uniformly from `0..n`. Requires `n >= 2`.
fn distinct_pair<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let mut b = rng.random_range(0..n);
    while b == a {
        b = rng.random_range(0..n);
    }
    (a, b)
}

fn best_score(population: &[ScoredPermutation]) -> i64 {
    population
        .iter()
        .map(ScoredPermutation::score)
        .max()
        .expect("population must not be empty")
}

fn mean_score(population: &[ScoredPermutation]) -> f64 {
    let total: i64 = population.iter().map(ScoredPermutation::score).sum();
    total as f64 / population.len() as f64
}

fn window_is_flat(window: &[f64]) -> bool {
    window.iter().all(|&m| m == window[0])
}

fn report<W: Write>(w: &mut W, generation: usize, stagnation: usize, best: i64, terminal: bool) {
    if terminal {
        let _ = writeln!(w, "\r{generation:6} ({stagnation:3}): {best}");
    } else {
        let _ = write!(w, "\r{generation:6} ({stagnation:3}): {best}");
        let _ = w.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::objective;

    fn reversed_preference_matrix(n: usize) -> WeightMatrix {
        let rows = (0..n)
            .map(|i| (0..n).map(|j| i64::from(i > j)).collect())
            .collect();
        WeightMatrix::from_rows(rows).unwrap()
    }

    // ---- end-to-end convergence ----

    #[test]
    fn test_converges_on_reversed_instance() {
        // Every pair prefers descending order; the unique optimum is
        // [3, 2, 1, 0] with all 6 pairs rewarded.
        let mat = reversed_preference_matrix(4);
        let config = MaConfig::default().with_seed(42);
        let result = MaRunner::run(&mat, &config).unwrap();

        assert_eq!(result.best_score, 6);
        assert_eq!(result.best, vec![3, 2, 1, 0]);
        assert!(result.generations >= config.stop_after);
    }

    #[test]
    fn test_best_score_matches_objective() {
        let mut rng = StdRng::seed_from_u64(3);
        let mat = WeightMatrix::random(15, 0.05, 0.4, &mut rng);
        let config = MaConfig::default().with_seed(42).with_stop_after(20);
        let result = MaRunner::run(&mat, &config).unwrap();

        assert_eq!(result.best_score, objective(&mat, &result.best));
    }

    #[test]
    fn test_beats_single_local_search() {
        let mut rng = StdRng::seed_from_u64(9);
        let mat = WeightMatrix::random(25, 0.05, 0.4, &mut rng);

        let mut p = random_permutation(25, &mut rng);
        local_search(&mat, &mut p, crate::local_search::DEFAULT_MAX_ITERATIONS);
        let single = objective(&mat, &p);

        let config = MaConfig::default().with_seed(42).with_stop_after(30);
        let result = MaRunner::run(&mat, &config).unwrap();
        assert!(
            result.best_score >= single,
            "memetic run ({}) fell below one local search ({single})",
            result.best_score
        );
    }

    // ---- trivial instances ----

    #[test]
    fn test_empty_instance_terminates_immediately() {
        let mat = WeightMatrix::from_rows(vec![]).unwrap();
        let result = MaRunner::run(&mat, &MaConfig::default()).unwrap();
        assert_eq!(result.best, Vec::<usize>::new());
        assert_eq!(result.best_score, 0);
        assert_eq!(result.generations, 0);
    }

    #[test]
    fn test_singleton_instance_terminates_immediately() {
        let mat = WeightMatrix::from_rows(vec![vec![9]]).unwrap();
        let result = MaRunner::run(&mat, &MaConfig::default()).unwrap();
        assert_eq!(result.best, vec![0]);
        assert_eq!(result.best_score, 0);
        assert_eq!(result.generations, 0);
    }

    // ---- configuration and determinism ----

    #[test]
    fn test_invalid_config_is_rejected() {
        let mat = reversed_preference_matrix(4);
        let config = MaConfig::default().with_population_size(1);
        let err = MaRunner::run(&mat, &config).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn test_same_seed_same_result() {
        let mut rng = StdRng::seed_from_u64(5);
        let mat = WeightMatrix::random(12, 0.05, 0.4, &mut rng);
        let config = MaConfig::default().with_seed(7).with_stop_after(25);

        let a = MaRunner::run(&mat, &config).unwrap();
        let b = MaRunner::run(&mat, &config).unwrap();

        assert_eq!(a.best, b.best);
        assert_eq!(a.best_score, b.best_score);
        assert_eq!(a.generations, b.generations);
        assert_eq!(a.score_history, b.score_history);
    }

    #[test]
    fn test_score_history_is_monotonic() {
        let mut rng = StdRng::seed_from_u64(11);
        let mat = WeightMatrix::random(10, 0.05, 0.4, &mut rng);
        let config = MaConfig::default().with_seed(42).with_stop_after(40);
        let result = MaRunner::run(&mat, &config).unwrap();

        assert_eq!(result.score_history.len(), result.generations);
        for w in result.score_history.windows(2) {
            assert!(w[1] >= w[0], "best score regressed: {} -> {}", w[0], w[1]);
        }
    }

    // ---- progress reporting ----

    #[test]
    fn test_progress_lines_are_emitted() {
        let mat = reversed_preference_matrix(4);
        let config = MaConfig::default().with_seed(42).with_stop_after(35);

        let mut sink = Vec::new();
        let result = MaRunner::run_with_progress(&mat, &config, &mut sink).unwrap();
        let out = String::from_utf8(sink).unwrap();

        assert!(out.ends_with('\n'), "final report must be newline-terminated");
        let lines: Vec<&str> = out.split('\r').filter(|s| !s.is_empty()).collect();
        assert!(lines.len() >= 2, "expected initial and final reports: {out:?}");
        assert!(lines[0].starts_with("     0 (  0): "));
        let last = lines.last().unwrap();
        assert_eq!(
            last.trim_end(),
            format!("{:6} ({:3}): {}", result.generations, config.stop_after, result.best_score)
        );
    }

    #[test]
    fn test_progress_write_errors_are_ignored() {
        struct FailingSink;
        impl Write for FailingSink {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("sink closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Err(io::Error::other("sink closed"))
            }
        }

        let mat = reversed_preference_matrix(3);
        let config = MaConfig::default().with_seed(42).with_stop_after(5);
        let result = MaRunner::run_with_progress(&mat, &config, &mut FailingSink).unwrap();
        assert_eq!(result.best_score, 3);
    }
}
