//! Benchmark command
//!
//! Plays the solver against many secrets and collects round statistics.

use crate::core::{CODE_SPACE, Code};
use crate::session::{Judge, MAX_ROUNDS, simulate};
use crate::solver::{Solver, StrategyType};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Which secrets to benchmark against
pub struct BenchmarkConfig {
    /// Number of sampled secrets, ignored when `exhaustive` is set
    pub count: usize,
    pub seed: u64,
    /// Play every one of the 32768 codes
    pub exhaustive: bool,
    pub max_rounds: u32,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed,
            exhaustive: false,
            max_rounds: MAX_ROUNDS,
        }
    }

    #[must_use]
    pub const fn exhaustive() -> Self {
        Self {
            count: CODE_SPACE,
            seed: 0,
            exhaustive: true,
            max_rounds: MAX_ROUNDS,
        }
    }

    /// Secrets this configuration selects, in ascending code order
    ///
    /// Sampling is without replacement and reproducible for a given seed.
    #[must_use]
    pub fn secrets(&self) -> Vec<Code> {
        if self.exhaustive {
            return Code::all().collect();
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut picked: Vec<usize> =
            index::sample(&mut rng, CODE_SPACE, self.count.min(CODE_SPACE)).into_vec();
        picked.sort_unstable();
        picked.into_iter().map(Code::from_index).collect()
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub wins: usize,
    /// Rounds summed over won games
    pub total_rounds: u64,
    pub average_rounds: f64,
    pub min_rounds: u32,
    pub max_rounds: u32,
    /// Won games keyed by rounds needed
    pub distribution: BTreeMap<u32, usize>,
    /// Secrets that did not end in a win
    pub failures: Vec<(Code, String)>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Run one game per secret in parallel
pub fn run_benchmark(
    strategy: &StrategyType,
    secrets: &[Code],
    max_rounds: u32,
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message(strategy.name());

    let start = Instant::now();

    let games: Vec<(Code, Result<u32, String>)> = secrets
        .par_iter()
        .map(|&secret| {
            let mut judge = Judge::with_max_rounds(secret, max_rounds);
            let mut solver = Solver::new(strategy.clone());
            let result = match simulate(&mut judge, &mut solver, |_| {}) {
                Ok(report) if report.outcome.is_win() => Ok(report.rounds),
                Ok(report) => Err(format!("{} after {} rounds", report.outcome, report.rounds)),
                Err(e) => Err(e.to_string()),
            };
            pb.inc(1);
            (secret, result)
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut distribution: BTreeMap<u32, usize> = BTreeMap::new();
    let mut failures = Vec::new();
    let mut total_rounds = 0u64;

    for (secret, result) in games {
        match result {
            Ok(rounds) => {
                total_rounds += u64::from(rounds);
                *distribution.entry(rounds).or_insert(0) += 1;
            }
            Err(reason) => failures.push((secret, reason)),
        }
    }

    let total_games = secrets.len();
    let wins = total_games - failures.len();

    BenchmarkResult {
        total_games,
        wins,
        total_rounds,
        average_rounds: if wins > 0 {
            total_rounds as f64 / wins as f64
        } else {
            0.0
        },
        min_rounds: distribution.keys().next().copied().unwrap_or(0),
        max_rounds: distribution.keys().next_back().copied().unwrap_or(0),
        distribution,
        failures,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Code> {
        BenchmarkConfig::new(20, 7).secrets()
    }

    #[test]
    fn benchmark_runs() {
        let result = run_benchmark(&StrategyType::default(), &sample(), MAX_ROUNDS, false);

        assert_eq!(result.total_games, 20);
        assert_eq!(result.wins, 20);
        assert!(result.failures.is_empty());
        assert!(result.average_rounds >= 1.0);
        assert!(result.min_rounds >= 1);
        assert!(result.max_rounds <= MAX_ROUNDS);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let result = run_benchmark(&StrategyType::default(), &sample(), MAX_ROUNDS, false);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.wins);

        let weighted: u64 = result
            .distribution
            .iter()
            .map(|(&rounds, &count)| u64::from(rounds) * count as u64)
            .sum();
        assert_eq!(weighted, result.total_rounds);
    }

    #[test]
    fn benchmark_empty_secret_list() {
        let result = run_benchmark(&StrategyType::default(), &[], MAX_ROUNDS, false);

        assert_eq!(result.total_games, 0);
        assert_eq!(result.wins, 0);
        assert_eq!(result.min_rounds, 0);
        assert!(result.average_rounds.abs() < f64::EPSILON);
    }

    #[test]
    fn tight_round_limit_reports_failures() {
        let result = run_benchmark(&StrategyType::default(), &sample(), 1, false);

        assert_eq!(result.wins + result.failures.len(), result.total_games);
        assert!(!result.failures.is_empty());
        assert!(result.failures[0].1.contains("game lost"));
    }

    #[test]
    fn sampling_is_reproducible() {
        let a = BenchmarkConfig::new(50, 42).secrets();
        let b = BenchmarkConfig::new(50, 42).secrets();
        let c = BenchmarkConfig::new(50, 43).secrets();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 50);
        assert!(a.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn sample_count_is_capped() {
        let secrets = BenchmarkConfig::new(CODE_SPACE + 10, 1).secrets();
        assert_eq!(secrets.len(), CODE_SPACE);
    }

    #[test]
    fn exhaustive_covers_code_space() {
        let secrets = BenchmarkConfig::exhaustive().secrets();
        assert_eq!(secrets.len(), CODE_SPACE);
        assert_eq!(secrets[0], Code::from_index(0));
    }
}
