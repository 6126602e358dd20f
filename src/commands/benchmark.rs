//! Benchmark command
//!
//! Solves a batch of random boards and reports throughput and word statistics.

use crate::core::{Board, BoardError, TILE_COUNT};
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Letter bag with English tile frequencies; boards are drawn from it with replacement
const LETTER_BAG: &[u8] =
    b"aaaaaaaaabbccddddeeeeeeeeeeeeffggghhiiiiiiiiijkllllmmnnnnnnooooooooppqrrrrrrssssttttttuuuuvvwwxyyz";

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub boards: usize,
    pub seed: u64,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(boards: usize, seed: u64) -> Self {
        Self {
            boards,
            seed,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub boards: usize,
    pub total_words: usize,
    pub average_words: f64,
    pub min_words: usize,
    pub max_words: usize,
    /// (board letters, word, score) of the highest scoring word seen
    pub best_word: Option<(String, String, u32)>,
    pub length_distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub boards_per_second: f64,
}

/// Draw 19 random letters from the letter bag
pub fn random_letters<R: Rng>(rng: &mut R) -> String {
    (0..TILE_COUNT)
        .map(|_| LETTER_BAG[rng.random_range(0..LETTER_BAG.len())] as char)
        .collect()
}

/// Solve `config.boards` random boards
///
/// The same seed always produces the same boards.
///
/// # Errors
///
/// Returns `BoardError` if a generated board fails to parse, which the letter bag rules out.
pub fn run_benchmark(
    solver: &Solver,
    config: &BenchmarkConfig,
) -> Result<BenchmarkResult, BoardError> {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let pb = if config.show_progress {
        ProgressBar::new(config.boards as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut total_words = 0;
    let mut min_words = usize::MAX;
    let mut max_words = 0;
    let mut best_word: Option<(String, String, u32)> = None;
    let mut length_distribution: HashMap<usize, usize> = HashMap::new();

    for idx in 0..config.boards {
        let letters = random_letters(&mut rng);
        let board = Board::parse(&letters)?;
        let results = solver.solve(&board);

        total_words += results.len();
        min_words = min_words.min(results.len());
        max_words = max_words.max(results.len());

        for word in &results {
            *length_distribution.entry(word.len()).or_insert(0) += 1;
        }

        if let Some(best) = results.best()
            && best_word
                .as_ref()
                .is_none_or(|(_, _, score)| best.score() > *score)
        {
            best_word = Some((letters, best.text().to_string(), best.score()));
        }

        if idx % 10 == 0 {
            pb.set_message(format!("Avg: {:.1} words", total_words as f64 / (idx + 1) as f64));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let boards = config.boards;
    if boards == 0 {
        min_words = 0;
    }

    info!(boards, total_words, seconds = duration.as_secs_f64(), "benchmark finished");

    Ok(BenchmarkResult {
        boards,
        total_words,
        average_words: if boards > 0 {
            total_words as f64 / boards as f64
        } else {
            0.0
        },
        min_words,
        max_words,
        best_word,
        length_distribution,
        duration,
        boards_per_second: boards as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::embedded_dictionary;

    fn quiet(boards: usize, seed: u64) -> BenchmarkConfig {
        BenchmarkConfig {
            show_progress: false,
            ..BenchmarkConfig::new(boards, seed)
        }
    }

    #[test]
    fn random_letters_make_valid_boards() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let letters = random_letters(&mut rng);
            assert_eq!(letters.len(), TILE_COUNT);
            assert!(Board::parse(&letters).is_ok());
        }
    }

    #[test]
    fn same_seed_same_boards() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(random_letters(&mut a), random_letters(&mut b));
    }

    #[test]
    fn benchmark_runs() {
        let dictionary = embedded_dictionary().unwrap();
        let solver = Solver::new(&dictionary);
        let result = run_benchmark(&solver, &quiet(5, 1)).unwrap();

        assert_eq!(result.boards, 5);
        assert!(result.min_words <= result.max_words);
        assert!(result.average_words >= result.min_words as f64);
        assert!(result.average_words <= result.max_words as f64);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let dictionary = embedded_dictionary().unwrap();
        let solver = Solver::new(&dictionary);
        let result = run_benchmark(&solver, &quiet(5, 3)).unwrap();

        let distribution_sum: usize = result.length_distribution.values().sum();
        assert_eq!(distribution_sum, result.total_words);
        for &length in result.length_distribution.keys() {
            assert!((2..=9).contains(&length));
        }
    }

    #[test]
    fn benchmark_is_reproducible() {
        let dictionary = embedded_dictionary().unwrap();
        let solver = Solver::new(&dictionary);

        let first = run_benchmark(&solver, &quiet(4, 9)).unwrap();
        let second = run_benchmark(&solver, &quiet(4, 9)).unwrap();
        assert_eq!(first.total_words, second.total_words);
        assert_eq!(first.best_word, second.best_word);
    }

    #[test]
    fn benchmark_no_boards() {
        let dictionary = embedded_dictionary().unwrap();
        let solver = Solver::new(&dictionary);
        let result = run_benchmark(&solver, &quiet(0, 0)).unwrap();

        assert_eq!(result.boards, 0);
        assert_eq!(result.total_words, 0);
        assert_eq!(result.min_words, 0);
        assert!(result.best_word.is_none());
    }
}
