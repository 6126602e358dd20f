//! Board solving command
//!
//! Parses a board and returns every word found on it.

use crate::core::{Board, BoardError};
use crate::solver::{MIN_WORD_LEN, ResultSet, Solver};
use std::time::{Duration, Instant};
use tracing::info;

/// Configuration for solving a board
pub struct SolveConfig {
    pub letters: String,
    pub min_len: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(letters: String) -> Self {
        Self {
            letters,
            min_len: MIN_WORD_LEN,
        }
    }
}

/// Result of solving a board
pub struct SolveReport {
    pub board: Board,
    pub results: ResultSet,
    pub duration: Duration,
}

/// Solve the board described by `config`
///
/// # Errors
///
/// Returns `BoardError` if the letters do not describe a valid board. No search runs
/// in that case.
pub fn solve_board(config: &SolveConfig, solver: &Solver) -> Result<SolveReport, BoardError> {
    let board = Board::parse(&config.letters)?;

    let start = Instant::now();
    let mut results = solver.solve(&board);
    let duration = start.elapsed();

    if config.min_len > MIN_WORD_LEN {
        results = results.filter_min_len(config.min_len);
    }

    info!(
        board = %board,
        words = results.len(),
        elapsed_ms = duration.as_secs_f64() * 1000.0,
        "solve finished"
    );

    Ok(SolveReport {
        board,
        results,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coord;
    use crate::wordlists::Dictionary;

    fn dictionary() -> Dictionary {
        Dictionary::from_words(["cat", "dog", "dogs", "fish", "owl"]).unwrap()
    }

    #[test]
    fn solve_sample_board() {
        let dictionary = dictionary();
        let solver = Solver::new(&dictionary);
        let config = SolveConfig::new("cat dogs birds fish owl".to_string());

        let report = solve_board(&config, &solver).unwrap();

        assert_eq!(report.results.len(), 5);
        let cat = report.results.get("cat").unwrap();
        assert_eq!((cat.start(), cat.score()), (Coord::new(0, 0), 5));
        assert_eq!(report.board.row_letters(4), "owl");
    }

    #[test]
    fn solve_invalid_board_returns_error() {
        let dictionary = dictionary();
        let solver = Solver::new(&dictionary);
        let config = SolveConfig::new("cat".to_string());

        assert!(matches!(
            solve_board(&config, &solver),
            Err(BoardError::InvalidLength(3))
        ));
    }

    #[test]
    fn solve_respects_min_len() {
        let dictionary = dictionary();
        let solver = Solver::new(&dictionary);
        let mut config = SolveConfig::new("catdogsbirdsfishowl".to_string());
        config.min_len = 4;

        let report = solve_board(&config, &solver).unwrap();
        let texts: Vec<&str> = report.results.iter().map(|w| w.text()).collect();
        assert_eq!(texts, ["dogs", "fish"]);
    }
}
