//! Word tracing command
//!
//! Shows where a given word can be spelled on a board.

use crate::core::{Board, BoardError};
use crate::solver::{Solver, WordCandidate};

/// Result of tracing a word
pub struct TraceReport {
    pub board: Board,
    pub word: String,
    pub found: Option<WordCandidate>,
    pub in_dictionary: bool,
}

/// Look for `word` on the board described by `letters`
///
/// # Errors
///
/// Returns `BoardError` if the letters do not describe a valid board.
pub fn trace_word(letters: &str, word: &str, solver: &Solver) -> Result<TraceReport, BoardError> {
    let board = Board::parse(letters)?;
    let found = solver.trace(&board, word);
    let in_dictionary = solver.dictionary().contains(word.trim());

    Ok(TraceReport {
        board,
        word: word.trim().to_lowercase(),
        found,
        in_dictionary,
    })
}
