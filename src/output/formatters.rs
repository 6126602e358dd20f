//! Formatting utilities for terminal output
//!
//! Pure string layout; colouring is applied by the display functions.

use crate::core::{Board, Coord, MIDDLE_ROW, Tile};
use crate::solver::{MAX_WORD_LEN, ResultSet, WordCandidate};
use rustc_hash::FxHashSet;

/// Width of the word part of a result cell
pub const WORD_WIDTH: usize = MAX_WORD_LEN + 1;

/// Width of the score and coordinate part of a result cell
pub const INFO_WIDTH: usize = 16;

/// Full width of one result column
pub const CELL_WIDTH: usize = WORD_WIDTH + INFO_WIDTH;

/// Words longer than this are highlighted
pub const HIGHLIGHT_MIN_LEN: usize = 5;

/// One cell of the per-row result table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub word: String,
    pub info: String,
    pub highlight: bool,
}

impl Cell {
    /// Word padded to `WORD_WIDTH`
    #[must_use]
    pub fn padded_word(&self) -> String {
        format!("{:<WORD_WIDTH$}", self.word)
    }

    /// Info padded to `INFO_WIDTH`
    #[must_use]
    pub fn padded_info(&self) -> String {
        format!("{:<INFO_WIDTH$}", self.info)
    }
}

/// Hex grid as text lines, indented so the rows interlock
///
/// # Examples
/// ```
/// use hexword_solver::core::Board;
/// use hexword_solver::output::formatters::grid_lines;
///
/// let board = Board::parse("catdogsbirdsfishowl").unwrap();
/// assert_eq!(grid_lines(&board)[0], "  C A T");
/// assert_eq!(grid_lines(&board)[2], "B I R D S");
/// ```
#[must_use]
pub fn grid_lines(board: &Board) -> Vec<String> {
    board
        .rows()
        .iter()
        .enumerate()
        .map(|(row, tiles)| {
            let letters: Vec<String> = tiles
                .iter()
                .map(|tile| tile.letter_char().to_ascii_uppercase().to_string())
                .collect();
            format!("{}{}", " ".repeat(row.abs_diff(MIDDLE_ROW)), letters.join(" "))
        })
        .collect()
}

/// Hex grid lines with the tiles of `path` marked by brackets
#[must_use]
pub fn grid_lines_with_path(board: &Board, path: &[Coord]) -> Vec<String> {
    let marked = |tile: &Tile| {
        let letter = tile.letter_char().to_ascii_uppercase();
        if path.contains(&tile.coord()) {
            format!("[{letter}]")
        } else {
            format!(" {letter} ")
        }
    };

    board
        .rows()
        .iter()
        .enumerate()
        .map(|(row, tiles)| {
            let cells: String = tiles.iter().map(marked).collect();
            format!("{}{}", "  ".repeat(row.abs_diff(MIDDLE_ROW)), cells)
                .trim_end()
                .to_string()
        })
        .collect()
}

/// `"(r, c)"` counted from 1
#[must_use]
pub fn display_coord(coord: Coord) -> String {
    let (row, col) = coord.one_indexed();
    format!("({row}, {col})")
}

/// Path as 1-indexed coordinates joined by arrows
#[must_use]
pub fn format_path(path: &[Coord]) -> String {
    path.iter()
        .map(|&coord| display_coord(coord))
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Lay results out as one column per start row
///
/// Line `k` holds the `k`-th word of each row that has words. The start coordinate is
/// shown only the first time it appears, scanning line by line, left to right.
#[must_use]
pub fn layout_columns(results: &ResultSet) -> Vec<Vec<Option<Cell>>> {
    let columns: Vec<Vec<&WordCandidate>> = results
        .by_row()
        .into_iter()
        .filter(|group| !group.is_empty())
        .collect();
    let height = columns.iter().map(Vec::len).max().unwrap_or(0);

    let mut seen: FxHashSet<Coord> = FxHashSet::default();
    let mut lines = Vec::with_capacity(height);

    for line in 0..height {
        let cells = columns
            .iter()
            .map(|column| {
                column.get(line).map(|word| {
                    let mut info = format!("{} pts ", word.score());
                    if seen.insert(word.start()) {
                        info.push_str(&display_coord(word.start()));
                    }
                    Cell {
                        word: word.text().to_uppercase(),
                        info,
                        highlight: word.len() >= HIGHLIGHT_MIN_LEN,
                    }
                })
            })
            .collect();
        lines.push(cells);
    }

    lines
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Solver;
    use crate::wordlists::Dictionary;

    fn sample_results() -> (Board, ResultSet) {
        let board = Board::parse("catdogsbirdsfishowl").unwrap();
        let dictionary =
            Dictionary::from_words(["cat", "dog", "dogs", "fish", "owl", "birds"]).unwrap();
        let results = Solver::new(&dictionary).solve(&board);
        (board, results)
    }

    #[test]
    fn grid_is_indented_symmetrically() {
        let board = Board::parse("catdogsbirdsfishowl").unwrap();
        assert_eq!(
            grid_lines(&board),
            ["  C A T", " D O G S", "B I R D S", " F I S H", "  O W L"]
        );
    }

    #[test]
    fn grid_marks_path() {
        let board = Board::parse("catdogsbirdsfishowl").unwrap();
        let path = [Coord::new(0, 0), Coord::new(0, 1)];
        let lines = grid_lines_with_path(&board, &path);
        assert_eq!(lines[0], "    [C][A] T");
        assert_eq!(lines[2], " B  I  R  D  S");
    }

    #[test]
    fn coords_display_one_indexed() {
        assert_eq!(display_coord(Coord::new(0, 0)), "(1, 1)");
        assert_eq!(
            format_path(&[Coord::new(1, 0), Coord::new(1, 1)]),
            "(2, 1) → (2, 2)"
        );
    }

    #[test]
    fn columns_follow_rows() {
        let (_, results) = sample_results();
        let lines = layout_columns(&results);

        // Rows 0..=4 all have words; row 1 has two
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), 5);

        let first: Vec<&str> = lines[0]
            .iter()
            .map(|cell| cell.as_ref().map_or("", |c| c.word.as_str()))
            .collect();
        assert_eq!(first, ["CAT", "DOG", "BIRDS", "FISH", "OWL"]);

        assert_eq!(lines[1][1].as_ref().unwrap().word, "DOGS");
        assert!(lines[1][0].is_none());
    }

    #[test]
    fn coordinates_shown_once() {
        let (_, results) = sample_results();
        let lines = layout_columns(&results);

        let dog = lines[0][1].as_ref().unwrap();
        let dogs = lines[1][1].as_ref().unwrap();
        assert_eq!(dog.info, "5 pts (2, 1)");
        assert_eq!(dogs.info, "6 pts ");
    }

    #[test]
    fn long_words_are_highlighted() {
        let (_, results) = sample_results();
        let lines = layout_columns(&results);

        assert!(lines[0][2].as_ref().unwrap().highlight);
        assert!(!lines[0][0].as_ref().unwrap().highlight);
    }

    #[test]
    fn cells_pad_to_width() {
        let cell = Cell {
            word: "CAT".to_string(),
            info: "5 pts (1, 1)".to_string(),
            highlight: false,
        };
        assert_eq!(cell.padded_word().len(), WORD_WIDTH);
        assert_eq!(cell.padded_info().len(), INFO_WIDTH);
    }

    #[test]
    fn empty_results_have_no_lines() {
        assert!(layout_columns(&ResultSet::default()).is_empty());
    }

    #[test]
    fn progress_bar_bounds() {
        assert_eq!(create_progress_bar(0.0, 10.0, 4), "░░░░");
        assert_eq!(create_progress_bar(10.0, 10.0, 4), "████");
        assert_eq!(create_progress_bar(50.0, 10.0, 4), "████");
        assert_eq!(create_progress_bar(5.0, 10.0, 4), "██░░");
    }
}
