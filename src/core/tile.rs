//! Board tiles and letter scoring
//!
//! A Tile is one lettered position on the board, identified by its `(row, col)` coordinate.

use std::fmt;

/// Tile identity on the board (0-indexed row and column)
///
/// Displays as `r{row}c{col}`; user-facing output converts with [`Coord::one_indexed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The same coordinate counted from 1, for display
    #[inline]
    #[must_use]
    pub const fn one_indexed(self) -> (usize, usize) {
        (self.row + 1, self.col + 1)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.col)
    }
}

/// A single lettered tile
///
/// Immutable once the board is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    letter: u8,
    coord: Coord,
    value: u32,
}

impl Tile {
    /// Create a tile for a lowercase ASCII letter at `coord`
    #[must_use]
    pub const fn new(letter: u8, coord: Coord) -> Self {
        Self {
            letter,
            coord,
            value: letter_value(letter),
        }
    }

    /// The tile letter as a lowercase ASCII byte
    #[inline]
    #[must_use]
    pub const fn letter(&self) -> u8 {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn letter_char(&self) -> char {
        self.letter as char
    }

    #[inline]
    #[must_use]
    pub const fn coord(&self) -> Coord {
        self.coord
    }

    /// Point value of the tile letter
    #[inline]
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }
}

/// Point value of a letter
///
/// Case-insensitive. Bytes outside `a..=z` score zero; board parsing never lets one through.
///
/// # Examples
/// ```
/// use hexword_solver::core::letter_value;
///
/// assert_eq!(letter_value(b'a'), 1);
/// assert_eq!(letter_value(b'K'), 5);
/// assert_eq!(letter_value(b'z'), 10);
/// ```
#[must_use]
pub const fn letter_value(letter: u8) -> u32 {
    match letter.to_ascii_lowercase() {
        b'a' | b'e' | b'i' | b'o' | b'u' | b'l' | b'n' | b's' | b't' | b'r' => 1,
        b'd' | b'g' => 2,
        b'b' | b'c' | b'm' | b'p' => 3,
        b'f' | b'h' | b'v' | b'w' | b'y' => 4,
        b'k' => 5,
        b'j' | b'x' => 8,
        b'q' | b'z' => 10,
        _ => 0,
    }
}

/// Sum of letter values over a whole word
#[must_use]
pub fn score_word(text: &str) -> u32 {
    text.bytes().map(letter_value).sum()
}

/// Whether the text contains at least one of a, e, i, o, u
#[inline]
#[must_use]
pub fn has_vowel(text: &str) -> bool {
    text.bytes()
        .any(|b| matches!(b.to_ascii_lowercase(), b'a' | b'e' | b'i' | b'o' | b'u'))
}
