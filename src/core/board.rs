//! Hexagonal letter board
//!
//! The board is 19 tiles laid out in five rows of 3, 4, 5, 4 and 3 letters.
//! Rows are stored left-aligned, so the geometry lives in the adjacency graph.

use super::tile::{Coord, Tile};
use std::fmt;

/// Number of letters on a board
pub const TILE_COUNT: usize = 19;

/// Row lengths from top to bottom
pub const ROW_LENGTHS: [usize; 5] = [3, 4, 5, 4, 3];

/// Number of rows
pub const ROW_COUNT: usize = ROW_LENGTHS.len();

/// Index of the widest (middle) row
pub const MIDDLE_ROW: usize = 2;

/// Error type for invalid board input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    InvalidLength(usize),
    InvalidCharacter { position: usize, character: char },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Board must be exactly {TILE_COUNT} letters, got {len}")
            }
            Self::InvalidCharacter {
                position,
                character,
            } => write!(
                f,
                "Board contains '{character}' at position {}; only letters a-z are allowed",
                position + 1
            ),
        }
    }
}

impl std::error::Error for BoardError {}

/// A parsed 19-tile board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: Vec<Vec<Tile>>,
}

impl Board {
    /// Parse a board from its letters, read left to right, top to bottom
    ///
    /// Whitespace is ignored and letters are case-folded.
    ///
    /// # Errors
    /// Returns `BoardError` if:
    /// - The input does not hold exactly 19 non-whitespace characters
    /// - Any character is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use hexword_solver::core::Board;
    ///
    /// let board = Board::parse("cat dogs birds fish owl").unwrap();
    /// assert_eq!(board.row_letters(2), "birds");
    ///
    /// assert!(Board::parse("cat").is_err());
    /// assert!(Board::parse("catdogsbirdsfish0wl").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, BoardError> {
        let letters: Vec<char> = input.chars().filter(|c| !c.is_whitespace()).collect();

        if letters.len() != TILE_COUNT {
            return Err(BoardError::InvalidLength(letters.len()));
        }

        if let Some((position, &character)) = letters
            .iter()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_alphabetic())
        {
            return Err(BoardError::InvalidCharacter {
                position,
                character,
            });
        }

        // Validated above: every char is a single ASCII byte
        let bytes: Vec<u8> = letters
            .iter()
            .map(|c| c.to_ascii_lowercase() as u8)
            .collect();

        let mut rows = Vec::with_capacity(ROW_COUNT);
        let mut offset = 0;
        for (row, &len) in ROW_LENGTHS.iter().enumerate() {
            let tiles = bytes[offset..offset + len]
                .iter()
                .enumerate()
                .map(|(col, &letter)| Tile::new(letter, Coord::new(row, col)))
                .collect();
            rows.push(tiles);
            offset += len;
        }

        Ok(Self { rows })
    }

    /// All rows, top to bottom
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.rows
    }

    /// Tiles of a single row
    ///
    /// # Panics
    /// Panics if `row >= 5`
    #[inline]
    #[must_use]
    pub fn row(&self, row: usize) -> &[Tile] {
        &self.rows[row]
    }

    /// Look up the tile at a coordinate
    #[must_use]
    pub fn tile(&self, coord: Coord) -> Option<&Tile> {
        self.rows.get(coord.row)?.get(coord.col)
    }

    /// Iterate over all tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.rows.iter().flatten()
    }

    /// Letters of one row as a string
    ///
    /// # Panics
    /// Panics if `row >= 5`
    #[must_use]
    pub fn row_letters(&self, row: usize) -> String {
        self.rows[row].iter().map(Tile::letter_char).collect()
    }

    /// All 19 letters in reading order
    #[must_use]
    pub fn letters(&self) -> String {
        self.tiles().map(Tile::letter_char).collect()
    }

    /// Spell out the letters along a path of coordinates
    ///
    /// Returns `None` if any coordinate is off the board.
    #[must_use]
    pub fn spell(&self, path: &[Coord]) -> Option<String> {
        path.iter()
            .map(|&coord| self.tile(coord).map(Tile::letter_char))
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<String> = (0..ROW_COUNT).map(|row| self.row_letters(row)).collect();
        write!(f, "{}", rows.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "catdogsbirdsfishowl";

    #[test]
    fn parse_splits_rows() {
        let board = Board::parse(SAMPLE).unwrap();
        assert_eq!(board.row_letters(0), "cat");
        assert_eq!(board.row_letters(1), "dogs");
        assert_eq!(board.row_letters(2), "birds");
        assert_eq!(board.row_letters(3), "fish");
        assert_eq!(board.row_letters(4), "owl");
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn row_letters_past_last_row_panics() {
        let board = Board::parse("catdogsbirdsfishowl").unwrap();
        let _ = board.row_letters(ROW_COUNT);
    }

    #[test]
    fn parse_row_lengths() {
        let board = Board::parse(SAMPLE).unwrap();
        let lengths: Vec<usize> = board.rows().iter().map(Vec::len).collect();
        assert_eq!(lengths, ROW_LENGTHS);
        assert_eq!(board.tiles().count(), TILE_COUNT);
    }

    #[test]
    fn parse_assigns_coordinates_and_values() {
        let board = Board::parse(SAMPLE).unwrap();
        let tile = board.tile(Coord::new(3, 3)).unwrap();
        assert_eq!(tile.letter_char(), 'h');
        assert_eq!(tile.value(), 4);

        for (row, tiles) in board.rows().iter().enumerate() {
            for (col, tile) in tiles.iter().enumerate() {
                assert_eq!(tile.coord(), Coord::new(row, col));
            }
        }
    }

    #[test]
    fn coordinates_are_unique() {
        let board = Board::parse(SAMPLE).unwrap();
        let coords: std::collections::HashSet<Coord> = board.tiles().map(Tile::coord).collect();
        assert_eq!(coords.len(), TILE_COUNT);
    }

    #[test]
    fn parse_ignores_whitespace_and_case() {
        let board = Board::parse("  CAT dogs\tBiRdS\nfish owl ").unwrap();
        assert_eq!(board.letters(), SAMPLE);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!(Board::parse("cat"), Err(BoardError::InvalidLength(3)));
        assert_eq!(Board::parse(""), Err(BoardError::InvalidLength(0)));
        assert_eq!(
            Board::parse("catdogsbirdsfishowls"),
            Err(BoardError::InvalidLength(20))
        );
    }

    #[test]
    fn parse_rejects_non_letters() {
        assert_eq!(
            Board::parse("catdogsbirdsfish0wl"),
            Err(BoardError::InvalidCharacter {
                position: 16,
                character: '0'
            })
        );
        assert!(Board::parse("catdogsbirdsfishow!").is_err());
        assert!(Board::parse("catdogsbirdsfishowé").is_err());
    }

    #[test]
    fn tile_lookup_off_board() {
        let board = Board::parse(SAMPLE).unwrap();
        assert!(board.tile(Coord::new(0, 3)).is_none());
        assert!(board.tile(Coord::new(5, 0)).is_none());
    }

    #[test]
    fn spell_path() {
        let board = Board::parse(SAMPLE).unwrap();
        let path = [Coord::new(1, 0), Coord::new(1, 1), Coord::new(1, 2)];
        assert_eq!(board.spell(&path).as_deref(), Some("dog"));
        assert_eq!(board.spell(&[Coord::new(9, 9)]), None);
    }

    #[test]
    fn display_shows_rows() {
        let board = Board::parse(SAMPLE).unwrap();
        assert_eq!(board.to_string(), "cat dogs birds fish owl");
    }

    #[test]
    fn error_display() {
        assert_eq!(
            BoardError::InvalidLength(3).to_string(),
            "Board must be exactly 19 letters, got 3"
        );
    }
}
