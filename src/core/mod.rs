//! Core domain types for the hexagonal board
//!
//! Tiles, coordinates, letter scoring and board parsing. No I/O happens here.

mod board;
mod tile;

pub use board::{Board, BoardError, MIDDLE_ROW, ROW_COUNT, ROW_LENGTHS, TILE_COUNT};
pub use tile::{Coord, Tile, has_vowel, letter_value, score_word};
