//! Exhaustive path enumeration
//!
//! Depth-first backtracking over simple paths from every start tile. A word is recorded
//! the first time its letters are spelled along any path, so later paths spelling the
//! same string are ignored.

use super::adjacency::AdjacencyGraph;
use crate::core::{Board, Coord, TILE_COUNT, Tile, has_vowel};
use crate::wordlists::Dictionary;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::ops::{Deref, DerefMut};
use tracing::{debug, trace};

/// Longest word the search will spell, in tiles
pub const MAX_WORD_LEN: usize = 9;

/// Shortest word the search will record
pub const MIN_WORD_LEN: usize = 2;

/// A word found on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCandidate {
    text: String,
    start: Coord,
    score: u32,
    path: Vec<Coord>,
}

impl WordCandidate {
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Coordinate of the first tile (0-indexed)
    #[inline]
    #[must_use]
    pub const fn start(&self) -> Coord {
        self.start
    }

    /// Sum of letter values along the path
    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Tiles used, in spelling order
    #[inline]
    #[must_use]
    pub fn path(&self) -> &[Coord] {
        &self.path
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Same word and score spelled along another path
    #[cfg(test)]
    pub(crate) fn with_path(mut self, path: Vec<Coord>) -> Self {
        self.start = path[0];
        self.path = path;
        self
    }
}

/// Partial path state shared by one depth-first walk
#[derive(Debug)]
struct Walk {
    path: Vec<Coord>,
    text: String,
    score: u32,
}

impl Walk {
    fn new(start: &Tile) -> Self {
        let mut path = Vec::with_capacity(TILE_COUNT);
        path.push(start.coord());
        Self {
            path,
            text: String::from(start.letter_char()),
            score: start.value(),
        }
    }

    fn current(&self) -> Coord {
        self.path[self.path.len() - 1]
    }

    fn visited(&self, coord: Coord) -> bool {
        self.path.contains(&coord)
    }

    /// Extend the walk by one tile; the tile is removed again when the step drops
    fn step(&mut self, tile: &Tile) -> Step<'_> {
        self.path.push(tile.coord());
        self.text.push(tile.letter_char());
        self.score += tile.value();
        Step {
            walk: self,
            value: tile.value(),
        }
    }

    fn to_candidate(&self) -> WordCandidate {
        WordCandidate {
            text: self.text.clone(),
            start: self.path[0],
            score: self.score,
            path: self.path.clone(),
        }
    }
}

/// One extension of a walk, undone on drop
struct Step<'w> {
    walk: &'w mut Walk,
    value: u32,
}

impl Deref for Step<'_> {
    type Target = Walk;

    fn deref(&self) -> &Walk {
        &*self.walk
    }
}

impl DerefMut for Step<'_> {
    fn deref_mut(&mut self) -> &mut Walk {
        &mut *self.walk
    }
}

impl Drop for Step<'_> {
    fn drop(&mut self) {
        self.walk.path.pop();
        self.walk.text.pop();
        self.walk.score -= self.value;
    }
}

/// Word search over a single board
///
/// Board, graph and dictionary are only read, so one enumerator can be shared across threads.
pub struct Enumerator<'a> {
    board: &'a Board,
    graph: &'a AdjacencyGraph,
    dictionary: &'a Dictionary,
}

impl<'a> Enumerator<'a> {
    #[must_use]
    pub const fn new(
        board: &'a Board,
        graph: &'a AdjacencyGraph,
        dictionary: &'a Dictionary,
    ) -> Self {
        Self {
            board,
            graph,
            dictionary,
        }
    }

    /// Find every word on the board, in discovery order
    ///
    /// Start tiles are taken in row-major order and each string is reported once,
    /// attributed to the first path that spelled it.
    ///
    /// # Examples
    /// ```
    /// use hexword_solver::core::{Board, Coord};
    /// use hexword_solver::solver::{AdjacencyGraph, Enumerator};
    /// use hexword_solver::wordlists::Dictionary;
    ///
    /// let board = Board::parse("catdogsbirdsfishowl").unwrap();
    /// let graph = AdjacencyGraph::hexagonal();
    /// let dictionary = Dictionary::from_words(["cat", "dogs"]).unwrap();
    ///
    /// let words = Enumerator::new(&board, &graph, &dictionary).enumerate();
    /// assert_eq!(words.len(), 2);
    /// assert_eq!(words[0].text(), "cat");
    /// assert_eq!(words[1].start(), Coord::new(1, 0));
    /// ```
    #[must_use]
    pub fn enumerate(&self) -> Vec<WordCandidate> {
        let mut found = FxHashSet::default();
        let mut words = Vec::new();

        for tile in self.board.tiles() {
            self.search_from(tile, &mut found, &mut words);
        }

        debug!(words = words.len(), "sequential enumeration complete");
        words
    }

    /// Same result as [`enumerate`](Self::enumerate), one task per start tile
    ///
    /// Each task keeps its own found-set; results are merged in row-major start order
    /// with the first occurrence of each string kept.
    #[must_use]
    pub fn enumerate_parallel(&self) -> Vec<WordCandidate> {
        let starts: Vec<&Tile> = self.board.tiles().collect();

        let per_start: Vec<Vec<WordCandidate>> = starts
            .par_iter()
            .map(|&tile| {
                let mut found = FxHashSet::default();
                let mut words = Vec::new();
                self.search_from(tile, &mut found, &mut words);
                words
            })
            .collect();

        let mut seen = FxHashSet::default();
        let words: Vec<WordCandidate> = per_start
            .into_iter()
            .flatten()
            .filter(|candidate| seen.insert(candidate.text.clone()))
            .collect();

        debug!(words = words.len(), "parallel enumeration complete");
        words
    }

    fn search_from(
        &self,
        start: &Tile,
        found: &mut FxHashSet<String>,
        words: &mut Vec<WordCandidate>,
    ) {
        let before = words.len();
        let mut walk = Walk::new(start);
        self.extend(&mut walk, found, words);
        trace!(start = %start.coord(), found = words.len() - before, "start tile searched");
    }

    fn extend(
        &self,
        walk: &mut Walk,
        found: &mut FxHashSet<String>,
        words: &mut Vec<WordCandidate>,
    ) {
        if walk.path.len() >= MIN_WORD_LEN
            && !found.contains(&walk.text)
            && has_vowel(&walk.text)
            && self.dictionary.contains(&walk.text)
        {
            found.insert(walk.text.clone());
            words.push(walk.to_candidate());
        }

        if walk.path.len() == MAX_WORD_LEN {
            return;
        }

        for &next in self.graph.neighbors(walk.current()) {
            if walk.visited(next) {
                continue;
            }
            let Some(tile) = self.board.tile(next) else {
                continue;
            };
            let mut step = walk.step(tile);
            self.extend(&mut step, found, words);
        }
    }
}

/// Find the first simple path that spells `word`, ignoring the dictionary
///
/// Paths are tried in the same order as the word search. Returns `None` if the
/// word cannot be spelled on the board.
///
/// # Examples
/// ```
/// use hexword_solver::core::{Board, Coord};
/// use hexword_solver::solver::{AdjacencyGraph, trace};
///
/// let board = Board::parse("catdogsbirdsfishowl").unwrap();
/// let graph = AdjacencyGraph::hexagonal();
///
/// let found = trace(&board, &graph, "dogs").unwrap();
/// assert_eq!(found.start(), Coord::new(1, 0));
/// assert_eq!(found.path().len(), 4);
/// assert!(trace(&board, &graph, "zebra").is_none());
/// ```
#[must_use]
pub fn trace(board: &Board, graph: &AdjacencyGraph, word: &str) -> Option<WordCandidate> {
    let target = word.trim().to_ascii_lowercase();
    let target = target.as_bytes();
    let first = *target.first()?;

    if target.len() > TILE_COUNT {
        return None;
    }

    board
        .tiles()
        .filter(|tile| tile.letter() == first)
        .find_map(|tile| {
            let mut walk = Walk::new(tile);
            trace_from(board, graph, &mut walk, target)
        })
}

fn trace_from(
    board: &Board,
    graph: &AdjacencyGraph,
    walk: &mut Walk,
    target: &[u8],
) -> Option<WordCandidate> {
    if walk.path.len() == target.len() {
        return Some(walk.to_candidate());
    }

    let wanted = target[walk.path.len()];
    for &next in graph.neighbors(walk.current()) {
        if walk.visited(next) {
            continue;
        }
        let Some(tile) = board.tile(next).filter(|tile| tile.letter() == wanted) else {
            continue;
        };
        let mut step = walk.step(tile);
        if let Some(found) = trace_from(board, graph, &mut step, target) {
            return Some(found);
        }
    }

    None
}
