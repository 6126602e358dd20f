//! Tile adjacency for the hexagonal board
//!
//! Rows are stored left-aligned, so hexagonal neighbours collapse onto offset columns:
//! rows above the middle row connect to `(i+1, j)` and `(i+1, j+1)`, rows below
//! connect to `(i-1, j)` and `(i-1, j+1)`, and every row links horizontally.

use crate::core::{Board, Coord, MIDDLE_ROW, ROW_COUNT, ROW_LENGTHS};
use rustc_hash::FxHashMap;

/// Neighbour relation between tiles
///
/// Depends only on board shape. Neighbour order is the construction order, which fixes
/// the traversal order of the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph {
    neighbors: FxHashMap<Coord, Vec<Coord>>,
}

impl AdjacencyGraph {
    /// Build the adjacency relation for the standard 3-4-5-4-3 board
    ///
    /// # Examples
    /// ```
    /// use hexword_solver::core::Coord;
    /// use hexword_solver::solver::AdjacencyGraph;
    ///
    /// let graph = AdjacencyGraph::hexagonal();
    /// assert_eq!(graph.degree(Coord::new(0, 0)), 3);
    /// assert_eq!(graph.degree(Coord::new(2, 2)), 6);
    /// assert!(graph.are_adjacent(Coord::new(0, 0), Coord::new(1, 1)));
    /// ```
    #[must_use]
    pub fn hexagonal() -> Self {
        Self::from_row_lengths(&ROW_LENGTHS)
    }

    /// Build the adjacency relation for a parsed board
    ///
    /// Letters play no part; only the row shape is read.
    #[must_use]
    pub fn for_board(board: &Board) -> Self {
        let mut lengths = [0; ROW_COUNT];
        for (len, row) in lengths.iter_mut().zip(board.rows()) {
            *len = row.len();
        }
        Self::from_row_lengths(&lengths)
    }

    fn from_row_lengths(lengths: &[usize; ROW_COUNT]) -> Self {
        let mut graph = Self {
            neighbors: FxHashMap::default(),
        };

        for (row, &len) in lengths.iter().enumerate() {
            for col in 0..len {
                graph.neighbors.insert(Coord::new(row, col), Vec::with_capacity(6));
            }
        }

        // Horizontal: left-to-right pass, then right-to-left pass
        for (row, &len) in lengths.iter().enumerate() {
            for col in 0..len.saturating_sub(1) {
                graph.push(Coord::new(row, col), Coord::new(row, col + 1));
            }
            for col in (1..len).rev() {
                graph.push(Coord::new(row, col), Coord::new(row, col - 1));
            }
        }

        // Expanding rows: top towards the middle
        for row in 0..MIDDLE_ROW {
            for col in 0..lengths[row] {
                graph.link_pair(Coord::new(row, col), row + 1);
            }
        }

        // Contracting rows: bottom towards the middle
        for row in (MIDDLE_ROW + 1..ROW_COUNT).rev() {
            for col in 0..lengths[row] {
                graph.link_pair(Coord::new(row, col), row - 1);
            }
        }

        graph
    }

    /// Connect `from` to `(target_row, col)` and `(target_row, col + 1)` in both directions
    fn link_pair(&mut self, from: Coord, target_row: usize) {
        let straight = Coord::new(target_row, from.col);
        let diagonal = Coord::new(target_row, from.col + 1);

        self.push(from, straight);
        self.push(from, diagonal);
        self.push(straight, from);
        self.push(diagonal, from);
    }

    fn push(&mut self, from: Coord, to: Coord) {
        if let Some(list) = self.neighbors.get_mut(&from)
            && !list.contains(&to)
        {
            list.push(to);
        }
    }

    /// Neighbours of a tile in traversal order
    ///
    /// Returns an empty slice for coordinates off the board.
    #[inline]
    pub fn neighbors(&self, coord: Coord) -> &[Coord] {
        self.neighbors.get(&coord).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn are_adjacent(&self, a: Coord, b: Coord) -> bool {
        self.neighbors(a).contains(&b)
    }

    #[must_use]
    pub fn degree(&self, coord: Coord) -> usize {
        self.neighbors(coord).len()
    }

    /// Number of tiles in the graph
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Number of undirected edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.neighbors.values().map(Vec::len).sum::<usize>() / 2
    }
}

impl Default for AdjacencyGraph {
    fn default() -> Self {
        Self::hexagonal()
    }
}
