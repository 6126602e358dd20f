//! Main solver interface

use super::adjacency::AdjacencyGraph;
use super::enumerator::{Enumerator, WordCandidate, trace};
use super::results::ResultSet;
use crate::core::Board;
use crate::wordlists::Dictionary;
use tracing::debug;

/// Board solver
///
/// Owns the adjacency graph, built once and reused for every board, and borrows the
/// dictionary. A solver can only exist with a loaded dictionary.
pub struct Solver<'a> {
    graph: AdjacencyGraph,
    dictionary: &'a Dictionary,
    parallel: bool,
}

impl<'a> Solver<'a> {
    /// Create a sequential solver over the given dictionary
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self {
            graph: AdjacencyGraph::hexagonal(),
            dictionary,
            parallel: false,
        }
    }

    /// Search start tiles in parallel; results are identical either way
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Find all words on a board
    ///
    /// # Examples
    /// ```
    /// use hexword_solver::core::Board;
    /// use hexword_solver::solver::Solver;
    /// use hexword_solver::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["cat", "dog", "dogs", "fish", "owl"]).unwrap();
    /// let solver = Solver::new(&dictionary);
    ///
    /// let results = solver.solve(&Board::parse("catdogsbirdsfishowl").unwrap());
    /// assert_eq!(results.len(), 5);
    /// assert_eq!(results.get("fish").unwrap().score(), 10);
    /// ```
    #[must_use]
    pub fn solve(&self, board: &Board) -> ResultSet {
        let enumerator = Enumerator::new(board, &self.graph, self.dictionary);
        let candidates = if self.parallel {
            enumerator.enumerate_parallel()
        } else {
            enumerator.enumerate()
        };

        let results = ResultSet::assemble(candidates);
        debug!(board = %board, words = results.len(), parallel = self.parallel, "board solved");
        results
    }

    /// Find the path spelling `word`, whether or not it is in the dictionary
    #[must_use]
    pub fn trace(&self, board: &Board, word: &str) -> Option<WordCandidate> {
        trace(board, &self.graph, word)
    }

    #[must_use]
    pub const fn graph(&self) -> &AdjacencyGraph {
        &self.graph
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    #[must_use]
    pub const fn is_parallel(&self) -> bool {
        self.parallel
    }
}
