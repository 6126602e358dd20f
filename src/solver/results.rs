//! Result assembly
//!
//! Turns the raw candidate list into the final, deduplicated result set ordered by start row.

use super::enumerator::WordCandidate;
use crate::core::ROW_COUNT;
use rustc_hash::FxHashSet;

/// Deduplicated words ordered by start row
///
/// Within a row, words keep the order in which the search discovered them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultSet {
    words: Vec<WordCandidate>,
}

impl ResultSet {
    /// Assemble a result set from candidates in discovery order
    ///
    /// Keeps the first candidate for each string, then stable-sorts by start row.
    ///
    /// # Examples
    /// ```
    /// use hexword_solver::core::Board;
    /// use hexword_solver::solver::{AdjacencyGraph, Enumerator, ResultSet};
    /// use hexword_solver::wordlists::Dictionary;
    ///
    /// let board = Board::parse("catdogsbirdsfishowl").unwrap();
    /// let graph = AdjacencyGraph::hexagonal();
    /// let dictionary = Dictionary::from_words(["owl", "cat"]).unwrap();
    ///
    /// let results = ResultSet::assemble(Enumerator::new(&board, &graph, &dictionary).enumerate());
    /// let texts: Vec<&str> = results.iter().map(|w| w.text()).collect();
    /// assert_eq!(texts, ["cat", "owl"]);
    /// ```
    #[must_use]
    pub fn assemble(candidates: Vec<WordCandidate>) -> Self {
        let mut seen = FxHashSet::default();
        let mut words: Vec<WordCandidate> = candidates
            .into_iter()
            .filter(|candidate| seen.insert(candidate.text().to_string()))
            .collect();

        words.sort_by_key(|candidate| candidate.start().row);

        Self { words }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordCandidate> {
        self.words.iter()
    }

    #[must_use]
    pub fn words(&self) -> &[WordCandidate] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words grouped by start row, one group per board row
    #[must_use]
    pub fn by_row(&self) -> [Vec<&WordCandidate>; ROW_COUNT] {
        let mut rows: [Vec<&WordCandidate>; ROW_COUNT] = Default::default();
        for word in &self.words {
            if let Some(group) = rows.get_mut(word.start().row) {
                group.push(word);
            }
        }
        rows
    }

    /// Look up a word by its text
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&WordCandidate> {
        self.words.iter().find(|w| w.text().eq_ignore_ascii_case(text))
    }

    /// Sum of all word scores
    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.words.iter().map(WordCandidate::score).sum()
    }

    /// Highest scoring word; the earliest discovered wins ties
    #[must_use]
    pub fn best(&self) -> Option<&WordCandidate> {
        self.words
            .iter()
            .rev()
            .max_by_key(|w| (w.score(), w.len()))
    }

    /// Longest word; the earliest discovered wins ties
    #[must_use]
    pub fn longest(&self) -> Option<&WordCandidate> {
        self.words.iter().rev().max_by_key(|w| w.len())
    }

    /// Keep only words with at least `min_len` letters
    #[must_use]
    pub fn filter_min_len(self, min_len: usize) -> Self {
        Self {
            words: self
                .words
                .into_iter()
                .filter(|w| w.len() >= min_len)
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a WordCandidate;
    type IntoIter = std::slice::Iter<'a, WordCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Coord};
    use crate::solver::{AdjacencyGraph, Enumerator, trace};

    fn candidate(board: &Board, text: &str) -> WordCandidate {
        trace(board, &AdjacencyGraph::hexagonal(), text).unwrap()
    }

    fn sample() -> Board {
        Board::parse("catdogsbirdsfishowl").unwrap()
    }

    #[test]
    fn assemble_orders_by_start_row() {
        let board = sample();
        let input = vec![
            candidate(&board, "owl"),
            candidate(&board, "fish"),
            candidate(&board, "dog"),
            candidate(&board, "cat"),
            candidate(&board, "dogs"),
        ];

        let results = ResultSet::assemble(input);
        let texts: Vec<&str> = results.iter().map(WordCandidate::text).collect();
        // Stable: "dog" stays ahead of "dogs"
        assert_eq!(texts, ["cat", "dog", "dogs", "fish", "owl"]);
    }

    #[test]
    fn assemble_removes_duplicate_texts() {
        let board = sample();
        let first = candidate(&board, "cat");
        let input = vec![first.clone(), candidate(&board, "owl"), first];

        let results = ResultSet::assemble(input);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn assemble_keeps_first_of_duplicates() {
        let board = sample();
        let late = candidate(&board, "ir");
        let early_path = late
            .clone()
            .with_path(vec![Coord::new(3, 1), Coord::new(2, 2)]);

        let results = ResultSet::assemble(vec![early_path, late]);
        assert_eq!(results.len(), 1);
        assert_eq!(results.words()[0].start(), Coord::new(3, 1));
        assert_eq!(
            results.words()[0].path(),
            [Coord::new(3, 1), Coord::new(2, 2)]
        );
    }

    #[test]
    fn assemble_empty() {
        let results = ResultSet::assemble(Vec::new());
        assert!(results.is_empty());
        assert!(results.best().is_none());
        assert_eq!(results.total_score(), 0);
    }

    #[test]
    fn by_row_groups() {
        let board = sample();
        let graph = AdjacencyGraph::hexagonal();
        let dictionary =
            crate::wordlists::Dictionary::from_words(["cat", "dog", "dogs", "fish", "owl"])
                .unwrap();
        let results = ResultSet::assemble(Enumerator::new(&board, &graph, &dictionary).enumerate());

        let rows = results.by_row();
        assert_eq!(rows[0].len(), 1);
        assert_eq!(rows[1].len(), 2);
        assert!(rows[2].is_empty());
        assert_eq!(rows[3][0].text(), "fish");
        assert_eq!(rows[4][0].text(), "owl");
    }

    #[test]
    fn summary_helpers() {
        let board = sample();
        let results = ResultSet::assemble(vec![
            candidate(&board, "cat"),
            candidate(&board, "fish"),
            candidate(&board, "dogs"),
        ]);

        assert_eq!(results.total_score(), 5 + 10 + 6);
        assert_eq!(results.best().unwrap().text(), "fish");
        assert_eq!(results.longest().unwrap().text(), "dogs");
        assert_eq!(results.get("FISH").unwrap().score(), 10);
        assert!(results.get("owl").is_none());
    }

    #[test]
    fn filter_min_len_drops_short_words() {
        let board = sample();
        let results = ResultSet::assemble(vec![
            candidate(&board, "cat"),
            candidate(&board, "fish"),
            candidate(&board, "dogs"),
        ])
        .filter_min_len(4);

        let texts: Vec<&str> = results.iter().map(WordCandidate::text).collect();
        assert_eq!(texts, ["dogs", "fish"]);
    }
}
