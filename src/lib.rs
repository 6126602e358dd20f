//! Hexword Solver
//!
//! Finds every dictionary word that can be spelled on a 19-tile hexagonal letter board
//! by walking between adjacent tiles, each tile used at most once per word.
//!
//! # Quick Start
//!
//! ```rust
//! use hexword_solver::core::Board;
//! use hexword_solver::solver::Solver;
//! use hexword_solver::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::from_words(["cat", "dogs", "owl"]).unwrap();
//! let solver = Solver::new(&dictionary);
//!
//! // Rows of 3, 4, 5, 4 and 3 letters, top to bottom
//! let board = Board::parse("cat dogs birds fish owl").unwrap();
//! let results = solver.solve(&board);
//!
//! for word in &results {
//!     println!("{} {} pts {}", word.text(), word.score(), word.start());
//! }
//! assert_eq!(results.len(), 3);
//! ```

// Board and tile types
pub mod core;

// Adjacency graph and word search
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
