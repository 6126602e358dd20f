//! Word search over the hexagonal board
//!
//! Adjacency construction, exhaustive path enumeration and result assembly.

mod adjacency;
mod engine;
mod enumerator;
mod results;

pub use adjacency::AdjacencyGraph;
pub use engine::Solver;
pub use enumerator::{Enumerator, MAX_WORD_LEN, MIN_WORD_LEN, WordCandidate, trace};
pub use results::ResultSet;
