//! Command implementations

pub mod benchmark;
pub mod simple;
pub mod solve;
pub mod trace;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use simple::run_simple;
pub use solve::{SolveConfig, SolveReport, solve_board};
pub use trace::{TraceReport, trace_word};
