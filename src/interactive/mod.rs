//! Interactive TUI interface
//!
//! Type a board, then browse the words found per start row with the path of the
//! selected word highlighted on the grid.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, run_tui};
