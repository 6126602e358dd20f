//! Simple interactive CLI mode
//!
//! Reads boards from stdin line by line and prints the words found on each.

use super::solve::{SolveConfig, solve_board};
use crate::output::print_solve_result;
use crate::solver::Solver;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the prompt loop until `quit` or end of input
///
/// Invalid boards are reported and the loop keeps going.
///
/// # Errors
///
/// Returns an error if reading stdin or flushing stdout fails.
pub fn run_simple(solver: &Solver) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Hexword Solver - Simple Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Enter the 19 letters of the grid from left to right, top to bottom.");
    println!("Spaces are ignored, so 'abc defg hijkl mnop qrs' works too.");
    println!("Commands: 'quit' to exit\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{}: ", "Letters".bright_cyan());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let input = line?;

        match input.trim().to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                println!("\n👋 Bye!\n");
                return Ok(());
            }
            letters => match solve_board(&SolveConfig::new(letters.to_string()), solver) {
                Ok(report) => print_solve_result(&report),
                Err(e) => println!("{} {e}\n", "❌".red()),
            },
        }
    }
}
