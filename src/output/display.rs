//! Display functions for command results

use super::formatters::{
    CELL_WIDTH, Cell, create_progress_bar, display_coord, format_path, grid_lines,
    grid_lines_with_path, layout_columns,
};
use crate::commands::{BenchmarkResult, SolveReport, TraceReport};
use crate::core::Board;
use colored::Colorize;

/// Print the hex grid
pub fn print_grid(board: &Board) {
    for line in grid_lines(board) {
        println!("{}", line.bright_white().bold());
    }
}

fn print_cell(cell: &Cell) {
    let word = cell.padded_word();
    if cell.highlight {
        print!("{}", word.bright_green().bold());
    } else {
        print!("{word}");
    }
    print!("{}", cell.padded_info().bright_black());
}

/// Print the result of solving a board
///
/// One column per start row, the board grid underneath.
pub fn print_solve_result(report: &SolveReport) {
    println!("\n{}", "─".repeat(70).cyan());
    println!(
        "Board: {}",
        report.board.to_string().to_uppercase().bright_yellow().bold()
    );
    println!("{}\n", "─".repeat(70).cyan());

    for line in layout_columns(&report.results) {
        for cell in &line {
            match cell {
                Some(cell) => print_cell(cell),
                None => print!("{}", " ".repeat(CELL_WIDTH)),
            }
        }
        println!();
    }

    println!(
        "\n{} {}",
        report.results.len().to_string().bright_cyan().bold(),
        if report.results.len() == 1 {
            "word"
        } else {
            "words"
        }
    );

    if let Some(best) = report.results.best() {
        println!(
            "Best:  {} {} pts {}",
            best.text().to_uppercase().bright_green().bold(),
            best.score(),
            display_coord(best.start()).bright_black()
        );
    }
    println!("Total: {} pts", report.results.total_score());
    println!("Time:  {:.2}ms\n", report.duration.as_secs_f64() * 1000.0);

    print_grid(&report.board);
}

/// Print the path found for a traced word
pub fn print_trace_result(report: &TraceReport) {
    let word = report.word.to_uppercase();

    let Some(found) = &report.found else {
        println!(
            "\n{}",
            format!("❌ {word} cannot be spelled on this board").red().bold()
        );
        return;
    };

    println!("\n{} {}", word.bright_yellow().bold(), format_path(found.path()));
    println!("   Score:      {} pts", found.score());
    if report.in_dictionary {
        println!("   Dictionary: {}", "yes".green());
    } else {
        println!("   Dictionary: {}", "no".red());
    }
    println!();

    for line in grid_lines_with_path(&report.board, found.path()) {
        println!("{line}");
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Boards solved:    {}", result.boards);
    println!(
        "   Average words:    {}",
        format!("{:.1}", result.average_words).bright_yellow().bold()
    );
    println!(
        "   Fewest words:     {}",
        result.min_words.to_string().yellow()
    );
    println!("   Most words:       {}", result.max_words.to_string().green());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Boards/second:    {:.1}", result.boards_per_second);

    if let Some((board, word, score)) = &result.best_word {
        println!("\n🏆 {}", "Best word:".bright_cyan().bold());
        println!(
            "   {} ({score} pts) on {}",
            word.to_uppercase().bright_green().bold(),
            board.to_uppercase()
        );
    }

    println!("\n📈 {}", "Word lengths:".bright_cyan().bold());
    let total: usize = result.length_distribution.values().sum();
    let mut lengths: Vec<_> = result.length_distribution.iter().collect();
    lengths.sort_unstable();
    for (length, &count) in lengths {
        let pct = if total > 0 {
            count as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {length}: {} {count:6} ({pct:5.1}%)", bar.green());
    }
}
