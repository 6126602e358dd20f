//! Hexword Solver - CLI
//!
//! Finds every word on a 19-tile hexagonal letter board, with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hexword_solver::{
    commands::{BenchmarkConfig, SolveConfig, run_benchmark, run_simple, solve_board, trace_word},
    output::{print_benchmark_result, print_solve_result, print_trace_result},
    solver::{MIN_WORD_LEN, Solver},
    wordlists::{Dictionary, embedded_dictionary},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hexword",
    about = "Find every word on a hexagonal letter board",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Raise log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (reads boards from stdin)
    Simple,

    /// Solve a board and print every word found
    Solve {
        /// The 19 board letters, row by row; spaces between rows are optional
        #[arg(required = true, num_args = 1..)]
        letters: Vec<String>,

        /// Search start tiles in parallel
        #[arg(short, long)]
        parallel: bool,

        /// Only show words with at least this many letters
        #[arg(short = 'm', long, default_value_t = MIN_WORD_LEN)]
        min_len: usize,
    },

    /// Show where a word can be spelled on a board
    Trace {
        /// The 19 board letters
        letters: String,

        /// Word to look for
        word: String,
    },

    /// Benchmark solver performance on random boards
    Benchmark {
        /// Number of random boards to solve
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for the board generator
        #[arg(short, long, default_value = "0")]
        seed: u64,

        /// Search start tiles in parallel
        #[arg(short, long)]
        parallel: bool,
    },
}

/// Route tracing output to stderr so it never mixes with results on stdout
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load the dictionary based on the -w flag
///
/// - "embedded": the word list compiled into the binary
/// - "<path>": a newline-delimited word list on disk
fn load_dictionary(wordlist_mode: &str) -> Result<Dictionary> {
    match wordlist_mode {
        "embedded" => embedded_dictionary().context("Embedded word list is empty"),
        path => Dictionary::load_from_file(path)
            .with_context(|| format!("Failed to load word list '{path}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dictionary = load_dictionary(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&dictionary),
        Commands::Simple => run_simple(&Solver::new(&dictionary)),
        Commands::Solve {
            letters,
            parallel,
            min_len,
        } => run_solve_command(&letters.join(""), parallel, min_len, &dictionary),
        Commands::Trace { letters, word } => run_trace_command(&letters, &word, &dictionary),
        Commands::Benchmark {
            count,
            seed,
            parallel,
        } => run_benchmark_command(count, seed, parallel, &dictionary),
    }
}

fn run_solve_command(
    letters: &str,
    parallel: bool,
    min_len: usize,
    dictionary: &Dictionary,
) -> Result<()> {
    let solver = Solver::new(dictionary).with_parallel(parallel);
    let config = SolveConfig {
        min_len,
        ..SolveConfig::new(letters.to_string())
    };

    let report = solve_board(&config, &solver).context("Invalid board")?;
    print_solve_result(&report);
    Ok(())
}

fn run_trace_command(letters: &str, word: &str, dictionary: &Dictionary) -> Result<()> {
    let solver = Solver::new(dictionary);
    let report = trace_word(letters, word, &solver).context("Invalid board")?;
    print_trace_result(&report);
    Ok(())
}

fn run_benchmark_command(
    count: usize,
    seed: u64,
    parallel: bool,
    dictionary: &Dictionary,
) -> Result<()> {
    println!("Running benchmark on {count} random boards (seed {seed})...");

    let solver = Solver::new(dictionary).with_parallel(parallel);
    let result = run_benchmark(&solver, &BenchmarkConfig::new(count, seed))?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_play_command(dictionary: &Dictionary) -> Result<()> {
    use hexword_solver::interactive::{App, run_tui};

    let app = App::new(Solver::new(dictionary));
    run_tui(app)
}
