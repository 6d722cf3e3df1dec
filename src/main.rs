//! Spellcast Solver - CLI
//!
//! Finds the highest-scoring words on a Spellcast board, optionally using
//! gem-paid letter swaps.

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use spellcast_solver::{
    commands::{
        BenchmarkConfig, RandomConfig, SolveConfig, random_grid, run_benchmark, solve_grid,
        solve_parsed,
    },
    core::Dictionary,
    output::{print_benchmark_result, print_grid, print_solve_result},
    solver::{SearchConfig, Settings},
    wordlists::loader::load_from_file,
};
use std::io::Read;
use std::time::Duration;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "spellcast",
    about = "Spellcast word finder with multiplier scoring and letter swaps",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'all' (default, embedded dictionary) or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a board, e.g. "ABCDE/FG(DL)HIJ/KLMNO/PQRST/UVWX(DW)Y"
    Solve {
        /// Board rows separated by '/' (reads stdin if omitted)
        grid: Option<String>,

        #[command(flatten)]
        search: SearchArgs,

        /// Number of words to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,

        /// Show paths and swaps for every word
        #[arg(short, long)]
        paths: bool,
    },

    /// Generate a random board and solve it
    Random {
        /// Seed for a reproducible board
        #[arg(long)]
        seed: Option<u64>,

        /// Leave out DL/TL/DW cells
        #[arg(long)]
        plain: bool,

        #[command(flatten)]
        search: SearchArgs,

        /// Number of words to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,

        /// Show paths and swaps for every word
        #[arg(short, long)]
        paths: bool,
    },

    /// Benchmark solver performance on random boards
    Benchmark {
        /// Number of boards to solve
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for the board sequence
        #[arg(long, default_value = "0")]
        seed: u64,

        #[command(flatten)]
        search: SearchArgs,
    },
}

/// Search flags shared by every subcommand
#[derive(Args, Clone, Debug)]
struct SearchArgs {
    /// Gems available for letter swaps (3 per swap)
    #[arg(short, long, default_value = "0")]
    gems: u32,

    /// Maximum swaps per word
    #[arg(long, default_value = "3")]
    max_swaps: u32,

    /// Never swap letters, whatever the gem count
    #[arg(long)]
    no_swaps: bool,

    /// Time budget in milliseconds
    #[arg(long, default_value = "3000")]
    timeout_ms: u64,

    /// Search until every start cell is done
    #[arg(long)]
    no_timeout: bool,

    /// Search start cells in parallel
    #[arg(long)]
    parallel: bool,

    /// Shortest word to report (3-20)
    #[arg(long, default_value = "3")]
    min_length: usize,

    /// Longest word to explore (3-20)
    #[arg(long, default_value = "20")]
    max_length: usize,
}

impl SearchArgs {
    fn settings(&self) -> Settings {
        Settings {
            available_gems: self.gems,
            max_swaps: self.max_swaps,
            allow_swaps: !self.no_swaps,
        }
    }

    fn config(&self) -> Result<SearchConfig> {
        if self.min_length < SearchConfig::MIN_WORD_LENGTH
            || self.max_length > SearchConfig::MAX_WORD_LENGTH
            || self.min_length > self.max_length
        {
            bail!(
                "Invalid word length range {}..={}",
                self.min_length,
                self.max_length
            );
        }

        Ok(SearchConfig {
            deadline: (!self.no_timeout).then(|| Duration::from_millis(self.timeout_ms)),
            min_word_length: self.min_length,
            max_word_length: self.max_length,
            parallel: self.parallel,
            ..SearchConfig::default()
        })
    }
}

/// Load a custom dictionary based on the -w flag
///
/// Returns `None` for 'all', meaning the embedded dictionary.
fn load_dictionary(wordlist: &str) -> Result<Option<Dictionary>> {
    match wordlist {
        "all" => Ok(None),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("Failed to read wordlist {path}"))?;
            if words.is_empty() {
                bail!("Wordlist {path} contains no usable words");
            }
            let dictionary = Dictionary::from_words(words);
            tracing::info!(
                path,
                words = dictionary.len(),
                nodes = dictionary.node_count(),
                "loaded custom wordlist"
            );
            Ok(Some(dictionary))
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let custom = load_dictionary(&cli.wordlist)?;
    let dictionary: &Dictionary = custom.as_ref().unwrap_or_else(|| Dictionary::embedded());

    match cli.command {
        Commands::Solve {
            grid,
            search,
            limit,
            paths,
        } => run_solve_command(grid, &search, limit, paths, dictionary),
        Commands::Random {
            seed,
            plain,
            search,
            limit,
            paths,
        } => run_random_command(seed, plain, &search, limit, paths, dictionary),
        Commands::Benchmark {
            count,
            seed,
            search,
        } => run_benchmark_command(count, seed, &search, dictionary),
    }
}

fn run_solve_command(
    grid: Option<String>,
    search: &SearchArgs,
    limit: usize,
    paths: bool,
    dictionary: &Dictionary,
) -> Result<()> {
    let grid = match grid {
        Some(grid) => grid,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read board from stdin")?;
            text
        }
    };

    let config = SolveConfig {
        grid,
        settings: search.settings(),
        search: search.config()?,
        limit: Some(limit),
    };
    let result = solve_grid(&config, dictionary).context("Invalid board")?;

    print_solve_result(&result, paths);
    Ok(())
}

fn run_random_command(
    seed: Option<u64>,
    plain: bool,
    search: &SearchArgs,
    limit: usize,
    paths: bool,
    dictionary: &Dictionary,
) -> Result<()> {
    let board = RandomConfig {
        multipliers: !plain,
        seed,
        ..RandomConfig::default()
    };
    let grid = random_grid(&board)?;

    println!("Random board:\n");
    print_grid(&grid, None);
    println!("\n{grid}");

    let config = SolveConfig {
        grid: grid.to_string(),
        settings: search.settings(),
        search: search.config()?,
        limit: Some(limit),
    };
    let result = solve_parsed(grid, &config, dictionary);

    print_solve_result(&result, paths);
    Ok(())
}

fn run_benchmark_command(
    count: usize,
    seed: u64,
    search: &SearchArgs,
    dictionary: &Dictionary,
) -> Result<()> {
    println!("Running benchmark on {count} random boards (seed {seed})...");

    let config = BenchmarkConfig {
        boards: count,
        seed,
        settings: search.settings(),
        search: search.config()?,
        ..BenchmarkConfig::default()
    };

    let result = run_benchmark(&config, dictionary);
    print_benchmark_result(&result);
    Ok(())
}
