use clap::{CommandFactory, Parser};
use goodness::config::ConfigOverrides;
use goodness::experiment::LEARNED;
use std::path::PathBuf;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

use cmd::run::{CodeSource, RunArgs};

/// Tunes the four shifts of a bit-mixing hash with simulated annealing so
/// that a word list collides as little as possible in a hash table.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Experiments to run, in order: small, medium, large, bad_hash, quiet, or all.
    modes: Vec<String>,

    /// Whitespace-separated word list to hash.
    #[arg(short, long, default_value = "words")]
    words: PathBuf,

    /// Read pre-hashed codes (one integer per line) instead of a word list.
    #[arg(long, conflicts_with = "words")]
    from_codes: Option<PathBuf>,

    /// Write the codes of each experiment to this file.
    #[arg(long)]
    export_codes: Option<PathBuf>,

    /// JSON file of preset overrides; command-line overrides win.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed the random generator for reproducible runs.
    #[arg(short = 'S', long)]
    seed: Option<u64>,

    #[command(flatten)]
    overrides: ConfigOverrides,

    #[arg(long, default_value_t = false)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .init();

    if cli.modes.is_empty() {
        println!("{}\n", LEARNED);
        if let Err(e) = Cli::command().print_help() {
            error!("{}", e);
        }
        return;
    }

    let overrides = match &cli.config {
        Some(path) => {
            info!("⚖️  Loading overrides from: {}", path.display());
            match ConfigOverrides::load_from_file(path) {
                Ok(file) => file.merged_with(&cli.overrides),
                Err(e) => {
                    error!("❌ FATAL ERROR LOADING CONFIG: {}", e);
                    process::exit(1);
                }
            }
        }
        None => cli.overrides.clone(),
    };

    let source = match cli.from_codes {
        Some(path) => CodeSource::Codes(path),
        None => CodeSource::Words(cli.words),
    };

    let failures = cmd::run::run(RunArgs {
        modes: cli.modes,
        source,
        overrides,
        seed: cli.seed,
        export_codes: cli.export_codes,
    });

    if failures > 0 {
        error!("{} experiment(s) did not complete", failures);
        process::exit(1);
    }
}
