use crate::reports::TableReporter;
use fastrand::Rng;
use goodness::codes::{self, WordList};
use goodness::config::{ConfigOverrides, RunMode};
use goodness::error::{GdResult, GoodnessError};
use goodness::experiment::{self, CodeOrigin, ExperimentReport, Reporter};
use goodness::optimizer::{self, ProgressCallback, StepReport};
use goodness::state::ShiftState;
use std::path::PathBuf;
use tracing::{error, info};

/// Where the codes for every experiment come from.
pub enum CodeSource {
    /// A word list, hashed per experiment with that experiment's primary hash.
    Words(PathBuf),
    /// A previously exported code file, used as-is.
    Codes(PathBuf),
}

enum Input {
    Words(WordList),
    Codes(PathBuf),
}

pub struct RunArgs {
    pub modes: Vec<String>,
    pub source: CodeSource,
    pub overrides: ConfigOverrides,
    pub seed: Option<u64>,
    pub export_codes: Option<PathBuf>,
}

struct CliLogger {
    every: usize,
}

impl ProgressCallback for CliLogger {
    fn on_step(&mut self, step: &StepReport) {
        if step.k % self.every == 0 {
            info!(
                "k {:6} | T {:>12.2} | current {:>8} | best {:>8} {}",
                step.k, step.temperature, step.current_energy, step.best_energy, step.best
            );
        }
    }
}

/// Runs every requested mode in order. Unknown mode names are reported and
/// skipped without counting as failures; the remaining modes still run.
/// Returns the number of modes that failed.
pub fn run(args: RunArgs) -> usize {
    // One generator for the whole process.
    let mut rng = args.seed.map(Rng::with_seed).unwrap_or_else(Rng::new);
    let mut reporter = TableReporter::default();
    let mut failures = 0;

    let input = match &args.source {
        CodeSource::Words(path) => match WordList::load_from_file(path) {
            Ok(list) => Input::Words(list),
            Err(e) => {
                error!("❌ {}", e);
                return 1;
            }
        },
        CodeSource::Codes(path) => Input::Codes(path.clone()),
    };

    for word in &args.modes {
        let modes = match RunMode::parse_selection(word) {
            Ok(m) => m,
            Err(e) => {
                error!("❌ {}. Known modes: small, medium, large, bad_hash, quiet, all", e);
                continue;
            }
        };

        for mode in modes {
            info!("➡️  Mode '{}': {}", mode, mode.describe());
            match run_mode(mode, &args, &input, &mut rng) {
                Ok(report) => {
                    if let Err(e) = reporter.report(&mode.to_string(), &report) {
                        error!("❌ Could not report '{}': {}", mode, e);
                        failures += 1;
                    }
                }
                Err(e) => {
                    error!("❌ Mode '{}' failed: {}", mode, e);
                    failures += 1;
                }
            }
        }
    }

    crate::reports::print_summary(&reporter.results);
    failures
}

fn run_mode(
    mode: RunMode,
    args: &RunArgs,
    input: &Input,
    rng: &mut Rng,
) -> GdResult<ExperimentReport> {
    let mut config = mode.config();
    config.apply(&args.overrides);
    config.validate()?;

    let (codes, origin) = match input {
        Input::Words(list) => (list.codes(config.primary), CodeOrigin::Hashed(config.primary)),
        Input::Codes(path) => {
            if mode == RunMode::BadHash {
                return Err(GoodnessError::Config(
                    "'bad_hash' needs a word list; imported codes are already hashed".to_string(),
                ));
            }
            (codes::read_codes_file(path)?, CodeOrigin::Imported)
        }
    };

    if let Some(path) = &args.export_codes {
        codes::write_codes_file(path, &codes)?;
        info!("💾 Exported {} codes to '{}'", codes.len(), path.display());
    }

    if config.verbose {
        let every = (config.iteration_budget / 10).max(1);
        let progress = CliLogger { every };
        experiment::run_on_codes(codes, origin, &config, ShiftState::BASELINE, rng, progress)
    } else {
        experiment::run_on_codes(codes, origin, &config, ShiftState::BASELINE, rng, optimizer::silent)
    }
}
