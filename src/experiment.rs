use crate::codes::WordList;
use crate::config::ExperimentConfig;
use crate::energy::{CollisionEvaluator, CollisionStats, Energy};
use crate::error::GdResult;
use crate::hashing::PrimaryHash;
use crate::optimizer::{AnnealResult, Annealer, ProgressCallback};
use crate::state::ShiftState;
use fastrand::Rng;
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// Printed when the program is run without arguments.
pub const LEARNED: &str = "\
What the collision experiments show:
  * A multiplier matters. Summing character codes maps anagrams and
    near-anagrams to the same value, so codes bunch together and no amount
    of bit mixing can pull apart values that are already equal.
  * With a decent string hash, the mixing shifts still decide how the high
    bits reach the low bits the table actually indexes by. Small tables
    are the most sensitive to this.
  * Annealing finds shift sets at least as good as the classic (20, 12, 7, 4)
    and often better for a specific word list and table size; the gain
    shrinks as the table grows and collisions become rare.";

/// Where an experiment's codes came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeOrigin {
    /// Hashed from words with this primary hash.
    Hashed(PrimaryHash),
    /// Taken as-is from a code file; the primary hash is unknown.
    Imported,
}

impl fmt::Display for CodeOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeOrigin::Hashed(primary) => write!(f, "{}", primary),
            CodeOrigin::Imported => write!(f, "imported"),
        }
    }
}

/// One finished experiment: one tuned run, compared with the baseline shifts.
#[derive(Debug, Clone)]
pub struct ExperimentReport {
    pub config: ExperimentConfig,
    pub origin: CodeOrigin,
    pub tuned: AnnealResult,
    pub tuned_stats: CollisionStats,
    pub baseline: ShiftState,
    pub baseline_energy: Energy,
    pub baseline_stats: CollisionStats,
}

impl ExperimentReport {
    /// Collisions removed by tuning, relative to the baseline.
    pub fn improvement(&self) -> Energy {
        self.baseline_energy - self.tuned.best_energy
    }
}

/// Sink for finished experiments.
pub trait Reporter {
    fn report(&mut self, label: &str, report: &ExperimentReport) -> GdResult<()>;
}

impl Reporter for Vec<ExperimentReport> {
    fn report(&mut self, _label: &str, report: &ExperimentReport) -> GdResult<()> {
        self.push(report.clone());
        Ok(())
    }
}

/// Runs one experiment on pre-hashed codes, starting the search at `seed`.
pub fn run_on_codes<CB: ProgressCallback>(
    codes: impl Into<Arc<[u32]>>,
    origin: CodeOrigin,
    config: &ExperimentConfig,
    seed: ShiftState,
    rng: &mut Rng,
    progress: CB,
) -> GdResult<ExperimentReport> {
    config.validate()?;
    let table = config.table()?;
    let annealer = Annealer::new(config.anneal_options()?)?;
    let evaluator = CollisionEvaluator::new(codes, table);

    info!(
        "🧪 {} codes | table {} | budget {} | target {}",
        evaluator.codes().len(),
        table,
        config.iteration_budget,
        config.energy_target
    );

    let baseline = ShiftState::BASELINE;
    let baseline_energy = evaluator.energy_of(&baseline);
    let tuned = annealer.run(&evaluator, seed, rng, progress)?;

    Ok(ExperimentReport {
        config: config.clone(),
        origin,
        tuned_stats: evaluator.stats(&tuned.best),
        tuned,
        baseline,
        baseline_energy,
        baseline_stats: evaluator.stats(&baseline),
    })
}

/// Hashes `words` with the configured primary hash, then runs the experiment
/// from the baseline shifts.
pub fn run_experiment<CB: ProgressCallback>(
    words: &WordList,
    config: &ExperimentConfig,
    rng: &mut Rng,
    progress: CB,
) -> GdResult<ExperimentReport> {
    let codes = words.codes(config.primary);
    run_on_codes(
        codes,
        CodeOrigin::Hashed(config.primary),
        config,
        ShiftState::BASELINE,
        rng,
        progress,
    )
}
