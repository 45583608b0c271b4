pub mod runner;

pub use self::runner::{
    AnnealOptions, AnnealResult, Annealer, ProgressCallback, StepReport, TerminationReason,
};

/// Callback for runs nobody watches.
pub fn silent(_step: &StepReport) {}
