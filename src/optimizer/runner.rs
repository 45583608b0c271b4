use crate::energy::{Energy, Objective};
use crate::error::{GdResult, GoodnessError};
use crate::schedule::{acceptance_probability, temperature};
use crate::state::ShiftState;
use fastrand::Rng;
use std::fmt;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnealOptions {
    /// Iteration budget (energy evaluations after the initial one).
    pub kmax: usize,
    /// Stop as soon as the working energy is at or below this.
    pub emax: Energy,
}

impl AnnealOptions {
    pub fn validate(&self) -> GdResult<()> {
        if self.kmax == 0 {
            return Err(GoodnessError::Config(
                "iteration budget must be at least 1".to_string(),
            ));
        }
        if self.emax.is_nan() {
            return Err(GoodnessError::Config("energy target is NaN".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    BudgetExhausted,
    TargetReached,
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BudgetExhausted => write!(f, "iteration budget exhausted"),
            Self::TargetReached => write!(f, "energy target reached"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnnealResult {
    pub best: ShiftState,
    pub best_energy: Energy,
    pub initial_energy: Energy,
    pub iterations: usize,
    pub accepted: usize,
    pub improving: usize,
    pub reason: TerminationReason,
}

/// Snapshot of one iteration, handed to a [`ProgressCallback`].
#[derive(Debug, Clone, Copy)]
pub struct StepReport {
    pub k: usize,
    pub temperature: f64,
    pub candidate: ShiftState,
    pub candidate_energy: Energy,
    pub accepted: bool,
    pub current_energy: Energy,
    pub best: ShiftState,
    pub best_energy: Energy,
}

/// Receives a report after every iteration of a run.
/// Any `FnMut(&StepReport)` closure is a callback.
pub trait ProgressCallback {
    fn on_step(&mut self, step: &StepReport);
}

impl<F: FnMut(&StepReport)> ProgressCallback for F {
    fn on_step(&mut self, step: &StepReport) {
        self(step)
    }
}

/// Simulated annealing over [`ShiftState`]s.
///
/// The working state moves to a candidate neighbour whenever
/// `acceptance_probability(current, candidate, T) > U[0, 1)`, so it can get
/// worse. The best state is tracked separately and only replaced by a
/// strictly lower energy, so the returned energy never exceeds the seed's.
pub struct Annealer {
    options: AnnealOptions,
}

impl Annealer {
    pub fn new(options: AnnealOptions) -> GdResult<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &AnnealOptions {
        &self.options
    }

    pub fn run<O, CB>(
        &self,
        objective: &O,
        seed: ShiftState,
        rng: &mut Rng,
        mut callback: CB,
    ) -> GdResult<AnnealResult>
    where
        O: Objective + ?Sized,
        CB: ProgressCallback,
    {
        let AnnealOptions { kmax, emax } = self.options;

        let mut current = seed;
        let mut current_energy = objective.energy(&current)?;
        let initial_energy = current_energy;
        let mut best = current;
        let mut best_energy = current_energy;

        info!(
            "🔥 Annealing from {} (E = {}) | kmax = {} | emax = {}",
            seed, initial_energy, kmax, emax
        );

        let mut k = 0;
        let mut accepted = 0;
        let mut improving = 0;

        while k < kmax && current_energy > emax {
            let temp = temperature(k, kmax);
            let candidate = current.neighbor(rng);
            let candidate_energy = objective.energy(&candidate)?;

            let take = acceptance_probability(current_energy, candidate_energy, temp) > rng.f64();
            if take {
                if candidate_energy < current_energy {
                    improving += 1;
                }
                current = candidate;
                current_energy = candidate_energy;
                accepted += 1;
            }

            if candidate_energy < best_energy {
                best = candidate;
                best_energy = candidate_energy;
                debug!("k = {:6} | T = {:10.2} | new best {} E = {}", k, temp, best, best_energy);
            }

            callback.on_step(&StepReport {
                k,
                temperature: temp,
                candidate,
                candidate_energy,
                accepted: take,
                current_energy,
                best,
                best_energy,
            });

            k += 1;
        }

        let reason = if current_energy <= emax {
            TerminationReason::TargetReached
        } else {
            TerminationReason::BudgetExhausted
        };

        info!(
            "🏁 Stopped after {} iterations ({}): best {} E = {}",
            k, reason, best, best_energy
        );

        Ok(AnnealResult {
            best,
            best_energy,
            initial_energy,
            iterations: k,
            accepted,
            improving,
            reason,
        })
    }
}
