use crate::energy::Energy;
use crate::error::{GdResult, GoodnessError};
use crate::hashing::PrimaryHash;
use crate::optimizer::AnnealOptions;
use crate::table::TableSize;
use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Everything one experiment needs besides its input data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub table_size: usize,
    pub energy_target: Energy,
    pub iteration_budget: usize,
    pub verbose: bool,
    pub primary: PrimaryHash,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        RunMode::Medium.config()
    }
}

impl ExperimentConfig {
    pub fn table(&self) -> GdResult<TableSize> {
        TableSize::new(self.table_size)
    }

    pub fn anneal_options(&self) -> GdResult<AnnealOptions> {
        let options = AnnealOptions {
            kmax: self.iteration_budget,
            emax: self.energy_target,
        };
        options.validate()?;
        Ok(options)
    }

    /// Checks everything that can be wrong before a run starts.
    pub fn validate(&self) -> GdResult<()> {
        self.table()?;
        self.anneal_options()?;
        Ok(())
    }

    /// Overwrites every field the overrides set.
    pub fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.table_size {
            self.table_size = v;
        }
        if let Some(v) = overrides.energy_target {
            self.energy_target = v;
        }
        if let Some(v) = overrides.iteration_budget {
            self.iteration_budget = v;
        }
        if let Some(v) = overrides.primary {
            self.primary = v;
        }
    }
}

/// Optional per-field overrides, from flags or a JSON file.
#[derive(Args, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigOverrides {
    /// Number of hash buckets (power of two).
    #[arg(long)]
    pub table_size: Option<usize>,
    /// Stop early once the collision count is at or below this.
    #[arg(long)]
    pub energy_target: Option<Energy>,
    /// Maximum number of annealing iterations.
    #[arg(long)]
    pub iteration_budget: Option<usize>,
    /// Word hash used to build codes: polynomial | byte_sum.
    #[arg(long)]
    pub primary: Option<PrimaryHash>,
}

impl ConfigOverrides {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> GdResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| {
            GoodnessError::DataUnavailable {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// `self` with every field `other` sets taken from `other`.
    pub fn merged_with(&self, other: &ConfigOverrides) -> ConfigOverrides {
        ConfigOverrides {
            table_size: other.table_size.or(self.table_size),
            energy_target: other.energy_target.or(self.energy_target),
            iteration_budget: other.iteration_budget.or(self.iteration_budget),
            primary: other.primary.or(self.primary),
        }
    }
}

/// The closed set of experiments the command line can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RunMode {
    Small,
    Medium,
    Large,
    BadHash,
    Quiet,
}

impl RunMode {
    pub fn config(self) -> ExperimentConfig {
        let (table_size, iteration_budget) = match self {
            Self::Small => (1 << 10, 2000),
            Self::Medium | Self::BadHash | Self::Quiet => (1 << 16, 1000),
            Self::Large => (1 << 20, 500),
        };
        ExperimentConfig {
            table_size,
            energy_target: 0.0,
            iteration_budget,
            verbose: self != Self::Quiet,
            primary: match self {
                Self::BadHash => PrimaryHash::ByteSum,
                _ => PrimaryHash::Polynomial,
            },
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Self::Small => "tune for a 1024-bucket table",
            Self::Medium => "tune for a 65536-bucket table",
            Self::Large => "tune for a 1048576-bucket table",
            Self::BadHash => "medium table, codes from the byte-sum hash",
            Self::Quiet => "medium table without progress output",
        }
    }

    /// Parses one command-line word. `all` expands to every mode.
    pub fn parse_selection(word: &str) -> GdResult<Vec<RunMode>> {
        if word.eq_ignore_ascii_case("all") {
            return Ok(RunMode::iter().collect());
        }
        RunMode::from_str(word)
            .map(|m| vec![m])
            .map_err(|_| GoodnessError::UnknownMode(word.to_string()))
    }
}
