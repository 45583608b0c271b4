use crate::codes;
use crate::error::GdResult;
use crate::hashing::index_for;
use crate::state::ShiftState;
use crate::table::TableSize;
use fnv::FnvHashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub type Energy = f64;

/// Anything the annealer can minimise.
pub trait Objective {
    fn energy(&self, state: &ShiftState) -> GdResult<Energy>;
}

/// Bucket index -> number of codes that landed there.
pub type CollisionTable = FnvHashMap<usize, u32>;

pub fn collision_table(codes: &[u32], state: &ShiftState, table_size: TableSize) -> CollisionTable {
    let mut table = CollisionTable::default();
    for &code in codes {
        *table.entry(index_for(state.mix(code), table_size)).or_insert(0) += 1;
    }
    table
}

/// Total excess collisions of `codes` under `state`: the sum over buckets of
/// `max(0, occupancy - 1)`, i.e. codes minus distinct occupied buckets. The
/// bucket table is rebuilt on every call.
pub fn energy(codes: &[u32], state: &ShiftState, table_size: TableSize) -> Energy {
    let table = collision_table(codes, state, table_size);
    (codes.len() - table.len()) as Energy
}

/// Summary of one bucket table, for reporting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionStats {
    pub codes: usize,
    pub occupied_buckets: usize,
    pub total_excess: usize,
    pub max_occupancy: u32,
}

impl CollisionStats {
    pub fn from_table(table: &CollisionTable) -> Self {
        let codes: usize = table.values().map(|&n| n as usize).sum();
        Self {
            codes,
            occupied_buckets: table.len(),
            total_excess: codes - table.len(),
            max_occupancy: table.values().copied().max().unwrap_or(0),
        }
    }

    /// Excess collisions per occupied bucket; 0 for an empty table.
    pub fn mean_excess(&self) -> f64 {
        if self.occupied_buckets == 0 {
            0.0
        } else {
            self.total_excess as f64 / self.occupied_buckets as f64
        }
    }
}

/// In-memory evaluator over a fixed code sequence. The codes are shared so
/// that several runs over the same data do not copy them.
#[derive(Debug, Clone)]
pub struct CollisionEvaluator {
    codes: Arc<[u32]>,
    table_size: TableSize,
}

impl CollisionEvaluator {
    pub fn new(codes: impl Into<Arc<[u32]>>, table_size: TableSize) -> Self {
        Self {
            codes: codes.into(),
            table_size,
        }
    }

    pub fn codes(&self) -> &[u32] {
        &self.codes
    }

    pub fn table_size(&self) -> TableSize {
        self.table_size
    }

    pub fn energy_of(&self, state: &ShiftState) -> Energy {
        energy(&self.codes, state, self.table_size)
    }

    pub fn stats(&self, state: &ShiftState) -> CollisionStats {
        CollisionStats::from_table(&collision_table(&self.codes, state, self.table_size))
    }
}

impl Objective for CollisionEvaluator {
    fn energy(&self, state: &ShiftState) -> GdResult<Energy> {
        Ok(self.energy_of(state))
    }
}

/// Evaluator that re-reads the intermediate code file on every call.
/// Only useful for checking compatibility with existing code files; an
/// unreadable file fails the evaluation.
#[derive(Debug, Clone)]
pub struct FileCodes {
    path: PathBuf,
    table_size: TableSize,
}

impl FileCodes {
    pub fn new<P: AsRef<Path>>(path: P, table_size: TableSize) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            table_size,
        }
    }
}

impl Objective for FileCodes {
    fn energy(&self, state: &ShiftState) -> GdResult<Energy> {
        let codes = codes::read_codes_file(&self.path)?;
        Ok(energy(&codes, state, self.table_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(n: usize) -> TableSize {
        TableSize::new(n).unwrap()
    }

    #[test]
    fn test_empty_codes_have_zero_energy() {
        for state in [ShiftState::BASELINE, ShiftState::new(0, 0, 0, 0)] {
            assert_eq!(energy(&[], &state, table(1)), 0.0);
            assert_eq!(energy(&[], &state, table(1024)), 0.0);
        }
    }

    #[test]
    fn test_single_bucket_collects_everything() {
        let codes: Vec<u32> = (0..10).collect();
        assert_eq!(energy(&codes, &ShiftState::BASELINE, table(1)), 9.0);
    }

    #[test]
    fn test_identity_mix_on_sequential_codes() {
        // All shifts out of range for these small codes -> identity mix.
        let state = ShiftState::new(31, 31, 31, 31);
        let codes: Vec<u32> = (0..8).collect();
        assert_eq!(energy(&codes, &state, table(8)), 0.0);
        assert_eq!(energy(&codes, &state, table(4)), 4.0);
    }

    #[test]
    fn test_stats_agree_with_energy() {
        let codes: Vec<u32> = (0..500).map(|i| i * 37).collect();
        let eval = CollisionEvaluator::new(codes, table(64));
        let stats = eval.stats(&ShiftState::BASELINE);
        assert_eq!(stats.codes, 500);
        assert_eq!(stats.total_excess as f64, eval.energy_of(&ShiftState::BASELINE));
        assert!(stats.occupied_buckets <= 64);
        assert!(stats.max_occupancy >= 8);
    }

    #[test]
    fn test_mean_excess_of_empty_table() {
        let stats = CollisionStats::from_table(&CollisionTable::default());
        assert_eq!(stats.mean_excess(), 0.0);
        assert_eq!(stats.max_occupancy, 0);
    }
}
