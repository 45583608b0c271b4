use crate::error::{GdResult, GoodnessError};
use std::fmt;

/// Number of hash buckets. Always an exact power of two, so bucket reduction
/// is a mask rather than a modulo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableSize(usize);

impl TableSize {
    pub fn new(size: usize) -> GdResult<Self> {
        if size.is_power_of_two() {
            Ok(Self(size))
        } else {
            Err(GoodnessError::InvalidTableSize(size))
        }
    }

    /// `2^bits` buckets.
    pub fn from_bits(bits: u32) -> GdResult<Self> {
        1usize
            .checked_shl(bits)
            .filter(|_| bits < usize::BITS)
            .map(Self)
            .ok_or_else(|| GoodnessError::Config(format!("table of 2^{} buckets is too large", bits)))
    }

    #[inline(always)]
    pub fn get(self) -> usize {
        self.0
    }

    #[inline(always)]
    pub fn mask(self) -> usize {
        debug_assert!(self.0.is_power_of_two());
        self.0 - 1
    }
}

impl fmt::Display for TableSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
