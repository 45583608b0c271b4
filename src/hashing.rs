use crate::table::TableSize;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Word-to-code hash used when building the code sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PrimaryHash {
    /// `h = 31 * h + c` with wrapping arithmetic.
    Polynomial,
    /// `h = h + c`. Deliberately poor control variant.
    ByteSum,
}

impl PrimaryHash {
    #[inline]
    pub fn hash<W: AsRef<[u8]>>(self, word: W) -> u32 {
        match self {
            Self::Polynomial => primary_hash(word),
            Self::ByteSum => byte_sum_hash(word),
        }
    }
}

/// Polynomial rolling hash over the bytes of `word`, modulo 2^32.
/// The empty string hashes to 0. Bytes need not be valid UTF-8.
#[inline]
pub fn primary_hash<W: AsRef<[u8]>>(word: W) -> u32 {
    word.as_ref()
        .iter()
        .fold(0u32, |h, &b| h.wrapping_mul(31).wrapping_add(b as u32))
}

/// Sum of byte values, modulo 2^32. Clusters badly; kept for comparison runs.
#[inline]
pub fn byte_sum_hash<W: AsRef<[u8]>>(word: W) -> u32 {
    word.as_ref()
        .iter()
        .fold(0u32, |h, &b| h.wrapping_add(b as u32))
}

/// Logical right shift where any amount >= 32 shifts in zeros.
#[inline(always)]
fn shr(x: u32, amount: u32) -> u32 {
    x.checked_shr(amount).unwrap_or(0)
}

/// Avalanche step: `h = x ^ (x >> a) ^ (x >> b); h ^ (h >> c) ^ (h >> d)`.
#[inline(always)]
pub fn safety_hash(code: u32, a: u32, b: u32, c: u32, d: u32) -> u32 {
    let h = code ^ shr(code, a) ^ shr(code, b);
    h ^ shr(h, c) ^ shr(h, d)
}

/// Bucket index for `h`: the low bits selected by `table_size - 1`.
#[inline(always)]
pub fn index_for(h: u32, table_size: TableSize) -> usize {
    (h as usize) & table_size.mask()
}

/// Renders `i` as a fixed-width 32-character bit string, most significant bit first.
pub fn to_bit_string(i: u32) -> String {
    format!("{:032b}", i)
}
