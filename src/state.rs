use crate::hashing::safety_hash;
use fastrand::Rng;
use std::fmt;

/// Largest legal shift for a 32-bit word.
pub const SHIFT_MAX: u32 = 31;

/// Largest single perturbation applied by [`ShiftState::neighbor`].
pub const MAX_STEP: i32 = 6;

/// The four shift amounts of the mixing hash. Every field stays in
/// `0..=SHIFT_MAX`; out-of-range input is clamped, never wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShiftState {
    shifts: [u32; 4],
}

impl ShiftState {
    /// Shifts of the classic fixed mixing step `h ^= (h >>> 20) ^ (h >>> 12);
    /// h ^ (h >>> 7) ^ (h >>> 4)`.
    pub const BASELINE: ShiftState = ShiftState {
        shifts: [20, 12, 7, 4],
    };

    pub fn new(a: u32, b: u32, c: u32, d: u32) -> Self {
        Self {
            shifts: [a, b, c, d].map(|s| s.min(SHIFT_MAX)),
        }
    }

    #[inline(always)]
    pub fn shifts(&self) -> [u32; 4] {
        self.shifts
    }

    /// Applies the mixing hash configured by this state.
    #[inline(always)]
    pub fn mix(&self, code: u32) -> u32 {
        let [a, b, c, d] = self.shifts;
        safety_hash(code, a, b, c, d)
    }

    /// Returns a copy with one random field moved by a random step in
    /// `1..=MAX_STEP` in either direction, then clamped to the legal range.
    pub fn neighbor(&self, rng: &mut Rng) -> Self {
        let mut raw = self.shifts.map(|s| s as i32);
        let field = rng.usize(0..raw.len());
        let magnitude = rng.i32(1..=MAX_STEP);
        if rng.bool() {
            raw[field] += magnitude;
        } else {
            raw[field] -= magnitude;
        }

        Self {
            shifts: raw.map(|s| s.clamp(0, SHIFT_MAX as i32) as u32),
        }
    }
}

impl fmt::Display for ShiftState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.shifts;
        write!(f, "({}, {}, {}, {})", a, b, c, d)
    }
}
