use crate::energy::Energy;

/// Scale of the schedule: `temperature(k, kmax) = TEMP_SCALE * kmax / k`.
pub const TEMP_SCALE: f64 = 100.0;

/// `100 / (k / kmax)`. The first iteration (`k == 0`) is defined as infinitely
/// hot, so every move is accepted there. Temperature then falls towards
/// `TEMP_SCALE` as `k` approaches `kmax`.
///
/// `kmax` must be at least 1; a zero budget has no schedule.
#[inline]
pub fn temperature(k: usize, kmax: usize) -> f64 {
    debug_assert!(kmax > 0, "temperature needs kmax >= 1");
    if k == 0 {
        return f64::INFINITY;
    }
    TEMP_SCALE / (k as f64 / kmax as f64)
}

/// Probability of moving from `current` to `candidate` at `temp`.
/// Strict improvements are always taken; equal or worse candidates are
/// taken with `exp(-(candidate - current) / temp)`.
#[inline]
pub fn acceptance_probability(current: Energy, candidate: Energy, temp: f64) -> f64 {
    if candidate < current {
        return 1.0;
    }
    (-(candidate - current) / temp).exp()
}
