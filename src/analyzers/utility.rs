/// Rounds half to even, so `12.5` becomes `12` and `13.5` becomes `14`.
pub fn round_half_even(value: f64) -> u32 {
    value.round_ties_even().max(0.0) as u32
}

/// Whole-number percentage of `part` in `total`. Returns 0 when `total` is 0.
pub fn pct(part: usize, total: usize) -> u32 {
    if total == 0 {
        0
    } else {
        round_half_even(part as f64 / total as f64 * 100.0)
    }
}

/// Average per hour across a full day, always dividing by 24.
pub fn per_hour(count: usize) -> u32 {
    round_half_even(count as f64 / 24.0)
}
