//! Cost estimation for recommended trips.
//!
//! Estimate = per-day base cost × days, with a random ±20% jitter:
//!
//! | range           | per day |
//! |-----------------|---------|
//! | budget-friendly | 80      |
//! | moderate        | 200     |
//! | expensive       | 500     |
//! | unrecognized    | 150     |
//!
//! The jitter is a whole percentage drawn uniformly from [-20, 20]. The
//! arithmetic is integer-only, so the result is truncated toward zero and
//! always lies within `[base × days × 0.8, base × days × 1.2]`.

use catalog::BudgetRange;
use rand::Rng;

/// Per-day cost used for range labels the catalog does not know
pub const UNKNOWN_RANGE_DAILY_COST: u64 = 150;

/// Maximum jitter, in percent, applied either way
pub const MAX_JITTER_PERCENT: i64 = 20;

/// Per-day base cost for a catalog tier
pub fn base_daily_cost(range: BudgetRange) -> u64 {
    match range {
        BudgetRange::BudgetFriendly => 80,
        BudgetRange::Moderate => 200,
        BudgetRange::Expensive => 500,
    }
}

/// Estimate a trip's cost using the calling thread's RNG.
pub fn estimate_cost(range: BudgetRange, duration_days: u32) -> u64 {
    estimate_cost_with(&mut rand::rng(), range, duration_days)
}

/// Estimate a trip's cost with a caller-supplied RNG (seeded in tests).
pub fn estimate_cost_with<R: Rng + ?Sized>(
    rng: &mut R,
    range: BudgetRange,
    duration_days: u32,
) -> u64 {
    jittered(rng, base_daily_cost(range), duration_days)
}

/// Estimate from a free-text range label; unknown labels cost 150 per day.
pub fn estimate_cost_for_label(label: &str, duration_days: u32) -> u64 {
    let daily = label
        .parse::<BudgetRange>()
        .map(base_daily_cost)
        .unwrap_or(UNKNOWN_RANGE_DAILY_COST);
    jittered(&mut rand::rng(), daily, duration_days)
}

/// Inclusive `(min, max)` an estimate can take
pub fn cost_bounds(range: BudgetRange, duration_days: u32) -> (u64, u64) {
    let total = base_daily_cost(range) * u64::from(duration_days);
    (
        apply_jitter(total, -MAX_JITTER_PERCENT),
        apply_jitter(total, MAX_JITTER_PERCENT),
    )
}

fn jittered<R: Rng + ?Sized>(rng: &mut R, daily: u64, duration_days: u32) -> u64 {
    let percent = rng.random_range(-MAX_JITTER_PERCENT..=MAX_JITTER_PERCENT);
    apply_jitter(daily * u64::from(duration_days), percent)
}

fn apply_jitter(total: u64, percent: i64) -> u64 {
    // percent is within ±MAX_JITTER_PERCENT, so the factor is 80..=120
    let factor = (100 + percent) as u64;
    total * factor / 100
}
