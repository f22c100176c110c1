//! Random helpers over the seeded simulation RNG.

use glam::Vec2;
use rand::Rng;

use holdout_core::types::ArenaBounds;

/// Uniform integer in `[lo, hi]`, inclusive. Returns `lo` when the range is empty.
pub fn roll<R: Rng + ?Sized>(rng: &mut R, lo: i32, hi: i32) -> i32 {
    if hi <= lo {
        return lo;
    }
    rng.gen_range(lo..=hi)
}

/// True with `chance_percent` percent probability.
pub fn roll_percent<R: Rng + ?Sized>(rng: &mut R, chance_percent: i32) -> bool {
    roll(rng, 1, 100) <= chance_percent
}

/// Uniform point inside the playable area.
pub fn random_point<R: Rng + ?Sized>(rng: &mut R, bounds: &ArenaBounds) -> Vec2 {
    let limit = bounds.limit();
    Vec2::new(rng.gen_range(-limit..=limit), rng.gen_range(-limit..=limit))
}
