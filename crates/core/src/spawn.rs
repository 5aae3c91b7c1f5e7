//! Spawn module - enemy arrival schedule and kind weighting
//!
//! Both curves are step functions of elapsed simulation time:
//! - the interval between spawns drops from 6s to 3s once 60s have elapsed
//! - every 45s block moves 0.05 of weight from normal enemies to tougher ones
//!   (one third to cones, two thirds to buckets), capped at 0.3 in total

use crate::rng::SimpleRng;
use crate::types::{
    EnemyKind, BASE_SPAWN_WEIGHTS, SPAWN_INTERVAL_EARLY_MS, SPAWN_INTERVAL_LATE_MS,
    SPAWN_RAMP_AFTER_MS, WEIGHT_SHIFT_BLOCK_MS, WEIGHT_SHIFT_MAX, WEIGHT_SHIFT_STEP,
};

/// Spawn weights at `elapsed_ms`, indexed like [`EnemyKind::ALL`].
///
/// The result is non-negative and sums to 1.
pub fn spawn_weights(elapsed_ms: u64) -> [f64; 3] {
    let [base_normal, base_cone, base_bucket] = BASE_SPAWN_WEIGHTS;

    let blocks = elapsed_ms / WEIGHT_SHIFT_BLOCK_MS;
    let shift = (blocks as f64 * WEIGHT_SHIFT_STEP).min(WEIGHT_SHIFT_MAX);
    let normal = (base_normal - shift).max(base_normal - WEIGHT_SHIFT_MAX);
    let moved = base_normal - normal;

    [
        normal,
        base_cone + moved / 3.0,
        base_bucket + moved * 2.0 / 3.0,
    ]
}

/// Delay until the next spawn, given the time of the current one
pub fn spawn_interval_ms(elapsed_ms: u64) -> u64 {
    if elapsed_ms < SPAWN_RAMP_AFTER_MS {
        SPAWN_INTERVAL_EARLY_MS
    } else {
        SPAWN_INTERVAL_LATE_MS
    }
}

/// Draw an enemy kind from the weights in effect at `elapsed_ms`
pub fn pick_enemy_kind(rng: &mut SimpleRng, elapsed_ms: u64) -> EnemyKind {
    let weights = spawn_weights(elapsed_ms);
    rng.pick_weighted(&weights)
        .map(|i| EnemyKind::ALL[i])
        .unwrap_or(EnemyKind::Normal)
}
