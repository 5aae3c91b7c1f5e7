//! Driver configuration.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::types::{DEFAULT_TICK_MS, MIN_TICK_MS};

/// Construction parameters of a run: tick length and spawn seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverConfig {
    tick_ms: u32,
    seed: u32,
}

impl DriverConfig {
    /// Build a config, flooring `tick_ms` at [`MIN_TICK_MS`].
    ///
    /// Without an explicit seed one is derived from the system clock.
    pub fn new(tick_ms: u32, seed: Option<u32>) -> Self {
        Self {
            tick_ms: tick_ms.max(MIN_TICK_MS),
            seed: seed.unwrap_or_else(clock_seed),
        }
    }

    pub fn tick_ms(&self) -> u32 {
        self.tick_ms
    }

    pub fn tick_seconds(&self) -> f64 {
        self.tick_ms as f64 / 1000.0
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(self.tick_ms as u64)
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_MS, None)
    }
}

fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    (nanos as u32) ^ ((nanos >> 32) as u32) ^ std::process::id()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_is_floored() {
        assert_eq!(DriverConfig::new(0, Some(1)).tick_ms(), MIN_TICK_MS);
        assert_eq!(DriverConfig::new(9, Some(1)).tick_ms(), 10);
        assert_eq!(DriverConfig::new(250, Some(1)).tick_ms(), 250);
    }

    #[test]
    fn explicit_seed_is_kept() {
        let config = DriverConfig::new(200, Some(77));
        assert_eq!(config.seed(), 77);
        assert_eq!(config.tick_duration(), Duration::from_millis(200));
        assert!((config.tick_seconds() - 0.2).abs() < 1e-12);
    }
}
