//! Machine-readable result of a finished run.

use serde::Serialize;

use crate::engine::TickDriver;

/// Printed as a single JSON line by `tui-lawn --json-summary`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSummary {
    /// `"defeat"`, `"quit"`, `"interrupted"`, or null if the run never ended
    pub reason: Option<&'static str>,
    pub score: u32,
    pub sun: u32,
    pub elapsed_ms: u64,
    pub ticks: u64,
    pub seed: u32,
}

impl GameSummary {
    pub fn from_driver(driver: &TickDriver) -> Self {
        let state = driver.state();
        Self {
            reason: state.game_over_reason().map(|r| r.as_str()),
            score: state.score(),
            sun: state.sun(),
            elapsed_ms: state.elapsed_ms(),
            ticks: driver.tick_count(),
            seed: state.seed(),
        }
    }

    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
