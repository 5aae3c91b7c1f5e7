//! Fixed-step driver for the simulation.

use std::time::Duration;

use tracing::{debug, info};

use crate::config::DriverConfig;
use crate::core::{GameSnapshot, GameState, GridError};
use crate::types::{GameAction, GameOverReason};

/// What happened during one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    /// Number of commands that changed the state
    pub applied: u32,
    /// Whether the simulation advanced by one tick
    pub stepped: bool,
    pub game_over: bool,
}

/// Owns the game and advances it one fixed tick per frame.
#[derive(Debug, Clone)]
pub struct TickDriver {
    config: DriverConfig,
    state: GameState,
    ticks: u64,
}

impl TickDriver {
    pub fn new(config: DriverConfig) -> Self {
        Self::with_state(config, GameState::new(config.seed()))
    }

    /// Drive an already prepared game
    pub fn with_state(config: DriverConfig, state: GameState) -> Self {
        info!(
            tick_ms = config.tick_ms(),
            seed = config.seed(),
            "tick driver ready"
        );
        Self {
            config,
            state,
            ticks: 0,
        }
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Simulation steps taken so far
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn game_over(&self) -> bool {
        self.state.game_over()
    }

    /// Run one frame: apply each command once, then step unless paused or over.
    ///
    /// A `GridError` means the engine was handed an impossible coordinate and is
    /// not recoverable.
    pub fn frame<I>(&mut self, actions: I) -> Result<FrameReport, GridError>
    where
        I: IntoIterator<Item = GameAction>,
    {
        let mut report = FrameReport::default();

        for action in actions {
            if self.state.apply_action(action)? {
                report.applied += 1;
            }
        }

        if !self.state.paused() && !self.state.game_over() {
            report.stepped = self.state.step(self.config.tick_ms());
            if report.stepped {
                self.ticks += 1;
            }
        }

        report.game_over = self.state.game_over();
        if report.game_over {
            debug!(ticks = self.ticks, score = self.state.score(), "frame ended the game");
        }
        Ok(report)
    }

    /// Time left in the tick budget after spending `spent` on input and stepping
    pub fn sleep_budget(&self, spent: Duration) -> Duration {
        self.config.tick_duration().saturating_sub(spent)
    }

    /// External interruption (Ctrl-C): end the game as a normal transition
    pub fn interrupt(&mut self) {
        self.state.request_quit(GameOverReason::Interrupted);
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.state.snapshot_into(out);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }
}
