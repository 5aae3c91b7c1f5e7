//! Tick driver - turns wall-clock ticks into simulation steps.
//!
//! The driver owns the [`GameState`](tui_lawn_core::GameState) and knows the fixed
//! tick length. Once per tick the run loop hands it the key commands collected
//! since the previous tick; the driver applies them, steps the simulation unless
//! it is paused or over, and tells the loop how long to sleep.
//!
//! Nothing in here touches a terminal or sleeps, so the pacing rules can be
//! tested with synthetic durations.

pub mod config;
pub mod driver;

pub use tui_lawn_core as core;
pub use tui_lawn_types as types;

pub use config::DriverConfig;
pub use driver::{FrameReport, TickDriver};
