//! TUI Lawn (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_lawn::{core,engine,input,term,types}`
//! and adds the end-of-run [`summary`] and the [`shutdown`] signal flag used by
//! the binary.

pub mod shutdown;
pub mod summary;

pub use tui_lawn_core as core;
pub use tui_lawn_engine as engine;
pub use tui_lawn_input as input;
pub use tui_lawn_term as term;
pub use tui_lawn_types as types;

pub use shutdown::ShutdownFlag;
pub use summary::GameSummary;
