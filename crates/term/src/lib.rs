//! Terminal renderer for the lawn.
//!
//! The game is drawn into a plain character framebuffer first and only then
//! flushed to the terminal, so the view itself stays pure and testable.
//!
//! - [`fb`]: styled character framebuffer
//! - [`game_view`]: snapshot to framebuffer layout
//! - [`renderer`]: alternate screen handling and diff flushing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_lawn_core as core;
pub use tui_lawn_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport, FOOTER_ROW, GRID_ORIGIN_ROW, MIN_VIEWPORT};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
