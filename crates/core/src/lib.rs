//! Core simulation module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on terminals, input devices, or wall-clock time, making it:
//!
//! - **Deterministic**: Same seed and same commands produce identical games
//! - **Testable**: Every tick phase can be driven step by step in unit tests
//! - **Portable**: Can run in any environment (terminal, headless, benchmarks)
//!
//! # Module Structure
//!
//! - [`grid`]: 9x5 lawn holding at most one defender per cell
//! - [`entities`]: Defender, enemy and projectile values
//! - [`game_state`]: Complete game state and the per-tick pipeline
//! - [`rng`]: Seeded LCG used for spawn rows and kinds
//! - [`spawn`]: Spawn interval and kind weighting schedule
//! - [`snapshot`]: Read-only view handed to renderers
//!
//! # Tick Pipeline
//!
//! [`GameState::step`] runs these phases in order:
//!
//! 1. Advance the clock
//! 2. Expire the transient message and finished chewing windows
//! 3. Move projectiles and resolve impacts
//! 4. Defender attacks (peashooters fire, chompers eat)
//! 5. Spawn due enemies, then let every enemy eat or walk
//! 6. Sunflower payouts
//! 7. Loss check (an enemy crossed the left edge)
//! 8. Purge dead entities
//!
//! # Example
//!
//! ```
//! use tui_lawn_core::{GameState, PlaceOutcome};
//! use tui_lawn_types::{EnemyKind, GameAction};
//!
//! let mut game = GameState::new(12345);
//! game.set_spawning(false);
//!
//! // Plant a peashooter at the starting cursor (row 2, col 1).
//! assert_eq!(game.place_selected(), Ok(PlaceOutcome::Planted));
//! assert_eq!(game.sun(), 200);
//!
//! game.spawn_enemy_at(EnemyKind::Normal, 2, 8).unwrap();
//! for _ in 0..10 {
//!     game.step(200);
//! }
//! assert!(!game.projectiles().is_empty());
//!
//! game.apply_action(GameAction::Quit).unwrap();
//! assert!(game.game_over());
//! ```

pub mod entities;
pub mod game_state;
pub mod grid;
pub mod rng;
pub mod snapshot;
pub mod spawn;

pub use tui_lawn_types as types;

// Re-export commonly used types for convenience
pub use entities::{Defender, Enemy, Projectile};
pub use game_state::{GameState, GameStatus, PlaceOutcome};
pub use grid::{Grid, GridError};
pub use rng::SimpleRng;
pub use snapshot::{CellView, GameSnapshot};
pub use spawn::{pick_enemy_kind, spawn_interval_ms, spawn_weights};
