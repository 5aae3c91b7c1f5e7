//! Core types module - shared data structures and constants
//!
//! This module defines the catalogs and tuning values used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core simulation, terminal rendering, input mapping).
//!
//! # Lawn Dimensions
//!
//! - **Width**: 9 columns (indexed 0-8, enemies enter at column 8)
//! - **Height**: 5 rows (indexed 0-4)
//! - **Cursor start**: row 2, column 1
//!
//! # Timing Constants
//!
//! All simulation time is tracked in integer milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TICK_MS` | 200 | Default fixed timestep |
//! | `MIN_TICK_MS` | 10 | Floor applied to configured tick lengths |
//! | `PEASHOOTER_INTERVAL_MS` | 800 | Minimum time between two shots |
//! | `SUNFLOWER_INTERVAL_MS` | 4000 | Time between two sun payouts |
//! | `CHOMPER_CHEW_MS` | 4000 | Chewing window after eating an enemy |
//! | `ENEMY_MOVE_INTERVAL_MS` | 3600 | Time an enemy needs to cross one cell |
//! | `MESSAGE_DURATION_MS` | 2000 | Lifetime of a transient message |
//!
//! # Spawn Schedule
//!
//! The first enemy arrives at 6s. Enemies then arrive every 6s, or every 3s once
//! 60s have elapsed. Every 45s block shifts 0.05 of spawn weight away from the
//! normal enemy (capped at 0.3 in total).
//!
//! # Examples
//!
//! ```
//! use tui_lawn_types::{DefenderKind, EnemyKind, Direction, GRID_WIDTH};
//!
//! let kind = DefenderKind::from_slot(1).unwrap();
//! assert_eq!(kind, DefenderKind::Peashooter);
//! assert_eq!(kind.stats().cost, 100);
//!
//! assert_eq!(EnemyKind::Cone.stats().max_health, 400);
//! assert_eq!(Direction::Left.delta(), (0, -1));
//! assert_eq!(GRID_WIDTH, 9);
//! ```

/// Lawn width in cells (9 columns)
pub const GRID_WIDTH: u8 = 9;

/// Lawn height in cells (5 rows)
pub const GRID_HEIGHT: u8 = 5;

/// Total number of cells on the lawn
pub const GRID_CELLS: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

/// Default fixed timestep in milliseconds
pub const DEFAULT_TICK_MS: u32 = 200;

/// Smallest tick length the driver accepts
pub const MIN_TICK_MS: u32 = 10;

/// Cells a projectile travels per tick
pub const PROJECTILE_SPEED_CELLS_PER_TICK: i8 = 1;

/// Damage dealt by one projectile impact
pub const PROJECTILE_DAMAGE: f64 = 20.0;

/// Minimum time between two peashooter shots
pub const PEASHOOTER_INTERVAL_MS: u64 = 800;

/// Time between two sunflower payouts
pub const SUNFLOWER_INTERVAL_MS: u64 = 4000;

/// Sun produced by one sunflower payout
pub const SUNFLOWER_YIELD: u32 = 25;

/// Chewing window after a chomper eats an enemy
pub const CHOMPER_CHEW_MS: u64 = 4000;

/// Time an enemy needs to advance one cell
pub const ENEMY_MOVE_INTERVAL_MS: u64 = 3600;

/// Starting sun balance
pub const SUN_START: u32 = 300;

/// Lifetime of a transient user-facing message
pub const MESSAGE_DURATION_MS: u64 = 2000;

/// Time of the first enemy spawn
pub const FIRST_SPAWN_MS: u64 = 6000;

/// Spawn interval before the ramp kicks in
pub const SPAWN_INTERVAL_EARLY_MS: u64 = 6000;

/// Spawn interval once `SPAWN_RAMP_AFTER_MS` has elapsed
pub const SPAWN_INTERVAL_LATE_MS: u64 = 3000;

/// Elapsed time after which spawns speed up
pub const SPAWN_RAMP_AFTER_MS: u64 = 60_000;

/// Length of one difficulty block for the spawn weights
pub const WEIGHT_SHIFT_BLOCK_MS: u64 = 45_000;

/// Weight moved away from the normal enemy per block
pub const WEIGHT_SHIFT_STEP: f64 = 0.05;

/// Upper bound on the total weight shift
pub const WEIGHT_SHIFT_MAX: f64 = 0.3;

/// Spawn weights at time zero, indexed like [`EnemyKind::ALL`]
pub const BASE_SPAWN_WEIGHTS: [f64; 3] = [0.6, 0.3, 0.1];

/// Cursor start position (row, col)
pub const CURSOR_START: (u8, u8) = (2, 1);


/// Behavior category of a defender
///
/// All type-specific logic in the simulation branches on this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Behavior {
    /// Fires projectiles down its row
    RangedShooter,
    /// Periodically produces sun
    PassiveGenerator,
    /// Does nothing but soak damage
    Blocker,
    /// Eats an enemy standing in its own cell, then chews
    MeleeEater,
}

/// Static attributes of a defender kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefenderStats {
    pub cost: u32,
    pub cooldown_ms: u64,
    pub max_health: u32,
    pub behavior: Behavior,
}

/// Static attributes of an enemy kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyStats {
    pub max_health: u32,
    /// Damage per second dealt to a defender sharing the enemy's cell
    pub dps: f64,
    /// Score awarded when the enemy is defeated
    pub score: u32,
}

const DEFENDER_TABLE: [DefenderStats; 4] = [
    DefenderStats {
        cost: 100,
        cooldown_ms: 1000,
        max_health: 300,
        behavior: Behavior::RangedShooter,
    },
    DefenderStats {
        cost: 50,
        cooldown_ms: 1000,
        max_health: 200,
        behavior: Behavior::PassiveGenerator,
    },
    DefenderStats {
        cost: 50,
        cooldown_ms: 2000,
        max_health: 1200,
        behavior: Behavior::Blocker,
    },
    DefenderStats {
        cost: 150,
        cooldown_ms: 7000,
        max_health: 300,
        behavior: Behavior::MeleeEater,
    },
];

const ENEMY_TABLE: [EnemyStats; 3] = [
    EnemyStats {
        max_health: 200,
        dps: 20.0,
        score: 1,
    },
    EnemyStats {
        max_health: 400,
        dps: 30.0,
        score: 2,
    },
    EnemyStats {
        max_health: 700,
        dps: 40.0,
        score: 3,
    },
];

/// The four plantable defender kinds
///
/// - **Peashooter** (`P`): shoots at enemies to its right
/// - **Sunflower** (`S`): generates sun
/// - **WallNut** (`W`): high-health blocker
/// - **Chomper** (`C`): eats an enemy in its cell, then chews for a while
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefenderKind {
    Peashooter,
    Sunflower,
    WallNut,
    Chomper,
}

impl DefenderKind {
    /// All kinds in slot order
    pub const ALL: [DefenderKind; 4] = [
        DefenderKind::Peashooter,
        DefenderKind::Sunflower,
        DefenderKind::WallNut,
        DefenderKind::Chomper,
    ];

    /// Map a selection slot (1-based) to a kind
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_lawn_types::DefenderKind;
    ///
    /// assert_eq!(DefenderKind::from_slot(3), Some(DefenderKind::WallNut));
    /// assert_eq!(DefenderKind::from_slot(9), None);
    /// ```
    pub fn from_slot(slot: u8) -> Option<Self> {
        match slot {
            1 => Some(DefenderKind::Peashooter),
            2 => Some(DefenderKind::Sunflower),
            3 => Some(DefenderKind::WallNut),
            4 => Some(DefenderKind::Chomper),
            _ => None,
        }
    }

    /// Selection slot (1-based) of this kind
    pub fn slot(self) -> u8 {
        self.index() as u8 + 1
    }

    #[inline(always)]
    fn index(self) -> usize {
        match self {
            DefenderKind::Peashooter => 0,
            DefenderKind::Sunflower => 1,
            DefenderKind::WallNut => 2,
            DefenderKind::Chomper => 3,
        }
    }

    /// Static attribute record for this kind
    pub fn stats(self) -> &'static DefenderStats {
        &DEFENDER_TABLE[self.index()]
    }

    pub fn behavior(self) -> Behavior {
        self.stats().behavior
    }

    /// Single-character map symbol
    pub fn symbol(self) -> char {
        match self {
            DefenderKind::Peashooter => 'P',
            DefenderKind::Sunflower => 'S',
            DefenderKind::WallNut => 'W',
            DefenderKind::Chomper => 'C',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DefenderKind::Peashooter => "peashooter",
            DefenderKind::Sunflower => "sunflower",
            DefenderKind::WallNut => "wall-nut",
            DefenderKind::Chomper => "chomper",
        }
    }
}

/// The three enemy kinds, from weakest to toughest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Normal,
    Cone,
    Bucket,
}

impl EnemyKind {
    /// All kinds, in the same order as [`BASE_SPAWN_WEIGHTS`]
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Normal, EnemyKind::Cone, EnemyKind::Bucket];

    #[inline(always)]
    fn index(self) -> usize {
        match self {
            EnemyKind::Normal => 0,
            EnemyKind::Cone => 1,
            EnemyKind::Bucket => 2,
        }
    }

    /// Static attribute record for this kind
    pub fn stats(self) -> &'static EnemyStats {
        &ENEMY_TABLE[self.index()]
    }

    pub fn symbol(self) -> char {
        match self {
            EnemyKind::Normal => 'z',
            EnemyKind::Cone => 'Z',
            EnemyKind::Bucket => 'B',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EnemyKind::Normal => "normal",
            EnemyKind::Cone => "cone",
            EnemyKind::Bucket => "bucket",
        }
    }
}

/// Cursor movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// (row, col) offset of one step in this direction
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Commands that can be applied to the game state
///
/// Each key press maps to at most one action; the tick driver forwards
/// them to the engine once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the placement cursor one cell
    MoveCursor(Direction),
    /// Select the defender kind in a slot (1-based)
    Select(u8),
    /// Plant the selected kind at the cursor
    Place,
    /// Remove the defender at the cursor (no refund)
    Dig,
    /// Toggle pause state
    Pause,
    /// End the game
    Quit,
}

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOverReason {
    /// An enemy crossed the left edge of the lawn
    Defeat,
    /// The player quit
    Quit,
    /// The process was interrupted (Ctrl-C)
    Interrupted,
}

impl GameOverReason {
    /// Label used in the final footer line
    pub fn label(self) -> &'static str {
        match self {
            GameOverReason::Defeat => "Game Over",
            GameOverReason::Quit => "Quit",
            GameOverReason::Interrupted => "Interrupted",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameOverReason::Defeat => "defeat",
            GameOverReason::Quit => "quit",
            GameOverReason::Interrupted => "interrupted",
        }
    }
}
