//! Entity values: defenders, enemies and projectiles.
//!
//! These are plain data. All behavior lives in the tick pipeline of
//! [`GameState`](crate::GameState); the only methods here are small predicates.

use crate::types::{Behavior, DefenderKind, EnemyKind, GRID_WIDTH};

/// A planted defender. Owned by the grid cell it occupies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Defender {
    pub kind: DefenderKind,
    pub row: u8,
    pub col: u8,
    pub health: f64,
    /// Simulation time (ms) of the last periodic effect (shot or payout)
    pub last_action_ms: u64,
    /// End of the current chewing window (ms), 0 when not chewing
    pub chewing_until_ms: u64,
}

impl Defender {
    /// Create a defender at full health
    pub fn new(kind: DefenderKind, row: u8, col: u8, now_ms: u64) -> Self {
        Self {
            kind,
            row,
            col,
            health: kind.stats().max_health as f64,
            last_action_ms: now_ms,
            chewing_until_ms: 0,
        }
    }

    pub fn max_health(&self) -> f64 {
        self.kind.stats().max_health as f64
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    /// True while a chomper is digesting and cannot attack
    pub fn is_chewing(&self, now_ms: u64) -> bool {
        self.kind.behavior() == Behavior::MeleeEater && now_ms < self.chewing_until_ms
    }

    /// Check if the periodic effect with the given interval is due
    pub fn is_due(&self, now_ms: u64, interval_ms: u64) -> bool {
        now_ms.saturating_sub(self.last_action_ms) >= interval_ms
    }
}

/// An advancing enemy. Its row never changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub row: u8,
    /// Current column; becomes negative once the enemy crosses the left edge
    pub col: i16,
    pub health: f64,
    /// Time (ms) accumulated towards the next one-cell step
    pub move_progress_ms: u64,
}

impl Enemy {
    /// Create an enemy at full health
    pub fn new(kind: EnemyKind, row: u8, col: i16) -> Self {
        Self {
            kind,
            row,
            col,
            health: kind.stats().max_health as f64,
            move_progress_ms: 0,
        }
    }

    /// Enemy entering at the rightmost column of a row
    pub fn at_entry(kind: EnemyKind, row: u8) -> Self {
        Self::new(kind, row, GRID_WIDTH as i16 - 1)
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    pub fn is_at(&self, row: u8, col: i16) -> bool {
        self.row == row && self.col == col
    }

    /// True once the enemy has walked off the left edge
    pub fn has_breached(&self) -> bool {
        self.col < 0
    }
}

/// A pea flying left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Projectile {
    pub row: u8,
    pub col: i16,
}

impl Projectile {
    pub fn new(row: u8, col: i16) -> Self {
        Self { row, col }
    }

    pub fn is_on_grid(&self) -> bool {
        self.col >= 0 && self.col < GRID_WIDTH as i16
    }
}
