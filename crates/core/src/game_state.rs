//! Game state module - the authoritative simulation
//!
//! This module ties together the grid, the entity collections, the economy and the
//! spawn schedule. It owns every piece of mutable game state and exposes command
//! operations (cursor, selection, planting, digging, pause, quit) plus the per-tick
//! [`GameState::step`] pipeline.

use tracing::{debug, info};

use crate::entities::{Defender, Enemy, Projectile};
use crate::grid::{Grid, GridError};
use crate::rng::SimpleRng;
use crate::snapshot::{CellView, GameSnapshot};
use crate::spawn::{pick_enemy_kind, spawn_interval_ms};
use crate::types::*;

/// Result of a planting attempt.
///
/// Only `Planted` changes the game; every other variant is a soft failure that
/// leaves state untouched apart from the transient message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceOutcome {
    Planted,
    CellOccupied,
    InsufficientFunds,
    CooldownActive,
}

impl PlaceOutcome {
    pub fn is_planted(self) -> bool {
        self == PlaceOutcome::Planted
    }

    /// Message shown to the player for a soft failure
    pub fn message(self) -> Option<&'static str> {
        match self {
            PlaceOutcome::Planted => None,
            PlaceOutcome::CellOccupied => Some("cell occupied"),
            PlaceOutcome::InsufficientFunds => Some("insufficient sun"),
            PlaceOutcome::CooldownActive => Some("cooldown active"),
        }
    }
}

/// Compact status summary for status lines and logs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameStatus {
    pub sun: u32,
    pub score: u32,
    pub selected: DefenderKind,
    pub elapsed_ms: u64,
    pub paused: bool,
    pub game_over: Option<GameOverReason>,
    pub defenders: usize,
    pub enemies: usize,
    pub projectiles: usize,
}

/// Outcome of a projectile reaching a cell
enum Strike {
    Miss,
    Hit,
    Kill(EnemyKind),
}

/// Damage the first enemy standing in (row, col); killed enemies are removed.
fn strike(enemies: &mut Vec<Enemy>, row: u8, col: i16, damage: f64) -> Strike {
    let Some(idx) = enemies.iter().position(|e| e.is_at(row, col)) else {
        return Strike::Miss;
    };
    enemies[idx].health -= damage;
    if enemies[idx].is_alive() {
        return Strike::Hit;
    }
    Strike::Kill(enemies.remove(idx).kind)
}

fn any_enemy_right_of(enemies: &[Enemy], row: u8, col: u8) -> bool {
    enemies.iter().any(|e| e.row == row && e.col > col as i16)
}

#[inline(always)]
fn kind_index(kind: DefenderKind) -> usize {
    kind.slot() as usize - 1
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    enemies: Vec<Enemy>,
    projectiles: Vec<Projectile>,
    sun: u32,
    score: u32,
    selected: DefenderKind,
    cursor_row: u8,
    cursor_col: u8,
    elapsed_ms: u64,
    paused: bool,
    game_over: Option<GameOverReason>,
    message: Option<&'static str>,
    message_expires_ms: u64,
    /// Earliest planting time per defender kind (slot order)
    ready_at_ms: [u64; 4],
    next_spawn_ms: u64,
    spawning: bool,
    rng: SimpleRng,
    seed: u32,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            grid: Grid::new(),
            enemies: Vec::new(),
            projectiles: Vec::new(),
            sun: SUN_START,
            score: 0,
            selected: DefenderKind::Peashooter,
            cursor_row: CURSOR_START.0,
            cursor_col: CURSOR_START.1,
            elapsed_ms: 0,
            paused: false,
            game_over: None,
            message: None,
            message_expires_ms: 0,
            ready_at_ms: [0; 4],
            next_spawn_ms: FIRST_SPAWN_MS,
            spawning: true,
            rng: SimpleRng::new(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn sun(&self) -> u32 {
        self.sun
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn selected(&self) -> DefenderKind {
        self.selected
    }

    /// Cursor position as (row, col)
    pub fn cursor(&self) -> (u8, u8) {
        (self.cursor_row, self.cursor_col)
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over.is_some()
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over
    }

    /// Transient message, if one is live
    pub fn message(&self) -> Option<&'static str> {
        self.message
    }

    pub fn next_spawn_ms(&self) -> u64 {
        self.next_spawn_ms
    }

    /// Earliest time `kind` can be planted again
    pub fn ready_at_ms(&self, kind: DefenderKind) -> u64 {
        self.ready_at_ms[kind_index(kind)]
    }

    pub fn status(&self) -> GameStatus {
        GameStatus {
            sun: self.sun,
            score: self.score,
            selected: self.selected,
            elapsed_ms: self.elapsed_ms,
            paused: self.paused,
            game_over: self.game_over,
            defenders: self.grid.len(),
            enemies: self.enemies.len(),
            projectiles: self.projectiles.len(),
        }
    }

    // --- Setup hooks (scenarios, tests, tooling) --------------------------

    pub fn set_sun(&mut self, sun: u32) {
        self.sun = sun;
    }

    /// Enable or disable the scheduled enemy spawns
    pub fn set_spawning(&mut self, enabled: bool) {
        self.spawning = enabled;
    }

    /// Put an enemy on a lawn row.
    ///
    /// `col` may be one past either edge (-1 or `GRID_WIDTH`), the columns an
    /// enemy can occupy during play.
    pub fn spawn_enemy_at(
        &mut self,
        kind: EnemyKind,
        row: u8,
        col: i16,
    ) -> Result<(), GridError> {
        if row >= GRID_HEIGHT || !(-1..=GRID_WIDTH as i16).contains(&col) {
            return Err(GridError::OutOfBounds {
                row: row as i16,
                col,
                width: GRID_WIDTH,
                height: GRID_HEIGHT,
            });
        }
        self.enemies.push(Enemy::new(kind, row, col));
        Ok(())
    }

    /// Plant a defender directly, bypassing cost and cooldown
    pub fn insert_defender(&mut self, defender: Defender) -> Result<(), GridError> {
        self.grid.set(defender)
    }

    // --- Commands -----------------------------------------------------------

    /// Move the cursor one cell, clamped to the grid
    pub fn move_cursor(&mut self, direction: Direction) {
        let (dr, dc) = direction.delta();
        self.cursor_row = (self.cursor_row as i16 + dr as i16).clamp(0, GRID_HEIGHT as i16 - 1) as u8;
        self.cursor_col = (self.cursor_col as i16 + dc as i16).clamp(0, GRID_WIDTH as i16 - 1) as u8;
    }

    /// Select the defender kind bound to `slot`; unknown slots are ignored
    pub fn select_slot(&mut self, slot: u8) -> bool {
        match DefenderKind::from_slot(slot) {
            Some(kind) => {
                self.selected = kind;
                true
            }
            None => false,
        }
    }

    /// Plant the selected kind at the cursor.
    ///
    /// Either the whole placement happens (sun deducted, defender planted,
    /// cooldown armed) or nothing but the message changes.
    pub fn place_selected(&mut self) -> Result<PlaceOutcome, GridError> {
        let kind = self.selected;
        let (row, col) = (self.cursor_row, self.cursor_col);
        let stats = kind.stats();

        let outcome = if self.grid.get(row as i16, col as i16)?.is_some() {
            PlaceOutcome::CellOccupied
        } else if self.sun < stats.cost {
            PlaceOutcome::InsufficientFunds
        } else if self.elapsed_ms < self.ready_at_ms[kind_index(kind)] {
            PlaceOutcome::CooldownActive
        } else {
            PlaceOutcome::Planted
        };

        if let Some(text) = outcome.message() {
            debug!(kind = kind.as_str(), row, col, reason = text, "placement rejected");
            self.show_message(text);
            return Ok(outcome);
        }

        self.grid.set(Defender::new(kind, row, col, self.elapsed_ms))?;
        self.sun -= stats.cost;
        self.ready_at_ms[kind_index(kind)] = self.elapsed_ms + stats.cooldown_ms;
        debug!(kind = kind.as_str(), row, col, sun = self.sun, "defender planted");
        Ok(PlaceOutcome::Planted)
    }

    /// Remove the defender under the cursor. No refund.
    pub fn dig_up(&mut self) -> Result<Option<Defender>, GridError> {
        let removed = self
            .grid
            .remove(self.cursor_row as i16, self.cursor_col as i16)?;
        if let Some(d) = removed {
            debug!(kind = d.kind.as_str(), row = d.row, col = d.col, "defender dug up");
        }
        Ok(removed)
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// End the game with `reason`. The first reason sticks.
    pub fn request_quit(&mut self, reason: GameOverReason) {
        if self.game_over.is_some() {
            return;
        }
        info!(reason = reason.as_str(), score = self.score, "game over");
        self.game_over = Some(reason);
    }

    /// Apply a game action. Returns whether the state changed.
    ///
    /// Once the game is over every action is ignored.
    pub fn apply_action(&mut self, action: GameAction) -> Result<bool, GridError> {
        if self.game_over.is_some() {
            return Ok(false);
        }

        match action {
            GameAction::MoveCursor(direction) => {
                let before = self.cursor();
                self.move_cursor(direction);
                Ok(self.cursor() != before)
            }
            GameAction::Select(slot) => Ok(self.select_slot(slot)),
            GameAction::Place => Ok(self.place_selected()?.is_planted()),
            GameAction::Dig => Ok(self.dig_up()?.is_some()),
            GameAction::Pause => {
                self.toggle_pause();
                Ok(true)
            }
            GameAction::Quit => {
                self.request_quit(GameOverReason::Quit);
                Ok(true)
            }
        }
    }

    fn show_message(&mut self, text: &'static str) {
        self.message = Some(text);
        self.message_expires_ms = self.elapsed_ms + MESSAGE_DURATION_MS;
    }

    // --- Tick pipeline --------------------------------------------------------

    /// Advance the simulation by `dt_ms`.
    ///
    /// Does nothing while paused or after game over. Returns whether the state
    /// advanced. Phase order matters: each phase sees the mutations of the
    /// phases before it.
    pub fn step(&mut self, dt_ms: u32) -> bool {
        if self.paused || self.game_over.is_some() {
            return false;
        }

        let dt = dt_ms as u64;
        self.elapsed_ms += dt;

        self.expire_timers();
        self.move_projectiles();
        self.defender_attacks();
        self.spawn_due_enemy();
        self.advance_enemies(dt);
        self.generate_sun();
        self.check_loss();
        self.purge_dead();
        true
    }

    fn expire_timers(&mut self) {
        let now = self.elapsed_ms;
        if self.message.is_some() && now >= self.message_expires_ms {
            self.message = None;
        }

        for d in self.grid.iter_mut() {
            if d.chewing_until_ms != 0 && now >= d.chewing_until_ms {
                d.chewing_until_ms = 0;
            }
        }
    }

    fn move_projectiles(&mut self) {
        let enemies = &mut self.enemies;
        let score = &mut self.score;

        self.projectiles.retain_mut(|p| {
            p.col += PROJECTILE_SPEED_CELLS_PER_TICK as i16;
            if !p.is_on_grid() {
                return false;
            }
            match strike(enemies, p.row, p.col, PROJECTILE_DAMAGE) {
                Strike::Miss => true,
                Strike::Hit => false,
                Strike::Kill(kind) => {
                    *score += kind.stats().score;
                    debug!(kind = kind.as_str(), row = p.row, col = p.col, "enemy shot down");
                    false
                }
            }
        });
    }

    fn defender_attacks(&mut self) {
        let now = self.elapsed_ms;

        for (row, col) in self.grid.positions() {
            let Ok(Some(d)) = self.grid.get_mut(row as i16, col as i16) else {
                continue;
            };

            match d.kind.behavior() {
                Behavior::RangedShooter => {
                    if !d.is_due(now, PEASHOOTER_INTERVAL_MS)
                        || !any_enemy_right_of(&self.enemies, row, col)
                    {
                        continue;
                    }
                    let shot = Projectile::new(row, col as i16 + 1);
                    if shot.is_on_grid() {
                        self.projectiles.push(shot);
                    }
                    d.last_action_ms = now;
                }
                Behavior::MeleeEater => {
                    if d.is_chewing(now) {
                        continue;
                    }
                    let Some(idx) = self.enemies.iter().position(|e| e.is_at(row, col as i16))
                    else {
                        continue;
                    };
                    let eaten = self.enemies.remove(idx);
                    self.score += eaten.kind.stats().score;
                    d.chewing_until_ms = now + CHOMPER_CHEW_MS;
                    debug!(kind = eaten.kind.as_str(), row, col, "enemy eaten");
                }
                Behavior::PassiveGenerator | Behavior::Blocker => {}
            }
        }
    }

    fn spawn_due_enemy(&mut self) {
        if !self.spawning || self.elapsed_ms < self.next_spawn_ms {
            return;
        }

        let row = self.rng.next_range(GRID_HEIGHT as u32) as u8;
        let kind = pick_enemy_kind(&mut self.rng, self.elapsed_ms);
        self.enemies.push(Enemy::at_entry(kind, row));
        self.next_spawn_ms = self.elapsed_ms + spawn_interval_ms(self.elapsed_ms);
        debug!(
            kind = kind.as_str(),
            row,
            next_spawn_ms = self.next_spawn_ms,
            "enemy spawned"
        );
    }

    fn advance_enemies(&mut self, dt: u64) {
        for enemy in &mut self.enemies {
            if enemy.has_breached() {
                continue;
            }

            // An enemy sharing a cell with a defender eats instead of walking.
            let engaged = match self.grid.get_mut(enemy.row as i16, enemy.col) {
                Ok(Some(d)) => {
                    d.health -= enemy.kind.stats().dps * dt as f64 / 1000.0;
                    Some(!d.is_alive())
                }
                _ => None,
            };
            match engaged {
                Some(true) => {
                    if let Ok(Some(d)) = self.grid.remove(enemy.row as i16, enemy.col) {
                        info!(kind = d.kind.as_str(), row = d.row, col = d.col, "defender lost");
                    }
                    continue;
                }
                Some(false) => continue,
                None => {}
            }

            enemy.move_progress_ms += dt;
            while enemy.move_progress_ms >= ENEMY_MOVE_INTERVAL_MS {
                enemy.move_progress_ms -= ENEMY_MOVE_INTERVAL_MS;
                enemy.col -= 1;
                if enemy.has_breached() || self.grid.is_occupied(enemy.row as i16, enemy.col) {
                    break;
                }
            }
            // Movement left over after stopping early is dropped.
            enemy.move_progress_ms %= ENEMY_MOVE_INTERVAL_MS;
        }
    }

    fn generate_sun(&mut self) {
        let now = self.elapsed_ms;
        for d in self.grid.iter_mut() {
            if d.kind.behavior() == Behavior::PassiveGenerator
                && d.is_due(now, SUNFLOWER_INTERVAL_MS)
            {
                self.sun = self.sun.saturating_add(SUNFLOWER_YIELD);
                d.last_action_ms = now;
            }
        }
    }

    fn check_loss(&mut self) {
        if self.enemies.iter().any(Enemy::has_breached) {
            self.request_quit(GameOverReason::Defeat);
        }
    }

    fn purge_dead(&mut self) {
        self.enemies.retain(Enemy::is_alive);
        self.grid.purge_dead();
    }

    // --- Queries --------------------------------------------------------------

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.clear();

        for p in &self.projectiles {
            if p.is_on_grid() {
                out.cells[p.row as usize][p.col as usize] = CellView::Projectile;
            }
        }
        for d in self.grid.iter() {
            out.cells[d.row as usize][d.col as usize] = CellView::Defender(d.kind);
        }
        for e in &self.enemies {
            if e.col < 0 || e.col >= GRID_WIDTH as i16 {
                continue;
            }
            let cell = &mut out.cells[e.row as usize][e.col as usize];
            // First enemy in a cell wins, matching projectile targeting.
            if !matches!(cell, CellView::Enemy(_)) {
                *cell = CellView::Enemy(e.kind);
            }
        }

        out.cursor = self.cursor();
        out.sun = self.sun;
        out.score = self.score;
        out.selected = self.selected;
        out.message = self.message;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.elapsed_ms = self.elapsed_ms;
        out.defender_count = self.grid.len() as u16;
        out.enemy_count = self.enemies.len() as u16;
        out.projectile_count = self.projectiles.len() as u16;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: u32 = 200;

    fn quiet_state() -> GameState {
        let mut state = GameState::new(12345);
        state.set_spawning(false);
        state
    }

    fn run(state: &mut GameState, ticks: u32) {
        for _ in 0..ticks {
            state.step(TICK);
        }
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert_eq!(state.sun, SUN_START);
        assert_eq!(state.score, 0);
        assert_eq!(state.selected, DefenderKind::Peashooter);
        assert_eq!(state.cursor(), (2, 1));
        assert_eq!(state.elapsed_ms, 0);
        assert_eq!(state.next_spawn_ms, FIRST_SPAWN_MS);
        assert!(!state.paused);
        assert!(state.game_over.is_none());
        assert!(state.message.is_none());
        assert!(state.grid.is_empty());
    }

    #[test]
    fn test_cursor_clamps_to_grid() {
        let mut state = GameState::new(1);
        for _ in 0..20 {
            state.move_cursor(Direction::Up);
            state.move_cursor(Direction::Left);
        }
        assert_eq!(state.cursor(), (0, 0));

        for _ in 0..20 {
            state.move_cursor(Direction::Down);
            state.move_cursor(Direction::Right);
        }
        assert_eq!(state.cursor(), (GRID_HEIGHT - 1, GRID_WIDTH - 1));
    }

    #[test]
    fn test_select_invalid_slot_is_noop() {
        let mut state = GameState::new(1);
        assert!(state.select_slot(4));
        assert_eq!(state.selected, DefenderKind::Chomper);
        assert!(!state.select_slot(0));
        assert!(!state.select_slot(7));
        assert_eq!(state.selected, DefenderKind::Chomper);
    }

    #[test]
    fn test_place_deducts_cost_and_arms_cooldown() {
        let mut state = quiet_state();
        run(&mut state, 3);

        assert_eq!(state.place_selected(), Ok(PlaceOutcome::Planted));
        assert_eq!(state.sun, 200);
        let d = state.grid.get(2, 1).unwrap().unwrap();
        assert_eq!(d.kind, DefenderKind::Peashooter);
        assert_eq!(d.health, 300.0);
        assert_eq!(d.last_action_ms, 600);
        assert_eq!(state.ready_at_ms(DefenderKind::Peashooter), 1600);
    }

    #[test]
    fn test_place_rejections_in_order() {
        let mut state = quiet_state();
        assert!(state.place_selected().unwrap().is_planted());

        // Occupied wins over everything else.
        state.set_sun(0);
        assert_eq!(state.place_selected(), Ok(PlaceOutcome::CellOccupied));
        assert_eq!(state.message, Some("cell occupied"));

        state.move_cursor(Direction::Right);
        assert_eq!(state.place_selected(), Ok(PlaceOutcome::InsufficientFunds));
        assert_eq!(state.message, Some("insufficient sun"));

        state.set_sun(1000);
        assert_eq!(state.place_selected(), Ok(PlaceOutcome::CooldownActive));
        assert_eq!(state.message, Some("cooldown active"));
        assert_eq!(state.sun, 1000);
        assert_eq!(state.grid.len(), 1);

        run(&mut state, 5);
        assert_eq!(state.place_selected(), Ok(PlaceOutcome::Planted));
        assert_eq!(state.sun, 900);
    }

    #[test]
    fn test_cooldown_is_per_kind() {
        let mut state = quiet_state();
        assert!(state.place_selected().unwrap().is_planted());

        state.move_cursor(Direction::Right);
        state.select_slot(2);
        assert_eq!(state.place_selected(), Ok(PlaceOutcome::Planted));
    }

    #[test]
    fn test_dig_up_has_no_refund() {
        let mut state = quiet_state();
        state.place_selected().unwrap();
        assert_eq!(state.sun, 200);

        let removed = state.dig_up().unwrap();
        assert_eq!(removed.map(|d| d.kind), Some(DefenderKind::Peashooter));
        assert_eq!(state.sun, 200);
        assert!(state.grid.is_empty());
        assert_eq!(state.dig_up(), Ok(None));
    }

    #[test]
    fn test_step_noop_when_paused() {
        let mut state = GameState::new(1);
        state.toggle_pause();
        assert!(!state.step(TICK));
        assert_eq!(state.elapsed_ms, 0);

        state.toggle_pause();
        assert!(state.step(TICK));
        assert_eq!(state.elapsed_ms, 200);
    }

    #[test]
    fn test_first_spawn_at_six_seconds() {
        let mut state = GameState::new(42);
        run(&mut state, 29);
        assert!(state.enemies.is_empty());

        run(&mut state, 1);
        assert_eq!(state.enemies.len(), 1);
        let e = state.enemies[0];
        assert_eq!(e.col, GRID_WIDTH as i16 - 1);
        assert!(e.row < GRID_HEIGHT);
        assert_eq!(state.next_spawn_ms, 12_000);
    }

    #[test]
    fn test_spawn_interval_shortens_after_a_minute() {
        let mut state = GameState::new(42);
        state.elapsed_ms = 60_000;
        state.next_spawn_ms = 60_200;
        state.step(TICK);
        assert_eq!(state.next_spawn_ms, 63_200);
    }

    #[test]
    fn test_projectile_hits_first_enemy_only() {
        let mut state = quiet_state();
        state.spawn_enemy_at(EnemyKind::Normal, 0, 3).unwrap();
        state.spawn_enemy_at(EnemyKind::Normal, 0, 3).unwrap();
        state.projectiles.push(Projectile::new(0, 2));

        state.step(TICK);
        assert!(state.projectiles.is_empty());
        assert_eq!(state.enemies[0].health, 180.0);
        assert_eq!(state.enemies[1].health, 200.0);
    }

    #[test]
    fn test_projectile_leaving_grid_is_discarded() {
        let mut state = quiet_state();
        state.projectiles.push(Projectile::new(1, GRID_WIDTH as i16 - 1));
        state.step(TICK);
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_projectile_kill_awards_score() {
        let mut state = quiet_state();
        state.spawn_enemy_at(EnemyKind::Cone, 4, 5).unwrap();
        state.enemies[0].health = 20.0;
        state.projectiles.push(Projectile::new(4, 4));

        state.step(TICK);
        assert!(state.enemies.is_empty());
        assert_eq!(state.score, 2);
    }

    #[test]
    fn test_shooter_kills_and_refires_in_one_tick() {
        let mut state = quiet_state();
        state
            .insert_defender(Defender::new(DefenderKind::Peashooter, 0, 0, 0))
            .unwrap();
        state.elapsed_ms = PEASHOOTER_INTERVAL_MS;
        state.projectiles.push(Projectile::new(0, 1));
        state.spawn_enemy_at(EnemyKind::Normal, 0, 2).unwrap();
        state.enemies[0].health = 20.0;
        state.spawn_enemy_at(EnemyKind::Normal, 0, 5).unwrap();

        state.step(TICK);

        // The old pea finishes the first enemy, then the shooter fires at the second.
        assert_eq!(state.score, 1);
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.enemies[0].col, 5);
        assert_eq!(state.projectiles, vec![Projectile::new(0, 1)]);
        let shooter = state.grid.get(0, 0).unwrap().unwrap();
        assert_eq!(shooter.last_action_ms, PEASHOOTER_INTERVAL_MS + TICK as u64);
    }

    #[test]
    fn test_spawn_enemy_at_rejects_off_lawn_positions() {
        let mut state = quiet_state();
        let err = state.spawn_enemy_at(EnemyKind::Normal, 7, 3).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds {
                row: 7,
                col: 3,
                width: GRID_WIDTH,
                height: GRID_HEIGHT,
            }
        );
        assert!(state.spawn_enemy_at(EnemyKind::Cone, 0, 10).is_err());
        assert!(state.spawn_enemy_at(EnemyKind::Cone, 0, -2).is_err());
        assert!(state.enemies.is_empty());

        // One column past either edge is a position enemies reach in play.
        state.spawn_enemy_at(EnemyKind::Normal, 4, -1).unwrap();
        state.spawn_enemy_at(EnemyKind::Normal, 4, 9).unwrap();
        assert_eq!(state.enemies.len(), 2);
        assert_eq!(state.snapshot().enemy_count, 2);
    }

    #[test]
    fn test_shooter_without_target_holds_fire() {
        let mut state = quiet_state();
        state.place_selected().unwrap();
        // Enemy on the same row but to the left does not count.
        state.spawn_enemy_at(EnemyKind::Normal, 2, 0).unwrap();
        run(&mut state, 4);
        assert!(state.projectiles.is_empty());
        assert_eq!(state.grid.get(2, 1).unwrap().unwrap().last_action_ms, 0);
    }

    #[test]
    fn test_shooter_in_last_column_resets_without_projectile() {
        let mut state = quiet_state();
        state
            .insert_defender(Defender::new(DefenderKind::Peashooter, 1, 8, 0))
            .unwrap();
        // An enemy at column 9 sits off the grid but is still "to the right".
        state.spawn_enemy_at(EnemyKind::Normal, 1, 9).unwrap();
        run(&mut state, 4);

        assert!(state.projectiles.is_empty());
        assert_eq!(state.grid.get(1, 8).unwrap().unwrap().last_action_ms, 800);
    }

    #[test]
    fn test_sunflower_pays_every_four_seconds() {
        let mut state = quiet_state();
        state.select_slot(2);
        state.place_selected().unwrap();
        assert_eq!(state.sun, 250);

        run(&mut state, 19);
        assert_eq!(state.sun, 250);
        run(&mut state, 1);
        assert_eq!(state.sun, 275);
        run(&mut state, 20);
        assert_eq!(state.sun, 300);
    }

    #[test]
    fn test_enemy_walks_one_cell_per_interval() {
        let mut state = quiet_state();
        state.spawn_enemy_at(EnemyKind::Normal, 0, 8).unwrap();

        run(&mut state, 17);
        assert_eq!(state.enemies[0].col, 8);
        assert_eq!(state.enemies[0].move_progress_ms, 3400);
        run(&mut state, 1);
        assert_eq!(state.enemies[0].col, 7);
        assert_eq!(state.enemies[0].move_progress_ms, 0);
    }

    #[test]
    fn test_large_step_moves_several_cells_but_stops_at_defender() {
        let mut state = quiet_state();
        state
            .insert_defender(Defender::new(DefenderKind::WallNut, 0, 5, 0))
            .unwrap();
        state.spawn_enemy_at(EnemyKind::Normal, 0, 8).unwrap();

        // Enough time for four cells, but the wall-nut at column 5 stops it.
        state.step(4 * ENEMY_MOVE_INTERVAL_MS as u32);
        assert_eq!(state.enemies[0].col, 5);
        assert!(state.enemies[0].move_progress_ms < ENEMY_MOVE_INTERVAL_MS);
    }

    #[test]
    fn test_enemy_eats_defender_and_resumes() {
        let mut state = quiet_state();
        state
            .insert_defender(Defender::new(DefenderKind::Sunflower, 0, 4, 0))
            .unwrap();
        state.spawn_enemy_at(EnemyKind::Bucket, 0, 4).unwrap();

        // 200 health at 40/s takes 5s = 25 ticks.
        run(&mut state, 24);
        assert!(state.grid.is_occupied(0, 4));
        assert_eq!(state.enemies[0].move_progress_ms, 0);
        run(&mut state, 1);
        assert!(!state.grid.is_occupied(0, 4));
        assert_eq!(state.enemies[0].col, 4);

        run(&mut state, 18);
        assert_eq!(state.enemies[0].col, 3);
    }

    #[test]
    fn test_snapshot_cell_priority() {
        let mut state = quiet_state();
        state
            .insert_defender(Defender::new(DefenderKind::WallNut, 1, 1, 0))
            .unwrap();
        state
            .insert_defender(Defender::new(DefenderKind::Chomper, 1, 2, 0))
            .unwrap();
        state.spawn_enemy_at(EnemyKind::Cone, 1, 2).unwrap();
        state.spawn_enemy_at(EnemyKind::Bucket, 1, 2).unwrap();
        state.projectiles.push(Projectile::new(1, 1));
        state.projectiles.push(Projectile::new(1, 3));

        let snap = state.snapshot();
        assert_eq!(snap.cells[1][1], CellView::Defender(DefenderKind::WallNut));
        assert_eq!(snap.cells[1][2], CellView::Enemy(EnemyKind::Cone));
        assert_eq!(snap.cells[1][3], CellView::Projectile);
        assert_eq!(snap.cells[0][0], CellView::Empty);
        assert_eq!(snap.enemy_count, 2);
    }

    #[test]
    fn test_apply_action_ignores_commands_after_game_over() {
        let mut state = quiet_state();
        state.request_quit(GameOverReason::Quit);

        assert_eq!(state.apply_action(GameAction::Place), Ok(false));
        assert!(state.grid.is_empty());
        assert_eq!(state.apply_action(GameAction::Pause), Ok(false));
        assert!(!state.paused);

        state.request_quit(GameOverReason::Interrupted);
        assert_eq!(state.apply_action(GameAction::Quit), Ok(false));
        assert_eq!(state.game_over_reason(), Some(GameOverReason::Quit));
    }
}
