use crate::types::{DefenderKind, EnemyKind, GameOverReason, GRID_HEIGHT, GRID_WIDTH};

/// What a single grid cell shows, in priority order Enemy > Defender > Projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellView {
    #[default]
    Empty,
    Projectile,
    Defender(DefenderKind),
    Enemy(EnemyKind),
}

impl CellView {
    pub fn symbol(self) -> char {
        match self {
            CellView::Empty => '.',
            CellView::Projectile => '*',
            CellView::Defender(kind) => kind.symbol(),
            CellView::Enemy(kind) => kind.symbol(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot {
    pub cells: [[CellView; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
    /// (row, col)
    pub cursor: (u8, u8),
    pub sun: u32,
    pub score: u32,
    pub selected: DefenderKind,
    pub message: Option<&'static str>,
    pub paused: bool,
    pub game_over: Option<GameOverReason>,
    pub elapsed_ms: u64,
    pub defender_count: u16,
    pub enemy_count: u16,
    pub projectile_count: u16,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Top line: resources, score, selection and the control legend
    pub fn status_line(&self) -> String {
        format!(
            "Sun:{} | Score:{} | Sel:{} | 1:P 2:S 3:W 4:C | WASD move, Space plant, R dig, P pause, Q quit",
            self.sun,
            self.score,
            self.selected.symbol()
        )
    }

    /// Bottom line: final result, or the live message plus pause marker
    pub fn footer(&self) -> String {
        if let Some(reason) = self.game_over {
            return format!("{}! Final score: {}", reason.label(), self.score);
        }

        match (self.message, self.paused) {
            (Some(msg), true) => format!("{} [Paused]", msg),
            (Some(msg), false) => msg.to_string(),
            (None, true) => "[Paused]".to_string(),
            (None, false) => String::new(),
        }
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            cells: [[CellView::Empty; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
            cursor: (0, 0),
            sun: 0,
            score: 0,
            selected: DefenderKind::Peashooter,
            message: None,
            paused: false,
            game_over: None,
            elapsed_ms: 0,
            defender_count: 0,
            enemy_count: 0,
            projectile_count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_variants() {
        let mut snap = GameSnapshot::default();
        assert_eq!(snap.footer(), "");

        snap.paused = true;
        assert_eq!(snap.footer(), "[Paused]");

        snap.message = Some("cell occupied");
        assert_eq!(snap.footer(), "cell occupied [Paused]");

        snap.paused = false;
        assert_eq!(snap.footer(), "cell occupied");

        snap.score = 7;
        snap.game_over = Some(GameOverReason::Defeat);
        assert_eq!(snap.footer(), "Game Over! Final score: 7");
    }

    #[test]
    fn clear_resets_to_default() {
        let mut snap = GameSnapshot::default();
        assert!(snap.cells.iter().flatten().all(|c| *c == CellView::Empty));
        assert_eq!(snap.selected, DefenderKind::Peashooter);

        snap.cells[2][3] = CellView::Enemy(EnemyKind::Cone);
        snap.sun = 300;
        snap.message = Some("cell occupied");
        snap.game_over = Some(GameOverReason::Quit);
        snap.enemy_count = 1;
        snap.clear();
        assert_eq!(snap, GameSnapshot::default());
    }

    #[test]
    fn status_line_mentions_selection() {
        let mut snap = GameSnapshot::default();
        snap.sun = 125;
        snap.selected = DefenderKind::WallNut;
        let line = snap.status_line();
        assert!(line.starts_with("Sun:125 | Score:0 | Sel:W"));
    }
}
