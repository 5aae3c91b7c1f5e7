//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom:
//!
//! ```text
//! Sun:300 | Score:0 | Sel:P | 1:P 2:S 3:W 4:C | WASD move, ...
//!  .  .  .  .  .  .  .  .  .
//!  .  .  .  .  .  .  .  .  .
//!  . [.] .  .  .  .  .  .  .
//!  .  .  .  .  .  .  .  .  .
//!  .  .  .  .  .  .  .  .  .
//!
//! insufficient sun
//! ```

use crate::core::{CellView, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{DefenderKind, EnemyKind, GameOverReason, GRID_HEIGHT, GRID_WIDTH};

/// Terminal columns used by one lawn cell
pub const CELL_W: u16 = 3;

/// Screen row of the first lawn row
pub const GRID_ORIGIN_ROW: u16 = 1;

/// Screen row of the message / final score line
pub const FOOTER_ROW: u16 = GRID_ORIGIN_ROW + GRID_HEIGHT as u16 + 1;

/// Smallest viewport that shows the whole lawn and footer
pub const MIN_VIEWPORT: Viewport = Viewport {
    width: GRID_WIDTH as u16 * CELL_W,
    height: FOOTER_ROW + 1,
};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BG: Rgb = Rgb::new(0, 0, 0);
const TEXT: Rgb = Rgb::new(220, 220, 220);

/// Lawn renderer, anchored at the top-left of the viewport.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView {
    /// Blank columns left of every line.
    margin_x: u16,
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_margin_x(mut self, margin_x: u16) -> Self {
        self.margin_x = margin_x;
        self
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path apart from the status and footer
    /// strings. Callers can reuse a framebuffer across frames and only resize
    /// when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        self.draw_status(fb, snap);

        // The final frame has no cursor.
        let cursor = if snap.game_over.is_none() {
            Some(snap.cursor)
        } else {
            None
        };

        for row in 0..GRID_HEIGHT {
            for col in 0..GRID_WIDTH {
                let view = snap.cells[row as usize][col as usize];
                let selected = cursor == Some((row, col));
                self.draw_cell(fb, row, col, view, selected);
            }
        }

        self.draw_footer(fb, snap);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_status(&self, fb: &mut FrameBuffer, snap: &GameSnapshot) {
        let label = CellStyle::fg(TEXT).bold();
        let sun = CellStyle::fg(Rgb::new(250, 210, 60)).bold();

        let mut x = fb.put_str(self.margin_x, 0, "Sun:", label);
        x = fb.put_u32(x, 0, snap.sun, sun);
        x = fb.put_str(x, 0, " | Score:", label);
        x = fb.put_u32(x, 0, snap.score, label);
        let rest = snap.status_line();
        // Everything after the score is fixed text.
        if let Some(idx) = rest.find(" | Sel:") {
            fb.put_str(x, 0, &rest[idx..], CellStyle::fg(TEXT));
        }
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, row: u8, col: u8, view: CellView, selected: bool) {
        let x = self.margin_x + col as u16 * CELL_W;
        let y = GRID_ORIGIN_ROW + row as u16;

        let (open, close) = if selected { ('[', ']') } else { (' ', ' ') };
        let bracket = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
        fb.put_char(x, y, open, bracket);
        fb.put_char(x + 1, y, view.symbol(), cell_style(view));
        fb.put_char(x + 2, y, close, bracket);
    }

    fn draw_footer(&self, fb: &mut FrameBuffer, snap: &GameSnapshot) {
        let style = match snap.game_over {
            Some(GameOverReason::Defeat) => CellStyle::fg(Rgb::new(230, 70, 70)).bold(),
            Some(_) => CellStyle::fg(TEXT).bold(),
            None if snap.message.is_some() => CellStyle::fg(Rgb::new(250, 210, 60)),
            None => CellStyle::fg(TEXT).dim(),
        };
        fb.put_str(self.margin_x, FOOTER_ROW, &snap.footer(), style);
    }
}

fn cell_style(view: CellView) -> CellStyle {
    let fg = match view {
        CellView::Empty => return CellStyle::fg(Rgb::new(90, 90, 100)).dim(),
        CellView::Projectile => Rgb::new(140, 230, 90),
        CellView::Defender(kind) => match kind {
            DefenderKind::Peashooter => Rgb::new(80, 200, 80),
            DefenderKind::Sunflower => Rgb::new(250, 210, 60),
            DefenderKind::WallNut => Rgb::new(190, 140, 80),
            DefenderKind::Chomper => Rgb::new(180, 100, 220),
        },
        CellView::Enemy(kind) => match kind {
            EnemyKind::Normal => Rgb::new(200, 200, 200),
            EnemyKind::Cone => Rgb::new(255, 150, 50),
            EnemyKind::Bucket => Rgb::new(150, 170, 200),
        },
    };
    CellStyle {
        fg,
        bg: BG,
        bold: matches!(view, CellView::Enemy(_)),
        dim: false,
    }
}
