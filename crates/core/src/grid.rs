//! Grid module - the lawn defenders are planted on
//!
//! The grid is a 9x5 surface where each cell holds at most one defender.
//! Uses a flat array for cache locality and allocation-free iteration.
//! Coordinates: (row, col) where row ranges 0..4 (top to bottom), col ranges 0..8
//! (left to right). Enemies and projectiles are not stored here; they carry their
//! own coordinates and may share a cell with a defender.

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::entities::Defender;
use crate::types::{GRID_CELLS, GRID_HEIGHT, GRID_WIDTH};

/// Invalid grid access.
///
/// The engine clamps every coordinate it derives from input, so this error
/// signals a defect rather than a recoverable condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the {width}x{height} grid")]
    OutOfBounds {
        row: i16,
        col: i16,
        width: u8,
        height: u8,
    },
}

/// The lawn - 9 columns x 5 rows of optional defenders
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Row-major cells (row * WIDTH + col)
    cells: [Option<Defender>; GRID_CELLS],
}

impl Grid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_CELLS],
        }
    }

    #[inline(always)]
    fn index(row: i16, col: i16) -> Result<usize, GridError> {
        if !Self::in_bounds(row, col) {
            return Err(GridError::OutOfBounds {
                row,
                col,
                width: GRID_WIDTH,
                height: GRID_HEIGHT,
            });
        }
        Ok((row as usize) * (GRID_WIDTH as usize) + (col as usize))
    }

    #[inline(always)]
    fn in_bounds(row: i16, col: i16) -> bool {
        row >= 0 && row < GRID_HEIGHT as i16 && col >= 0 && col < GRID_WIDTH as i16
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Check if (row, col) addresses a cell of this grid
    pub fn contains(&self, row: i16, col: i16) -> bool {
        Self::in_bounds(row, col)
    }

    /// Get the defender at (row, col), if any
    pub fn get(&self, row: i16, col: i16) -> Result<Option<&Defender>, GridError> {
        Self::index(row, col).map(|idx| self.cells[idx].as_ref())
    }

    pub fn get_mut(&mut self, row: i16, col: i16) -> Result<Option<&mut Defender>, GridError> {
        Self::index(row, col).map(|idx| self.cells[idx].as_mut())
    }

    /// Check if (row, col) is inside the grid and occupied
    pub fn is_occupied(&self, row: i16, col: i16) -> bool {
        matches!(self.get(row, col), Ok(Some(_)))
    }

    /// Store a defender at its own position, replacing any occupant.
    ///
    /// Callers are expected to check occupancy first.
    pub fn set(&mut self, defender: Defender) -> Result<(), GridError> {
        let idx = Self::index(defender.row as i16, defender.col as i16)?;
        self.cells[idx] = Some(defender);
        Ok(())
    }

    /// Clear the cell at (row, col), returning the previous occupant
    pub fn remove(&mut self, row: i16, col: i16) -> Result<Option<Defender>, GridError> {
        Self::index(row, col).map(|idx| self.cells[idx].take())
    }

    /// Copy of every planted defender in row-major order.
    ///
    /// The snapshot is stack-allocated and detached from the grid, so callers
    /// can iterate it while mutating the grid.
    pub fn all_defenders(&self) -> ArrayVec<Defender, GRID_CELLS> {
        self.cells.iter().flatten().copied().collect()
    }

    /// Row-major positions of every occupied cell
    pub fn positions(&self) -> ArrayVec<(u8, u8), GRID_CELLS> {
        self.cells
            .iter()
            .flatten()
            .map(|d| (d.row, d.col))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Defender> {
        self.cells.iter().flatten()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Defender> {
        self.cells.iter_mut().flatten()
    }

    /// Number of planted defenders
    pub fn len(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }

    /// Remove every defender with health <= 0, returning how many were removed
    pub fn purge_dead(&mut self) -> usize {
        let mut removed = 0;
        for cell in &mut self.cells {
            if matches!(cell, Some(d) if d.health <= 0.0) {
                *cell = None;
                removed += 1;
            }
        }
        removed
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DefenderKind;

    #[test]
    fn test_grid_index_calculation() {
        assert_eq!(Grid::index(0, 0), Ok(0));
        assert_eq!(Grid::index(0, 8), Ok(8));
        assert_eq!(Grid::index(1, 0), Ok(9));
        assert_eq!(Grid::index(4, 8), Ok(44));
        assert!(Grid::index(-1, 0).is_err());
        assert!(Grid::index(0, 9).is_err());
        assert!(Grid::index(5, 0).is_err());
    }

    #[test]
    fn test_set_then_get() {
        let mut grid = Grid::new();
        grid.set(Defender::new(DefenderKind::WallNut, 3, 4, 0)).unwrap();

        let d = grid.get(3, 4).unwrap().unwrap();
        assert_eq!(d.kind, DefenderKind::WallNut);
        assert_eq!(grid.cells[3 * 9 + 4].map(|d| d.kind), Some(DefenderKind::WallNut));
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn test_set_overwrites_silently() {
        let mut grid = Grid::new();
        grid.set(Defender::new(DefenderKind::Peashooter, 1, 1, 0)).unwrap();
        grid.set(Defender::new(DefenderKind::Chomper, 1, 1, 0)).unwrap();

        assert_eq!(grid.len(), 1);
        assert_eq!(
            grid.get(1, 1).unwrap().map(|d| d.kind),
            Some(DefenderKind::Chomper)
        );
    }

    #[test]
    fn test_purge_dead_keeps_living() {
        let mut grid = Grid::new();
        let mut dead = Defender::new(DefenderKind::Sunflower, 0, 0, 0);
        dead.health = 0.0;
        grid.set(dead).unwrap();
        grid.set(Defender::new(DefenderKind::Sunflower, 0, 1, 0)).unwrap();

        assert_eq!(grid.purge_dead(), 1);
        assert!(!grid.is_occupied(0, 0));
        assert!(grid.is_occupied(0, 1));
    }
}
