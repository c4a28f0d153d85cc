//! Board-to-pixel geometry.
//!
//! The board is laid out in a fixed pixel arena with square cells. The
//! terminal canvas draws in these pixel units, so everything that puts a cell
//! on screen goes through here.

use super::types::{Cell, Grid};

/// Axis-aligned rectangle in arena pixels, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    /// Same rectangle measured from the bottom edge (canvas y grows upward).
    pub fn flipped(&self, arena_height: u32) -> PixelRect {
        PixelRect {
            y: arena_height.saturating_sub(self.y + self.height),
            ..*self
        }
    }
}

/// A pixel arena split into square cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arena {
    pub width_px: u32,
    pub height_px: u32,
    pub cell_px: u32,
}

impl Arena {
    /// Arena sized to fit `grid` exactly with `cell_px` cells.
    pub fn for_grid(grid: Grid, cell_px: u32) -> Arena {
        Arena {
            width_px: grid.width.max(0) as u32 * cell_px,
            height_px: grid.height.max(0) as u32 * cell_px,
            cell_px,
        }
    }

    pub fn cell_rect(&self, cell: Cell) -> PixelRect {
        PixelRect {
            x: cell.x.max(0) as u32 * self.cell_px,
            y: cell.y.max(0) as u32 * self.cell_px,
            width: self.cell_px,
            height: self.cell_px,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        ARENA_HEIGHT_PX, ARENA_WIDTH_PX, CELL_SIZE_PX, GRID_HEIGHT, GRID_WIDTH,
    };

    fn standard_arena() -> Arena {
        Arena::for_grid(Grid::new(GRID_WIDTH, GRID_HEIGHT), CELL_SIZE_PX)
    }

    #[test]
    fn test_standard_arena_is_600_by_600() {
        let arena = standard_arena();
        assert_eq!(arena.width_px, ARENA_WIDTH_PX);
        assert_eq!(arena.height_px, ARENA_HEIGHT_PX);
        assert_eq!((GRID_WIDTH, GRID_HEIGHT), (30, 30));
    }

    #[test]
    fn test_cell_rect_corners() {
        let arena = standard_arena();
        assert_eq!(
            arena.cell_rect(Cell::new(0, 0)),
            PixelRect {
                x: 0,
                y: 0,
                width: 20,
                height: 20
            }
        );
        assert_eq!(
            arena.cell_rect(Cell::new(29, 29)),
            PixelRect {
                x: 580,
                y: 580,
                width: 20,
                height: 20
            }
        );
    }

    #[test]
    fn test_cell_rects_tile_the_arena() {
        let arena = standard_arena();
        let grid = Grid::new(GRID_WIDTH, GRID_HEIGHT);
        for cell in grid.cells() {
            let rect = arena.cell_rect(cell);
            assert!(rect.x + rect.width <= arena.width_px);
            assert!(rect.y + rect.height <= arena.height_px);
            assert_eq!(rect.x % arena.cell_px, 0);
            assert_eq!(rect.y % arena.cell_px, 0);
        }
    }

    #[test]
    fn test_flipped_measures_from_bottom() {
        let arena = standard_arena();
        let top = arena.cell_rect(Cell::new(3, 0)).flipped(arena.height_px);
        assert_eq!(top.y, 580);
        let bottom = arena.cell_rect(Cell::new(3, 29)).flipped(arena.height_px);
        assert_eq!(bottom.y, 0);
        assert_eq!(bottom.x, 60);
    }

    #[test]
    fn test_for_grid_matches_dimensions() {
        let arena = Arena::for_grid(Grid::new(12, 8), 10);
        assert_eq!(arena.width_px, 120);
        assert_eq!(arena.height_px, 80);
        assert_eq!(
            arena.cell_rect(Cell::new(11, 7)),
            PixelRect {
                x: 110,
                y: 70,
                width: 10,
                height: 10
            }
        );
    }
}
