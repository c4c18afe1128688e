use serde::{Deserialize, Serialize};

use super::state::Position;

/// The fixed rectangle of cells the snake lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    /// Check if a position is within the grid bounds
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width as i32 && pos.y >= 0 && pos.y < self.height as i32
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| Position::new(x as i32, y as i32)))
    }

    /// Position as a fraction of the grid size, for layouts that place cells proportionally
    pub fn normalized(&self, pos: Position) -> (f32, f32) {
        (
            pos.x as f32 / self.width as f32,
            pos.y as f32 / self.height as f32,
        )
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::square(20)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_checking() {
        let grid = Grid::square(20);

        assert!(grid.in_bounds(Position::new(0, 0)));
        assert!(grid.in_bounds(Position::new(19, 19)));
        assert!(!grid.in_bounds(Position::new(-1, 0)));
        assert!(!grid.in_bounds(Position::new(0, -1)));
        assert!(!grid.in_bounds(Position::new(20, 0)));
        assert!(!grid.in_bounds(Position::new(0, 20)));
    }

    #[test]
    fn test_rectangular_bounds() {
        let grid = Grid::new(30, 10);
        assert!(grid.in_bounds(Position::new(29, 9)));
        assert!(!grid.in_bounds(Position::new(9, 29)));
    }

    #[test]
    fn test_cells_cover_grid() {
        let grid = Grid::new(4, 3);
        let cells: Vec<_> = grid.cells().collect();

        assert_eq!(cells.len(), grid.cell_count());
        assert_eq!(cells[0], Position::new(0, 0));
        assert_eq!(cells[4], Position::new(0, 1));
        assert!(cells.iter().all(|&c| grid.in_bounds(c)));
    }

    #[test]
    fn test_normalized() {
        let grid = Grid::square(20);
        assert_eq!(grid.normalized(Position::new(5, 10)), (0.25, 0.5));
        assert_eq!(grid.normalized(Position::new(0, 0)), (0.0, 0.0));
    }
}
