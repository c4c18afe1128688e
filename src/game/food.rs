use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{grid::Grid, state::Position};

/// Picks the cell the next food item appears on
pub trait FoodPlacer {
    /// Returns a cell of `grid` not contained in `occupied`, or `None` if every cell is taken
    fn place(&mut self, grid: &Grid, occupied: &[Position]) -> Option<Position>;
}

/// Uniform rejection sampling over the whole grid.
///
/// Draws x and y independently and retries on occupied cells. After
/// `4 * cell_count` misses it stops sampling and picks uniformly among the
/// free cells instead, so a nearly full board still terminates.
pub struct RandomFoodPlacer {
    rng: StdRng,
}

impl RandomFoodPlacer {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn pick_free_cell(&mut self, grid: &Grid, occupied: &[Position]) -> Option<Position> {
        let free: Vec<Position> = grid.cells().filter(|c| !occupied.contains(c)).collect();
        if free.is_empty() {
            return None;
        }
        Some(free[self.rng.gen_range(0..free.len())])
    }
}

impl FoodPlacer for RandomFoodPlacer {
    fn place(&mut self, grid: &Grid, occupied: &[Position]) -> Option<Position> {
        if grid.cell_count() == 0 {
            return None;
        }

        for _ in 0..grid.cell_count() * 4 {
            let x = self.rng.gen_range(0..grid.width) as i32;
            let y = self.rng.gen_range(0..grid.height) as i32;
            let pos = Position::new(x, y);

            if !occupied.contains(&pos) {
                return Some(pos);
            }
        }

        log::debug!("food sampling exhausted, falling back to free-cell scan");
        self.pick_free_cell(grid, occupied)
    }
}

impl Default for RandomFoodPlacer {
    fn default() -> Self {
        Self::new()
    }
}
