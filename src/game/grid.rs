use rand::Rng;

use super::consts::*;
use super::Bounds;

/// Brick liveness matrix. A brick has no identity beyond its (row, col).
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cells: [[bool; GRID_COLS]; GRID_ROWS],
}

impl Grid {
    /// A grid with every brick dead
    pub fn empty() -> Self {
        Self {
            cells: [[false; GRID_COLS]; GRID_ROWS],
        }
    }

    /// Overwrite every cell: alive with probability 2/3, dead otherwise
    pub fn seed<R: Rng>(&mut self, rng: &mut R) {
        for row in self.cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = rng.gen_range(0..3) != 0;
            }
        }
    }

    pub fn is_cleared(&self) -> bool {
        self.cells.iter().flatten().all(|alive| !alive)
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().flatten().filter(|alive| **alive).count()
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        self.cells[row][col] = alive;
    }

    pub fn kill(&mut self, row: usize, col: usize) {
        self.set(row, col, false);
    }

    /// Alive bricks in row-major order
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..GRID_ROWS).flat_map(move |row| {
            (0..GRID_COLS)
                .filter(move |&col| self.is_alive(row, col))
                .map(move |col| (row, col))
        })
    }

    /// Layout of a cell in arena space. Rows grow downward from the top.
    pub fn cell_bounds(row: usize, col: usize) -> Bounds {
        Bounds::new(
            ARENA_MIN + col as f32 * (BRICK_WIDTH + BRICK_GAP) + GRID_MARGIN,
            GRID_TOP - row as f32 * (BRICK_HEIGHT + BRICK_GAP),
            BRICK_WIDTH,
            BRICK_HEIGHT,
        )
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rstest::rstest;

    #[test]
    fn test_empty_is_cleared() {
        let grid = Grid::empty();
        assert!(grid.is_cleared());
        assert_eq!(grid.alive_count(), 0);
    }

    #[test]
    fn test_single_alive_cell_not_cleared() {
        let mut grid = Grid::empty();
        grid.set(5, 11, true);
        assert!(!grid.is_cleared());
        grid.kill(5, 11);
        assert!(grid.is_cleared());
    }

    #[test]
    fn test_seed_density_near_two_thirds() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::empty();
        let mut alive = 0;
        let rounds = 200;
        for _ in 0..rounds {
            grid.seed(&mut rng);
            alive += grid.alive_count();
        }
        let ratio = alive as f64 / (rounds * GRID_ROWS * GRID_COLS) as f64;
        assert!((ratio - 2.0 / 3.0).abs() < 0.02, "ratio {ratio}");
    }

    #[test]
    fn test_seed_overwrites_previous_contents() {
        let mut grid = Grid::empty();
        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLS {
                grid.set(row, col, true);
            }
        }
        let mut rng = StdRng::seed_from_u64(1);
        grid.seed(&mut rng);
        assert!(grid.alive_count() < GRID_ROWS * GRID_COLS);
    }

    #[test]
    fn test_alive_cells_row_major() {
        let mut grid = Grid::empty();
        grid.set(2, 1, true);
        grid.set(0, 7, true);
        grid.set(2, 0, true);
        let cells: Vec<_> = grid.alive_cells().collect();
        assert_eq!(cells, vec![(0, 7), (2, 0), (2, 1)]);
    }

    #[test]
    fn test_kill_only_touches_one_cell() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut grid = Grid::empty();
        grid.seed(&mut rng);
        let (row, col) = grid.alive_cells().next().unwrap();
        let before = grid.alive_count();
        grid.kill(row, col);
        assert!(!grid.is_alive(row, col));
        assert_eq!(grid.alive_count(), before - 1);
        for (r, c) in grid.alive_cells() {
            assert!(grid.is_alive(r, c));
        }
    }

    #[rstest]
    #[case(0, 0, -0.9, 0.7)]
    #[case(0, 11, 0.86, 0.7)]
    #[case(5, 0, -0.9, 0.3)]
    fn test_cell_bounds(#[case] row: usize, #[case] col: usize, #[case] left: f32, #[case] bottom: f32) {
        let b = Grid::cell_bounds(row, col);
        assert!((b.left - left).abs() < 1e-5, "left {}", b.left);
        assert!((b.bottom - bottom).abs() < 1e-5, "bottom {}", b.bottom);
        assert_eq!(b.width, BRICK_WIDTH);
        assert_eq!(b.height, BRICK_HEIGHT);
    }

    #[test]
    fn test_layout_stays_inside_arena() {
        let last = Grid::cell_bounds(GRID_ROWS - 1, GRID_COLS - 1);
        assert!(last.right() <= ARENA_MAX + 1e-5);
        let first = Grid::cell_bounds(0, 0);
        assert!(first.top() < ARENA_MAX);
    }
}
