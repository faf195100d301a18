use rand::Rng;
use rayon::prelude::*;

use super::Cell;

/// Grid is one buffer of the 2D cellular automaton: an owned, contiguous
/// row-major matrix of cells. Dimensions are fixed for its lifetime.
#[derive(Clone, PartialEq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| self.cells[self.get_index(x, y)])
    }

    /// Set cell at position; out-of-range coordinates are ignored
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Flip cell at position; out-of-range coordinates are a no-op
    pub fn toggle(&mut self, x: usize, y: usize) {
        if let Some(cell) = self.get(x, y) {
            self.set(x, y, cell.toggled());
        }
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Count live neighbors using toroidal wrapping (grid wraps like a torus)
    fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        let w = self.width as i32;
        let h = self.height as i32;

        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .map(|(dx, dy)| {
                let nx = ((x as i32 + dx) % w + w) % w;
                let ny = ((y as i32 + dy) % h + h) % h;
                self.cells[self.get_index(nx as usize, ny as usize)]
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Write the next generation of `self` into `next`, reading only from
    /// `self`. Rows are computed in parallel; both grids must have the
    /// same dimensions.
    pub fn step_into(&self, next: &mut Grid) {
        debug_assert_eq!(self.dimensions(), next.dimensions());

        next.cells
            .par_chunks_mut(self.width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, cell) in row.iter_mut().enumerate() {
                    let neighbors = self.count_live_neighbors(x, y);
                    *cell = self.cells[self.get_index(x, y)].evolve(neighbors);
                }
            });
    }

    /// Set every cell to the given state
    pub fn fill(&mut self, cell: Cell) {
        self.cells.iter_mut().for_each(|c| *c = cell);
    }

    /// Randomize grid (50% chance of alive)
    pub fn randomize(&mut self) {
        let mut rng = rand::rng();
        self.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random_bool(0.5) {
                Cell::Alive
            } else {
                Cell::Dead
            };
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_all_dead() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.dimensions(), (4, 3));
        assert!(grid.cells().iter().all(|c| !c.is_alive()));
    }

    #[test]
    fn test_get_set_respect_bounds() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 2, Cell::Alive);
        assert_eq!(grid.get(1, 2), Some(Cell::Alive));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 3), None);
        // Out-of-range set must not panic or change anything
        grid.set(10, 10, Cell::Alive);
        assert_eq!(grid.cells().iter().filter(|c| c.is_alive()).count(), 1);
    }

    #[test]
    fn test_toggle_out_of_range_is_noop() {
        let mut grid = Grid::new(2, 2);
        grid.toggle(5, 5);
        assert!(grid.cells().iter().all(|c| !c.is_alive()));
    }

    #[test]
    fn test_full_neighborhood_counts_eight() {
        let mut grid = Grid::new(5, 5);
        for y in 1..4 {
            for x in 1..4 {
                grid.set(x, y, Cell::Alive);
            }
        }
        assert_eq!(grid.count_live_neighbors(2, 2), 8);
    }

    // The boundary policy is toroidal: a corner cell's neighborhood wraps
    // to the opposite edges.
    #[test]
    fn test_neighbor_count_wraps_at_corner() {
        let mut grid = Grid::new(5, 5);
        grid.set(0, 0, Cell::Alive);
        assert_eq!(grid.count_live_neighbors(4, 4), 1);
        assert_eq!(grid.count_live_neighbors(0, 4), 1);
        assert_eq!(grid.count_live_neighbors(4, 0), 1);
        assert_eq!(grid.count_live_neighbors(1, 1), 1);
        assert_eq!(grid.count_live_neighbors(2, 2), 0);
    }

    #[test]
    fn test_neighbor_count_wraps_across_edge() {
        let mut grid = Grid::new(5, 5);
        grid.set(0, 2, Cell::Alive);
        assert_eq!(grid.count_live_neighbors(4, 2), 1);
        assert_eq!(grid.count_live_neighbors(4, 1), 1);
        assert_eq!(grid.count_live_neighbors(4, 3), 1);
        assert_eq!(grid.count_live_neighbors(3, 2), 0);
    }

    #[test]
    fn test_step_into_advances_blinker() {
        let mut current = Grid::new(5, 5);
        let mut next = Grid::new(5, 5);
        for x in 1..4 {
            current.set(x, 2, Cell::Alive);
        }
        current.step_into(&mut next);
        for y in 1..4 {
            assert_eq!(next.get(2, y), Some(Cell::Alive), "vertical phase at y={y}");
        }
        assert_eq!(next.cells().iter().filter(|c| c.is_alive()).count(), 3);
        // Source buffer is read-only during the step
        assert_eq!(current.cells().iter().filter(|c| c.is_alive()).count(), 3);
    }

    #[test]
    fn test_fill_clears_every_cell() {
        let mut grid = Grid::new(3, 3);
        grid.randomize();
        grid.fill(Cell::Dead);
        assert!(grid.cells().iter().all(|c| !c.is_alive()));
    }
}
