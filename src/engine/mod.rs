mod handle;

pub use handle::GridMut;

use crate::{Grid, NiceInt, Result};

/// Conway's rule: birth on 3 neighbors, survival on 2 or 3.
pub fn apply_rule(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2 | 3) => true,
        (false, 3) => true,
        _ => false,
    }
}

/// Conway's Game of Life on a torus.
///
/// Owns the current [`Grid`] and replaces it wholesale on every step, so a
/// generation is always computed from a consistent snapshot of the previous one.
pub struct Engine {
    grid: Grid,
    generation: u64,
    width: usize,
    height: usize,
}

impl Engine {
    /// Create a blank field with dimensions `width x height`
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let grid = Grid::new(width, height)?;
        log::debug!("Created {}x{} engine", width, height);
        Ok(Self {
            grid,
            generation: 0,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Handle for seeding cells. It can't replace the grid itself.
    pub fn grid_mut(&mut self) -> GridMut<'_> {
        GridMut::new(&mut self.grid)
    }

    pub fn get_cell(&self, x: usize, y: usize) -> Result<bool> {
        self.grid.get_cell(x, y)
    }

    pub fn set_cell(&mut self, x: usize, y: usize, state: bool) -> Result<()> {
        self.grid.set_cell(x, y, state)
    }

    /// Next generation of the current grid, computed into a fresh one.
    fn next_grid(&self) -> Grid {
        let mut next = self.grid.blank_like();
        for (x, y, alive) in self.grid.cells() {
            let neighbors = self.grid.live_neighbors(x, y);
            next.put(x, y, apply_rule(alive, neighbors));
        }
        next
    }

    fn replace_grid(&mut self, next: Grid) {
        self.grid = next;
        self.generation += 1;
        log::trace!("Generation {} computed", self.generation);
    }

    /// Update the field once
    pub fn step(&mut self) {
        let next = self.next_grid();
        self.replace_grid(next);
    }

    /// Update the field `generations` times
    pub fn run(&mut self, generations: u64) {
        for _ in 0..generations {
            self.step();
        }
    }

    /// Steps until a generation equals its predecessor.
    ///
    /// Returns the generation at which the field stopped changing, or `None`
    /// if it still changed after `max_generations` steps.
    pub fn step_until_stable(&mut self, max_generations: u64) -> Option<u64> {
        for _ in 0..max_generations {
            let next = self.next_grid();
            let changed = next != self.grid;
            self.replace_grid(next);
            if !changed {
                return Some(self.generation);
            }
        }
        None
    }

    /// Clears the field and rewinds to generation 0.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.generation = 0;
        log::debug!("Engine reset");
    }

    pub fn get_generation(&self) -> u64 {
        self.generation
    }

    pub fn get_living_cells(&self) -> usize {
        self.grid.get_living_cells()
    }

    /// Returns multiline string reporting engine stats.
    pub fn stats(&self) -> String {
        format!(
            "Generation: {}\nPopulation: {}\nSize: {}x{}",
            NiceInt::from(self.generation),
            NiceInt::from(self.get_living_cells()),
            self.width,
            self.height,
        )
    }
}
