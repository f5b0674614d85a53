use crate::{Grid, Pattern, Result};
use rand::Rng;
use std::ops::Deref;

/// Mutable view of an engine's grid.
///
/// Allows changing individual cells but not swapping the grid out, so the
/// engine's dimensions always match its grid.
pub struct GridMut<'a> {
    grid: &'a mut Grid,
}

impl<'a> GridMut<'a> {
    pub(super) fn new(grid: &'a mut Grid) -> Self {
        Self { grid }
    }

    pub fn set_cell(&mut self, x: usize, y: usize, state: bool) -> Result<()> {
        self.grid.set_cell(x, y, state)
    }

    pub fn set_pattern<P: AsRef<[u8]>>(&mut self, pattern: &[P], offset_x: i64, offset_y: i64) {
        self.grid.set_pattern(pattern, offset_x, offset_y);
    }

    pub fn place(&mut self, pattern: &Pattern, anchor_x: i64, anchor_y: i64) -> Result<()> {
        pattern.place(self.grid, anchor_x, anchor_y)
    }

    pub fn place_centered(&mut self, pattern: &Pattern) -> Result<()> {
        pattern.place_centered(self.grid)
    }

    pub fn clear(&mut self) {
        self.grid.clear();
    }

    pub fn randomize<R: Rng + ?Sized>(&mut self, density: f64, rng: &mut R) -> Result<()> {
        self.grid.randomize(density, rng)
    }

    pub fn randomize_seeded(&mut self, density: f64, seed: Option<u64>) -> Result<()> {
        self.grid.randomize_seeded(density, seed)
    }
}

impl Deref for GridMut<'_> {
    type Target = Grid;

    fn deref(&self) -> &Grid {
        &*self.grid
    }
}
