use crate::{Error, Result};
use rand::Rng;
use std::fmt;

/// Fixed-size field of cells whose edges are stitched together.
///
/// Cells are stored row-major: the cell `(x, y)` lives at `x + y * width`.
/// Direct access is bounds-checked; only neighbor lookups wrap around.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<bool>,
    width: usize,
    height: usize,
}

impl Grid {
    const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
        (-1, -1),
        (0, -1),
        (1, -1),
        (-1, 0),
        (1, 0),
        (-1, 1),
        (0, 1),
        (1, 1),
    ];

    /// Creates a blank grid with all cells dead.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = width
            .checked_mul(height)
            .filter(|_| width != 0 && height != 0)
            .ok_or(Error::InvalidDimension { width, height })?;
        Ok(Self {
            cells: vec![false; len],
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

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn index(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x: i64::try_from(x).unwrap_or(i64::MAX),
                y: i64::try_from(y).unwrap_or(i64::MAX),
                width: self.width,
                height: self.height,
            });
        }
        Ok(x + y * self.width)
    }

    pub fn get_cell(&self, x: usize, y: usize) -> Result<bool> {
        Ok(self.cells[self.index(x, y)?])
    }

    pub fn set_cell(&mut self, x: usize, y: usize, state: bool) -> Result<()> {
        let idx = self.index(x, y)?;
        self.cells[idx] = state;
        Ok(())
    }

    /// Number of alive cells among the 8 neighbors of `(x, y)`, wrapping
    /// around the edges of the grid.
    pub fn count_neighbors(&self, x: usize, y: usize) -> Result<u8> {
        self.index(x, y)?;
        Ok(self.live_neighbors(x, y))
    }

    /// `(x, y)` must be in bounds.
    pub(crate) fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let (w, h) = (self.width as isize, self.height as isize);
        let count = Self::NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dx, dy)| {
                // rem_euclid keeps the wrapped coordinate non-negative
                let nx = (x as isize + dx).rem_euclid(w) as usize;
                let ny = (y as isize + dy).rem_euclid(h) as usize;
                self.cells[nx + ny * self.width]
            })
            .count();
        count as u8
    }

    /// Blank grid with the same dimensions, skipping validation.
    pub(crate) fn blank_like(&self) -> Self {
        Self {
            cells: vec![false; self.cells.len()],
            width: self.width,
            height: self.height,
        }
    }

    /// `(x, y)` must be in bounds.
    pub(crate) fn put(&mut self, x: usize, y: usize, state: bool) {
        self.cells[x + y * self.width] = state;
    }

    /// Population of the grid. Always a full scan.
    pub fn get_living_cells(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Fills the grid with random cells drawn from `rng`.
    ///
    /// `density` - probability of a cell being alive, in `[0.0, 1.0]`
    pub fn randomize<R: Rng + ?Sized>(&mut self, density: f64, rng: &mut R) -> Result<()> {
        if !(0.0..=1.0).contains(&density) {
            return Err(Error::InvalidDensity(density));
        }
        for cell in self.cells.iter_mut() {
            *cell = rng.gen_bool(density);
        }
        Ok(())
    }

    /// Same as [`Grid::randomize`] with a ChaCha8 generator.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn randomize_seeded(&mut self, density: f64, seed: Option<u64>) -> Result<()> {
        use rand::SeedableRng;
        use rand_chacha::ChaCha8Rng;

        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        self.randomize(density, &mut rng)
    }

    /// Stamps `pattern` with its top-left corner at `(offset_x, offset_y)`.
    ///
    /// Nonzero entries become alive, zeros become dead. Entries that land outside
    /// the grid are skipped, so oversized patterns can be placed near the edges.
    pub fn set_pattern<P: AsRef<[u8]>>(&mut self, pattern: &[P], offset_x: i64, offset_y: i64) {
        for (py, row) in pattern.iter().enumerate() {
            let Some(y) = i64::try_from(py).ok().and_then(|py| offset_y.checked_add(py)) else {
                continue;
            };
            for (px, &value) in row.as_ref().iter().enumerate() {
                let Some(x) = i64::try_from(px).ok().and_then(|px| offset_x.checked_add(px))
                else {
                    continue;
                };
                if let Some(idx) = self.checked_index(x, y) {
                    self.cells[idx] = value != 0;
                }
            }
        }
    }

    pub(crate) fn checked_index(&self, x: i64, y: i64) -> Option<usize> {
        let x = usize::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = usize::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(x + y * self.width)
    }

    /// Independent copy of the grid; the two never share cell storage.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Iterates over all cells in row-major order as `(x, y, alive)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        let w = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &c)| (i % w, i / w, c))
    }

    /// Coordinates of the alive cells in row-major order.
    pub fn living_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells().filter(|c| c.2).map(|(x, y, _)| (x, y))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks_exact(self.width).enumerate() {
            if y != 0 {
                writeln!(f)?;
            }
            for &c in row {
                write!(f, "{}", if c { '●' } else { '○' })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const SEED: u64 = 42;

    #[test]
    fn test_new_grid_is_empty() {
        for (w, h) in [(1, 1), (5, 5), (3, 17), (64, 2)] {
            let grid = Grid::new(w, h).unwrap();
            assert_eq!(grid.size(), (w, h));
            assert_eq!(grid.get_living_cells(), 0);
        }
    }

    #[test]
    fn test_invalid_dimensions() {
        for (w, h) in [(0, 5), (5, 0), (0, 0)] {
            assert_eq!(
                Grid::new(w, h),
                Err(Error::InvalidDimension {
                    width: w,
                    height: h
                })
            );
        }
    }

    #[test]
    fn test_get_set_round_trip() {
        let mut grid = Grid::new(7, 4).unwrap();
        for y in 0..4 {
            for x in 0..7 {
                grid.set_cell(x, y, true).unwrap();
                assert!(grid.get_cell(x, y).unwrap());
                assert_eq!(grid.get_living_cells(), 1);
                grid.set_cell(x, y, false).unwrap();
                assert!(!grid.get_cell(x, y).unwrap());
            }
        }
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = Grid::new(5, 3).unwrap();
        for (x, y) in [(5, 0), (0, 3), (5, 3), (100, 1)] {
            let expected = Err(Error::OutOfBounds {
                x: x as i64,
                y: y as i64,
                width: 5,
                height: 3,
            });
            assert_eq!(grid.get_cell(x, y), expected);
            assert_eq!(grid.set_cell(x, y, true), expected.map(|_| ()));
            assert!(grid.count_neighbors(x, y).is_err());
        }
        assert_eq!(grid.get_living_cells(), 0);
    }

    #[test]
    fn test_count_neighbors_wraps() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set_cell(4, 4, true).unwrap();
        assert_eq!(grid.count_neighbors(0, 0).unwrap(), 1);
        assert_eq!(grid.count_neighbors(4, 0).unwrap(), 1);
        assert_eq!(grid.count_neighbors(0, 4).unwrap(), 1);
        assert_eq!(grid.count_neighbors(2, 2).unwrap(), 0);
        // the cell itself is not its own neighbor
        assert_eq!(grid.count_neighbors(4, 4).unwrap(), 0);
    }

    #[test]
    fn test_count_neighbors_extremes() {
        let mut grid = Grid::new(5, 5).unwrap();
        assert_eq!(grid.count_neighbors(2, 2).unwrap(), 0);
        for y in 1..4 {
            for x in 1..4 {
                grid.set_cell(x, y, true).unwrap();
            }
        }
        grid.set_cell(2, 2, false).unwrap();
        assert_eq!(grid.count_neighbors(2, 2).unwrap(), 8);
    }

    #[test]
    fn test_count_neighbors_small_torus() {
        // on a 1x1 torus every neighbor is the cell itself
        let mut grid = Grid::new(1, 1).unwrap();
        grid.set_cell(0, 0, true).unwrap();
        assert_eq!(grid.count_neighbors(0, 0).unwrap(), 8);
    }

    #[test]
    fn test_clear() {
        let mut grid = Grid::new(6, 6).unwrap();
        grid.randomize_seeded(0.5, Some(SEED)).unwrap();
        grid.clear();
        assert_eq!(grid.get_living_cells(), 0);
        assert_eq!(grid.size(), (6, 6));
    }

    #[test]
    fn test_randomize_density() {
        let mut grid = Grid::new(10, 10).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(SEED);
        grid.randomize(0.0, &mut rng).unwrap();
        assert_eq!(grid.get_living_cells(), 0);
        grid.randomize(1.0, &mut rng).unwrap();
        assert_eq!(grid.get_living_cells(), 100);

        for density in [-0.1, 1.5, f64::NAN] {
            assert!(matches!(
                grid.randomize(density, &mut rng),
                Err(Error::InvalidDensity(_))
            ));
        }
        // a rejected density leaves the cells alone
        assert_eq!(grid.get_living_cells(), 100);
    }

    #[test]
    fn test_randomize_seeded_is_reproducible() {
        let mut a = Grid::new(32, 32).unwrap();
        let mut b = Grid::new(32, 32).unwrap();
        a.randomize_seeded(0.3, Some(SEED)).unwrap();
        b.randomize_seeded(0.3, Some(SEED)).unwrap();
        assert_eq!(a, b);
        assert!(a.get_living_cells() > 0);
    }

    #[test]
    fn test_set_pattern_clips() {
        let glider: [[u8; 3]; 3] = [[0, 1, 0], [0, 0, 1], [1, 1, 1]];
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set_pattern(&glider, 1, 1);
        assert_eq!(grid.get_living_cells(), 5);
        assert!(grid.get_cell(2, 1).unwrap());
        assert!(grid.get_cell(3, 2).unwrap());

        let mut grid = Grid::new(5, 5).unwrap();
        grid.set_pattern(&glider, 3, 2);
        assert_eq!(
            grid.living_cells().collect::<Vec<_>>(),
            vec![(4, 2), (3, 4), (4, 4)]
        );

        let mut grid = Grid::new(5, 5).unwrap();
        grid.set_pattern(&glider, -1, -2);
        assert_eq!(grid.living_cells().collect::<Vec<_>>(), vec![(0, 0), (1, 0)]);
    }

    #[test]
    fn test_set_pattern_overwrites_with_zeros() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set_cell(0, 0, true).unwrap();
        grid.set_cell(3, 3, true).unwrap();
        grid.set_pattern(&[vec![0u8, 1], vec![1, 0]], 0, 0);
        assert!(!grid.get_cell(0, 0).unwrap());
        assert_eq!(grid.living_cells().collect::<Vec<_>>(), vec![(1, 0), (0, 1), (3, 3)]);

        // zeros outside the grid are skipped like any other entry
        grid.set_pattern(&[[0u8, 0]], 3, 3);
        assert!(!grid.get_cell(3, 3).unwrap());
        assert_eq!(grid.get_living_cells(), 2);
    }

    #[test]
    fn test_set_pattern_extreme_offsets() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set_pattern(&[[1u8, 1]], i64::MAX, 0);
        grid.set_pattern(&[[1u8], [1]], 0, i64::MAX);
        grid.set_pattern(&[[1u8, 1]], i64::MIN, i64::MIN);
        assert_eq!(grid.get_living_cells(), 0);

        grid.set_pattern(&[[1u8, 1, 1]], -2, 0);
        assert_eq!(grid.living_cells().collect::<Vec<_>>(), vec![(0, 0)]);
    }

    #[test]
    fn test_huge_dimensions_rejected() {
        assert_eq!(
            Grid::new(usize::MAX, 2),
            Err(Error::InvalidDimension {
                width: usize::MAX,
                height: 2
            })
        );
        assert!(Grid::new(usize::MAX / 2 + 1, 2).is_err());
    }

    #[test]
    fn test_out_of_bounds_reports_saturated_coordinates() {
        let grid = Grid::new(2, 2).unwrap();
        assert_eq!(
            grid.get_cell(usize::MAX, 0),
            Err(Error::OutOfBounds {
                x: i64::MAX,
                y: 0,
                width: 2,
                height: 2
            })
        );
    }

    #[test]
    fn test_copy_is_independent() {
        let mut original = Grid::new(4, 4).unwrap();
        original.set_cell(1, 1, true).unwrap();
        let mut copy = original.copy();
        assert_eq!(copy, original);

        copy.set_cell(2, 2, true).unwrap();
        original.set_cell(1, 1, false).unwrap();
        assert!(!original.get_cell(2, 2).unwrap());
        assert!(copy.get_cell(1, 1).unwrap());
        assert_ne!(copy, original);
    }

    #[test]
    fn test_equality_requires_same_size() {
        assert_ne!(Grid::new(2, 3).unwrap(), Grid::new(3, 2).unwrap());
        assert_eq!(Grid::new(3, 2).unwrap(), Grid::new(3, 2).unwrap());
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set_cell(1, 0, true).unwrap();
        grid.set_cell(2, 1, true).unwrap();
        assert_eq!(grid.to_string(), "○●○\n○○●");
    }

    #[test]
    fn test_cells_iteration_order() {
        let grid = Grid::new(2, 2).unwrap();
        let coords = grid.cells().map(|(x, y, _)| (x, y)).collect::<Vec<_>>();
        assert_eq!(coords, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }
}
