use crate::{Error, Grid, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternKind {
    Oscillator,
    StillLife,
    Spaceship,
}

/// A named configuration of alive cells.
///
/// `cells` are offsets relative to an anchor point chosen by the caller.
/// Depending on the pattern the anchor is either its center or its top-left corner.
#[derive(Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub kind: PatternKind,
    /// Generations until the pattern repeats; `None` for still lifes.
    pub period: Option<u32>,
    pub description: &'static str,
    /// Smallest `(width, height)` the pattern fits into.
    pub min_grid_size: (usize, usize),
    pub cells: &'static [(i64, i64)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "blinker",
        kind: PatternKind::Oscillator,
        period: Some(2),
        description: "Simple 3-cell oscillator",
        min_grid_size: (5, 3),
        cells: &[(-1, 0), (0, 0), (1, 0)],
    },
    Pattern {
        name: "block",
        kind: PatternKind::StillLife,
        period: None,
        description: "2x2 square that never changes",
        min_grid_size: (2, 2),
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    },
    Pattern {
        name: "beehive",
        kind: PatternKind::StillLife,
        period: None,
        description: "Hexagonal stable pattern",
        min_grid_size: (4, 3),
        cells: &[(0, -1), (1, -1), (-1, 0), (2, 0), (0, 1), (1, 1)],
    },
    Pattern {
        name: "toad",
        kind: PatternKind::Oscillator,
        period: Some(2),
        description: "6-cell oscillator with toad-like motion",
        min_grid_size: (4, 2),
        cells: &[(0, -1), (1, -1), (2, -1), (-1, 0), (0, 0), (1, 0)],
    },
    Pattern {
        name: "beacon",
        kind: PatternKind::Oscillator,
        period: Some(2),
        description: "Flashing lighthouse beacon",
        min_grid_size: (4, 4),
        cells: &[(0, 0), (1, 0), (0, 1), (2, 2), (3, 2), (3, 3)],
    },
    Pattern {
        name: "glider",
        kind: PatternKind::Spaceship,
        period: Some(4),
        description: "Travels diagonally across grid",
        min_grid_size: (3, 3),
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "loaf",
        kind: PatternKind::StillLife,
        period: None,
        description: "Bread loaf-shaped stable pattern",
        min_grid_size: (4, 4),
        cells: &[(0, -1), (1, -1), (-1, 0), (2, 0), (0, 1), (2, 1), (1, 2)],
    },
];

impl Pattern {
    /// Looks up a pattern by name, ignoring case.
    pub fn find(name: &str) -> Result<&'static Pattern> {
        PATTERNS
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownPattern(name.to_string()))
    }

    /// Absolute coordinates of the alive cells for the given anchor.
    ///
    /// A cell whose coordinate doesn't fit in `i64` yields `None`.
    pub fn cells_at(
        &self,
        anchor_x: i64,
        anchor_y: i64,
    ) -> impl Iterator<Item = Option<(i64, i64)>> {
        let cells: &'static [(i64, i64)] = self.cells;
        cells
            .iter()
            .map(move |&(dx, dy)| Some((anchor_x.checked_add(dx)?, anchor_y.checked_add(dy)?)))
    }

    /// Makes the pattern's cells alive.
    ///
    /// Either every cell fits and is placed, or the grid is left untouched
    /// and the first offending coordinate is reported.
    pub fn place(&self, grid: &mut Grid, anchor_x: i64, anchor_y: i64) -> Result<()> {
        let (width, height) = grid.size();
        let targets = self
            .cells_at(anchor_x, anchor_y)
            .zip(self.cells)
            .map(|(target, &(dx, dy))| {
                let (x, y) = target.unwrap_or((
                    anchor_x.saturating_add(dx),
                    anchor_y.saturating_add(dy),
                ));
                grid.checked_index(x, y)
                    .map(|_| (x as usize, y as usize))
                    .ok_or(Error::OutOfBounds {
                        x,
                        y,
                        width,
                        height,
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        for (x, y) in targets {
            grid.put(x, y, true);
        }
        log::debug!(
            "Placed {} at ({}, {}) on {}x{} grid",
            self.name,
            anchor_x,
            anchor_y,
            width,
            height
        );
        Ok(())
    }

    /// Places the pattern with its anchor at the center of the grid.
    pub fn place_centered(&self, grid: &mut Grid) -> Result<()> {
        let (width, height) = grid.size();
        let anchor_x = i64::try_from(width / 2).unwrap_or(i64::MAX);
        let anchor_y = i64::try_from(height / 2).unwrap_or(i64::MAX);
        self.place(grid, anchor_x, anchor_y)
    }
}
