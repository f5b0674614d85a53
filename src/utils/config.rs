use crate::{Engine, Result};

/// Parameters for setting up a simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    /// Probability of a cell being alive initially; `0.0` leaves the field blank.
    pub fill_rate: f64,
    /// Random seed (if `None`, then random seed is generated)
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_SIDE,
            height: Self::DEFAULT_SIDE,
            fill_rate: Self::DEFAULT_FILL_RATE,
            seed: None,
        }
    }
}

impl Config {
    pub const DEFAULT_SIDE: usize = 20;
    pub const DEFAULT_FILL_RATE: f64 = 0.3;
    pub const DEFAULT_SEED: u64 = 42;

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_fill_rate(mut self, fill_rate: f64) -> Self {
        self.fill_rate = fill_rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build_engine(&self) -> Result<Engine> {
        let mut engine = Engine::new(self.width, self.height)?;
        if self.fill_rate != 0.0 {
            engine
                .grid_mut()
                .randomize_seeded(self.fill_rate, self.seed)?;
        }
        Ok(engine)
    }
}
