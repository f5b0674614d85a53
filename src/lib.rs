#![warn(clippy::all)]

mod engine;
mod error;
mod grid;
mod patterns;
mod utils;

pub use engine::{apply_rule, Engine, GridMut};
pub use error::{Error, Result};
pub use grid::Grid;
pub use patterns::{Pattern, PatternKind, PATTERNS};
pub use utils::{Config, NiceInt};
