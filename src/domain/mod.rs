mod cell;
mod grid;
pub mod rules;

pub use cell::Cell;
pub use grid::{Grid, GridError};
pub use rules::step;
