#![no_std]

extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate std;

use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use marks::*;
pub use pool::*;
pub use share::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod grid;
mod marks;
mod pool;
mod share;
mod types;

/// Side length of a standard card.
pub const DEFAULT_SIZE: Coord = 5;

/// Largest supported side length.
pub const MAX_SIZE: Coord = 15;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardConfig {
    pub size: Coord,
}

impl CardConfig {
    pub const fn new_unchecked(size: Coord) -> Self {
        Self { size }
    }

    pub fn new(size: Coord) -> Self {
        Self::new_unchecked(size.clamp(1, MAX_SIZE))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    /// Center cell, styled as the "free" square.
    pub const fn free_cell(&self) -> Coord2 {
        (self.size / 2, self.size / 2)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.size && coords.1 < self.size {
            Ok(coords)
        } else {
            Err(BingoError::InvalidCoords)
        }
    }
}

impl Default for CardConfig {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_clamps_size() {
        assert_eq!(CardConfig::new(0).size, 1);
        assert_eq!(CardConfig::new(200).size, MAX_SIZE);
        assert_eq!(CardConfig::default().total_cells(), 25);
    }

    #[test]
    fn default_free_cell_is_center() {
        assert_eq!(CardConfig::default().free_cell(), (2, 2));
    }
}
