use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// A drawn card: labels copied out of the pool at draw time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Label>,
}

impl Grid {
    /// Builds a square grid from labels listed in row-major order.
    pub fn from_row_major(size: Coord, cells: Vec<Label>) -> Result<Self> {
        let side = usize::from(size);
        let cells =
            Array2::from_shape_vec((side, side), cells).map_err(|_| BingoError::InvalidCoords)?;
        Ok(Self { cells })
    }

    pub fn size(&self) -> Coord {
        self.cells.nrows().try_into().unwrap_or(Coord::MAX)
    }

    pub fn config(&self) -> CardConfig {
        CardConfig::new_unchecked(self.size())
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        self.config().validate_coords(coords)
    }

    pub fn label_at(&self, coords: Coord2) -> &str {
        &self.cells[coords.to_nd_index()]
    }

    pub fn is_free_cell(&self, coords: Coord2) -> bool {
        self.config().free_cell() == coords
    }

    pub fn iter_coords(&self) -> CoordIter {
        CoordIter::new(self.size())
    }

    /// Labels in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|label| label.as_str())
    }
}

impl Index<Coord2> for Grid {
    type Output = str;

    fn index(&self, coords: Coord2) -> &Self::Output {
        self.label_at(coords)
    }
}
