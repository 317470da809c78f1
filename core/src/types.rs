use alloc::string::String;

/// Single coordinate axis used for card size, rows and columns.
pub type Coord = u8;

/// Count type used for cell totals.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// A candidate label; may be empty or duplicated within a pool.
pub type Label = String;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Row-major iterator over every coordinate of a square card.
#[derive(Debug)]
pub struct CoordIter {
    size: Coord,
    next: CellCount,
}

impl CoordIter {
    pub(crate) const fn new(size: Coord) -> Self {
        Self { size, next: 0 }
    }
}

impl Iterator for CoordIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        if self.size == 0 || self.next >= mult(self.size, self.size) {
            return None;
        }
        let size = CellCount::from(self.size);
        let coords = ((self.next / size) as Coord, (self.next % size) as Coord);
        self.next += 1;
        Some(coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn coord_iter_is_row_major() {
        let coords: Vec<_> = CoordIter::new(2).collect();
        assert_eq!(coords, [(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn coord_iter_handles_zero_size() {
        assert_eq!(CoordIter::new(0).count(), 0);
    }
}
