use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Marked,
    Unmarked,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Marked | Self::Unmarked => true,
        }
    }
}

/// A fully marked straight line on the card.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Line {
    Row(Coord),
    Col(Coord),
    Diagonal,
    AntiDiagonal,
}

impl Line {
    pub fn contains(self, (row, col): Coord2, size: Coord) -> bool {
        match self {
            Self::Row(r) => row == r,
            Self::Col(c) => col == c,
            Self::Diagonal => row == col,
            Self::AntiDiagonal => usize::from(row) + usize::from(col) + 1 == usize::from(size),
        }
    }
}

/// Set of toggled cells on one card. Values are replaced wholesale, never shared between cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkSet {
    size: Coord,
    marked: BTreeSet<Coord2>,
}

impl MarkSet {
    pub fn new(size: Coord) -> Self {
        Self {
            size,
            marked: BTreeSet::new(),
        }
    }

    pub fn size(&self) -> Coord {
        self.size
    }

    pub fn len(&self) -> usize {
        self.marked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marked.is_empty()
    }

    pub fn is_marked(&self, coords: Coord2) -> bool {
        self.marked.contains(&coords)
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.marked.iter().copied()
    }

    /// Returns a copy of this set with `coords` flipped.
    pub fn toggled(&self, coords: Coord2) -> Result<Self> {
        let mut next = self.clone();
        next.toggle(coords)?;
        Ok(next)
    }

    pub fn toggle(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = CardConfig::new_unchecked(self.size).validate_coords(coords)?;
        Ok(if self.marked.remove(&coords) {
            MarkOutcome::Unmarked
        } else {
            self.marked.insert(coords);
            MarkOutcome::Marked
        })
    }

    /// The empty set for the same card size.
    pub fn reset(&self) -> Self {
        Self::new(self.size)
    }

    pub fn completed_lines(&self) -> Vec<Line> {
        let size = self.size;
        if size == 0 {
            return Vec::new();
        }
        let full = |line: Line| {
            CoordIter::new(size)
                .filter(|&coords| line.contains(coords, size))
                .all(|coords| self.is_marked(coords))
        };

        (0..size)
            .map(Line::Row)
            .chain((0..size).map(Line::Col))
            .chain([Line::Diagonal, Line::AntiDiagonal])
            .filter(|&line| full(line))
            .collect()
    }

    pub fn has_bingo(&self) -> bool {
        !self.completed_lines().is_empty()
    }
}
