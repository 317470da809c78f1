use alloc::vec::Vec;

use super::*;

/// Fills cells in row-major order by drawing labels out of a bag without replacement. When the bag
/// runs dry it is refilled from the pool, so repeats only show up after every label was used once.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomGridGenerator {
    seed: u64,
}

impl RandomGridGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl GridGenerator for RandomGridGenerator {
    fn generate(self, pool: &LabelPool, config: CardConfig) -> Result<Grid> {
        use rand::prelude::*;

        if pool.is_empty() {
            return Err(BingoError::EmptyPool);
        }

        let total_cells = usize::from(config.total_cells());
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut bag: Vec<&str> = Vec::with_capacity(pool.len());
        let mut cells = Vec::with_capacity(total_cells);
        let mut refills = 0usize;

        while cells.len() < total_cells {
            if bag.is_empty() {
                if !cells.is_empty() {
                    refills += 1;
                }
                bag.extend(pool.iter());
            }
            let pick = rng.random_range(0..bag.len());
            cells.push(Label::from(bag.swap_remove(pick)));
        }

        if refills > 0 {
            log::warn!(
                "Label pool exhausted, {} labels for {} cells, refilled {} times",
                pool.len(),
                total_cells,
                refills
            );
        }
        log::debug!("drew {} cells with seed {:#x}", cells.len(), self.seed);

        Grid::from_row_major(config.size, cells)
    }
}
