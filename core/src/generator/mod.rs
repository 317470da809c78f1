use crate::*;
pub use random::*;

mod random;

pub trait GridGenerator {
    fn generate(self, pool: &LabelPool, config: CardConfig) -> Result<Grid>;
}

/// Draws a standard card from `pool` with the given seed.
pub fn draw(pool: &LabelPool, seed: u64) -> Result<Grid> {
    RandomGridGenerator::new(seed).generate(pool, CardConfig::default())
}
