use alloc::string::String;
use alloc::vec::Vec;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CardState {
    /// No labels to draw from, nothing is displayed.
    Empty,
    /// Fresh card, nothing marked yet.
    Drawn,
    Marked,
}

impl Default for CardState {
    fn default() -> Self {
        Self::Empty
    }
}

/// One drawn card together with the marks placed on it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    grid: Grid,
    marks: MarkSet,
}

impl Card {
    pub fn new(grid: Grid) -> Self {
        let marks = MarkSet::new(grid.size());
        Self { grid, marks }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn marks(&self) -> &MarkSet {
        &self.marks
    }

    pub fn state(&self) -> CardState {
        if self.marks.is_empty() {
            CardState::Drawn
        } else {
            CardState::Marked
        }
    }

    /// Copy of this card with the mark at `coords` flipped.
    pub fn toggled(&self, coords: Coord2) -> Result<Self> {
        let coords = self.grid.validate_coords(coords)?;
        Ok(Self {
            grid: self.grid.clone(),
            marks: self.marks.toggled(coords)?,
        })
    }
}

/// Owns the label pool and the current card, redrawing the card whenever the pool changes shape.
#[derive(Clone, Debug)]
pub struct CardEngine {
    config: CardConfig,
    pool: LabelPool,
    card: Option<Card>,
    rng: SmallRng,
}

impl CardEngine {
    pub fn new(config: CardConfig, pool: LabelPool, seed: u64) -> Self {
        let mut engine = Self {
            config,
            pool,
            card: None,
            rng: SmallRng::seed_from_u64(seed),
        };
        if let Err(err) = engine.regenerate() {
            log::warn!("starting without a card: {}", err);
        }
        engine
    }

    pub fn with_defaults(seed: u64) -> Self {
        Self::new(CardConfig::default(), LabelPool::with_defaults(), seed)
    }

    pub fn config(&self) -> CardConfig {
        self.config
    }

    pub fn pool(&self) -> &LabelPool {
        &self.pool
    }

    pub fn card(&self) -> Option<&Card> {
        self.card.as_ref()
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.card.as_ref().map(Card::grid)
    }

    pub fn marks(&self) -> Option<&MarkSet> {
        self.card.as_ref().map(Card::marks)
    }

    pub fn state(&self) -> CardState {
        self.card.as_ref().map_or(CardState::Empty, Card::state)
    }

    pub fn is_marked(&self, coords: Coord2) -> bool {
        self.marks().is_some_and(|marks| marks.is_marked(coords))
    }

    /// Draws a new card from the current pool, discarding all marks.
    pub fn regenerate(&mut self) -> Result<()> {
        let seed = self.rng.next_u64();
        match RandomGridGenerator::new(seed).generate(&self.pool, self.config) {
            Ok(grid) => {
                self.card = Some(Card::new(grid));
                Ok(())
            }
            Err(err) => {
                self.card = None;
                Err(err)
            }
        }
    }

    pub fn toggle(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let card = self.card.as_ref().ok_or(BingoError::EmptyPool)?;
        let next = card.toggled(coords)?;
        let outcome = if next.marks.is_marked(coords) {
            MarkOutcome::Marked
        } else {
            MarkOutcome::Unmarked
        };
        self.card = Some(next);
        Ok(outcome)
    }

    /// Changes a label's text in place; the card on display keeps its old text.
    pub fn edit_label(&mut self, index: usize, text: impl Into<Label>) -> PoolOutcome {
        self.pool.edit_at(index, text)
    }

    pub fn remove_label(&mut self, index: usize) -> Result<PoolOutcome> {
        let outcome = self.pool.remove_at(index);
        self.after_pool_change(outcome)
    }

    pub fn append_label(&mut self, text: impl Into<Label>) -> Result<PoolOutcome> {
        let outcome = self.pool.append(text);
        self.after_pool_change(outcome)
    }

    pub fn replace_labels(&mut self, labels: Vec<Label>) -> Result<PoolOutcome> {
        let outcome = self.pool.replace_all(labels);
        self.after_pool_change(outcome)
    }

    pub fn reset_to_default(&mut self) -> Result<PoolOutcome> {
        let outcome = self.pool.reset_to_default();
        self.after_pool_change(outcome)
    }

    /// Replaces the pool from exported JSON. On a parse failure nothing changes.
    pub fn import(&mut self, text: &str) -> Result<PoolOutcome> {
        let outcome = self.pool.import(text)?;
        self.after_pool_change(outcome)
    }

    pub fn export(&self) -> String {
        self.pool.serialize()
    }

    fn after_pool_change(&mut self, outcome: PoolOutcome) -> Result<PoolOutcome> {
        if outcome.regenerates() {
            log::debug!("pool changed ({:?}), {} labels", outcome, self.pool.len());
            self.regenerate()?;
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    fn engine(labels: &[&str]) -> CardEngine {
        CardEngine::new(
            CardConfig::default(),
            labels.iter().copied().collect(),
            0x5eed,
        )
    }

    fn mark_some(engine: &mut CardEngine) {
        engine.toggle((0, 0)).unwrap();
        engine.toggle((2, 2)).unwrap();
        assert_eq!(engine.state(), CardState::Marked);
    }

    #[test]
    fn starts_with_fresh_card() {
        let engine = CardEngine::with_defaults(1);

        assert_eq!(engine.state(), CardState::Drawn);
        assert_eq!(engine.grid().unwrap().size(), 5);
        assert_eq!(engine.pool().len(), DEFAULT_LABELS.len());
    }

    #[test]
    fn toggle_moves_between_drawn_and_marked() {
        let mut engine = engine(&["A", "B"]);

        assert_eq!(engine.toggle((4, 4)).unwrap(), MarkOutcome::Marked);
        assert_eq!(engine.state(), CardState::Marked);
        assert!(engine.is_marked((4, 4)));
        assert_eq!(engine.toggle((4, 4)).unwrap(), MarkOutcome::Unmarked);
        assert_eq!(engine.state(), CardState::Drawn);
    }

    #[test]
    fn toggle_out_of_range_keeps_marks() {
        let mut engine = engine(&["A"]);
        mark_some(&mut engine);

        assert_eq!(engine.toggle((5, 5)), Err(BingoError::InvalidCoords));
        assert_eq!(engine.marks().unwrap().len(), 2);
    }

    #[test]
    fn shape_changes_redraw_and_clear_marks() {
        let mut engine = engine(&["A", "B", "C"]);

        mark_some(&mut engine);
        assert_eq!(engine.append_label("D").unwrap(), PoolOutcome::Resized);
        assert_eq!(engine.state(), CardState::Drawn);

        mark_some(&mut engine);
        assert_eq!(engine.remove_label(0).unwrap(), PoolOutcome::Resized);
        assert_eq!(engine.state(), CardState::Drawn);
        assert!(engine.grid().unwrap().iter().all(|label| label != "A"));

        mark_some(&mut engine);
        engine.replace_labels(vec!["X".to_string()]).unwrap();
        assert_eq!(engine.state(), CardState::Drawn);
        assert!(engine.grid().unwrap().iter().all(|label| label == "X"));
    }

    #[test]
    fn edit_keeps_card_and_marks() {
        let mut engine = engine(&["A"]);
        mark_some(&mut engine);
        let before = engine.card().cloned();

        assert_eq!(engine.edit_label(0, "Z"), PoolOutcome::Edited);
        assert_eq!(engine.card().cloned(), before);
        assert_eq!(engine.pool().get(0), Some("Z"));
    }

    #[test]
    fn regenerate_discards_marks() {
        let mut engine = engine(&["A", "B"]);
        mark_some(&mut engine);

        engine.regenerate().unwrap();

        assert_eq!(engine.state(), CardState::Drawn);
    }

    #[test]
    fn emptied_pool_reports_error_and_drops_card() {
        let mut engine = engine(&["A"]);

        assert_eq!(engine.remove_label(0), Err(BingoError::EmptyPool));
        assert_eq!(engine.state(), CardState::Empty);
        assert!(engine.grid().is_none());
        assert_eq!(engine.toggle((0, 0)), Err(BingoError::EmptyPool));

        engine.append_label("B").unwrap();
        assert_eq!(engine.state(), CardState::Drawn);
    }

    #[test]
    fn empty_starting_pool_has_no_card() {
        let engine = engine(&[]);

        assert_eq!(engine.state(), CardState::Empty);
    }

    #[test]
    fn failed_import_leaves_everything_in_place() {
        let mut engine = engine(&["A", "B"]);
        mark_some(&mut engine);
        let before = engine.card().cloned();

        let err = engine.import("not json").unwrap_err();

        assert!(matches!(err, BingoError::Parse(_)));
        assert_eq!(engine.pool().labels(), ["A", "B"]);
        assert_eq!(engine.card().cloned(), before);
    }

    #[test]
    fn import_then_export_round_trips() {
        let mut engine = engine(&["A"]);

        engine.import(r#"["Teacher","Mayor"]"#).unwrap();

        assert_eq!(engine.export(), r#"["Teacher","Mayor"]"#);
        assert_eq!(engine.state(), CardState::Drawn);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut engine = engine(&["A"]);

        engine.reset_to_default().unwrap();

        assert_eq!(engine.pool(), &LabelPool::with_defaults());
    }
}
