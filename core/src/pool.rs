use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::ops::Index;
use serde::{Deserialize, Serialize};

use crate::*;

/// Labels every new session starts with.
pub const DEFAULT_LABELS: &[&str] = &[
    "Basket Weaver",
    "Teacher",
    "Cobbler",
    "Mayor",
    "Born 1910's",
    "Born 1920's",
    "Born 1930's",
    "Born 1940's",
    "Born 1950's",
    "Born 1960's",
    "Born 1970's",
    "Born 1980's",
    "Died 1960's",
    "Died 1970's",
    "Died 1980's",
    "Died 1990's",
    "Died 2000's",
    "Died 2010's",
    "Died 2020's",
    ">100 year lifespan",
];

/// What a pool mutation did, and whether the card has to be redrawn because of it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PoolOutcome {
    NoChange,
    Edited,
    Resized,
    Replaced,
}

impl PoolOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    /// Text edits keep the current card; anything that changes the pool's shape redraws it.
    pub const fn regenerates(self) -> bool {
        matches!(self, Self::Resized | Self::Replaced)
    }
}

/// Ordered, editable collection of candidate labels.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelPool {
    labels: Vec<Label>,
}

impl LabelPool {
    pub fn new(labels: Vec<Label>) -> Self {
        Self { labels }
    }

    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_LABELS.iter().map(|label| label.to_string()).collect())
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub fn edit_at(&mut self, index: usize, text: impl Into<Label>) -> PoolOutcome {
        let Some(label) = self.labels.get_mut(index) else {
            log::debug!("edit ignored, index {} out of {}", index, self.labels.len());
            return PoolOutcome::NoChange;
        };
        let text = text.into();
        if *label == text {
            return PoolOutcome::NoChange;
        }
        *label = text;
        PoolOutcome::Edited
    }

    pub fn remove_at(&mut self, index: usize) -> PoolOutcome {
        if index >= self.labels.len() {
            log::debug!("remove ignored, index {} out of {}", index, self.labels.len());
            return PoolOutcome::NoChange;
        }
        self.labels.remove(index);
        PoolOutcome::Resized
    }

    pub fn append(&mut self, text: impl Into<Label>) -> PoolOutcome {
        self.labels.push(text.into());
        PoolOutcome::Resized
    }

    /// Appends an empty label, as the editor's "add" control does.
    pub fn append_blank(&mut self) -> PoolOutcome {
        self.append(String::new())
    }

    pub fn replace_all(&mut self, labels: Vec<Label>) -> PoolOutcome {
        self.labels = labels;
        PoolOutcome::Replaced
    }

    pub fn reset_to_default(&mut self) -> PoolOutcome {
        *self = Self::with_defaults();
        PoolOutcome::Replaced
    }

    /// JSON array of strings, the format used for both files and share links.
    pub fn serialize(&self) -> String {
        // a list of strings always serializes
        serde_json::to_string(&self.labels).unwrap_or_else(|_| String::from("[]"))
    }

    pub fn deserialize(text: &str) -> Result<Self> {
        let labels: Vec<Label> =
            serde_json::from_str(text).map_err(|err| ParseError::from_json(&err))?;
        Ok(Self::new(labels))
    }

    /// Replaces the pool with the decoded labels, leaving it untouched when `text` does not parse.
    pub fn import(&mut self, text: &str) -> Result<PoolOutcome> {
        let imported = Self::deserialize(text)?;
        log::debug!("imported {} labels", imported.len());
        Ok(self.replace_all(imported.labels))
    }
}

impl Index<usize> for LabelPool {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output {
        &self.labels[index]
    }
}

impl From<Vec<Label>> for LabelPool {
    fn from(labels: Vec<Label>) -> Self {
        Self::new(labels)
    }
}

impl<'a> FromIterator<&'a str> for LabelPool {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        Self::new(iter.into_iter().map(|label| label.to_string()).collect())
    }
}
