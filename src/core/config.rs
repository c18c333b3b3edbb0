//! Deck configuration.
//!
//! `DeckOptions` controls how a fresh deck is built: the 52 standard cards
//! always, plus optional jokers.

use serde::{Deserialize, Serialize};

/// Joker count used when jokers are requested without a count.
pub const DEFAULT_NUM_JOKERS: usize = 2;

/// Options for building (or rebuilding) a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckOptions {
    /// Append jokers after the standard cards.
    #[serde(default)]
    pub include_jokers: bool,

    /// How many jokers to append when `include_jokers` is set.
    /// Zero falls back to `DEFAULT_NUM_JOKERS`.
    #[serde(default = "default_num_jokers")]
    pub num_jokers: usize,
}

fn default_num_jokers() -> usize {
    DEFAULT_NUM_JOKERS
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            include_jokers: false,
            num_jokers: DEFAULT_NUM_JOKERS,
        }
    }
}

impl DeckOptions {
    /// Include `count` jokers.
    #[must_use]
    pub fn with_jokers(mut self, count: usize) -> Self {
        self.include_jokers = true;
        self.num_jokers = count;
        self
    }

    /// Standard 52 cards only.
    #[must_use]
    pub fn without_jokers(mut self) -> Self {
        self.include_jokers = false;
        self
    }

    /// Number of jokers a fresh deck built from these options contains.
    #[must_use]
    pub fn joker_count(&self) -> usize {
        match (self.include_jokers, self.num_jokers) {
            (false, _) => 0,
            (true, 0) => DEFAULT_NUM_JOKERS,
            (true, n) => n,
        }
    }
}
