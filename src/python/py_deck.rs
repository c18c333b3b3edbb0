//! Deck bindings for Python.

use pyo3::prelude::*;

use crate::core::{DeckOptions, GameRng};
use crate::deck::Deck;

use super::clamp_count;
use super::py_cards::PyCard;

fn options(include_jokers: bool, num_jokers: usize) -> DeckOptions {
    if include_jokers {
        DeckOptions::default().with_jokers(num_jokers)
    } else {
        DeckOptions::default()
    }
}

fn wrap(cards: Vec<crate::cards::Card>) -> Vec<PyCard> {
    cards.into_iter().map(PyCard).collect()
}

/// Python wrapper for Deck.
///
/// Python has no `&mut self` chaining, so mutating methods return None.
#[pyclass(name = "Deck")]
pub struct PyDeck(pub Deck);

#[pymethods]
impl PyDeck {
    /// Create a fresh deck.
    ///
    /// # Arguments
    /// - include_jokers: Append jokers after the 52 standard cards
    /// - num_jokers: Joker count when included (default: 2)
    /// - seed: RNG seed for reproducible shuffles; OS entropy when omitted
    #[new]
    #[pyo3(signature = (include_jokers = false, num_jokers = 2, seed = None))]
    fn new(include_jokers: bool, num_jokers: i64, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self(Deck::with_rng(options(include_jokers, clamp_count(num_jokers)), rng))
    }

    fn shuffle(&mut self) {
        self.0.shuffle();
    }

    /// Cut at index, or at a random point when omitted.
    /// The index is clamped to the deck.
    #[pyo3(signature = (index = None))]
    fn cut(&mut self, index: Option<i64>) {
        self.0.cut(index.map(clamp_count));
    }

    fn sort(&mut self) {
        self.0.sort();
    }

    /// Rebuild a fresh deck. Omitted arguments reuse the current options.
    #[pyo3(signature = (include_jokers = None, num_jokers = 2))]
    fn reset(&mut self, include_jokers: Option<bool>, num_jokers: i64) {
        let num_jokers = clamp_count(num_jokers);
        self.0.reset(include_jokers.map(|include| options(include, num_jokers)));
    }

    /// Deal the top card, or None when empty.
    fn deal_card(&mut self) -> Option<PyCard> {
        self.0.deal_card().map(PyCard)
    }

    /// Deal up to `count` cards. Negative counts deal nothing.
    fn deal_cards(&mut self, count: i64) -> Vec<PyCard> {
        wrap(self.0.deal_cards(clamp_count(count)))
    }

    fn deal_to_players(&mut self, num_players: i64, cards_per_player: i64) -> Vec<Vec<PyCard>> {
        self.0
            .deal_to_players(clamp_count(num_players), clamp_count(cards_per_player))
            .into_iter()
            .map(wrap)
            .collect()
    }

    #[getter]
    fn remaining(&self) -> usize {
        self.0.remaining()
    }

    #[getter]
    fn all_cards(&self) -> Vec<PyCard> {
        wrap(self.0.all_cards())
    }

    fn __len__(&self) -> usize {
        self.0.remaining()
    }

    fn __repr__(&self) -> String {
        format!("Deck(remaining={})", self.0.remaining())
    }
}
