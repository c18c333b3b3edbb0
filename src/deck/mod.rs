//! Deck engine: build, shuffle, cut, sort, deal and reset a deck of cards.

pub mod engine;

pub use engine::{Deck, MAX_SHUFFLE_ATTEMPTS};
