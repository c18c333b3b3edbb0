//! Core building blocks shared by the deck and dice engines:
//! RNG, configuration, and errors.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{DeckOptions, DEFAULT_NUM_JOKERS};
pub use error::{Error, Result};
pub use rng::GameRng;
