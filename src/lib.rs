//! # card-wizard
//!
//! Playing-card decks and dice rolling for tabletop and card games.
//!
//! ## Design Principles
//!
//! 1. **Permissive API**: Out-of-range counts and indexes clamp instead of
//!    failing. Dealing from an empty deck deals nothing.
//!
//! 2. **Owned State**: Each `Deck` owns its cards and each `DiceRoller` owns
//!    its last roll. Nothing is shared between instances.
//!
//! 3. **Closed Types**: Suits, ranks, joker colors and die types are enums,
//!    so invalid values are unrepresentable. Only dice input from strings or
//!    raw side counts can fail.
//!
//! ## Modules
//!
//! - `core`: RNG, deck options, errors
//! - `cards`: Card model (standard cards and jokers)
//! - `deck`: Deck engine (shuffle, cut, sort, deal, reset)
//! - `dice`: Dice engine (roll, notation, last-roll queries)
//!
//! ## Example
//!
//! ```
//! use card_wizard::{Deck, DeckOptions, DiceRoller};
//!
//! let mut deck = Deck::new(DeckOptions::default().with_jokers(2));
//! assert_eq!(deck.remaining(), 54);
//!
//! let hands = deck.shuffle().deal_to_players(4, 5);
//! assert_eq!(hands.len(), 4);
//! assert_eq!(deck.remaining(), 34);
//!
//! let mut roller = DiceRoller::new();
//! roller.roll_notation("3d6").unwrap();
//! assert!((3..=18).contains(&roller.sum()));
//! ```

pub mod core;
pub mod cards;
pub mod deck;
pub mod dice;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{DeckOptions, Error, GameRng, Result};

pub use crate::cards::{create_card, Card, Joker, JokerColor, PlayingCard, Rank, Suit};

pub use crate::deck::Deck;

pub use crate::dice::{DiceBatch, DiceRoller, DieResult, DieType, RollSpec};
