//! Card model: suits, ranks, standard cards and jokers.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`, `JokerColor`: Closed enumerations
//! - `PlayingCard`: A suit and rank
//! - `Joker`: A colored joker, worth 0, sorting after every standard card
//! - `Card`: Tagged union over both, with a shared capability set
//!   (value, sort order, display)

pub mod definition;
pub mod instance;

pub use definition::{JokerColor, Rank, Suit};
pub use instance::{create_card, Card, Joker, PlayingCard};
