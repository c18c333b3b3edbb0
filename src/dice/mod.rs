//! Dice engine: roll dice by count and type or by notation, then filter
//! and select from the last roll.
//!
//! ## Key Types
//!
//! - `DieType`: Supported dice (d4, d6, d8, d10, d12, d20, d100)
//! - `DieResult`: One rolled value tagged with its die
//! - `RollSpec`: Parsed notation (`"3d6"`)
//! - `DiceRoller`: Rolls and remembers the last batch

pub mod die;
pub mod notation;
pub mod roller;

pub use die::{DieResult, DieType, MAX_DICE};
pub use notation::RollSpec;
pub use roller::{DiceBatch, DiceRoller};
