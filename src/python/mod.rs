//! Python bindings for the card and dice engines.
//!
//! # Quick Start
//!
//! ```python
//! import card_wizard as cw
//!
//! deck = cw.Deck(include_jokers=True)
//! deck.shuffle()
//! hands = deck.deal_to_players(4, 5)
//!
//! roller = cw.DiceRoller(seed=7)
//! roller.roll("4d6")
//! best_three = roller.keep_highest(3)
//! ```

use pyo3::prelude::*;

mod py_cards;
mod py_deck;
mod py_dice;

pub use py_cards::*;
pub use py_deck::*;
pub use py_dice::*;

/// Clamp a Python integer count to `usize`. Negative counts become 0.
pub(crate) fn clamp_count(count: i64) -> usize {
    usize::try_from(count.max(0)).unwrap_or(usize::MAX)
}

/// card_wizard: playing-card decks and dice rolling.
#[pymodule]
fn card_wizard(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Cards
    m.add_class::<PyCard>()?;
    m.add_class::<PyDeck>()?;

    // Dice
    m.add_class::<PyDieResult>()?;
    m.add_class::<PyDiceRoller>()?;

    m.add_function(wrap_pyfunction!(create_card, m)?)?;

    Ok(())
}
