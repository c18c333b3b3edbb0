//! Card values: standard playing cards, jokers, and the `Card` union over both.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::definition::{JokerColor, Rank, Suit};

/// Sort order of the red joker; the black joker follows it.
const JOKER_SORT_BASE: u8 = 52;

/// A standard playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayingCard {
    pub suit: Suit,
    pub rank: Rank,
}

impl PlayingCard {
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Scoring value. Aces count 11 when `ace_high`, 1 otherwise.
    #[must_use]
    pub const fn value(&self, ace_high: bool) -> u8 {
        self.rank.value(ace_high)
    }

    /// `suit_index * 13 + rank_index`, in `0..52`.
    #[must_use]
    pub const fn sort_order(&self) -> u8 {
        self.suit.sort_index() * 13 + self.rank.sort_index()
    }
}

impl fmt::Display for PlayingCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// A joker. Worth nothing and always sorts after the standard cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Joker {
    pub color: JokerColor,
}

impl Joker {
    #[must_use]
    pub const fn new(color: JokerColor) -> Self {
        Self { color }
    }

    #[must_use]
    pub const fn value(&self) -> u8 {
        0
    }

    /// 52 for red, 53 for black.
    #[must_use]
    pub const fn sort_order(&self) -> u8 {
        match self.color {
            JokerColor::Red => JOKER_SORT_BASE,
            JokerColor::Black => JOKER_SORT_BASE + 1,
        }
    }
}

impl fmt::Display for Joker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} joker", self.color)
    }
}

/// Any card a deck can hold.
///
/// Ordering follows `sort_order`, so a sorted `Vec<Card>` matches a sorted deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Card {
    Standard(PlayingCard),
    Joker(Joker),
}

impl Card {
    /// Suit of a standard card; `None` for jokers.
    #[must_use]
    pub const fn suit(&self) -> Option<Suit> {
        match self {
            Card::Standard(card) => Some(card.suit),
            Card::Joker(_) => None,
        }
    }

    /// Rank of a standard card; `None` for jokers.
    #[must_use]
    pub const fn rank(&self) -> Option<Rank> {
        match self {
            Card::Standard(card) => Some(card.rank),
            Card::Joker(_) => None,
        }
    }

    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self, Card::Joker(_))
    }

    /// Scoring value. `ace_high` only affects aces; jokers are always 0.
    #[must_use]
    pub const fn value(&self, ace_high: bool) -> u8 {
        match self {
            Card::Standard(card) => card.value(ace_high),
            Card::Joker(joker) => joker.value(),
        }
    }

    /// Unique key in `0..54`: standard cards first, then red and black jokers.
    #[must_use]
    pub const fn sort_order(&self) -> u8 {
        match self {
            Card::Standard(card) => card.sort_order(),
            Card::Joker(joker) => joker.sort_order(),
        }
    }
}

impl From<PlayingCard> for Card {
    fn from(card: PlayingCard) -> Self {
        Card::Standard(card)
    }
}

impl From<Joker> for Card {
    fn from(joker: Joker) -> Self {
        Card::Joker(joker)
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_order().cmp(&other.sort_order())
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Standard(card) => fmt::Display::fmt(card, f),
            Card::Joker(joker) => fmt::Display::fmt(joker, f),
        }
    }
}

/// Create a standard card.
#[must_use]
pub const fn create_card(suit: Suit, rank: Rank) -> Card {
    Card::Standard(PlayingCard::new(suit, rank))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_create_card() {
        let card = create_card(Suit::Hearts, Rank::Queen);
        assert_eq!(card.suit(), Some(Suit::Hearts));
        assert_eq!(card.rank(), Some(Rank::Queen));
        assert!(!card.is_joker());
        assert_eq!(card.value(true), 10);
    }

    #[test]
    fn test_ace_value_modes() {
        let ace = create_card(Suit::Spades, Rank::Ace);
        assert_eq!(ace.value(true), 11);
        assert_eq!(ace.value(false), 1);
    }

    #[test]
    fn test_joker_properties() {
        let red = Card::from(Joker::new(JokerColor::Red));
        let black = Card::from(Joker::new(JokerColor::Black));

        assert!(red.is_joker());
        assert_eq!(red.suit(), None);
        assert_eq!(red.rank(), None);
        assert_eq!(red.value(true), 0);
        assert_eq!(black.value(false), 0);
        assert_eq!(red.sort_order(), 52);
        assert_eq!(black.sort_order(), 53);
    }

    #[test]
    fn test_sort_order_extremes() {
        assert_eq!(create_card(Suit::Clubs, Rank::Two).sort_order(), 0);
        assert_eq!(create_card(Suit::Clubs, Rank::Ace).sort_order(), 12);
        assert_eq!(create_card(Suit::Diamonds, Rank::Two).sort_order(), 13);
        assert_eq!(create_card(Suit::Spades, Rank::Ace).sort_order(), 51);
    }

    #[test]
    fn test_sort_orders_unique() {
        let mut seen = FxHashSet::default();
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                assert!(seen.insert(create_card(suit, rank).sort_order()));
            }
        }
        for color in [JokerColor::Red, JokerColor::Black] {
            assert!(seen.insert(Card::from(Joker::new(color)).sort_order()));
        }
        assert_eq!(seen.len(), 54);
        assert!(seen.iter().all(|&order| order < 54));
    }

    #[test]
    fn test_ordering_matches_sort_order() {
        let two = create_card(Suit::Clubs, Rank::Two);
        let ace = create_card(Suit::Spades, Rank::Ace);
        let joker = Card::from(Joker::new(JokerColor::Red));

        assert!(two < ace);
        assert!(ace < joker);
    }

    #[test]
    fn test_display() {
        assert_eq!(create_card(Suit::Hearts, Rank::Ace).to_string(), "ace of hearts");
        assert_eq!(create_card(Suit::Clubs, Rank::Ten).to_string(), "10 of clubs");
        assert_eq!(Card::from(Joker::new(JokerColor::Black)).to_string(), "black joker");
    }

    #[test]
    fn test_serde_tagging() {
        let card = create_card(Suit::Diamonds, Rank::King);
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, r#"{"kind":"standard","suit":"diamonds","rank":"king"}"#);

        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
    }
}
