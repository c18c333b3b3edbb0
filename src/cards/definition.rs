//! Closed enumerations that define a standard card: suit, rank, and joker color.
//!
//! Two orderings exist for suits and ranks:
//! - **Fresh-deck order** (`ALL`): the order a new deck is built in
//!   (hearts, diamonds, clubs, spades; ace through king).
//! - **Sort order** (`sort_index`): the order `Deck::sort` arranges cards in
//!   (clubs < diamonds < hearts < spades; two through king, then ace).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits in fresh-deck order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Position of this suit in sort order (clubs first, spades last).
    #[must_use]
    pub const fn sort_index(self) -> u8 {
        match self {
            Suit::Clubs => 0,
            Suit::Diamonds => 1,
            Suit::Hearts => 2,
            Suit::Spades => 3,
        }
    }

    /// Lowercase display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
            Suit::Spades => "spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks in fresh-deck order (ace first).
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Position of this rank in sort order (two lowest, ace highest).
    #[must_use]
    pub const fn sort_index(self) -> u8 {
        match self {
            Rank::Two => 0,
            Rank::Three => 1,
            Rank::Four => 2,
            Rank::Five => 3,
            Rank::Six => 4,
            Rank::Seven => 5,
            Rank::Eight => 6,
            Rank::Nine => 7,
            Rank::Ten => 8,
            Rank::Jack => 9,
            Rank::Queen => 10,
            Rank::King => 11,
            Rank::Ace => 12,
        }
    }

    /// Scoring value (blackjack-style). Aces are 11 when `ace_high`, else 1.
    #[must_use]
    pub const fn value(self, ace_high: bool) -> u8 {
        match self {
            Rank::Ace => {
                if ace_high {
                    11
                } else {
                    1
                }
            }
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
        }
    }

    /// Lowercase display name: `ace`, `2`..`10`, `jack`, `queen`, `king`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Rank::Ace => "ace",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "jack",
            Rank::Queen => "queen",
            Rank::King => "king",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Joker color. Red sorts before black.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JokerColor {
    #[default]
    Red,
    Black,
}

impl JokerColor {
    /// Color of the `index`-th joker added to a deck (red, black, red, ...).
    #[must_use]
    pub const fn alternating(index: usize) -> Self {
        if index % 2 == 0 {
            JokerColor::Red
        } else {
            JokerColor::Black
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            JokerColor::Red => "red",
            JokerColor::Black => "black",
        }
    }
}

impl fmt::Display for JokerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_values() {
        assert_eq!(Rank::Ace.value(true), 11);
        assert_eq!(Rank::Ace.value(false), 1);
        assert_eq!(Rank::Seven.value(true), 7);
        for rank in [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King] {
            assert_eq!(rank.value(true), 10);
            assert_eq!(rank.value(false), 10);
        }
    }

    #[test]
    fn test_sort_indices_are_permutations() {
        let mut suits: Vec<_> = Suit::ALL.iter().map(|s| s.sort_index()).collect();
        suits.sort_unstable();
        assert_eq!(suits, vec![0, 1, 2, 3]);

        let mut ranks: Vec<_> = Rank::ALL.iter().map(|r| r.sort_index()).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, (0..13).collect::<Vec<u8>>());
    }

    #[test]
    fn test_ace_sorts_last() {
        assert!(Rank::ALL.iter().all(|r| r.sort_index() <= Rank::Ace.sort_index()));
    }

    #[test]
    fn test_alternating_colors() {
        assert_eq!(JokerColor::alternating(0), JokerColor::Red);
        assert_eq!(JokerColor::alternating(1), JokerColor::Black);
        assert_eq!(JokerColor::alternating(2), JokerColor::Red);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Suit::Spades).unwrap(), "\"spades\"");
        assert_eq!(serde_json::to_string(&Rank::Queen).unwrap(), "\"queen\"");
        assert_eq!(serde_json::to_string(&JokerColor::Black).unwrap(), "\"black\"");
    }
}
