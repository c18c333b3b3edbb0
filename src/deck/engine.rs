//! Deck engine: an ordered, owned sequence of cards.
//!
//! The **top** of the deck is the end of the sequence. Dealing pops from
//! the end; a fresh deck therefore deals the king of spades first (or the
//! last joker, when jokers are included).
//!
//! Every mutating operation returns `&mut Self` so calls chain:
//!
//! ```
//! use card_wizard::cards::{Rank, Suit};
//! use card_wizard::deck::Deck;
//!
//! let mut deck = Deck::standard();
//! deck.shuffle().cut(None).sort();
//!
//! let bottom = deck.cards()[0];
//! assert_eq!(bottom.suit(), Some(Suit::Clubs));
//! assert_eq!(bottom.rank(), Some(Rank::Two));
//! ```
//!
//! Out-of-range requests clamp rather than fail: dealing more cards than
//! remain deals what is left, and an empty deck deals nothing.

use log::{debug, trace};

use crate::cards::{Card, Joker, JokerColor, PlayingCard, Rank, Suit};
use crate::core::config::DeckOptions;
use crate::core::rng::GameRng;

/// Full shuffles tried before falling back to a midpoint rotation.
pub const MAX_SHUFFLE_ATTEMPTS: usize = 3;

/// A deck of playing cards with optional jokers.
#[derive(Clone, Debug)]
pub struct Deck {
    /// Cards, bottom first. The last element is the top of the deck.
    cards: Vec<Card>,

    /// Options the deck was last built from. Reused by `reset(None)`.
    options: DeckOptions,

    rng: GameRng,
}

impl Deck {
    /// Build a fresh deck, seeding its RNG from OS entropy.
    #[must_use]
    pub fn new(options: DeckOptions) -> Self {
        Self::with_rng(options, GameRng::from_entropy())
    }

    /// Build a fresh 52-card deck without jokers.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(DeckOptions::default())
    }

    /// Build a fresh deck that draws randomness from `rng`.
    #[must_use]
    pub fn with_rng(options: DeckOptions, rng: GameRng) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(52 + options.joker_count()),
            options,
            rng,
        };
        deck.initialize();
        deck
    }

    /// Append the canonical fresh-deck sequence to the (empty) card list.
    ///
    /// Suits hearts, diamonds, clubs, spades; ace through king within each;
    /// then jokers alternating red/black starting with red.
    fn initialize(&mut self) {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.cards.push(Card::Standard(PlayingCard::new(suit, rank)));
            }
        }

        let jokers = self.options.joker_count();
        for i in 0..jokers {
            self.cards.push(Card::Joker(Joker::new(JokerColor::alternating(i))));
        }

        debug!("initialized deck with {} cards ({} jokers)", self.cards.len(), jokers);
    }

    /// Shuffle with Fisher-Yates, verifying the order actually changed.
    ///
    /// A shuffle that leaves every card in place is retried, up to
    /// `MAX_SHUFFLE_ATTEMPTS` in total. If the order is still unchanged the
    /// deck is rotated at its midpoint. Decks of 0 or 1 card are untouched.
    pub fn shuffle(&mut self) -> &mut Self {
        if self.cards.len() < 2 {
            return self;
        }

        let original = self.cards.clone();
        for attempt in 1..=MAX_SHUFFLE_ATTEMPTS {
            self.fisher_yates();
            if self.cards != original {
                trace!("shuffled {} cards in {} attempt(s)", self.cards.len(), attempt);
                return self;
            }
        }

        let midpoint = self.cards.len() / 2;
        debug!(
            "shuffle left order unchanged after {} attempts, rotating at {}",
            MAX_SHUFFLE_ATTEMPTS, midpoint
        );
        self.cards.rotate_left(midpoint);
        self
    }

    /// One uniform pass: for i from last down to 1, swap with a random index in `[0, i]`.
    fn fisher_yates(&mut self) {
        for i in (1..self.cards.len()).rev() {
            let j = self.rng.gen_range_usize(0..i + 1);
            self.cards.swap(i, j);
        }
    }

    /// Remove and return the top card, or `None` if the deck is empty.
    pub fn deal_card(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Remove and return up to `count` cards from the top.
    ///
    /// The returned cards keep their deck order (the former top card last).
    pub fn deal_cards(&mut self, count: usize) -> Vec<Card> {
        let count = count.min(self.cards.len());
        trace!("dealing {} of {} cards", count, self.cards.len());
        self.cards.split_off(self.cards.len() - count)
    }

    /// Deal round-robin: one card to each player in turn, `cards_per_player` times.
    ///
    /// Returns one hand per player. Hands come up short if the deck runs
    /// out mid-deal. Returns no hands if either argument is zero.
    pub fn deal_to_players(&mut self, num_players: usize, cards_per_player: usize) -> Vec<Vec<Card>> {
        if num_players == 0 || cards_per_player == 0 {
            return Vec::new();
        }

        let mut hands = vec![Vec::with_capacity(cards_per_player); num_players];
        'deal: for _ in 0..cards_per_player {
            for hand in &mut hands {
                match self.deal_card() {
                    Some(card) => hand.push(card),
                    None => break 'deal,
                }
            }
        }

        trace!(
            "dealt {} players, {} cards left",
            num_players,
            self.cards.len()
        );
        hands
    }

    /// Rotate the deck so the cards from `index` onward become the bottom.
    ///
    /// `None` picks a random index in `[1, len - 1]`. A provided index is
    /// clamped to `len - 1`. No-op for decks of 0 or 1 card.
    pub fn cut(&mut self, index: Option<usize>) -> &mut Self {
        let len = self.cards.len();
        if len <= 1 {
            return self;
        }

        let at = match index {
            Some(i) => i.min(len - 1),
            None => self.rng.gen_range_usize(1..len),
        };
        trace!("cutting {} cards at {}", len, at);
        self.cards.rotate_left(at);
        self
    }

    /// Stable sort ascending by `Card::sort_order`.
    pub fn sort(&mut self) -> &mut Self {
        self.cards.sort_by_key(Card::sort_order);
        self
    }

    /// Discard all cards and rebuild a fresh deck.
    ///
    /// `Some(options)` replaces the deck's options; `None` rebuilds from the
    /// options the deck was last built with.
    pub fn reset(&mut self, options: Option<DeckOptions>) -> &mut Self {
        if let Some(options) = options {
            self.options = options;
        }
        self.cards.clear();
        self.initialize();
        self
    }

    /// Number of cards left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Borrowed view of the cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Owned snapshot of the cards, bottom first.
    ///
    /// Changes to the returned vector do not affect the deck.
    #[must_use]
    pub fn all_cards(&self) -> Vec<Card> {
        self.cards.clone()
    }

    /// Options the deck was last built from.
    #[must_use]
    pub fn options(&self) -> &DeckOptions {
        &self.options
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
