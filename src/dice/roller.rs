//! Dice roller with last-roll queries.
//!
//! A `DiceRoller` keeps the results of its most recent roll. Each roll
//! replaces them; the query methods (`sum`, `keep_highest`, ...) read them
//! without mutating.
//!
//! ## Usage
//!
//! ```
//! use card_wizard::dice::DiceRoller;
//!
//! let mut roller = DiceRoller::new();
//! let rolled = roller.roll_notation("4d6").unwrap();
//! assert_eq!(rolled.len(), 4);
//!
//! // Classic stat roll: 4d6, drop the lowest
//! let best: u32 = roller.keep_highest(3).iter().map(|d| d.value).sum();
//! assert!((3..=18).contains(&best));
//! ```

use log::trace;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use std::cmp::Reverse;

use super::die::{DieResult, DieType, MAX_DICE};
use super::notation::RollSpec;
use crate::core::error::Result;
use crate::core::rng::GameRng;

/// A batch of die results.
///
/// SmallVec keeps typical rolls (8 dice or fewer) off the heap.
pub type DiceBatch = SmallVec<[DieResult; 8]>;

/// Rolls dice and answers questions about the last roll.
#[derive(Clone, Debug, Default)]
pub struct DiceRoller {
    /// Results of the most recent roll. Empty before the first roll.
    results: DiceBatch,
    rng: GameRng,
}

impl DiceRoller {
    /// Create a roller seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }

    /// Create a roller that draws randomness from `rng`.
    #[must_use]
    pub fn with_rng(rng: GameRng) -> Self {
        Self {
            results: DiceBatch::new(),
            rng,
        }
    }

    /// Roll `count` dice of type `die`, each uniform in `[1, sides]`.
    ///
    /// `count` is clamped to `MAX_DICE`. Replaces the stored last roll and
    /// returns a copy of it.
    pub fn roll(&mut self, count: usize, die: DieType) -> DiceBatch {
        let count = count.min(MAX_DICE);
        let sides = die.sides();
        self.results = (0..count)
            .map(|_| DieResult::new(self.rng.gen_die(sides), die))
            .collect();
        trace!("rolled {}{}: {:?}", count, die, self.results);
        self.results.clone()
    }

    /// Roll `count` dice with `sides` faces.
    ///
    /// # Errors
    /// `Error::InvalidDieType` if `sides` is not a supported die. The stored
    /// last roll is left untouched.
    pub fn roll_sides(&mut self, count: usize, sides: u32) -> Result<DiceBatch> {
        let die = DieType::try_from(sides)?;
        Ok(self.roll(count, die))
    }

    /// Roll from notation such as `"d20"` or `"3d6"`.
    ///
    /// # Errors
    /// `Error::InvalidNotation` if the string is malformed,
    /// `Error::InvalidDieType` if the side count is unsupported. The stored
    /// last roll is left untouched on error.
    pub fn roll_notation(&mut self, notation: &str) -> Result<DiceBatch> {
        let spec: RollSpec = notation.parse()?;
        Ok(self.roll_spec(spec))
    }

    /// Roll an already-parsed request.
    pub fn roll_spec(&mut self, spec: RollSpec) -> DiceBatch {
        self.roll(spec.count, spec.die)
    }

    /// Results of the last roll.
    #[must_use]
    pub fn results(&self) -> &[DieResult] {
        &self.results
    }

    /// Sum of the last roll's values. 0 before any roll.
    #[must_use]
    pub fn sum(&self) -> u64 {
        self.results.iter().map(|die| u64::from(die.value)).sum()
    }

    /// Last-roll results matching `predicate`, in roll order.
    pub fn filter_dice<P>(&self, mut predicate: P) -> DiceBatch
    where
        P: FnMut(&DieResult) -> bool,
    {
        self.results.iter().filter(|die| predicate(die)).copied().collect()
    }

    /// Last-roll results whose value is in `values`.
    #[must_use]
    pub fn keep_values(&self, values: &[u32]) -> DiceBatch {
        let wanted: FxHashSet<u32> = values.iter().copied().collect();
        self.filter_dice(|die| wanted.contains(&die.value))
    }

    /// Last-roll results whose value is not in `values`.
    #[must_use]
    pub fn remove_values(&self, values: &[u32]) -> DiceBatch {
        let unwanted: FxHashSet<u32> = values.iter().copied().collect();
        self.filter_dice(|die| !unwanted.contains(&die.value))
    }

    /// The `n` highest results, highest first. Ties keep roll order.
    #[must_use]
    pub fn keep_highest(&self, n: usize) -> DiceBatch {
        let mut sorted = self.results.clone();
        sorted.sort_by_key(|die| Reverse(die.value));
        sorted.truncate(n);
        sorted
    }

    /// The `n` lowest results, lowest first. Ties keep roll order.
    #[must_use]
    pub fn keep_lowest(&self, n: usize) -> DiceBatch {
        let mut sorted = self.results.clone();
        sorted.sort_by_key(|die| die.value);
        sorted.truncate(n);
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Error;

    fn roller_with(values: &[u32]) -> DiceRoller {
        let mut roller = DiceRoller::with_rng(GameRng::new(42));
        roller.results = values.iter().map(|&v| DieResult::new(v, DieType::D6)).collect();
        roller
    }

    fn values(batch: &[DieResult]) -> Vec<u32> {
        batch.iter().map(|d| d.value).collect()
    }

    #[test]
    fn test_empty_before_roll() {
        let roller = DiceRoller::new();
        assert!(roller.results().is_empty());
        assert_eq!(roller.sum(), 0);
        assert!(roller.keep_highest(3).is_empty());
    }

    #[test]
    fn test_roll_replaces_results() {
        let mut roller = DiceRoller::with_rng(GameRng::new(1));
        roller.roll(5, DieType::D6);
        let second = roller.roll(2, DieType::D20);

        assert_eq!(roller.results(), second.as_slice());
        assert!(roller.results().iter().all(|d| d.die_type == DieType::D20));
    }

    #[test]
    fn test_failed_roll_keeps_results() {
        let mut roller = DiceRoller::with_rng(GameRng::new(1));
        let first = roller.roll(3, DieType::D8);

        assert_eq!(roller.roll_sides(3, 7), Err(Error::InvalidDieType(7)));
        assert!(matches!(roller.roll_notation("xyz"), Err(Error::InvalidNotation(_))));
        assert_eq!(roller.results(), first.as_slice());
    }

    #[test]
    fn test_sum() {
        assert_eq!(roller_with(&[1, 6, 3]).sum(), 10);
    }

    #[test]
    fn test_keep_and_remove_values() {
        let roller = roller_with(&[1, 2, 5, 2, 6]);
        assert_eq!(values(&roller.keep_values(&[2, 6])), vec![2, 2, 6]);
        assert_eq!(values(&roller.remove_values(&[2, 6])), vec![1, 5]);
        assert_eq!(values(&roller.keep_values(&[])), Vec::<u32>::new());
    }

    #[test]
    fn test_keep_highest_and_lowest() {
        let roller = roller_with(&[3, 6, 1, 6, 4]);
        assert_eq!(values(&roller.keep_highest(3)), vec![6, 6, 4]);
        assert_eq!(values(&roller.keep_lowest(2)), vec![1, 3]);
        assert_eq!(values(&roller.keep_highest(10)), vec![6, 6, 4, 3, 1]);
        assert!(roller.keep_lowest(0).is_empty());
    }

    #[test]
    fn test_ties_keep_roll_order() {
        let mut roller = DiceRoller::with_rng(GameRng::new(3));
        roller.results = [(5, DieType::D6), (5, DieType::D8), (2, DieType::D4)]
            .into_iter()
            .map(|(v, d)| DieResult::new(v, d))
            .collect();

        let highest = roller.keep_highest(2);
        assert_eq!(highest[0].die_type, DieType::D6);
        assert_eq!(highest[1].die_type, DieType::D8);
    }

    #[test]
    fn test_lowest_ties_keep_roll_order() {
        let mut roller = DiceRoller::with_rng(GameRng::new(3));
        roller.results = [(6, DieType::D6), (1, DieType::D10), (1, DieType::D4), (1, DieType::D8)]
            .into_iter()
            .map(|(v, d)| DieResult::new(v, d))
            .collect();

        let lowest = roller.keep_lowest(3);
        let dice: Vec<_> = lowest.iter().map(|d| d.die_type).collect();
        assert_eq!(dice, vec![DieType::D10, DieType::D4, DieType::D8]);
    }

    #[test]
    fn test_oversized_notation_is_an_error() {
        let mut roller = DiceRoller::with_rng(GameRng::new(1));
        let first = roller.roll(2, DieType::D6);

        assert!(matches!(
            roller.roll_notation("9999999999999999999d6"),
            Err(Error::InvalidNotation(_))
        ));
        assert_eq!(roller.results(), first.as_slice());
    }

    #[test]
    fn test_numeric_count_clamps_to_max_dice() {
        let mut roller = DiceRoller::with_rng(GameRng::new(1));
        assert_eq!(roller.roll(usize::MAX, DieType::D4).len(), MAX_DICE);
        assert_eq!(roller.roll_sides(MAX_DICE + 5, 4).map(|r| r.len()), Ok(MAX_DICE));
    }

    #[test]
    fn test_filter_does_not_mutate() {
        let roller = roller_with(&[1, 2, 3, 4]);
        let evens = roller.filter_dice(|d| d.value % 2 == 0);
        assert_eq!(values(&evens), vec![2, 4]);
        assert_eq!(roller.results().len(), 4);
    }
}
