//! Die types and single-die results.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::error::{Error, Result};

/// Most dice a single roll produces. Notation asking for more is rejected;
/// numeric rolls asking for more are clamped.
pub const MAX_DICE: usize = 10_000;

/// Supported die: d4, d6, d8, d10, d12, d20 or d100.
///
/// Serializes as its side count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum DieType {
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
    D100,
}

impl DieType {
    /// Every supported die, smallest first.
    pub const ALL: [DieType; 7] = [
        DieType::D4,
        DieType::D6,
        DieType::D8,
        DieType::D10,
        DieType::D12,
        DieType::D20,
        DieType::D100,
    ];

    /// Number of faces.
    #[must_use]
    pub const fn sides(self) -> u32 {
        match self {
            DieType::D4 => 4,
            DieType::D6 => 6,
            DieType::D8 => 8,
            DieType::D10 => 10,
            DieType::D12 => 12,
            DieType::D20 => 20,
            DieType::D100 => 100,
        }
    }
}

impl TryFrom<u32> for DieType {
    type Error = Error;

    fn try_from(sides: u32) -> Result<Self> {
        DieType::ALL
            .into_iter()
            .find(|die| die.sides() == sides)
            .ok_or(Error::InvalidDieType(sides))
    }
}

impl From<DieType> for u32 {
    fn from(die: DieType) -> Self {
        die.sides()
    }
}

impl fmt::Display for DieType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// Outcome of one die: the face rolled and the die it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DieResult {
    /// Face value, in `1..=die_type.sides()`.
    pub value: u32,
    pub die_type: DieType,
}

impl DieResult {
    #[must_use]
    pub const fn new(value: u32, die_type: DieType) -> Self {
        Self { value, die_type }
    }
}

impl fmt::Display for DieResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.value, self.die_type)
    }
}
