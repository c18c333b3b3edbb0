//! Dice notation: `"d20"`, `"3d6"`, `"2D8"`.
//!
//! Grammar (case-insensitive, surrounding whitespace ignored):
//!
//! ```text
//! notation := count? ('d' | 'D') sides
//! count    := digit+          (defaults to 1, at most MAX_DICE)
//! sides    := digit+          (must be a supported die)
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::die::{DieType, MAX_DICE};
use crate::core::error::{Error, Result};

/// A parsed roll request: how many dice of which type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RollSpec {
    pub count: usize,
    pub die: DieType,
}

impl RollSpec {
    #[must_use]
    pub const fn new(count: usize, die: DieType) -> Self {
        Self { count, die }
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for RollSpec {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let invalid = || Error::InvalidNotation(input.to_string());

        let (count, sides) = input
            .trim()
            .split_once(|c: char| c.eq_ignore_ascii_case(&'d'))
            .ok_or_else(invalid)?;
        if !(count.is_empty() || is_digits(count)) || !is_digits(sides) {
            return Err(invalid());
        }

        let count = if count.is_empty() {
            1
        } else {
            count
                .parse::<usize>()
                .ok()
                .filter(|&count| count <= MAX_DICE)
                .ok_or_else(invalid)?
        };
        // Digits only, so parsing can fail only on overflow: far too many sides.
        let sides = sides.parse::<u32>().unwrap_or(u32::MAX);

        Ok(Self::new(count, DieType::try_from(sides)?))
    }
}

impl fmt::Display for RollSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.count, self.die)
    }
}
