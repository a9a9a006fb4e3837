//! Square selector validation
//!
//! Players pick squares with the numbers 1-9, counted row by row from the
//! top-left. Internally the board uses 0-indexed (row, col) coordinates;
//! this module owns the translation.

use std::str::FromStr;

/// A validated 1-9 square index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selector(u8);

impl Selector {
    /// Parse a selector from raw user input
    ///
    /// # Errors
    ///
    /// Returns `NotANumber` if the trimmed input is not a base-10 integer
    /// and `OutOfRange` if it parses but is not in `[1, 9]`. A signed value
    /// like `-3` is a number, so it fails the range check rather than the
    /// numeric one.
    pub fn parse(input: &str) -> Result<Self, crate::Error> {
        let trimmed = input.trim();
        let value: i64 = trimmed.parse().map_err(|_| crate::Error::NotANumber {
            input: trimmed.to_string(),
        })?;
        if !(1..=9).contains(&value) {
            return Err(crate::Error::OutOfRange { value });
        }
        Ok(Selector(value as u8))
    }

    /// The raw 1-9 value
    pub fn value(self) -> u8 {
        self.0
    }

    /// 0-indexed row on the board
    pub fn row(self) -> usize {
        (self.0 as usize - 1) / 3
    }

    /// 0-indexed column on the board
    pub fn col(self) -> usize {
        (self.0 as usize - 1) % 3
    }
}

impl FromStr for Selector {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
