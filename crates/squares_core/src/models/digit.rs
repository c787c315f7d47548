//! Digits and coordinate keys
//!
//! A grid cell is addressed either physically (`row * 10 + col`) or by the
//! pair of trailing score digits that land on it. The latter is the
//! coordinate key, written `"{top}-{left}"`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BoardError;

/// A single axis digit, always in 0..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    /// Trailing digit of a cumulative score.
    #[inline]
    pub fn from_score(score: u32) -> Self {
        Self((score % 10) as u8)
    }

    /// Trailing digit of a summed total.
    #[inline]
    pub fn from_total(total: u64) -> Self {
        Self((total % 10) as u8)
    }

    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }

    /// All ten digits in ascending order.
    pub fn all() -> impl Iterator<Item = Digit> {
        (0..=9).map(Digit)
    }
}

impl TryFrom<u8> for Digit {
    type Error = BoardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Digit::new(value).ok_or(BoardError::InvalidDigit(value))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cell address expressed as trailing score digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CoordinateKey {
    pub top: Digit,
    pub left: Digit,
}

impl CoordinateKey {
    pub fn new(top: Digit, left: Digit) -> Self {
        Self { top, left }
    }

    /// Key for a pair of cumulative scores.
    pub fn from_scores(top_score: u32, left_score: u32) -> Self {
        Self { top: Digit::from_score(top_score), left: Digit::from_score(left_score) }
    }

    pub fn from_totals(top_total: u64, left_total: u64) -> Self {
        Self { top: Digit::from_total(top_total), left: Digit::from_total(left_total) }
    }
}

impl fmt::Display for CoordinateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.top, self.left)
    }
}

impl FromStr for CoordinateKey {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || BoardError::InvalidCoordinateKey(s.to_string());
        let (top, left) = s.split_once('-').ok_or_else(malformed)?;
        let parse = |part: &str| -> Result<Digit, BoardError> {
            let value: u8 = part.trim().parse().map_err(|_| malformed())?;
            Digit::new(value).ok_or_else(malformed)
        };
        Ok(Self { top: parse(top)?, left: parse(left)? })
    }
}

impl TryFrom<String> for CoordinateKey {
    type Error = BoardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CoordinateKey> for String {
    fn from(key: CoordinateKey) -> Self {
        key.to_string()
    }
}
