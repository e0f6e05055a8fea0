// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Starting hands ranges.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{Card, CardError, Face, Suit};

/// A starting hand range in the usual notation, `"AKs"`, `"T9o"` or `"QQ"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PokerRange {
    high: Face,
    low: Face,
    suited: bool,
}

impl PokerRange {
    /// Creates a range for two faces, the faces can be in any order.
    ///
    /// Jokers and suited pairs are invalid.
    pub fn new(f0: Face, f1: Face, suited: bool) -> Result<Self, CardError> {
        let (high, low) = if f0 >= f1 { (f0, f1) } else { (f1, f0) };
        let range = Self { high, low, suited };

        if high == Face::Joker || (suited && high == low) {
            return Err(CardError::InvalidRange(range.to_string()));
        }

        Ok(range)
    }

    /// The higher face.
    pub fn high(&self) -> Face {
        self.high
    }

    /// The lower face.
    pub fn low(&self) -> Face {
        self.low
    }

    /// Checks if this is a suited range.
    pub fn is_suited(&self) -> bool {
        self.suited
    }

    /// Checks if this is a pocket pair.
    pub fn is_pair(&self) -> bool {
        self.high == self.low
    }

    /// Expands this range into all the two cards holdings it contains.
    pub fn combos(&self) -> Vec<[Card; 2]> {
        let mut combos = Vec::with_capacity(12);

        for s0 in Suit::suits() {
            for s1 in Suit::suits() {
                let keep = if self.is_pair() {
                    s0 < s1
                } else if self.suited {
                    s0 == s1
                } else {
                    s0 != s1
                };

                if keep {
                    combos.push([Card::new(self.high, s0), Card::new(self.low, s1)]);
                }
            }
        }

        combos
    }

    /// Checks if the two cards are a holding of this range.
    pub fn contains(&self, c0: Card, c1: Card) -> bool {
        let (high, low) = if c0.face() >= c1.face() {
            (c0, c1)
        } else {
            (c1, c0)
        };

        high != low
            && high.face() == self.high
            && low.face() == self.low
            && (self.is_pair() || (high.suit() == low.suit()) == self.suited)
    }
}

impl fmt::Display for PokerRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let high = self.high.to_string().to_ascii_uppercase();
        let low = self.low.to_string().to_ascii_uppercase();

        if self.is_pair() {
            write!(f, "{high}{low}")
        } else if self.suited {
            write!(f, "{high}{low}s")
        } else {
            write!(f, "{high}{low}o")
        }
    }
}

impl FromStr for PokerRange {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CardError::InvalidRange(s.to_string());

        let chars = s.chars().collect::<Vec<_>>();
        let (f0, f1, suited) = match chars.as_slice() {
            [f0, f1] => (*f0, *f1, false),
            [f0, f1, 's' | 'S'] => (*f0, *f1, true),
            [f0, f1, 'o' | 'O'] => (*f0, *f1, false),
            _ => return Err(invalid()),
        };

        let f0 = Face::parse(f0).ok_or_else(invalid)?;
        let f1 = Face::parse(f1).ok_or_else(invalid)?;

        // Two different faces need the suited/offsuit qualifier, a pair must not
        // have one.
        if (f0 == f1) != (chars.len() == 2) {
            return Err(invalid());
        }

        PokerRange::new(f0, f1, suited)
    }
}

impl TryFrom<String> for PokerRange {
    type Error = CardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<PokerRange> for String {
    fn from(range: PokerRange) -> Self {
        range.to_string()
    }
}
