// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::CardError;

/// A Poker card.
///
/// A card is packed in a single byte with the following format:
///
/// ```text
///   +--------+
///   |xxffffss|
///   +--------+
///   s = suit of card (clubs=0,diamonds=1,hearts=2,spades=3)
///   f = face of card (deuce=2,trey=3,...,ace=14,joker=15)
/// ```
///
/// Two cards are equal only if both face and suit match, Hold'em ranking code
/// compares cards using [Card::face] and ignores the suit.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

impl Card {
    /// Create a card given a face and a suit.
    ///
    /// A [Face::Joker] has no suit, the suit is ignored and the result is the
    /// same as [Card::joker].
    pub const fn new(face: Face, suit: Suit) -> Card {
        if matches!(face, Face::Joker) {
            Card::joker()
        } else {
            Card(((face as u8) << 2) | suit as u8)
        }
    }

    /// Create a joker.
    pub const fn joker() -> Card {
        Card((Face::Joker as u8) << 2)
    }

    /// This card unique id.
    pub fn id(&self) -> u8 {
        self.0
    }

    /// Returns the card face.
    pub fn face(&self) -> Face {
        match (self.0 >> 2) & 0xf {
            2 => Face::Deuce,
            3 => Face::Trey,
            4 => Face::Four,
            5 => Face::Five,
            6 => Face::Six,
            7 => Face::Seven,
            8 => Face::Eight,
            9 => Face::Nine,
            10 => Face::Ten,
            11 => Face::Jack,
            12 => Face::Queen,
            13 => Face::King,
            14 => Face::Ace,
            15 => Face::Joker,
            _ => panic!("Invalid face 0x{:x}", self.0),
        }
    }

    /// Returns the card suit, a joker has no suit.
    pub fn suit(&self) -> Option<Suit> {
        if self.is_joker() {
            return None;
        }

        let suit = match self.0 & 0x3 {
            0 => Suit::Clubs,
            1 => Suit::Diamonds,
            2 => Suit::Hearts,
            _ => Suit::Spades,
        };

        Some(suit)
    }

    /// Checks if this card is a joker.
    pub fn is_joker(&self) -> bool {
        ((self.0 >> 2) & 0xf) == Face::Joker as u8
    }
}

impl TryFrom<u8> for Card {
    type Error = CardError;

    /// Converts a card id back to a card, only ids built by [Card::new] are
    /// valid.
    fn try_from(id: u8) -> Result<Self, Self::Error> {
        let valid = match id >> 2 {
            2..=14 => true,
            15 => id == Card::joker().id(),
            _ => false,
        };

        if valid {
            Ok(Card(id))
        } else {
            Err(CardError::InvalidId(id))
        }
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.suit() {
            Some(suit) => write!(f, "{}{}", self.face(), suit),
            None => write!(f, "jk"),
        }
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({self})")
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses the two characters form of a card, i.e. `"2c"`, `"th"`, `"as"`
    /// or `"jk"` for a joker.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars().map(|c| c.to_ascii_lowercase());
        let (Some(f), Some(s), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CardError::InvalidLength(s.to_string()));
        };

        if (f, s) == ('j', 'k') {
            return Ok(Card::joker());
        }

        let face = Face::from_char(f).ok_or(CardError::InvalidFace(f))?;
        let suit = Suit::from_char(s).ok_or(CardError::InvalidSuit(s))?;
        Ok(Card::new(face, suit))
    }
}

/// Parses a string of concatenated cards, i.e. `"2sts4c2hac"`.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, CardError> {
    if s.len() % 2 != 0 || !s.is_ascii() {
        return Err(CardError::InvalidLength(s.to_string()));
    }

    (0..s.len())
        .step_by(2)
        .map(|pos| s[pos..pos + 2].parse())
        .collect()
}

/// Card face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Face {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
    /// Joker, above all the other faces.
    Joker,
}

impl Face {
    /// Returns all the faces in a standard deck, deuce to ace.
    pub fn faces() -> impl DoubleEndedIterator<Item = Face> {
        use Face::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The numeric value of this face (2..=14, 15 for a joker).
    pub fn value(&self) -> u8 {
        *self as u8
    }

    fn from_char(c: char) -> Option<Face> {
        let face = match c {
            '2' => Face::Deuce,
            '3' => Face::Trey,
            '4' => Face::Four,
            '5' => Face::Five,
            '6' => Face::Six,
            '7' => Face::Seven,
            '8' => Face::Eight,
            '9' => Face::Nine,
            't' => Face::Ten,
            'j' => Face::Jack,
            'q' => Face::Queen,
            'k' => Face::King,
            'a' => Face::Ace,
            _ => return None,
        };

        Some(face)
    }

    pub(crate) fn parse(c: char) -> Option<Face> {
        Face::from_char(c.to_ascii_lowercase())
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let face = match self {
            Face::Deuce => '2',
            Face::Trey => '3',
            Face::Four => '4',
            Face::Five => '5',
            Face::Six => '6',
            Face::Seven => '7',
            Face::Eight => '8',
            Face::Nine => '9',
            Face::Ten => 't',
            Face::Jack => 'j',
            Face::Queen => 'q',
            Face::King => 'k',
            Face::Ace => 'a',
            Face::Joker => '*',
        };

        write!(f, "{face}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds = 1,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 3,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    fn from_char(c: char) -> Option<Suit> {
        match c {
            'c' => Some(Suit::Clubs),
            'd' => Some(Suit::Diamonds),
            'h' => Some(Suit::Hearts),
            's' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        };

        write!(f, "{suit}")
    }
}
