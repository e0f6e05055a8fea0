// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate defines types to create and parse cards:
//!
//! ```
//! # use showdown_cards::{Card, Face, Suit};
//! let ah = Card::new(Face::Ace, Suit::Hearts);
//! assert_eq!(ah, "ah".parse::<Card>().unwrap());
//! assert_eq!(ah.to_string(), "ah");
//! ```
//!
//! a [Deck] type for shuffling, drawing, and iterating cards in the deck:
//!
//! ```
//! # use showdown_cards::Deck;
//! # use rand::{SeedableRng, rngs::StdRng};
//! let mut deck = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(42));
//! let hole = deck.draw(2).unwrap();
//! assert_eq!(hole.len(), 2);
//! assert_eq!(deck.count(), Deck::SIZE - 2);
//!
//! // Iterate through all 2 cards holdings.
//! let mut counter = 0;
//! Deck::default().for_each(2, |_| counter += 1);
//! assert_eq!(counter, 1_326);
//! ```
//!
//! and a [PokerRange] type that expands a starting hand notation into all the
//! concrete holdings:
//!
//! ```
//! # use showdown_cards::PokerRange;
//! let range = "AKs".parse::<PokerRange>().unwrap();
//! assert_eq!(range.combos().len(), 4);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

mod card;
pub use card::{Card, Face, Suit, parse_cards};

mod deck;
pub use deck::{Deck, for_each_subset};

mod range;
pub use range::PokerRange;

/// Cards errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    /// A card face character is not one of `23456789tjqka`.
    #[error("invalid card face '{0}'")]
    InvalidFace(char),
    /// A card suit character is not one of `cdhs`.
    #[error("invalid card suit '{0}'")]
    InvalidSuit(char),
    /// A card id is not a valid face and suit encoding.
    #[error("invalid card id {0}")]
    InvalidId(u8),
    /// A card string has the wrong number of characters.
    #[error("invalid cards string \"{0}\"")]
    InvalidLength(String),
    /// A starting hand range string is invalid.
    #[error("invalid range \"{0}\"")]
    InvalidRange(String),
    /// There are not enough cards left in the deck.
    #[error("cannot draw {requested} cards from a deck with {available} cards")]
    NotEnoughCards {
        /// The number of cards requested.
        requested: usize,
        /// The number of cards in the deck.
        available: usize,
    },
}
