// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Texas Hold'em hand classification and ranking. A five cards [Hand] is
//! classified into one of ten categories with two kickers, hands are totally
//! ordered using the Hold'em rules so that they can be compared and sorted:
//!
//! ```
//! # use showdown_eval::*;
//! let wheel = "ac2h3d4h5s".parse::<Hand>().unwrap();
//! let six_high = "3d4h5s6s7s".parse::<Hand>().unwrap();
//! assert_eq!(wheel.rank(), HandRank::Straight);
//! assert!(wheel < six_high);
//!
//! // Suits don't break ties.
//! assert_eq!(wheel, "as2s3d4h5c".parse::<Hand>().unwrap());
//! ```
//!
//! Use [find_best_hand] to find the best hand for a player's hole cards and the
//! board, and [find_winners] to resolve a showdown:
//!
//! ```
//! # use showdown_eval::*;
//! let board = parse_cards("6h5ckh8c3h").unwrap();
//! let hands = [("qc9d", 0), ("kd8d", 1), ("ah7c", 2)]
//!     .into_iter()
//!     .map(|(hole, seat)| {
//!         let hole = parse_cards(hole).unwrap();
//!         (seat, find_best_hand(&hole, &board).unwrap())
//!     })
//!     .collect::<Vec<_>>();
//!
//! let winners = find_winners(hands.iter().map(|(seat, hand)| (seat, hand)));
//! assert_eq!(winners, vec![1]);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use ahash::AHashSet;

pub mod hand;
pub use hand::{Hand, HandRank, is_straight};

pub mod search;
pub use search::{best_hand, find_best_hand};

pub mod showdown;
pub use showdown::{find_table_winners, find_winners};

// Reexport cards types.
pub use showdown_cards::{Card, CardError, Deck, Face, Suit, parse_cards};

/// Hand evaluation errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The wrong number of cards was given.
    #[error("expected {expected} cards, found {found}")]
    CardCount {
        /// The expected number of cards.
        expected: usize,
        /// The number of cards given.
        found: usize,
    },
    /// The same card was given more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// Jokers cannot be ranked in Hold'em.
    #[error("jokers cannot be ranked")]
    Joker,
    /// Invalid cards string.
    #[error("invalid cards: {0}")]
    Card(#[from] CardError),
}

/// Checks that all the cards are distinct and that there are no jokers.
pub(crate) fn check_cards(cards: &[Card]) -> Result<(), EvalError> {
    let mut seen = AHashSet::with_capacity(cards.len());
    for &c in cards {
        if c.is_joker() {
            return Err(EvalError::Joker);
        }

        if !seen.insert(c) {
            return Err(EvalError::DuplicateCard(c));
        }
    }

    Ok(())
}
