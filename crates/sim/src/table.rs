// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Simulated table hands.
use ahash::AHashSet;
use anyhow::{Result, anyhow, bail};
use rand::prelude::*;
use std::{collections::BTreeMap, fmt, str::FromStr};

use showdown_cards::{Card, Deck, PokerRange, parse_cards};
use showdown_eval::find_table_winners;

/// The hole cards a seat is dealt in every simulated hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Holding {
    /// Two specific cards.
    Cards([Card; 2]),
    /// A random holding from a starting hand range.
    Range(PokerRange),
}

impl FromStr for Holding {
    type Err = anyhow::Error;

    /// Parses two cards, `"ahkd"`, or a range, `"AKs"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == 4 {
            if let Ok(cards) = parse_cards(s) {
                if cards[0] == cards[1] {
                    bail!("Duplicate card {} in holding {s}", cards[0]);
                }

                return Ok(Holding::Cards([cards[0], cards[1]]));
            }
        }

        let range = s
            .parse::<PokerRange>()
            .map_err(|e| anyhow!("Invalid holding {s}: {e}"))?;
        Ok(Holding::Range(range))
    }
}

impl fmt::Display for Holding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Holding::Cards([c0, c1]) => write!(f, "{c0}{c1}"),
            Holding::Range(range) => write!(f, "{range}"),
        }
    }
}

/// The outcome of a simulated hand.
#[derive(Debug, Clone)]
pub struct Deal {
    /// The hole cards for each seat, folded seats included.
    pub holes: BTreeMap<usize, [Card; 2]>,
    /// The five board cards.
    pub board: Vec<Card>,
    /// The seats that won the hand.
    pub winners: Vec<usize>,
}

/// A table with fixed holdings and folded seats.
#[derive(Debug, Clone)]
pub struct Table {
    seats: usize,
    holdings: BTreeMap<usize, Holding>,
    folds: AHashSet<usize>,
}

impl Table {
    /// The maximum number of seats that can be dealt from a deck.
    pub const MAX_SEATS: usize = (Deck::SIZE - 5) / 2;

    /// Creates a new table.
    pub fn new(
        seats: usize,
        holdings: impl IntoIterator<Item = (usize, Holding)>,
        folds: impl IntoIterator<Item = usize>,
    ) -> Result<Self> {
        if !(2..=Self::MAX_SEATS).contains(&seats) {
            bail!("Invalid number of seats {seats}, must be 2..={}", Self::MAX_SEATS);
        }

        let mut fixed = BTreeMap::new();
        let mut dealt = AHashSet::new();
        for (seat, holding) in holdings {
            if seat >= seats {
                bail!("Invalid seat {seat} for holding {holding}");
            }

            if let Holding::Cards(cards) = holding {
                for c in cards {
                    if !dealt.insert(c) {
                        bail!("Card {c} is dealt more than once");
                    }
                }
            }

            if fixed.insert(seat, holding).is_some() {
                bail!("Seat {seat} has more than one holding");
            }
        }

        let folds = folds.into_iter().collect::<AHashSet<_>>();
        if let Some(seat) = folds.iter().find(|s| **s >= seats) {
            bail!("Invalid folded seat {seat}");
        }

        Ok(Self {
            seats,
            holdings: fixed,
            folds,
        })
    }

    /// The number of seats.
    pub fn seats(&self) -> usize {
        self.seats
    }

    /// Deals a hand and finds the winning seats.
    ///
    /// Fixed cards are dealt first, then range holdings, then random cards for
    /// the remaining seats and the board. Folded seats are dealt but cannot win.
    pub fn simulate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Deal> {
        let mut deck = Deck::new_and_shuffled(rng);
        let mut holes = BTreeMap::new();

        for (&seat, holding) in &self.holdings {
            if let Holding::Cards(cards) = holding {
                for &c in cards {
                    deck.draw_card(c)
                        .ok_or_else(|| anyhow!("Card {c} is not in the deck"))?;
                }

                holes.insert(seat, *cards);
            }
        }

        for (&seat, holding) in &self.holdings {
            if let Holding::Range(range) = holding {
                let combos = range
                    .combos()
                    .into_iter()
                    .filter(|cards| cards.iter().all(|c| deck.contains(*c)))
                    .collect::<Vec<_>>();

                let cards = *combos
                    .choose(rng)
                    .ok_or_else(|| anyhow!("No {range} holding left for seat {seat}"))?;

                for c in cards {
                    deck.remove(c);
                }

                holes.insert(seat, cards);
            }
        }

        for seat in 0..self.seats {
            if !holes.contains_key(&seat) {
                let cards = deck.draw(2)?;
                holes.insert(seat, [cards[0], cards[1]]);
            }
        }

        let board = deck.draw(5)?;
        let live = holes.iter().filter(|(seat, _)| !self.folds.contains(*seat));
        let winners = find_table_winners(&board, live)?;

        Ok(Deal {
            holes,
            board,
            winners,
        })
    }
}
