// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A deck of cards.
use rand::prelude::*;

use crate::{Card, CardError, Face, Suit};

/// A cards Deck, cards are drawn from the top (the front of the deck).
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in a standard deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Creates a deck with no cards.
    pub fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// Shuffles the remaining cards using the given randomness.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals the top card from the deck.
    pub fn deal(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    /// Draws the top `n` cards and removes them from the deck.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>, CardError> {
        if n > self.cards.len() {
            return Err(CardError::NotEnoughCards {
                requested: n,
                available: self.cards.len(),
            });
        }

        Ok(self.cards.drain(..n).collect())
    }

    /// Removes a specific card from the deck, returns `None` if the card is not
    /// in the deck.
    pub fn draw_card(&mut self, card: Card) -> Option<Card> {
        let pos = self.cards.iter().position(|c| *c == card)?;
        Some(self.cards.remove(pos))
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Checks if the deck contains a card.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// The cards left in the deck, top first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The probability that the next card has the given face.
    pub fn face_probability(&self, face: Face) -> f64 {
        self.probability(|c| c.face() == face)
    }

    /// The probability that the next card has the given suit.
    pub fn suit_probability(&self, suit: Suit) -> f64 {
        self.probability(|c| c.suit() == Some(suit))
    }

    fn probability<F>(&self, f: F) -> f64
    where
        F: Fn(&Card) -> bool,
    {
        if self.cards.is_empty() {
            return 0.0;
        }

        let count = self.cards.iter().filter(|c| f(c)).count();
        count as f64 / self.cards.len() as f64
    }

    /// Calls the `f` closure for each k-cards hand in the deck.
    pub fn for_each<F>(&self, k: usize, f: F)
    where
        F: FnMut(&[Card]),
    {
        for_each_subset(&self.cards, k, f);
    }
}

impl Default for Deck {
    /// A standard 52 cards deck sorted by suit and face.
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Face::faces().map(move |f| Card::new(f, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl From<Vec<Card>> for Deck {
    /// A stacked deck, the first card is the top of the deck.
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

/// Calls the `f` closure for each k-subset of `items`.
///
/// Subsets are visited in colex order, nothing is called if `k` is zero or
/// larger than the number of items.
pub fn for_each_subset<T, F>(items: &[T], k: usize, mut f: F)
where
    T: Copy,
    F: FnMut(&[T]),
{
    let n = items.len();
    if k == 0 || k > n {
        return;
    }

    // Algorithm L from TAOCP 4a, c[1..=k] are the positions of the subset
    // items and c[k + 1], c[k + 2] are sentinels.
    let mut c = (0..k + 3).map(|i| i.saturating_sub(1)).collect::<Vec<_>>();
    c[k + 1] = n;
    c[k + 2] = 0;

    let mut subset = Vec::with_capacity(k);
    loop {
        subset.clear();
        subset.extend(c[1..=k].iter().map(|&pos| items[pos]));
        f(&subset);

        let mut j = 1;
        while c[j] + 1 == c[j + 1] {
            c[j] = j - 1;
            j += 1;
        }

        if j > k {
            break;
        }

        c[j] += 1;
    }
}
