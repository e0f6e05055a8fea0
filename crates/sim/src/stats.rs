// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Sample size statistics.
use anyhow::{Result, bail};

use showdown_cards::Deck;

/// Returns the binomial coefficient for n choose k.
pub fn nck(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }

    // Each partial product is itself a binomial coefficient so the division is
    // always exact.
    let k = k.min(n - k);
    (0..k).fold(1u128, |acc, i| acc * (n - i) as u128 / (i + 1) as u128) as u64
}

/// The number of distinct deals, hole cards and board, for a number of players.
pub fn possible_hand_count(players: usize) -> Result<u64> {
    let cards = 2 * players + 5;
    if cards > Deck::SIZE {
        bail!("Cannot deal {players} players from a {} cards deck", Deck::SIZE);
    }

    Ok(nck(Deck::SIZE as u64, cards as u64))
}

/// Slovin's formula, the sample size for a population of `n` with error margin
/// `e`.
pub fn slovin(n: u64, e: f64) -> u64 {
    let n = n as f64;
    (n / (1.0 + n * e * e)).ceil() as u64
}
