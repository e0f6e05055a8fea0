// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown winners resolution.
use ahash::AHashSet;
use std::cmp::Ordering;

use showdown_cards::Card;

use crate::{EvalError, Hand, find_best_hand};

/// Finds the seats with the best hand.
///
/// Folded seats should not be passed in. More than one seat is returned when
/// the best hands tie, the seats are sorted so that the result doesn't depend
/// on the iteration order, an empty input returns no winners.
pub fn find_winners<'a, S>(hands: impl IntoIterator<Item = (&'a S, &'a Hand)>) -> Vec<S>
where
    S: Copy + Ord + 'a,
{
    let mut best: Option<&Hand> = None;
    let mut winners = Vec::new();

    for (seat, hand) in hands {
        match best.map(|b| hand.cmp(b)) {
            None | Some(Ordering::Greater) => {
                best = Some(hand);
                winners.clear();
                winners.push(*seat);
            }
            Some(Ordering::Equal) => winners.push(*seat),
            Some(Ordering::Less) => {}
        }
    }

    winners.sort();
    winners
}

/// Finds the best hand for each seat and the seats that win the showdown.
///
/// Returns an error if the seats hole cards and the board are not all distinct
/// cards.
pub fn find_table_winners<'a, S>(
    board: &[Card],
    holdings: impl IntoIterator<Item = (&'a S, &'a [Card; 2])>,
) -> Result<Vec<S>, EvalError>
where
    S: Copy + Ord + 'a,
{
    let mut dealt = board.iter().copied().collect::<AHashSet<_>>();

    let mut hands = Vec::new();
    for (seat, hole) in holdings {
        for &c in hole {
            if !dealt.insert(c) {
                return Err(EvalError::DuplicateCard(c));
            }
        }

        hands.push((*seat, find_best_hand(hole, board)?));
    }

    Ok(find_winners(hands.iter().map(|(seat, hand)| (seat, hand))))
}
