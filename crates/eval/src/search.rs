// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best hand search.
use showdown_cards::{Card, for_each_subset};

use crate::{EvalError, Hand, check_cards};

/// Finds the best five cards hand out of five, six, or seven cards.
///
/// All the five cards subsets are ranked, when more than one subset has the
/// best rank the first one found is returned.
pub fn best_hand(cards: &[Card]) -> Result<Hand, EvalError> {
    if cards.len() < 5 {
        return Err(EvalError::CardCount {
            expected: 5,
            found: cards.len(),
        });
    } else if cards.len() > 7 {
        return Err(EvalError::CardCount {
            expected: 7,
            found: cards.len(),
        });
    }

    check_cards(cards)?;

    let mut best: Option<Hand> = None;
    for_each_subset(cards, 5, |subset| {
        if let Ok(subset) = <[Card; 5]>::try_from(subset) {
            let hand = Hand::new(subset);
            if best.is_none_or(|b| hand > b) {
                best = Some(hand);
            }
        }
    });

    best.ok_or(EvalError::CardCount {
        expected: 5,
        found: cards.len(),
    })
}

/// Finds the best hand for a player with two hole cards and a five cards board.
///
/// The hand is made of both hole cards and three of the board cards, the ten
/// board combinations are ranked and the best one is returned.
pub fn find_best_hand(hole: &[Card], board: &[Card]) -> Result<Hand, EvalError> {
    let &[h0, h1] = hole else {
        return Err(EvalError::CardCount {
            expected: 2,
            found: hole.len(),
        });
    };

    if board.len() != 5 {
        return Err(EvalError::CardCount {
            expected: 5,
            found: board.len(),
        });
    }

    let mut cards = Vec::with_capacity(7);
    cards.extend_from_slice(hole);
    cards.extend_from_slice(board);
    check_cards(&cards)?;

    let mut best: Option<Hand> = None;
    for_each_subset(board, 3, |flop| {
        let hand = Hand::new([h0, h1, flop[0], flop[1], flop[2]]);
        if best.is_none_or(|b| hand > b) {
            best = Some(hand);
        }
    });

    best.ok_or(EvalError::CardCount {
        expected: 5,
        found: board.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HandRank;
    use rand::{SeedableRng, rngs::StdRng};
    use showdown_cards::{Deck, Face, parse_cards};

    fn best(hole: &str, board: &str) -> Hand {
        find_best_hand(&parse_cards(hole).unwrap(), &parse_cards(board).unwrap()).unwrap()
    }

    #[test]
    fn find_best_hands() {
        let cases = [
            ("4h3d", "2sts4c2hac", HandRank::TwoPair),
            ("qc9d", "6h5ckh8c3h", HandRank::HighCard),
            ("kd8d", "6h5ckh8c3h", HandRank::TwoPair),
            ("4d7c", "6h5ckh8c3h", HandRank::Straight),
            ("ah2h", "6h5ckh8c3h", HandRank::Flush),
        ];

        for (hole, board, rank) in cases {
            assert_eq!(best(hole, board).rank(), rank, "{hole} {board}");
        }
    }

    #[test]
    fn both_hole_cards_play() {
        let hole = parse_cards("2c3d").unwrap();
        let board = parse_cards("tsjsqsksas").unwrap();

        // The board alone is a royal flush but the hand must use the hole cards.
        let h = find_best_hand(&hole, &board).unwrap();
        assert_eq!(h.rank(), HandRank::HighCard);
        assert_eq!(h.to_string(), "2c3dqsksas");
        assert!(hole.iter().all(|c| h.cards().contains(c)));

        let mut all = hole.clone();
        all.extend_from_slice(&board);
        assert_eq!(best_hand(&all).unwrap().rank(), HandRank::RoyalFlush);

        // A single ace doesn't make quads with the kings on board.
        let h = best("ah2c", "khkdkcks7s");
        assert_eq!(h.rank(), HandRank::ThreeOfAKind);
        assert_eq!(h.kicker0(), Face::King);
        assert_eq!(h.kicker1(), Face::Ace);
    }

    #[test]
    fn best_hand_is_maximal() {
        let mut rng = StdRng::seed_from_u64(23);

        for _ in 0..200 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let hole = deck.draw(2).unwrap();
            let board = deck.draw(5).unwrap();
            let h = find_best_hand(&hole, &board).unwrap();

            assert!(hole.iter().all(|c| h.cards().contains(c)));
            assert!(h.cards().iter().all(|c| hole.contains(c) || board.contains(c)));

            for_each_subset(&board, 3, |flop| {
                let cards = [hole[0], hole[1], flop[0], flop[1], flop[2]];
                assert!(h >= Hand::from_cards(&cards).unwrap());
            });

            // Any five of the seven cards can only do as well or better.
            let mut all = hole.clone();
            all.extend_from_slice(&board);
            assert!(best_hand(&all).unwrap() >= h);
        }
    }

    #[test]
    fn best_of_five_and_six() {
        let h = best_hand(&parse_cards("2d5s6sjhac").unwrap()).unwrap();
        assert_eq!(h.rank(), HandRank::HighCard);

        let h = best_hand(&parse_cards("2d5s6sjhacjd").unwrap()).unwrap();
        assert_eq!(h.rank(), HandRank::Pair);
        assert_eq!(h.to_string(), "5s6sjhjdac");
    }

    #[test]
    fn invalid_cards() {
        let board = parse_cards("6h5ckh8c3h").unwrap();

        assert!(matches!(
            find_best_hand(&parse_cards("qc").unwrap(), &board),
            Err(EvalError::CardCount {
                expected: 2,
                found: 1
            })
        ));
        assert!(matches!(
            find_best_hand(&parse_cards("qc9d").unwrap(), &board[..4]),
            Err(EvalError::CardCount {
                expected: 5,
                found: 4
            })
        ));
        assert!(matches!(
            find_best_hand(&parse_cards("qc6h").unwrap(), &board),
            Err(EvalError::DuplicateCard(_))
        ));
        assert!(matches!(
            best_hand(&parse_cards("2d5s6sjh").unwrap()),
            Err(EvalError::CardCount { .. })
        ));
        assert!(matches!(
            best_hand(&parse_cards("2d5s6sjhacadas").unwrap()),
            Ok(_)
        ));
        assert!(matches!(
            best_hand(&parse_cards("2d5s6sjhacadas2c").unwrap()),
            Err(EvalError::CardCount {
                expected: 7,
                found: 8
            })
        ));
    }
}
