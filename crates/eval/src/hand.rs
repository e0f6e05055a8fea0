// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hands classification and ranking.
//!
//! A [Hand] is built from exactly five cards, it stores the hand category, two
//! kickers, and the five cards sorted by face. Hands are totally ordered using
//! the Texas Hold'em rules: the category decides first, then the kickers, and
//! then all the cards faces from the highest down. Suits never break ties.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, str::FromStr};

use showdown_cards::{Card, Face, parse_cards};

use crate::{EvalError, check_cards};

/// A hand category, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// No pairs, no straight or flush.
    HighCard = 0,
    /// Two cards of the same face.
    Pair,
    /// Two different pairs.
    TwoPair,
    /// Three cards of the same face.
    ThreeOfAKind,
    /// Five consecutive faces.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same face.
    FourOfAKind,
    /// A straight with all cards of the same suit.
    StraightFlush,
    /// Ten to ace straight flush.
    RoyalFlush,
}

impl HandRank {
    /// Returns all the categories from the weakest to the strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            Pair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HandRank::HighCard => "high card",
            HandRank::Pair => "pair",
            HandRank::TwoPair => "two pair",
            HandRank::ThreeOfAKind => "three of a kind",
            HandRank::Straight => "straight",
            HandRank::Flush => "flush",
            HandRank::FullHouse => "full house",
            HandRank::FourOfAKind => "four of a kind",
            HandRank::StraightFlush => "straight flush",
            HandRank::RoyalFlush => "royal flush",
        };

        write!(f, "{s}")
    }
}

/// A classified five cards hand.
///
/// The kickers meaning depends on the category:
///
/// | Category            | kicker0                | kicker1                 |
/// |---------------------|------------------------|-------------------------|
/// | high card, flush    | highest face           | second highest face     |
/// | pair                | pair face              | highest unpaired face   |
/// | two pair            | higher pair face       | lower pair face         |
/// | three of a kind     | trips face             | highest remaining face  |
/// | straight (flush)    | top of the run         | second card of the run  |
/// | full house          | trips face             | pair face               |
/// | four of a kind      | quads face             | quads face              |
///
/// The top of an ace-low straight (the wheel) is the five, not the ace.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Hand {
    rank: HandRank,
    kickers: [Face; 2],
    cards: [Card; 5],
}

impl Hand {
    /// Classifies five cards.
    ///
    /// This function is total, it doesn't check for duplicate cards or jokers,
    /// use [Hand::from_cards] to validate the cards.
    pub fn new(mut cards: [Card; 5]) -> Hand {
        // Stable sort, cards with the same face keep their order.
        cards.sort_by_key(Card::face);

        let faces = cards.map(|c| c.face());
        let flushed = match cards[0].suit() {
            Some(suit) => cards.iter().all(|c| c.suit() == Some(suit)),
            None => false,
        };

        if is_straight(&cards) {
            let kickers = if is_wheel(&faces) {
                [faces[3], faces[2]]
            } else {
                [faces[4], faces[3]]
            };

            let rank = match (flushed, faces[0]) {
                (true, Face::Ten) => HandRank::RoyalFlush,
                (true, _) => HandRank::StraightFlush,
                _ => HandRank::Straight,
            };

            return Hand {
                rank,
                kickers,
                cards,
            };
        }

        let mut counts = [0u8; 16];
        for f in faces {
            counts[f as usize] += 1;
        }

        // Distinct faces with the given count from the highest down.
        let with_count = |n: u8| {
            let mut group = faces
                .iter()
                .rev()
                .copied()
                .filter(|f| counts[*f as usize] == n)
                .collect::<Vec<_>>();
            group.dedup();
            group
        };

        let pairs = with_count(2);
        let trips = with_count(3).first().copied();
        let single = with_count(1).first().copied();
        let quads = faces.iter().rev().find(|f| counts[**f as usize] >= 4);

        let (rank, kickers) = match (quads, trips, pairs.as_slice()) {
            (Some(&q), _, _) => (HandRank::FourOfAKind, [q, q]),
            (_, Some(t), [p, ..]) => (HandRank::FullHouse, [t, *p]),
            (_, Some(t), []) => (HandRank::ThreeOfAKind, [t, single.unwrap_or(t)]),
            (_, _, [p0, p1, ..]) => (HandRank::TwoPair, [*p0, *p1]),
            (_, _, [p]) => (HandRank::Pair, [*p, single.unwrap_or(*p)]),
            _ if flushed => (HandRank::Flush, [faces[4], faces[3]]),
            _ => (HandRank::HighCard, [faces[4], faces[3]]),
        };

        Hand {
            rank,
            kickers,
            cards,
        }
    }

    /// Classifies five cards checking that there are exactly five distinct
    /// cards and no jokers.
    pub fn from_cards(cards: &[Card]) -> Result<Hand, EvalError> {
        let cards: [Card; 5] = cards.try_into().map_err(|_| EvalError::CardCount {
            expected: 5,
            found: cards.len(),
        })?;

        check_cards(&cards)?;
        Ok(Hand::new(cards))
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The first kicker.
    pub fn kicker0(&self) -> Face {
        self.kickers[0]
    }

    /// The second kicker.
    pub fn kicker1(&self) -> Face {
        self.kickers[1]
    }

    /// The hand cards sorted by face.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    /// Checks if this is an ace-low straight or straight flush.
    pub fn is_wheel(&self) -> bool {
        matches!(self.rank, HandRank::Straight | HandRank::StraightFlush)
            && is_wheel(&self.cards.map(|c| c.face()))
    }

    /// The cards faces from the highest down.
    fn faces_desc(&self) -> impl Iterator<Item = Face> + '_ {
        self.cards.iter().rev().map(Card::face)
    }
}

/// Checks if five cards sorted by face are a run of consecutive faces.
///
/// The only run that wraps is the ace-low straight A-2-3-4-5, K-A-2-3-4 is not a
/// straight.
pub fn is_straight(cards: &[Card; 5]) -> bool {
    if cards[4].is_joker() {
        return false;
    }

    (1..5).all(|i| {
        let (prev, next) = (cards[i - 1].face().value(), cards[i].face().value());
        next == prev + 1
            || (i == 4 && cards[4].face() == Face::Ace && cards[0].face() == Face::Deuce)
    })
}

fn is_wheel(faces: &[Face; 5]) -> bool {
    faces[0] == Face::Deuce && faces[4] == Face::Ace
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank).then_with(|| match self.rank {
            // The kickers cannot separate two flushes, use all the cards.
            HandRank::Flush => self.faces_desc().cmp(other.faces_desc()),
            _ if self.is_wheel() && other.is_wheel() => Ordering::Equal,
            _ => self
                .kickers
                .cmp(&other.kickers)
                .then_with(|| self.faces_desc().cmp(other.faces_desc())),
        })
    }
}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Hand {}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.cards {
            write!(f, "{c}")?;
        }

        Ok(())
    }
}

impl FromStr for Hand {
    type Err = EvalError;

    /// Parses a hand from its cards, i.e. `"2d5s6sjhac"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hand::from_cards(&parse_cards(s)?)
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = EvalError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Hand::from_cards(&cards)
    }
}

impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.cards.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
    use showdown_cards::Deck;

    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    #[test]
    fn classify_high_card() {
        let h = hand("ac5s2djh6s");
        assert_eq!(h.rank(), HandRank::HighCard);
        assert_eq!(h.kicker0(), Face::Ace);
        assert_eq!(h.kicker1(), Face::Jack);
        assert_eq!(h.cards().as_slice(), parse_cards("2d5s6sjhac").unwrap());
        assert_eq!(h.to_string(), "2d5s6sjhac");
    }

    #[test]
    fn classify_pair() {
        let h = hand("2c5h5sjcad");
        assert_eq!(h.rank(), HandRank::Pair);
        assert_eq!(h.kicker0(), Face::Five);
        assert_eq!(h.kicker1(), Face::Ace);

        // The pair is the top two cards.
        let h = hand("2c5h9sacad");
        assert_eq!(h.rank(), HandRank::Pair);
        assert_eq!(h.kicker0(), Face::Ace);
        assert_eq!(h.kicker1(), Face::Nine);
    }

    #[test]
    fn classify_flush() {
        let h = hand("2c4c7ctcqc");
        assert_eq!(h.rank(), HandRank::Flush);
        assert_eq!(h.kicker0(), Face::Queen);
        assert_eq!(h.kicker1(), Face::Ten);
    }

    #[test]
    fn classify_kickers() {
        let cases = [
            ("3h3d6c6hks", HandRank::TwoPair, Face::Six, Face::Trey),
            ("5sqhqcqdad", HandRank::ThreeOfAKind, Face::Queen, Face::Ace),
            ("8h8d8ckhks", HandRank::FullHouse, Face::Eight, Face::King),
            ("khkd8c8h8s", HandRank::FullHouse, Face::Eight, Face::King),
            ("4dahadacas", HandRank::FourOfAKind, Face::Ace, Face::Ace),
            ("7c8h9dthjs", HandRank::Straight, Face::Jack, Face::Ten),
            ("ac2h3d4h5s", HandRank::Straight, Face::Five, Face::Four),
            ("4h5h6h7h8h", HandRank::StraightFlush, Face::Eight, Face::Seven),
            ("as2s3s4s5s", HandRank::StraightFlush, Face::Five, Face::Four),
            ("tsjsqsksas", HandRank::RoyalFlush, Face::Ace, Face::King),
        ];

        for (s, rank, k0, k1) in cases {
            let h = hand(s);
            assert_eq!(h.rank(), rank, "{s}");
            assert_eq!(h.kicker0(), k0, "{s}");
            assert_eq!(h.kicker1(), k1, "{s}");
        }
    }

    #[test]
    fn straight_detection() {
        let sorted = |s: &str| Hand::from_str(s).unwrap().cards;

        assert!(is_straight(&sorted("2c3d4h5s6s")));
        assert!(is_straight(&sorted("ac2h3d4h5s")));
        assert!(is_straight(&sorted("tsjsqsksas")));
        assert!(!is_straight(&sorted("ksac2h3d4h")));
        assert!(!is_straight(&sorted("2c3d4h5s7s")));
        assert!(!is_straight(&sorted("2c3d4h6sas")));
    }

    #[test]
    fn classify_keeps_caller_cards() {
        let cards = parse_cards("ac5s2djh6s").unwrap();
        let h = Hand::from_cards(&cards).unwrap();
        assert_eq!(cards, parse_cards("ac5s2djh6s").unwrap());
        assert_eq!(h.to_string(), "2d5s6sjhac");
    }

    #[test]
    fn hand_ranking() {
        let hands = [
            "2d5s6sjhac",
            "2c5h5sjcad",
            "3h3d6c6hks",
            "5sqhqcqdad",
            "7c8h9dthjs",
            "2c4c7ctcqc",
            "8h8d8ckhks",
            "4dahadacas",
            "4h5h6h7h8h",
            "tsjsqsksas",
        ];

        let mut ranked = hands.iter().map(|s| hand(s)).collect::<Vec<_>>();
        for (h, rank) in ranked.iter().zip(HandRank::ranks()) {
            assert_eq!(h.rank(), rank, "expected {rank}, found {}", h.rank());
        }

        ranked.shuffle(&mut StdRng::seed_from_u64(11));
        ranked.sort();

        for (h, s) in ranked.iter().zip(hands) {
            assert_eq!(h.to_string(), s);
        }
    }

    #[test]
    fn wheel_ordering() {
        let w1 = hand("ac2h3d4h5s");
        let w2 = hand("as2s3d4h5s");
        assert!(w1.is_wheel());
        assert_eq!(w1, w2);
        assert!(w1 < hand("3d4h5s6s7s"));
        assert!(w1 > hand("kcqh9d4h5s"));

        // Steel wheels.
        let sf1 = hand("as2s3s4s5s");
        let sf2 = hand("ad2d3d4d5d");
        assert_eq!(sf1, sf2);
        assert!(sf1 < hand("2h3h4h5h6h"));
        assert!(sf1 > hand("ahadacas5s"));
    }

    #[test]
    fn flush_ties() {
        let f = hand("2c4c7ctcqc");
        assert_eq!(f, hand("2h4h7hthqh"));
        assert!(f < hand("3h4h7hthqh"));
        assert!(hand("3h4h7hthqh") > f);

        // Same top two cards, the third card decides.
        assert!(hand("2c4c8ctcqc") > hand("2h5h7hthqh"));
    }

    #[test]
    fn kicker_ties() {
        // Highest differing card decides.
        assert!(hand("ahkd9c5s2h") > hand("askc8d7h6c"));
        assert!(hand("2c5h5sjcad") < hand("3c5d5cjhah"));
        assert!(hand("khkd8c8h3s") > hand("kskc8d8s2h"));
        assert!(hand("5sqhqcqdad") > hand("4sqhqcqdad"));
        assert!(hand("ahadacas2c") < hand("ahadacaskc"));
        assert!(hand("9h9d9ckhks") < hand("thtdtc2h2s"));

        // Suits are ignored.
        assert_eq!(hand("ahkd9c5s2h"), hand("ackh9s5d2c"));
        assert_eq!(hand("khkd8c8h3s"), hand("kskc8d8s3h"));
    }

    #[test]
    fn order_is_total() {
        let mut rng = StdRng::seed_from_u64(19);
        let mut hands = Vec::new();
        for _ in 0..300 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            hands.push(Hand::from_cards(&deck.draw(5).unwrap()).unwrap());
        }

        for a in &hands {
            for b in &hands {
                let outcomes = [a == b, a < b, b < a];
                assert_eq!(outcomes.iter().filter(|o| **o).count(), 1, "{a} {b}");
            }
        }
    }

    #[test]
    fn all_five_cards_hands() {
        let mut counts = [0usize; 10];

        Deck::default().for_each(5, |cards| {
            let h = Hand::from_cards(cards).unwrap();
            counts[h.rank() as usize] += 1;

            // Classifying the sorted contents gives the same hand.
            let again = Hand::new(h.cards);
            assert_eq!(again.cards, h.cards);
            assert_eq!(again.rank, h.rank);
            assert_eq!(again.kickers, h.kickers);

            if h.rank() == HandRank::HighCard {
                assert!(h.kicker0() > h.kicker1());
                assert_eq!(h.kicker0(), h.cards[4].face());
                assert_eq!(h.kicker1(), h.cards[3].face());
            }
        });

        assert_eq!(
            counts,
            [1_302_540, 1_098_240, 123_552, 54_912, 10_200, 5_108, 3_744, 624, 36, 4]
        );
    }

    #[test]
    fn invalid_hands() {
        assert!(matches!(
            "2d5s6sjh".parse::<Hand>(),
            Err(EvalError::CardCount {
                expected: 5,
                found: 4
            })
        ));
        assert!(matches!(
            "2d5s6sjhacad".parse::<Hand>(),
            Err(EvalError::CardCount {
                expected: 5,
                found: 6
            })
        ));
        assert!(matches!(
            "2d5s6sjh2d".parse::<Hand>(),
            Err(EvalError::DuplicateCard(c)) if c.to_string() == "2d"
        ));
        assert!(matches!(
            "2d5s6sjhjk".parse::<Hand>(),
            Err(EvalError::Joker)
        ));
        assert!(matches!(
            "2d5s6sjhax".parse::<Hand>(),
            Err(EvalError::Card(_))
        ));
    }

    #[test]
    fn serde_round_trip() {
        let h = hand("ac5s2djh6s");
        let json = serde_json::to_string(&h).unwrap();
        let de = serde_json::from_str::<Hand>(&json).unwrap();
        assert_eq!(de, h);
        assert_eq!(de.cards(), h.cards());
        assert_eq!(de.kicker1(), Face::Jack);

        let cards = parse_cards("ac5s2d").unwrap();
        let json = serde_json::to_string(&cards).unwrap();
        assert!(serde_json::from_str::<Hand>(&json).is_err());

        // Card ids that don't encode a face are rejected before classifying.
        assert!(serde_json::from_str::<Hand>("[0,4,8,12,16]").is_err());
        assert!(serde_json::from_str::<Hand>("[8,12,16,20,255]").is_err());

        // Duplicate cards and jokers are rejected.
        assert!(serde_json::from_str::<Hand>("[8,8,16,20,24]").is_err());
        assert!(serde_json::from_str::<Hand>("[8,12,16,20,60]").is_err());
    }

    #[test]
    fn classify_unchecked_cards() {
        let aces = Hand::new(["as".parse::<Card>().unwrap(); 5]);
        assert_eq!(aces.rank(), HandRank::FourOfAKind);
        assert_eq!(aces.kicker0(), Face::Ace);
        assert_eq!(aces.kicker1(), Face::Ace);

        let jokers = Hand::new([Card::joker(); 5]);
        assert_eq!(jokers.rank(), HandRank::FourOfAKind);
        assert_eq!(jokers.kicker0(), Face::Joker);
        assert_eq!(jokers.to_string(), "jkjkjkjkjk");

        // A joker never makes a flush or a straight.
        let mut cards = parse_cards("2c3c4c5c").unwrap();
        cards.push(Card::joker());
        let h = Hand::new(cards.try_into().unwrap());
        assert_eq!(h.rank(), HandRank::HighCard);
        assert_eq!(h.kicker0(), Face::Joker);
        assert_eq!(h.kicker1(), Face::Five);

        let h = Hand::new(parse_cards("jk2h2d9s9c").unwrap().try_into().unwrap());
        assert_eq!(h.rank(), HandRank::TwoPair);
        assert_eq!(h.cards()[4], Card::joker());
    }
}
