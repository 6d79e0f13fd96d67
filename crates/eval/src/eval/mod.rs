// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pai Gow hand evaluator.
//!
//! A hand is scored into a [HandValue], a category and a tiebreak vector. The
//! high hand (5 cards) uses the ten standard poker categories, see [HandRank],
//! the low hand (2 cards) is either a pair or a high card, see [LowHandRank].
//!
//! Values compare by category and then by tiebreaks position by position with
//! the most significant value first, a missing position compares as zero.
use paigow_cards::{Card, Rank};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use crate::EvalError;

mod best;
mod five;
mod two;

const MAX_TIEBREAKS: usize = 5;

/// The value of an evaluated hand.
///
/// The derived ordering compares the category first and then the zero padded
/// tiebreaks, tiebreak values are card values (2..=14) so the padding never
/// collides with a real value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandValue {
    category: u8,
    tiebreaks: [u8; MAX_TIEBREAKS],
}

impl HandValue {
    /// Maximum tiebreak vector length.
    pub const MAX_TIEBREAKS: usize = MAX_TIEBREAKS;

    /// Creates a hand value, tiebreaks past [Self::MAX_TIEBREAKS] are dropped.
    pub fn new(category: u8, tiebreaks: &[u8]) -> Self {
        let mut padded = [0; MAX_TIEBREAKS];
        for (dst, &src) in padded.iter_mut().zip(tiebreaks) {
            *dst = src;
        }

        Self {
            category,
            tiebreaks: padded,
        }
    }

    /// Evaluates a 5 cards high hand with at most one Joker.
    ///
    /// The Joker takes the substitution that gives the strongest hand, an
    /// Ace unless it completes a straight or a flush.
    pub fn eval5(cards: &[Card]) -> Result<Self, EvalError> {
        five::eval5(cards)
    }

    /// Evaluates a 2 cards low hand.
    ///
    /// A Joker always pairs the other card, two Jokers are a pair of Aces.
    pub fn eval2(cards: &[Card]) -> Result<Self, EvalError> {
        two::eval2(cards)
    }

    /// Evaluates the best 5 cards hand out of 7 cards.
    pub fn best_of_7(cards: &[Card]) -> Result<Self, EvalError> {
        best::best_of_7(cards).map(|(value, _)| value)
    }

    /// Evaluates the best 5 cards hand out of 7 cards and returns the five
    /// cards that make it.
    pub fn best_of_7_with_hand(cards: &[Card]) -> Result<(Self, Vec<Card>), EvalError> {
        best::best_of_7(cards)
    }

    /// The hand category, larger is stronger.
    pub fn category(&self) -> u8 {
        self.category
    }

    /// The tiebreaks values, most significant first.
    pub fn tiebreaks(&self) -> &[u8] {
        let len = self
            .tiebreaks
            .iter()
            .rposition(|&t| t != 0)
            .map_or(0, |pos| pos + 1);
        &self.tiebreaks[..len]
    }

    /// The high hand rank for this value.
    pub fn rank(&self) -> Option<HandRank> {
        HandRank::from_category(self.category)
    }

    /// The low hand rank for this value.
    pub fn low_rank(&self) -> Option<LowHandRank> {
        LowHandRank::from_category(self.category)
    }

    /// Describes this value as a high hand, for example "Full House".
    pub fn describe_high(&self) -> String {
        self.rank()
            .map(|r| r.to_string())
            .unwrap_or_else(|| "Unknown".to_string())
    }

    /// Describes this value as a low hand, for example "Pair of Sevens" or
    /// "High Card A".
    pub fn describe_low(&self) -> String {
        let top = self.tiebreaks.first().copied().and_then(Rank::from_value);
        match (self.low_rank(), top) {
            (Some(LowHandRank::Pair), Some(rank)) => format!("Pair of {}", plural(rank)),
            (Some(LowHandRank::HighCard), Some(rank)) => format!("High Card {rank}"),
            _ => "Unknown".to_string(),
        }
    }
}

fn plural(rank: Rank) -> &'static str {
    match rank {
        Rank::Deuce => "Deuces",
        Rank::Trey => "Treys",
        Rank::Four => "Fours",
        Rank::Five => "Fives",
        Rank::Six => "Sixes",
        Rank::Seven => "Sevens",
        Rank::Eight => "Eights",
        Rank::Nine => "Nines",
        Rank::Ten => "Tens",
        Rank::Jack => "Jacks",
        Rank::Queen => "Queens",
        Rank::King => "Kings",
        Rank::Ace => "Aces",
    }
}

/// Compares two 5 cards hands.
pub fn compare5(a: &[Card], b: &[Card]) -> Result<Ordering, EvalError> {
    Ok(HandValue::eval5(a)?.cmp(&HandValue::eval5(b)?))
}

/// Compares two 2 cards hands.
pub fn compare2(a: &[Card], b: &[Card]) -> Result<Ordering, EvalError> {
    Ok(HandValue::eval2(a)?.cmp(&HandValue::eval2(b)?))
}

/// High hand categories.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 1,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
    /// Royal flush.
    RoyalFlush,
}

impl HandRank {
    /// Returns all ranks from the weakest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
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

    /// The rank for a high hand category.
    pub fn from_category(category: u8) -> Option<HandRank> {
        Self::ranks().find(|r| r.category() == category)
    }

    /// The category number of this rank.
    pub fn category(self) -> u8 {
        self as u8
    }

    /// The camel case key for this rank, as used in paytables.
    pub fn key(self) -> &'static str {
        match self {
            HandRank::HighCard => "highCard",
            HandRank::OnePair => "onePair",
            HandRank::TwoPair => "twoPair",
            HandRank::ThreeOfAKind => "threeOfAKind",
            HandRank::Straight => "straight",
            HandRank::Flush => "flush",
            HandRank::FullHouse => "fullHouse",
            HandRank::FourOfAKind => "fourOfAKind",
            HandRank::StraightFlush => "straightFlush",
            HandRank::RoyalFlush => "royalFlush",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        };

        write!(f, "{name}")
    }
}

/// Low hand categories.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LowHandRank {
    /// High card.
    HighCard = 1,
    /// Pair.
    Pair = 2,
}

impl LowHandRank {
    /// The rank for a low hand category.
    pub fn from_category(category: u8) -> Option<LowHandRank> {
        match category {
            1 => Some(LowHandRank::HighCard),
            2 => Some(LowHandRank::Pair),
            _ => None,
        }
    }

    /// The category number of this rank.
    pub fn category(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for LowHandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LowHandRank::HighCard => write!(f, "High Card"),
            LowHandRank::Pair => write!(f, "Pair"),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Parses a space separated list of cards.
    pub fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn value_ordering() {
        let a = HandValue::new(2, &[7, 13, 9, 4]);
        let b = HandValue::new(2, &[7, 13, 9, 3]);
        let c = HandValue::new(3, &[2, 2, 3]);
        assert!(a > b);
        assert!(c > a);
        assert_eq!(a.cmp(&a), Ordering::Equal);

        // Missing positions compare as zero.
        assert!(HandValue::new(2, &[7]) < HandValue::new(2, &[7, 3]));
        assert_eq!(HandValue::new(2, &[7]), HandValue::new(2, &[7, 0]));
    }

    #[test]
    fn value_tiebreaks() {
        let v = HandValue::new(5, &[5]);
        assert_eq!(v.category(), 5);
        assert_eq!(v.tiebreaks(), &[5]);
        assert_eq!(v.rank(), Some(HandRank::Straight));

        let v = HandValue::new(1, &[14, 12, 9, 5, 3]);
        assert_eq!(v.tiebreaks(), &[14, 12, 9, 5, 3]);
        assert_eq!(HandValue::new(1, &[]).tiebreaks(), &[] as &[u8]);
    }

    #[test]
    fn rank_categories() {
        assert!(HandRank::ranks().all(|r| HandRank::from_category(r.category()) == Some(r)));
        assert_eq!(HandRank::RoyalFlush.category(), 10);
        assert_eq!(HandRank::HighCard.category(), 1);
        assert_eq!(HandRank::from_category(0), None);
        assert_eq!(HandRank::from_category(11), None);
        assert_eq!(HandRank::FullHouse.to_string(), "Full House");
        assert_eq!(HandRank::ThreeOfAKind.key(), "threeOfAKind");
        assert_eq!(LowHandRank::from_category(2), Some(LowHandRank::Pair));
        assert_eq!(LowHandRank::from_category(3), None);
    }

    #[test]
    fn descriptions() {
        let v = HandValue::eval5(&cards("6C 6D 6H 9S 9C")).unwrap();
        assert_eq!(v.describe_high(), "Full House");

        let v = HandValue::eval2(&cards("7C Joker")).unwrap();
        assert_eq!(v.describe_low(), "Pair of Sevens");

        let v = HandValue::eval2(&cards("QD AS")).unwrap();
        assert_eq!(v.describe_low(), "High Card A");

        let v = HandValue::eval2(&cards("Joker Joker")).unwrap();
        assert_eq!(v.describe_low(), "Pair of Aces");
    }

    #[test]
    fn compare_hands() {
        let royal = cards("10S JS QS KS AS");
        let wheel = cards("2C 3D 4H 5S AC");
        assert_eq!(compare5(&royal, &wheel), Ok(Ordering::Greater));
        assert_eq!(compare5(&wheel, &royal), Ok(Ordering::Less));
        assert_eq!(compare5(&wheel, &wheel), Ok(Ordering::Equal));

        assert_eq!(
            compare2(&cards("7C Joker"), &cards("7D 7H")),
            Ok(Ordering::Equal)
        );
        assert_eq!(
            compare2(&cards("AC KD"), &cards("2C 2D")),
            Ok(Ordering::Less)
        );
        assert!(compare2(&royal, &wheel).is_err());
    }
}
