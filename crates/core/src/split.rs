// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Splitting 7 cards into a low and a high hand.
use paigow_eval::{Card, EvalError, HandValue};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{error::GameError, round::is_foul};

/// A 7 cards hand set as a 2 cards low hand and a 5 cards high hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arrangement {
    low: [Card; 2],
    high: [Card; 5],
}

impl Arrangement {
    /// Creates an arrangement.
    pub fn new(low: [Card; 2], high: [Card; 5]) -> Self {
        Self { low, high }
    }

    /// Creates an arrangement from slices, fails unless the low hand has 2
    /// cards and the high hand 5.
    pub fn from_slices(low: &[Card], high: &[Card]) -> Result<Self, GameError> {
        let incomplete = || GameError::IncompleteSplit {
            low: low.len(),
            high: high.len(),
        };

        Ok(Self {
            low: low.try_into().map_err(|_| incomplete())?,
            high: high.try_into().map_err(|_| incomplete())?,
        })
    }

    /// The 2 cards low hand.
    pub fn low(&self) -> &[Card; 2] {
        &self.low
    }

    /// The 5 cards high hand.
    pub fn high(&self) -> &[Card; 5] {
        &self.high
    }

    /// All 7 cards, low hand first.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.low.iter().chain(self.high.iter()).copied()
    }

    /// Evaluates the low and high hands.
    pub fn eval(&self) -> Result<(HandValue, HandValue), EvalError> {
        Ok((HandValue::eval2(&self.low)?, HandValue::eval5(&self.high)?))
    }

    /// Checks if the low hand fouls the high hand.
    pub fn is_foul(&self) -> Result<bool, EvalError> {
        let (low, high) = self.eval()?;
        Ok(is_foul(&low, &high))
    }

    /// Checks if this arrangement uses exactly the given cards.
    pub fn is_split_of(&self, cards: &[Card]) -> bool {
        let mut mine = self.cards().map(|c| c.id()).collect::<Vec<_>>();
        let mut theirs = cards.iter().map(|c| c.id()).collect::<Vec<_>>();
        mine.sort_unstable();
        theirs.sort_unstable();
        mine == theirs
    }
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |cards: &[Card]| {
            cards
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };

        write!(f, "[{}] [{}]", join(&self.low), join(&self.high))
    }
}

/// A player split being set card by card.
///
/// All cards start in the high hand, cards are moved to the low hand until it
/// holds two cards.
#[derive(Debug, Clone)]
pub struct PlayerSplit {
    hand: Vec<Card>,
    low: Vec<Card>,
}

impl PlayerSplit {
    /// Starts a split for the given hand.
    pub fn new(hand: &[Card]) -> Self {
        Self {
            hand: hand.to_vec(),
            low: Vec::with_capacity(2),
        }
    }

    /// Moves a card to the low hand.
    pub fn move_to_low(&mut self, card: Card) -> Result<(), GameError> {
        if !self.hand.contains(&card) {
            return Err(GameError::CardNotInHand(card));
        }

        if self.low.contains(&card) {
            return Ok(());
        }

        if self.low.len() == 2 {
            return Err(GameError::LowHandFull);
        }

        self.low.push(card);
        Ok(())
    }

    /// Moves a card back to the high hand.
    pub fn move_to_high(&mut self, card: Card) -> Result<(), GameError> {
        if !self.hand.contains(&card) {
            return Err(GameError::CardNotInHand(card));
        }

        self.low.retain(|c| c != &card);
        Ok(())
    }

    /// The cards in the low hand.
    pub fn low(&self) -> &[Card] {
        &self.low
    }

    /// The cards in the high hand.
    pub fn high(&self) -> Vec<Card> {
        self.hand
            .iter()
            .filter(|c| !self.low.contains(c))
            .copied()
            .collect()
    }

    /// Evaluates the hands that are complete, for live feedback while the
    /// split is being set.
    pub fn preview(&self) -> (Option<HandValue>, Option<HandValue>) {
        let high = self.high();
        (
            HandValue::eval2(&self.low).ok(),
            HandValue::eval5(&high).ok(),
        )
    }

    /// Completes the split.
    pub fn finish(&self) -> Result<Arrangement, GameError> {
        Arrangement::from_slices(&self.low, &self.high())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Parses a space separated list of cards.
    pub fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    /// Creates an arrangement from two lists of cards.
    pub fn split(low: &str, high: &str) -> Arrangement {
        Arrangement::from_slices(&cards(low), &cards(high)).unwrap()
    }

    #[test]
    fn from_slices() {
        let a = split("AC KD", "2C 3C 4C 5C 6C");
        assert_eq!(a.low(), &[cards("AC")[0], cards("KD")[0]]);
        assert_eq!(a.cards().count(), 7);
        assert_eq!(a.to_string(), "[AC KD] [2C 3C 4C 5C 6C]");

        assert_eq!(
            Arrangement::from_slices(&cards("AC"), &cards("2C 3C 4C 5C 6C KD")),
            Err(GameError::IncompleteSplit { low: 1, high: 6 })
        );
    }

    #[test]
    fn split_of() {
        let a = split("AC KD", "2C 3C 4C 5C Joker");
        assert!(a.is_split_of(&cards("Joker 5C 4C 3C 2C KD AC")));
        assert!(!a.is_split_of(&cards("Joker 5C 4C 3C 2C KD AD")));
        assert!(!a.is_split_of(&cards("5C 4C 3C 2C KD AC")));
    }

    #[test]
    fn foul_split() {
        assert!(split("AC AD", "2C 3D 7H 9S KC").is_foul().unwrap());
        assert!(!split("2C 3D", "AC AD 7H 9S KC").is_foul().unwrap());
    }

    #[test]
    fn player_split() {
        let hand = cards("AC KD 2C 3C 4C 5C 6C");
        let mut split = PlayerSplit::new(&hand);

        assert_eq!(
            split.finish(),
            Err(GameError::IncompleteSplit { low: 0, high: 7 })
        );

        split.move_to_low(hand[0]).unwrap();
        assert_eq!(split.preview(), (None, None));
        split.move_to_low(hand[1]).unwrap();
        assert_eq!(split.move_to_low(hand[2]), Err(GameError::LowHandFull));

        let ten = cards("10S")[0];
        assert_eq!(split.move_to_low(ten), Err(GameError::CardNotInHand(ten)));

        let (low, high) = split.preview();
        assert_eq!(low.and_then(|v| v.low_rank()), Some(paigow_eval::LowHandRank::HighCard));
        assert_eq!(high.and_then(|v| v.rank()), Some(paigow_eval::HandRank::StraightFlush));

        let arrangement = split.finish().unwrap();
        assert!(arrangement.is_split_of(&hand));
        assert_eq!(arrangement.low(), &[hand[0], hand[1]]);

        split.move_to_high(hand[0]).unwrap();
        assert_eq!(split.low(), &[hand[1]]);
        assert_eq!(split.high().len(), 6);
    }
}
